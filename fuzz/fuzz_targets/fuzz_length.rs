#![no_main]

use hufflen::huffman::Codebook;
use hufflen::{build_tree, encoding_length_with, FrequencyTable, SingleSymbolDepth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = FrequencyTable::from_bytes(data);
    let Ok(root) = build_tree(&table) else {
        assert!(data.is_empty());
        return;
    };

    assert_eq!(root.weight(), data.len() as u64);
    assert_eq!(root.leaf_count(), table.len());

    let book = Codebook::from_tree(&root).expect("byte alphabet codes fit in 64 bits");
    assert_eq!(book.encoded_bits(&table), encoding_length_with(&root, SingleSymbolDepth::One));
});
