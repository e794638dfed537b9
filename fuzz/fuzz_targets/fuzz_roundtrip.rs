#![no_main]

use hufflen::{codec, SymbolMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = codec::encode(data, SymbolMode::Bytes).expect("byte mode accepts any input");
    let decoded = codec::decode(&encoded).expect("decode of fresh container failed");
    assert_eq!(decoded, data, "byte roundtrip mismatch");

    // Char mode only applies to valid UTF-8
    if std::str::from_utf8(data).is_ok() {
        let encoded = codec::encode(data, SymbolMode::Chars).expect("valid UTF-8 rejected");
        let decoded = codec::decode(&encoded).expect("decode of fresh container failed");
        assert_eq!(decoded, data, "char roundtrip mismatch");
    }
});
