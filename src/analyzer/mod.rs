pub mod parallel;
pub mod single;

use crate::error::Result;
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::huffman::{
    build_tree, code_lengths, encoding_length_with, Codebook, HuffmanNode, SingleSymbolDepth,
};
use crate::symbol::{Symbol, SymbolInput};
use crate::{AnalysisConfig, AnalysisStats};

/// Build the tree for `table` and measure it
pub(crate) fn summarize<S: Ord + Clone>(
    table: &FrequencyTable<S>,
    input_bytes: usize,
    single: SingleSymbolDepth,
) -> Result<AnalysisStats> {
    let root = build_tree(table)?;
    Ok(AnalysisStats {
        input_bytes: input_bytes as u64,
        symbol_count: table.total(),
        distinct_symbols: table.len(),
        encoding_length_bits: encoding_length_with(&root, single),
        fixed_width_bits: fixed_width_bits(table.total(), table.len()),
        tree_height: root.height(),
    })
}

/// Count, build and measure input already prepared for its symbol mode
pub(crate) fn analyze_symbols(
    symbols: SymbolInput<'_>,
    single: SingleSymbolDepth,
) -> Result<AnalysisStats> {
    match symbols {
        SymbolInput::Bytes(bytes) => {
            summarize(&FrequencyTable::from_bytes(bytes), symbols.byte_len(), single)
        }
        SymbolInput::Text(text) => {
            summarize(&count_frequencies(text.chars()), symbols.byte_len(), single)
        }
    }
}

/// Bits for a fixed-width code: every symbol takes `ceil(log2(distinct))` bits
pub fn fixed_width_bits(symbol_count: u64, distinct: usize) -> u64 {
    if distinct == 0 {
        return 0;
    }
    let width = usize::BITS - (distinct - 1).leading_zeros();
    symbol_count * width as u64
}

/// One row of a code table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeEntry {
    /// Printable symbol
    pub label: String,
    pub count: u64,
    /// Code length in bits
    pub length: u32,
    /// Code as a string of '0' and '1' (empty for a 0-bit code)
    pub code: String,
}

/// Per-symbol code table for `input`, in ascending symbol order
pub fn code_table(input: &[u8], config: &AnalysisConfig) -> Result<Vec<CodeEntry>> {
    match SymbolInput::new(input, config.symbol_mode, config.trim_whitespace)? {
        SymbolInput::Bytes(bytes) => {
            table_entries(&FrequencyTable::from_bytes(bytes), config.single_symbol_depth)
        }
        SymbolInput::Text(text) => {
            table_entries(&count_frequencies(text.chars()), config.single_symbol_depth)
        }
    }
}

fn table_entries<S: Symbol>(
    table: &FrequencyTable<S>,
    single: SingleSymbolDepth,
) -> Result<Vec<CodeEntry>> {
    let root: HuffmanNode<S> = build_tree(table)?;
    let lengths = code_lengths(&root, single);
    let book = Codebook::from_tree(&root)?;

    let entries = table
        .iter()
        .map(|(symbol, &count)| {
            let length = lengths.get(symbol).copied().unwrap_or(0);
            let code = match book.get(symbol) {
                Some(code) if length > 0 => code.to_bit_string(),
                _ => String::new(),
            };
            CodeEntry { label: symbol.label(), count, length, code }
        })
        .collect();
    Ok(entries)
}
