//! Huffman code construction and encoded-length accounting.
//!
//! The core is three operations, run in order:
//!
//! ```
//! use hufflen::{build_tree, count_frequencies, encoding_length};
//!
//! let frequencies = count_frequencies("aaabbc".chars());
//! let root = build_tree(&frequencies)?;
//! assert_eq!(encoding_length(&root), 9);
//! # Ok::<(), hufflen::Error>(())
//! ```
//!
//! [`Analyzer`] implementations run the same pipeline over raw input and
//! report [`AnalysisStats`]; [`codec`] uses the tree to actually encode.

pub mod analyzer;
pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod symbol;

pub use analyzer::{code_table, parallel::ParallelAnalyzer, single::SingleThreadedAnalyzer};
pub use error::{Error, Result};
pub use frequency::{count_frequencies, FrequencyTable};
pub use huffman::{build_tree, encoding_length, encoding_length_with, HuffmanNode, SingleSymbolDepth};
pub use symbol::{Symbol, SymbolMode};

/// Configuration for analysis
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Alphabet the input is split into
    pub symbol_mode: SymbolMode,
    /// Strip leading and trailing whitespace before counting
    pub trim_whitespace: bool,
    /// Depth charged to the symbol of a single-symbol input
    pub single_symbol_depth: SingleSymbolDepth,
    /// Number of counting threads (0 = auto, 1 = single-threaded)
    pub num_threads: usize,
    /// Inputs smaller than this many bytes are counted on one thread
    pub parallel_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            symbol_mode: SymbolMode::Bytes,
            trim_whitespace: false,
            single_symbol_depth: SingleSymbolDepth::Zero,
            num_threads: 1,
            parallel_threshold: 1024 * 1024,
        }
    }
}

/// Statistics from an analysis
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Bytes analyzed, after trimming
    pub input_bytes: u64,
    /// Symbols in the input
    pub symbol_count: u64,
    /// Distinct symbols (leaves in the tree)
    pub distinct_symbols: usize,
    /// Huffman-encoded size in bits
    pub encoding_length_bits: u64,
    /// Size in bits with a fixed-width code over the same alphabet
    pub fixed_width_bits: u64,
    /// Longest code length
    pub tree_height: usize,
}

impl AnalysisStats {
    /// Encoded size relative to the raw input size (0.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.encoding_length_bits as f64 / (self.input_bytes * 8) as f64
    }

    /// Mean code length in bits per symbol
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoding_length_bits as f64 / self.symbol_count as f64
    }
}

/// Trait for the complete count, build and measure pipeline
pub trait Analyzer {
    /// Analyze raw input bytes
    fn analyze(&mut self, input: &[u8]) -> Result<AnalysisStats>;
}

/// Run the analyzer `config` asks for over `input`
pub fn analyze(input: &[u8], config: &AnalysisConfig) -> Result<AnalysisStats> {
    if config.num_threads == 1 {
        SingleThreadedAnalyzer::new(config.clone()).analyze(input)
    } else {
        ParallelAnalyzer::new(config.clone()).analyze(input)
    }
}

/// Huffman-encoded size of `input` in bits
pub fn huffman_encoding_length(input: &[u8], config: &AnalysisConfig) -> Result<u64> {
    analyze(input, config).map(|stats| stats.encoding_length_bits)
}
