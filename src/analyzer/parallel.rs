//! Parallel analyzer: chunked frequency counting on scoped threads.
//!
//! Architecture:
//! - Main thread: validate and trim input, split it on symbol boundaries
//! - Worker threads: count one chunk each into a private table
//! - Main thread: merge tables, then build the tree and measure it
//!
//! Only counting is spread across threads. Each merge in the tree build
//! depends on the queue left by the previous one, so that loop stays serial.

use super::{analyze_symbols, summarize};
use crate::error::{Error, Result};
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::symbol::SymbolInput;
use crate::{AnalysisConfig, AnalysisStats, Analyzer};

/// Parallel analyzer implementation
pub struct ParallelAnalyzer {
    config: AnalysisConfig,
}

impl ParallelAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    fn effective_threads(&self) -> usize {
        match self.config.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }
}

impl Analyzer for ParallelAnalyzer {
    fn analyze(&mut self, input: &[u8]) -> Result<AnalysisStats> {
        let num_threads = self.effective_threads();
        let symbols =
            SymbolInput::new(input, self.config.symbol_mode, self.config.trim_whitespace)?;

        let depth = self.config.single_symbol_depth;

        // Small inputs are not worth the thread startup
        if num_threads == 1 || symbols.byte_len() < self.config.parallel_threshold {
            return analyze_symbols(symbols, depth);
        }

        match symbols {
            SymbolInput::Bytes(bytes) => {
                let table =
                    count_chunks(split_bytes(bytes, num_threads), FrequencyTable::from_bytes)?;
                summarize(&table, symbols.byte_len(), depth)
            }
            SymbolInput::Text(text) => {
                let table =
                    count_chunks(split_text(text, num_threads), |c| count_frequencies(c.chars()))?;
                summarize(&table, symbols.byte_len(), depth)
            }
        }
    }
}

/// Count each chunk on its own scoped thread and merge the results
fn count_chunks<C, S, F>(chunks: Vec<C>, count: F) -> Result<FrequencyTable<S>>
where
    C: Send,
    S: Ord + Send,
    F: Fn(C) -> FrequencyTable<S> + Sync,
{
    let count = &count;

    let result = crossbeam::scope(|scope| {
        let handles: Vec<_> =
            chunks.into_iter().map(|chunk| scope.spawn(move |_| count(chunk))).collect();

        let mut table = FrequencyTable::new();
        for handle in handles {
            let partial =
                handle.join().map_err(|_| Error::Internal("Counting thread panicked".to_string()))?;
            table.merge(partial);
        }
        Ok::<_, Error>(table)
    });

    result.map_err(|_| Error::Internal("Thread panicked".to_string()))?
}

/// Split into at most `parts` contiguous chunks of near-equal size
fn split_bytes(bytes: &[u8], parts: usize) -> Vec<&[u8]> {
    let chunk_size = bytes.len().div_ceil(parts.max(1)).max(1);
    bytes.chunks(chunk_size).collect()
}

/// Like [`split_bytes`], but every cut lands on a char boundary
fn split_text(text: &str, parts: usize) -> Vec<&str> {
    let chunk_size = text.len().div_ceil(parts.max(1)).max(1);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + chunk_size).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&text[start..end]);
        start = end;
    }
    chunks
}
