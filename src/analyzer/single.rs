use super::analyze_symbols;
use crate::error::Result;
use crate::symbol::SymbolInput;
use crate::{AnalysisConfig, AnalysisStats, Analyzer};

/// Runs every phase on the calling thread
pub struct SingleThreadedAnalyzer {
    config: AnalysisConfig,
}

impl SingleThreadedAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for SingleThreadedAnalyzer {
    fn analyze(&mut self, input: &[u8]) -> Result<AnalysisStats> {
        let symbols =
            SymbolInput::new(input, self.config.symbol_mode, self.config.trim_whitespace)?;
        analyze_symbols(symbols, self.config.single_symbol_depth)
    }
}
