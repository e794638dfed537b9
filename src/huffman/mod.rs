pub mod builder;
pub mod codebook;
pub mod decoder;
pub mod length;
pub mod node;
pub mod queue;

pub use builder::build_tree;
pub use codebook::{Code, Codebook};
pub use decoder::TreeDecoder;
pub use length::{code_lengths, encoding_length, encoding_length_with, SingleSymbolDepth};
pub use node::HuffmanNode;
pub use queue::NodeQueue;
