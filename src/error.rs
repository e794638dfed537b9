use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Input errors
    #[error("Invalid input: no symbols to encode")]
    EmptyAlphabet,

    #[error("Invalid UTF-8 in input at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    // Code construction errors
    #[error("Huffman code length {length} exceeds maximum of 64 bits")]
    CodeTooLong { length: usize },

    // Container errors
    #[error("Invalid container magic: expected \"HUFL\", got {0:02x?}")]
    InvalidMagic([u8; 4]),

    #[error("Unsupported container version: {0}")]
    UnsupportedVersion(u8),

    #[error("Unknown symbol mode: {0}")]
    UnknownSymbolMode(u8),

    #[error("Invalid symbol value in container: 0x{0:x}")]
    InvalidSymbol(u32),

    #[error("Symbol counts overflow 64 bits")]
    CountOverflow,

    #[error("Size mismatch: expected {expected}, got {found}")]
    SizeMismatch { expected: u64, found: u64 },

    #[error("CRC32 mismatch: expected 0x{expected:08x}, got 0x{found:08x}")]
    Crc32Mismatch { expected: u32, found: u32 },

    #[error("Unexpected end of input")]
    UnexpectedEof,

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error reports unusable input rather than an I/O or format failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyAlphabet | Self::InvalidUtf8 { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
