//! Library-wide error type.
//!
//! Every fallible operation in this crate returns [`Result<T>`], so callers
//! never need to guess which of several ad hoc error types a given module
//! raises. Variants span validation, arithmetic, integrity, and resource
//! errors across the whole crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors this crate can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cipher key was not one of the supported sizes.
    #[error("invalid key: expected 128/192/256-bit AES key, got {0} bits")]
    InvalidKey(usize),

    /// A CRC width outside {8, 16, 32} was requested.
    #[error("unsupported CRC width: {0} (must be 8, 16, or 32)")]
    UnsupportedCrcWidth(usize),

    /// A padding scheme rejected its own parameters (e.g. block size 0).
    #[error("invalid padding configuration: {0}")]
    InvalidPadding(&'static str),

    /// The padding bytes at the end of a decrypted block are malformed.
    #[error("bad padding")]
    BadPadding,

    /// A frame did not start with the `CFP1` magic.
    #[error("bad magic: frame does not start with CFP1")]
    BadMagic,

    /// A frame was missing a required TLV record (CHECKSUM or DATA).
    #[error("incomplete frame: missing {0}")]
    IncompleteFrame(&'static str),

    /// A configuration spec failed validation or names an unimplemented codec.
    #[error("unsupported spec: {0}")]
    UnsupportedSpec(&'static str),

    /// A Reed-Solomon code rate fell outside (0, 1).
    #[error("invalid code rate: {0} (must be in (0, 1))")]
    InvalidCodeRate(f64),

    /// A GF(2^8) matrix had no nonzero pivot in some column.
    #[error("singular matrix: no pivot in column {0}")]
    Singular(usize),

    /// Lagrange interpolation was given a repeated evaluation point.
    #[error("duplicate interpolation node")]
    DuplicateNodes,

    /// Two sequences that must have matching lengths did not.
    #[error("size mismatch: expected {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// A block cipher was given input that was not exactly one block.
    #[error("block size mismatch: expected {expected} bytes, got {got}")]
    BlockSizeMismatch { expected: usize, got: usize },

    /// Division by the zero element of GF(2^8).
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    /// A frame's stored checksum disagreed with the recomputed one.
    #[error("checksum mismatch: frame payload or parameters were tampered with")]
    ChecksumMismatch,

    /// Reed-Solomon decode was given fewer valid symbols than `k`.
    #[error("insufficient symbols: need at least {needed}, have {have}")]
    InsufficientSymbols { needed: usize, have: usize },

    /// A Reed-Solomon payload's length was not a multiple of `n`.
    #[error("decode overflow: payload length {0} is not a multiple of the block size")]
    DecodeOverflow(usize),
}
