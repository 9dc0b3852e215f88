//! compression/types.rs
//! Algorithm identifiers, codec errors and the uniform `Compressor` trait.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compression::constants::{codec_ids, labels};

/// Identifier of one registered compression algorithm.
///
/// The discriminant is the stable codec id; declaration order is registry
/// order, which the selector relies on for its tie-break.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Gzip   = codec_ids::GZIP,
    Zlib   = codec_ids::ZLIB,
    Bzip2  = codec_ids::BZIP2,
    Lzw    = codec_ids::LZW,
    Lzma   = codec_ids::LZMA,
    Xz     = codec_ids::XZ,
    Brotli = codec_ids::BROTLI,
    Lz4    = codec_ids::LZ4,
    Zstd   = codec_ids::ZSTD,
    Zip    = codec_ids::ZIP,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Gzip,
        Algorithm::Zlib,
        Algorithm::Bzip2,
        Algorithm::Lzw,
        Algorithm::Lzma,
        Algorithm::Xz,
        Algorithm::Brotli,
        Algorithm::Lz4,
        Algorithm::Zstd,
        Algorithm::Zip,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Gzip   => labels::GZIP,
            Algorithm::Zlib   => labels::ZLIB,
            Algorithm::Bzip2  => labels::BZIP2,
            Algorithm::Lzw    => labels::LZW,
            Algorithm::Lzma   => labels::LZMA,
            Algorithm::Xz     => labels::XZ,
            Algorithm::Brotli => labels::BROTLI,
            Algorithm::Lz4    => labels::LZ4,
            Algorithm::Zstd   => labels::ZSTD,
            Algorithm::Zip    => labels::ZIP,
        }
    }

    pub fn codec_id(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = CompressionError;

    /// Labels are matched case-insensitively, so `zip` and `ZIP` both resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CompressionError::UnknownAlgorithm { label: s.to_string() })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unknown algorithm: {label}")]
    UnknownAlgorithm { label: String },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: Algorithm, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: Algorithm, msg: String },

    #[error("codec {codec} panicked: {msg}")]
    CodecPanicked { codec: Algorithm, msg: String },
}

impl CompressionError {
    pub fn init(codec: Algorithm, err: impl fmt::Display) -> Self {
        CompressionError::CodecInitFailed { codec, msg: err.to_string() }
    }

    pub fn process(codec: Algorithm, err: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: err.to_string() }
    }
}

/// Uniform one-shot codec adapter.
///
/// Implementations must treat `input` as read-only: the same buffer is handed
/// to every adapter concurrently.
pub trait Compressor: Send + Sync {
    /// Algorithm this adapter reports under.
    fn algorithm(&self) -> Algorithm;

    /// Encode all of `input` in one shot, appending the finished stream to `out`.
    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
