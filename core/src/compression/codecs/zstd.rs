//! src/compression/codecs/zstd.rs
//!
//! Zstandard streaming encoder writing into the caller's buffer.
//!
//! Design notes:
//! - Encoder construction is inside the measured call, same as every other codec.
//! - Errors are mapped into `CompressionError` variants with codec context.

use std::io::Write;

use crate::compression::constants::LEVEL_ZSTD;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    pub fn new(level: i32) -> Self {
        let range = zstd::compression_level_range();
        Self { level: level.clamp(*range.start(), *range.end()) }
    }
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self::new(LEVEL_ZSTD)
    }
}

impl Compressor for ZstdCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zstd
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = zstd::stream::Encoder::new(out, self.level)
            .map_err(|e| CompressionError::init(Algorithm::Zstd, e))?;
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Zstd, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Zstd, e))?;
        Ok(())
    }
}
