//! codecs/deflate.rs
//! Deflate family via flate2: gzip and zlib framings over the same encoder.

use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::compression::constants::LEVEL_DEFLATE;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

pub struct GzipCompressor {
    level: Compression,
}

pub struct ZlibCompressor {
    level: Compression,
}

fn deflate_level(level: u32) -> Compression {
    match level {
        0..=9 => Compression::new(level),
        _ => Compression::default(),
    }
}

impl GzipCompressor {
    pub fn new(level: u32) -> Self {
        Self { level: deflate_level(level) }
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self::new(LEVEL_DEFLATE)
    }
}

impl ZlibCompressor {
    pub fn new(level: u32) -> Self {
        Self { level: deflate_level(level) }
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new(LEVEL_DEFLATE)
    }
}

impl Compressor for GzipCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = GzEncoder::new(out, self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Gzip, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Gzip, e))?;
        Ok(())
    }
}

impl Compressor for ZlibCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zlib
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = ZlibEncoder::new(out, self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Zlib, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Zlib, e))?;
        Ok(())
    }
}
