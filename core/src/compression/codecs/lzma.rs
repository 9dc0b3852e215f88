//! codecs/lzma.rs
//! LZMA family via xz2 (liblzma).
//!
//! - `xz`: .xz container, LZMA2 filter, CRC64 check.
//! - `lzma`: legacy .lzma (LZMA_alone) container, raw LZMA1 filter.
//!
//! Both share the preset so their numbers are comparable.

use std::io::Write;

use xz2::stream::{LzmaOptions, Stream};
use xz2::write::XzEncoder;

use crate::compression::constants::LEVEL_XZ_PRESET;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

pub struct XzCompressor {
    preset: u32,
}

pub struct LzmaCompressor {
    preset: u32,
}

impl XzCompressor {
    pub fn new(preset: u32) -> Self {
        Self { preset: preset.min(9) }
    }
}

impl Default for XzCompressor {
    fn default() -> Self {
        Self::new(LEVEL_XZ_PRESET)
    }
}

impl LzmaCompressor {
    pub fn new(preset: u32) -> Self {
        Self { preset: preset.min(9) }
    }
}

impl Default for LzmaCompressor {
    fn default() -> Self {
        Self::new(LEVEL_XZ_PRESET)
    }
}

impl Compressor for XzCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Xz
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = XzEncoder::new(out, self.preset);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Xz, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Xz, e))?;
        Ok(())
    }
}

impl Compressor for LzmaCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lzma
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let options = LzmaOptions::new_preset(self.preset)
            .map_err(|e| CompressionError::init(Algorithm::Lzma, e))?;
        let stream = Stream::new_lzma_encoder(&options)
            .map_err(|e| CompressionError::init(Algorithm::Lzma, e))?;

        let mut enc = XzEncoder::new_stream(out, stream);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Lzma, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Lzma, e))?;
        Ok(())
    }
}
