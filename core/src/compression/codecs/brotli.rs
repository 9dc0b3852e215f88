//! codecs/brotli.rs
//! Brotli at max quality.

use std::io::Write;

use brotli::CompressorWriter;

use crate::compression::constants::{BROTLI_BUFFER_SIZE, BROTLI_LGWIN, BROTLI_QUALITY};
use crate::compression::types::{Algorithm, CompressionError, Compressor};

pub struct BrotliCompressor {
    quality: u32,
    lgwin: u32,
}

impl BrotliCompressor {
    pub fn new(quality: u32, lgwin: u32) -> Self {
        Self {
            quality: quality.min(11),
            lgwin: lgwin.clamp(10, 24),
        }
    }
}

impl Default for BrotliCompressor {
    fn default() -> Self {
        Self::new(BROTLI_QUALITY, BROTLI_LGWIN)
    }
}

impl Compressor for BrotliCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brotli
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = CompressorWriter::new(out, BROTLI_BUFFER_SIZE, self.quality, self.lgwin);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Brotli, e))?;
        enc.flush()
            .map_err(|e| CompressionError::process(Algorithm::Brotli, e))?;
        // into_inner() writes the final stream trailer.
        enc.into_inner();
        Ok(())
    }
}
