//! codecs/bzip2.rs
//! bzip2 at best compression.

use std::io::Write;

use bzip2::write::BzEncoder;
use bzip2::Compression;

use crate::compression::constants::LEVEL_BZIP2;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

pub struct Bzip2Compressor {
    level: u32,
}

impl Bzip2Compressor {
    pub fn new(level: u32) -> Self {
        // bzip2 block sizes run 1..=9 (x 100 KiB).
        Self { level: level.clamp(1, 9) }
    }
}

impl Default for Bzip2Compressor {
    fn default() -> Self {
        Self::new(LEVEL_BZIP2)
    }
}

impl Compressor for Bzip2Compressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bzip2
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = BzEncoder::new(out, Compression::new(self.level));
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Bzip2, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Bzip2, e))?;
        Ok(())
    }
}
