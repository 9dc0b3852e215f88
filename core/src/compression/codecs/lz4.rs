//! codecs/lz4.rs
//! LZ4 frame format via lz4_flex (pure Rust).

use std::io::Write;

use lz4_flex::frame::FrameEncoder;

use crate::compression::types::{Algorithm, CompressionError, Compressor};

/// lz4_flex exposes no level knob; frames use its default block settings.
#[derive(Default)]
pub struct Lz4Compressor;

impl Lz4Compressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for Lz4Compressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz4
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = FrameEncoder::new(out);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Lz4, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(Algorithm::Lz4, e))?;
        Ok(())
    }
}
