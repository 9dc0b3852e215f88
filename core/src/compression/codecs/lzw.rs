//! codecs/lzw.rs
//! LZW with LSB-first code packing and 8-bit literals (GIF-style, no TIFF early change).

use weezl::encode::Encoder;
use weezl::BitOrder;

use crate::compression::constants::LZW_LITERAL_WIDTH;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

#[derive(Default)]
pub struct LzwCompressor;

impl LzwCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for LzwCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lzw
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // The encoder keeps its dictionary state, so a fresh one per call.
        let mut enc = Encoder::new(BitOrder::Lsb, LZW_LITERAL_WIDTH);
        let encoded = enc
            .encode(input)
            .map_err(|e| CompressionError::process(Algorithm::Lzw, e))?;
        out.extend_from_slice(&encoded);
        Ok(())
    }
}
