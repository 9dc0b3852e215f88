//! codecs/zip.rs
//! ZIP container holding a single deflated entry.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::compression::constants::ZIP_ENTRY_NAME;
use crate::compression::types::{Algorithm, CompressionError, Compressor};

#[derive(Default)]
pub struct ZipCompressor;

impl ZipCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for ZipCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zip
    }

    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // ZipWriter needs Seek for the central directory.
        let mut zip = ZipWriter::new(Cursor::new(out));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(input.len() as u64 >= u32::MAX as u64);

        zip.start_file(ZIP_ENTRY_NAME, options)
            .map_err(|e| CompressionError::init(Algorithm::Zip, e))?;
        zip.write_all(input)
            .map_err(|e| CompressionError::process(Algorithm::Zip, e))?;
        zip.finish()
            .map_err(|e| CompressionError::process(Algorithm::Zip, e))?;
        Ok(())
    }
}
