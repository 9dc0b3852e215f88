//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{
    BrotliCompressor, Bzip2Compressor, GzipCompressor, Lz4Compressor, LzmaCompressor,
    LzwCompressor, XzCompressor, ZipCompressor, ZlibCompressor, ZstdCompressor,
};
use crate::compression::constants::{
    BROTLI_QUALITY, LEVEL_BZIP2, LEVEL_DEFLATE, LEVEL_XZ_PRESET, LEVEL_ZSTD,
};
use crate::compression::types::{Algorithm, Compressor};

/// Static description of a registered codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub algorithm: Algorithm,
    pub backend: &'static str,
    pub default_level: Option<i32>,
}

pub fn describe(algorithm: Algorithm) -> CodecInfo {
    let (backend, default_level) = match algorithm {
        Algorithm::Gzip   => ("flate2", Some(LEVEL_DEFLATE as i32)),
        Algorithm::Zlib   => ("flate2", Some(LEVEL_DEFLATE as i32)),
        Algorithm::Bzip2  => ("bzip2", Some(LEVEL_BZIP2 as i32)),
        Algorithm::Lzw    => ("weezl", None),
        Algorithm::Lzma   => ("xz2", Some(LEVEL_XZ_PRESET as i32)),
        Algorithm::Xz     => ("xz2", Some(LEVEL_XZ_PRESET as i32)),
        Algorithm::Brotli => ("brotli", Some(BROTLI_QUALITY as i32)),
        Algorithm::Lz4    => ("lz4_flex", None),
        Algorithm::Zstd   => ("zstd", Some(LEVEL_ZSTD)),
        Algorithm::Zip    => ("zip", None),
    };
    CodecInfo { algorithm, backend, default_level }
}

/// Build the adapter for `algorithm` at its default effort.
pub fn create_compressor(algorithm: Algorithm) -> Box<dyn Compressor> {
    match algorithm {
        Algorithm::Gzip   => Box::new(GzipCompressor::default()),
        Algorithm::Zlib   => Box::new(ZlibCompressor::default()),
        Algorithm::Bzip2  => Box::new(Bzip2Compressor::default()),
        Algorithm::Lzw    => Box::new(LzwCompressor::new()),
        Algorithm::Lzma   => Box::new(LzmaCompressor::default()),
        Algorithm::Xz     => Box::new(XzCompressor::default()),
        Algorithm::Brotli => Box::new(BrotliCompressor::default()),
        Algorithm::Lz4    => Box::new(Lz4Compressor::new()),
        Algorithm::Zstd   => Box::new(ZstdCompressor::default()),
        Algorithm::Zip    => Box::new(ZipCompressor::new()),
    }
}

/// Ordered set of adapters handed to the orchestrator.
pub struct Registry {
    adapters: Vec<Box<dyn Compressor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { adapters: Vec::new() }
    }

    /// All ten codecs, in `Algorithm::ALL` order.
    pub fn with_defaults() -> Self {
        Self::from_algorithms(&Algorithm::ALL)
    }

    pub fn from_algorithms(algorithms: &[Algorithm]) -> Self {
        let mut registry = Self::new();
        for &algorithm in algorithms {
            registry.register(create_compressor(algorithm));
        }
        registry
    }

    /// Append an adapter. Later registrations of an already-present
    /// algorithm replace the earlier one in place, keeping its slot.
    pub fn register(&mut self, adapter: Box<dyn Compressor>) -> &mut Self {
        let algorithm = adapter.algorithm();
        match self.adapters.iter().position(|a| a.algorithm() == algorithm) {
            Some(idx) => self.adapters[idx] = adapter,
            None => self.adapters.push(adapter),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.adapters.iter().map(|a| a.algorithm()).collect()
    }

    pub fn adapters(&self) -> &[Box<dyn Compressor>] {
        &self.adapters
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
