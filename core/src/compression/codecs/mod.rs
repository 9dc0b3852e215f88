//! compression/codecs/mod.rs
//! One thin adapter per backend crate. Each adapter owns its effort level
//! and nothing else; no state is shared between calls.

pub mod brotli;
pub mod bzip2;
pub mod deflate;
pub mod lz4;
pub mod lzma;
pub mod lzw;
pub mod zip;
pub mod zstd;

pub use self::brotli::BrotliCompressor;
pub use self::bzip2::Bzip2Compressor;
pub use self::deflate::{GzipCompressor, ZlibCompressor};
pub use self::lz4::Lz4Compressor;
pub use self::lzma::{LzmaCompressor, XzCompressor};
pub use self::lzw::LzwCompressor;
pub use self::zip::ZipCompressor;
pub use self::zstd::ZstdCompressor;
