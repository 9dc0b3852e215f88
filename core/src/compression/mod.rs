//! compression/mod.rs
//! Codec adapters behind one uniform one-shot `Compressor` trait.
//!
//! Notes:
//! - Every backend is a third-party crate; nothing here implements a compression algorithm.
//! - Adapters write into a caller-owned `Vec<u8>` so buffer allocation stays outside the timed region.
//! - Registry maps algorithms to adapters in a fixed order.

pub mod codecs;
pub mod constants;
pub mod registry;
pub mod types;

pub use registry::{create_compressor, describe, CodecInfo, Registry};
pub use types::{Algorithm, CompressionError, Compressor};
