//! compression/constants.rs
//! Stable codec IDs, labels and effort levels.

/// Stable codec IDs (u16) used by the registry and the `Algorithm` enum.
pub mod codec_ids {
    pub const GZIP: u16   = 0x0001;
    pub const ZLIB: u16   = 0x0002;
    pub const BZIP2: u16  = 0x0003;
    pub const LZW: u16    = 0x0004;
    pub const LZMA: u16   = 0x0005;
    pub const XZ: u16     = 0x0006;
    pub const BROTLI: u16 = 0x0007;
    pub const LZ4: u16    = 0x0008;
    pub const ZSTD: u16   = 0x0009;
    pub const ZIP: u16    = 0x000A;
}

/// Labels reported in console lines and report rows.
pub mod labels {
    pub const GZIP: &str   = "gzip";
    pub const ZLIB: &str   = "zlib";
    pub const BZIP2: &str  = "bzip2";
    pub const LZW: &str    = "lzw";
    pub const LZMA: &str   = "lzma";
    pub const XZ: &str     = "xz";
    pub const BROTLI: &str = "brotli";
    pub const LZ4: &str    = "lz4";
    pub const ZSTD: &str   = "zstd";
    pub const ZIP: &str    = "ZIP";
}

/// Effort levels, one per backend that exposes one.
pub const LEVEL_DEFLATE: u32 = 6;
pub const LEVEL_BZIP2: u32 = 9;
pub const LEVEL_XZ_PRESET: u32 = 6;
pub const LEVEL_ZSTD: i32 = zstd::DEFAULT_COMPRESSION_LEVEL;

/// Brotli: max quality, 4 MiB window (lgwin 22), 4 KiB internal buffer.
pub const BROTLI_QUALITY: u32 = 11;
pub const BROTLI_LGWIN: u32 = 22;
pub const BROTLI_BUFFER_SIZE: usize = 4096;

/// LZW literal code width (8-bit symbols, LSB packing).
pub const LZW_LITERAL_WIDTH: u8 = 8;

/// Name of the single entry written into the ZIP container.
pub const ZIP_ENTRY_NAME: &str = "data";
