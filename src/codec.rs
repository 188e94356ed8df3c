//! Per-field compression codecs: `compress(bytes) -> bytes` /
//! `decompress(bytes) -> bytes`, treated as black boxes over an already
//! primitive-encoded body.
//!
//! Mirrors the `Compressor` trait and `compress::builtin`
//! name-based registry, adapted to operate on raw bytes (this format
//! compresses already-primitive-encoded bodies, not typed values) and keyed
//! by the stable numeric [`crate::wire::Codec`] tag rather than a string name.

use crate::wire::Codec;
use std::io::{Read, Write};

/// Implemented by every compression backend this crate knows about.
pub trait Compressor {
  fn compress(&self, input: &[u8]) -> std::io::Result<Vec<u8>>;
  fn decompress(&self, input: &[u8]) -> std::io::Result<Vec<u8>>;
}

/// Passes bytes through unmodified.
pub struct NoneCompressor;

impl Compressor for NoneCompressor {
  fn compress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    Ok(input.to_vec())
  }

  fn decompress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    Ok(input.to_vec())
  }
}

/// Zstandard at the library default compression level.
pub struct ZstdCompressor;

impl Compressor for ZstdCompressor {
  fn compress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    zstd::stream::encode_all(input, zstd::DEFAULT_COMPRESSION_LEVEL)
  }

  fn decompress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    zstd::stream::decode_all(input)
  }
}

/// Brotli at the library default quality/window parameters.
pub struct BrotliCompressor;

const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_QUALITY: u32 = 11;
const BROTLI_LGWIN: u32 = 22;

impl Compressor for BrotliCompressor {
  fn compress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    {
      let mut writer = brotli::CompressorWriter::new(
        &mut out,
        BROTLI_BUFFER_SIZE,
        BROTLI_QUALITY,
        BROTLI_LGWIN,
      );
      writer.write_all(input)?;
      writer.flush()?;
    }
    Ok(out)
  }

  fn decompress(&self, input: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = brotli::Decompressor::new(input, BROTLI_BUFFER_SIZE);
    reader.read_to_end(&mut out)?;
    Ok(out)
  }
}

/// Returns the compressor implementation for a given codec tag.
pub fn for_codec(codec: Codec) -> &'static dyn Compressor {
  match codec {
    Codec::None => &NoneCompressor,
    Codec::Zstd => &ZstdCompressor,
    Codec::Brotli => &BrotliCompressor,
  }
}
