//! Gzip bridge (spec §4.9). Grounded on `tiffany352-nobility`'s
//! `Document::load`, which sniffs a `GzDecoder`'s header before committing to
//! decompression rather than trying to decompress and pattern-matching the
//! error. Same crate (`flate2`) the teacher already depends on for nothing
//! of its own — added here since the teacher has no compression support at
//! all (see DESIGN.md).

use crate::error::{NBTError, NBTResult};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Gzip-decompresses `bytes`. Fails with [`NBTError::NotGzipped`] if `bytes`
/// doesn't start with a gzip header; use [`try_gunzip`] if the buffer might
/// be raw NBT instead.
pub fn gunzip(bytes: &[u8]) -> NBTResult<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    if decoder.header().is_none() {
        return Err(NBTError::NotGzipped);
    }
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Gzip-decompresses `bytes`, or returns it unchanged if it isn't gzipped.
pub fn try_gunzip(bytes: &[u8]) -> Vec<u8> {
    gunzip(bytes).unwrap_or_else(|_| bytes.to_vec())
}

/// Gzip-compresses `bytes` at the default compression level.
pub fn gzip(bytes: &[u8]) -> NBTResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_round_trips() {
        let original = b"hello nbt world".to_vec();
        let compressed = gzip(&original).unwrap();
        assert_ne!(compressed, original);
        let decompressed = gunzip(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn gunzip_rejects_non_gzip_input() {
        assert!(matches!(gunzip(b"not gzip"), Err(NBTError::NotGzipped)));
    }

    #[test]
    fn try_gunzip_falls_back_to_raw_bytes() {
        let raw = b"plain NBT bytes".to_vec();
        assert_eq!(try_gunzip(&raw), raw);
    }

    #[test]
    fn try_gunzip_decompresses_when_gzipped() {
        let original = b"compressed payload".to_vec();
        let compressed = gzip(&original).unwrap();
        assert_eq!(try_gunzip(&compressed), original);
    }
}
