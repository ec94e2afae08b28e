//! OpenSubtitles content hashing.
//!
//! The hash of a piece of data is the wrapping sum of its total length and of
//! the first and last 64 KiB interpreted as little-endian u64 words. It is
//! position-sensitive and very fast, but deliberately weak: a media-file
//! fingerprint for subtitle lookup, not a collision-resistant digest.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{HashError, Result};

/// Length in bytes of each sampled window. Also the minimum valid input size:
/// shorter data has no defined hash.
pub const WINDOW_SIZE: usize = 65536;

/// Compute the hash of the file at `path`.
///
/// Fails with [`HashError::DataTooSmall`] for files shorter than
/// [`WINDOW_SIZE`], without reading any data.
pub fn from_path(path: impl AsRef<Path>) -> Result<u64> {
    let mut file = File::open(path)?;
    from_file(&mut file)
}

/// Compute the hash of an already-open file.
///
/// The length is snapshotted once, before either read, and that snapshot
/// feeds both the tail offset and the final sum. A file that shrinks
/// underneath the call surfaces as [`HashError::ShortRead`], never as a hash
/// over partial data. The handle's read cursor is left at the end of the
/// tail window.
pub fn from_file(file: &mut File) -> Result<u64> {
    let len = file.metadata()?.len();
    if len < WINDOW_SIZE as u64 {
        return Err(HashError::DataTooSmall { len });
    }

    let mut samples = vec![0u8; WINDOW_SIZE * 2];
    read_window(file, 0, &mut samples[..WINDOW_SIZE])?;
    read_window(file, len - WINDOW_SIZE as u64, &mut samples[WINDOW_SIZE..])?;

    Ok(fold_samples(
        &samples[..WINDOW_SIZE],
        &samples[WINDOW_SIZE..],
        len,
    ))
}

/// Compute the hash of in-memory data.
///
/// The head and tail windows are borrowed from `data` by position, with no
/// copying. For lengths between one and two windows the slices overlap; the
/// overlapped bytes count twice, which is part of the hash definition.
pub fn from_bytes(data: &[u8]) -> Result<u64> {
    if data.len() < WINDOW_SIZE {
        return Err(HashError::DataTooSmall {
            len: data.len() as u64,
        });
    }

    let head = &data[..WINDOW_SIZE];
    let tail = &data[data.len() - WINDOW_SIZE..];
    Ok(fold_samples(head, tail, data.len() as u64))
}

/// Read exactly one window starting at `offset`, or fail: a short read is
/// reported as [`HashError::ShortRead`], never padded.
fn read_window(file: &mut File, offset: u64, buf: &mut [u8]) -> Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => HashError::ShortRead { offset },
        _ => HashError::Io(e),
    })
}

/// Sum the little-endian u64 words of the head window, then the tail window,
/// plus the total input length, wrapping at 2^64. Overflow is part of the
/// algorithm, not an error.
fn fold_samples(head: &[u8], tail: &[u8], total_len: u64) -> u64 {
    let mut hash = total_len;
    for word in head.chunks_exact(8).chain(tail.chunks_exact(8)) {
        // chunks_exact(8) only ever yields 8-byte slices
        hash = hash.wrapping_add(u64::from_le_bytes(word.try_into().unwrap()));
    }
    hash
}
