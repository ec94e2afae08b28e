//! Library for computing OpenSubtitles hash values for files and in-memory
//! data.
//!
//! The OpenSubtitles hash is a 64-bit integer made from the size of the input
//! in bytes, a checksum of the first 64 KiB of the data (the head), and a
//! checksum of the last 64 KiB (the tail). Subtitle services use it to match
//! media files regardless of filename.
//!
//! Data must be at least 64 KiB long to have a valid hash; shorter input is
//! rejected with [`HashError::DataTooSmall`].
//!
//! Hashes are plain [`u64`] values; render them as the conventional
//! hexadecimal string with `format!("{hash:x}")`.
//!
//! ```no_run
//! let hash = oshash::from_path("movie.mkv").unwrap();
//! println!("{hash:x}");
//! ```

pub mod error;
pub mod hash;
pub mod output;

pub use error::{HashError, Result};
pub use hash::{from_bytes, from_file, from_path, WINDOW_SIZE};
