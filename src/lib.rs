#![no_std]

//! `Utf8Str`: a mutable, growable UTF-8 string addressed by codepoint
//! index.
//!
//! `Utf8Str` owns a contiguous byte buffer and tracks the codepoint
//! count and byte size alongside it, so length queries are O(1) while
//! indexed access decodes from the start. The buffer always ends with
//! one zero byte after the last codepoint, for interop with
//! zero-terminated text sources; the terminator is never counted by
//! [`len`](Utf8Str::len) or [`byte_len`](Utf8Str::byte_len). Capacity
//! grows by doubling, which amortizes appends to O(1) per codepoint.
//!
//! ```
//! use utf8str::Utf8Str;
//!
//! let mut s = Utf8Str::from_bytes("déjà".as_bytes()).unwrap();
//! assert_eq!(s.len(), 4);
//! assert_eq!(s.byte_len(), 6);
//!
//! s.push_char(u32::from('!')).unwrap();
//! assert_eq!(s.len(), 5);
//! assert_eq!(s.at(4), Some(u32::from('!')));
//! ```
//!
//! # Slicing and trimming
//!
//! Derivation operations address codepoints, never raw bytes, and each
//! returns a new owned string:
//!
//! ```
//! use utf8str::Utf8Str;
//!
//! let s = Utf8Str::from_bytes("Hellô wörld".as_bytes()).unwrap();
//!
//! assert_eq!(s.slice(0, 4).unwrap(), Utf8Str::from_bytes(b"Hell").unwrap());
//! assert_eq!(s.take_while(|c| c < 0x80).unwrap(), Utf8Str::from_bytes(b"Hell").unwrap());
//! assert_eq!(s.skip(6).unwrap(), Utf8Str::from_bytes("wörld".as_bytes()).unwrap());
//!
//! // Out-of-range and inverted ranges clamp to an empty or shortened
//! // slice instead of failing.
//! assert!(s.slice(4, 0).unwrap().is_empty());
//! assert_eq!(s.slice(6, 999).unwrap().len(), 5);
//! ```
//!
//! # Iteration
//!
//! [`Utf8StrIter`] is a bidirectional cursor: forward and backward
//! steps may be interleaved freely on the same iterator.
//!
//! ```
//! use utf8str::Utf8Str;
//!
//! let s = Utf8Str::from_bytes("東京".as_bytes()).unwrap();
//!
//! let forward: Vec<u32> = s.iter().map(|c| c.unwrap()).collect();
//! assert_eq!(forward, [u32::from('東'), u32::from('京')]);
//!
//! let backward: Vec<u32> = s.iter_rev().map(|c| c.unwrap()).collect();
//! assert_eq!(backward, [u32::from('京'), u32::from('東')]);
//!
//! let mut cursor = s.iter();
//! assert_eq!(cursor.next_char(), Some(Ok(u32::from('東'))));
//! assert_eq!(cursor.prev_char(), Some(Ok(u32::from('東'))));
//! ```
//!
//! # Errors
//!
//! All fallible operations report a [`Utf8StrError`] to the caller;
//! nothing panics and no operation leaves the string with broken
//! invariants. Byte sources are validated before they are appended, so
//! a malformed source never leaves a partial append behind.
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and only requires `alloc`. Enable the `std`
//! feature to forward it to `thiserror`:
//!
//! ```toml
//! [dependencies]
//! utf8str = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;
pub mod utf8;

pub use crate::core::Utf8Str;
pub use crate::error::{Result, Utf8StrError};
pub use crate::iter::{Utf8StrIter, Utf8StrRevIter};
