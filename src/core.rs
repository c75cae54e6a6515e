use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Result, Utf8StrError};
use crate::iter::{Utf8StrIter, Utf8StrRevIter};
use crate::utf8;

const DEFAULT_CAPACITY: usize = 256;

/// A mutable, growable UTF-8 string addressed by codepoint index.
///
/// The backing buffer always carries one trailing zero byte after the
/// last codepoint, for interop with zero-terminated text sources. The
/// terminator is counted by `size` but never by [`len`](Utf8Str::len)
/// or [`byte_len`](Utf8Str::byte_len).
pub struct Utf8Str {
    /// Backing storage; its length is the capacity.
    pub(crate) arr: Vec<u8>,
    /// Number of codepoints stored.
    length: usize,
    /// Data bytes in use, including the trailing zero terminator.
    pub(crate) size: usize,
}

/// Validates a byte source up to its first zero byte or its end.
/// Returns the codepoint count and byte length of the validated prefix.
fn scan_source(bytes: &[u8]) -> Result<(usize, usize)> {
    let mut pos = 0;
    let mut count = 0;
    while pos < bytes.len() && bytes[pos] != 0 {
        let (_, char_size) = utf8::decode_at(bytes, pos)?;
        pos += char_size;
        count += 1;
    }
    Ok((count, pos))
}

impl Utf8Str {
    fn empty(capacity: usize) -> Self {
        Utf8Str {
            arr: vec![0; capacity],
            length: 0,
            size: 1,
        }
    }

    /// Creates an empty string with the default initial capacity
    /// (256 bytes).
    #[must_use]
    pub fn new() -> Self {
        Self::empty(DEFAULT_CAPACITY)
    }

    /// Creates an empty string with the specified initial capacity.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::InvalidConfiguration` if
    /// `initial_capacity` is 0.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(Utf8StrError::InvalidConfiguration {
                parameter: "initial_capacity",
                value: initial_capacity,
            });
        }
        Ok(Self::empty(initial_capacity))
    }

    /// Creates a string holding every codepoint of a byte source.
    ///
    /// A zero byte terminates the source early; the end of the slice
    /// terminates it as well.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if the source is not
    /// valid UTF-8. No partially filled string is observable.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut s = Self::new();
        s.push_bytes(bytes)?;
        Ok(s)
    }

    /// Number of codepoints stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of data bytes in use, not counting the terminator.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.size - 1
    }

    /// Allocated capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arr.len()
    }

    /// The stored bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.arr[..self.size - 1]
    }

    /// Doubles the capacity repeatedly until at least `target` bytes
    /// are available. Only mutation paths call this, so the growth
    /// policy stays in one place.
    fn ensure_capacity(&mut self, target: usize) -> Result<()> {
        let mut cap = self.arr.len();
        if cap >= target {
            return Ok(());
        }
        while cap < target {
            cap = cap
                .checked_mul(2)
                .ok_or(Utf8StrError::CapacityOverflow { required: target })?;
        }
        self.arr.resize(cap, 0);
        Ok(())
    }

    /// Appends a single codepoint.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::InvalidCodepoint` if `c` is zero or not a
    /// Unicode codepoint, and `Utf8StrError::CapacityOverflow` if the
    /// buffer cannot grow. The string is unchanged on error.
    pub fn push_char(&mut self, c: u32) -> Result<()> {
        if c == 0 {
            return Err(Utf8StrError::InvalidCodepoint { value: c });
        }
        let mut encoded = [0u8; 4];
        let char_size = utf8::encode_into(c, &mut encoded)
            .ok_or(Utf8StrError::InvalidCodepoint { value: c })?;
        self.ensure_capacity(self.size + char_size)?;

        let end = self.size - 1;
        self.arr[end..end + char_size].copy_from_slice(&encoded[..char_size]);
        self.arr[end + char_size] = 0;
        self.length += 1;
        self.size += char_size;
        Ok(())
    }

    /// Appends every codepoint of a byte source.
    ///
    /// A zero byte terminates the source early; the end of the slice
    /// terminates it as well. The whole source is validated before
    /// anything is written, so capacity grows at most once.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if the source is not
    /// valid UTF-8. The string is unchanged on error.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let (char_count, data_len) = scan_source(bytes)?;
        if data_len == 0 {
            return Ok(());
        }
        self.ensure_capacity(self.size + data_len)?;

        let end = self.size - 1;
        self.arr[end..end + data_len].copy_from_slice(&bytes[..data_len]);
        self.arr[end + data_len] = 0;
        self.length += char_count;
        self.size += data_len;
        Ok(())
    }

    /// Appends another string's whole codepoint sequence.
    ///
    /// Capacity grows at most once for the whole operation; the two
    /// terminators are merged into one.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::CapacityOverflow` if the combined size
    /// cannot be reached. The string is unchanged on error.
    pub fn append(&mut self, other: &Utf8Str) -> Result<()> {
        self.ensure_capacity(self.size - 1 + other.size)?;

        let end = self.size - 1;
        self.arr[end..end + other.size].copy_from_slice(&other.arr[..other.size]);
        self.length += other.length;
        self.size += other.size - 1;
        Ok(())
    }

    /// Removes the last `n` codepoints; `n >= len()` resets to the
    /// empty state.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if a codepoint
    /// boundary cannot be found. The scan completes before anything is
    /// written, so the string is unchanged on error.
    pub fn remove_last(&mut self, n: usize) -> Result<()> {
        if n >= self.length {
            self.clear();
            return Ok(());
        }
        let mut new_size = self.size;
        for _ in 0..n {
            let (_, char_size) = utf8::decode_before(&self.arr[..self.size], new_size - 1)?;
            new_size -= char_size;
        }
        self.length -= n;
        self.size = new_size;
        self.arr[new_size - 1] = 0;
        Ok(())
    }

    /// Resets to the empty state; capacity is retained.
    pub fn clear(&mut self) {
        self.length = 0;
        self.size = 1;
        self.arr[0] = 0;
    }

    /// Codepoint at codepoint index `index`, decoded by walking from
    /// the start.
    ///
    /// Returns `None` if `index` is out of range or a malformed
    /// sequence is hit on the way.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<u32> {
        if index >= self.length {
            return None;
        }
        let data = &self.arr[..self.size];
        let mut pos = 0;
        for _ in 0..index {
            let (_, char_size) = utf8::decode_at(data, pos).ok()?;
            pos += char_size;
        }
        let (c, _) = utf8::decode_at(data, pos).ok()?;
        Some(c)
    }

    /// First codepoint, or `None` if the string is empty or starts
    /// with a malformed sequence.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        let (c, _) = utf8::decode_at(&self.arr[..self.size], 0).ok()?;
        Some(c)
    }

    /// Last codepoint, decoded backward from the terminator, or `None`
    /// if the string is empty or ends with a malformed sequence.
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        let (c, _) = utf8::decode_before(&self.arr[..self.size], self.size - 1).ok()?;
        Some(c)
    }

    /// Codepoint index of the first occurrence of `c`.
    ///
    /// Returns `None` when `c` is absent, when `c` is zero, when the
    /// string is empty, or when a malformed sequence is hit first.
    #[must_use]
    pub fn find_char(&self, c: u32) -> Option<usize> {
        if c == 0 {
            return None;
        }
        let mut iter = self.iter();
        let mut index = 0;
        while let Some(decoded) = iter.next_char() {
            if decoded.ok()? == c {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// Codepoint range `[first, last)` as a new string.
    ///
    /// Out-of-range arguments clamp instead of failing: a `last`
    /// beyond the end is clamped to the end, while an inverted range
    /// or a `first` beyond the end yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if a boundary walk
    /// hits a malformed sequence.
    pub fn slice(&self, first: usize, last: usize) -> Result<Self> {
        if first > last || first > self.length {
            return Ok(Self::new());
        }
        let last = last.min(self.length);
        let data = &self.arr[..self.size];

        let mut start = 0;
        for _ in 0..first {
            let (_, char_size) = utf8::decode_at(data, start)?;
            start += char_size;
        }
        let mut end = start;
        for _ in first..last {
            let (_, char_size) = utf8::decode_at(data, end)?;
            end += char_size;
        }

        let data_len = end - start;
        let mut t = Self::new();
        t.ensure_capacity(data_len + 1)?;
        t.arr[..data_len].copy_from_slice(&data[start..end]);
        t.arr[data_len] = 0;
        t.length = last - first;
        t.size = data_len + 1;
        Ok(t)
    }

    /// First `min(n, len())` codepoints as a new string.
    ///
    /// Taking the whole string copies it, capacity included.
    ///
    /// # Errors
    ///
    /// See [`slice`](Utf8Str::slice).
    pub fn take(&self, n: usize) -> Result<Self> {
        if n < self.length {
            self.slice(0, n)
        } else {
            Ok(self.clone())
        }
    }

    /// All but the first `n` codepoints as a new string; empty when
    /// `n >= len()`.
    ///
    /// # Errors
    ///
    /// See [`slice`](Utf8Str::slice).
    pub fn skip(&self, n: usize) -> Result<Self> {
        if n < self.length {
            self.slice(n, self.length)
        } else {
            Ok(Self::new())
        }
    }

    /// Longest prefix whose codepoints all satisfy `predicate`, as a
    /// new string.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if a decode error is
    /// hit before the predicate first rejects a codepoint.
    pub fn take_while<P: FnMut(u32) -> bool>(&self, mut predicate: P) -> Result<Self> {
        let data = &self.arr[..self.size];
        let mut end = 0;
        let mut count = 0;
        while end < self.size - 1 {
            let (c, char_size) = utf8::decode_at(data, end)?;
            if !predicate(c) {
                break;
            }
            end += char_size;
            count += 1;
        }

        let mut t = Self::new();
        t.ensure_capacity(end + 1)?;
        t.arr[..end].copy_from_slice(&data[..end]);
        t.arr[end] = 0;
        t.length = count;
        t.size = end + 1;
        Ok(t)
    }

    /// Suffix left after removing the prefix
    /// [`take_while`](Utf8Str::take_while) would take, as a new string.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` if a decode error is
    /// hit before the predicate first rejects a codepoint.
    pub fn skip_while<P: FnMut(u32) -> bool>(&self, mut predicate: P) -> Result<Self> {
        let data = &self.arr[..self.size];
        let mut start = 0;
        let mut skipped = 0;
        while start < self.size - 1 {
            let (c, char_size) = utf8::decode_at(data, start)?;
            if !predicate(c) {
                break;
            }
            start += char_size;
            skipped += 1;
        }

        let data_len = self.size - 1 - start;
        let mut t = Self::new();
        t.ensure_capacity(data_len + 1)?;
        t.arr[..data_len].copy_from_slice(&data[start..self.size - 1]);
        t.arr[data_len] = 0;
        t.length = self.length - skipped;
        t.size = data_len + 1;
        Ok(t)
    }

    /// New string with the codepoints in reverse order, built by
    /// repeated backward decoding from the end.
    ///
    /// # Errors
    ///
    /// Returns `Utf8StrError::MalformedSequence` on a decode error.
    pub fn reverse(&self) -> Result<Self> {
        let mut t = Self::new();
        t.ensure_capacity(self.size)?;
        let data = &self.arr[..self.size];
        let mut pos = self.size - 1;
        while pos > 0 {
            let (c, char_size) = utf8::decode_before(data, pos)?;
            pos -= char_size;
            t.push_char(c)?;
        }
        Ok(t)
    }

    /// Whether `prefix` matches the leading codepoints of `self`.
    ///
    /// An empty prefix always matches; a decode failure on either side
    /// reports `false`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Utf8Str) -> bool {
        if prefix.length > self.length || prefix.size > self.size {
            return false;
        }
        let mut sit = self.iter();
        let mut pit = prefix.iter();
        while pit.has_next() {
            match (sit.next_char(), pit.next_char()) {
                (Some(Ok(c)), Some(Ok(d))) if c == d => {}
                _ => return false,
            }
        }
        true
    }

    /// Whether `suffix` matches the trailing codepoints of `self`,
    /// compared by parallel backward iteration.
    ///
    /// An empty suffix always matches; a decode failure on either side
    /// reports `false`.
    #[must_use]
    pub fn ends_with(&self, suffix: &Utf8Str) -> bool {
        if suffix.length > self.length || suffix.size > self.size {
            return false;
        }
        let mut sit = Utf8StrIter::new_at_end(self);
        let mut tit = Utf8StrIter::new_at_end(suffix);
        while tit.has_prev() {
            match (sit.prev_char(), tit.prev_char()) {
                (Some(Ok(c)), Some(Ok(d))) if c == d => {}
                _ => return false,
            }
        }
        true
    }

    /// Returns a bidirectional codepoint cursor positioned at the
    /// start.
    #[must_use]
    pub fn iter(&self) -> Utf8StrIter<'_> {
        Utf8StrIter::new(self)
    }

    /// Returns an iterator over the codepoints, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> Utf8StrRevIter<'_> {
        Utf8StrRevIter::new(self)
    }
}

impl Default for Utf8Str {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Utf8Str {
    /// Deep copy preserving capacity.
    fn clone(&self) -> Self {
        let mut arr = vec![0u8; self.arr.len()];
        arr[..self.size].copy_from_slice(&self.arr[..self.size]);
        Utf8Str {
            arr,
            length: self.length,
            size: self.size,
        }
    }
}

impl PartialEq for Utf8Str {
    fn eq(&self, other: &Self) -> bool {
        // Every codepoint sequence has a unique UTF-8 representation,
        // so comparing the data bytes suffices. Slack capacity is
        // never compared.
        self.length == other.length
            && self.size == other.size
            && self.arr[..self.size] == other.arr[..other.size]
    }
}

impl Eq for Utf8Str {}

impl fmt::Debug for Utf8Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Utf8Str {{ length: {:?}, size: {:?}, data: {:?} }}",
            self.length,
            self.size,
            self.as_bytes()
        )
    }
}

impl fmt::Display for Utf8Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
