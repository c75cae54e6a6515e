use crate::core::Utf8Str;
use crate::error::Result;
use crate::utf8;

/// Bidirectional codepoint cursor over a [`Utf8Str`].
///
/// The cursor sits on a codepoint boundary and can step forward and
/// backward in any order; changing direction costs nothing.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Utf8StrIter<'a> {
    s: &'a Utf8Str,
    /// Byte offset of the cursor; always a codepoint boundary.
    pos: usize,
    /// Codepoint index matching `pos`.
    index: usize,
}

impl<'a> Utf8StrIter<'a> {
    pub(crate) fn new(s: &'a Utf8Str) -> Self {
        Utf8StrIter { s, pos: 0, index: 0 }
    }

    pub(crate) fn new_at_end(s: &'a Utf8Str) -> Self {
        Utf8StrIter {
            s,
            pos: s.size - 1,
            index: s.len(),
        }
    }

    /// Whether a codepoint remains ahead of the cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pos < self.s.size - 1
    }

    /// Decodes the codepoint ahead of the cursor and steps over it.
    ///
    /// Returns `None` once the cursor has reached the end. On a
    /// malformed sequence the error is returned and the cursor stays
    /// put.
    pub fn next_char(&mut self) -> Option<Result<u32>> {
        if !self.has_next() {
            return None;
        }
        match utf8::decode_at(&self.s.arr[..self.s.size], self.pos) {
            Ok((c, char_size)) => {
                self.pos += char_size;
                self.index += 1;
                Some(Ok(c))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Whether a codepoint remains behind the cursor.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.pos > 0
    }

    /// Decodes the codepoint behind the cursor and steps back over it.
    ///
    /// Returns `None` once the cursor has reached the start. On a
    /// malformed sequence the error is returned and the cursor stays
    /// put.
    pub fn prev_char(&mut self) -> Option<Result<u32>> {
        if !self.has_prev() {
            return None;
        }
        match utf8::decode_before(&self.s.arr[..self.s.size], self.pos) {
            Ok((c, char_size)) => {
                self.pos -= char_size;
                self.index -= 1;
                Some(Ok(c))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl Iterator for Utf8StrIter<'_> {
    type Item = Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_char()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.s.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Utf8StrIter<'_> {}

impl<'a> IntoIterator for &'a Utf8Str {
    type Item = Result<u32>;
    type IntoIter = Utf8StrIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the codepoints of a [`Utf8Str`], last to first.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Utf8StrRevIter<'a> {
    inner: Utf8StrIter<'a>,
}

impl<'a> Utf8StrRevIter<'a> {
    pub(crate) fn new(s: &'a Utf8Str) -> Self {
        Utf8StrRevIter {
            inner: Utf8StrIter::new_at_end(s),
        }
    }
}

impl Iterator for Utf8StrRevIter<'_> {
    type Item = Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.prev_char()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.index, Some(self.inner.index))
    }
}

impl ExactSizeIterator for Utf8StrRevIter<'_> {}
