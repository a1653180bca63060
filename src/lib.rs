//! # A UTF-8 aware rope.
//!
//! A rope is an efficient data structure for large mutable strings: a
//! binary tree whose leaves hold runs of bytes. This rope indexes its
//! contents three ways at once: by byte offset, by codepoint offset, and
//! by line number. Every branch caches the metrics of its left subtree,
//! so any of the three positions resolves in O(log _n_), and insertion,
//! deletion, splitting, and concatenation of documents millions of
//! characters long stay sub-linear.
//!
//! Two properties set it apart from a `String`-backed rope:
//!
//! + It is a **lossless byte container**. Malformed UTF-8 is stored
//!   verbatim and counted deterministically rather than rejected; the
//!   strict check is available separately as [`Rope::is_valid_utf8`].
//! + Positions **saturate** instead of panicking. Out-of-range indices
//!   clip to the nearest end of the rope, so no sequence of calls with
//!   bad indices can corrupt the tree.
//!
//! For background on the structure, see "Ropes: An Alternative to
//! Strings" (Boehm, Atkinson, Plass, 1995).
//!
//! # Examples
//!
//! ```
//! use utf8_rope::Rope;
//!
//! let mut rope = Rope::from("Hello, World!");
//! rope.delete_bytes(5, 7);
//! rope.insert_bytes(5, b"!!");
//! assert_eq!(&rope, "Hello!!!");
//! ```

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::cmp;
use std::convert;
use std::fmt;
use std::iter;
use std::ops;

mod cursor;
mod internals;
pub mod metric;
pub mod unicode;

#[cfg(feature = "serde")]
mod serde;


pub use crate::cursor::{Codepoints, Cursor};
pub use crate::metric::Summary;

use crate::internals::{Leaves, Node};
use crate::metric::{Byte, Char, Line, Metric};

/// A UTF-8 aware rope.
///
/// The handle owns the root of the tree (possibly empty) and caches the
/// whole-tree totals, so length queries are O(1). All edits keep the
/// byte, codepoint, and newline accounting consistent.
///
/// `Rope` provides two kinds of editing API: in-place methods
/// ([`insert_bytes`], [`delete_bytes`], [`append`], ...) and structural
/// methods that consume their operands ([`concat`], [`split_bytes`]).
/// Consumed handles are gone; the type system stands in for the manual
/// ownership-transfer rules a C API would need.
///
/// [`insert_bytes`]: Rope::insert_bytes
/// [`delete_bytes`]: Rope::delete_bytes
/// [`append`]: Rope::append
/// [`concat`]: Rope::concat
/// [`split_bytes`]: Rope::split_bytes
#[derive(Clone, Default)]
pub struct Rope {
    root: Option<Node>,
    summary: Summary,
}

impl Rope {
    /// Returns a new empty rope.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::new();
    /// assert_eq!(rope.byte_len(), 0);
    /// assert!(rope.is_empty());
    /// ```
    pub fn new() -> Rope {
        Rope {
            root: None,
            summary: Summary::default(),
        }
    }

    /// Builds a rope from a run of bytes.
    ///
    /// The input does not have to be valid UTF-8: malformed sequences
    /// are stored verbatim and counted by the lossy scan rules, and
    /// [`Rope::to_bytes`] returns them back byte for byte. Inputs longer
    /// than the leaf ceiling are spread across several leaves.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from_bytes(b"Hello, World!");
    /// assert_eq!(rope.byte_len(), 13);
    /// assert_eq!(rope.char_len(), 13);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Rope {
        Rope::from_root(Node::from_bytes(bytes))
    }

    fn from_root(mut root: Option<Node>) -> Rope {
        if let Some(ref mut node) = root {
            node.blacken();
        }
        let summary = root.as_ref().map(Node::summary).unwrap_or_default();
        Rope { root, summary }
    }

    /// Install a new root, re-deriving the cached totals and forcing the
    /// root color black.
    fn replace_root(&mut self, mut root: Option<Node>) {
        if let Some(ref mut node) = root {
            node.blacken();
        }
        self.summary = root.as_ref().map(Node::summary).unwrap_or_default();
        self.root = root;
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Length of this rope in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.summary.bytes
    }

    /// Length of this rope in codepoints.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.summary.chars
    }

    /// Length in bytes, for `String` API parity.
    #[inline]
    pub fn len(&self) -> usize {
        self.summary.bytes
    }

    /// Returns `true` if this rope contains no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.summary.bytes == 0
    }

    /// The cached whole-tree totals.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let stats = Rope::from("caf\u{e9}\n").stats();
    /// assert_eq!(stats.bytes, 6);
    /// assert_eq!(stats.chars, 5);
    /// assert_eq!(stats.newlines, 1);
    /// ```
    #[inline]
    pub fn stats(&self) -> Summary {
        self.summary
    }

    /// Number of lines: one more than the number of newlines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.summary.line_count()
    }

    /// The codepoint at a codepoint offset, or `0` when the offset is
    /// out of range.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("caf\u{e9}");
    /// assert_eq!(rope.char_at(3), 0xE9);
    /// assert_eq!(rope.char_at(4), 0);
    /// ```
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn char_at(&self, char_pos: usize) -> u32 {
        match self.root {
            Some(ref root) if char_pos < self.summary.chars => {
                let (leaf, residual, _) = root.seek::<Char>(char_pos);
                let offset = Char::to_byte_offset(&leaf.data, residual);
                let (cp, _) = unicode::decode(&leaf.data[offset..]);
                cp
            }
            _ => 0,
        }
    }

    /// Byte offset of the codepoint at `char_pos`. Saturates to the byte
    /// length when `char_pos` is at or past the end.
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn char_to_byte(&self, char_pos: usize) -> usize {
        match self.root {
            Some(ref root) if char_pos < self.summary.chars => {
                let (leaf, residual, acc) = root.seek::<Char>(char_pos);
                acc.bytes + Char::to_byte_offset(&leaf.data, residual)
            }
            _ => self.summary.bytes,
        }
    }

    /// Codepoint offset of the codepoint containing byte `byte_pos`: a
    /// mid-codepoint byte offset resolves to the start of the codepoint
    /// it falls into. Saturates to the codepoint length at or past the
    /// end.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("caf\u{e9}");
    /// assert_eq!(rope.byte_to_char(4), 3); // inside the é sequence
    /// assert_eq!(rope.byte_to_char(5), 4);
    /// ```
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn byte_to_char(&self, byte_pos: usize) -> usize {
        match self.root {
            Some(ref root) if byte_pos < self.summary.bytes => {
                let (leaf, residual, acc) = root.seek::<Byte>(byte_pos);
                acc.chars + unicode::byte_to_char(&leaf.data, residual)
            }
            _ => self.summary.chars,
        }
    }

    /// Codepoint offset of the first codepoint of line `line`. Saturates
    /// to the end for line numbers past the last line.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("Line 1\nLine 2\nLine 3");
    /// assert_eq!(rope.line_to_char(1), 7);
    /// ```
    pub fn line_to_char(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        match self.root {
            Some(ref root) if line <= self.summary.newlines => {
                let (leaf, residual, acc) = root.seek::<Line>(line - 1);
                let offset = Line::to_byte_offset(&leaf.data, residual);
                acc.chars + unicode::byte_to_char(&leaf.data, offset)
            }
            _ => self.summary.chars,
        }
    }

    /// Byte offset of the first byte of line `line`. Saturates to the
    /// end for line numbers past the last line.
    pub fn line_to_byte(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        match self.root {
            Some(ref root) if line <= self.summary.newlines => {
                let (leaf, residual, acc) = root.seek::<Line>(line - 1);
                acc.bytes + Line::to_byte_offset(&leaf.data, residual)
            }
            _ => self.summary.bytes,
        }
    }

    /// Line number of the codepoint at `char_pos`: the number of
    /// newlines strictly before it. Saturates to the last line.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("Line 1\nLine 2\nLine 3");
    /// assert_eq!(rope.char_to_line(14), 2);
    /// ```
    pub fn char_to_line(&self, char_pos: usize) -> usize {
        match self.root {
            Some(ref root) if char_pos < self.summary.chars => {
                let (leaf, residual, acc) = root.seek::<Char>(char_pos);
                let offset = Char::to_byte_offset(&leaf.data, residual);
                acc.newlines + unicode::count_newlines(&leaf.data[..offset])
            }
            _ => self.summary.newlines,
        }
    }

    /// Line number of the byte at `byte_pos`. Saturates to the last
    /// line.
    pub fn byte_to_line(&self, byte_pos: usize) -> usize {
        match self.root {
            Some(ref root) if byte_pos < self.summary.bytes => {
                let (leaf, residual, acc) = root.seek::<Byte>(byte_pos);
                acc.newlines + unicode::count_newlines(&leaf.data[..residual])
            }
            _ => self.summary.newlines,
        }
    }

    /// Copy the byte range `[byte_start, byte_start + byte_len)` into
    /// `buf`, clipping to the rope and to the buffer. Returns the number
    /// of bytes written.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("0123456789");
    /// let mut buf = [0u8; 4];
    /// assert_eq!(rope.copy_bytes(2, 8, &mut buf), 4);
    /// assert_eq!(&buf, b"2345");
    /// ```
    pub fn copy_bytes(&self, byte_start: usize, byte_len: usize, buf: &mut [u8]) -> usize {
        match self.root {
            Some(ref root) if byte_start < self.summary.bytes && !buf.is_empty() => {
                let want = cmp::min(byte_len, self.summary.bytes - byte_start);
                root.copy_bytes(byte_start, want, buf)
            }
            _ => 0,
        }
    }

    /// Copy the codepoint range `[char_start, char_start + char_len)`
    /// into `buf`, resolving the endpoints to byte offsets first.
    /// Returns the number of bytes written.
    pub fn copy_chars(&self, char_start: usize, char_len: usize, buf: &mut [u8]) -> usize {
        if char_start >= self.summary.chars {
            return 0;
        }
        let byte_start = self.char_to_byte(char_start);
        let byte_end = self.char_to_byte(char_start.saturating_add(char_len));
        self.copy_bytes(byte_start, byte_end - byte_start, buf)
    }

    /// Insert bytes at a byte offset, in place.
    ///
    /// Offsets past the end clip to the end; empty input is a no-op.
    /// Inserting mid-codepoint is permitted and leaves the surrounding
    /// bytes untouched.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let mut rope = Rope::from("Helo");
    /// rope.insert_bytes(2, b"l");
    /// assert_eq!(&rope, "Hello");
    /// assert_eq!(rope.byte_len(), 5);
    /// ```
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn insert_bytes(&mut self, byte_pos: usize, bytes: &[u8]) {
        let ins = match Node::from_bytes(bytes) {
            Some(node) => node,
            None => return,
        };
        let at = cmp::min(byte_pos, self.summary.bytes);
        let root = match self.root.take() {
            Some(root) => root.insert(at, ins),
            None => ins,
        };
        self.replace_root(Some(root));
    }

    /// Insert bytes at a codepoint offset.
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn insert_chars(&mut self, char_pos: usize, bytes: &[u8]) {
        let byte_pos = self.char_to_byte(char_pos);
        self.insert_bytes(byte_pos, bytes);
    }

    /// Insert string content at a byte offset.
    #[inline]
    pub fn insert_str(&mut self, byte_pos: usize, s: &str) {
        self.insert_bytes(byte_pos, s.as_bytes());
    }

    /// Delete the byte range `[byte_start, byte_start + byte_len)`,
    /// clipping both ends to the rope. A zero-length or fully
    /// out-of-range range is a no-op.
    ///
    /// Deletion splits at the start, splits off the doomed middle, and
    /// joins the remainder; the affected spine is rebuilt but no
    /// dedicated balancing pass runs.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let mut rope = Rope::from("this is not fine");
    /// rope.delete_bytes(8, 4);
    /// assert_eq!(&rope, "this is fine");
    /// ```
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn delete_bytes(&mut self, byte_start: usize, byte_len: usize) {
        if byte_start >= self.summary.bytes || byte_len == 0 {
            return;
        }
        let root = match self.root.take() {
            Some(root) => root,
            None => return,
        };
        let (left, rest) = root.split(byte_start);
        let (_, right) = match rest {
            Some(rest) => rest.split(byte_len),
            None => (None, None),
        };
        self.replace_root(Node::join(left, right));
    }

    /// Delete a codepoint range, resolving its endpoints first.
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn delete_chars(&mut self, char_start: usize, char_len: usize) {
        if char_start >= self.summary.chars {
            return;
        }
        let byte_start = self.char_to_byte(char_start);
        let byte_end = self.char_to_byte(char_start.saturating_add(char_len));
        self.delete_bytes(byte_start, byte_end - byte_start);
    }

    /// Concatenate two ropes, consuming both. Concatenating an empty
    /// side returns the other side unchanged.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("01234").concat(Rope::from("56789"));
    /// assert_eq!(&rope, "0123456789");
    /// assert_eq!(rope.byte_len(), 10);
    /// ```
    pub fn concat(self, other: Rope) -> Rope {
        Rope::from_root(Node::join(self.root, other.root))
    }

    /// Append another rope in place. Equivalent to `+=`.
    pub fn append(&mut self, other: Rope) {
        let root = Node::join(self.root.take(), other.root);
        self.replace_root(root);
    }

    /// Prepend another rope in place.
    pub fn prepend(&mut self, other: Rope) {
        let root = Node::join(other.root, self.root.take());
        self.replace_root(root);
    }

    /// Split at a byte offset, consuming the rope and returning the two
    /// halves. The offset clips to the byte length.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let (left, right) = Rope::from("0123456789").split_bytes(3);
    /// assert_eq!(&left, "012");
    /// assert_eq!(&right, "3456789");
    /// ```
    ///
    /// # Time complexity
    /// O(log _n_)
    pub fn split_bytes(self, byte_pos: usize) -> (Rope, Rope) {
        match self.root {
            None => (Rope::new(), Rope::new()),
            Some(root) => {
                let (left, right) = root.split(byte_pos);
                (Rope::from_root(left), Rope::from_root(right))
            }
        }
    }

    /// Split at a codepoint offset, consuming the rope.
    pub fn split_chars(self, char_pos: usize) -> (Rope, Rope) {
        let byte_pos = self.char_to_byte(char_pos);
        self.split_bytes(byte_pos)
    }

    /// Copy a byte range out into a fresh rope; the source is unchanged.
    ///
    /// Substring results are frequently short, so this copies out rather
    /// than splitting the tree twice.
    pub fn substring_bytes(&self, byte_start: usize, byte_len: usize) -> Rope {
        if byte_start >= self.summary.bytes {
            return Rope::new();
        }
        let len = cmp::min(byte_len, self.summary.bytes - byte_start);
        let mut buf = vec![0; len];
        let copied = self.copy_bytes(byte_start, len, &mut buf);
        buf.truncate(copied);
        Rope::from_bytes(&buf)
    }

    /// Copy a codepoint range out into a fresh rope.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("hello world");
    /// assert_eq!(&rope.substring_chars(6, 5), "world");
    /// assert_eq!(&rope, "hello world");
    /// ```
    pub fn substring_chars(&self, char_start: usize, char_len: usize) -> Rope {
        if char_start >= self.summary.chars {
            return Rope::new();
        }
        let byte_start = self.char_to_byte(char_start);
        let byte_end = self.char_to_byte(char_start.saturating_add(char_len));
        self.substring_bytes(byte_start, byte_end - byte_start)
    }

    /// Serialize into one contiguous buffer by in-order leaf traversal.
    ///
    /// Round-trips exactly: `Rope::from_bytes(&rope.to_bytes())` equals
    /// `rope`, byte for byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.summary.bytes);
        for chunk in self.chunks() {
            buf.extend_from_slice(chunk);
        }
        buf
    }

    /// Strict UTF-8 check over the serialized contents: every declared
    /// sequence length must fit, every continuation byte must have top
    /// bits `10`.
    ///
    /// This is deliberately stricter than the lossy decoder, which never
    /// rejects; the check runs over the serialized bytes because leaf
    /// boundaries may legally fall mid-codepoint.
    pub fn is_valid_utf8(&self) -> bool {
        unicode::validate(&self.to_bytes())
    }

    /// In-order iterator over the rope's leaf buffers.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        Leaves::new(self.root.as_ref()).map(|leaf| leaf.data.as_slice())
    }

    /// Iterator over all the bytes in this rope.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.chunks().flat_map(|chunk| chunk.iter().copied())
    }

    /// Iterator over the rope's codepoints, in order.
    ///
    /// Values are raw `u32` codepoints: malformed storage may produce
    /// values that are not Unicode scalars.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("A\u{65E5}B");
    /// let cps: Vec<u32> = rope.codepoints().collect();
    /// assert_eq!(cps, vec![0x41, 0x65E5, 0x42]);
    /// ```
    pub fn codepoints(&self) -> Codepoints<'_> {
        Codepoints::new(self)
    }

    /// A cursor positioned at a codepoint offset; see [`Cursor`].
    pub fn cursor(&self, char_pos: usize) -> Cursor<'_> {
        Cursor::new(self, char_pos)
    }

    /// Returns true if the bytes in `self` equal the bytes in `other`.
    #[inline]
    fn bytes_eq<I>(&self, other: I) -> bool
    where
        I: Iterator<Item = u8>,
    {
        self.bytes().eq(other)
    }
}

impl fmt::Display for Rope {
    /// Renders the contents, substituting U+FFFD for malformed
    /// sequences.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(&String::from_utf8_lossy(chunk))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rope[\"{}\"] {:?}", self, self.root)
    }
}

//-- conversions ----------------------------------------------------
impl<'a> convert::From<&'a str> for Rope {
    #[inline]
    fn from(s: &'a str) -> Rope {
        Rope::from_bytes(s.as_bytes())
    }
}

impl convert::From<String> for Rope {
    #[inline]
    fn from(s: String) -> Rope {
        Rope::from_bytes(s.as_bytes())
    }
}

impl<'a> convert::From<&'a [u8]> for Rope {
    #[inline]
    fn from(bytes: &'a [u8]) -> Rope {
        Rope::from_bytes(bytes)
    }
}

impl convert::From<Vec<u8>> for Rope {
    #[inline]
    fn from(bytes: Vec<u8>) -> Rope {
        Rope::from_bytes(&bytes)
    }
}

//-- comparisons ----------------------------------------------------
impl cmp::Eq for Rope {}

impl cmp::PartialEq for Rope {
    /// A rope equals another rope if all the bytes in both are equal.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// assert!(Rope::from("abcd") == Rope::from("ab").concat(Rope::from("cd")));
    /// assert!(Rope::from("abcd") != Rope::from("dcab"));
    /// ```
    #[inline]
    fn eq(&self, other: &Rope) -> bool {
        self.byte_len() == other.byte_len() && self.bytes_eq(other.bytes())
    }
}

impl cmp::PartialEq<[u8]> for Rope {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.byte_len() == other.len() && self.bytes_eq(other.iter().copied())
    }
}

impl cmp::PartialEq<str> for Rope {
    /// A rope equals a string if all the bytes in the string equal the
    /// rope's.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// assert!(&Rope::from("abcd") == "abcd");
    /// assert!(&Rope::from("abcd") != "ab");
    /// ```
    #[inline]
    fn eq(&self, other: &str) -> bool {
        *self == *other.as_bytes()
    }
}

impl<'a> cmp::PartialEq<&'a str> for Rope {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}

impl cmp::PartialEq<String> for Rope {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        *self == other[..]
    }
}

//-- concatenation --------------------------------------------------
impl ops::Add for Rope {
    type Output = Rope;

    /// Concatenate two `Rope`s, consuming both.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let rope = Rope::from("ab") + Rope::from("cd");
    /// assert_eq!(&rope, "abcd");
    /// ```
    #[inline]
    fn add(self, other: Rope) -> Rope {
        self.concat(other)
    }
}

impl<'a> ops::Add<&'a str> for Rope {
    type Output = Rope;

    /// Concatenate an `&str` onto the end of a `Rope`.
    #[inline]
    fn add(self, other: &'a str) -> Rope {
        self.concat(Rope::from(other))
    }
}

impl ops::AddAssign for Rope {
    /// Concatenate two `Rope`s mutably.
    ///
    /// # Examples
    /// ```
    /// use utf8_rope::Rope;
    /// let mut rope = Rope::from("ab");
    /// rope += Rope::from("cd");
    /// assert_eq!(&rope, "abcd");
    /// ```
    #[inline]
    fn add_assign(&mut self, other: Rope) {
        self.append(other)
    }
}

impl<'a> ops::AddAssign<&'a str> for Rope {
    #[inline]
    fn add_assign(&mut self, other: &'a str) {
        self.append(Rope::from(other))
    }
}

//-- iterator constructors ------------------------------------------
impl iter::FromIterator<Rope> for Rope {
    fn from_iter<I>(iter: I) -> Rope
    where
        I: IntoIterator<Item = Rope>,
    {
        iter.into_iter().fold(Rope::new(), |mut acc, rope| {
            acc.append(rope);
            acc
        })
    }
}

impl iter::FromIterator<String> for Rope {
    fn from_iter<I>(iter: I) -> Rope
    where
        I: IntoIterator<Item = String>,
    {
        iter.into_iter().map(Rope::from).collect()
    }
}

impl<'a> iter::FromIterator<&'a str> for Rope {
    fn from_iter<I>(iter: I) -> Rope
    where
        I: IntoIterator<Item = &'a str>,
    {
        iter.into_iter().map(Rope::from).collect()
    }
}

impl iter::FromIterator<char> for Rope {
    fn from_iter<I>(iter: I) -> Rope
    where
        I: IntoIterator<Item = char>,
    {
        let s: String = iter.into_iter().collect();
        Rope::from(s)
    }
}

impl<A> iter::Extend<A> for Rope
where
    Rope: iter::FromIterator<A>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.append(iter.into_iter().collect());
    }
}
