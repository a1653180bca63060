//! A stateful bidirectional codepoint reader over a rope.

use std::cmp;

use crate::internals::{BranchNode, LeafNode, Node};
use crate::unicode;
use crate::Rope;

/// Which child of a branch the most recent descent took.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A sequential reader positioned between codepoints of a [`Rope`].
///
/// The cursor borrows the rope, so the rope cannot be edited while any
/// cursor is live. Stepping is amortized O(1): the cursor keeps the
/// stack of branches descended through on its last seek and rolls
/// between adjacent leaves without returning to the root.
///
/// # Examples
///
/// ```
/// use utf8_rope::Rope;
///
/// let rope = Rope::from("a\u{65E5}b");
/// let mut cursor = rope.cursor(0);
/// assert_eq!(cursor.next_char(), Some(0x61));
/// assert_eq!(cursor.next_char(), Some(0x65E5));
/// assert_eq!(cursor.next_char(), Some(0x62));
/// assert_eq!(cursor.next_char(), None);
/// assert_eq!(cursor.prev_char(), Some(0x62));
/// ```
pub struct Cursor<'a> {
    rope: &'a Rope,
    stack: Vec<(&'a BranchNode, Side)>,
    leaf: Option<&'a LeafNode>,
    leaf_byte: usize,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(rope: &'a Rope, char_pos: usize) -> Cursor<'a> {
        let mut cursor = Cursor {
            rope,
            stack: Vec::new(),
            leaf: None,
            leaf_byte: 0,
            byte_pos: 0,
            char_pos: 0,
        };
        cursor.seek_char(char_pos);
        cursor
    }

    /// Reposition at a codepoint offset, discarding the stack and
    /// re-descending from the root. Saturates at the end of the rope.
    /// Cheap, but not free.
    pub fn seek_char(&mut self, char_pos: usize) {
        let char_pos = cmp::min(char_pos, self.rope.char_len());
        let byte_pos = self.rope.char_to_byte(char_pos);
        self.stack.clear();
        self.leaf = None;
        self.leaf_byte = 0;
        self.byte_pos = byte_pos;
        self.char_pos = char_pos;

        let mut node = match self.rope.root() {
            Some(node) => node,
            None => return,
        };
        let mut residual = byte_pos;
        loop {
            match *node {
                Node::Leaf(ref leaf) => {
                    self.leaf = Some(leaf);
                    self.leaf_byte = residual;
                    return;
                }
                Node::Branch(ref branch) => {
                    if residual < branch.weight.bytes {
                        self.stack.push((branch, Side::Left));
                        node = &branch.left;
                    } else {
                        residual -= branch.weight.bytes;
                        self.stack.push((branch, Side::Right));
                        node = &branch.right;
                    }
                }
            }
        }
    }

    /// Reposition at a byte offset. Offsets inside a codepoint snap back
    /// to the start of the codepoint containing them.
    pub fn seek_byte(&mut self, byte_pos: usize) {
        let char_pos = self.rope.byte_to_char(byte_pos);
        self.seek_char(char_pos);
    }

    /// Decode the codepoint at the cursor and step over it.
    ///
    /// Returns `None` only when the cursor is at the end of the rope.
    pub fn next_char(&mut self) -> Option<u32> {
        if self.char_pos >= self.rope.char_len() {
            return None;
        }
        if self.leaf.map_or(true, |leaf| self.leaf_byte >= leaf.len()) {
            self.next_leaf()?;
        }
        let leaf = self.leaf?;
        let (cp, consumed) = unicode::decode(&leaf.data[self.leaf_byte..]);
        self.leaf_byte += consumed;
        self.byte_pos += consumed;
        self.char_pos += 1;
        Some(cp)
    }

    /// Step back over the codepoint before the cursor and return it.
    ///
    /// Returns `None` only when the cursor is at offset zero. The start
    /// byte of the previous codepoint is found by re-scanning the
    /// current leaf from its start; UTF-8 cannot be walked backwards
    /// with the forward classifier alone.
    pub fn prev_char(&mut self) -> Option<u32> {
        if self.char_pos == 0 {
            return None;
        }
        if self.leaf.is_none() || self.leaf_byte == 0 {
            self.prev_leaf()?;
        }
        let leaf = self.leaf?;
        let mut scan = 0;
        let mut start = 0;
        while scan < self.leaf_byte {
            start = scan;
            scan += unicode::step(&leaf.data, scan);
        }
        let (cp, _) = unicode::decode(&leaf.data[start..]);
        self.byte_pos -= self.leaf_byte - start;
        self.leaf_byte = start;
        self.char_pos -= 1;
        Some(cp)
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn byte_pos(&self) -> usize {
        self.byte_pos
    }

    /// Codepoint offset of the cursor.
    #[inline]
    pub fn char_pos(&self) -> usize {
        self.char_pos
    }

    /// Side recorded for the branch on top of the stack.
    fn top_side(&self) -> Option<Side> {
        self.stack.last().map(|&(_, side)| side)
    }

    /// Roll to the leftmost leaf of the nearest unvisited right subtree.
    fn next_leaf(&mut self) -> Option<()> {
        while self.top_side() == Some(Side::Right) {
            self.stack.pop();
        }
        let (parent, _) = self.stack.pop()?;
        self.stack.push((parent, Side::Right));
        let mut node: &Node = &parent.right;
        loop {
            match *node {
                Node::Branch(ref branch) => {
                    self.stack.push((branch, Side::Left));
                    node = &branch.left;
                }
                Node::Leaf(ref leaf) => {
                    self.leaf = Some(leaf);
                    self.leaf_byte = 0;
                    return Some(());
                }
            }
        }
    }

    /// Mirror of [`Cursor::next_leaf`]: roll to the rightmost leaf of
    /// the left subtree of the nearest ancestor entered from its right
    /// child.
    fn prev_leaf(&mut self) -> Option<()> {
        while self.top_side() == Some(Side::Left) {
            self.stack.pop();
        }
        let (parent, _) = self.stack.pop()?;
        self.stack.push((parent, Side::Left));
        let mut node: &Node = &parent.left;
        loop {
            match *node {
                Node::Branch(ref branch) => {
                    self.stack.push((branch, Side::Right));
                    node = &branch.right;
                }
                Node::Leaf(ref leaf) => {
                    self.leaf = Some(leaf);
                    self.leaf_byte = leaf.len();
                    return Some(());
                }
            }
        }
    }
}

/// Iterator over the codepoints of a rope, driven by a [`Cursor`].
///
/// Values are raw `u32` codepoints; malformed storage may produce values
/// that are not Unicode scalars.
pub struct Codepoints<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Codepoints<'a> {
    pub(crate) fn new(rope: &'a Rope) -> Codepoints<'a> {
        Codepoints {
            cursor: Cursor::new(rope, 0),
        }
    }
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.cursor.next_char()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.rope.char_len() - self.cursor.char_pos;
        (remaining, Some(remaining))
    }
}
