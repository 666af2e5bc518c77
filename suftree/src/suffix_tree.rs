// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::alphabet::{Alphabet, TERMINAL};
use crate::arena::{is_leaf, Arena, EdgeRef, NodeRef, NO_EDGE};
use crate::ukkonen;

/// A suffix tree over a byte string.
///
/// The tree indexes every suffix of the source string and answers
/// substring-location queries in time proportional to the pattern length.
/// Construction is online and takes *O*(*n*) amortised operations for a
/// source of length *n*.
///
/// Once built, a tree is immutable; queries keep all their iteration state
/// in locals, so a tree may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use suftree::{Alphabet, SuffixTree};
///
/// let tree = SuffixTree::new(b"mississipi", Alphabet::new(b"imps"));
/// assert_eq!(tree.index_of(b"issip"), Some(4));
/// assert!(!tree.contains(b"ssp"));
/// ```
pub struct SuffixTree {
    /// The source with the terminal byte appended.
    text: Vec<u8>,
    alphabet: Alphabet,
    arena: Arena,
    root: NodeRef,
}

impl SuffixTree {
    /// Builds the suffix tree of `source` over `alphabet`.
    ///
    /// # Panics
    ///
    /// Panics if `source` contains the [`TERMINAL`] byte or any byte outside
    /// the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::{Alphabet, SuffixTree};
    ///
    /// let tree = SuffixTree::new(b"Hello, world!", Alphabet::printable_ascii());
    /// assert!(tree.contains(b"world"));
    /// ```
    #[must_use]
    pub fn new(source: &[u8], alphabet: Alphabet) -> Self {
        assert!(
            !source.contains(&TERMINAL),
            "source must not contain the terminal byte"
        );
        assert!(
            alphabet.contains_all(source),
            "source contains bytes outside the alphabet"
        );

        let mut text = Vec::with_capacity(source.len() + 1);
        text.extend_from_slice(source);
        text.push(TERMINAL);

        let (arena, root) = ukkonen::build(&text, &alphabet);

        Self {
            text,
            alphabet,
            arena,
            root,
        }
    }

    /// Returns the position of the leftmost occurrence of `pattern` in the
    /// source string, or `None` if the pattern does not occur.
    ///
    /// The empty pattern occurs at position `0`. Patterns with bytes outside
    /// the alphabet (or containing the [`TERMINAL`] byte, which the source
    /// never does) cannot occur and yield `None`.
    ///
    /// This operation is *O*(*m*) for a pattern of length *m*.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::{Alphabet, SuffixTree};
    ///
    /// let tree = SuffixTree::new(b"banana", Alphabet::new(b"abn"));
    /// assert_eq!(tree.index_of(b"ana"), Some(1));
    /// assert_eq!(tree.index_of(b""), Some(0));
    /// assert_eq!(tree.index_of(b"nab"), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(0);
        }

        let mut node = self.root;
        let mut edge: EdgeRef = NO_EDGE;
        let mut offset: i32 = 0;
        // The edge most recently walked to its end, used to recover a text
        // position when the pattern stops exactly at an inner node.
        let mut last_full = NO_EDGE;

        for &byte in pattern {
            let slot = self.alphabet.index_of(byte)?;

            if edge == NO_EDGE {
                edge = self.arena.node(node).children[slot];
                if edge == NO_EDGE {
                    return None;
                }
            }

            let current = self.arena.edge(edge);
            if self.text[(current.start + offset) as usize] != byte {
                return None;
            }

            offset += 1;
            if offset == current.length {
                last_full = edge;
                node = current.child;
                edge = NO_EDGE;
                offset = 0;

                if is_leaf(node) {
                    // Only the appended terminal ends a path here, and the
                    // terminal never occurs in the source.
                    return None;
                }
            }
        }

        let (edge, offset) = if edge == NO_EDGE {
            (last_full, self.arena.edge(last_full).length)
        } else {
            (edge, offset)
        };

        let position = self.arena.edge(edge).start + offset - pattern.len() as i32;
        debug_assert!(position >= 0);
        Some(position as usize)
    }

    /// Returns `true` if and only if `pattern` occurs in the source string.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::{Alphabet, SuffixTree};
    ///
    /// let tree = SuffixTree::new(b"banana", Alphabet::new(b"abn"));
    /// assert!(tree.contains(b"nan"));
    /// assert!(!tree.contains(b"nab"));
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.index_of(pattern).is_some()
    }
}
