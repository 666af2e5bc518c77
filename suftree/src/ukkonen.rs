// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Online suffix-tree construction.
//!
//! The builder implements the algorithm described in the [article] On-line
//! construction of suffix trees by Esko Ukkonen, consuming the expanded text
//! one character at a time and maintaining an active point into the tree
//! built so far. Each character is handled in three stages:
//!
//! 1. Extend every edge that ends in a leaf. This stage is implicit: leaf
//!    edges are created already spanning to the end of the text, so there is
//!    nothing to do.
//! 2. Branch. While the character is missing at the active point, split the
//!    current edge (or attach directly at the current node), hang a new leaf
//!    edge, stitch the suffix link of the node created by the previous
//!    split, and move the active point to the next shorter suffix.
//! 3. Descend one character along the tree.
//!
//! The root's suffix link leads to an auxiliary node above it whose unit
//! edges on every symbol lead back to the root. Walking "up past the root"
//! therefore needs no special case: a hop from the root lands on that node,
//! and the next one-character step lands back at the root.
//!
//! Construction runs in amortised *O*(*n*) operations, *O*(*n* \* *k*)
//! worst case including the per-node child arrays of width `k`.
//!
//! [article]: https://doi.org/10.1007/BF01206331

use crate::alphabet::Alphabet;
use crate::arena::{Arena, EdgeRef, NodeRef, INVALID_START, NO_EDGE};

/// Where the next character applies: an inner node, optionally an edge
/// hanging off it, and how far along that edge the walk has come. An offset
/// of zero means the point is exactly at `node` and `edge` is undefined.
struct ActivePoint {
    node: NodeRef,
    edge: EdgeRef,
    offset: i32,
}

/// Builds the suffix tree of `text` and returns the arena together with the
/// root reference. `text` must be the expanded text: terminated by the
/// alphabet's terminal byte and covered by `alphabet`.
pub(crate) fn build(text: &[u8], alphabet: &Alphabet) -> (Arena, NodeRef) {
    assert!(
        text.len() <= i32::MAX as usize,
        "text is too large to index"
    );
    debug_assert_eq!(text.last(), Some(&0), "text must end with the terminal");

    let mut builder = Builder::new(text, alphabet);
    builder.run();

    (builder.arena, builder.root)
}

struct Builder<'a> {
    text: &'a [u8],
    alphabet: &'a Alphabet,
    arena: Arena,
    root: NodeRef,
    dummy: NodeRef,
    /// Leaves allocated so far. Leaf `n` is encoded as reference `-(n + 1)`.
    leaves: i32,
    point: ActivePoint,
}

impl<'a> Builder<'a> {
    fn new(text: &'a [u8], alphabet: &'a Alphabet) -> Self {
        let width = alphabet.size();
        let mut arena = Arena::new();
        let root = arena.alloc_node(width);
        let dummy = arena.alloc_node(width);

        // One unit edge per symbol leads from the dummy back to the root, so
        // a suffix-link hop that lands on the dummy re-enters the tree at
        // the root exactly one character shorter.
        for slot in 0..width {
            let edge = arena.alloc_edge(INVALID_START, 1, root);
            arena.node_mut(dummy).children[slot] = edge;
        }

        // The dummy's own link is never read; any value will do.
        arena.node_mut(dummy).suffix_link = dummy;
        arena.node_mut(root).suffix_link = dummy;

        Self {
            text,
            alphabet,
            arena,
            root,
            dummy,
            leaves: 0,
            point: ActivePoint {
                node: root,
                edge: NO_EDGE,
                offset: 0,
            },
        }
    }

    fn run(&mut self) {
        for pos in 0..self.text.len() {
            // Stage one (extending leaf edges) is implicit, see the module
            // docs. Only branching and the descent remain.
            self.branch(pos);
            self.descend(self.text[pos]);
        }
    }

    /// Stage two: creates a branch for every implicit suffix that is missing
    /// the character at `pos`, walking the suffixes from longest to shortest
    /// via suffix links until the character is already reachable.
    fn branch(&mut self, pos: usize) {
        // The node created by the previous split, waiting for its suffix
        // link. Seeded with the dummy, whose link is never read, so neither
        // the first split nor the no-split case needs special handling.
        let mut pending = self.dummy;

        while self.gap_inside_edge(pos) {
            let fork = self.split_edge();
            self.arena.node_mut(pending).suffix_link = fork;
            self.attach_leaf(pos, fork);
            pending = fork;
            self.follow_suffix_link();
        }
        self.arena.node_mut(pending).suffix_link = self.point.node;

        while self.gap_at_node(pos) {
            // Every node visited here already exists and is already
            // stitched; only the leaf is new.
            self.attach_leaf(pos, self.point.node);
            self.follow_suffix_link();
        }
    }

    /// True while the active point sits inside an edge whose next label
    /// character differs from `text[pos]`.
    fn gap_inside_edge(&self, pos: usize) -> bool {
        if self.point.offset == 0 {
            return false;
        }

        // The first character of the text is always consumed at a node.
        debug_assert!(pos > 0);

        let edge = self.arena.edge(self.point.edge);
        debug_assert!(edge.start >= 0);
        debug_assert!(self.point.offset < edge.length);
        debug_assert_eq!(
            self.text[pos - 1],
            self.text[(edge.start + self.point.offset) as usize - 1],
        );

        self.text[(edge.start + self.point.offset) as usize] != self.text[pos]
    }

    /// True while the active point sits at an inner node that has no
    /// outgoing edge on `text[pos]`.
    fn gap_at_node(&self, pos: usize) -> bool {
        if self.point.offset != 0 {
            return false;
        }

        let slot = self.alphabet.dense(self.text[pos]);
        self.arena.node(self.point.node).children[slot] == NO_EDGE
    }

    /// Splits the current edge at the active offset and returns the new
    /// inner node. The existing edge is truncated to the offset and
    /// re-pointed at the new node; the remainder of its label moves to a
    /// fresh edge hanging off the new node.
    fn split_edge(&mut self) -> NodeRef {
        let (start, length, child) = {
            let edge = self.arena.edge(self.point.edge);
            (edge.start, edge.length, edge.child)
        };
        debug_assert!(self.point.offset > 0 && self.point.offset < length);

        let fork = self.arena.alloc_node(self.alphabet.size());
        let split_at = start + self.point.offset;
        let tail = self
            .arena
            .alloc_edge(split_at, length - self.point.offset, child);
        let slot = self.alphabet.dense(self.text[split_at as usize]);
        self.arena.node_mut(fork).children[slot] = tail;

        let edge = self.arena.edge_mut(self.point.edge);
        edge.length = self.point.offset;
        edge.child = fork;

        fork
    }

    /// Hangs a fresh leaf edge off `node` for the suffix whose next
    /// character sits at `pos`. The edge is born spanning to the end of the
    /// text, which is what keeps stage one a no-op.
    fn attach_leaf(&mut self, pos: usize, node: NodeRef) {
        self.leaves += 1;
        let leaf = -self.leaves;

        let length = (self.text.len() - pos) as i32;
        let edge = self.arena.alloc_edge(pos as i32, length, leaf);

        let slot = self.alphabet.dense(self.text[pos]);
        debug_assert_eq!(self.arena.node(node).children[slot], NO_EDGE);
        self.arena.node_mut(node).children[slot] = edge;
    }

    /// Moves the active point to the next shorter suffix: hop the suffix
    /// link of the origin node, then re-walk the dropped label below the
    /// link target with the skip/count trick. The walked substring is known
    /// to be present already, so whole edges are skipped and only the first
    /// symbol of each hop is inspected.
    fn follow_suffix_link(&mut self) {
        if self.point.offset == 0 {
            self.point.node = self.arena.suffix_link(self.point.node);
            self.point.edge = NO_EDGE;
            return;
        }

        // Label start of the edge the point was on; the first `offset`
        // characters of that label are the path to re-walk.
        let source_start = self.arena.edge(self.point.edge).start;
        debug_assert!(source_start >= 0);

        self.point.node = self.arena.suffix_link(self.point.node);

        let mut walked = 0;
        self.point.edge = self.child_on(self.point.node, self.text[source_start as usize]);
        debug_assert!(self.point.edge != NO_EDGE);

        while self.point.offset >= self.arena.edge(self.point.edge).length {
            let (length, child) = {
                let edge = self.arena.edge(self.point.edge);
                (edge.length, edge.child)
            };

            self.point.node = child;
            self.point.offset -= length;
            walked += length;

            if self.point.offset == 0 {
                self.point.edge = NO_EDGE;
                return;
            }

            self.point.edge = self.child_on(
                self.point.node,
                self.text[(source_start + walked) as usize],
            );
            debug_assert!(self.point.edge != NO_EDGE);
        }
    }

    /// Stage three: advances the active point by one character along
    /// `byte`. Stage two has already ensured the character is reachable.
    fn descend(&mut self, byte: u8) {
        if self.point.offset == 0 {
            self.point.edge = self.child_on(self.point.node, byte);
            debug_assert!(self.point.edge != NO_EDGE);
        }

        let edge = self.arena.edge(self.point.edge);
        // Unit edges below the dummy carry no label.
        debug_assert!(
            edge.start < 0 || self.text[(edge.start + self.point.offset) as usize] == byte
        );

        self.point.offset += 1;
        if self.point.offset == edge.length {
            self.point.node = edge.child;
            self.point.edge = NO_EDGE;
            self.point.offset = 0;
        }
    }

    fn child_on(&self, node: NodeRef, byte: u8) -> EdgeRef {
        self.arena.node(node).children[self.alphabet.dense(byte)]
    }
}
