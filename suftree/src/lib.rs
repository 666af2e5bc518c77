// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Linear-time substring indexing with a suffix tree.
//!
//! This crate builds a suffix tree over a byte string using Ukkonen's
//! online algorithm and answers leftmost-occurrence queries against it. The
//! set of allowed bytes is chosen by the caller as an [`Alphabet`]; the
//! reserved [`TERMINAL`] byte is appended to the source internally so that
//! every suffix ends at its own leaf.
//!
//! # Examples
//!
//! ```
//! use suftree::{Alphabet, SuffixTree};
//!
//! let tree = SuffixTree::new(b"abcabxabcd", Alphabet::new(b"abcdx"));
//!
//! assert_eq!(tree.index_of(b"abcd"), Some(6));
//! assert_eq!(tree.index_of(b"ab"), Some(0));
//! assert!(!tree.contains(b"abd"));
//! ```

mod alphabet;
mod arena;
mod suffix_tree;
mod ukkonen;

pub use alphabet::{Alphabet, TERMINAL};
pub use suffix_tree::SuffixTree;
