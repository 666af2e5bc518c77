// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use quickcheck::{quickcheck, TestResult};
use suftree::{Alphabet, SuffixTree};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn lowercase_alphabet() -> Alphabet {
    Alphabet::new(LOWERCASE)
}

/// Folds arbitrary bytes onto `'a'..='z'` so generated strings stay inside
/// the alphabet.
fn to_lowercase(seed: &[u8]) -> Vec<u8> {
    seed.iter().map(|byte| b'a' + byte % 26).collect()
}

/// Deterministic xorshift stream over a three-letter alphabet. The small
/// alphabet forces repeated substrings, which is where edge splits and
/// suffix links actually get exercised.
fn pseudo_random_text(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            b'a' + (state % 3) as u8
        })
        .collect()
}

#[test]
fn reference_scenarios() {
    let cases: &[(&[u8], &[u8], Option<usize>)] = &[
        (b"mississipi", b"issip", Some(4)),
        (b"mississipi", b"iss", Some(1)),
        (b"mississipi", b"xyz", None),
        (b"banana", b"ana", Some(1)),
        (b"banana", b"", Some(0)),
        (b"abcabxabcd", b"abcd", Some(6)),
        (b"aaaaa", b"aaa", Some(0)),
    ];

    for &(source, pattern, expected) in cases {
        let tree = SuffixTree::new(source, lowercase_alphabet());

        assert_eq!(
            tree.index_of(pattern),
            expected,
            "source {:?} pattern {:?}",
            std::str::from_utf8(source).unwrap(),
            std::str::from_utf8(pattern).unwrap(),
        );
        assert_eq!(tree.contains(pattern), expected.is_some());
    }
}

#[test]
fn every_suffix_is_found_at_or_before_its_own_position() {
    for &len in &[0usize, 1, 2, 8, 64, 1024] {
        let source = pseudo_random_text(len);
        let tree = SuffixTree::new(&source, lowercase_alphabet());

        for i in 0..source.len() {
            let position = tree
                .index_of(&source[i..])
                .expect("every suffix is a substring");
            assert!(position <= i);
            assert_eq!(&source[position..position + source.len() - i], &source[i..]);
        }
    }
}

#[test]
fn every_window_is_found_with_a_witness() {
    for &len in &[0usize, 1, 2, 8, 64, 1024] {
        let source = pseudo_random_text(len);
        let tree = SuffixTree::new(&source, lowercase_alphabet());

        assert_eq!(tree.index_of(b""), Some(0));

        for i in 0..source.len() {
            for j in (i + 1)..=source.len().min(i + 32) {
                let pattern = &source[i..j];
                let position = tree.index_of(pattern).expect("window must be found");
                assert!(position <= i);
                assert_eq!(&source[position..position + pattern.len()], pattern);
            }
        }
    }
}

#[test]
fn quickcheck_queries_match_a_naive_scan() {
    fn prop(text: Vec<u8>, pattern: Vec<u8>) -> bool {
        let source = to_lowercase(&text);
        let pattern = to_lowercase(&pattern);
        let tree = SuffixTree::new(&source, lowercase_alphabet());

        let expected = if pattern.is_empty() {
            Some(0)
        } else {
            source
                .windows(pattern.len())
                .position(|window| window == &pattern[..])
        };

        tree.index_of(&pattern) == expected
    }

    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn quickcheck_planted_substrings_are_found() {
    fn prop(text: Vec<u8>, start: usize, len: usize) -> TestResult {
        let source = to_lowercase(&text);
        if source.is_empty() {
            return TestResult::discard();
        }

        let start = start % source.len();
        let len = len % (source.len() - start + 1);
        let pattern = &source[start..start + len];

        let tree = SuffixTree::new(&source, lowercase_alphabet());
        match tree.index_of(pattern) {
            Some(position) => TestResult::from_bool(
                position <= start && source[position..position + len] == *pattern,
            ),
            None => TestResult::failed(),
        }
    }

    quickcheck(prop as fn(Vec<u8>, usize, usize) -> TestResult);
}

#[test]
fn quickcheck_two_builds_answer_identically() {
    fn prop(text: Vec<u8>, pattern: Vec<u8>) -> bool {
        let source = to_lowercase(&text);
        let pattern = to_lowercase(&pattern);

        let first = SuffixTree::new(&source, lowercase_alphabet());
        let second = SuffixTree::new(&source, lowercase_alphabet());

        first.index_of(&pattern) == second.index_of(&pattern)
    }

    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}
