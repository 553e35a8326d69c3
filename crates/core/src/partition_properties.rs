// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for partitioner invariants.

use indexmap::IndexMap;
use proptest::prelude::*;

use super::*;
use crate::marker::{end_marker, start_marker};

const NAMES: [&str; 3] = ["alpha", "beta", "gamma"];

fn names() -> Vec<String> {
    NAMES.iter().map(|n| n.to_string()).collect()
}

/// A generated input fragment: a residual word or a complete span.
#[derive(Debug, Clone)]
enum Segment {
    Residual(String),
    Span { name: usize, payload: Vec<String> },
}

/// Strategy for payload/residual words. Dot-free, so generated words can
/// never collide with a derived marker.
fn word() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,8}".prop_map(String::from)
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        word().prop_map(Segment::Residual),
        (0..NAMES.len(), prop::collection::vec(word(), 0..4))
            .prop_map(|(name, payload)| Segment::Span { name, payload }),
    ]
}

fn segments() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(segment(), 0..10)
}

/// Flatten segments into the token stream the partitioner consumes.
fn build_tokens(segments: &[Segment]) -> Vec<String> {
    let mut tokens = Vec::new();
    for segment in segments {
        match segment {
            Segment::Residual(word) => tokens.push(word.clone()),
            Segment::Span { name, payload } => {
                tokens.push(start_marker(NAMES[*name]));
                tokens.extend(payload.iter().cloned());
                tokens.push(end_marker(NAMES[*name]));
            }
        }
    }
    tokens
}

proptest! {
    /// Invariant: every input token lands in exactly one output sequence,
    /// markers are consumed, nothing else is added or dropped.
    #[test]
    fn tokens_are_conserved(segments in segments()) {
        let names = names();
        let tokens = build_tokens(&segments);
        let result = Partitioner::partition(&names, &tokens).unwrap();

        let mut expected_groups: IndexMap<String, Vec<String>> =
            names.iter().map(|n| (n.clone(), Vec::new())).collect();
        let mut expected_residual = Vec::new();
        for segment in &segments {
            match segment {
                Segment::Residual(word) => expected_residual.push(word.clone()),
                Segment::Span { name, payload } => expected_groups
                    .entry(NAMES[*name].to_string())
                    .or_default()
                    .extend(payload.iter().cloned()),
            }
        }

        prop_assert_eq!(result.groups, expected_groups);
        prop_assert_eq!(result.residual, expected_residual);
    }

    /// Invariant: every declared name is a key in the result, matched or not.
    #[test]
    fn declared_names_always_keyed(segments in segments()) {
        let names = names();
        let tokens = build_tokens(&segments);
        let result = Partitioner::partition(&names, &tokens).unwrap();
        let keys: Vec<&String> = result.groups.keys().collect();
        prop_assert_eq!(keys, names.iter().collect::<Vec<_>>());
    }

    /// Invariant: a span left open at end of input always fails, naming its
    /// closer and the position of the opening marker.
    #[test]
    fn open_span_always_fails(
        segments in segments(),
        name in 0..NAMES.len(),
        payload in prop::collection::vec(word(), 0..4),
    ) {
        let names = names();
        let mut tokens = build_tokens(&segments);
        let opened_at = tokens.len();
        tokens.push(start_marker(NAMES[name]));
        tokens.extend(payload);

        let err = Partitioner::partition(&names, &tokens).unwrap_err();
        prop_assert_eq!(
            err,
            PartitionError::UnterminatedGroup { expected: end_marker(NAMES[name]), opened_at }
        );
    }
}
