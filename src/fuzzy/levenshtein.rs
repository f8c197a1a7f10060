// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance.
//!
//! A fuzzy query only ever asks "is this vocabulary term within `k` edits?",
//! so the computation gives up as soon as the answer is no. Two cheap checks
//! do most of the rejecting: the length gap, and the smallest value in the
//! current DP row.

/// Edit distance between `query` and `candidate` in characters, or `None` when
/// it is greater than `max`.
pub fn levenshtein_bounded(query: &str, candidate: &str, max: usize) -> Option<usize> {
    let query: Vec<char> = query.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();

    if query.len().abs_diff(candidate.len()) > max {
        return None;
    }
    if query.is_empty() || candidate.is_empty() {
        return Some(query.len().max(candidate.len()));
    }

    let mut previous: Vec<usize> = (0..=candidate.len()).collect();
    let mut current = vec![0; candidate.len() + 1];

    for (i, &qc) in query.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, &cc) in candidate.iter().enumerate() {
            let substitute = previous[j] + usize::from(qc != cc);
            let delete = previous[j + 1] + 1;
            let insert = current[j] + 1;
            current[j + 1] = substitute.min(delete).min(insert);
            row_min = row_min.min(current[j + 1]);
        }

        // No cell can shrink in later rows
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[candidate.len()];
    (distance <= max).then_some(distance)
}

pub fn levenshtein_within(query: &str, candidate: &str, max: usize) -> bool {
    levenshtein_bounded(query, candidate, max).is_some()
}
