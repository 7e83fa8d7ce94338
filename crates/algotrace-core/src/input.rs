//! Input and demo helpers.
//!
//! [`parse_delimited_numbers`] turns the free-text array field of a playground
//! into numbers and never fails. The random helpers produce demo inputs; they
//! take any [`Rng`] so tests and reproducible demos can pass a seeded
//! `ChaCha8Rng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{Graph, GraphPreset};

/// Parses a comma-separated list of integers.
///
/// Tokens are trimmed and empty tokens dropped. Each token contributes its
/// leading integer (optional sign followed by digits), so `"12px"` yields 12;
/// tokens with no leading digits, or whose value does not fit in `i64`, are
/// skipped.
pub fn parse_delimited_numbers(text: &str) -> Vec<i64> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_leading_integer)
        .collect()
}

fn parse_leading_integer(token: &str) -> Option<i64> {
    let (sign_len, rest) = match token.as_bytes().first() {
        Some(b'-') | Some(b'+') => (1, &token[1..]),
        _ => (0, token),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

/// Generates `size` values uniformly distributed in `1..=max`.
///
/// A `max` of zero is treated as one.
pub fn random_array<R: Rng + ?Sized>(size: usize, max: i64, rng: &mut R) -> Vec<i64> {
    let max = max.max(1);
    (0..size).map(|_| rng.gen_range(1..=max)).collect()
}

/// Like [`random_array`], sorted ascending (binary-search demos).
pub fn random_sorted_array<R: Rng + ?Sized>(size: usize, max: i64, rng: &mut R) -> Vec<i64> {
    let mut values = random_array(size, max, rng);
    values.sort_unstable();
    values
}

/// Returns the requested preset, or a uniformly chosen one for `None`.
pub fn random_graph<R: Rng + ?Sized>(kind: Option<GraphPreset>, rng: &mut R) -> (GraphPreset, Graph) {
    let preset = match kind {
        Some(preset) => preset,
        None => *GraphPreset::ALL
            .choose(rng)
            .unwrap_or(&GraphPreset::Tree),
    };
    (preset, preset.build())
}

/// Picks an element of `values` to use as a search target, if any.
pub fn random_target<R: Rng + ?Sized>(values: &[i64], rng: &mut R) -> Option<i64> {
    values.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parses_spaced_list() {
        assert_eq!(parse_delimited_numbers("5, 2, 8, 1, 9, 3"), vec![5, 2, 8, 1, 9, 3]);
    }

    #[test]
    fn drops_empty_and_non_numeric_tokens() {
        assert_eq!(parse_delimited_numbers("5,,abc,3"), vec![5, 3]);
        assert_eq!(parse_delimited_numbers(""), Vec::<i64>::new());
        assert_eq!(parse_delimited_numbers(" , ,"), Vec::<i64>::new());
    }

    #[test]
    fn keeps_signs_and_leading_integer() {
        assert_eq!(parse_delimited_numbers("-2, +4, 7.9, 12px, -, +"), vec![-2, 4, 7, 12]);
    }

    #[test]
    fn skips_values_outside_i64() {
        assert_eq!(parse_delimited_numbers("1, 99999999999999999999, 2"), vec![1, 2]);
    }

    #[test]
    fn parsing_is_idempotent_through_rendering() {
        let once = parse_delimited_numbers("5, 2, x, 8");
        let rendered: Vec<String> = once.iter().map(|v| v.to_string()).collect();
        let twice = parse_delimited_numbers(&rendered.join(","));
        assert_eq!(once, twice);
    }

    #[test]
    fn random_array_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let values = random_array(200, 10, &mut rng);
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (1..=10).contains(v)));

        let degenerate = random_array(5, 0, &mut rng);
        assert!(degenerate.iter().all(|v| *v == 1));
    }

    #[test]
    fn random_sorted_array_is_sorted() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let values = random_sorted_array(50, 100, &mut rng);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn seeded_helpers_are_reproducible() {
        let a = random_array(20, 100, &mut ChaCha8Rng::seed_from_u64(99));
        let b = random_array(20, 100, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn random_graph_honors_requested_kind() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (preset, graph) = random_graph(Some(GraphPreset::Cycle), &mut rng);
        assert_eq!(preset, GraphPreset::Cycle);
        assert_eq!(graph.edge_count(), 7);

        let (any, graph) = random_graph(None, &mut rng);
        assert!(GraphPreset::ALL.contains(&any));
        assert!(graph.node_count() > 0);
    }

    #[test]
    fn random_target_comes_from_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let values = [4, 8, 15];
        let target = random_target(&values, &mut rng).unwrap();
        assert!(values.contains(&target));
        assert_eq!(random_target(&[], &mut rng), None);
    }
}
