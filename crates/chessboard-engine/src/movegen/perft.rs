//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Promotions always produce a queen, so only positions whose tree contains
//! no promotions match the published tables.

use super::all_legal_moves;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(position, position.next_turn);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        if let Some(plan) = position.plan(from, to) {
            let mut next = position.clone();
            next.apply(&plan);
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Perft with divide - node count below each root move, keyed "e2e4".
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = all_legal_moves(position, position.next_turn)
        .into_iter()
        .filter_map(|(from, to)| {
            let plan = position.plan(from, to)?;
            let mut next = position.clone();
            next.apply(&plan);
            let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
            Some((format!("{}{}", from, to), nodes))
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
