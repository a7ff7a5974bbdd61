use super::token::{TagIndex, Token};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Fraction of the sentence that may be blanked, as a divisor of its length
const TOKENS_PER_BLANK: usize = 4;

/// Hide a random subset of blankable tokens.
///
/// Between one and a quarter of the tokens (at least one) are hidden. Tags
/// outside the blankable set are never chosen, and a token is never hidden
/// next to one that already is. The caller's index is left untouched.
pub fn mark_blanks<R: Rng + ?Sized>(
    mut tokens: Vec<Token>,
    tag_index: &TagIndex,
    rng: &mut R,
) -> Vec<Token> {
    if tokens.is_empty() || tag_index.is_empty() {
        return tokens;
    }

    let mut working = tag_index.clone();
    let max_blanks = (tokens.len() / TOKENS_PER_BLANK).max(1);
    let mut remaining = rng.gen_range(1..=max_blanks);
    debug!(target_blanks = remaining, max_blanks, "marking blanks");

    let mut chosen: BTreeSet<usize> = BTreeSet::new();

    while remaining > 0 && !working.is_empty() {
        let tags: Vec<_> = working.keys().copied().collect();
        let Some(&tag) = tags.choose(rng) else {
            break;
        };

        if !tag.is_blankable() {
            working.remove(&tag);
            continue;
        }

        let Some(positions) = working.get_mut(&tag) else {
            continue;
        };
        let candidates: Vec<usize> = positions.iter().copied().collect();
        let Some(&position) = candidates.choose(rng) else {
            working.remove(&tag);
            continue;
        };
        positions.remove(&position);
        if positions.is_empty() {
            working.remove(&tag);
        }

        if touches_blank(&chosen, position) {
            trace!(position, %tag, "skipping position next to a blank");
            continue;
        }

        if let Some(token) = tokens.get_mut(position) {
            token.hide();
            chosen.insert(position);
            remaining -= 1;
            trace!(position, %tag, "blanked");
        }
    }

    tokens
}

/// Whether either neighbour of `position` is already a blank
fn touches_blank(chosen: &BTreeSet<usize>, position: usize) -> bool {
    let left = position.checked_sub(1);
    let right = position.checked_add(1);
    [left, right]
        .into_iter()
        .flatten()
        .any(|neighbour| chosen.contains(&neighbour))
}
