//! Moves grouped by the score they yield

use std::collections::BTreeMap;

use crate::types::Score;

/// Legal moves of a state partitioned by the score each yields for the mover.
///
/// Buckets are ordered by score; moves inside a bucket keep the order in
/// which they were inserted, which for engines is the state's move
/// enumeration order. That makes [`best_move`](ScoreBundle::best_move) a
/// stable, deterministic tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBundle<M> {
    buckets: BTreeMap<Score, Vec<M>>,
}

impl<M> ScoreBundle<M> {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Append `mv` to the bucket for `score`.
    pub fn insert(&mut self, score: Score, mv: M) {
        self.buckets.entry(score).or_default().push(mv);
    }

    /// Highest score and the moves that reach it
    pub fn best(&self) -> Option<(Score, &[M])> {
        self.buckets
            .last_key_value()
            .map(|(score, moves)| (*score, moves.as_slice()))
    }

    pub fn best_score(&self) -> Option<Score> {
        self.best().map(|(score, _)| score)
    }

    /// First-enumerated move among those with the highest score
    pub fn best_move(&self) -> Option<&M> {
        self.best().and_then(|(_, moves)| moves.first())
    }

    /// Moves yielding exactly `score` (empty if none)
    pub fn moves(&self, score: Score) -> &[M] {
        self.buckets.get(&score).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct scores, lowest first
    pub fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.buckets.keys().copied()
    }

    /// Buckets from lowest to highest score
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Score, &[M])> {
        self.buckets
            .iter()
            .map(|(score, moves)| (*score, moves.as_slice()))
    }

    /// Total number of moves across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<M> Default for ScoreBundle<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_bucket_keeps_insertion_order() {
        let mut bundle = ScoreBundle::new();
        bundle.insert(Score::LOSE, 'a');
        bundle.insert(Score::WIN, 'b');
        bundle.insert(Score::TIE, 'c');
        bundle.insert(Score::WIN, 'd');

        assert_eq!(bundle.best_score(), Some(Score::WIN));
        assert_eq!(bundle.moves(Score::WIN), &['b', 'd']);
        assert_eq!(bundle.best_move(), Some(&'b'));
        assert_eq!(bundle.len(), 4);
    }

    #[test]
    fn negated_tie_lands_in_tie_bucket() {
        let mut bundle = ScoreBundle::new();
        bundle.insert(-Score::TIE, 1);
        bundle.insert(Score::TIE, 2);

        assert_eq!(bundle.scores().count(), 1);
        assert_eq!(bundle.moves(Score::TIE), &[1, 2]);
    }

    #[test]
    fn empty_bundle_has_no_best_move() {
        let bundle: ScoreBundle<u8> = ScoreBundle::default();
        assert!(bundle.is_empty());
        assert_eq!(bundle.best_move(), None);
        assert!(bundle.moves(Score::WIN).is_empty());
    }
}
