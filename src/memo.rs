use std::collections::HashMap;

/// How a stored score relates to the true minimax value of its board.
///
/// Alpha-beta cutoffs leave some scores as bounds only, so each entry records
/// the kind of value it holds relative to the window it was computed under.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Bound {
    /// The score is the exact minimax value.
    Exact = 0,
    /// The true value is at least the score (a cutoff above `beta`).
    Lower = 1,
    /// The true value is at most the score (nothing beat `alpha`).
    Upper = 2,
}

/// Memo table key.
///
/// Captures the occupant layout and the side to move. `depth` is only filled in
/// under depth-weighted scoring, where the same layout reached at another depth
/// scores differently; otherwise it is always zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MemoKey {
    pub board: String,
    pub maximizing: bool,
    pub depth: u32,
}

#[derive(Debug, Copy, Clone)]
pub struct MemoEntry {
    pub score: i32,
    pub bound: Bound,
}

/// Maps a board state to the best score found for it. Entries are never evicted.
#[derive(Debug, Default, Clone)]
pub struct MemoTable {
    entries: HashMap<MemoKey, MemoEntry>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: &MemoKey) -> Option<&MemoEntry> {
        self.entries.get(key)
    }

    /// Checks the table for `key` and narrows the window with any bound found.
    ///
    /// Returns `Some(score)` when the stored entry settles the node under the
    /// current window, `None` when the node still has to be searched.
    pub fn probe(&self, key: &MemoKey, alpha: &mut i32, beta: &mut i32) -> Option<i32> {
        let entry = self.entries.get(key)?;
        match entry.bound {
            Bound::Exact => return Some(entry.score),
            Bound::Lower => *alpha = (*alpha).max(entry.score),
            Bound::Upper => *beta = (*beta).min(entry.score),
        }
        if *alpha >= *beta {
            return Some(entry.score);
        }
        None
    }

    /// Records the result of searching a node under the window
    /// (`alpha_orig`, `beta_orig`).
    pub fn store(&mut self, key: MemoKey, score: i32, alpha_orig: i32, beta_orig: i32) {
        let bound = if score <= alpha_orig {
            Bound::Upper
        } else if score >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.entries.insert(key, MemoEntry { score, bound });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(board: &str) -> MemoKey {
        MemoKey {
            board: board.to_string(),
            maximizing: true,
            depth: 0,
        }
    }

    #[test]
    fn full_window_stores_exact() {
        let mut table = MemoTable::new();
        table.store(key("X________"), 3, i32::MIN, i32::MAX);

        let (mut alpha, mut beta) = (i32::MIN, i32::MAX);
        assert_eq!(table.probe(&key("X________"), &mut alpha, &mut beta), Some(3));
        assert_eq!(table.get(&key("X________")).unwrap().bound, Bound::Exact);
    }

    #[test]
    fn miss_leaves_window_untouched() {
        let table = MemoTable::new();
        let (mut alpha, mut beta) = (-5, 5);

        assert_eq!(table.probe(&key("_________"), &mut alpha, &mut beta), None);
        assert_eq!((alpha, beta), (-5, 5));
    }

    #[test]
    fn lower_bound_raises_alpha() {
        let mut table = MemoTable::new();
        // Cut off at beta = 2 with a score of 4.
        table.store(key("XO_______"), 4, -10, 2);
        assert_eq!(table.get(&key("XO_______")).unwrap().bound, Bound::Lower);

        let (mut alpha, mut beta) = (-10, 10);
        assert_eq!(table.probe(&key("XO_______"), &mut alpha, &mut beta), None);
        assert_eq!((alpha, beta), (4, 10));

        let (mut alpha, mut beta) = (-10, 3);
        assert_eq!(table.probe(&key("XO_______"), &mut alpha, &mut beta), Some(4));
    }

    #[test]
    fn upper_bound_lowers_beta() {
        let mut table = MemoTable::new();
        table.store(key("XOX______"), -1, 0, 10);
        assert_eq!(table.get(&key("XOX______")).unwrap().bound, Bound::Upper);

        let (mut alpha, mut beta) = (-10, 10);
        assert_eq!(table.probe(&key("XOX______"), &mut alpha, &mut beta), None);
        assert_eq!((alpha, beta), (-10, -1));
    }

    #[test]
    fn keys_distinguish_side_to_move() {
        let mut table = MemoTable::new();
        table.store(key("X________"), 1, i32::MIN, i32::MAX);
        let other_side = MemoKey {
            maximizing: false,
            ..key("X________")
        };

        let (mut alpha, mut beta) = (i32::MIN, i32::MAX);
        assert_eq!(table.probe(&other_side, &mut alpha, &mut beta), None);
        assert_eq!(table.len(), 1);
        table.clear();
        assert!(table.is_empty());
    }
}
