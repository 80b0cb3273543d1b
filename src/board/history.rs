use std::collections::HashMap;

use super::Position;

/// Occurrence counts of every position reached in a game.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<Position, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, position: &Position) -> u32 {
        self.counts.get(position).copied().unwrap_or(0)
    }

    /// Record one more occurrence and return the new count.
    pub(crate) fn increment(&mut self, position: Position) -> u32 {
        let count = self.counts.entry(position).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}
