//! Opponent gunner: hunt-and-target shot selection.
//!
//! The gunner hunts random untried squares until something is hit, then
//! works the hit's orthogonal neighbors until the ship goes down,
//! preferring to continue along a discovered axis. No probability maps;
//! the linear-ship geometry does the work.

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::collections::VecDeque;

use rand::Rng;

use crate::board::Mask;
use crate::common::ShotResult;
use crate::config::GRID_SIZE;

/// Upper bound on random draws per hunt. When it runs out the last draw
/// is used even if already fired — only reachable with the board nearly
/// exhausted, at which point the game is ending anyway.
const HUNT_DRAWS: usize = 400;

/// Shot-selection state for the scripted opponent.
#[derive(Debug, Clone, Default)]
pub struct AiGunner {
    fired: Mask,
    queue: VecDeque<(usize, usize)>,
    last_hit: Option<(usize, usize)>,
}

impl AiGunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Squares the gunner has fired at so far.
    pub fn fired(&self) -> Mask {
        self.fired
    }

    /// Follow-up candidates queued in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.queue.iter().copied()
    }

    /// True while the gunner is working a lead rather than hunting.
    pub fn has_lead(&self) -> bool {
        self.last_hit.is_some() || !self.queue.is_empty()
    }

    /// Choose the next square to fire at.
    ///
    /// Queued follow-ups win over hunting; stale entries (already fired
    /// via another path) are dropped on the way out.
    pub fn pick_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        while let Some((row, col)) = self.queue.pop_front() {
            if !self.fired.get(row, col).unwrap_or(false) {
                return (row, col);
            }
        }
        let mut shot = (0, 0);
        for _ in 0..HUNT_DRAWS {
            shot = (
                rng.random_range(0..GRID_SIZE),
                rng.random_range(0..GRID_SIZE),
            );
            if !self.fired.get(shot.0, shot.1).unwrap_or(false) {
                break;
            }
        }
        shot
    }

    /// Fold the result of the shot at (`row`, `col`) back into the
    /// gunner's state.
    pub fn record_result(&mut self, row: usize, col: usize, result: ShotResult) {
        let _ = self.fired.set(row, col);
        match result {
            ShotResult::Miss => {}
            ShotResult::Hit(_) => {
                let fresh: Vec<(usize, usize)> = neighbors(row, col)
                    .filter(|&(r, c)| !self.fired.get(r, c).unwrap_or(false))
                    .collect();
                match self.last_hit {
                    // two hits on a line: probe along that axis before
                    // flanking squares
                    Some((prev_row, prev_col)) if prev_row == row || prev_col == col => {
                        let row_line = prev_row == row;
                        let (inline, flank): (Vec<_>, Vec<_>) = fresh
                            .into_iter()
                            .partition(|&(r, c)| if row_line { r == row } else { c == col });
                        for &cand in flank.iter().rev() {
                            self.queue.push_front(cand);
                        }
                        for &cand in inline.iter().rev() {
                            self.queue.push_front(cand);
                        }
                    }
                    _ => {
                        for &cand in fresh.iter().rev() {
                            self.queue.push_front(cand);
                        }
                    }
                }
                self.last_hit = Some((row, col));
            }
            ShotResult::Sunk(_) => {
                // lead closed; back to hunting
                self.queue.clear();
                self.last_hit = None;
            }
        }
    }
}

/// In-bounds orthogonal neighbors: up, down, left, right.
fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = (row > 0).then(|| (row - 1, col));
    let down = (row + 1 < GRID_SIZE).then(|| (row + 1, col));
    let left = (col > 0).then(|| (row, col - 1));
    let right = (col + 1 < GRID_SIZE).then(|| (row, col + 1));
    [up, down, left, right].into_iter().flatten()
}
