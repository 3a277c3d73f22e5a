//! Finite, cancellable queue of placement commands

use std::collections::VecDeque;

use crate::spatial::TrackGrid;
use crate::track::walker::{PlacementCommand, TrackWalker};

/// Placement commands handed out one at a time
///
/// The host drains the stream at its own pace, for example one command per frame.
/// Cancelling discards everything not yet handed out.
#[derive(Debug, Clone, Default)]
pub struct PlacementStream {
    pending: VecDeque<PlacementCommand>,
    emitted: usize,
    cancelled: bool,
}

impl PlacementStream {
    /// Walk `grid` once and queue every command it produces
    pub fn from_grid(grid: &TrackGrid, spacing: f32) -> Self {
        TrackWalker::new(grid, spacing).collect()
    }

    /// Commands already handed out
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Commands still queued
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Commands handed out plus commands still queued
    pub fn total(&self) -> usize {
        self.emitted + self.pending.len()
    }

    /// Whether nothing is left to hand out
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether [`PlacementStream::cancel`] was called
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Next command without consuming it
    pub fn peek(&self) -> Option<&PlacementCommand> {
        self.pending.front()
    }

    /// Discard all remaining commands, returning how many were dropped
    pub fn cancel(&mut self) -> usize {
        let discarded = self.pending.len();
        self.pending.clear();
        self.cancelled = true;
        discarded
    }
}

impl Iterator for PlacementStream {
    type Item = PlacementCommand;

    fn next(&mut self) -> Option<Self::Item> {
        let command = self.pending.pop_front()?;
        self.emitted += 1;
        Some(command)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl FromIterator<PlacementCommand> for PlacementStream {
    fn from_iter<I: IntoIterator<Item = PlacementCommand>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
            emitted: 0,
            cancelled: false,
        }
    }
}
