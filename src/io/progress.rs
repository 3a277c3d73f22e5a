//! Progress display for draining a placement stream

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::track::PlacementCommand;

static ROLLOUT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// One progress bar tracking placed commands
pub struct RolloutProgress {
    bar: ProgressBar,
}

impl RolloutProgress {
    /// Bar expecting `total` placements
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(ROLLOUT_STYLE.clone());
        bar.set_prefix("Placing");
        Self { bar }
    }

    /// Bar that never draws, for quiet runs and tests
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Record one realized command
    pub fn advance(&self, command: &PlacementCommand) {
        let anchor = command
            .cells
            .first()
            .map_or_else(String::new, ToString::to_string);
        self.bar.set_message(format!("{} at {anchor}", command.asset));
        self.bar.inc(1);
    }

    /// Commands recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Expected number of commands
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Close the bar with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
