use std::time::{Duration, Instant};

use crate::gradient::{Direction, linear_gradient};
use crate::mix::MixResult;

/// How long the "copied" indicator stays up after a copy
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1500);

/// Write-only text sink for the copy action. The write is fire-and-forget:
/// a failed write never reaches the mixing state, so there is no error
/// channel.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Presentation state around the store and mixer: gradient direction,
/// which picker popover is open, the applied background, and the
/// transient "copied" indicator.
///
/// None of this feeds back into the mix computation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    direction: Direction,
    open_picker: Option<usize>,
    background: Option<String>,
    copied_until: Option<Instant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn open_picker(&self) -> Option<usize> {
        self.open_picker
    }

    /// Clicking an entry's swatch opens its picker; clicking the one that
    /// is already open closes it.
    pub fn toggle_picker(&mut self, index: usize) {
        self.open_picker = if self.open_picker == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Pointer interaction outside all registered picker regions
    pub fn dismiss_picker(&mut self) {
        self.open_picker = None;
    }

    /// Keep the open-picker index aligned with a store removal: the
    /// removed entry's picker closes, pickers behind it shift down.
    pub fn entry_removed(&mut self, index: usize) {
        self.open_picker = match self.open_picker {
            Some(open) if open == index => None,
            Some(open) if open > index => Some(open - 1),
            other => other,
        };
    }

    /// The applied background descriptor, once "apply" has been used
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Apply the current mix as the page background, replacing the
    /// initial backdrop.
    pub fn apply_background(&mut self, mix: &MixResult) {
        self.background = Some(linear_gradient(self.direction, mix));
    }

    /// Copy the rgba text through the clipboard seam and arm the "copied"
    /// indicator for [`COPIED_FEEDBACK`] from `now`. Copying again re-arms
    /// the deadline instead of stacking reverts.
    pub fn copy_mix(&mut self, clipboard: &mut dyn Clipboard, mix: &MixResult, now: Instant) {
        clipboard.write_text(&mix.to_string());
        self.copied_until = Some(now + COPIED_FEEDBACK);
    }

    /// Whether the "copied" indicator should still be showing at `now`
    pub fn copied_visible(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|deadline| now < deadline)
    }
}
