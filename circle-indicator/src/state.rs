//! Indicator state and its clamped transitions.

use crate::color::Color;

/// The smallest meaningful segment count; fewer than two segments would make
/// a segmented ring indistinguishable from a plain disc.
pub const MIN_MAX_VALUE: u32 = 2;

/// The mutable state of a [`CircleIndicator`](crate::indicator::CircleIndicator).
///
/// All transitions clamp rather than fail: `value` always stays within
/// `[0, max_value]` and `max_value` never drops below [`MIN_MAX_VALUE`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    max_value: u32,
    value: u32,
    /// Fill color for value segments and the label.
    pub color: Color,
    /// Fill color for the inner disc.
    pub background: Color,
    /// Fill color for empty segments.
    pub empty_tone: Color,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            max_value: MIN_MAX_VALUE,
            value: 0,
            color: Color::BLUE,
            background: Color::WHITE,
            empty_tone: Color::GRAY,
        }
    }
}

impl IndicatorState {
    /// Creates state with the given bounds, clamping both inputs.
    pub fn new(max_value: u32, value: u32) -> Self {
        let mut state = Self::default();
        state.set_max_value(max_value);
        state.set_value(value);
        state
    }

    /// The current value, always within `[0, max_value]`.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The segment count, always at least [`MIN_MAX_VALUE`].
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Sets the value, clamped into `[0, max_value]`.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(self.max_value);
    }

    /// Sets the segment count, coerced to at least [`MIN_MAX_VALUE`].
    ///
    /// Also reclamps the current value into the new range, so the state never
    /// holds a value outside its own bounds. Returns `true` if the effective
    /// segment count changed, in which case cached geometry is stale.
    pub fn set_max_value(&mut self, max_value: u32) -> bool {
        let max_value = max_value.max(MIN_MAX_VALUE);
        let changed = max_value != self.max_value;
        self.max_value = max_value;
        self.value = self.value.min(max_value);
        if changed {
            tracing::debug!(max_value, value = self.value, "segment count changed");
        }
        changed
    }
}
