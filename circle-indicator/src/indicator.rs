//! The segmented circle indicator widget.
//!
//! ## Usage
//!
//! Use to show a numeric value out of a maximum as a ring of colored arc
//! segments with the value drawn in the middle.
//!
//! ```
//! use circle_indicator::{CircleIndicator, CircleIndicatorArgs, RecordingCanvas};
//!
//! let mut indicator = CircleIndicator::new(
//!     CircleIndicatorArgs::default().max_value(10).value(4),
//! );
//! indicator.measure((200, 200).into());
//!
//! let mut canvas = RecordingCanvas::new();
//! indicator.draw(&mut canvas);
//! assert!(!canvas.commands().is_empty());
//! ```

use derive_setters::Setters;

use crate::{
    canvas::{Canvas, DrawList, replay},
    color::Color,
    geometry::Geometry,
    px::PxSize,
    render::render,
    state::IndicatorState,
    text::{ApproxTextMeasurer, TextMeasurer},
};

/// Default values for [`CircleIndicator`].
pub struct CircleIndicatorDefaults;

impl CircleIndicatorDefaults {
    /// Default segment count.
    pub const MAX_VALUE: u32 = 2;
    /// Default value.
    pub const VALUE: u32 = 0;
    /// Default fill color for value segments and the label.
    pub const COLOR: Color = Color::BLUE;
    /// Default fill color for the inner disc.
    pub const BACKGROUND_COLOR: Color = Color::WHITE;
}

/// Arguments for [`CircleIndicator`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct CircleIndicatorArgs {
    /// Number of ring segments, coerced to at least 2.
    pub max_value: u32,
    /// Filled segment count, clamped to `[0, max_value]`.
    pub value: u32,
    /// Fill color for value segments and the label.
    pub color: Color,
    /// Fill color for the inner disc and ring hole.
    pub background_color: Color,
}

impl Default for CircleIndicatorArgs {
    fn default() -> Self {
        Self {
            max_value: CircleIndicatorDefaults::MAX_VALUE,
            value: CircleIndicatorDefaults::VALUE,
            color: CircleIndicatorDefaults::COLOR,
            background_color: CircleIndicatorDefaults::BACKGROUND_COLOR,
        }
    }
}

/// A circular, segmented progress indicator.
///
/// The host drives two lifecycle calls per layout pass, strictly in order:
/// [`measure`](Self::measure) computes and caches the ring geometry for the
/// available size, then [`draw`](Self::draw) replays the frame's commands
/// onto the host canvas. All state transitions clamp silently; no operation
/// fails.
pub struct CircleIndicator {
    state: IndicatorState,
    geometry: Option<Geometry>,
    measurer: Box<dyn TextMeasurer>,
    needs_redraw: bool,
}

impl CircleIndicator {
    /// Creates an indicator with host font metrics.
    pub fn with_measurer(args: CircleIndicatorArgs, measurer: Box<dyn TextMeasurer>) -> Self {
        let mut state = IndicatorState::new(args.max_value, args.value);
        state.color = args.color;
        state.background = args.background_color;
        Self {
            state,
            geometry: None,
            measurer,
            needs_redraw: true,
        }
    }

    /// Creates an indicator using the built-in approximate font metrics.
    pub fn new(args: CircleIndicatorArgs) -> Self {
        Self::with_measurer(args, Box::new(ApproxTextMeasurer))
    }

    /// The current value.
    pub fn value(&self) -> u32 {
        self.state.value()
    }

    /// The current segment count.
    pub fn max_value(&self) -> u32 {
        self.state.max_value()
    }

    /// The geometry of the last measure pass, if one happened.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Sets the value, clamped into `[0, max_value]`, and requests a redraw.
    pub fn set_value(&mut self, value: u32) {
        self.state.set_value(value);
        self.needs_redraw = true;
    }

    /// Sets the segment count, coerced to at least 2.
    ///
    /// Reclamps the current value into the new range and invalidates cached
    /// geometry; the next measure pass recomputes it.
    pub fn set_max_value(&mut self, max_value: u32) {
        if self.state.set_max_value(max_value) {
            self.geometry = None;
        }
        self.needs_redraw = true;
    }

    /// Sets the fill color for value segments and the label.
    ///
    /// Color changes never affect geometry.
    pub fn set_color(&mut self, color: Color) {
        self.state.color = color;
        self.needs_redraw = true;
    }

    /// Sets the fill color for the inner disc and ring hole.
    pub fn set_background_color(&mut self, color: Color) {
        self.state.background = color;
        self.needs_redraw = true;
    }

    /// Returns whether a redraw was requested since the last call, clearing
    /// the flag. Retained-mode hosts poll this to invalidate their surface.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Measure pass: computes geometry for the available size.
    ///
    /// The widget always occupies the full box it is given, so the returned
    /// size echoes the input. Degenerate sizes are fine; they produce a zero
    /// radius and the draw pass emits nothing.
    pub fn measure(&mut self, available: PxSize) -> PxSize {
        self.geometry = Some(Geometry::compute(
            available,
            self.state.max_value(),
            self.measurer.as_ref(),
        ));
        available
    }

    /// The draw commands for the current frame.
    ///
    /// Empty until the first measure pass.
    pub fn draw_commands(&self) -> DrawList {
        match &self.geometry {
            Some(geometry) => render(&self.state, geometry, self.measurer.as_ref()),
            None => DrawList::new(),
        }
    }

    /// Draw pass: replays the frame's commands onto the host canvas.
    ///
    /// The canvas is only borrowed for the duration of the call.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let commands = self.draw_commands();
        replay(&commands, canvas);
        self.needs_redraw = false;
    }
}
