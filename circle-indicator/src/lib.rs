//! A segmented circular progress indicator.
//!
//! The widget renders a numeric value out of a maximum as a ring of colored
//! arc segments with the current value drawn as centered text. It owns no
//! drawing surface: each frame is an ordered list of disc, sector and text
//! [`DrawCommand`]s that any 2D backend can consume, either directly or
//! through the [`Canvas`] trait.
//!
//! # Example
//!
//! ```
//! use circle_indicator::{CircleIndicator, CircleIndicatorArgs, Color, RecordingCanvas};
//!
//! let mut indicator = CircleIndicator::new(
//!     CircleIndicatorArgs::default()
//!         .max_value(10)
//!         .value(4)
//!         .color(Color::from_hex("#1E90FF").unwrap()),
//! );
//!
//! // The host invokes measure then draw, in that order, per layout pass.
//! indicator.measure((200, 200).into());
//! let mut canvas = RecordingCanvas::new();
//! indicator.draw(&mut canvas);
//!
//! // backing disc + 10 sectors + ring hole + value label
//! assert_eq!(canvas.commands().len(), 13);
//! ```
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod canvas;
pub mod color;
pub mod command;
pub mod geometry;
pub mod indicator;
pub mod px;
pub mod render;
pub mod state;
pub mod text;

pub use canvas::{Canvas, DrawList, RecordingCanvas, replay};
pub use color::{Color, ColorParseError};
pub use command::{DiscCommand, DrawCommand, SectorCommand, TextCommand};
pub use geometry::Geometry;
pub use indicator::{CircleIndicator, CircleIndicatorArgs, CircleIndicatorDefaults};
pub use px::{Px, PxSize};
pub use render::render;
pub use state::{IndicatorState, MIN_MAX_VALUE};
pub use text::{ApproxTextMeasurer, TextMeasurer};
