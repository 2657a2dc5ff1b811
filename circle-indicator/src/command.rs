//! Immutable draw commands emitted by the renderer.
//!
//! The widget never talks to a drawing surface directly; each draw pass
//! produces an ordered command list that any backend can consume, either by
//! matching on [`DrawCommand`] or through the [`Canvas`](crate::canvas::Canvas)
//! trait.

use glam::Vec2;

use crate::color::Color;

/// Draw command for a filled disc.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscCommand {
    /// Center of the disc.
    pub center: Vec2,
    /// Radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
}

/// Draw command for a filled pie sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCommand {
    /// Center of the circle the sector belongs to.
    pub center: Vec2,
    /// Radius in pixels.
    pub radius: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Fill color.
    pub color: Color,
}

/// Draw command for a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Baseline position; `x` is the horizontal center of the run.
    pub position: Vec2,
    /// The text to draw.
    pub content: String,
    /// Text size in the host's glyph-scaling unit.
    pub size: f32,
    /// Fill color.
    pub color: Color,
}

/// One drawing operation of a draw pass.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a full disc.
    Disc(DiscCommand),
    /// Fill a pie sector.
    Sector(SectorCommand),
    /// Draw a text run.
    Text(TextCommand),
}

impl DrawCommand {
    /// The fill color of this command.
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Disc(cmd) => cmd.color,
            DrawCommand::Sector(cmd) => cmd.color,
            DrawCommand::Text(cmd) => cmd.color,
        }
    }

    /// Applies an opacity multiplier to this command's color.
    pub fn apply_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        let color = match self {
            DrawCommand::Disc(cmd) => &mut cmd.color,
            DrawCommand::Sector(cmd) => &mut cmd.color,
            DrawCommand::Text(cmd) => &mut cmd.color,
        };
        *color = color.with_alpha(color.a * opacity);
    }
}

impl From<DiscCommand> for DrawCommand {
    fn from(cmd: DiscCommand) -> Self {
        DrawCommand::Disc(cmd)
    }
}

impl From<SectorCommand> for DrawCommand {
    fn from(cmd: SectorCommand) -> Self {
        DrawCommand::Sector(cmd)
    }
}

impl From<TextCommand> for DrawCommand {
    fn from(cmd: TextCommand) -> Self {
        DrawCommand::Text(cmd)
    }
}
