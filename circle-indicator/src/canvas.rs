//! Backend seam for consuming draw commands.

use smallvec::SmallVec;

use crate::command::{DiscCommand, DrawCommand, SectorCommand, TextCommand};

/// A draw pass's command list.
///
/// Inline capacity covers the common case of a backing disc, a handful of
/// sectors, the punch disc and the value text without a heap allocation.
pub type DrawList = SmallVec<[DrawCommand; 16]>;

/// A 2D drawing surface supplied by the host.
///
/// The renderer uses a canvas transiently during one draw call and never
/// retains it. Implementations only need the three fill primitives; stroking,
/// clipping and transforms stay on the host side.
pub trait Canvas {
    /// Fills a full disc.
    fn fill_disc(&mut self, cmd: &DiscCommand);

    /// Fills a pie sector.
    fn fill_sector(&mut self, cmd: &SectorCommand);

    /// Draws a text run.
    fn fill_text(&mut self, cmd: &TextCommand);
}

/// Replays a command list onto a canvas in order.
pub fn replay(commands: &[DrawCommand], canvas: &mut dyn Canvas) {
    for command in commands {
        match command {
            DrawCommand::Disc(cmd) => canvas.fill_disc(cmd),
            DrawCommand::Sector(cmd) => canvas.fill_sector(cmd),
            DrawCommand::Text(cmd) => canvas.fill_text(cmd),
        }
    }
}

/// A canvas that records every command it receives.
///
/// Used by tests and headless hosts that want the raw command list back.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: DrawList,
}

impl RecordingCanvas {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the recorder and returns the command list.
    pub fn into_commands(self) -> DrawList {
        self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn fill_disc(&mut self, cmd: &DiscCommand) {
        self.commands.push(cmd.clone().into());
    }

    fn fill_sector(&mut self, cmd: &SectorCommand) {
        self.commands.push(cmd.clone().into());
    }

    fn fill_text(&mut self, cmd: &TextCommand) {
        self.commands.push(cmd.clone().into());
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_replay_preserves_order() {
        let commands = vec![
            DrawCommand::Disc(DiscCommand {
                center: Vec2::ZERO,
                radius: 5.0,
                color: Color::WHITE,
            }),
            DrawCommand::Text(TextCommand {
                position: Vec2::ZERO,
                content: "2".to_string(),
                size: 8.0,
                color: Color::BLUE,
            }),
        ];

        let mut recorder = RecordingCanvas::new();
        replay(&commands, &mut recorder);
        assert_eq!(recorder.commands(), commands.as_slice());
    }
}
