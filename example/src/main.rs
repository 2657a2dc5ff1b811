//! Headless demo for the circle indicator.
//!
//! Drives the widget through its measure/draw lifecycle without any GUI
//! host: the draw-command list is logged, then rasterized to the terminal by
//! a minimal [`Canvas`] consumer, showing that an arbitrary backend can
//! interpret the commands.

use circle_indicator::{
    Canvas, CircleIndicator, CircleIndicatorArgs, Color, DiscCommand, SectorCommand, TextCommand,
};
use tracing_subscriber::EnvFilter;

/// Raster dimensions in character cells. Cells are roughly twice as tall as
/// they are wide, so the grid samples two pixels horizontally per cell.
const COLS: usize = 48;
const ROWS: usize = 24;

/// Pixel box the widget is measured against.
const SIZE: (i32, i32) = (96, 96);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut indicator = CircleIndicator::new(
        CircleIndicatorArgs::default()
            .max_value(12)
            .value(0)
            .color(Color::from_hex("#1E90FF").expect("valid hex literal")),
    );
    indicator.measure(SIZE.into());

    for value in [0, 5, 12] {
        indicator.set_value(value);
        let commands = indicator.draw_commands();
        tracing::info!(
            value,
            commands = commands.len(),
            "rendering frame {value}/{}",
            indicator.max_value()
        );
        for command in &commands {
            tracing::debug!(?command);
        }

        let mut raster = AsciiCanvas::new(COLS, ROWS);
        indicator.draw(&mut raster);
        println!("\nvalue = {value}/{}", indicator.max_value());
        print!("{}", raster.frame());
    }
}

/// A terminal rasterizer for indicator draw commands.
///
/// Paints cells in command order, so later commands cover earlier ones the
/// same way a real canvas would.
struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    /// Pixel coordinates of a cell center in widget space.
    fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        let x = (col as f32 + 0.5) / self.cols as f32 * SIZE.0 as f32;
        let y = (row as f32 + 0.5) / self.rows as f32 * SIZE.1 as f32;
        (x, y)
    }

    fn paint<F>(&mut self, covers: F, glyph: char)
    where
        F: Fn(f32, f32) -> bool,
    {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (x, y) = self.cell_center(col, row);
                if covers(x, y) {
                    self.cells[row * self.cols + col] = glyph;
                }
            }
        }
    }

    fn frame(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            out.extend(&self.cells[row * self.cols..(row + 1) * self.cols]);
            out.push('\n');
        }
        out
    }
}

/// Maps a fill color to a terminal glyph by luminance.
fn glyph_for(color: Color) -> char {
    let luminance = 0.299 * color.r + 0.587 * color.g + 0.114 * color.b;
    if luminance > 0.8 {
        ' '
    } else if luminance > 0.4 {
        '·'
    } else {
        '#'
    }
}

impl Canvas for AsciiCanvas {
    fn fill_disc(&mut self, cmd: &DiscCommand) {
        let (center, radius) = (cmd.center, cmd.radius);
        self.paint(
            |x, y| (x - center.x).hypot(y - center.y) <= radius,
            glyph_for(cmd.color),
        );
    }

    fn fill_sector(&mut self, cmd: &SectorCommand) {
        let (center, radius) = (cmd.center, cmd.radius);
        let start = cmd.start_angle_degrees.rem_euclid(360.0);
        let sweep = cmd.sweep_angle_degrees;
        self.paint(
            |x, y| {
                if (x - center.x).hypot(y - center.y) > radius {
                    return false;
                }
                // The canvas y-axis points down, so atan2 already advances
                // clockwise from 3 o'clock.
                let angle = (y - center.y).atan2(x - center.x).to_degrees().rem_euclid(360.0);
                let offset = (angle - start).rem_euclid(360.0);
                offset <= sweep
            },
            glyph_for(cmd.color),
        );
    }

    fn fill_text(&mut self, cmd: &TextCommand) {
        // Centered overlay; one character per cell is as good as terminal
        // text gets.
        let row = ((cmd.position.y / SIZE.1 as f32) * self.rows as f32) as usize;
        let row = row.min(self.rows - 1);
        let col_mid = (cmd.position.x / SIZE.0 as f32) * self.cols as f32;
        let start = (col_mid - cmd.content.chars().count() as f32 / 2.0).round() as isize;
        for (i, ch) in cmd.content.chars().enumerate() {
            let col = start + i as isize;
            if (0..self.cols as isize).contains(&col) {
                self.cells[row * self.cols + col as usize] = ch;
            }
        }
    }
}
