//! Turns indicator state and geometry into an ordered command list.

use glam::Vec2;

use crate::{
    canvas::DrawList,
    command::{DiscCommand, SectorCommand, TextCommand},
    geometry::Geometry,
    state::IndicatorState,
    text::TextMeasurer,
};

/// Rotation applied so segment 0 begins at the 12 o'clock position instead of
/// the canvas-native 3 o'clock.
const START_ANGLE_OFFSET: f32 = -90.0;

/// Produces the draw commands for one frame.
///
/// Order matters: backing disc, ring fill (per-segment sectors or a single
/// solid disc at the extremes), the inner disc that punches the ring hole,
/// then the value label. A zero radius yields an empty list.
pub fn render(
    state: &IndicatorState,
    geometry: &Geometry,
    measurer: &dyn TextMeasurer,
) -> DrawList {
    let mut commands = DrawList::new();
    if geometry.radius <= 0.0 {
        return commands;
    }

    let center = geometry.center;
    let value = state.value();
    let max_value = state.max_value();

    commands.push(
        DiscCommand {
            center,
            radius: geometry.radius,
            color: state.background,
        }
        .into(),
    );

    if value > 0 && value < max_value {
        // The loop seeds the running angle with one gap, so the first
        // segment sits one delimiter past 12 o'clock.
        let mut angle = START_ANGLE_OFFSET + geometry.gap_span;
        for i in 0..max_value {
            let color = if i < value {
                state.color
            } else {
                state.empty_tone
            };
            commands.push(
                SectorCommand {
                    center,
                    radius: geometry.radius,
                    start_angle_degrees: angle,
                    sweep_angle_degrees: geometry.arc_span,
                    color,
                }
                .into(),
            );
            angle += geometry.arc_span + geometry.gap_span;
        }
    } else {
        // At the extremes the segmented ring is indistinguishable from a
        // solid circle, so a single fill replaces the loop.
        let color = if value == 0 {
            state.empty_tone
        } else {
            state.color
        };
        commands.push(
            DiscCommand {
                center,
                radius: geometry.radius,
                color,
            }
            .into(),
        );
    }

    commands.push(
        DiscCommand {
            center,
            radius: geometry.radius - geometry.stroke_width,
            color: state.background,
        }
        .into(),
    );

    let label = value.to_string();
    let half_height = measurer.text_height(&label, geometry.text_size) / 2.0;
    commands.push(
        TextCommand {
            position: Vec2::new(center.x, center.y + half_height),
            content: label,
            size: geometry.text_size,
            color: state.color,
        }
        .into(),
    );

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        command::DrawCommand,
        px::PxSize,
        text::ApproxTextMeasurer,
    };

    const TOLERANCE: f32 = 1e-4;

    fn render_at(max_value: u32, value: u32) -> (DrawList, Geometry) {
        let state = IndicatorState::new(max_value, value);
        let geometry = Geometry::compute(PxSize::from((200, 200)), max_value, &ApproxTextMeasurer);
        (render(&state, &geometry, &ApproxTextMeasurer), geometry)
    }

    #[test]
    fn test_mid_value_emits_one_sector_per_segment() {
        let (commands, geometry) = render_at(10, 4);
        assert_eq!(commands.len(), 1 + 10 + 1 + 1);

        let sectors: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sector(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(sectors.len(), 10);

        for (i, sector) in sectors.iter().enumerate() {
            let expected_color = if i < 4 { Color::BLUE } else { Color::GRAY };
            assert_eq!(sector.color, expected_color, "sector {i}");
            assert!((sector.sweep_angle_degrees - geometry.arc_span).abs() < TOLERANCE);

            let expected_start = -90.0
                + geometry.gap_span
                + i as f32 * (geometry.arc_span + geometry.gap_span);
            assert!(
                (sector.start_angle_degrees - expected_start).abs() < TOLERANCE,
                "sector {i} starts at {} instead of {expected_start}",
                sector.start_angle_degrees
            );
        }
    }

    #[test]
    fn test_zero_value_is_a_solid_empty_disc() {
        let (commands, _) = render_at(10, 0);
        assert!(
            commands
                .iter()
                .all(|c| !matches!(c, DrawCommand::Sector(_)))
        );
        assert!(matches!(
            &commands[1],
            DrawCommand::Disc(d) if d.color == Color::GRAY
        ));
    }

    #[test]
    fn test_full_value_is_a_solid_value_disc() {
        let (commands, _) = render_at(10, 10);
        assert!(
            commands
                .iter()
                .all(|c| !matches!(c, DrawCommand::Sector(_)))
        );
        assert!(matches!(
            &commands[1],
            DrawCommand::Disc(d) if d.color == Color::BLUE
        ));
    }

    #[test]
    fn test_ring_hole_is_punched_with_background() {
        let (commands, geometry) = render_at(10, 4);
        let punch = &commands[commands.len() - 2];
        match punch {
            DrawCommand::Disc(d) => {
                assert_eq!(d.color, Color::WHITE);
                assert!(
                    (d.radius - (geometry.radius - geometry.stroke_width)).abs() < TOLERANCE
                );
            }
            other => panic!("expected punch disc, got {other:?}"),
        }
    }

    #[test]
    fn test_label_is_centered_on_the_ring() {
        let (commands, geometry) = render_at(10, 4);
        let text = match commands.last() {
            Some(DrawCommand::Text(t)) => t,
            other => panic!("expected trailing text command, got {other:?}"),
        };
        assert_eq!(text.content, "4");
        assert_eq!(text.color, Color::BLUE);
        assert_eq!(text.position.x, geometry.center.x);

        let half = ApproxTextMeasurer.text_height("4", geometry.text_size) / 2.0;
        assert!((text.position.y - (geometry.center.y + half)).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_radius_renders_nothing() {
        let state = IndicatorState::new(10, 4);
        let geometry = Geometry::compute(PxSize::ZERO, 10, &ApproxTextMeasurer);
        let commands = render(&state, &geometry, &ApproxTextMeasurer);
        assert!(commands.is_empty());
    }
}
