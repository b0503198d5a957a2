//! Frame composition and Cairo-based rendering.
//!
//! Composition is split from painting: [`compose_frame`] turns the drawing
//! state into an ordered list of [`DrawCommand`]s, and [`paint`] replays that
//! list onto a Cairo context. Only filled rectangles and filled ellipses are
//! ever emitted.

use super::color::{BACKGROUND, Color, DIM_OVERLAY};
use super::frame::Frame;
use super::point::Point;
use super::stroke::Stroke;
use std::f64::consts::PI;

/// Colors used for the non-ink layers of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Fill painted under everything else
    pub background: Color,
    /// Fill painted over the background while dimming is on
    pub dim_overlay: Color,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            dim_overlay: DIM_OVERLAY,
        }
    }
}

/// A single primitive submitted to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Filled ellipse inscribed in the box centered on `center`
    FillEllipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    },
}

/// Builds the draw commands for one frame.
///
/// Layer order: background, dim overlay (if `dim`), committed strokes in
/// commit order, then the in-progress stroke.
pub fn compose_frame(
    frame: &Frame,
    current: Option<&Stroke>,
    dim: bool,
    style: &FrameStyle,
    width: u32,
    height: u32,
) -> Vec<DrawCommand> {
    let (width, height) = (f64::from(width), f64::from(height));
    let dab_count: usize = frame
        .strokes()
        .iter()
        .chain(current)
        .map(|stroke| stroke.points().len())
        .sum();
    let mut commands = Vec::with_capacity(dab_count + 2);

    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        color: style.background,
    });
    if dim {
        commands.push(DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            color: style.dim_overlay,
        });
    }

    for stroke in frame.strokes().iter().chain(current) {
        push_stroke(&mut commands, stroke);
    }

    commands
}

fn push_stroke(commands: &mut Vec<DrawCommand>, stroke: &Stroke) {
    if stroke.is_empty() {
        return;
    }
    let radius = stroke.radius();
    commands.extend(stroke.points().iter().map(|&center| DrawCommand::FillEllipse {
        center,
        radius_x: radius,
        radius_y: radius,
        color: stroke.color,
    }));
}

/// Replays `commands` onto a Cairo context.
///
/// The target is cleared to fully transparent first, so a translucent
/// background shows the desktop underneath.
pub fn paint(ctx: &cairo::Context, commands: &[DrawCommand]) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Clear);
    ctx.paint()?;
    ctx.restore()?;
    ctx.set_operator(cairo::Operator::Over);

    for command in commands {
        match *command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                set_source(ctx, color);
                ctx.rectangle(x, y, width, height);
                ctx.fill()?;
            }
            DrawCommand::FillEllipse {
                center,
                radius_x,
                radius_y,
                color,
            } => {
                if radius_x <= 0.0 || radius_y <= 0.0 {
                    continue;
                }
                set_source(ctx, color);
                ctx.save()?;
                ctx.translate(center.x, center.y);
                ctx.scale(radius_x, radius_y);
                ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
                ctx.restore()?;
                ctx.fill()?;
            }
        }
    }

    Ok(())
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}
