//! Frame command stream.
//!
//! The effect renders by filling a [`Frame`] with [`RenderCommand`]s each
//! tick; the host walks the list and draws. Commands are ordered: later
//! entries composite over earlier ones.

use crate::color::Color;
use crate::font::FontSpec;
use crate::math::Vec2;

/// One drawing instruction for the host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole surface, discarding previous content.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center position.
        center: Vec2,
        /// Radius in surface units.
        radius: f32,
        /// Fill color (alpha is the blend factor).
        color: Color,
    },
    /// A single character glyph.
    Glyph {
        /// The character to draw.
        ch: char,
        /// Baseline origin (left edge of the advance).
        baseline: Vec2,
        /// Font to draw with.
        font: FontSpec,
        /// Color (alpha is the blend factor).
        color: Color,
    },
    /// A text run.
    Text {
        /// The string to draw.
        text: String,
        /// Baseline origin (left edge of the run).
        baseline: Vec2,
        /// Font to draw with.
        font: FontSpec,
        /// Color (alpha is the blend factor).
        color: Color,
    },
}

/// A complete rendered frame: an ordered command list.
///
/// Reused across ticks to keep the hot path free of re-allocation once the
/// command buffer has grown to its working size.
#[derive(Debug, Default)]
pub struct Frame {
    /// Commands in draw order.
    commands: Vec<RenderCommand>,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame, discarding the previous command list.
    pub fn begin(&mut self) {
        self.commands.clear();
    }

    /// Appends a command.
    #[inline]
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// The commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands in the frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been drawn this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_collects_in_order() {
        let mut frame = Frame::new();
        frame.begin();
        frame.push(RenderCommand::Clear {
            color: Color::BLACK,
        });
        frame.push(RenderCommand::Circle {
            center: Vec2::new(10.0, 20.0),
            radius: 2.0,
            color: Color::YELLOW,
        });

        assert_eq!(frame.command_count(), 2);
        assert!(matches!(
            frame.commands()[0],
            RenderCommand::Clear { .. }
        ));
        assert!(matches!(
            frame.commands()[1],
            RenderCommand::Circle { .. }
        ));
    }

    #[test]
    fn test_begin_resets() {
        let mut frame = Frame::new();
        frame.push(RenderCommand::Clear {
            color: Color::BLACK,
        });
        frame.begin();
        assert!(frame.is_empty());
    }
}
