//! # Frame Sinks
//!
//! Where finished frames go. A windowed host rasterizes the command list;
//! the headless binary and the tests count what they would have drawn.

use glyphburst_surface::Frame;

/// Consumer of finished frames, called once per tick by the driver.
pub trait FrameSink {
    /// Presents one finished frame.
    ///
    /// The frame is only borrowed for the call; sinks that need to keep
    /// commands must copy them out.
    fn present(&mut self, frame: &Frame);
}

/// A sink that counts frames and commands instead of drawing them.
///
/// Keeps the command count of the most recent frame so callers can assert
/// on what the last tick produced.
#[derive(Debug, Default)]
pub struct CountingSink {
    frames: u64,
    commands: u64,
    last_frame_commands: usize,
}

impl CountingSink {
    /// Creates a sink with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Total commands across all presented frames.
    #[must_use]
    pub const fn commands(&self) -> u64 {
        self.commands
    }

    /// Command count of the most recent frame.
    #[must_use]
    pub const fn last_frame_commands(&self) -> usize {
        self.last_frame_commands
    }
}

impl FrameSink for CountingSink {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        self.commands += frame.command_count() as u64;
        self.last_frame_commands = frame.command_count();
    }
}

#[cfg(test)]
mod tests {
    use glyphburst_surface::{Color, RenderCommand};

    use super::*;

    #[test]
    fn test_counting_sink_tracks_frames_and_commands() {
        let mut sink = CountingSink::new();
        let mut frame = Frame::new();
        frame.push(RenderCommand::Clear {
            color: Color::BLACK,
        });
        sink.present(&frame);
        frame.push(RenderCommand::Clear {
            color: Color::BLACK,
        });
        sink.present(&frame);

        assert_eq!(sink.frames(), 2);
        assert_eq!(sink.commands(), 3);
        assert_eq!(sink.last_frame_commands(), 2);
    }
}
