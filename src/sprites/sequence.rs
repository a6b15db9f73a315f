//! Tick-driven frame sequencing.

/// One visual shown for a number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub visual: &'static str,
    pub ticks: u32,
}

impl Frame {
    pub const fn new(visual: &'static str, ticks: u32) -> Self {
        Self { visual, ticks }
    }
}

/// An ordered list of frames stepped once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    looping: bool,
    index: usize,
    elapsed: u32,
}

impl FrameSequence {
    pub fn new(frames: Vec<Frame>, looping: bool) -> Self {
        Self {
            frames,
            looping,
            index: 0,
            elapsed: 0,
        }
    }

    /// Step one tick. A frame stays up for `ticks` calls before the next one shows;
    /// non-looping sequences hold their last frame.
    pub fn advance(&mut self) {
        let Some(frame) = self.frames.get(self.index) else {
            return;
        };

        self.elapsed += 1;
        if self.elapsed < frame.ticks {
            return;
        }

        self.elapsed = 0;
        if self.index + 1 < self.frames.len() {
            self.index += 1;
        } else if self.looping {
            self.index = 0;
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_visual(&self) -> Option<&'static str> {
        self.visual_at(self.index)
    }

    pub fn visual_at(&self, index: usize) -> Option<&'static str> {
        self.frames.get(index).map(|frame| frame.visual)
    }
}
