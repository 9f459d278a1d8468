//! Replays scripted input segments as one `InputState` per frame.

use mandelzoom_render::InputState;

use crate::preferences::ScriptSegment;

/// Stands in for a live input poller: yields the input held on each frame.
pub struct ScriptedInput<'a> {
    segments: &'a [ScriptSegment],
    segment: usize,
    frame_in_segment: u32,
}

impl<'a> ScriptedInput<'a> {
    pub fn new(segments: &'a [ScriptSegment]) -> Self {
        Self {
            segments,
            segment: 0,
            frame_in_segment: 0,
        }
    }
}

impl Iterator for ScriptedInput<'_> {
    type Item = InputState;

    fn next(&mut self) -> Option<InputState> {
        loop {
            let seg = self.segments.get(self.segment)?;
            if self.frame_in_segment < seg.frames {
                self.frame_in_segment += 1;
                return Some(InputState {
                    zoom_in: seg.zoom_in,
                    zoom_out: seg.zoom_out,
                    pointer: (seg.pointer[0], seg.pointer[1]),
                    pan: (seg.pan[0], seg.pan[1]),
                });
            }
            self.segment += 1;
            self.frame_in_segment = 0;
        }
    }
}
