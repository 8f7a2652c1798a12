//! Frame-index playback for sprite animations
//!
//! A clip walks a fractional index through a list of sheet frame indices at a
//! constant rate. Rendering is external; the clip only answers which frame to
//! draw (or that a play-once clip has finished).

use serde::{Deserialize, Serialize};

/// Playback state over a sequence of sprite-sheet frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Frames per second (0 = static sprite)
    rate: f32,
    /// Sheet frame indices, in playback order
    frames: Vec<u32>,
    /// Stop on the last frame instead of looping
    once: bool,
    /// Fractional playback position
    index: f32,
    done: bool,
}

impl AnimationClip {
    /// Looping clip
    pub fn new(rate: f32, frames: &[u32]) -> Self {
        debug_assert!(!frames.is_empty(), "animation clip needs at least one frame");
        Self {
            rate,
            frames: frames.to_vec(),
            once: false,
            index: 0.0,
            done: false,
        }
    }

    /// Clip that finishes after its last frame
    pub fn once(rate: f32, frames: &[u32]) -> Self {
        Self {
            once: true,
            ..Self::new(rate, frames)
        }
    }

    /// Non-animated sprite
    pub fn still() -> Self {
        Self::new(0.0, &[0])
    }

    pub fn advance(&mut self, dt: f32) {
        if self.done {
            return;
        }
        self.index += self.rate * dt;
        if self.once && self.position() >= self.frames.len() {
            self.done = true;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0.0;
        self.done = false;
    }

    /// Sheet frame to draw, or `None` once a play-once clip has run out
    pub fn current_frame(&self) -> Option<u32> {
        if self.rate <= 0.0 {
            return Some(0);
        }
        if self.done {
            return None;
        }
        let len = self.frames.len();
        self.frames.get(self.position() % len).copied()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    fn position(&self) -> usize {
        self.index.max(0.0).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looping_clip_wraps() {
        let mut clip = AnimationClip::new(16.0, &[0, 6]);
        assert_eq!(clip.current_frame(), Some(0));
        clip.advance(1.0 / 16.0);
        assert_eq!(clip.current_frame(), Some(6));
        clip.advance(1.0 / 16.0);
        assert_eq!(clip.current_frame(), Some(0));
        clip.advance(10.0);
        assert!(!clip.is_done());
        assert!(clip.current_frame().is_some());
    }

    #[test]
    fn test_once_clip_finishes() {
        let mut clip = AnimationClip::once(10.0, &[0, 1]);
        clip.advance(0.15);
        assert_eq!(clip.current_frame(), Some(1));
        assert!(!clip.is_done());

        clip.advance(0.1);
        assert!(clip.is_done());
        assert_eq!(clip.current_frame(), None);

        // Frozen
        clip.advance(5.0);
        assert!(clip.is_done());

        clip.reset();
        assert!(!clip.is_done());
        assert_eq!(clip.current_frame(), Some(0));
    }

    #[test]
    fn test_still_clip_is_static() {
        let mut clip = AnimationClip::still();
        clip.advance(100.0);
        assert_eq!(clip.current_frame(), Some(0));
        assert!(!clip.is_done());
    }

    #[test]
    fn test_zero_rate_always_frame_zero() {
        let mut clip = AnimationClip::new(0.0, &[3, 4]);
        clip.advance(2.0);
        assert_eq!(clip.current_frame(), Some(0));
    }
}
