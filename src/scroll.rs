use winit::event::MouseScrollDelta;

/// Pixels per wheel line tick
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Document-style vertical scroll offset.
///
/// The offset is 0 with the page at the top and grows negative as the
/// user scrolls down, matching `getBoundingClientRect().top` of a
/// document body. It never goes positive: there is nothing above the top.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    offset: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset `t`, always <= 0
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Wheel movement in lines; positive y scrolls back toward the top
    pub fn scroll_lines(&mut self, dy: f32) {
        self.scroll_pixels(dy * PIXELS_PER_LINE);
    }

    /// Wheel movement in pixels; positive y scrolls back toward the top
    pub fn scroll_pixels(&mut self, dy: f32) {
        self.offset = (self.offset + dy).min(0.0);
    }

    pub fn process(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => self.scroll_lines(y),
            MouseScrollDelta::PixelDelta(pos) => self.scroll_pixels(pos.y as f32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top() {
        assert_eq!(ScrollTracker::new().offset(), 0.0);
    }

    #[test]
    fn scrolling_down_goes_negative() {
        let mut tracker = ScrollTracker::new();
        tracker.scroll_lines(-3.0);

        assert_eq!(tracker.offset(), -3.0 * PIXELS_PER_LINE);
    }

    #[test]
    fn cannot_scroll_above_top() {
        let mut tracker = ScrollTracker::new();
        tracker.scroll_lines(5.0);
        assert_eq!(tracker.offset(), 0.0);

        tracker.scroll_pixels(-100.0);
        tracker.scroll_pixels(300.0);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn pixel_and_line_deltas_accumulate() {
        let mut tracker = ScrollTracker::new();
        tracker.scroll_lines(-1.0);
        tracker.scroll_pixels(-10.0);

        assert_eq!(tracker.offset(), -PIXELS_PER_LINE - 10.0);
    }
}
