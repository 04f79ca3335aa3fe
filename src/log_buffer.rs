//! Bounded history behind the log panel.
//!
//! Lines are kept oldest-first. The scroll offset counts lines up from the
//! bottom: 0 follows new output, anything higher pins the view.

use std::collections::VecDeque;

/// Rows of log text visible inside the panel border.
pub const DEFAULT_VIEWPORT: usize = 13;

/// Lines moved by PageUp / PageDown.
pub const PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
    viewport: usize,
    scroll_offset: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            viewport: DEFAULT_VIEWPORT,
            scroll_offset: 0,
        }
    }

    pub fn with_viewport(mut self, rows: usize) -> Self {
        self.set_viewport(rows);
        self
    }

    /// Resize the window the offset is measured against.
    ///
    /// Called with the panel's real inner height on every draw, so the top
    /// of the history stays reachable on short terminals.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Append a line, evicting the oldest once full.
    ///
    /// While scrolled up the visible window stays on the same lines.
    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);

        if self.scroll_offset > 0 {
            self.scroll_offset = (self.scroll_offset + 1).min(self.max_offset());
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// True when new lines appear as they arrive.
    pub fn is_following(&self) -> bool {
        self.scroll_offset == 0
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = self.max_offset();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// The `height` lines ending at the current scroll position.
    pub fn visible(&self, height: usize) -> impl Iterator<Item = &str> {
        let end = self.lines.len().saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(height);
        self.lines.range(start..end).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize, capacity: usize) -> LogBuffer {
        let mut buffer = LogBuffer::new(capacity).with_viewport(3);
        for i in 0..count {
            buffer.push(format!("line {}", i));
        }
        buffer
    }

    fn visible(buffer: &LogBuffer, height: usize) -> Vec<String> {
        buffer.visible(height).map(str::to_string).collect()
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let buffer = filled(5, 3);
        assert_eq!(buffer.len(), 3);
        assert_eq!(visible(&buffer, 10), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_follows_bottom_by_default() {
        let mut buffer = filled(10, 100);
        assert!(buffer.is_following());
        buffer.push("latest".to_string());
        assert_eq!(visible(&buffer, 2), vec!["line 9", "latest"]);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut buffer = filled(10, 100);
        buffer.scroll_up(100);
        assert_eq!(buffer.scroll_offset(), 7);
        assert_eq!(visible(&buffer, 3), vec!["line 0", "line 1", "line 2"]);

        buffer.scroll_down(100);
        assert!(buffer.is_following());
    }

    #[test]
    fn test_scrolled_view_is_stable_on_push() {
        let mut buffer = filled(10, 100);
        buffer.scroll_up(2);
        let before = visible(&buffer, 3);

        buffer.push("new".to_string());
        assert_eq!(visible(&buffer, 3), before);
        assert_eq!(buffer.scroll_offset(), 3);
    }

    #[test]
    fn test_scrolled_view_is_stable_when_evicting() {
        let mut buffer = filled(10, 10);
        buffer.scroll_up(2);
        let before = visible(&buffer, 3);

        buffer.push("new".to_string());
        assert_eq!(buffer.len(), 10);
        assert_eq!(visible(&buffer, 3), before);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut buffer = filled(6, 100);
        buffer.scroll_to_top();
        assert_eq!(visible(&buffer, 3), vec!["line 0", "line 1", "line 2"]);
        buffer.scroll_to_bottom();
        assert_eq!(visible(&buffer, 3), vec!["line 3", "line 4", "line 5"]);
    }

    #[test]
    fn test_shorter_viewport_reaches_oldest_line() {
        let mut buffer = LogBuffer::new(100).with_viewport(13);
        for i in 0..40 {
            buffer.push(format!("line {}", i));
        }

        buffer.set_viewport(6);
        buffer.scroll_to_top();
        assert_eq!(buffer.scroll_offset(), 34);
        assert_eq!(visible(&buffer, 6).first().map(String::as_str), Some("line 0"));
    }

    #[test]
    fn test_taller_viewport_clamps_offset() {
        let mut buffer = filled(10, 100);
        buffer.scroll_to_top();
        assert_eq!(buffer.scroll_offset(), 7);

        buffer.set_viewport(8);
        assert_eq!(buffer.scroll_offset(), 2);
        assert_eq!(visible(&buffer, 8).first().map(String::as_str), Some("line 0"));

        buffer.set_viewport(0);
        assert_eq!(buffer.scroll_offset(), 2);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer = LogBuffer::new(5);
        assert!(buffer.is_empty());
        buffer.scroll_up(3);
        assert_eq!(buffer.scroll_offset(), 0);
        assert_eq!(buffer.visible(13).count(), 0);
    }
}
