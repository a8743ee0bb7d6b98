#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

/// Vertical scroll state of the scrollback pane, measured in rendered lines
/// from the top.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scroll {
    position: usize,
    content_length: usize,
    viewport_length: usize,
}

impl Scroll {
    fn max_position(&self) -> usize {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    pub fn position(&self) -> usize {
        return self.position;
    }

    pub fn set_state(&mut self, content_length: usize, viewport_length: usize) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
    }

    pub fn is_position_at_last(&self) -> bool {
        return self.position >= self.max_position();
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
    }

    pub fn up_page(&mut self) {
        let page = self.viewport_length.max(1);
        self.position = self.position.saturating_sub(page);
    }

    pub fn down_page(&mut self) {
        let page = self.viewport_length.max(1);
        self.position = (self.position + page).min(self.max_position());
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }
}
