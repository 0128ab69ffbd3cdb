//! Overlay panel that holds the last status text

use std::cell::RefCell;
use std::rc::Rc;

use maptool_input::StatusDisplay;

/// Shared text buffer; clones read and write the same text
#[derive(Clone, Default)]
pub struct TextPanel {
    text: Rc<RefCell<String>>,
}

impl TextPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl StatusDisplay for TextPanel {
    fn set_text(&mut self, text: String) {
        *self.text.borrow_mut() = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_text() {
        let panel = TextPanel::new();
        let mut writer = panel.clone();
        writer.set_text("X: 1".to_string());
        assert_eq!(panel.text(), "X: 1");
    }
}
