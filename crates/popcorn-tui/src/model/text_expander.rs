/// A block of text that shows only its first few words until expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExpander {
    collapsed_words: usize,
    expanded: bool,
    expand_label: String,
    collapse_label: String,
}

impl Default for TextExpander {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TextExpander {
    pub fn new(collapsed_words: usize) -> Self {
        Self {
            collapsed_words,
            expanded: false,
            expand_label: "Show more".to_string(),
            collapse_label: "Collapse".to_string(),
        }
    }

    pub fn with_labels(mut self, expand: &str, collapse: &str) -> Self {
        self.expand_label = expand.to_string();
        self.collapse_label = collapse.to_string();
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether `text` is long enough for the toggle to matter.
    pub fn is_truncatable(&self, text: &str) -> bool {
        text.split_whitespace().count() > self.collapsed_words
    }

    pub fn display_text(&self, text: &str) -> String {
        if self.expanded || !self.is_truncatable(text) {
            return text.to_string();
        }
        let head: Vec<&str> = text.split_whitespace().take(self.collapsed_words).collect();
        format!("{}...", head.join(" "))
    }

    pub fn button_label(&self) -> &str {
        if self.expanded {
            &self.collapse_label
        } else {
            &self.expand_label
        }
    }
}
