/// State of a star-rating input.
///
/// `rating` is the committed value; `hover` is a transient preview (mouse
/// hover in pointer UIs, arrow keys here). Both are in `0..=max_rating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRating {
    max_rating: u8,
    rating: u8,
    hover: Option<u8>,
    messages: Vec<String>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(5)
    }
}

impl StarRating {
    pub fn new(max_rating: u8) -> Self {
        Self {
            max_rating: max_rating.max(1),
            rating: 0,
            hover: None,
            messages: Vec::new(),
        }
    }

    /// One label per star, shown instead of the number when the count matches.
    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_default_rating(mut self, rating: u8) -> Self {
        self.rating = rating.min(self.max_rating);
        self
    }

    pub fn max_rating(&self) -> u8 {
        self.max_rating
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn hover_value(&self) -> Option<u8> {
        self.hover
    }

    /// Commit a rating, clamped to the maximum. Clears the preview.
    pub fn set(&mut self, rating: u8) {
        self.rating = rating.min(self.max_rating);
        self.hover = None;
    }

    pub fn hover(&mut self, rating: u8) {
        self.hover = Some(rating.min(self.max_rating));
    }

    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Move the preview one star right, starting from the displayed value.
    pub fn hover_next(&mut self) {
        self.hover(self.display_value().saturating_add(1));
    }

    /// Move the preview one star left, down to zero stars.
    pub fn hover_prev(&mut self) {
        self.hover(self.display_value().saturating_sub(1));
    }

    /// Commit the current preview, if any.
    pub fn commit_hover(&mut self) {
        if let Some(v) = self.hover {
            self.set(v);
        }
    }

    /// Preview if present, committed rating otherwise.
    pub fn display_value(&self) -> u8 {
        self.hover.unwrap_or(self.rating)
    }

    /// Whether star `index` (1-based) is drawn filled.
    pub fn is_filled(&self, index: u8) -> bool {
        index <= self.display_value()
    }

    pub fn label(&self) -> String {
        let value = self.display_value();
        if self.messages.len() == usize::from(self.max_rating) && value > 0 {
            return self.messages[usize::from(value - 1)].clone();
        }
        if value > 0 {
            value.to_string()
        } else {
            String::new()
        }
    }
}
