use crate::api::types::Mood;

/// Phrases recognized in the hidden input, checked in order.
const PHRASES: [(&str, Mood); 2] = [("hello", Mood::Waving), ("angry", Mood::Angry)];

/// Mood triggered by submitting `text`, if any.
/// Matching is a case-insensitive substring search.
pub fn match_phrase(text: &str) -> Option<Mood> {
    let lowered = text.to_lowercase();
    PHRASES
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase))
        .map(|(_, mood)| *mood)
}

/// Buffer behind the hidden easter-egg text field.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput {
    text: String,
}

impl HiddenInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Enter was pressed: clear the buffer and report the matched mood.
    pub fn submit(&mut self) -> Option<Mood> {
        let mood = match_phrase(&self.text);
        self.text.clear();
        mood
    }
}
