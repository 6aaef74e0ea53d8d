//! Identity-tagged output text.
//!
//! The core never embeds terminal escape sequences. Each piece of text it
//! produces is tagged with the [`Identity`] it belongs to - a player, the
//! neutral voice, or an error - and the shell decides how (or whether) to
//! style each identity.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Who a piece of output text "belongs" to, for presentation purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    /// Text associated with a specific player (turn banners, scores).
    Player(PlayerId),
    /// Narration that belongs to no player (ties, final-score header).
    Neutral,
    /// Input-validation error messages.
    Error,
}

/// A run of text with a single display identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Display identity for this run.
    pub identity: Identity,
    /// The text itself, escape-free.
    pub text: String,
}

impl Span {
    /// Text in a player's voice.
    #[must_use]
    pub fn player(id: PlayerId, text: impl Into<String>) -> Self {
        Self {
            identity: Identity::Player(id),
            text: text.into(),
        }
    }

    /// Neutral narration.
    #[must_use]
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            identity: Identity::Neutral,
            text: text.into(),
        }
    }

    /// An error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            identity: Identity::Error,
            text: text.into(),
        }
    }
}

/// The textual result of one controller step, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Output spans, concatenated (unstyled) in order for display.
    pub spans: Vec<Span>,
}

impl StepOutput {
    /// Output consisting of a single span.
    #[must_use]
    pub fn single(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The plain, unstyled text of the whole step.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl std::fmt::Display for StepOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for span in &self.spans {
            write!(f, "{}", span.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_in_order() {
        let mut out = StepOutput::single(Span::neutral("a"));
        out.push(Span::player(PlayerId::One, "b"));
        out.push(Span::error("c"));

        assert_eq!(out.text(), "abc");
        assert_eq!(out.to_string(), "abc");
    }

    #[test]
    fn test_identity_tags() {
        let span = Span::player(PlayerId::Two, "hi");
        assert_eq!(span.identity, Identity::Player(PlayerId::Two));
        assert_eq!(Span::error("e").identity, Identity::Error);
        assert_eq!(Span::neutral("n").identity, Identity::Neutral);
    }
}
