//! Render tree - labelled nodes carrying styled text.
//!
//! The annotator decides *which* tint applies to a piece of text; how a tint
//! looks on screen is left to a [`crate::render::Palette`].

mod builder;

pub use builder::*;

use serde::{Deserialize, Serialize};

use crate::annotation::Severity;
use crate::effect::DisplayState;

/// Visual treatment requested for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Plain,
    /// Skill hint level tier.
    Severity(Severity),
    /// Outcome state of an effect.
    State(DisplayState),
}

/// A run of text with a single tint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub tint: Tint,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tint: Tint::Plain,
        }
    }

    pub fn tinted(text: impl Into<String>, tint: Tint) -> Self {
        Self {
            text: text.into(),
            tint,
        }
    }
}

/// Text made of tinted spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text with a single untinted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::tinted(text, Tint::Plain)
    }

    /// Text with a single span in the given tint.
    pub fn tinted(text: impl Into<String>, tint: Tint) -> Self {
        let mut styled = Self::new();
        styled.push(Span::tinted(text, tint));
        styled
    }

    /// Append a span. Empty spans are dropped and a span with the same tint
    /// as the previous one is merged into it.
    pub fn push(&mut self, span: Span) {
        if span.text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.tint == span.tint => last.text.push_str(&span.text),
            _ => self.spans.push(span),
        }
    }

    /// Append untinted text.
    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push(Span::plain(text));
    }

    /// Append every span of another text.
    pub fn extend(&mut self, other: StyledText) {
        for span in other.spans {
            self.push(span);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text with all tints stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Whether any span carries a non-plain tint.
    pub fn is_tinted(&self) -> bool {
        self.spans.iter().any(|s| s.tint != Tint::Plain)
    }

    /// Split into lines at `\n`, keeping each span's tint.
    pub fn lines(&self) -> Vec<StyledText> {
        let mut lines = vec![StyledText::new()];
        for span in &self.spans {
            let mut parts = span.text.split('\n');
            if let Some(first) = parts.next() {
                if let Some(current) = lines.last_mut() {
                    current.push(Span::tinted(first, span.tint));
                }
            }
            for part in parts {
                let mut line = StyledText::new();
                line.push(Span::tinted(part, span.tint));
                lines.push(line);
            }
        }
        lines
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// A labelled node of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    pub label: StyledText,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Create a leaf node.
    pub fn new(label: impl Into<StyledText>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: RenderNode) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merges_same_tint() {
        let mut text = StyledText::plain("Speed ");
        text.push_plain("+10");
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.plain_text(), "Speed +10");

        text.push(Span::tinted("3", Tint::Severity(Severity::Caution)));
        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn test_empty_spans_are_dropped() {
        let mut text = StyledText::new();
        text.push_plain("");
        assert!(text.is_empty());
        assert!(StyledText::plain("").is_empty());
    }

    #[test]
    fn test_is_tinted() {
        assert!(!StyledText::plain("a").is_tinted());
        assert!(StyledText::tinted("a", Tint::State(DisplayState::Fail)).is_tinted());
    }

    #[test]
    fn test_lines_keep_tints() {
        let mut text = StyledText::tinted("ok\nsecond", Tint::State(DisplayState::Success));
        text.push_plain("\n");
        text.push(Span::tinted("bad", Tint::State(DisplayState::Fail)));

        let lines = text.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].plain_text(), "ok");
        assert_eq!(lines[1].plain_text(), "second");
        assert_eq!(lines[1].spans()[0].tint, Tint::State(DisplayState::Success));
        assert_eq!(lines[2].spans()[0].tint, Tint::State(DisplayState::Fail));
    }

    #[test]
    fn test_render_node_children_order() {
        let node = RenderNode::new("root")
            .with_child(RenderNode::new("a"))
            .with_child(RenderNode::new("b"));

        let labels: Vec<_> = node.children.iter().map(|c| c.label.plain_text()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }
}
