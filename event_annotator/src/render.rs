//! Text rendering of render trees.
//!
//! ```text
//! Tazuna
//! └── New Year(501)
//!     └── Pray for health
//!         └── (when successful)Energy +20
//!             (when failed)Mood -1
//! ```

use crossterm::style::{Color, Stylize};

use crate::annotation::Severity;
use crate::effect::DisplayState;
use crate::tree::{RenderNode, Span, StyledText, Tint};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const GUIDE: &str = "│   ";
const BLANK: &str = "    ";

/// Turns a tinted span into printable text.
///
/// `line_state` is the outcome state of the line the span sits on, if any,
/// so spans nested inside an outcome can keep its background.
pub trait Palette {
    fn paint(&self, span: &Span, line_state: Option<DisplayState>) -> String;
}

/// Drops all tints.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn paint(&self, span: &Span, _line_state: Option<DisplayState>) -> String {
        span.text.clone()
    }
}

/// ANSI colours for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

/// Background behind every outcome state.
pub const STATE_BACKGROUND: Color = Color::Rgb { r: 0x08, g: 0x11, b: 0x29 };

pub fn state_color(state: DisplayState) -> Color {
    match state {
        DisplayState::Unknown => Color::Rgb { r: 0xff, g: 0x87, b: 0x00 },
        DisplayState::Fail => Color::Rgb { r: 0xff, g: 0x00, b: 0x50 },
        DisplayState::Success => Color::Rgb { r: 0x00, g: 0xff, b: 0x87 },
        DisplayState::GreatSuccess => Color::Rgb { r: 0xff, g: 0xff, b: 0x5f },
        DisplayState::Neutral => Color::Rgb { r: 0xaf, g: 0xaf, b: 0xaf },
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Caution => Color::Yellow,
        Severity::Ok => Color::Green,
    }
}

impl Palette for AnsiPalette {
    fn paint(&self, span: &Span, line_state: Option<DisplayState>) -> String {
        let text = span.text.as_str();
        match (span.tint, line_state) {
            (Tint::Plain, _) => text.to_string(),
            (Tint::Severity(severity), None) => text.with(severity_color(severity)).to_string(),
            (Tint::Severity(severity), Some(_)) => {
                text.with(severity_color(severity)).on(STATE_BACKGROUND).to_string()
            }
            (Tint::State(state), _) => text.with(state_color(state)).on(STATE_BACKGROUND).to_string(),
        }
    }
}

/// The outcome state of a line: the state of its first state-tinted span.
pub fn line_state(line: &StyledText) -> Option<DisplayState> {
    line.spans().iter().find_map(|span| match span.tint {
        Tint::State(state) => Some(state),
        Tint::Plain | Tint::Severity(_) => None,
    })
}

/// Writes render trees with box-drawing guides.
pub struct TreeWriter<P: Palette> {
    palette: P,
}

impl TreeWriter<PlainPalette> {
    pub fn plain() -> Self {
        Self::new(PlainPalette)
    }
}

impl TreeWriter<AnsiPalette> {
    pub fn ansi() -> Self {
        Self::new(AnsiPalette)
    }
}

impl<P: Palette> TreeWriter<P> {
    pub fn new(palette: P) -> Self {
        Self { palette }
    }

    /// Render a tree. Every line, including the last, ends with `\n`.
    pub fn render(&self, root: &RenderNode) -> String {
        let mut out = String::new();
        for line in root.label.lines() {
            self.push_line(&mut out, "", &line);
        }
        self.write_children(&mut out, root, "");
        out
    }

    fn write_children(&self, out: &mut String, node: &RenderNode, prefix: &str) {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { LAST_BRANCH } else { BRANCH };
            let child_prefix = format!("{}{}", prefix, if last { BLANK } else { GUIDE });

            let mut lines = child.label.lines().into_iter();
            if let Some(first) = lines.next() {
                self.push_line(out, &format!("{}{}", prefix, connector), &first);
            }
            // Continuation lines line up with the first line of the label.
            for line in lines {
                self.push_line(out, &child_prefix, &line);
            }

            self.write_children(out, child, &child_prefix);
        }
    }

    fn push_line(&self, out: &mut String, prefix: &str, line: &StyledText) {
        out.push_str(prefix);
        let state = line_state(line);
        for span in line.spans() {
            out.push_str(&self.palette.paint(span, state));
        }
        out.push('\n');
    }
}
