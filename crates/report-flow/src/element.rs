//! Semantic report elements

use serde::Deserialize;

/// One unit of report content.
///
/// In a report script (RON) these read e.g. `Title("...")`,
/// `Paragraph(text: "...")` or `Gap(8.0)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum Element {
    /// The document title, one line
    Title(String),
    /// A line below the title, one line
    Subtitle(String),
    /// A numbered section heading, one line
    Section(String),
    /// A heading within a section, one line
    Subsection(String),
    /// Running text, wrapped
    Paragraph {
        /// The text, any whitespace separates words
        text: String,
        /// Wrap width in chars, the layout default if `None`
        #[serde(default)]
        width: Option<usize>,
    },
    /// A list item, wrapped and prefixed with a marker
    Bullet {
        /// The text, any whitespace separates words
        text: String,
        /// Wrap width in chars, the layout default if `None`
        #[serde(default)]
        width: Option<usize>,
    },
    /// A single line of monospace text, never wrapped
    CodeLine(String),
    /// Vertical space in points, draws nothing
    Gap(f32),
}

impl Element {
    /// A paragraph with the default width
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            width: None,
        }
    }

    /// A bullet with the default width
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet {
            text: text.into(),
            width: None,
        }
    }

    /// Apply `f` to every piece of text in this element
    pub fn map_text(&mut self, f: impl FnOnce(&str) -> String) {
        match self {
            Self::Title(text)
            | Self::Subtitle(text)
            | Self::Section(text)
            | Self::Subsection(text)
            | Self::CodeLine(text)
            | Self::Paragraph { text, .. }
            | Self::Bullet { text, .. } => *text = f(text),
            Self::Gap(_) => {}
        }
    }

    /// A short name for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Subtitle(_) => "subtitle",
            Self::Section(_) => "section",
            Self::Subsection(_) => "subsection",
            Self::Paragraph { .. } => "paragraph",
            Self::Bullet { .. } => "bullet",
            Self::CodeLine(_) => "code line",
            Self::Gap(_) => "gap",
        }
    }
}
