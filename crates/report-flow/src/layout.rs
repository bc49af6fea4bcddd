//! Page geometry and per-element styles

use pdf_assemble::{common::MediaBox, BuiltinFont};
use serde::Deserialize;

/// What to do when the next line does not fit on the current page
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum Policy {
    /// Everything must fit on a single page, fail otherwise
    Strict,
    /// Start a new page whenever the current one is full
    Paginate,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Paginate
    }
}

/// How one kind of element is drawn
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementStyle {
    /// The font
    pub font: BuiltinFont,
    /// Font size in points
    pub size: f32,
    /// Offset from the left margin
    pub indent: f32,
    /// How far the cursor moves down after each line
    pub advance: f32,
    /// Space that must be left above the bottom margin to draw a line
    pub room: f32,
}

impl ElementStyle {
    fn new(font: BuiltinFont, size: f32, advance: f32, room: f32) -> Self {
        Self {
            font,
            size,
            indent: 0.0,
            advance,
            room,
        }
    }

    fn indented(self, indent: f32) -> Self {
        Self { indent, ..self }
    }
}

/// The `Page i of N` line
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Footer {
    /// The font
    pub font: BuiltinFont,
    /// Font size in points
    pub size: f32,
    /// Horizontal position
    pub x: f32,
    /// Baseline position from the bottom edge
    pub y: f32,
}

/// The fixed geometry of a report.
///
/// All positions are in points from the bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// The page size
    pub media_box: MediaBox,
    /// Left margin
    pub left: f32,
    /// The cursor position at the start of every page
    pub top: f32,
    /// No line may be drawn below this
    pub bottom: f32,

    /// Style of a title line
    pub title: ElementStyle,
    /// Style of a subtitle line
    pub subtitle: ElementStyle,
    /// Style of a section heading
    pub section: ElementStyle,
    /// Style of a subsection heading
    pub subsection: ElementStyle,
    /// Style of paragraph lines
    pub paragraph: ElementStyle,
    /// Style of bullet lines; `indent` applies to the first line only
    pub bullet: ElementStyle,
    /// Style of code lines
    pub code: ElementStyle,

    /// Printed in front of the first line of a bullet
    pub bullet_marker: &'static str,
    /// Indent of the second and following lines of a bullet
    pub bullet_continuation: f32,
    /// Default wrap width of paragraphs, in chars
    pub paragraph_width: usize,
    /// Default wrap width of bullets, in chars
    pub bullet_width: usize,

    /// Page numbers, if any
    pub footer: Option<Footer>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::walkthrough()
    }
}

impl Layout {
    /// Multi-page technical document with page numbers (US Letter)
    pub fn walkthrough() -> Self {
        use BuiltinFont::*;
        Self {
            media_box: MediaBox::LETTER,
            left: 48.0,
            top: 760.0,
            bottom: 46.0,
            title: ElementStyle::new(Bold, 19.0, 24.0, 26.0),
            subtitle: ElementStyle::new(Oblique, 10.0, 15.0, 15.0),
            section: ElementStyle::new(Bold, 13.0, 16.0, 18.0),
            subsection: ElementStyle::new(Bold, 11.0, 14.0, 15.0),
            paragraph: ElementStyle::new(Regular, 10.0, 12.0, 12.0),
            bullet: ElementStyle::new(Regular, 10.0, 12.0, 12.0).indented(2.0),
            code: ElementStyle::new(Monospace, 9.4, 12.0, 12.0).indented(8.0),
            bullet_marker: "- ",
            bullet_continuation: 16.0,
            paragraph_width: 104,
            bullet_width: 98,
            footer: Some(Footer {
                font: Regular,
                size: 9.0,
                x: 48.0,
                y: 26.0,
            }),
        }
    }

    /// Dense single-page summary without page numbers (US Letter)
    pub fn compact() -> Self {
        use BuiltinFont::*;
        Self {
            media_box: MediaBox::LETTER,
            left: 50.0,
            top: 760.0,
            bottom: 42.0,
            // only the baseline itself has to stay above the margin
            title: ElementStyle::new(Bold, 18.0, 22.0, 0.0),
            subtitle: ElementStyle::new(Oblique, 9.5, 16.0, 0.0),
            section: ElementStyle::new(Bold, 11.5, 14.0, 0.0),
            subsection: ElementStyle::new(Bold, 10.5, 13.0, 0.0),
            paragraph: ElementStyle::new(Regular, 9.5, 12.0, 0.0),
            bullet: ElementStyle::new(Regular, 9.5, 12.0, 0.0).indented(2.0),
            code: ElementStyle::new(Monospace, 9.0, 12.0, 0.0).indented(8.0),
            bullet_marker: "- ",
            bullet_continuation: 14.0,
            paragraph_width: 102,
            bullet_width: 96,
            footer: None,
        }
    }

    /// The vertical space available for content on one page
    pub fn body_height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// The named layouts a report script can select
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum LayoutPreset {
    /// See [`Layout::walkthrough`]
    Walkthrough,
    /// See [`Layout::compact`]
    Compact,
}

impl Default for LayoutPreset {
    fn default() -> Self {
        LayoutPreset::Walkthrough
    }
}

impl From<LayoutPreset> for Layout {
    fn from(preset: LayoutPreset) -> Self {
        match preset {
            LayoutPreset::Walkthrough => Layout::walkthrough(),
            LayoutPreset::Compact => Layout::compact(),
        }
    }
}
