//! The page-flow engine
//!
//! Elements are turned into [`DrawCommand`]s top to bottom. Before every line
//! the engine checks that the line fits above the bottom margin; what happens
//! if it does not is decided by the [`Policy`].

use log::{debug, trace};
use pdf_assemble::{Document, DrawCommand, Page};
use thiserror::Error;

use crate::{
    element::Element,
    layout::{ElementStyle, Layout, Policy},
    wrap::wrap,
};

/// Errors while laying out content
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A line did not fit and the policy does not allow another page
    #[error("content overflow on page {page} at element #{element} ({kind}): fits-one-page constraint violated")]
    Overflow {
        /// The page that is full (1-based)
        page: usize,
        /// The index of the element that did not fit
        element: usize,
        /// What kind of element it was
        kind: &'static str,
    },
}

/// Lays out elements onto pages
pub struct Flow<'a> {
    layout: &'a Layout,
    policy: Policy,
    /// Body commands of every page, the last one is open
    pages: Vec<Vec<DrawCommand>>,
    cursor: f32,
    /// Index and kind of the element being processed
    current: (usize, &'static str),
}

impl<'a> Flow<'a> {
    /// Start with a single empty page
    pub fn new(layout: &'a Layout, policy: Policy) -> Self {
        Self {
            layout,
            policy,
            pages: vec![Vec::new()],
            cursor: layout.top,
            current: (0, ""),
        }
    }

    /// The vertical position of the next line
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// The number of pages started so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The commands on the page that is currently open
    pub fn current_page(&self) -> &[DrawCommand] {
        self.pages.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Lay out a single element
    pub fn push(&mut self, element: &Element) -> Result<(), LayoutError> {
        trace!("{} at y = {}", element.kind(), self.cursor);
        self.current.1 = element.kind();
        let layout = self.layout;
        match element {
            Element::Title(text) => self.line(&layout.title, layout.title.indent, text)?,
            Element::Subtitle(text) => {
                self.line(&layout.subtitle, layout.subtitle.indent, text)?
            }
            Element::Section(text) => self.line(&layout.section, layout.section.indent, text)?,
            Element::Subsection(text) => {
                self.line(&layout.subsection, layout.subsection.indent, text)?
            }
            Element::Paragraph { text, width } => {
                let width = width.unwrap_or(layout.paragraph_width);
                for line in wrap(text, width) {
                    self.line(&layout.paragraph, layout.paragraph.indent, &line)?;
                }
            }
            Element::Bullet { text, width } => {
                let width = width.unwrap_or(layout.bullet_width);
                let mut lines = wrap(text, width);
                if let Some(first) = lines.next() {
                    let first = format!("{}{}", layout.bullet_marker, first);
                    self.line(&layout.bullet, layout.bullet.indent, &first)?;
                }
                for line in lines {
                    self.line(&layout.bullet, layout.bullet_continuation, &line)?;
                }
            }
            Element::CodeLine(text) => self.line(&layout.code, layout.code.indent, text)?,
            Element::Gap(points) => self.cursor -= *points,
        }
        self.current.0 += 1;
        Ok(())
    }

    /// Lay out all elements in order
    pub fn extend<'e>(
        &mut self,
        elements: impl IntoIterator<Item = &'e Element>,
    ) -> Result<(), LayoutError> {
        for element in elements {
            self.push(element)?;
        }
        Ok(())
    }

    fn line(&mut self, style: &ElementStyle, indent: f32, text: &str) -> Result<(), LayoutError> {
        self.ensure_room(style.room)?;
        let command = DrawCommand {
            x: self.layout.left + indent,
            y: self.cursor,
            text: text.to_owned(),
            font: style.font,
            size: style.size,
        };
        if let Some(page) = self.pages.last_mut() {
            page.push(command);
        }
        self.cursor -= style.advance;
        Ok(())
    }

    fn ensure_room(&mut self, room: f32) -> Result<(), LayoutError> {
        if self.cursor - room >= self.layout.bottom {
            return Ok(());
        }
        match self.policy {
            Policy::Strict => Err(LayoutError::Overflow {
                page: self.pages.len(),
                element: self.current.0,
                kind: self.current.1,
            }),
            Policy::Paginate => {
                // a line taller than the whole body is drawn on a fresh page anyway
                if !(self.current_page().is_empty() && self.cursor >= self.layout.top) {
                    self.pages.push(Vec::new());
                    self.cursor = self.layout.top;
                    debug!("Starting page {}", self.pages.len());
                }
                Ok(())
            }
        }
    }

    /// Close the last page, add page numbers and return the document
    pub fn finish(self) -> Document {
        let total = self.pages.len();
        let footers: Vec<Option<DrawCommand>> = (1..=total)
            .map(|number| {
                self.layout.footer.map(|footer| DrawCommand {
                    x: footer.x,
                    y: footer.y,
                    text: format!("Page {} of {}", number, total),
                    font: footer.font,
                    size: footer.size,
                })
            })
            .collect();

        let pages = self
            .pages
            .into_iter()
            .zip(footers)
            .map(|(mut commands, footer)| {
                commands.extend(footer);
                Page { commands }
            })
            .collect();

        Document {
            media_box: self.layout.media_box,
            pages,
        }
    }
}

/// Lay out `elements` and return the finished document
pub fn layout(
    elements: &[Element],
    layout: &Layout,
    policy: Policy,
) -> Result<Document, LayoutError> {
    let mut flow = Flow::new(layout, policy);
    flow.extend(elements)?;
    Ok(flow.finish())
}
