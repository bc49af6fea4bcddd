#![warn(missing_docs)]
//! # report-flow
//!
//! Turns a list of semantic report [`Element`]s into a PDF [`Document`].
//!
//! ```
//! use report_flow::{layout, Element, Layout, Policy};
//!
//! let elements = vec![
//!     Element::Title(String::from("Technical Walkthrough")),
//!     Element::Section(String::from("1. What Was Built")),
//!     Element::paragraph("A local-first weekly planning application."),
//!     Element::bullet("Frontend stack: React + TypeScript."),
//! ];
//!
//! let doc = layout(&elements, &Layout::walkthrough(), Policy::Paginate).unwrap();
//! assert_eq!(doc.pages.len(), 1);
//! ```

use std::{io, path::Path};

use log::info;
use thiserror::Error;

pub mod element;
pub mod flow;
pub mod layout;
pub mod wrap;

pub use element::Element;
pub use flow::{layout, Flow, LayoutError};
pub use layout::{Layout, LayoutPreset, Policy};
pub use pdf_assemble::Document;

/// Errors of a complete build
#[derive(Debug, Error)]
pub enum BuildError {
    /// The content could not be laid out
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The file could not be written
    #[error("Failed to write the document")]
    Io(#[from] io::Error),
}

/// Lay out `elements` and write the result to `path`.
///
/// Nothing is written if the layout fails. Returns the number of pages.
pub fn build(
    elements: &[Element],
    layout: &Layout,
    policy: Policy,
    path: &Path,
) -> Result<usize, BuildError> {
    let doc = flow::layout(elements, layout, policy)?;
    doc.write_to_path(path)?;
    info!("Wrote {} page(s) to `{}`", doc.pages.len(), path.display());
    Ok(doc.pages.len())
}
