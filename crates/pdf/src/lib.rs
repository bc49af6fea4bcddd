#![warn(missing_docs)]
//! # pdf-assemble
//!
//! Library to assemble text-only PDF files that use the standard fonts
//!
//! ```
//! use pdf_assemble::{
//!     common::MediaBox,
//!     high::{BuiltinFont, Document, DrawCommand},
//! };
//!
//! // Create a new document with one empty page
//! let mut doc = Document::new(MediaBox::LETTER);
//!
//! // Put some text on it
//! doc.pages[0].commands.push(DrawCommand {
//!     x: 48.0,
//!     y: 760.0,
//!     text: String::from("Hello (World)"),
//!     font: BuiltinFont::Bold,
//!     size: 19.0,
//! });
//!
//! // Write the PDF to a buffer
//! let bytes = doc.to_bytes().expect("Write to buffer");
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```
//!
//! Reference: <https://www.adobe.com/content/dam/acom/en/devnet/pdf/PDF32000_2008.pdf>

pub mod common;
pub mod encoding;
pub mod high;
pub mod low;
pub mod util;
pub mod write;

pub use high::{assemble, BuiltinFont, Document, DrawCommand, Page};
