//! Low-Level API
//!
//! This module contains structs for representing a PDF that is already
//! split up into objects with opaque reference IDs.

use std::io;

use crate::{
    common::{BaseEncoding, Dict, ObjRef, Rectangle},
    write::{Formatter, PdfName, Serialize},
};

/// The catalog/root of the document
pub struct Catalog {
    /// Reference to the list of pages
    pub pages: ObjRef,
}

impl Serialize for Catalog {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict()
            .field("Type", &PdfName("Catalog"))?
            .field("Pages", &self.pages)?
            .finish()
    }
}

/// The list of pages
pub struct Pages {
    /// References to the individual pages
    pub kids: Vec<ObjRef>,
}

impl Serialize for Pages {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict()
            .field("Type", &PdfName("Pages"))?
            .field("Count", &self.kids.len())?
            .field("Kids", &self.kids)?
            .finish()
    }
}

/// The resources of a page
pub struct Resources<'a> {
    /// Resource name (e.g. `F1`) to font object
    pub font: &'a Dict<ObjRef>,
}

impl Serialize for Resources<'_> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict().field("Font", self.font)?.finish()
    }
}

/// A page object
pub struct Page<'a> {
    /// Reference to the parent
    pub parent: ObjRef,
    /// (required, inheritable) describes the bound of the physical page
    /// in default user units
    pub media_box: Rectangle<i32>,
    /// The resources of this page
    pub resources: Resources<'a>,
    /// The content stream of the page
    pub contents: ObjRef,
}

impl Serialize for Page<'_> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict()
            .field("Type", &PdfName("Page"))?
            .field("Parent", &self.parent)?
            .field("MediaBox", &self.media_box)?
            .field("Resources", &self.resources)?
            .field("Contents", &self.contents)?
            .finish()
    }
}

/// One of the standard 14 Type1 fonts, referenced by name only
pub struct Type1Font<'a> {
    /// e.g. `Helvetica-Bold`
    pub base_font: PdfName<'a>,
    /// The single byte encoding of shown strings
    pub encoding: Option<BaseEncoding>,
}

impl Serialize for Type1Font<'_> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict()
            .field("Type", &PdfName("Font"))?
            .field("Subtype", &PdfName("Type1"))?
            .field("BaseFont", &self.base_font)?
            .opt_field("Encoding", &self.encoding)?
            .finish()
    }
}

/// An unfiltered data stream
pub struct Stream<'a> {
    /// The data, without a trailing end-of-line
    pub data: &'a [u8],
}

impl Serialize for Stream<'_> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        let mut len = self.data.len();
        if self.data.ends_with(&[0x0a]) {
            len -= 1;
        }
        f.pdf_dict().field("Length", &len)?.finish()?;
        f.pdf_stream(self.data)?;
        Ok(())
    }
}

/// The trailer of the document
pub struct Trailer {
    /// The size of the cross-reference table (highest id + 1)
    pub size: usize,
    /// Reference to the root/catalog
    pub root: ObjRef,
}

impl Serialize for Trailer {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_dict()
            .field("Size", &self.size)?
            .field("Root", &self.root)?
            .finish()
    }
}
