//! High-Level API
//!
//! A [`Document`] is a list of pages, each a list of [`DrawCommand`]s. It is
//! assembled into a file in one pass: object ids are allocated up front by
//! [`ObjectIds`], objects are written in ascending id order, and the
//! cross-reference table is built from the offsets the [`Formatter`]
//! recorded along the way.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::debug;

use crate::{
    common::{BaseEncoding, Dict, MediaBox, ObjRef},
    low,
    write::{write_text_string, Formatter, PdfName, Serialize},
};

/// The binary marker comment following the version line
const BINARY_MARKER: [u8; 6] = [b'%', 0xe2, 0xe3, 0xcf, 0xd3, b'\n'];

/// The fonts every page can use. None of them is embedded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Oblique,
    /// Courier
    Monospace,
}

impl BuiltinFont {
    /// All fonts, in resource order
    pub const ALL: [BuiltinFont; 4] = [
        BuiltinFont::Regular,
        BuiltinFont::Bold,
        BuiltinFont::Oblique,
        BuiltinFont::Monospace,
    ];

    fn index(self) -> usize {
        match self {
            Self::Regular => 0,
            Self::Bold => 1,
            Self::Oblique => 2,
            Self::Monospace => 3,
        }
    }

    /// The key in the `/Font` resource dict
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Oblique => "F3",
            Self::Monospace => "F4",
        }
    }

    /// The PostScript name of the standard font
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Oblique => "Helvetica-Oblique",
            Self::Monospace => "Courier",
        }
    }
}

/// One positioned piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Horizontal position of the baseline start, from the left edge
    pub x: f32,
    /// Vertical position of the baseline, from the bottom edge
    pub y: f32,
    /// The text, *not* escaped
    pub text: String,
    /// The font to show the text with
    pub font: BuiltinFont,
    /// Font size in points
    pub size: f32,
}

impl DrawCommand {
    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(
            w,
            "BT /{} {:.2} Tf {:.2} {:.2} Td ",
            self.font.resource_name(),
            self.size,
            self.x,
            self.y
        )?;
        write_text_string(&self.text, w)?;
        write!(w, " Tj ET")
    }
}

/// A single page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The text on this page, in drawing order
    pub commands: Vec<DrawCommand>,
}

impl Page {
    /// Creates an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been drawn yet
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The payload of the `/Contents` stream: a white background, a black
    /// fill color and then every command, one per line.
    pub fn content_stream(&self, media_box: MediaBox) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(64 + self.commands.len() * 64);
        write!(
            buf,
            "q 1 1 1 rg 0 0 {} {} re f Q\n0 0 0 rg",
            media_box.width, media_box.height
        )?;
        for command in &self.commands {
            buf.push(b'\n');
            command.write(&mut buf)?;
        }
        Ok(buf)
    }
}

/// The object ids of a document with a given number of pages.
///
/// `1` is the catalog, `2` the page tree, then every page is followed by its
/// content stream, and the shared fonts come last. The ids are contiguous
/// by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ObjectIds {
    page_count: usize,
}

impl ObjectIds {
    /// The document catalog
    pub const CATALOG: ObjRef = ObjRef::new(1);
    /// The root of the page tree
    pub const PAGES: ObjRef = ObjRef::new(2);

    /// Allocate ids for `page_count` pages
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    /// The page object of page `index` (0-based)
    pub fn page(&self, index: usize) -> ObjRef {
        debug_assert!(index < self.page_count);
        ObjRef::new(3 + 2 * index as u64)
    }

    /// The content stream of page `index` (0-based)
    pub fn contents(&self, index: usize) -> ObjRef {
        debug_assert!(index < self.page_count);
        ObjRef::new(4 + 2 * index as u64)
    }

    /// The shared font object
    pub fn font(&self, font: BuiltinFont) -> ObjRef {
        ObjRef::new(3 + 2 * self.page_count as u64 + font.index() as u64)
    }

    /// The number of objects, which is also the highest id
    pub fn len(&self) -> usize {
        2 + 2 * self.page_count + BuiltinFont::ALL.len()
    }

    /// Always false, there is at least a catalog
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A complete document, ready to be assembled
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The size of every page
    pub media_box: MediaBox,
    /// The pages, in order
    pub pages: Vec<Page>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(MediaBox::default())
    }
}

impl Document {
    /// Creates a document with one empty page
    pub fn new(media_box: MediaBox) -> Self {
        Self {
            media_box,
            pages: vec![Page::new()],
        }
    }

    /// Write the whole PDF to the given writer
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let ids = ObjectIds::new(self.pages.len());
        let mut fmt = Formatter::with_capacity(w, ids.len());

        // Start
        writeln!(fmt.inner, "%PDF-1.4")?;
        fmt.inner.write_all(&BINARY_MARKER)?;

        // **Catalog**
        let catalog = low::Catalog {
            pages: ObjectIds::PAGES,
        };
        fmt.obj(ObjectIds::CATALOG, &catalog)?;

        // **Pages**
        let pages = low::Pages {
            kids: (0..self.pages.len()).map(|i| ids.page(i)).collect(),
        };
        fmt.obj(ObjectIds::PAGES, &pages)?;

        let font_dict: Dict<ObjRef> = BuiltinFont::ALL
            .iter()
            .map(|&font| (font.resource_name().to_owned(), ids.font(font)))
            .collect();

        for (index, page) in self.pages.iter().enumerate() {
            let page_low = low::Page {
                parent: ObjectIds::PAGES,
                media_box: self.media_box.into(),
                resources: low::Resources { font: &font_dict },
                contents: ids.contents(index),
            };
            fmt.obj(ids.page(index), &page_low)?;

            let data = page.content_stream(self.media_box)?;
            fmt.obj(ids.contents(index), &low::Stream { data: &data })?;
        }

        // **Fonts**
        for font in BuiltinFont::ALL {
            let font_low = low::Type1Font {
                base_font: PdfName(font.base_font()),
                encoding: Some(BaseEncoding::WinAnsiEncoding),
            };
            fmt.obj(ids.font(font), &font_low)?;
        }

        debug_assert!((1..=ids.len() as u64).all(|id| fmt.xref_entry(id).is_some()));

        // **xref**
        let startxref = fmt.xref()?;

        writeln!(fmt.inner, "trailer")?;
        let trailer = low::Trailer {
            size: fmt.xref_size(),
            root: ObjectIds::CATALOG,
        };
        trailer.write(&mut fmt)?;

        writeln!(fmt.inner, "startxref")?;
        writeln!(fmt.inner, "{}", startxref)?;
        writeln!(fmt.inner, "%%EOF")?;

        debug!(
            "Assembled {} page(s) into {} objects, {} bytes",
            self.pages.len(),
            ids.len(),
            fmt.bytes_written()
        );
        Ok(())
    }

    /// Assemble the document into a buffer
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf)
    }

    /// Assemble the document and store it at `path`, creating missing
    /// parent directories first.
    pub fn write_to_path(&self, path: &Path) -> io::Result<()> {
        let bytes = self.to_bytes()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, bytes)
    }
}

/// Assemble `doc` into the bytes of a PDF file
pub fn assemble(doc: &Document) -> io::Result<Vec<u8>> {
    doc.to_bytes()
}
