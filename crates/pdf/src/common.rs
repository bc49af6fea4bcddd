//! Common structs and enums

use std::{collections::BTreeMap, io};

use crate::write::{Formatter, PdfName, Serialize};

/// A reference to an object
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjRef {
    /// The index within the file
    pub id: u64,
    /// The generation number
    pub gen: u16,
}

impl ObjRef {
    /// A reference to generation 0 of object `id`
    pub const fn new(id: u64) -> Self {
        Self { id, gen: 0 }
    }
}

/// The base encoding for a font
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BaseEncoding {
    /// `WinAnsiEncoding`
    WinAnsiEncoding,
}

impl Serialize for BaseEncoding {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        match self {
            Self::WinAnsiEncoding => PdfName("WinAnsiEncoding").write(f),
        }
    }
}

/// A primitive point
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point<P> {
    /// Horizontal offset
    pub x: P,
    /// Vertical offset
    pub y: P,
}


/// A media box definition
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MediaBox {
    /// The width (in points)
    pub width: i32,
    /// The height (in points)
    pub height: i32,
}

impl MediaBox {
    /// US Letter (portrait), 8.5in x 11in
    pub const LETTER: Self = Self {
        width: 612,
        height: 792,
    };

    /// An A4 (portrait) Media Box
    pub const A4: Self = Self {
        width: 595,
        height: 842,
    };
}

impl Default for MediaBox {
    fn default() -> Self {
        Self::LETTER
    }
}

impl From<MediaBox> for Rectangle<i32> {
    fn from(value: MediaBox) -> Self {
        Rectangle::media_box(value.width, value.height)
    }
}

/// A primitive rectangle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rectangle<P> {
    /// lower left
    pub ll: Point<P>,
    /// upper right
    pub ur: Point<P>,
}

impl Rectangle<i32> {
    /// A media box anchored at the origin
    pub fn media_box(width: i32, height: i32) -> Self {
        Rectangle {
            ll: Point { x: 0, y: 0 },
            ur: Point {
                x: width,
                y: height,
            },
        }
    }
}

impl<P: Serialize> Serialize for Rectangle<P> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_arr()
            .entry(&self.ll.x)?
            .entry(&self.ll.y)?
            .entry(&self.ur.x)?
            .entry(&self.ur.y)?
            .finish()
    }
}

/// A dictionary with string keys, serialized in key order
pub type Dict<P> = BTreeMap<String, P>;

impl<P: Serialize> Serialize for Dict<P> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        let mut dict = f.pdf_dict();
        for (key, value) in self {
            dict.field(key, value)?;
        }
        dict.finish()
    }
}
