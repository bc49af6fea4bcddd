//! Methods to produce a binary file

use std::io::{self, Write};

use crate::{
    common::ObjRef,
    encoding::{escape, win_ansi_encode_lossy},
    util::ByteCounter,
};

/// API to serialize a dict
#[must_use]
pub struct PdfDict<'a, 'b> {
    first: bool,
    f: &'b mut Formatter<'a>,
}

impl PdfDict<'_, '_> {
    fn check_first(&mut self) -> io::Result<()> {
        if self.first {
            if self.f.indent > 0 {
                writeln!(self.f.inner)?;
            }
            self.f.indent()?;
            writeln!(self.f.inner, "<<")?;
            self.first = false;
        }
        Ok(())
    }

    /// Write a field
    pub fn field(&mut self, name: &str, value: &dyn Serialize) -> io::Result<&mut Self> {
        self.check_first()?;
        self.f.indent += 2;
        self.f.indent()?;
        self.f.needs_space = write_name(name, &mut self.f.inner)?;
        value.write(self.f)?;
        writeln!(self.f.inner)?;
        self.f.indent -= 2;
        Ok(self)
    }

    /// Write an optional field, if it is not `None`
    pub fn opt_field<X: Serialize>(
        &mut self,
        name: &str,
        field: &Option<X>,
    ) -> io::Result<&mut Self> {
        if let Some(value) = field {
            self.field(name, value)
        } else {
            Ok(self)
        }
    }

    /// Close the dict
    pub fn finish(&mut self) -> io::Result<()> {
        if self.first {
            write!(self.f.inner, "<< >>")?;
            self.f.needs_space = false;
        } else {
            self.f.indent()?;
            write!(self.f.inner, ">>")?;
            if self.f.indent == 0 {
                writeln!(self.f.inner)?;
                self.f.needs_space = false;
            }
        }
        Ok(())
    }
}

/// API to serialize an array
#[must_use]
pub struct PdfArr<'a, 'b> {
    first: bool,
    f: &'b mut Formatter<'a>,
}

impl PdfArr<'_, '_> {
    fn check_first(&mut self) -> io::Result<()> {
        if self.first {
            write!(self.f.inner, "[")?;
            self.first = false;
            self.f.needs_space = false;
        }
        Ok(())
    }

    /// Write the next entry
    pub fn entry<S: Serialize>(&mut self, value: &S) -> io::Result<&mut Self> {
        self.check_first()?;
        value.write(self.f)?;
        Ok(self)
    }

    /// Write entries from an iterator
    pub fn entries<X: Serialize>(
        &mut self,
        i: impl IntoIterator<Item = X>,
    ) -> io::Result<&mut Self> {
        for entry in i.into_iter() {
            self.entry(&entry)?;
        }
        Ok(self)
    }

    /// Close the array
    pub fn finish(&mut self) -> io::Result<()> {
        if self.first {
            write!(self.f.inner, "[]")?;
        } else {
            write!(self.f.inner, "]")?;
        }
        self.f.needs_space = true;
        Ok(())
    }
}

/// One in-use entry of the cross-reference table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct XrefEntry {
    /// Byte offset of the `<id> <gen> obj` line
    pub offset: usize,
    /// The generation number
    pub gen: u16,
}

/// Formatter for a PDF document
pub struct Formatter<'a> {
    pub(crate) inner: ByteCounter<&'a mut dyn Write>,
    indent: usize,
    needs_space: bool,
    /// Dense table indexed by object id; slot 0 is the head of the free list
    xref: Vec<Option<XrefEntry>>,
}

impl<'a> Formatter<'a> {
    /// Create a new formatter
    pub fn new(w: &'a mut dyn Write) -> Self {
        Self::with_capacity(w, 0)
    }

    /// Create a new formatter for a file with object ids `1..=objects`
    pub fn with_capacity(w: &'a mut dyn Write, objects: usize) -> Self {
        Self {
            inner: ByteCounter::new(w),
            indent: 0,
            needs_space: false,
            xref: vec![None; objects + 1],
        }
    }

    /// Number of bytes written so far
    pub fn bytes_written(&self) -> usize {
        self.inner.bytes_written()
    }

    /// The `/Size` of the cross-reference table, i.e. the highest id + 1
    pub fn xref_size(&self) -> usize {
        self.xref.len()
    }

    /// The entry recorded for `id`, if that object has been written
    pub fn xref_entry(&self, id: u64) -> Option<XrefEntry> {
        self.xref.get(id as usize).copied().flatten()
    }

    /// Start writing a PDF dict
    pub fn pdf_dict(&mut self) -> PdfDict<'a, '_> {
        PdfDict {
            first: true,
            f: self,
        }
    }

    /// Start writing a PDF array
    pub fn pdf_arr(&mut self) -> PdfArr<'a, '_> {
        PdfArr {
            first: true,
            f: self,
        }
    }

    /// Write the payload of a stream
    pub fn pdf_stream(&mut self, data: &[u8]) -> io::Result<()> {
        writeln!(self.inner, "stream")?;
        self.inner.write_all(data)?;
        if !data.ends_with(&[0x0a]) {
            writeln!(self.inner)?;
        }
        writeln!(self.inner, "endstream")?;
        Ok(())
    }

    /// Write an object and record its offset
    pub fn obj(&mut self, r#ref: ObjRef, obj: &dyn Serialize) -> io::Result<()> {
        let offset = self.inner.bytes_written();
        writeln!(self.inner, "{} {} obj", r#ref.id, r#ref.gen)?;
        self.needs_space = false;
        obj.write(self)?;
        if self.needs_space {
            // the body ended on a bare token
            writeln!(self.inner)?;
            self.needs_space = false;
        }
        writeln!(self.inner, "endobj")?;

        let index = r#ref.id as usize;
        if self.xref.len() <= index {
            self.xref.resize(index + 1, None);
        }
        self.xref[index] = Some(XrefEntry {
            offset,
            gen: r#ref.gen,
        });
        Ok(())
    }

    /// Write a classic xref section with a single subsection starting at 0.
    ///
    /// Returns the offset of the `xref` keyword for `startxref`.
    pub fn xref(&mut self) -> io::Result<usize> {
        let offset = self.inner.bytes_written();
        writeln!(self.inner, "xref")?;
        writeln!(self.inner, "0 {}", self.xref.len())?;

        for entry in &self.xref {
            // NOTE: every entry is exactly 20 bytes, the eol is SP LF
            match entry {
                Some(XrefEntry { offset, gen }) => {
                    writeln!(self.inner, "{:010} {:05} n ", offset, gen)?
                }
                None => writeln!(self.inner, "{:010} {:05} f ", 0, 65535)?,
            }
        }

        Ok(offset)
    }

    fn indent(&mut self) -> io::Result<()> {
        write!(self.inner, "{:indent$}", "", indent = self.indent)?;
        Ok(())
    }
}

/// Trait to serialize some PDF object
pub trait Serialize {
    /// Write the object to a stream
    fn write(&self, f: &mut Formatter) -> io::Result<()>;
}

impl<X: Serialize> Serialize for &'_ X {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        (*self).write(f)
    }
}

macro_rules! serialize_display_impl {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn write(&self, f: &mut Formatter) -> io::Result<()> {
                if f.needs_space {
                    write!(f.inner, " ")?;
                }
                write!(f.inner, "{}", self)?;
                f.needs_space = true;
                Ok(())
            }
        }
    };
}

serialize_display_impl!(usize);
serialize_display_impl!(i32);

impl<X: Serialize> Serialize for [X] {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.pdf_arr().entries(self)?.finish()
    }
}

impl<X: Serialize> Serialize for Vec<X> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        self.as_slice().write(f)
    }
}

impl Serialize for ObjRef {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        if f.needs_space {
            write!(f.inner, " ")?;
        }
        f.needs_space = write_ref(*self, &mut f.inner)?;
        Ok(())
    }
}

/// A borrowed PDF name (e.g. `/Font`)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PdfName<'a>(pub &'a str);

impl Serialize for PdfName<'_> {
    fn write(&self, f: &mut Formatter) -> io::Result<()> {
        f.needs_space = write_name(self.0, &mut f.inner)?;
        Ok(())
    }
}

/// Writes `text` as a literal string: escaped, then encoded as WinAnsi.
///
/// This is the only place where text is escaped.
pub fn write_text_string<W: Write>(text: &str, w: &mut W) -> io::Result<bool> {
    let escaped = escape(text);
    w.write_all(b"(")?;
    w.write_all(&win_ansi_encode_lossy(&escaped))?;
    w.write_all(b")")?;
    Ok(false)
}

/// Write a borrowed string as a PDF name
pub fn write_name<W: Write>(name: &str, w: &mut W) -> io::Result<bool> {
    write!(w, "/{}", name)?;
    Ok(true)
}

/// Write a plain reference
pub fn write_ref<W: Write>(plain_ref: ObjRef, w: &mut W) -> io::Result<bool> {
    write!(w, "{} {} R", plain_ref.id, plain_ref.gen)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Formatter) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        let mut fmt = Formatter::new(&mut buf);
        f(&mut fmt).unwrap();
        drop(fmt);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn object_with_dict() {
        let out = render(|f| {
            struct Catalog;
            impl Serialize for Catalog {
                fn write(&self, f: &mut Formatter) -> io::Result<()> {
                    f.pdf_dict()
                        .field("Type", &PdfName("Catalog"))?
                        .field("Pages", &ObjRef::new(2))?
                        .finish()
                }
            }
            f.obj(ObjRef::new(1), &Catalog)
        });
        assert_eq!(
            out,
            "1 0 obj\n<<\n  /Type/Catalog\n  /Pages 2 0 R\n>>\nendobj\n"
        );
    }

    #[test]
    fn arrays_of_refs() {
        let out = render(|f| vec![ObjRef::new(3), ObjRef::new(5)].write(f));
        assert_eq!(out, "[3 0 R 5 0 R]");
    }

    #[test]
    fn xref_marks_missing_ids_free() {
        let mut buf = Vec::new();
        let mut fmt = Formatter::with_capacity(&mut buf, 3);
        fmt.obj(ObjRef::new(1), &7usize).unwrap();
        fmt.obj(ObjRef::new(3), &9usize).unwrap();
        let start = fmt.xref().unwrap();
        assert_eq!(fmt.xref_size(), 4);
        assert_eq!(fmt.xref_entry(2), None);
        drop(fmt);

        let table = &buf[start..];
        let expected = concat!(
            "xref\n0 4\n",
            "0000000000 65535 f \n",
            "0000000000 00000 n \n",
            "0000000000 65535 f \n",
            "0000000017 00000 n \n",
        );
        assert_eq!(std::str::from_utf8(table).unwrap(), expected);
    }

    #[test]
    fn bare_objects_end_with_eol() {
        let mut buf = Vec::new();
        let mut fmt = Formatter::new(&mut buf);
        fmt.obj(ObjRef::new(1), &7usize).unwrap();
        fmt.obj(ObjRef::new(2), &vec![ObjRef::new(1)]).unwrap();
        fmt.obj(ObjRef::new(3), &crate::low::Catalog { pages: ObjRef::new(2) }).unwrap();
        drop(fmt);
        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            concat!(
                "1 0 obj\n7\nendobj\n",
                "2 0 obj\n[1 0 R]\nendobj\n",
                "3 0 obj\n<<\n  /Type/Catalog\n  /Pages 2 0 R\n>>\nendobj\n",
            )
        );
    }

    #[test]
    fn text_strings_are_escaped_once() {
        let mut buf = Vec::new();
        write_text_string("A (test) \\value", &mut buf).unwrap();
        assert_eq!(buf, b"(A \\(test\\) \\\\value)".to_vec());
    }
}
