//! PDF object serialization.
//!
//! Serializes PDF objects to their byte representation according to
//! PDF specification ISO 32000-1:2008, section 7.3.

use super::indirect::IndirectObject;
use super::output::PdfOutput;
use crate::error::{Error, Result};
use crate::object::{
    format_real, is_regular_name_byte, literal_escape, Dictionary, Name, Object, PdfString,
    Stream, StringFormat,
};
use std::io::Write;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Serializer for PDF objects.
///
/// Stateless; all line bookkeeping lives in [`PdfOutput`]. Every `write_*`
/// method returns the number of bytes it emitted, which always equals the
/// value's `byte_len()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a new object serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, obj: &Object) -> Result<Vec<u8>> {
        let mut out = PdfOutput::new(Vec::with_capacity(obj.byte_len()));
        self.write_object(&mut out, obj)?;
        Ok(out.into_inner())
    }

    /// Serialize an object to a string (for debugging).
    pub fn serialize_to_string(&self, obj: &Object) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.serialize(obj)?).into_owned())
    }

    /// Serialize an indirect object definition.
    ///
    /// Format: `{id} {gen} obj\n{object}\nendobj\n`
    pub fn serialize_indirect(&self, obj: &IndirectObject) -> Result<Vec<u8>> {
        let mut out = PdfOutput::new(Vec::with_capacity(obj.byte_len()));
        self.write_indirect(&mut out, obj)?;
        Ok(out.into_inner())
    }

    /// Write an indirect object definition.
    pub fn write_indirect<W: Write>(
        &self,
        out: &mut PdfOutput<W>,
        obj: &IndirectObject,
    ) -> Result<usize> {
        let header = format!("{} {} obj", obj.id(), obj.generation());
        let mut n = out.token(header.as_bytes())?;
        n += out.newline()?;
        n += self.write_object(out, obj.value())?;
        n += out.newline()?;
        n += out.token(b"endobj")?;
        n += out.newline()?;
        Ok(n)
    }

    /// Write an object.
    pub fn write_object<W: Write>(&self, out: &mut PdfOutput<W>, obj: &Object) -> Result<usize> {
        self.write_value(out, obj, 0)
    }

    /// Write an object followed by `trail` bytes of closing delimiters.
    fn write_value<W: Write>(
        &self,
        out: &mut PdfOutput<W>,
        obj: &Object,
        trail: usize,
    ) -> Result<usize> {
        match obj {
            Object::Null => out.token(b"null"),
            Object::Boolean(b) => out.token(if *b { &b"true"[..] } else { &b"false"[..] }),
            Object::Integer(i) => out.token(i.to_string().as_bytes()),
            Object::Real(r) => self.write_real(out, *r),
            Object::String(s) => self.write_string(out, s),
            Object::Name(n) => self.write_name(out, n),
            Object::Array(arr) => self.write_array(out, arr, trail),
            Object::Dictionary(dict) => self.write_dictionary(out, dict, trail),
            Object::Stream(stream) => self.write_stream(out, stream),
            Object::Reference(r) => out.token(r.to_string().as_bytes()),
        }
    }

    fn write_real<W: Write>(&self, out: &mut PdfOutput<W>, value: f64) -> Result<usize> {
        let text = format_real(value).ok_or(Error::NonFiniteReal(value))?;
        out.token(text.as_bytes())
    }

    /// Write a PDF string in its chosen format.
    fn write_string<W: Write>(&self, out: &mut PdfOutput<W>, s: &PdfString) -> Result<usize> {
        let mut token = Vec::with_capacity(s.byte_len());
        match s.format() {
            StringFormat::Literal => {
                token.push(b'(');
                for &byte in s.as_bytes() {
                    match literal_escape(byte) {
                        Some(escape) => token.extend_from_slice(escape),
                        None => token.push(byte),
                    }
                }
                token.push(b')');
            },
            StringFormat::Hexadecimal => {
                token.push(b'<');
                for &byte in s.as_bytes() {
                    token.push(HEX_DIGITS[(byte >> 4) as usize]);
                    token.push(HEX_DIGITS[(byte & 0x0F) as usize]);
                }
                token.push(b'>');
            },
        }
        out.token(&token)
    }

    /// Write a PDF name.
    ///
    /// Names start with `/` and escape irregular bytes with `#xx`.
    fn write_name<W: Write>(&self, out: &mut PdfOutput<W>, name: &Name) -> Result<usize> {
        let mut token = Vec::with_capacity(name.byte_len());
        token.push(b'/');
        for &byte in name.as_bytes() {
            if is_regular_name_byte(byte) {
                token.push(byte);
            } else {
                token.push(b'#');
                token.push(HEX_DIGITS[(byte >> 4) as usize]);
                token.push(HEX_DIGITS[(byte & 0x0F) as usize]);
            }
        }
        out.token(&token)
    }

    fn write_array<W: Write>(
        &self,
        out: &mut PdfOutput<W>,
        arr: &[Object],
        trail: usize,
    ) -> Result<usize> {
        let last = arr.len().saturating_sub(1);
        let mut n = out.token(b"[")?;
        for (i, obj) in arr.iter().enumerate() {
            let obj_trail = if i == last { trail + 1 } else { 0 };
            if i > 0 {
                n += out.separator(run_len(obj, obj_trail))?;
            }
            n += self.write_value(out, obj, obj_trail)?;
        }
        n += out.token(b"]")?;
        Ok(n)
    }

    fn write_dictionary<W: Write>(
        &self,
        out: &mut PdfOutput<W>,
        dict: &Dictionary,
        trail: usize,
    ) -> Result<usize> {
        let last = dict.len().saturating_sub(1);
        let mut n = out.token(b"<<")?;
        for (i, (key, value)) in dict.iter().enumerate() {
            if i > 0 {
                n += out.separator(key.byte_len())?;
            }
            n += self.write_name(out, key)?;
            let value_trail = if i == last { trail + 2 } else { 0 };
            n += out.separator(run_len(value, value_trail))?;
            n += self.write_value(out, value, value_trail)?;
        }
        n += out.token(b">>")?;
        Ok(n)
    }

    fn write_stream<W: Write>(&self, out: &mut PdfOutput<W>, stream: &Stream) -> Result<usize> {
        let mut n = self.write_dictionary(out, stream.dict(), 0)?;
        n += out.newline()?;
        n += out.token(b"stream")?;
        n += out.newline()?;
        n += out.payload(stream.data())?;
        n += out.newline()?;
        n += out.token(b"endstream")?;
        Ok(n)
    }
}

/// Length of the leading run of `obj` that has no separator to break at.
///
/// `trail` is the number of closing-delimiter bytes written right after `obj`
/// (for the last element of a container).
fn run_len(obj: &Object, trail: usize) -> usize {
    match obj {
        Object::Array(items) => match items.as_slice() {
            [] => 2 + trail,
            [only] => 1 + run_len(only, trail + 1),
            [first, ..] => 1 + run_len(first, 0),
        },
        Object::Dictionary(dict) => dictionary_run_len(dict, trail),
        Object::Stream(stream) => dictionary_run_len(stream.dict(), 0),
        other => other.byte_len() + trail,
    }
}

fn dictionary_run_len(dict: &Dictionary, trail: usize) -> usize {
    match dict.iter().next() {
        Some((key, _)) => 2 + key.byte_len(),
        None => 4 + trail,
    }
}
