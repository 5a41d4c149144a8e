//! PDF writing module.
//!
//! ## Architecture
//!
//! ```text
//! payload bytes
//!     ↓
//! [StreamBuilder] (filter toggles → FlateDecode / ASCII85Decode)
//!     ↓
//! Object graph + [IndirectObject]s (ids claimed from the xref table)
//!     ↓
//! [PdfWriter] (header, body, xref, trailer)
//!     ↓
//! [ObjectSerializer] → [PdfOutput] (offsets, 255-byte lines)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use pdf_kiln::object::{Dictionary, Object};
//! use pdf_kiln::writer::{catalog, IndirectObject, PdfWriter, PdfWriterConfig};
//!
//! let mut writer = PdfWriter::new(Vec::new(), PdfWriterConfig::default())?;
//! let pages_id = writer.claim_slot();
//! let content = writer.streams().content_stream(b"0 0 m 100 100 l S")?;
//! let content = writer.add(content)?;
//! let page = writer.add(
//!     Dictionary::new()
//!         .with("Type", Object::name("Page"))
//!         .with("Parent", pages_id)
//!         .with("MediaBox", Object::rect(0.0, 0.0, 612.0, 792.0))
//!         .with("Contents", content),
//! )?;
//! let pages = IndirectObject::new(
//!     pages_id,
//!     Dictionary::new()
//!         .with("Type", Object::name("Pages"))
//!         .with("Kids", Object::Array(vec![page.into()]))
//!         .with("Count", 1),
//! );
//! writer.write_object(&pages)?;
//! let root = writer.add(catalog(pages.reference()))?;
//! let bytes = writer.finish(root)?;
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! # Ok::<(), pdf_kiln::Error>(())
//! ```

mod indirect;
mod object_serializer;
mod output;
mod pdf_writer;
mod stream_builder;
mod xref;

pub use indirect::{IndirectObject, ObjectId, GENERATION};
pub use object_serializer::ObjectSerializer;
pub use output::{PdfOutput, MAX_LINE_LENGTH};
pub use pdf_writer::{catalog, write_atomic, PdfWriter, PdfWriterConfig};
pub use stream_builder::{EmbeddedFontData, FontProgram, StreamBuilder};
pub use xref::{CrossReferenceTable, XREF_ENTRY_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _serializer = ObjectSerializer::new();
        let _table = CrossReferenceTable::new();
        let _streams = StreamBuilder::default();
        assert_eq!(MAX_LINE_LENGTH, 255);
        assert_eq!(XREF_ENTRY_LEN, 20);
    }
}
