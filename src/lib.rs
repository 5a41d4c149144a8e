// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::new_without_default)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Kiln
//!
//! The low-level core of a PDF generator: everything needed to emit a
//! byte-exact, internally consistent PDF file without an external toolkit.
//!
//! ## Core Features
//!
//! - **Object Model**: null, booleans, integers, reals, names, strings,
//!   arrays, dictionaries, streams and references, each with an exact
//!   serialized length
//! - **Serialization**: ISO 32000-1:2008 section 7.3 syntax, insertion-ordered
//!   dictionaries for reproducible output, 255-byte line limit
//! - **Cross-Reference Table**: claimed/resolved slot bookkeeping and the
//!   fixed-width 20-byte entry format
//! - **Stream Filters**: FlateDecode compression and ASCII85Decode armoring,
//!   chained in a recorded order
//!
//! Reading, incremental updates, encryption and signing are out of scope.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_kiln::object::{Dictionary, Object};
//! use pdf_kiln::writer::{catalog, PdfWriter, PdfWriterConfig};
//!
//! # fn main() -> pdf_kiln::Result<()> {
//! let mut writer = PdfWriter::new(Vec::new(), PdfWriterConfig::default())?;
//! let pages = writer.add(
//!     Dictionary::new()
//!         .with("Type", Object::name("Pages"))
//!         .with("Kids", Object::Array(Vec::new()))
//!         .with("Count", 0),
//! )?;
//! let root = writer.add(catalog(pages))?;
//! let pdf = writer.finish(root)?;
//! assert!(pdf.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core PDF object model
pub mod object;

// Stream filters
pub mod decoders;
pub mod encoders;

// Configuration
pub mod config;

// PDF writing
pub mod writer;

// Re-exports
pub use config::FilterPipelineConfig;
pub use error::{Error, Result};
pub use object::{Dictionary, Name, Object, ObjectRef, PdfString, Stream};
pub use writer::{CrossReferenceTable, IndirectObject, ObjectId, PdfWriter, PdfWriterConfig};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_kiln");
    }
}
