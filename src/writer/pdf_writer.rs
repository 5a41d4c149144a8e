//! PDF document writer.
//!
//! Assembles complete PDF files with proper structure:
//! header, body, xref table, and trailer.
//!
//! The writer streams straight to the caller's sink. Objects are written as
//! soon as they are handed over, and their offsets go into the
//! cross-reference table as they are written.

use super::indirect::{IndirectObject, ObjectId};
use super::object_serializer::ObjectSerializer;
use super::output::PdfOutput;
use super::stream_builder::StreamBuilder;
use super::xref::CrossReferenceTable;
use crate::config::FilterPipelineConfig;
use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Stream filter toggles
    pub filters: FilterPipelineConfig,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            author: None,
            creator: None,
            filters: FilterPipelineConfig::default(),
        }
    }
}

impl PdfWriterConfig {
    /// Set the PDF version written in the header.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set creator application.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the stream filter toggles.
    pub fn with_filters(mut self, filters: FilterPipelineConfig) -> Self {
        self.filters = filters;
        self
    }

    fn info_dictionary(&self) -> Option<Dictionary> {
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Creator", &self.creator),
        ];
        let dict: Dictionary = entries
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, Object::string(v))))
            .collect();
        (!dict.is_empty()).then_some(dict)
    }
}

/// Streaming PDF writer.
///
/// Usage follows the order a PDF file is laid out in:
/// claim ids, write every object, then [`PdfWriter::finish`] with the catalog.
pub struct PdfWriter<W: Write> {
    config: PdfWriterConfig,
    output: PdfOutput<W>,
    xref: CrossReferenceTable,
    serializer: ObjectSerializer,
    streams: StreamBuilder,
}

impl<W: Write> PdfWriter<W> {
    /// Start a document: writes the version header and binary marker.
    pub fn new(sink: W, config: PdfWriterConfig) -> Result<Self> {
        let mut output = PdfOutput::new(sink);
        writeln!(output, "%PDF-{}", config.version)?;
        // Binary marker (recommended for binary content)
        output.write_all(b"%\xE2\xE3\xCF\xD3\n")?;

        let streams = StreamBuilder::new(config.filters);
        Ok(Self {
            config,
            output,
            xref: CrossReferenceTable::new(),
            serializer: ObjectSerializer::new(),
            streams,
        })
    }

    /// Claim the next object id.
    pub fn claim_slot(&mut self) -> ObjectId {
        self.xref.claim_slot()
    }

    /// Claim an id and wrap `value` under it.
    pub fn claim(&mut self, value: impl Into<Object>) -> IndirectObject {
        let id = self.claim_slot();
        IndirectObject::new(id, value)
    }

    /// Stream builder configured from this writer's filter toggles.
    pub fn streams(&self) -> &StreamBuilder {
        &self.streams
    }

    /// The cross-reference table so far.
    pub fn xref(&self) -> &CrossReferenceTable {
        &self.xref
    }

    /// Bytes written so far.
    pub fn position(&self) -> u64 {
        self.output.position()
    }

    /// Write an indirect object and record its offset.
    pub fn write_object(&mut self, object: &IndirectObject) -> Result<ObjectRef> {
        let offset = self.output.position();
        self.xref.set_slot(object, offset)?;
        let n = self.serializer.write_indirect(&mut self.output, object)?;
        log::debug!("Wrote object {} at offset {} ({} bytes)", object.id(), offset, n);
        Ok(object.reference())
    }

    /// Claim an id for `value` and write it immediately.
    pub fn add(&mut self, value: impl Into<Object>) -> Result<ObjectRef> {
        let object = self.claim(value);
        self.write_object(&object)
    }

    /// Write the info dictionary (if any), xref table and trailer.
    ///
    /// `root` is the document catalog. Returns the underlying sink.
    pub fn finish(mut self, root: ObjectRef) -> Result<W> {
        let info = match self.config.info_dictionary() {
            Some(dict) => Some(self.add(dict)?),
            None => None,
        };

        let xref_offset = self.output.position();
        self.xref.write_to(&mut self.output)?;

        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer(self.xref.size() as i64));
        trailer.set("Root", root);
        if let Some(info) = info {
            trailer.set("Info", info);
        }

        self.output.write_all(b"trailer\n")?;
        self.serializer
            .write_object(&mut self.output, &Object::Dictionary(trailer))?;
        write!(self.output, "\nstartxref\n{}\n%%EOF\n", xref_offset)?;
        self.output.flush()?;
        log::debug!(
            "Finished PDF: {} objects, {} bytes",
            self.xref.len(),
            self.output.position()
        );

        Ok(self.output.into_inner())
    }
}

/// Convenience for building a catalog with a page tree root.
pub fn catalog(pages: ObjectRef) -> Dictionary {
    Dictionary::new()
        .with("Type", Object::name("Catalog"))
        .with("Pages", pages)
}

/// Write a PDF file atomically.
///
/// The document is written to a hidden temporary file next to `path` and
/// renamed into place only if `build` and [`PdfWriter::finish`] succeed;
/// on failure the temporary file is removed and `path` is left untouched.
pub fn write_atomic<P, F>(path: P, config: PdfWriterConfig, build: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut PdfWriter<BufWriter<File>>) -> Result<ObjectRef>,
{
    let path = path.as_ref();
    let tmp = temporary_path(path);

    let result: Result<()> = (|| {
        let file = File::create(&tmp)?;
        let mut writer = PdfWriter::new(BufWriter::new(file), config)?;
        let root = build(&mut writer)?;
        let mut sink = writer.finish(root)?;
        sink.flush()?;
        sink.get_ref().sync_all()?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            fs::rename(&tmp, path)?;
            Ok(())
        },
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        },
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
