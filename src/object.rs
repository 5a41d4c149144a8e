//! PDF object types.
//!
//! The closed set of primitive values a PDF body is made of. Every value knows
//! its exact serialized length (`byte_len`), which the writer relies on when
//! deciding where a line may be broken.

use crate::encoders::{Filter, StreamEncoder};
use crate::error::{Error, Result};
use bytes::Bytes;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// String (literal or hexadecimal)
    String(PdfString),
    /// Name (written with a leading /)
    Name(Name),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (insertion-ordered key-value pairs)
    Dictionary(Dictionary),
    /// Stream (dictionary + data)
    Stream(Stream),
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    id: u32,
    gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    ///
    /// Outside the crate, references come from
    /// [`crate::writer::ObjectId::reference`], which guarantees a positive id.
    pub(crate) fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }

    /// Object number, always positive.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Generation number.
    pub fn generation(&self) -> u16 {
        self.gen
    }

    /// Length of `<id> <gen> R`.
    pub fn byte_len(&self) -> usize {
        decimal_len(self.id as u64) + 1 + decimal_len(self.gen as u64) + 2
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

/// A PDF name, stored unescaped.
///
/// The leading `/` is not part of the stored bytes. Bytes outside the regular
/// character set are written as `#xx`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Vec<u8>);

impl Name {
    /// Create a name from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The unescaped name bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Name as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Serialized length including the leading `/` and `#xx` escapes.
    pub fn byte_len(&self) -> usize {
        1 + self
            .0
            .iter()
            .map(|&b| if is_regular_name_byte(b) { 1 } else { 3 })
            .sum::<usize>()
    }
}

impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Name {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

/// Bytes that may appear in a name without `#` escaping.
///
/// Printable ASCII except the PDF delimiters and the escape character itself.
pub(crate) fn is_regular_name_byte(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7E)
        && !matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        )
}

/// How a string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringFormat {
    /// `(...)` with backslash escapes
    #[default]
    Literal,
    /// `<...>` with two hex digits per byte
    Hexadecimal,
}

/// A PDF string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfString {
    bytes: Vec<u8>,
    format: StringFormat,
}

impl PdfString {
    /// Literal string `(...)`.
    pub fn literal(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            format: StringFormat::Literal,
        }
    }

    /// Hexadecimal string `<...>`.
    pub fn hex(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            format: StringFormat::Hexadecimal,
        }
    }

    /// Raw (unescaped) string bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Output format.
    pub fn format(&self) -> StringFormat {
        self.format
    }

    /// Serialized length including delimiters and escapes.
    pub fn byte_len(&self) -> usize {
        match self.format {
            StringFormat::Literal => {
                2 + self
                    .bytes
                    .iter()
                    .map(|&b| if literal_escape(b).is_some() { 2 } else { 1 })
                    .sum::<usize>()
            },
            StringFormat::Hexadecimal => 2 + 2 * self.bytes.len(),
        }
    }
}

/// Escape sequence for a byte inside a literal string, if it needs one.
///
/// Line breaks are escaped so a literal never resets the writer's column.
pub(crate) fn literal_escape(byte: u8) -> Option<&'static [u8]> {
    match byte {
        b'(' => Some(b"\\("),
        b')' => Some(b"\\)"),
        b'\\' => Some(b"\\\\"),
        b'\n' => Some(b"\\n"),
        b'\r' => Some(b"\\r"),
        b'\t' => Some(b"\\t"),
        0x08 => Some(b"\\b"),
        0x0C => Some(b"\\f"),
        _ => None,
    }
}

/// Insertion-ordered PDF dictionary.
///
/// Keys are unique; setting an existing key replaces its value without moving it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(IndexMap<Name, Object>);

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn set(&mut self, key: impl Into<Name>, value: impl Into<Object>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`Dictionary::set`].
    pub fn with(mut self, key: impl Into<Name>, value: impl Into<Object>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key.as_bytes())
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.0.shift_remove(key.as_bytes())
    }

    /// Whether the dictionary has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key.as_bytes())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.0.iter()
    }

    /// Serialized length: `<<`, entries `/Key value` separated by spaces, `>>`.
    pub fn byte_len(&self) -> usize {
        let entries: usize = self
            .0
            .iter()
            .map(|(k, v)| k.byte_len() + 1 + v.byte_len())
            .sum();
        4 + entries + self.0.len().saturating_sub(1)
    }
}

impl<K: Into<Name>, V: Into<Object>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A stream: dictionary plus payload plus the filters applied to it.
///
/// `/Length` and `/Filter` are owned by the stream and kept in sync with the
/// payload; callers cannot overwrite them through [`Stream::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    dict: Dictionary,
    data: Bytes,
    filters: Vec<Filter>,
}

impl Stream {
    /// Create an unfiltered stream.
    ///
    /// Any `/Length` or `/Filter` already in `dict` is replaced.
    pub fn new(dict: Dictionary, data: impl Into<Bytes>) -> Self {
        let mut stream = Self {
            dict,
            data: data.into(),
            filters: Vec::new(),
        };
        stream.sync_entries();
        stream
    }

    /// Set a dictionary entry other than `/Length` or `/Filter`.
    pub fn set(&mut self, key: impl Into<Name>, value: impl Into<Object>) {
        self.dict.set(key, value);
        self.sync_entries();
    }

    /// Encode the payload with `encoder` and record its filter.
    pub fn apply(&mut self, encoder: &dyn StreamEncoder) -> Result<()> {
        let encoded = encoder.encode(&self.data)?;
        log::trace!(
            "{}: {} -> {} bytes",
            encoder.filter().name(),
            self.data.len(),
            encoded.len()
        );
        self.data = Bytes::from(encoded);
        self.filters.push(encoder.filter());
        self.sync_entries();
        Ok(())
    }

    /// The stream dictionary, including `/Length` and `/Filter`.
    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    /// The (possibly encoded) payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Filters in application order; a reader inverts them last to first.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Recover the original payload by inverting the applied filters.
    pub fn decode_data(&self) -> Result<Vec<u8>> {
        let decode_order: Vec<Filter> = self.filters.iter().rev().copied().collect();
        crate::decoders::decode_stream(&self.data, &decode_order)
    }

    /// Serialized length: dictionary, `\nstream\n`, payload, `\nendstream`.
    pub fn byte_len(&self) -> usize {
        self.dict.byte_len() + 8 + self.data.len() + 10
    }

    fn sync_entries(&mut self) {
        self.dict.set("Length", Object::Integer(self.data.len() as i64));
        // /Filter lists decoders in the order a reader applies them.
        match self.filters.as_slice() {
            [] => {
                self.dict.remove("Filter");
            },
            [only] => self.dict.set("Filter", Object::name(only.name())),
            many => self.dict.set(
                "Filter",
                Object::Array(many.iter().rev().map(|f| Object::name(f.name())).collect()),
            ),
        }
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(_) => "String",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream(_) => "Stream",
            Object::Reference(_) => "Reference",
        }
    }

    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(Name::from(s))
    }

    /// Create a literal String object from text.
    pub fn string(s: &str) -> Object {
        Object::String(PdfString::literal(s.as_bytes()))
    }

    /// Create a rectangle array [x, y, width, height] -> [llx, lly, urx, ury].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Real(x),
            Object::Real(y),
            Object::Real(x + width),
            Object::Real(y + height),
        ])
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(s.dict()),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to stream.
    pub fn as_stream(&self) -> Result<&Stream> {
        match self {
            Object::Stream(s) => Ok(s),
            other => Err(Error::InvalidObjectType {
                expected: "Stream".to_string(),
                found: other.type_name().to_string(),
            }),
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Check if object is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Exact number of bytes the serializer emits for this object.
    ///
    /// A non-finite real has no representation and counts as zero bytes;
    /// writing one fails with [`Error::NonFiniteReal`].
    pub fn byte_len(&self) -> usize {
        match self {
            Object::Null => 4,
            Object::Boolean(true) => 4,
            Object::Boolean(false) => 5,
            Object::Integer(i) => integer_len(*i),
            Object::Real(r) => format_real(*r).map_or(0, |s| s.len()),
            Object::String(s) => s.byte_len(),
            Object::Name(n) => n.byte_len(),
            Object::Array(items) => {
                2 + items.iter().map(Object::byte_len).sum::<usize>()
                    + items.len().saturating_sub(1)
            },
            Object::Dictionary(d) => d.byte_len(),
            Object::Stream(s) => s.byte_len(),
            Object::Reference(r) => r.byte_len(),
        }
    }
}

/// Fixed-point text for a real: shortest digits that round-trip, never an exponent.
///
/// Returns `None` for NaN and infinities.
pub(crate) fn format_real(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return Some("0".to_string());
    }
    // f64's Display is shortest-round-trip and never uses exponent notation.
    Some(value.to_string())
}

fn integer_len(value: i64) -> usize {
    let sign = usize::from(value < 0);
    sign + decimal_len(value.unsigned_abs())
}

pub(crate) fn decimal_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<u32> for Object {
    fn from(i: u32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<f64> for Object {
    fn from(r: f64) -> Self {
        Object::Real(r)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Object::Name(n)
    }
}

impl From<PdfString> for Object {
    fn from(s: PdfString) -> Self {
        Object::String(s)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Object::Stream(s)
    }
}

impl From<ObjectRef> for Object {
    fn from(r: ObjectRef) -> Self {
        Object::Reference(r)
    }
}
