//! Indirect objects and their identifiers.
//!
//! An indirect object is a value given an identity (`id`, generation) so other
//! objects can refer to it with `id 0 R`. Generation is always 0: this crate
//! writes fresh files and never revises existing ones.

use crate::error::{Error, Result};
use crate::object::{decimal_len, Object, ObjectRef};
use std::fmt;

/// Generation number of every object this crate writes.
pub const GENERATION: u16 = 0;

/// Positive object number.
///
/// Normally obtained from [`super::CrossReferenceTable::claim_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Validate an object number. Zero is reserved for the free-list head.
    pub fn new(id: u32) -> Result<Self> {
        if id == 0 {
            return Err(Error::InvalidObjectId(id));
        }
        Ok(Self(id))
    }

    /// Id handed out by the cross-reference table; always positive.
    pub(crate) fn claimed(id: u32) -> Self {
        debug_assert!(id > 0);
        Self(id)
    }

    /// The object number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Reference to this id (`id 0 R`).
    pub fn reference(self) -> ObjectRef {
        ObjectRef::new(self.0, GENERATION)
    }
}

impl TryFrom<u32> for ObjectId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        Self::new(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id.reference())
    }
}

/// A value with an object identity.
///
/// The value is fixed at construction; build it first (it may refer to other
/// claimed ids), then wrap it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    id: ObjectId,
    value: Object,
}

impl IndirectObject {
    /// Wrap `value` under `id`.
    pub fn new(id: ObjectId, value: impl Into<Object>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Object id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Generation number (always 0).
    pub fn generation(&self) -> u16 {
        GENERATION
    }

    /// The wrapped value.
    pub fn value(&self) -> &Object {
        &self.value
    }

    /// Unwrap the value.
    pub fn into_value(self) -> Object {
        self.value
    }

    /// Reference usable anywhere an [`Object`] is expected.
    pub fn reference(&self) -> ObjectRef {
        self.id.reference()
    }

    /// Serialized length of `id gen obj\n value \nendobj\n`.
    pub fn byte_len(&self) -> usize {
        let header = decimal_len(self.id.get() as u64) + 1 + decimal_len(GENERATION as u64) + 4;
        header + 1 + self.value.byte_len() + 1 + 6 + 1
    }
}
