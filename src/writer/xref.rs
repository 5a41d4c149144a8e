//! Cross-reference table writer.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.5.4 - Cross-Reference Table.
//!
//! Each object id owns one slot. A slot is claimed when the id is handed out
//! and resolved once the object's byte offset is known:
//!
//! ```text
//! Unclaimed --claim_slot()--> Claimed --set_slot()--> Resolved
//! ```
//!
//! Ids are dense, start at 1 and are never reused. The table can only be
//! written once every claimed slot is resolved.

use super::indirect::{IndirectObject, ObjectId};
use crate::error::{Error, Result};
use crate::object::decimal_len;
use std::io::Write;

/// Free-list head entry for object 0.
const FREE_HEAD_ENTRY: &[u8; 20] = b"0000000000 65535 f\r\n";

/// Largest offset the 10-digit field can hold.
const MAX_OFFSET: u64 = 9_999_999_999;

/// Every xref entry is exactly this long, line ending included.
pub const XREF_ENTRY_LEN: usize = 20;

/// Slot arena indexed by `id - 1`; `None` means claimed but unresolved.
#[derive(Debug, Clone, Default)]
pub struct CrossReferenceTable {
    slots: Vec<Option<u64>>,
}

impl CrossReferenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next object id.
    pub fn claim_slot(&mut self) -> ObjectId {
        self.slots.push(None);
        ObjectId::claimed(self.slots.len() as u32)
    }

    /// Record the byte offset at which `object` begins.
    ///
    /// Fails if the id was never claimed or already has an offset.
    pub fn set_slot(&mut self, object: &IndirectObject, offset: u64) -> Result<()> {
        self.resolve(object.id(), offset)
    }

    /// Record the byte offset for a claimed id.
    pub fn resolve(&mut self, id: ObjectId, offset: u64) -> Result<()> {
        let slot = self
            .slots
            .get_mut(id.get() as usize - 1)
            .ok_or(Error::UnclaimedSlot(id.get()))?;
        if let Some(existing) = *slot {
            return Err(Error::SlotAlreadyResolved {
                id: id.get(),
                offset: existing,
            });
        }
        if offset > MAX_OFFSET {
            return Err(Error::OffsetOverflow(offset));
        }
        *slot = Some(offset);
        Ok(())
    }

    /// Offset recorded for `id`, if resolved.
    pub fn offset(&self, id: ObjectId) -> Option<u64> {
        self.slots.get(id.get() as usize - 1).copied().flatten()
    }

    /// Number of claimed slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been claimed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Trailer `/Size`: claimed slots plus the free-list head.
    pub fn size(&self) -> usize {
        self.slots.len() + 1
    }

    /// First claimed id that has no offset yet.
    pub fn first_unresolved(&self) -> Option<u32> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(|i| i as u32 + 1)
    }

    /// Exact length of the serialized table section.
    pub fn byte_len(&self) -> usize {
        // "xref\n" + "0 <size>\n" + one entry per slot including object 0
        5 + 2 + decimal_len(self.size() as u64) + 1 + XREF_ENTRY_LEN * self.size()
    }

    /// Write the `xref` section, returning the number of bytes written.
    ///
    /// Nothing is written if any claimed slot is unresolved.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<usize> {
        if let Some(id) = self.first_unresolved() {
            return Err(Error::UnresolvedSlot(id));
        }

        let mut buf = Vec::with_capacity(self.byte_len());
        write!(buf, "xref\n0 {}\n", self.size())?;
        buf.extend_from_slice(FREE_HEAD_ENTRY);
        for offset in self.slots.iter().flatten() {
            write!(buf, "{:010} {:05} n\r\n", offset, super::indirect::GENERATION)?;
        }

        w.write_all(&buf)?;
        log::debug!("Wrote xref table: {} entries, {} bytes", self.size(), buf.len());
        Ok(buf.len())
    }
}
