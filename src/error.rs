//! Error types for the PDF generation core.
//!
//! Precondition violations (bad object ids, misuse of the cross-reference
//! table, unrepresentable values) are reported through dedicated variants so
//! document assembly can abort with a precise reason.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating PDF output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Object ids must be positive; id 0 is the free-list head.
    #[error("Invalid object id {0}: object ids start at 1")]
    InvalidObjectId(u32),

    /// `set_slot` was called for an id that was never claimed.
    #[error("Cross-reference slot {0} was never claimed")]
    UnclaimedSlot(u32),

    /// `set_slot` was called twice for the same id.
    #[error("Cross-reference slot {id} already resolved to offset {offset}")]
    SlotAlreadyResolved {
        /// Object id of the slot
        id: u32,
        /// Offset recorded by the first call
        offset: u64,
    },

    /// The table was serialized while a claimed slot had no offset.
    #[error("Cross-reference slot {0} was claimed but never resolved")]
    UnresolvedSlot(u32),

    /// Byte offset does not fit the 10-digit xref entry field.
    #[error("Byte offset {0} exceeds the 10-digit cross-reference field")]
    OffsetOverflow(u64),

    /// NaN and infinities have no PDF representation.
    #[error("Real number {0} cannot be written to a PDF file")]
    NonFiniteReal(f64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream decoding error
    #[error("Stream decoding error: {0}")]
    Decode(String),

    /// Unsupported stream filter
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_object_id_error() {
        let err = Error::InvalidObjectId(0);
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid object id 0"));
    }

    #[test]
    fn test_slot_already_resolved_error() {
        let err = Error::SlotAlreadyResolved { id: 4, offset: 1234 };
        let msg = format!("{}", err);
        assert!(msg.contains("slot 4"));
        assert!(msg.contains("1234"));
    }

    #[test]
    fn test_unresolved_slot_error() {
        let err = Error::UnresolvedSlot(9);
        assert_eq!(format!("{}", err), "Cross-reference slot 9 was claimed but never resolved");
    }

    #[test]
    fn test_invalid_object_type_error() {
        let err = Error::InvalidObjectType {
            expected: "Stream".to_string(),
            found: "Array".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Stream"));
        assert!(msg.contains("Array"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
