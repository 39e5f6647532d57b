//! # Persistence Error Types
//!
//! Errors for the key-value store and snapshot codec.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistError (this module) ← categorized, carried by writes            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session logs at warn! and continues ← reads never see it; they         │
//! │                                         degrade to "nothing stored"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local storage errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing a value file failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    /// - File removed between stat and read
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot did not encode or decode.
    ///
    /// ## When This Occurs
    /// - Stored JSON predates a schema change
    /// - The value file was hand-edited
    #[error("Snapshot encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let io = PersistError::from(std::io::Error::other("disk on fire"));
        assert!(io.to_string().starts_with("Storage I/O failed"));

        let codec = serde_json::from_str::<i32>("{").unwrap_err();
        let err = PersistError::from(codec);
        assert!(err.to_string().starts_with("Snapshot encoding failed"));
    }
}
