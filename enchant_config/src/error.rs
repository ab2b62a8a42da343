//! Error type reported by store backends.

use std::io;

use thiserror::Error;

use crate::key::ConfigKey;

/// Errors surfaced by [`ConfigStore`](crate::ConfigStore) backends.
///
/// The override fixture absorbs these and logs a warning rather than
/// propagating them; they are public so code driving a store directly can
/// still observe failures, and so store doubles outside this crate can
/// produce them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backend failed or refused an operation.
    #[error("{op} of {key} failed: {source}")]
    Access {
        /// Operation that failed (`read`, `write` or `clear`).
        op: &'static str,
        /// Key the operation addressed.
        key: ConfigKey,
        /// Underlying backend error.
        #[source]
        source: io::Error,
    },

    /// A stored value could not cross the string-encoding boundary.
    #[error("value of {key} is not representable as UTF-8")]
    Encoding {
        /// Key whose value failed conversion.
        key: ConfigKey,
    },
}

impl StoreError {
    /// Builds a [`StoreError::Access`] for a failed backend call.
    #[must_use]
    pub fn access(op: &'static str, key: ConfigKey, source: io::Error) -> Self {
        Self::Access { op, key, source }
    }

    /// Builds a [`StoreError::Encoding`] for a value the backend cannot
    /// represent as a UTF-8 string.
    #[must_use]
    pub const fn encoding(key: ConfigKey) -> Self {
        Self::Encoding { key }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::StoreError;
    use crate::key::ConfigKey;

    #[test]
    fn access_message_names_operation_and_key() {
        let error = StoreError::access(
            "clear",
            ConfigKey::USER_MODULE_DIR,
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let message = error.to_string();
        assert!(message.starts_with("clear of user:"), "message: {message}");
        assert!(message.contains("Module_Dir"), "message: {message}");
    }
}
