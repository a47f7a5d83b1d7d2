//! Common error infrastructure for cavern-core.
//!
//! Domain-specific errors (e.g., [`GraphError`](crate::GraphError),
//! [`MoveError`](crate::MoveError)) are defined next to the code that raises
//! them. This module provides the classification shared by all of them so
//! callers can decide how loudly to report a failure.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the collaborator refused something, an alternative may work
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: inconsistent state that indicates a bug
/// - **Fatal**: the current phase cannot complete
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error - an alternative action may still succeed.
    ///
    /// Examples: destination blocked
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown node, non-adjacent move, zero-weight edge
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: safety margin lost mid-flee
    Internal,

    /// Fatal error - the phase cannot complete.
    ///
    /// Examples: orb or exit unreachable
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a broken precondition.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all cavern errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; tests and logs match on it
pub trait CavernError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
