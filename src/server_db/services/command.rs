//! The resolve-check-mutate procedure shared by every mutating command.
//!
//! Each command validates its arguments, resolves its target under an
//! exists-policy ([`require_present`] or [`require_absent`]) and hands the
//! result to [`execute`], which either applies the mutation or, in quiet
//! mode, turns a lookup failure into a skipped no-op.

use super::error::{Parameter, ServerDbServiceError, ServerDbServiceResult, Target};
use tracing::debug;

/// Whether lookup failures are reported or silently skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuietMode {
    /// Report missing and already-existing targets as errors.
    #[default]
    Disabled,
    /// Treat missing and already-existing targets as successful no-ops.
    Enabled,
}

impl QuietMode {
    /// Returns whether `error` is downgraded to a no-op in this mode.
    ///
    /// Missing parameters and validation failures are never suppressed.
    #[must_use]
    pub const fn suppresses(self, error: &ServerDbServiceError) -> bool {
        matches!(self, Self::Enabled)
            && matches!(
                error,
                ServerDbServiceError::NotFound(_) | ServerDbServiceError::AlreadyExists(_)
            )
    }
}

impl From<bool> for QuietMode {
    fn from(quiet: bool) -> Self {
        if quiet { Self::Enabled } else { Self::Disabled }
    }
}

/// Result of a mutating command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The mutation was applied.
    Applied,
    /// Quiet mode skipped the command; nothing changed.
    Skipped,
}

impl CommandOutcome {
    /// Returns whether the mutation was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Fails with [`ServerDbServiceError::MissingParameter`] when `value` is empty
/// after trimming.
pub(super) fn require_param(value: &str, parameter: Parameter) -> ServerDbServiceResult<&str> {
    if value.trim().is_empty() {
        return Err(ServerDbServiceError::MissingParameter(parameter));
    }
    Ok(value)
}

/// Resolves to the found value, or [`ServerDbServiceError::NotFound`].
pub(super) fn require_present<T>(
    found: Option<T>,
    target: impl FnOnce() -> Target,
) -> ServerDbServiceResult<T> {
    found.ok_or_else(|| ServerDbServiceError::NotFound(target()))
}

/// Resolves when nothing was found, or fails with
/// [`ServerDbServiceError::AlreadyExists`].
pub(super) fn require_absent<T>(
    found: Option<T>,
    target: impl FnOnce() -> Target,
) -> ServerDbServiceResult<()> {
    match found {
        Some(_) => Err(ServerDbServiceError::AlreadyExists(target())),
        None => Ok(()),
    }
}

/// Applies `mutation` to a resolved target.
///
/// A resolution failure that `quiet` suppresses yields
/// [`CommandOutcome::Skipped`] without running the mutation.
pub(super) fn execute<T>(
    quiet: QuietMode,
    resolved: ServerDbServiceResult<T>,
    mutation: impl FnOnce(T) -> ServerDbServiceResult<()>,
) -> ServerDbServiceResult<CommandOutcome> {
    match resolved {
        Ok(target) => {
            mutation(target)?;
            Ok(CommandOutcome::Applied)
        }
        Err(error) if quiet.suppresses(&error) => {
            debug!(%error, "quiet mode skipped command");
            Ok(CommandOutcome::Skipped)
        }
        Err(error) => Err(error),
    }
}
