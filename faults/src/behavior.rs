//! Behaviors are optional capabilities of errors, checked independently of concrete error types.
//!
//! An error exposes a behavior by answering `Some` from the respective [`Behavior`] accessor.
//! The predicates walk the whole chain of an error and let the first error which exposes the
//! behavior decide.

use crate::{
    chain::Chain,
    error::{Behaving, Error},
};
use core::{error::Error as StdError, time::Duration};

/// Optional capabilities of an error. Every accessor answers `None` unless overridden.
///
/// Implement it by hand or with `#[derive(Behavior)]`:
///
/// ```
/// use faults::{is_conflict, Behavior, Kind, Cause};
/// use std::fmt;
///
/// #[derive(Debug, Behavior)]
/// #[behavior(conflict)]
/// struct Version(u64);
///
/// impl fmt::Display for Version {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "v{}", self.0)
///     }
/// }
///
/// static ERR_VERSION: Kind<Version> = Kind::new("version {} is already taken");
///
/// let err = ERR_VERSION.with(Cause::none(), Version(7));
/// assert!(is_conflict(&err));
/// assert!(err.to_string().ends_with("version v7 is already taken"));
/// ```
pub trait Behavior {
    /// How long the failed operation waited.
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Key of the missing entity.
    fn not_found(&self) -> Option<&str> {
        None
    }

    /// Status code reported by a remote peer.
    fn status_code(&self) -> Option<&str> {
        None
    }

    fn pre_condition_failed(&self) -> Option<bool> {
        None
    }

    fn conflict(&self) -> Option<bool> {
        None
    }

    fn gone(&self) -> Option<bool> {
        None
    }

    /// Problem details of the error.
    fn issue(&self) -> Option<&dyn Issue> {
        None
    }
}

/// Problem details describing an error to a client, in the spirit of RFC 7807.
pub trait Issue {
    /// Application specific code of the error.
    fn code(&self) -> &str;

    /// URI identifying the error type.
    fn kind(&self) -> &str;

    /// URI identifying this occurrence of the error.
    fn instance(&self) -> &str;

    /// Short, human readable summary of the error type.
    fn title(&self) -> &str;

    /// Human readable explanation of this occurrence.
    fn detail(&self) -> &str;
}

pub(crate) fn behavior_of<'a>(node: &'a (dyn StdError + 'static)) -> Option<&'a dyn Behavior> {
    if let Some(err) = node.downcast_ref::<Error>() {
        return err.behavior().map(|behavior| behavior as &dyn Behavior);
    }

    node.downcast_ref::<Behaving>().map(Behaving::behavior)
}

fn first<'a, T>(
    err: &'a (dyn StdError + 'static),
    probe: impl FnMut(&'a dyn Behavior) -> Option<T>,
) -> Option<T> {
    Chain::new(err).filter_map(behavior_of).find_map(probe)
}

fn is_one_of(found: &str, candidates: &[&str]) -> bool {
    if candidates.is_empty() {
        return !found.is_empty();
    }

    candidates.contains(&found)
}

/// Whether the chain of `err` timed out after at least `deadline`.
pub fn is_timeout(err: &(dyn StdError + 'static), deadline: Duration) -> bool {
    first(err, |behavior| behavior.timeout()).is_some_and(|timeout| timeout >= deadline)
}

/// Whether the chain of `err` is about a missing entity.
///
/// Without `keys` any non-empty key matches, otherwise the key must be one of `keys`.
pub fn is_not_found(err: &(dyn StdError + 'static), keys: &[&str]) -> bool {
    first(err, |behavior| behavior.not_found()).is_some_and(|key| is_one_of(key, keys))
}

/// Whether the chain of `err` carries a status code.
///
/// Without `codes` any non-empty code matches, otherwise the code must be one of `codes`.
pub fn is_status_code(err: &(dyn StdError + 'static), codes: &[&str]) -> bool {
    first(err, |behavior| behavior.status_code()).is_some_and(|code| is_one_of(code, codes))
}

pub fn is_pre_condition_failed(err: &(dyn StdError + 'static)) -> bool {
    first(err, |behavior| behavior.pre_condition_failed()).unwrap_or(false)
}

pub fn is_conflict(err: &(dyn StdError + 'static)) -> bool {
    first(err, |behavior| behavior.conflict()).unwrap_or(false)
}

pub fn is_gone(err: &(dyn StdError + 'static)) -> bool {
    first(err, |behavior| behavior.gone()).unwrap_or(false)
}

/// Problem details of the first error in the chain of `err` that has them.
pub fn issue<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Issue> {
    first(err, |behavior| behavior.issue())
}
