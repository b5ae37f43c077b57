use crate::{
    behavior::Behavior,
    chain::{self, Chain},
    context::Declared,
    render::write_template,
};
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{error::Error as StdError, fmt, panic};

/// Source code location where a context was combined with its cause.
///
/// Rendered as `<file> <line>`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Location(&'static panic::Location<'static>);

impl Location {
    /// Location of the caller of the (`#[track_caller]`) function this is invoked from.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self(panic::Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.0.file()
    }

    pub fn line(&self) -> u32 {
        self.0.line()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.file(), self.line())
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file(), self.line())
    }
}

/// The error a context is combined with. It may be absent.
///
/// Any `Error + Send + Sync + 'static` converts into a [`Cause`], so contexts accept io errors,
/// errors of other crates and [`Error`]s of this crate alike:
///
/// ```
/// use faults::{Cause, Fast};
///
/// static ERR_READ: Fast = Fast::new("unable to read config");
///
/// let err = ERR_READ.with(std::io::Error::other("permission denied"));
/// assert_eq!(err.to_string(), "unable to read config: permission denied");
///
/// let err = ERR_READ.with(Cause::none());
/// assert_eq!(err.to_string(), "unable to read config");
/// ```
pub struct Cause(Option<Box<dyn StdError + Send + Sync + 'static>>);

impl Cause {
    /// An absent cause. Errors combined with it render without the `: <cause>` suffix.
    pub const fn none() -> Self {
        Self(None)
    }

    /// A cause whose own [`Behavior`] is visible to the behavior predicates.
    ///
    /// Plain conversions only see the behaviors of [`Error`]s; use this for foreign error types
    /// that implement [`Behavior`] themselves (e.g. through `#[derive(Behavior)]`).
    pub fn behaving<E>(err: E) -> Self
    where
        E: StdError + Behavior + Send + Sync + 'static,
    {
        Self(Some(Box::new(Behaving(Box::new(err)))))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(Some(Box::new(err)))
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cause").field(&self.0).finish()
    }
}

pub(crate) trait BehavingError: StdError + Behavior + Send + Sync + 'static {
    fn as_behavior(&self) -> &dyn Behavior;
}

impl<E> BehavingError for E
where
    E: StdError + Behavior + Send + Sync + 'static,
{
    fn as_behavior(&self) -> &dyn Behavior {
        self
    }
}

/// Transparent wrapper of a cause that exposes its own behaviors.
pub(crate) struct Behaving(Box<dyn BehavingError>);

impl Behaving {
    pub(crate) fn behavior(&self) -> &dyn Behavior {
        self.0.as_behavior()
    }
}

impl fmt::Display for Behaving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Behaving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl StdError for Behaving {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

struct Inner {
    location: Option<Location>,
    args: Vec<String>,
    head: &'static dyn Declared,
    tail: Option<Box<dyn StdError + Send + Sync + 'static>>,
    behavior: Option<Box<dyn Behavior + Send + Sync + 'static>>,
}

/// An error annotated with a declared context.
///
/// Produced by the `with` methods of the declared contexts. It renders as
/// `[location] template with arguments: cause`, where the location is present only for contexts
/// that capture the caller and the `: cause` suffix only when a cause was given.
///
/// The error links two parents: its head, the declaration it was produced from, and its tail,
/// the cause. Both are searched by [`Error::is`], [`Error::find`] and the behavior predicates.
pub struct Error(Box<Inner>);

impl Error {
    pub(crate) fn compose(
        location: Option<Location>,
        head: &'static dyn Declared,
        args: Vec<String>,
        cause: Cause,
        behavior: Option<Box<dyn Behavior + Send + Sync + 'static>>,
    ) -> Self {
        Self(Box::new(Inner {
            location,
            args,
            head,
            tail: cause.0,
            behavior,
        }))
    }

    /// Where the context was combined, if the context captures the caller.
    pub fn location(&self) -> Option<Location> {
        self.0.location
    }

    /// Rendered arguments, in declaration order.
    pub fn args(&self) -> &[String] {
        &self.0.args
    }

    pub fn template(&self) -> &'static str {
        self.0.head.template()
    }

    /// The declaration this error was produced from.
    pub fn head(&self) -> &'static dyn Declared {
        self.0.head
    }

    /// The cause, if any.
    pub fn tail(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.tail.as_deref().map(|tail| tail as &(dyn StdError + 'static))
    }

    /// The immediate parents of this error: the head, then the tail.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        core::iter::once(self.0.head.as_error()).chain(self.tail())
    }

    /// The behavior attached to this very error by a domain kind, if any.
    pub fn behavior(&self) -> Option<&(dyn Behavior + Send + Sync + 'static)> {
        self.0.behavior.as_deref()
    }

    /// Depth-first walk over this error and everything it wraps.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Whether `target` is this error's declaration or is found anywhere in its chain.
    pub fn is(&self, target: &dyn Declared) -> bool {
        chain::matches(self, target)
    }

    /// First error of type `T` in the chain.
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        chain::find(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.0.location {
            write!(f, "[{location}] ")?;
        }

        write_template(f, self.0.head.template(), &self.0.args)?;

        if let Some(tail) = &self.0.tail {
            write!(f, ": {tail}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("location", &self.0.location)
            .field("template", &self.0.head.template())
            .field("args", &self.0.args)
            .field("tail", &self.0.tail)
            .finish_non_exhaustive()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.tail()
    }
}
