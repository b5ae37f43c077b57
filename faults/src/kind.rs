use crate::{
    behavior::Behavior,
    context::declared,
    error::{Cause, Error, Location},
};
use alloc::{boxed::Box, string::String, string::ToString, vec::Vec};
use core::{fmt, marker::PhantomData};

/// Context of a domain error: a template together with a payload that gives the error its
/// [`Behavior`].
///
/// The payload is rendered into the single placeholder of the template. Only errors produced by
/// [`Kind::with`] expose the behavior, a bare declaration does not.
pub struct Kind<B: ?Sized> {
    template: &'static str,
    _payload: PhantomData<fn(&B)>,
}

impl<B: ?Sized> Kind<B> {
    pub const fn new(template: &'static str) -> Self {
        Self {
            template,
            _payload: PhantomData,
        }
    }
}

impl<B> Kind<B>
where
    B: Behavior + fmt::Display + Send + Sync + 'static,
{
    /// Wraps `cause` into this context, attaching `payload` as the behavior of the new error.
    #[track_caller]
    pub fn with(&'static self, cause: impl Into<Cause>, payload: impl Into<B>) -> Error {
        let payload = payload.into();

        Error::compose(
            Some(Location::caller()),
            self,
            Vec::from([payload.to_string()]),
            cause.into(),
            Some(Box::new(payload)),
        )
    }
}

declared!(Kind<B>);

/// Key of a missing entity, the payload of [`ErrNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotFoundKey(String);

impl NotFoundKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotFoundKey {
    fn from(key: &str) -> Self {
        Self(key.into())
    }
}

impl From<String> for NotFoundKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for NotFoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Behavior for NotFoundKey {
    fn not_found(&self) -> Option<&str> {
        Some(&self.0)
    }
}

/// Context of a not found error. The template takes the key as its only argument.
///
/// ```
/// use faults::{is_not_found, Cause, ErrNotFound};
///
/// static ERR_NO_USER: ErrNotFound = ErrNotFound::new("user {} is not found");
///
/// assert!(!is_not_found(&ERR_NO_USER, &[]));
///
/// let err = ERR_NO_USER.with(Cause::none(), "alice");
/// assert!(is_not_found(&err, &[]));
/// assert!(is_not_found(&err, &["alice"]));
/// assert!(!is_not_found(&err, &["bob"]));
/// ```
pub type ErrNotFound = Kind<NotFoundKey>;
