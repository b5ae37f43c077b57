#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

extern crate alloc;

mod behavior;
mod chain;
mod context;
mod error;
mod kind;
mod render;

#[cfg(feature = "tracing")]
mod log;

pub use behavior::{
    is_conflict, is_gone, is_not_found, is_pre_condition_failed, is_status_code, is_timeout,
    issue, Behavior, Issue,
};
pub use chain::{find, matches, Chain};
pub use context::{Annotate, Context, Declared, Fast, Safe1, Safe2, Safe3, Safe4, Safe5};
pub use error::{Cause, Error, Location};
pub use faults_derive::Behavior;
pub use kind::{ErrNotFound, Kind, NotFoundKey};

#[cfg(feature = "tracing")]
pub use log::LogExt;

/// Prelude. Reexports the traits needed to declare contexts and check behaviors.
pub mod prelude {
    pub use crate::{Annotate, Behavior, Declared, OptionExt, ResultExt};
}

/// Extension trait for [`Result`] which wraps its error into a context.
pub trait ResultExt<T> {
    /// Wrap the error of this result into `ctx`.
    ///
    /// ```
    /// use faults::{Context, ResultExt};
    ///
    /// static ERR_OPEN: Context = Context::new("unable to open");
    ///
    /// let err = std::fs::File::open("some-file-which-does-not-exist")
    ///     .context(&ERR_OPEN)
    ///     .unwrap_err();
    /// assert!(err.is(&ERR_OPEN));
    /// assert_eq!(err.location().map(|at| at.line()), Some(line!() - 3));
    /// ```
    fn context<C>(self, ctx: &'static C) -> Result<T, Error>
    where
        C: Annotate;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn context<C>(self, ctx: &'static C) -> Result<T, Error>
    where
        C: Annotate,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(ctx.annotate(err.into())),
        }
    }
}

/// Extension trait for [`Option`] which turns `None` into a not found error.
pub trait OptionExt<T> {
    /// `Some(value)` becomes `Ok(value)`, `None` becomes an error of `kind` about `key`, without
    /// a cause.
    fn ok_or_not_found(
        self,
        kind: &'static ErrNotFound,
        key: impl Into<NotFoundKey>,
    ) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    #[inline]
    fn ok_or_not_found(
        self,
        kind: &'static ErrNotFound,
        key: impl Into<NotFoundKey>,
    ) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(kind.with(Cause::none(), key)),
        }
    }
}
