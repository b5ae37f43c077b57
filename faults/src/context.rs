use crate::error::{Cause, Error, Location};
use alloc::{string::ToString, vec::Vec};
use core::{borrow::Borrow, error::Error as StdError, fmt, marker::PhantomData};

/// A declared, immutable error template.
///
/// Declarations live in `static`s and are identified by their address, so that identically
/// worded declarations stay distinct. A bare declaration is an error itself, rendering its
/// template verbatim.
pub trait Declared: StdError + Send + Sync + 'static {
    /// The template, with its placeholders.
    fn template(&self) -> &'static str;

    /// This declaration as a plain error.
    fn as_error(&self) -> &(dyn StdError + 'static);
}

macro_rules! declared {
    ($name:ident $(<$($ty:ident),+>)?) => {
        impl$(<$($ty: ?Sized + 'static),+>)? $crate::context::Declared for $name$(<$($ty),+>)? {
            fn template(&self) -> &'static str {
                self.template
            }

            fn as_error(&self) -> &(dyn ::core::error::Error + 'static) {
                self
            }
        }

        impl$(<$($ty: ?Sized),+>)? ::core::fmt::Display for $name$(<$($ty),+>)? {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.template)
            }
        }

        impl$(<$($ty: ?Sized),+>)? ::core::fmt::Debug for $name$(<$($ty),+>)? {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.template).finish()
            }
        }

        impl$(<$($ty: ?Sized),+>)? ::core::error::Error for $name$(<$($ty),+>)? {}

        impl$(<$($ty: ?Sized),+>)? ::core::cmp::PartialEq for $name$(<$($ty),+>)? {
            fn eq(&self, other: &Self) -> bool {
                ::core::ptr::eq(self, other)
            }
        }

        impl$(<$($ty: ?Sized),+>)? ::core::cmp::Eq for $name$(<$($ty),+>)? {}
    };
}

pub(crate) use declared;

/// Context of an error which records where it was combined with its cause. Produces errors like
/// `[file line] text defined by context: cause`.
///
/// ```
/// use faults::Context;
///
/// static ERR_DO_SOMETHING: Context = Context::new("unable to do something");
///
/// fn do_something() -> Result<(), faults::Error> {
///     std::fs::File::open("some-file-which-does-not-exist")
///         .map_err(|err| ERR_DO_SOMETHING.with(err))?;
///     Ok(())
/// }
///
/// let err = do_something().unwrap_err();
/// assert!(err.to_string().contains("] unable to do something: "));
/// ```
pub struct Context {
    template: &'static str,
}

impl Context {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Wraps `cause` into this context.
    #[track_caller]
    pub fn with(&'static self, cause: impl Into<Cause>) -> Error {
        Error::compose(
            Some(Location::caller()),
            self,
            Vec::new(),
            cause.into(),
            None,
        )
    }

    /// Wraps `cause` into this context, expanding the template with `args`.
    ///
    /// The number of arguments is not checked: placeholders without an argument are rendered
    /// as-is and surplus arguments are dropped. Use [`Safe1`] and friends for checked arguments.
    #[track_caller]
    pub fn with_args(&'static self, cause: impl Into<Cause>, args: &[&dyn fmt::Display]) -> Error {
        Error::compose(
            Some(Location::caller()),
            self,
            args.iter().map(|arg| arg.to_string()).collect(),
            cause.into(),
            None,
        )
    }
}

declared!(Context);

/// Context of an error which does not look up its caller. Cheaper than [`Context`], at the cost
/// of the location in the rendered error.
pub struct Fast {
    template: &'static str,
}

impl Fast {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Wraps `cause` into this context.
    pub fn with(&'static self, cause: impl Into<Cause>) -> Error {
        Error::compose(None, self, Vec::new(), cause.into(), None)
    }

    /// Wraps `cause` into this context, expanding the template with `args`.
    pub fn with_args(&'static self, cause: impl Into<Cause>, args: &[&dyn fmt::Display]) -> Error {
        Error::compose(
            None,
            self,
            args.iter().map(|arg| arg.to_string()).collect(),
            cause.into(),
            None,
        )
    }
}

declared!(Fast);

/// Contexts which can wrap a cause without further arguments.
pub trait Annotate: Declared {
    fn annotate(&'static self, cause: Cause) -> Error;
}

impl Annotate for Context {
    #[track_caller]
    fn annotate(&'static self, cause: Cause) -> Error {
        self.with(cause)
    }
}

impl Annotate for Fast {
    fn annotate(&'static self, cause: Cause) -> Error {
        self.with(cause)
    }
}

macro_rules! safe {
    ($(#[$meta:meta])* $name:ident<$($ty:ident => $arg:ident),+>) => {
        $(#[$meta])*
        pub struct $name<$($ty: ?Sized),+> {
            template: &'static str,
            _args: PhantomData<fn($(&$ty),+)>,
        }

        impl<$($ty: ?Sized),+> $name<$($ty),+> {
            pub const fn new(template: &'static str) -> Self {
                Self {
                    template,
                    _args: PhantomData,
                }
            }
        }

        impl<$($ty),+> $name<$($ty),+>
        where
            $($ty: ?Sized + fmt::Display + 'static),+
        {
            /// Wraps `cause` into this context, expanding the template with the arguments.
            #[track_caller]
            pub fn with(&'static self, cause: impl Into<Cause>, $($arg: impl Borrow<$ty>),+) -> Error {
                Error::compose(
                    Some(Location::caller()),
                    self,
                    Vec::from([$(Borrow::<$ty>::borrow(&$arg).to_string()),+]),
                    cause.into(),
                    None,
                )
            }
        }

        declared!($name<$($ty),+>);
    };
}

safe! {
    /// Context of an error with 1 typed argument.
    ///
    /// ```
    /// use faults::Safe1;
    ///
    /// static ERR_ATTEMPT: Safe1<u32> = Safe1::new("attempt {} is failed");
    ///
    /// let err = ERR_ATTEMPT.with(std::io::Error::other("timed out"), 10_u32);
    /// assert!(err.to_string().ends_with("attempt 10 is failed: timed out"));
    /// ```
    Safe1<A => a>
}

safe! {
    /// Context of an error with 2 typed arguments.
    Safe2<A => a, B => b>
}

safe! {
    /// Context of an error with 3 typed arguments.
    Safe3<A => a, B => b, C => c>
}

safe! {
    /// Context of an error with 4 typed arguments.
    Safe4<A => a, B => b, C => c, D => d>
}

safe! {
    /// Context of an error with 5 typed arguments.
    Safe5<A => a, B => b, C => c, D => d, E => e>
}
