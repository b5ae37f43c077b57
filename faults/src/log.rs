use crate::Error;

/// Extension trait for logging errors with their location through `tracing`.
pub trait LogExt {
    /// Log the error, if any, and return the result unchanged.
    fn log_error(self, context: &str) -> Self;

    /// Like [`log_error`](LogExt::log_error), for errors that are recovered from.
    fn log_if_error(self, context: &str) -> Self;
}

impl<T> LogExt for Result<T, Error> {
    fn log_error(self, context: &str) -> Self {
        if let Err(ref err) = self {
            match err.location() {
                Some(location) => tracing::error!(error = %err, %location, "{}", context),
                None => tracing::error!(error = %err, "{}", context),
            }
        }
        self
    }

    fn log_if_error(self, context: &str) -> Self {
        if let Err(ref err) = self {
            tracing::warn!(error = %err, "{}", context);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::LogExt;
    use crate::{Cause, Fast};

    static ERR_LOGGED: Fast = Fast::new("logged");

    #[test]
    fn results_pass_through() {
        let ok: Result<u8, crate::Error> = Ok(1);
        assert_eq!(ok.log_error("noop").ok(), Some(1));

        let err: Result<u8, crate::Error> = Err(ERR_LOGGED.with(Cause::none()));
        let err = err.log_if_error("recovered").unwrap_err();
        assert_eq!(alloc::string::ToString::to_string(&err), "logged");
    }
}
