use faults::*;
use static_assertions::assert_impl_all;
use std::io;

assert_impl_all!(Error: Send, Sync, std::error::Error);
assert_impl_all!(Context: Send, Sync, Declared);
assert_impl_all!(Safe5<str, u8, u16, u32, u64>: Send, Sync, Declared);
assert_impl_all!(ErrNotFound: Send, Sync, Declared);

fn just_error() -> io::Error {
    io::Error::other("just error")
}

#[test]
fn context() {
    static ERR_A: Context = Context::new("a");
    let (err, line) = (ERR_A.with(just_error()), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a: just error", file!()));

    static ERR_B: Context = Context::new("b {}");
    let (err, line) = (ERR_B.with_args(just_error(), &[&"b"]), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] b b: just error", file!()));
}

#[test]
fn context_location() {
    static ERR_A: Context = Context::new("a");
    let (err, line) = (ERR_A.with(just_error()), line!());

    let location = err.location().unwrap();
    assert_eq!(location.file(), file!());
    assert_eq!(location.line(), line);
    assert_eq!(location.to_string(), format!("{} {line}", file!()));
}

#[test]
fn fast() {
    static ERR_A: Fast = Fast::new("a");
    assert_eq!(ERR_A.with(just_error()).to_string(), "a: just error");

    static ERR_B: Fast = Fast::new("b {}");
    let err = ERR_B.with_args(just_error(), &[&"b"]);
    assert_eq!(err.to_string(), "b b: just error");
    assert_eq!(err.location(), None);
    assert_eq!(err.args(), ["b"]);
}

#[test]
fn safe() {
    static ERR_A: Safe1<str> = Safe1::new("a {}");
    let (err, line) = (ERR_A.with(just_error(), "a"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a a: just error", file!()));

    static ERR_B: Safe2<str, str> = Safe2::new("a {} {}");
    let (err, line) = (ERR_B.with(just_error(), "a", "b"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a a b: just error", file!()));

    static ERR_C: Safe3<str, str, str> = Safe3::new("a {} {} {}");
    let (err, line) = (ERR_C.with(just_error(), "a", "b", "c"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a a b c: just error", file!()));

    static ERR_D: Safe4<str, str, str, str> = Safe4::new("a {} {} {} {}");
    let (err, line) = (ERR_D.with(just_error(), "a", "b", "c", "d"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a a b c d: just error", file!()));

    static ERR_E: Safe5<str, str, str, str, str> = Safe5::new("a {} {} {} {} {}");
    let (err, line) = (ERR_E.with(just_error(), "a", "b", "c", "d", "e"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] a a b c d e: just error", file!()));
}

#[test]
fn safe_typed_args() {
    static ERR_ATTEMPT: Safe3<u32, str, f64> = Safe3::new("attempt {} of {} after {}s");
    let key = String::from("user");

    let err = ERR_ATTEMPT.with(just_error(), 3_u32, key.as_str(), 1.5_f64);
    assert!(err.to_string().ends_with("] attempt 3 of user after 1.5s: just error"));
    assert_eq!(err.args(), ["3", "user", "1.5"]);

    let err = ERR_ATTEMPT.with(just_error(), &4_u32, key, 0.5_f64);
    assert_eq!(err.args(), ["4", "user", "0.5"]);
}

#[test]
fn without_cause() {
    static ERR_A: Fast = Fast::new("a {}");
    let err = ERR_A.with_args(Cause::none(), &[&1]);
    assert_eq!(err.to_string(), "a 1");
    assert!(err.tail().is_none());

    static ERR_B: Safe1<str> = Safe1::new("b {}");
    let (err, line) = (ERR_B.with(Cause::none(), "b"), line!());
    assert_eq!(err.to_string(), format!("[{} {line}] b b", file!()));
}

#[test]
fn mismatched_args() {
    static ERR_A: Fast = Fast::new("a {} {}");
    assert_eq!(ERR_A.with_args(just_error(), &[&1]).to_string(), "a 1 {}: just error");
    assert_eq!(
        ERR_A.with_args(just_error(), &[&1, &2, &3]).to_string(),
        "a 1 2: just error"
    );
    assert_eq!(ERR_A.with(just_error()).to_string(), "a {} {}: just error");
}

#[test]
fn nested() {
    static ERR_INNER: Fast = Fast::new("inner");
    static ERR_OUTER: Safe1<u32> = Safe1::new("attempt {}");

    let err = ERR_OUTER.with(ERR_INNER.with(just_error()), 2_u32);
    assert!(err.to_string().ends_with("] attempt 2: inner: just error"));
}

#[test]
fn bare_declarations() {
    static ERR_A: Context = Context::new("a {}");
    static ERR_B: Safe1<str> = Safe1::new("b {}");

    assert_eq!(ERR_A.to_string(), "a {}");
    assert_eq!(ERR_B.to_string(), "b {}");
    assert_eq!(ERR_B.template(), "b {}");
    assert_eq!(format!("{ERR_A:?}"), "Context(\"a {}\")");
}

#[test]
fn declarations_compare_by_identity() {
    static ERR_A: Fast = Fast::new("same");
    static ERR_B: Fast = Fast::new("same");

    assert_eq!(ERR_A, ERR_A);
    assert_ne!(ERR_A, ERR_B);
}

#[test]
fn result_context() {
    static ERR_OPEN: Context = Context::new("unable to open");
    static ERR_FAST: Fast = Fast::new("unable to open");

    let ok: Result<u8, io::Error> = Ok(1);
    assert_eq!(ok.context(&ERR_OPEN).unwrap(), 1);

    let (err, line) = (Err::<(), _>(just_error()).context(&ERR_OPEN), line!());
    let err = err.unwrap_err();
    assert_eq!(err.location().map(|at| at.line()), Some(line));
    assert!(err.is(&ERR_OPEN));

    let err = Err::<(), _>(just_error()).context(&ERR_FAST).unwrap_err();
    assert_eq!(err.to_string(), "unable to open: just error");
}

#[test]
fn option_not_found() {
    static ERR_NO_KEY: ErrNotFound = ErrNotFound::new("key {} is not found");

    assert_eq!(Some(1).ok_or_not_found(&ERR_NO_KEY, "k").unwrap(), 1);

    let err = None::<u8>.ok_or_not_found(&ERR_NO_KEY, "k").unwrap_err();
    assert!(err.to_string().ends_with("] key k is not found"));
    assert!(is_not_found(&err, &["k"]));
}
