use faults::*;
use std::time::Duration;

#[derive(Debug, Behavior)]
pub struct Throttled {
    #[behavior(timeout)]
    retry_after: Duration,
    #[behavior(status_code)]
    code: String,
}

#[derive(Debug, Behavior)]
#[behavior(conflict, status_code = "409")]
pub struct VersionConflict(u64);

#[derive(Debug, Behavior)]
#[behavior(gone)]
pub struct Deleted;

#[derive(Debug, Behavior)]
pub struct Lookup<'k> {
    #[behavior(not_found)]
    key: &'k str,
    #[behavior(pre_condition_failed)]
    stale: bool,
}

#[derive(Debug, Behavior)]
pub struct Plain;

#[test]
fn field_behaviors() {
    let throttled = Throttled {
        retry_after: Duration::from_secs(3),
        code: "429".into(),
    };

    assert_eq!(throttled.timeout(), Some(Duration::from_secs(3)));
    assert_eq!(throttled.status_code(), Some("429"));
    assert_eq!(throttled.not_found(), None);
    assert_eq!(throttled.conflict(), None);
}

#[test]
fn declared_behaviors() {
    let conflict = VersionConflict(7);
    assert_eq!(conflict.conflict(), Some(true));
    assert_eq!(conflict.status_code(), Some("409"));
    assert_eq!(conflict.gone(), None);

    assert_eq!(Deleted.gone(), Some(true));
    assert_eq!(Deleted.timeout(), None);
}

#[test]
fn borrowed_fields() {
    let lookup = Lookup {
        key: "user/alice",
        stale: false,
    };

    assert_eq!(lookup.not_found(), Some("user/alice"));
    assert_eq!(lookup.pre_condition_failed(), Some(false));
}

#[test]
fn no_behaviors() {
    assert_eq!(Plain.timeout(), None);
    assert_eq!(Plain.not_found(), None);
    assert_eq!(Plain.status_code(), None);
    assert_eq!(Plain.pre_condition_failed(), None);
    assert_eq!(Plain.conflict(), None);
    assert_eq!(Plain.gone(), None);
}
