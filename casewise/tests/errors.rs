//! Failure behavior of dispatch.

use casewise::{
    BoxError, CasewiseError, MatchError, PfBuilder,
    testing::{CallLog, FailingAction},
};
use std::panic::{AssertUnwindSafe, catch_unwind};

mod common;
use common::Input;

#[test]
fn unmatched_is_deterministic_and_runs_nothing() {
    let log = CallLog::new();
    let pf = PfBuilder::<Input>::named("strict")
        .match_type::<String>(log.entry("string"))
        .build();

    for _ in 0..3 {
        let err = pf.invoke(&1_i32).unwrap_err();
        match err {
            MatchError::Unmatched { dispatcher, .. } => {
                assert_eq!(dispatcher.as_deref(), Some("strict"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    assert!(log.is_empty());
}

#[test]
fn action_errors_propagate_unchanged() {
    let pf = PfBuilder::<Input>::new()
        .match_type::<String>(FailingAction::new("cannot store"))
        .build();

    let err = pf.invoke(&String::from("x")).unwrap_err();
    assert_eq!(err.case_index(), Some(0));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("cannot store"));
}

#[test]
fn lift_reports_action_errors() {
    let pf = PfBuilder::<Input>::new()
        .match_type::<u8>(|_: &u8| -> Result<(), BoxError> { Err("bad byte".into()) })
        .build();
    assert!(pf.lift(&1_u8).is_err());
    assert!(matches!(pf.lift(&1_u16), Ok(false)));
}

#[test]
fn errors_convert_to_top_level() {
    fn run() -> Result<(), CasewiseError> {
        let pf = PfBuilder::<Input>::new()
            .match_type::<String>(|_: &String| {})
            .build();
        pf.invoke(&0_i32)?;
        Ok(())
    }
    assert!(matches!(run(), Err(CasewiseError::Match(MatchError::Unmatched { .. }))));
}

#[test]
fn panicking_predicate_propagates() {
    let pf = PfBuilder::<Input>::new()
        .match_type_if::<String>(|_: &String| -> bool { panic!("faulty guard") }, |_: &String| {})
        .build();

    assert!(!pf.is_defined_at(&1_i32));
    let outcome = catch_unwind(AssertUnwindSafe(|| pf.is_defined_at(&String::new())));
    assert!(outcome.is_err());
}

#[test]
#[should_panic(expected = "faulty action")]
fn panicking_action_propagates() {
    let pf = PfBuilder::<Input>::new()
        .match_any(|_: &Input| -> () { panic!("faulty action") })
        .build();
    let _ = pf.invoke(&());
}

#[test]
fn foreign_errors_convert_to_custom() {
    fn dispatch_port(raw: &str) -> Result<(), CasewiseError> {
        let pf = PfBuilder::<Input>::new()
            .match_type::<u16>(|_: &u16| {})
            .build();
        let port: u16 = raw.parse().map_err(BoxError::from)?;
        pf.invoke(&port)?;
        Ok(())
    }

    assert!(dispatch_port("8080").is_ok());
    let err = dispatch_port("http").unwrap_err();
    assert!(matches!(err, CasewiseError::Custom(_)));
    assert_eq!(err.to_string(), "invalid digit found in string");
}
