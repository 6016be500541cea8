use crate::fixtures::{normalized, MyError, NotFound};
use fail_chain::{
    get_inner, get_location, get_stack_trace, new, new_err_with_reason, new_with_inner,
    new_with_inner_skip, new_with_skip, newf, news, stack_trace, stack_trace_skip, Error,
    PlainError, ReasonError,
};
use std::hint::black_box;

const THIS_FILE: &str = "tests/constructors/mod.rs";

fn assert_reported_at(location: &str, line: u32, function: &str) {
    let location = normalized(location);
    assert!(location.contains(&format!("{THIS_FILE}:{line} (")), "unexpected location: {location}");
    // An optimized test body may be reported as its libtest closure.
    assert!(location.contains(function), "unexpected function: {location}");
}

#[inline(never)]
fn fail_in_helper() -> Error {
    black_box(new_with_skip(Error::new(NotFound), 1))
}

#[inline(never)]
fn fail_with_inner_in_helper(inner: Error) -> Error {
    black_box(new_with_inner_skip(Error::new(NotFound), inner, 1))
}

#[inline(never)]
fn trace_from_helper() -> String {
    black_box(stack_trace_skip(1))
}

#[test]
fn new_passes_message_through() {
    let original = Error::msg("disk unavailable");
    let err = new(original.clone());

    assert_eq!(err.to_string(), original.to_string());
}

#[test]
fn new_reports_caller_location() {
    let line = line!() + 1;
    let err = new(Error::new(NotFound));

    assert_reported_at(&get_location(&err), line, "new_reports_caller_location");
}

#[test]
fn stack_trace_starts_at_location() {
    let err = news("boom");

    let location = get_location(&err);
    let trace = get_stack_trace(&err);
    assert_eq!(trace.lines().next(), Some(location.as_str()));
}

#[test]
fn stack_trace_contains_no_runtime_frames() {
    let err = news("boom");

    for line in get_stack_trace(&err).lines() {
        let function = line.rsplit_once(" (").map(|(_, f)| f).unwrap_or_default();
        assert!(!function.starts_with("std::"), "runtime frame in trace: {line}");
        assert!(!function.starts_with("core::"), "runtime frame in trace: {line}");
        assert!(!function.starts_with("backtrace::"), "runtime frame in trace: {line}");
        assert!(!function.contains("fail_chain::"), "library frame in trace: {line}");
    }
}

#[test]
fn news_reports_caller_location() {
    let line = line!() + 1;
    let err = news("text error");

    assert_eq!(err.to_string(), "text error");
    assert!(err.is::<PlainError>());
    assert_reported_at(&get_location(&err), line, "news_reports_caller_location");
}

#[test]
fn newf_formats_and_reports_caller_location() {
    let line = line!() + 1;
    let err = newf!("Error {} occurred.", 1);

    assert_eq!(err.to_string(), "Error 1 occurred.");
    assert_reported_at(&get_location(&err), line, "newf_formats_and_reports_caller_location");
}

#[test]
fn new_with_skip_reports_helper_caller() {
    let line = line!() + 1;
    let err = fail_in_helper();

    assert_reported_at(&get_location(&err), line, "new_with_skip_reports_helper_caller");
    assert!(!get_stack_trace(&err).contains("fail_in_helper"));
}

#[test]
fn new_with_inner_skip_reports_helper_caller() {
    let inner = news("cause");
    let line = line!() + 1;
    let err = fail_with_inner_in_helper(inner.clone());

    assert_reported_at(&get_location(&err), line, "new_with_inner_skip_reports_helper_caller");
    assert!(Error::ptr_eq(get_inner(&err).unwrap(), &inner));
}

#[test]
fn new_with_inner_records_cause() {
    let inner = news("inner");
    let err = new_with_inner(Error::new(NotFound), inner.clone());

    assert_eq!(err.to_string(), "not found");
    assert!(Error::ptr_eq(get_inner(&err).unwrap(), &inner));
}

#[test]
fn new_with_inner_prefers_original_cause() {
    let own_cause = news("own cause");
    let override_cause = news("override");
    let err = new_with_inner(MyError::new("outer", own_cause.clone()), override_cause);

    assert!(Error::ptr_eq(get_inner(&err).unwrap(), &own_cause));
}

#[test]
fn new_err_with_reason_formats_message_and_reason() {
    let inner = Error::msg("inner error");
    let line = line!() + 1;
    let err = new_err_with_reason("some error", inner.clone());

    assert_eq!(err.to_string(), "some error: inner error");
    assert!(err.is::<ReasonError>());
    assert!(Error::ptr_eq(get_inner(&err).unwrap(), &inner));
    assert_reported_at(&get_location(&err), line, "new_err_with_reason_formats_message_and_reason");
}

#[test]
fn stack_trace_reports_caller_first() {
    let line = line!() + 1;
    let trace = stack_trace();

    let first = trace.lines().next().unwrap_or_default();
    assert_reported_at(first, line, "stack_trace_reports_caller_first");
}

#[test]
fn stack_trace_skip_hides_helper() {
    let line = line!() + 1;
    let trace = trace_from_helper();

    let first = trace.lines().next().unwrap_or_default();
    assert_reported_at(first, line, "stack_trace_skip_hides_helper");
    assert!(!trace.contains("trace_from_helper"));
}

#[test]
fn location_is_fixed_at_construction() {
    let line = line!() + 1;
    let inner = news("first");
    let outer = new(inner.clone());

    assert_reported_at(&get_location(&inner), line, "location_is_fixed_at_construction");
    assert_reported_at(&get_location(&outer), line + 1, "location_is_fixed_at_construction");
}

// Builders returning the constructor's result directly: the constructor call
// is the last thing each of them does.
const BUILD_NEWS_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_news() -> Error {
    black_box(news("a"))
}

const BUILD_NEW_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_new() -> Error {
    black_box(new(Error::new(NotFound)))
}

const BUILD_NEWF_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_newf() -> Error {
    black_box(newf!("attempt {}", black_box(1)))
}

const BUILD_NEW_WITH_INNER_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_new_with_inner() -> Error {
    black_box(new_with_inner(Error::new(NotFound), Error::msg("cause")))
}

const BUILD_WITH_REASON_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_with_reason() -> Error {
    black_box(new_err_with_reason("failed", Error::msg("cause")))
}

const BUILD_STACK_TRACE_LINE: u32 = line!() + 3;
#[inline(never)]
fn build_stack_trace() -> String {
    black_box(stack_trace())
}

#[test]
fn every_constructor_reports_its_direct_caller() {
    let cases = [
        (build_news(), BUILD_NEWS_LINE, "build_news"),
        (build_new(), BUILD_NEW_LINE, "build_new"),
        (build_newf(), BUILD_NEWF_LINE, "build_newf"),
        (build_new_with_inner(), BUILD_NEW_WITH_INNER_LINE, "build_new_with_inner"),
        (build_with_reason(), BUILD_WITH_REASON_LINE, "build_with_reason"),
    ];

    for (err, line, function) in &cases {
        let location = get_location(err);
        assert_reported_at(&location, *line, function);
        assert!(normalized(&location).ends_with(&format!("{function})")), "{location}");
        assert_eq!(get_stack_trace(err).lines().next(), Some(location.as_str()));
    }
}

#[test]
fn stack_trace_reports_its_direct_caller() {
    let trace = build_stack_trace();

    let first = trace.lines().next().unwrap_or_default();
    assert_reported_at(first, BUILD_STACK_TRACE_LINE, "build_stack_trace");
    assert!(first.ends_with("build_stack_trace)"), "{first}");
}
