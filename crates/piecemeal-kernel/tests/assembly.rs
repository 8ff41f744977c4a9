//! End-to-end assembly scenarios.
//!
//! These drive the public surface the way a consuming crate would: an
//! aggregate of two fallible widgets and one infallible pair, assembled
//! commit-or-nothing, with failures dispatched over the closed error set.

use piecemeal_kernel::toy::{IntNegativeError, Pair, StringEmptyError, Widget, WidgetError};
use piecemeal_kernel::{
    Construct, Factory, assemble, assemble_optional, assemble_value, assemble_with, from_fn,
    overload, thunk,
};
use std::cell::Cell;

/// The compound under test: two validated widgets plus a pair.
#[derive(Debug)]
struct Aggregate {
    t: Widget,
    u: Widget,
    v: Pair,
}

impl Aggregate {
    fn new(t: Widget, u: Widget, v: Pair) -> Self {
        Self { t, u, v }
    }
}

#[test]
fn failing_first_widget_aborts_the_whole_build() {
    let success = Cell::new(false);
    let empty_seen = Cell::new(false);
    let negative_seen = Cell::new(false);

    assemble_with::<WidgetError, _, _, _, _, _>(
        Aggregate::new,
        (
            Widget::factory("abc".to_string(), -42),
            Widget::factory("def".to_string(), 123),
            Pair::factory(5, 6),
        ),
        |_compound| success.set(true),
        |error| {
            error.dispatch(overload!(
                |_e: IntNegativeError| negative_seen.set(true),
                |_e: StringEmptyError| empty_seen.set(true),
            ))
        },
    );

    assert!(!success.get());
    assert!(!empty_seen.get());
    assert!(negative_seen.get());
}

#[test]
fn failing_second_widget_reports_its_own_error() {
    let success = Cell::new(false);
    let empty_seen = Cell::new(false);
    let negative_seen = Cell::new(false);

    assemble_with::<WidgetError, _, _, _, _, _>(
        Aggregate::new,
        (
            Widget::factory("abc".to_string(), 42),
            Widget::factory(String::new(), 123),
            Pair::factory(5, 6),
        ),
        |_compound| success.set(true),
        |error| {
            error.dispatch(overload!(
                |_e: StringEmptyError| empty_seen.set(true),
                |_e: IntNegativeError| negative_seen.set(true),
            ))
        },
    );

    assert!(!success.get());
    assert!(empty_seen.get());
    assert!(!negative_seen.get());
}

#[test]
fn successful_assembly_holds_every_field_in_declared_order() {
    let aggregate = assemble::<WidgetError, _, _>(
        Aggregate::new,
        (
            Widget::factory("abc".to_string(), 42),
            Widget::factory("def".to_string(), 123),
            Pair::factory(5, 6),
        ),
    )
    .expect("all parts are valid")
    .materialize();

    assert_eq!((aggregate.t.text(), aggregate.t.count()), ("abc", 42));
    assert_eq!((aggregate.u.text(), aggregate.u.count()), ("def", 123));
    assert_eq!(aggregate.v, Pair { a: 5, b: 6 });
}

#[test]
fn no_real_constructor_runs_when_any_part_fails() {
    let constructed = Cell::new(0u32);
    let validated = Cell::new(0u32);

    let result = assemble_value::<WidgetError, _, _, _>(
        |a: i32, b: i32, c: i32| {
            constructed.set(constructed.get() + 1);
            a + b + c
        },
        (
            from_fn(|| {
                validated.set(validated.get() + 1);
                let n = 1;
                if n < 0 {
                    return Err(WidgetError::from(IntNegativeError(n)));
                }
                Ok(thunk(
                    |n: i32| {
                        constructed.set(constructed.get() + 1);
                        n
                    },
                    (n,),
                ))
            }),
            from_fn(|| {
                validated.set(validated.get() + 1);
                let text = String::new();
                if text.is_empty() {
                    return Err(WidgetError::from(StringEmptyError));
                }
                Ok(thunk(
                    |n: i32| {
                        constructed.set(constructed.get() + 1);
                        n
                    },
                    (2,),
                ))
            }),
            from_fn(|| -> Result<_, WidgetError> {
                validated.set(validated.get() + 1);
                Ok(thunk(
                    |n: i32| {
                        constructed.set(constructed.get() + 1);
                        n
                    },
                    (3,),
                ))
            }),
        ),
    );

    assert_eq!(result, Err(WidgetError::StringEmpty(StringEmptyError)));
    assert_eq!(validated.get(), 2, "the third factory must never run");
    assert_eq!(constructed.get(), 0, "no constructor may run on failure");
}

#[test]
fn commit_is_explicit_and_total() {
    let constructed = Cell::new(0u32);

    let assembly = assemble::<WidgetError, _, _>(
        |a: i32, b: i32| {
            constructed.set(constructed.get() + 1);
            (a, b)
        },
        (
            from_fn(|| -> Result<_, WidgetError> {
                Ok(thunk(
                    |n: i32| {
                        constructed.set(constructed.get() + 1);
                        n
                    },
                    (1,),
                ))
            }),
            from_fn(|| -> Result<_, WidgetError> {
                Ok(thunk(
                    |n: i32| {
                        constructed.set(constructed.get() + 1);
                        n
                    },
                    (2,),
                ))
            }),
        ),
    )
    .expect("both parts are valid");

    // Validated but uncommitted: nothing has been built yet.
    assert_eq!(constructed.get(), 0);

    let value = assembly.materialize();
    assert_eq!(value, (1, 2));
    assert_eq!(constructed.get(), 3, "two parts plus the final constructor");
}

#[test]
fn optional_adapter_reports_the_first_failure_only() {
    let reported = Cell::new(0u32);

    let result = assemble_optional::<WidgetError, _, _, _, _>(
        Aggregate::new,
        (
            Widget::factory(String::new(), 7),
            Widget::factory("ok".to_string(), -7),
            Pair::factory(0, 0),
        ),
        |error| {
            reported.set(reported.get() + 1);
            assert_eq!(error, WidgetError::StringEmpty(StringEmptyError));
        },
    );

    assert!(result.is_none());
    assert_eq!(reported.get(), 1);
}

#[test]
fn zero_part_assembly_calls_the_final_constructor_bare() {
    let value = assemble_value::<WidgetError, _, _, _>(|| 99, ());
    assert_eq!(value, Ok(99));
}

#[test]
fn dispatch_outcome_can_rebuild_a_value() {
    // Dispatch arms agree on the outcome type, so the caller can recover.
    let fallback = assemble_value::<WidgetError, _, _, _>(
        |w: Widget| w,
        (Widget::factory("good".to_string(), -1),),
    )
    .unwrap_or_else(|error| {
        error.dispatch(overload!(
            |_e: StringEmptyError| Widget::factory("empty".to_string(), 0),
            |e: IntNegativeError| Widget::factory(format!("was {}", e.0), 0),
        ))
        .validate()
        .expect("fallback arguments are valid")
        .materialize()
    });

    assert_eq!(fallback.text(), "was -1");
    assert_eq!(fallback.count(), 0);
}
