//! Property-based invariant tests for controls and forms.
//!
//! These tests verify invariants that must hold for any sequence of
//! interactions:
//!
//! 1. A new control reports no errors, whatever its initial value.
//! 2. `validate` yields exactly the failing validators' messages, in order.
//! 3. `touched` and `dirty` never fall back to `false` without `reset`.
//! 4. `reset` restores the initial value and clears the flags; twice equals once.
//! 5. Once touched or dirty, `errors` always describes the current value.
//! 6. Form validity and errors are the conjunction and concatenation of the
//!    controls' own.
//! 7. Unknown field names never change a form.

use formkit::validation::{Validator, ValidatorBuilder};
use formkit::{FormBuilder, FormControl};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Set(String),
    Focus(bool),
    Validate,
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z0-9 @._+-]{0,16}",
        "\\PC{0,12}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        value_strategy().prop_map(Op::Set),
        any::<bool>().prop_map(Op::Focus),
        Just(Op::Validate),
    ]
}

fn validators() -> Vec<Box<dyn Validator>> {
    ValidatorBuilder::new()
        .required()
        .min_length(4)
        .max_length(10)
        .contains_digit(1)
        .no_white_spaces()
        .build()
}

fn apply(control: &FormControl, op: &Op) {
    match op {
        Op::Set(v) => control.set(v.clone()),
        Op::Focus(f) => control.on_focus_change(*f),
        Op::Validate => {
            control.validate();
        }
    }
}

fn expected_errors(control: &FormControl) -> Vec<String> {
    let value = control.value();
    control
        .validators()
        .iter()
        .filter(|v| !v.is_valid(&value))
        .map(|v| v.message().to_string())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. New controls show no errors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn new_control_is_valid(initial in value_strategy()) {
        let control = FormControl::new(initial, validators());
        prop_assert!(control.is_valid());
        prop_assert!(control.errors().is_empty());
        prop_assert!(control.is_pristine());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. validate recomputes from the current value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn validate_matches_failing_validators(
        initial in value_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let control = FormControl::new(initial, validators());
        for op in &ops {
            apply(&control, op);
        }
        let valid = control.validate();
        let expected = expected_errors(&control);
        prop_assert_eq!(valid, expected.is_empty());
        prop_assert_eq!(control.errors(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonic touched / dirty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn touched_and_dirty_are_monotonic(ops in prop::collection::vec(op_strategy(), 0..24)) {
        let control = FormControl::new("", validators());
        let (mut was_touched, mut was_dirty) = (false, false);
        for op in &ops {
            apply(&control, op);
            prop_assert!(!was_touched || control.touched(), "touched regressed after {:?}", op);
            prop_assert!(!was_dirty || control.dirty(), "dirty regressed after {:?}", op);
            was_touched = control.touched();
            was_dirty = control.dirty();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. reset round trip and idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_restores_and_is_idempotent(
        initial in value_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let control = FormControl::new(initial.clone(), validators());
        for op in &ops {
            apply(&control, op);
        }
        control.reset();
        let once = control.state();
        control.reset();
        prop_assert_eq!(control.state(), once);
        prop_assert_eq!(control.value(), initial);
        prop_assert!(!control.touched());
        prop_assert!(!control.dirty());
        prop_assert!(control.errors().is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Errors never lag once interacted
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interacted_errors_track_value(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let control = FormControl::new("", validators());
        for op in &ops {
            apply(&control, op);
            if !control.is_pristine() {
                prop_assert_eq!(control.errors(), expected_errors(&control));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Form aggregation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn form_aggregates_controls(
        edits in prop::collection::vec((0usize..3, value_strategy()), 0..12),
        submit in any::<bool>(),
    ) {
        let names = ["user", "code", "note"];
        let form = FormBuilder::new([
            (names[0], FormControl::new("", ValidatorBuilder::new().required().alpha().build())),
            (names[1], FormControl::new("", validators())),
            (names[2], FormControl::new("", ValidatorBuilder::new().max_length(5).build())),
        ]);
        for (field, value) in &edits {
            form.set(names[*field], value.clone());
        }
        if submit {
            form.validate();
        }

        let all_valid = form.controls().all(|(_, c)| c.is_valid());
        prop_assert_eq!(form.is_valid(), all_valid);
        prop_assert_eq!(form.is_invalid(), !all_valid);

        let concatenated: Vec<String> = form.controls().flat_map(|(_, c)| c.errors()).collect();
        prop_assert_eq!(form.errors(), concatenated);

        let control_errors = form.control_errors();
        for (name, control) in form.controls() {
            prop_assert_eq!(control_errors.contains(name), !control.is_valid());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Unknown names are inert
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_names_are_inert(name in "[a-z]{1,8}", value in value_strategy(), focus in any::<bool>()) {
        prop_assume!(name != "known");
        let form = FormBuilder::new([("known", FormControl::new("", validators()))]);
        form.set(&name, value);
        form.on_focus_change(&name, focus);
        let known = form.get("known").unwrap();
        prop_assert!(known.is_pristine());
        prop_assert_eq!(known.revision(), 0);
        prop_assert_eq!(form.get_value_or_empty(&name), "");
    }
}
