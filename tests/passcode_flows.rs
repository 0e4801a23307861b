//! End-to-end passcode flows.
//!
//! Drives a mounted passcode the way a user would (focus, keys, paste) and
//! checks the observer calls and the focus cursor.
//!
//! Run with: cargo test --test passcode_flows

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;

use spark_passcode::{
    passcode, CharacterClass, EventOutcome, Fields, KeyboardEvent, Passcode, PasscodeProps,
};

// =============================================================================
// HELPERS
// =============================================================================

type Calls = Rc<RefCell<Vec<(String, Option<usize>)>>>;

fn mount(props: PasscodeProps) -> (Passcode, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let recorder = calls.clone();
    let pc = passcode(PasscodeProps {
        on_update: Some(Rc::new(move |code: &str, index: Option<usize>| {
            recorder.borrow_mut().push((code.to_string(), index));
        })),
        ..props
    })
    .expect("mount passcode");
    (pc, calls)
}

fn call(code: &str, index: usize) -> (String, Option<usize>) {
    (code.to_string(), Some(index))
}

fn values(pc: &Passcode) -> Vec<String> {
    pc.fields().iter().map(|f| f.value()).collect()
}

// =============================================================================
// TYPING
// =============================================================================

#[test]
fn typing_advances_through_every_field() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        ..Default::default()
    });

    pc.focus_field(0);
    assert_eq!(pc.native_focus(), Some(0));
    assert!(calls.borrow().is_empty());

    pc.key_down(&KeyboardEvent::new("5"));
    assert_eq!(pc.field(0).unwrap().value(), "5");
    assert_eq!(pc.native_focus(), Some(1));

    pc.key_down(&KeyboardEvent::new("3"));
    assert_eq!(pc.native_focus(), Some(2));

    pc.key_down(&KeyboardEvent::new("1"));
    assert_eq!(pc.native_focus(), Some(3));

    pc.key_down(&KeyboardEvent::new("0"));
    assert_eq!(pc.field(3).unwrap().value(), "0");

    assert_eq!(
        *calls.borrow(),
        vec![call("5", 0), call("53", 1), call("531", 2), call("5310", 3)]
    );

    // The cursor left the field set; no field claims it.
    assert_eq!(pc.coordinator().focus(), Some(4));
    assert_eq!(pc.coordinator().focused_field(), None);
    assert!(pc.fields().iter().all(|f| !f.interpreter().has_focus()));
}

#[test]
fn typing_into_last_field_does_not_crash_and_stays_put() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(2),
        ..Default::default()
    });

    pc.focus_field(1);
    pc.key_down(&KeyboardEvent::new("9"));
    pc.key_down(&KeyboardEvent::new("8"));

    assert_eq!(values(&pc), vec!["", "9"]);
    assert_eq!(*calls.borrow(), vec![call("9", 1)]);
    assert_eq!(pc.native_focus(), Some(1));
    assert_eq!(pc.coordinator().focus(), Some(2));
}

#[test]
fn typing_without_auto_tab_stays_on_field() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(3),
        auto_tab: Some(false),
        ..Default::default()
    });

    pc.focus_field(0);
    pc.key_down(&KeyboardEvent::new("a"));

    assert_eq!(pc.native_focus(), Some(0));
    assert_eq!(pc.coordinator().focus(), Some(0));
    assert_eq!(*calls.borrow(), vec![call("a", 0)]);
}

#[test]
fn numeric_passcode_ignores_letters() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        character_class: CharacterClass::Digit,
        auto_focus: Some(true),
        ..Default::default()
    });

    assert_eq!(pc.key_down(&KeyboardEvent::new("q")), EventOutcome::Suppress);
    assert_eq!(pc.key_down(&KeyboardEvent::new("4")), EventOutcome::Pass);
    assert_eq!(pc.key_down(&KeyboardEvent::new("z")), EventOutcome::Suppress);
    assert_eq!(pc.key_down(&KeyboardEvent::new("2")), EventOutcome::Pass);

    assert_eq!(*calls.borrow(), vec![call("4", 0), call("42", 1)]);
    assert_eq!(pc.native_focus(), Some(2));
}

// =============================================================================
// DELETION
// =============================================================================

#[test]
fn backspace_walks_back_through_seeded_code() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        default_value: Some("4567".to_string()),
        ..Default::default()
    });
    let backspace = KeyboardEvent::new("Backspace");

    pc.focus_field(3);
    assert!(calls.borrow().is_empty());

    pc.key_down(&backspace);
    assert_eq!(pc.field(3).unwrap().value(), "");
    assert_eq!(calls.borrow().last(), Some(&call("456", 3)));

    pc.key_down(&backspace);
    assert_eq!(pc.native_focus(), Some(2));

    pc.key_down(&backspace);
    assert_eq!(calls.borrow().last(), Some(&call("45", 2)));
    assert_eq!(pc.field(2).unwrap().value(), "");

    pc.key_down(&backspace);
    assert_eq!(pc.native_focus(), Some(1));

    pc.key_down(&backspace);
    assert_eq!(calls.borrow().last(), Some(&call("4", 1)));

    pc.key_down(&backspace);
    assert_eq!(pc.native_focus(), Some(0));

    pc.key_down(&backspace);
    assert_eq!(calls.borrow().last(), Some(&call("", 0)));
    assert_eq!(pc.field(0).unwrap().value(), "");

    assert_eq!(
        *calls.borrow(),
        vec![call("456", 3), call("45", 2), call("4", 1), call("", 0)]
    );

    // Nothing left: further deletes stay on field 0 and stay silent
    pc.key_down(&backspace);
    assert_eq!(pc.native_focus(), Some(0));
    assert_eq!(calls.borrow().len(), 4);
}

#[test]
fn delete_key_on_filled_field_does_not_move() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        default_value: Some("4567".to_string()),
        ..Default::default()
    });

    pc.focus_field(1);
    assert_eq!(pc.key_down(&KeyboardEvent::new("Delete")), EventOutcome::Suppress);
    assert_eq!(values(&pc), vec!["4", "", "6", "7"]);
    assert_eq!(*calls.borrow(), vec![call("467", 1)]);
    assert_eq!(pc.native_focus(), Some(1));
}

#[test]
fn retyping_a_cleared_field() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(3),
        default_value: Some("123".to_string()),
        ..Default::default()
    });

    pc.focus_field(1);
    pc.key_down(&KeyboardEvent::new("Backspace"));
    pc.key_down(&KeyboardEvent::new("9"));

    assert_eq!(values(&pc), vec!["1", "9", "3"]);
    assert_eq!(*calls.borrow(), vec![call("13", 1), call("193", 1)]);
    assert_eq!(pc.native_focus(), Some(2));
}

// =============================================================================
// PASTE
// =============================================================================

#[test]
fn paste_numeric_code_fills_every_field() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        character_class: CharacterClass::Digit,
        ..Default::default()
    });

    pc.focus_field(0);
    assert_eq!(pc.paste("7291"), Some(EventOutcome::Suppress));

    assert_eq!(values(&pc), vec!["7", "2", "9", "1"]);
    assert_eq!(*calls.borrow(), vec![("7291".to_string(), None)]);
}

#[test]
fn paste_sentence_keeps_only_digits() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        character_class: CharacterClass::Digit,
        ..Default::default()
    });

    pc.focus_field(0);
    pc.paste("your passcode: 7291 - paste this into your field");

    assert_eq!(values(&pc), vec!["7", "2", "9", "1"]);
    assert_eq!(*calls.borrow(), vec![("7291".to_string(), None)]);
}

#[test]
fn paste_with_invalid_characters_leaves_tail_unset() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        character_class: CharacterClass::Digit,
        ..Default::default()
    });

    pc.focus_field(0);
    pc.paste("a1b2");

    assert_eq!(values(&pc), vec!["1", "2", "", ""]);
    assert_eq!(*calls.borrow(), vec![("12".to_string(), None)]);
}

#[test]
fn paste_unrestricted_is_taken_verbatim_without_whitespace() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(6),
        ..Default::default()
    });

    pc.focus_field(3);
    pc.paste("ab -\t12");

    assert_eq!(pc.coordinator().code(), "ab-12");
    assert_eq!(*calls.borrow(), vec![("ab-12".to_string(), None)]);
}

#[test]
fn paste_longer_than_field_count_is_truncated() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        character_class: CharacterClass::Alphanumeric,
        ..Default::default()
    });

    pc.focus_field(0);
    pc.paste("AB12CD34");

    assert_eq!(values(&pc), vec!["A", "B", "1", "2"]);
    assert_eq!(*calls.borrow(), vec![("AB12".to_string(), None)]);
}

#[test]
fn paste_without_focus_is_ignored() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        ..Default::default()
    });

    assert_eq!(pc.paste("1234"), None);
    assert!(calls.borrow().is_empty());
}

// =============================================================================
// FOCUS
// =============================================================================

#[test]
fn tabbing_between_fields_ends_on_new_field() {
    let (mut pc, calls) = mount(PasscodeProps {
        fields: Fields::Count(3),
        ..Default::default()
    });

    pc.focus_field(0);
    pc.key_down(&KeyboardEvent::new("Tab"));
    assert_eq!(pc.coordinator().focus(), Some(1));

    pc.focus_field(2);
    assert_eq!(pc.coordinator().focus(), Some(2));

    pc.blur();
    assert_eq!(pc.coordinator().focus(), None);
    assert!(calls.borrow().is_empty());
}

#[test]
fn window_focus_loss_returns_to_same_field() {
    let (mut pc, _calls) = mount(PasscodeProps {
        fields: Fields::Count(4),
        ..Default::default()
    });

    pc.focus_field(0);
    pc.key_down(&KeyboardEvent::new("1"));
    pc.key_down(&KeyboardEvent::new("2"));
    assert_eq!(pc.native_focus(), Some(2));

    pc.suspend_focus();
    assert_eq!(pc.coordinator().focus(), None);

    assert!(pc.resume_focus());
    assert_eq!(pc.native_focus(), Some(2));
    pc.key_down(&KeyboardEvent::new("3"));
    assert_eq!(pc.coordinator().code(), "123");
}

// =============================================================================
// REACTIVE HOSTS
// =============================================================================

#[test]
fn host_effects_follow_code_and_cursor() {
    let (mut pc, _calls) = mount(PasscodeProps {
        fields: Fields::Count(3),
        character_class: CharacterClass::Digit,
        ..Default::default()
    });

    // A status line that re-renders whenever the value changes
    let status = Rc::new(RefCell::new(String::new()));
    let renders = Rc::new(Cell::new(0));
    let (status_out, render_count) = (status.clone(), renders.clone());
    let value_sig = pc.coordinator().value_signal();
    let _value_effect = effect(move || {
        let filled = value_sig.get().iter().filter(|slot| slot.is_some()).count();
        *status_out.borrow_mut() = format!("{}/3", filled);
        render_count.set(render_count.get() + 1);
    });

    // A highlight that tracks the cursor
    let highlight = Rc::new(Cell::new(None));
    let highlight_out = highlight.clone();
    let focus_sig = pc.coordinator().focus_signal();
    let _focus_effect = effect(move || {
        highlight_out.set(focus_sig.get());
    });

    assert_eq!(*status.borrow(), "0/3");
    assert_eq!(highlight.get(), None);

    pc.focus_field(0);
    assert_eq!(highlight.get(), Some(0));
    assert_eq!(renders.get(), 1);

    pc.key_down(&KeyboardEvent::new("4"));
    assert_eq!(*status.borrow(), "1/3");
    assert_eq!(highlight.get(), pc.native_focus());

    // Rejected keys change nothing
    pc.key_down(&KeyboardEvent::new("x"));
    assert_eq!(renders.get(), 2);

    pc.paste("987");
    assert_eq!(*status.borrow(), "3/3");

    pc.blur();
    assert_eq!(highlight.get(), None);
}
