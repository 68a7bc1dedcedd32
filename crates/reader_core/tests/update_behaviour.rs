use std::sync::Once;

use pretty_assertions::assert_eq;
use reader_core::{
    update, Effect, Mode, Msg, PointerTarget, ReadingModeState, LABEL_ENTER, LABEL_EXIT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn toggle(state: ReadingModeState, force: Option<bool>) -> (ReadingModeState, Vec<Effect>) {
    update(state, Msg::Toggle { force })
}

#[test]
fn toggle_from_normal_enters_reading() {
    init_logging();
    let (mut state, effects) = toggle(ReadingModeState::new(), None);

    assert_eq!(state.mode(), Mode::Reading);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![
            Effect::EnterReading,
            Effect::PersistActive(true),
            Effect::RefreshToggleLabel { active: true },
        ]
    );
    assert_eq!(state.view().toggle_label, LABEL_EXIT);
}

#[test]
fn second_toggle_exits_reading() {
    init_logging();
    let (state, _) = toggle(ReadingModeState::new(), None);
    let (state, effects) = toggle(state, None);

    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(state.transitions(), 2);
    assert_eq!(
        effects,
        vec![
            Effect::ExitReading,
            Effect::PersistActive(false),
            Effect::RefreshToggleLabel { active: false },
        ]
    );
    assert_eq!(state.view().toggle_label, LABEL_ENTER);
}

#[test]
fn forced_self_transition_is_noop() {
    init_logging();
    let (mut state, _) = toggle(ReadingModeState::new(), Some(true));
    assert!(state.consume_dirty());

    let (mut next, effects) = toggle(state, Some(true));
    assert!(effects.is_empty());
    assert_eq!(next.transitions(), 1);
    assert!(!next.consume_dirty());

    let (normal, effects) = toggle(ReadingModeState::new(), Some(false));
    assert!(effects.is_empty());
    assert_eq!(normal.mode(), Mode::Normal);
    assert_eq!(normal.transitions(), 0);
}

#[test]
fn boot_without_preference_stays_normal() {
    init_logging();
    let (state, effects) = update(ReadingModeState::new(), Msg::Boot { persisted: None });

    assert!(state.is_booted());
    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(
        effects,
        vec![
            Effect::InstallToggleControl,
            Effect::RefreshToggleLabel { active: false },
        ]
    );

    let (state, effects) = update(ReadingModeState::new(), Msg::Boot { persisted: Some(false) });
    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(effects.len(), 2);
}

#[test]
fn boot_with_persisted_true_replays_a_real_transition() {
    init_logging();
    let (state, effects) = update(ReadingModeState::new(), Msg::Boot { persisted: Some(true) });

    assert_eq!(state.mode(), Mode::Reading);
    assert_eq!(state.transitions(), 1);
    assert_eq!(
        effects,
        vec![
            Effect::InstallToggleControl,
            Effect::RefreshToggleLabel { active: false },
            Effect::EnterReading,
            Effect::PersistActive(true),
            Effect::RefreshToggleLabel { active: true },
        ]
    );
}

#[test]
fn boot_runs_only_once() {
    init_logging();
    let (state, _) = update(ReadingModeState::new(), Msg::Boot { persisted: None });
    let (state, effects) = update(state, Msg::Boot { persisted: Some(true) });

    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Normal);
}

#[test]
fn pointer_releases_never_toggle() {
    init_logging();
    for target in [
        PointerTarget::ToggleControl,
        PointerTarget::Interactive,
        PointerTarget::Content,
    ] {
        for state in [ReadingModeState::new(), toggle(ReadingModeState::new(), None).0] {
            let (next, effects) = update(state.clone(), Msg::PointerReleased { target });
            assert_eq!(next, state);
            assert!(effects.is_empty());
        }
    }
}

#[test]
fn aborted_enter_returns_to_normal_without_persisting() {
    init_logging();
    let (state, _) = toggle(ReadingModeState::new(), None);
    assert_eq!(state.transitions(), 1);

    let (state, effects) = update(state, Msg::EnterAborted);

    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(state.transitions(), 0);
    assert_eq!(effects, vec![Effect::RefreshToggleLabel { active: false }]);
    assert_eq!(state.view().toggle_label, LABEL_ENTER);
}

#[test]
fn aborted_enter_while_normal_is_ignored() {
    init_logging();
    let state = ReadingModeState::new();

    let (next, effects) = update(state.clone(), Msg::EnterAborted);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}
