use reader_logging::{reader_debug, reader_trace};

use crate::{Effect, Mode, Msg, ReadingModeState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ReadingModeState, msg: Msg) -> (ReadingModeState, Vec<Effect>) {
    let effects = match msg {
        Msg::Boot { persisted } => {
            if state.is_booted() {
                reader_debug!("Boot ignored: already booted");
                return (state, Vec::new());
            }
            state.mark_booted();
            // Always start Normal, then replay the stored preference as a real
            // transition so setup effects run in the usual order.
            let mut effects = vec![
                Effect::InstallToggleControl,
                Effect::RefreshToggleLabel {
                    active: state.is_active(),
                },
            ];
            if persisted == Some(true) {
                effects.extend(transition(&mut state, Mode::Reading));
            }
            effects
        }
        Msg::Toggle { force } => {
            let target = force.map_or_else(|| state.mode().flipped(), Mode::from_active);
            transition(&mut state, target)
        }
        Msg::PointerReleased { target } => {
            reader_trace!("Pointer release on {:?} left to the host", target);
            Vec::new()
        }
        Msg::EnterAborted => {
            if !state.is_active() {
                return (state, Vec::new());
            }
            reader_debug!("Reading view not mounted; back to normal");
            state.revert_enter();
            vec![Effect::RefreshToggleLabel { active: false }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn transition(state: &mut ReadingModeState, target: Mode) -> Vec<Effect> {
    if state.mode() == target {
        reader_trace!("Self-transition to {:?} ignored", target);
        return Vec::new();
    }
    state.set_mode(target);
    let active = target.is_active();
    let swap = if active {
        Effect::EnterReading
    } else {
        Effect::ExitReading
    };
    vec![
        swap,
        Effect::PersistActive(active),
        Effect::RefreshToggleLabel { active },
    ]
}
