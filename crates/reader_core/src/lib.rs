//! Reader core: pure reading-mode state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, PointerTarget};
pub use state::{Mode, ReadingModeState};
pub use update::update;
pub use view_model::{ReaderViewModel, LABEL_ENTER, LABEL_EXIT};
