use crate::Mode;

/// Toggle label shown while the page is in its normal state.
pub const LABEL_ENTER: &str = "Reading mode";
/// Toggle label shown while the reading view is mounted.
pub const LABEL_EXIT: &str = "Exit reading mode";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderViewModel {
    pub mode: Mode,
    pub active: bool,
    pub toggle_label: &'static str,
    pub transitions: u64,
    pub dirty: bool,
}

impl ReaderViewModel {
    pub(crate) fn from_mode(mode: Mode, transitions: u64, dirty: bool) -> Self {
        Self {
            mode,
            active: mode.is_active(),
            toggle_label: toggle_label(mode.is_active()),
            transitions,
            dirty,
        }
    }
}

pub(crate) fn toggle_label(active: bool) -> &'static str {
    if active {
        LABEL_EXIT
    } else {
        LABEL_ENTER
    }
}
