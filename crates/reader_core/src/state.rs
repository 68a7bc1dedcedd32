use crate::view_model::ReaderViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Reading,
}

impl Mode {
    pub fn from_active(active: bool) -> Self {
        if active {
            Mode::Reading
        } else {
            Mode::Normal
        }
    }

    pub fn is_active(self) -> bool {
        self == Mode::Reading
    }

    pub fn flipped(self) -> Self {
        match self {
            Mode::Normal => Mode::Reading,
            Mode::Reading => Mode::Normal,
        }
    }
}

/// Process-wide reading-mode flags. The body snapshot lives with whoever
/// executes the effects; this struct only tracks the decision side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingModeState {
    mode: Mode,
    booted: bool,
    transitions: u64,
    dirty: bool,
}

impl ReadingModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Number of real transitions applied so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn view(&self) -> ReaderViewModel {
        ReaderViewModel::from_mode(self.mode, self.transitions, self.dirty)
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_booted(&mut self) {
        self.booted = true;
        self.dirty = true;
    }

    /// Undoes the last `Normal -> Reading` transition, which never took effect.
    pub(crate) fn revert_enter(&mut self) {
        self.mode = Mode::Normal;
        self.transitions = self.transitions.saturating_sub(1);
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.transitions += 1;
        self.dirty = true;
    }
}
