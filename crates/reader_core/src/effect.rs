/// Side effects requested by [`crate::update`], executed in order by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Create the persistent mode-toggle control. Emitted once, at boot.
    InstallToggleControl,
    /// Snapshot the body, strip site styles, extract and mount the reading view.
    EnterReading,
    /// Put the stored body snapshot back in place.
    ExitReading,
    /// Write the new `active` value to the preference store.
    PersistActive(bool),
    /// Update the toggle control's label to match `active`.
    RefreshToggleLabel { active: bool },
}
