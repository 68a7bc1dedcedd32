#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Document is ready. `persisted` is the stored preference, if any.
    Boot { persisted: Option<bool> },
    /// Toggle request. `Some(state)` forces that state, `None` flips.
    Toggle { force: Option<bool> },
    /// Pointer released over an already classified target. The core never
    /// toggles on a release; the control toggles through its own activation.
    PointerReleased { target: PointerTarget },
    /// The host could not mount the reading view for the last `Normal -> Reading`.
    EnterAborted,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Classification of a pointer target, supplied by the hit-testing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The mode-toggle control itself. Handled by the control, not the page.
    ToggleControl,
    /// Links, form controls and editable regions. Never toggles.
    Interactive,
    /// Plain page content. Left to the page-flip collaborator.
    Content,
}
