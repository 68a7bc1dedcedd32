use ego_tree::NodeId;
use reader_core::PointerTarget;

use crate::dom::Document;

const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "textarea", "select", "summary"];

/// Whether `target` or one of its ancestors is a link, form control,
/// `role="button"` or an editable region.
pub fn is_interactive_target(document: &Document, target: NodeId) -> bool {
    document.ancestors_inclusive(target).into_iter().any(|id| {
        let Some(element) = document.element(id) else {
            return false;
        };
        INTERACTIVE_TAGS.contains(&element.name())
            || element
                .attr("role")
                .is_some_and(|role| role.trim().eq_ignore_ascii_case("button"))
            || element
                .attr("contenteditable")
                .is_some_and(|value| value.is_empty() || value.eq_ignore_ascii_case("true"))
    })
}

/// Classifies a pointer target for the state machine. The toggle control is
/// checked first since it is itself a button.
pub fn classify_pointer_target(
    document: &Document,
    target: NodeId,
    toggle_control: Option<NodeId>,
) -> PointerTarget {
    if let Some(control) = toggle_control {
        if document.ancestors_inclusive(target).contains(&control) {
            return PointerTarget::ToggleControl;
        }
    }
    if is_interactive_target(document, target) {
        PointerTarget::Interactive
    } else {
        PointerTarget::Content
    }
}
