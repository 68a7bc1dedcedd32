//! Reading-mode session: owns the live document and the body snapshot, and
//! executes the effects decided by `reader_core::update`.

use ego_tree::NodeId;
use reader_core::{
    update, Effect, Msg, PointerTarget, ReaderViewModel, ReadingModeState, LABEL_ENTER, LABEL_EXIT,
};
use reader_logging::{reader_debug, reader_error, reader_info, reader_warn};

use crate::config::ReaderConfig;
use crate::dom::{Document, ElementData};
use crate::extract::{Extraction, Extractor, ScoringExtractor};
use crate::interact::classify_pointer_target;
use crate::mount::build_container;
use crate::prefs::{format_active, parse_active, PreferenceStore};
use crate::style::{strip_site_styles, StyleStripReport};

/// The body's child sequence as it was before reading mode took over.
/// The nodes stay in the document arena, detached, until restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodySnapshot {
    children: Vec<NodeId>,
}

impl BodySnapshot {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Outcome of the most recent `Normal -> Reading` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingReport {
    pub extraction: Extraction,
    pub styles: StyleStripReport,
    pub container: NodeId,
}

pub struct ReaderSession {
    config: ReaderConfig,
    document: Document,
    state: ReadingModeState,
    original_content: Option<BodySnapshot>,
    toggle_control: Option<NodeId>,
    extractor: Box<dyn Extractor>,
    store: Box<dyn PreferenceStore>,
    last_report: Option<ReadingReport>,
}

impl ReaderSession {
    pub fn new(document: Document, store: Box<dyn PreferenceStore>, config: ReaderConfig) -> Self {
        let extractor = Box::new(ScoringExtractor::new(config.clone()));
        Self {
            config,
            document,
            state: ReadingModeState::new(),
            original_content: None,
            toggle_control: None,
            extractor,
            store,
            last_report: None,
        }
    }

    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn state(&self) -> &ReadingModeState {
        &self.state
    }

    pub fn view(&self) -> ReaderViewModel {
        self.state.view()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn snapshot(&self) -> Option<&BodySnapshot> {
        self.original_content.as_ref()
    }

    pub fn toggle_control(&self) -> Option<NodeId> {
        self.toggle_control
    }

    pub fn last_report(&self) -> Option<&ReadingReport> {
        self.last_report.as_ref()
    }

    /// Reads the stored preference once and replays it.
    pub fn boot(&mut self) {
        let persisted = self.load_persisted();
        self.dispatch(Msg::Boot { persisted });
    }

    /// Flips the mode, or forces it when `force` is given. Returns the new `active`.
    pub fn toggle(&mut self, force: Option<bool>) -> bool {
        self.dispatch(Msg::Toggle { force });
        self.is_active()
    }

    /// Activation (click) of `target`. Toggles when the target is the toggle
    /// control or inside it; returns whether the mode was flipped.
    pub fn activate(&mut self, target: NodeId) -> bool {
        let on_control = self
            .toggle_control
            .is_some_and(|control| self.document.ancestors_inclusive(target).contains(&control));
        if !on_control {
            return false;
        }
        let was_active = self.is_active();
        self.toggle(None) != was_active
    }

    /// Routes a pointer release on `target`. Releases never toggle; the
    /// classification is returned so the page-navigation collaborator can act
    /// on content taps and skip links, form controls and the toggle control.
    pub fn pointer_released(&mut self, target: NodeId) -> PointerTarget {
        let target = classify_pointer_target(&self.document, target, self.toggle_control);
        self.dispatch(Msg::PointerReleased { target });
        target
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;
        for effect in effects {
            if !self.run_effect(effect) {
                // The rest of the batch belongs to a transition that never happened.
                self.dispatch(Msg::EnterAborted);
                return;
            }
        }
    }

    /// Returns `false` when the reading view could not be mounted.
    fn run_effect(&mut self, effect: Effect) -> bool {
        reader_debug!("Running effect {:?}", effect);
        match effect {
            Effect::InstallToggleControl => self.install_toggle_control(),
            Effect::EnterReading => return self.enter_reading(),
            Effect::ExitReading => self.exit_reading(),
            Effect::PersistActive(active) => self.persist_active(active),
            Effect::RefreshToggleLabel { active } => self.refresh_toggle_label(active),
        }
        true
    }

    fn load_persisted(&self) -> Option<bool> {
        match self.store.load(&self.config.preference_key) {
            Ok(Some(value)) => {
                let parsed = parse_active(&value);
                if parsed.is_none() {
                    reader_warn!("Ignoring unrecognized stored preference {:?}", value);
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                reader_warn!("Failed to load reading-mode preference: {}", err);
                None
            }
        }
    }

    fn persist_active(&mut self, active: bool) {
        let key = self.config.preference_key.as_str();
        if let Err(err) = self.store.save(key, format_active(active)) {
            reader_error!("Failed to persist reading-mode preference: {}", err);
        }
    }

    fn install_toggle_control(&mut self) {
        if self.toggle_control.is_some() {
            return;
        }
        let Some(body) = self.document.body() else {
            reader_warn!("No body element; toggle control not installed");
            return;
        };
        let control = self.document.create_element(
            ElementData::new("button")
                .with_attr("id", self.config.toggle_control_id.as_str())
                .with_attr("type", "button"),
        );
        self.document.append_child(body, control);
        self.toggle_control = Some(control);
    }

    fn refresh_toggle_label(&mut self, active: bool) {
        if let Some(control) = self.toggle_control {
            let label = if active { LABEL_EXIT } else { LABEL_ENTER };
            self.document.set_text_content(control, label);
        }
    }

    fn reattach_toggle_control(&mut self, body: NodeId) {
        if let Some(control) = self.toggle_control {
            self.document.append_child(body, control);
        }
    }

    fn enter_reading(&mut self) -> bool {
        let Some(body) = self.document.body() else {
            reader_warn!("No body element; reading view not mounted");
            return false;
        };
        if self.original_content.is_some() {
            reader_warn!("Snapshot already held; refusing to take another");
            return false;
        }

        // The control is not page content: keep it out of scoring and the snapshot.
        if let Some(control) = self.toggle_control {
            self.document.detach(control);
        }

        // Extraction only reads the document, so it runs before the body is
        // emptied; the result is the same as extracting from the snapshot.
        let extraction = self.extractor.extract(&self.document);

        let children = self.document.detach_children(body);
        let snapshot_len = children.len();
        self.original_content = Some(BodySnapshot { children });

        let styles = strip_site_styles(&mut self.document);

        let container =
            build_container(&mut self.document, &self.config.container_id, &extraction.content);
        self.document.append_child(body, container);
        self.reattach_toggle_control(body);

        if extraction.is_empty() {
            reader_warn!("Extraction produced no readable content; mounted an empty view");
        }
        reader_info!(
            "Entered reading mode: root <{}> {:?}, {} body children stored, \
             {} style sources removed",
            extraction.root_tag.as_deref().unwrap_or("#document"),
            extraction.root.score,
            snapshot_len,
            styles.total()
        );
        self.last_report = Some(ReadingReport {
            extraction,
            styles,
            container,
        });
        true
    }

    fn exit_reading(&mut self) {
        let Some(snapshot) = self.original_content.take() else {
            reader_warn!("Exit requested without a stored snapshot; document left as is");
            return;
        };
        let Some(body) = self.document.body() else {
            reader_warn!("No body element; stored snapshot dropped");
            return;
        };

        self.document.detach_children(body);
        for child in &snapshot.children {
            self.document.append_child(body, *child);
        }
        self.reattach_toggle_control(body);
        reader_info!(
            "Exited reading mode: restored {} body children",
            snapshot.children.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ReaderSession;
    use crate::{Document, MemoryPreferenceStore, ReaderConfig};

    #[test]
    fn exit_without_snapshot_leaves_document_alone() {
        let doc = Document::parse("<body><p>kept</p></body>");
        let store = Box::new(MemoryPreferenceStore::new());
        let mut session = ReaderSession::new(doc, store, ReaderConfig::default());
        let before = session.document().to_html();

        session.exit_reading();

        assert_eq!(session.document().to_html(), before);
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn second_enter_does_not_replace_the_snapshot() {
        let doc = Document::parse("<body><p>kept</p></body>");
        let store = Box::new(MemoryPreferenceStore::new());
        let mut session = ReaderSession::new(doc, store, ReaderConfig::default());

        assert!(session.enter_reading());
        let first = session.snapshot().cloned();
        assert!(!session.enter_reading());

        assert_eq!(session.snapshot().cloned(), first);
    }
}
