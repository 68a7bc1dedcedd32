mod common;

use common::{article_page, first, init_logging};
use pretty_assertions::assert_eq;
use reader_core::{PointerTarget, LABEL_ENTER, LABEL_EXIT};
use reader_engine::{
    Candidate, Document, Extraction, Extractor, MemoryPreferenceStore, PreferenceStore,
    ReaderConfig, ReaderSession, RonPreferenceStore, SanitizedNode, Score,
};

fn session_for(html: &str, store: MemoryPreferenceStore) -> ReaderSession {
    ReaderSession::new(Document::parse(html), Box::new(store), ReaderConfig::default())
}

fn stored(session: &ReaderSession) -> Option<String> {
    session.store().load("reader-mode").unwrap()
}

fn label(session: &ReaderSession) -> String {
    let control = session.toggle_control().expect("toggle control installed");
    session.document().rendered_text(control)
}

#[test]
fn double_toggle_restores_body_element_for_element() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();
    let body = session.document().body().unwrap();
    let before_children = session.document().children(body);
    let before_html = session.document().inner_html(body);

    assert!(session.toggle(None));
    assert!(!session.toggle(None));

    assert_eq!(session.document().children(body), before_children);
    assert_eq!(session.document().inner_html(body), before_html);
    assert!(before_html.contains(r#"<p style="color:red">"#));
    assert!(session.snapshot().is_none());
}

#[test]
fn reading_mode_mounts_only_the_container_and_the_control() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();

    session.toggle(None);

    let doc = session.document();
    let body = doc.body().unwrap();
    let children = doc.children(body);
    let report = session.last_report().unwrap();
    assert_eq!(children, vec![report.container, session.toggle_control().unwrap()]);
    assert_eq!(doc.attr(report.container, "id"), Some("reader-root"));

    let mounted = doc.outer_html(report.container);
    assert!(mounted.starts_with(
        r#"<div id="reader-root"><article><h1><span class="keep-together">Title</span></h1><p>"#
    ));
    assert!(mounted.contains(r#"<img src="a.jpg" loading="lazy" decoding="async">"#));
    assert!(!mounted.contains("Section"));
    assert!(!mounted.contains("style"));
    assert_eq!(label(&session), LABEL_EXIT);
}

#[test]
fn entering_strips_site_styles_from_the_live_document() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());

    session.toggle(Some(true));

    let report = session.last_report().unwrap();
    assert_eq!(report.styles.style_blocks, 1);
    assert_eq!(report.styles.stylesheet_links, 1);
    let html = session.document().to_html();
    assert!(!html.contains("<style"));
    assert!(!html.contains("site.css"));
}

#[test]
fn forced_self_transition_does_not_resnapshot() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();
    session.toggle(Some(true));
    let snapshot = session.snapshot().cloned();
    let container = session.last_report().unwrap().container;
    let html = session.document().to_html();

    assert!(session.toggle(Some(true)));

    assert_eq!(session.snapshot().cloned(), snapshot);
    assert_eq!(session.last_report().unwrap().container, container);
    assert_eq!(session.document().to_html(), html);
    assert_eq!(session.state().transitions(), 1);

    assert!(!session.toggle(Some(false)));
    assert!(!session.toggle(Some(false)));
    assert_eq!(session.state().transitions(), 2);
}

#[test]
fn every_transition_is_persisted() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();
    assert_eq!(stored(&session), None);

    session.toggle(None);
    assert_eq!(stored(&session).as_deref(), Some("true"));

    session.toggle(None);
    assert_eq!(stored(&session).as_deref(), Some("false"));
    assert_eq!(label(&session), LABEL_ENTER);
}

#[test]
fn boot_replays_persisted_reading_mode() {
    init_logging();
    let store = MemoryPreferenceStore::new().with_entry("reader-mode", "true");
    let mut session = session_for(&article_page(), store);

    session.boot();

    assert!(session.is_active());
    assert!(session.snapshot().is_some());
    assert_eq!(session.state().transitions(), 1);
    assert_eq!(label(&session), LABEL_EXIT);
    let body = session.document().body().unwrap();
    assert_eq!(session.document().children(body).len(), 2);

    session.toggle(None);
    assert!(session.document().to_html().contains("Section 8"));
}

#[test]
fn unrecognized_preference_boots_normal() {
    init_logging();
    let store = MemoryPreferenceStore::new().with_entry("reader-mode", "maybe");
    let mut session = session_for(&article_page(), store);

    session.boot();

    assert!(!session.is_active());
    assert_eq!(label(&session), LABEL_ENTER);
}

#[test]
fn pointer_releases_are_classified_but_never_toggle() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();
    let link = first(session.document(), "a");
    let heading = first(session.document(), "h1");
    let control = session.toggle_control().unwrap();

    assert_eq!(session.pointer_released(link), PointerTarget::Interactive);
    assert_eq!(session.pointer_released(heading), PointerTarget::Content);
    assert_eq!(session.pointer_released(control), PointerTarget::ToggleControl);
    assert!(!session.is_active());
    assert_eq!(session.state().transitions(), 0);
}

#[test]
fn activating_the_toggle_control_flips_the_mode() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new());
    session.boot();
    let heading = first(session.document(), "h1");
    let control = session.toggle_control().unwrap();

    assert!(!session.activate(heading));
    assert!(!session.is_active());

    assert!(session.activate(control));
    assert!(session.is_active());
    let label_text = session.document().children(control)[0];
    assert!(session.activate(label_text));
    assert!(!session.is_active());
}

#[test]
fn document_without_body_stays_normal_and_persists_nothing() {
    init_logging();
    let mut session = ReaderSession::new(
        Document::new(),
        Box::new(MemoryPreferenceStore::new()),
        ReaderConfig::default(),
    );

    assert!(!session.toggle(None));

    assert!(!session.is_active());
    assert!(session.snapshot().is_none());
    assert!(session.last_report().is_none());
    assert_eq!(session.state().transitions(), 0);
    assert_eq!(stored(&session), None);
}

#[test]
fn persisted_reading_mode_without_body_boots_normal() {
    init_logging();
    let store = MemoryPreferenceStore::new().with_entry("reader-mode", "true");
    let mut session = ReaderSession::new(Document::new(), Box::new(store), ReaderConfig::default());

    session.boot();

    assert!(!session.is_active());
    assert!(session.snapshot().is_none());
    assert_eq!(stored(&session).as_deref(), Some("true"));
}

#[test]
fn page_without_readable_content_mounts_an_empty_container() {
    init_logging();
    let mut session = session_for("<body><div> </div><img></body>", MemoryPreferenceStore::new());

    session.toggle(None);

    let report = session.last_report().unwrap();
    assert!(report.extraction.is_empty());
    assert_eq!(
        session.document().outer_html(report.container),
        r#"<div id="reader-root"></div>"#
    );

    session.toggle(None);
    let body = session.document().body().unwrap();
    assert_eq!(session.document().inner_html(body), "<div> </div><img>");
}

#[test]
fn ron_store_carries_the_preference_across_sessions() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("reader.ron");

    let mut first_session = ReaderSession::new(
        Document::parse(&article_page()),
        Box::new(RonPreferenceStore::new(&path)),
        ReaderConfig::default(),
    );
    first_session.boot();
    first_session.toggle(None);
    assert!(path.exists());

    let mut second_session = ReaderSession::new(
        Document::parse(&article_page()),
        Box::new(RonPreferenceStore::new(&path)),
        ReaderConfig::default(),
    );
    second_session.boot();
    assert!(second_session.is_active());
}

struct FixedExtractor;

impl Extractor for FixedExtractor {
    fn extract(&self, document: &Document) -> Extraction {
        Extraction {
            root: Candidate {
                node: document.root(),
                score: Score::Disqualified,
            },
            root_tag: None,
            content: vec![SanitizedNode::text("fixed")],
            keep_together_runs: 0,
        }
    }
}

#[test]
fn custom_extractor_output_is_mounted() {
    init_logging();
    let mut session = session_for(&article_page(), MemoryPreferenceStore::new())
        .with_extractor(Box::new(FixedExtractor));

    session.toggle(None);
    let container = session.last_report().unwrap().container;

    let document = session.into_document();
    assert_eq!(
        document.outer_html(container),
        r#"<div id="reader-root">fixed</div>"#
    );
}
