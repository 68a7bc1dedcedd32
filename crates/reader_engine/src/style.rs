use reader_logging::reader_debug;

use crate::dom::Document;

/// What [`strip_site_styles`] removed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleStripReport {
    pub style_blocks: usize,
    pub stylesheet_links: usize,
    pub inline_styles: usize,
}

impl StyleStripReport {
    pub fn total(&self) -> usize {
        self.style_blocks + self.stylesheet_links + self.inline_styles
    }
}

/// Removes every site-supplied style source still attached to the document:
/// `<style>` blocks, `<link rel="stylesheet">` and `style` attributes.
pub fn strip_site_styles(document: &mut Document) -> StyleStripReport {
    let mut report = StyleStripReport::default();
    for id in document.elements() {
        let Some(element) = document.element(id) else {
            continue;
        };
        if element.is("style") {
            report.style_blocks += 1;
            document.detach(id);
            continue;
        }
        if element.is("link") && is_stylesheet_rel(element.attr("rel")) {
            report.stylesheet_links += 1;
            document.detach(id);
            continue;
        }
        if element.attr("style").is_some() {
            document.with_element_mut(id, |element| element.remove_attr("style"));
            report.inline_styles += 1;
        }
    }
    reader_debug!("Stripped site styles: {:?}", report);
    report
}

fn is_stylesheet_rel(rel: Option<&str>) -> bool {
    rel.is_some_and(|rel| {
        rel.split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}
