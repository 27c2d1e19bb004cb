// Page widgets live here. Each one attaches to existing markup and does
// nothing when its markup is missing.

pub mod carousel;
pub mod notes_toggle;
pub mod reduced_motion;
pub mod theme_toggle;

use page_widgets_shared::PageConfig;
use web_sys::Document;

/// Attach every widget to the page.
pub fn mount_all(document: &Document, config: &PageConfig) {
    theme_toggle::mount(document, config);
    notes_toggle::mount(document, &config.notes_toggle_selector);
    reduced_motion::mount(document);
    carousel::mount(document, &config.carousel);
}
