//! Configuration for the page widgets.

use page_widgets_shared::PageConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block carrying
/// [`PageConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-widgets-config";

/// Read the page config block, falling back to the stock selectors.
pub fn load_page_config(document: &Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    if raw.is_some() {
        tracing::debug!("page config found at #{CONFIG_ELEMENT_ID}");
    }
    PageConfig::from_json_or_default(raw.as_deref())
}
