use page_widgets_shared::notes::{toggle_notes, NotesTarget, HIDDEN_ATTRIBUTE, TARGET_ATTRIBUTE};
use web_sys::{Document, Element};

use crate::dom::{self, listen, set_flag_attribute};

struct NotesBox(Element);

impl NotesTarget for NotesBox {
    fn is_hidden(&self) -> bool {
        self.0.has_attribute(HIDDEN_ATTRIBUTE)
    }

    fn set_hidden(&mut self, hidden: bool) {
        set_flag_attribute(&self.0, HIDDEN_ATTRIBUTE, hidden);
    }
}

/// Wire every notes toggle button. The box is looked up on each click, so a
/// button whose target is missing just does nothing.
pub fn mount(document: &Document, selector: &str) {
    for button in dom::query_all(document, selector) {
        let document = document.clone();
        let target_button = button.clone();
        listen(&button, "click", move |_| {
            let Some(id) = target_button.get_attribute(TARGET_ATTRIBUTE) else {
                return;
            };
            let Some(target) = document.get_element_by_id(&id) else {
                return;
            };
            let label = toggle_notes(&mut NotesBox(target));
            target_button.set_text_content(Some(label));
        });
    }
}
