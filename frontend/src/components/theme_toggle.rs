use std::{cell::RefCell, rc::Rc};

use page_widgets_shared::{
    theme::{toggle_button_label, FallbackStorage, THEME_ATTRIBUTE},
    PageConfig, Theme, ThemeSchema, ThemeStore, ThemeSurface,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{listen, LocalStorage};

/// Control the page offers for switching themes.
enum ThemeControl {
    Button(Element),
    Checkbox(HtmlInputElement),
    Missing,
}

impl ThemeControl {
    fn find(document: &Document, id: &str) -> Self {
        let Some(element) = document.get_element_by_id(id) else {
            return Self::Missing;
        };
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) if input.type_().eq_ignore_ascii_case("checkbox") => Self::Checkbox(input),
            Ok(input) => Self::Button(input.into()),
            Err(element) => Self::Button(element),
        }
    }
}

/// Document root plus the toggle control reflecting the current theme.
struct PageTheme {
    root: Element,
    control: ThemeControl,
}

impl ThemeSurface for PageTheme {
    fn apply(&mut self, schema: &ThemeSchema, theme: Theme) {
        let _ = match schema.attribute_value(theme) {
            Some(value) => self.root.set_attribute(THEME_ATTRIBUTE, value),
            None => self.root.remove_attribute(THEME_ATTRIBUTE),
        };
        match &self.control {
            ThemeControl::Button(button) => {
                let _ = button.set_attribute("aria-pressed", &theme.is_dark().to_string());
                button.set_text_content(Some(toggle_button_label(theme)));
            },
            ThemeControl::Checkbox(checkbox) => checkbox.set_checked(theme == Theme::Light),
            ThemeControl::Missing => {},
        }
    }
}

/// Restore the saved theme and wire the toggle control.
///
/// A checkbox control stores the theme by name; any other control (or none)
/// stores a dark-mode flag.
pub fn mount(document: &Document, config: &PageConfig) {
    let Some(root) = document.document_element() else {
        return;
    };
    let control = ThemeControl::find(document, &config.theme_toggle_id);
    let schema = match control {
        ThemeControl::Checkbox(_) => ThemeSchema::Named {
            key: config.named_theme_key.clone(),
        },
        _ => ThemeSchema::DarkFlag {
            key: config.dark_flag_key.clone(),
        },
    };

    let listener = match &control {
        ThemeControl::Button(button) => Some((button.clone(), "click")),
        ThemeControl::Checkbox(checkbox) => Some((checkbox.clone().into(), "change")),
        ThemeControl::Missing => None,
    };

    let storage = FallbackStorage::new(LocalStorage::open());
    tracing::debug!(persistent = storage.is_persistent(), key = schema.key(), "theme storage");
    let store = ThemeStore::load(schema, storage, PageTheme { root, control });
    let Some((target, event)) = listener else {
        return;
    };
    let store = Rc::new(RefCell::new(store));

    listen(&target, event, move |_| {
        let mut store = store.borrow_mut();
        let checkbox = match &store.surface().control {
            ThemeControl::Checkbox(checkbox) => Some(checkbox.checked()),
            _ => None,
        };
        match checkbox {
            Some(checked) => store.set(if checked { Theme::Light } else { Theme::Dark }),
            None => {
                store.toggle();
            },
        }
    });
}
