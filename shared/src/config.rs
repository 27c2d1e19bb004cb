use serde::Deserialize;

use crate::{
    carousel::SWIPE_THRESHOLD_PX,
    error::{Result, WidgetError},
    theme::{DARK_FLAG_KEY, NAMED_THEME_KEY},
};

/// Selectors and keys the widgets look for on the page.
///
/// Every field has a default matching the stock page markup, so a page config
/// block only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub carousel: CarouselSelectors,
    pub theme_toggle_id: String,
    pub dark_flag_key: String,
    pub named_theme_key: String,
    pub notes_toggle_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselSelectors::default(),
            theme_toggle_id: "theme-toggle".to_string(),
            dark_flag_key: DARK_FLAG_KEY.to_string(),
            named_theme_key: NAMED_THEME_KEY.to_string(),
            notes_toggle_selector: ".toggle".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselSelectors {
    pub track: String,
    pub prev: String,
    pub next: String,
    pub indicators: String,
    pub swipe_threshold: f64,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            track: ".review-track".to_string(),
            prev: ".review-nav.prev".to_string(),
            next: ".review-nav.next".to_string(),
            indicators: ".review-dots".to_string(),
            swipe_threshold: SWIPE_THRESHOLD_PX,
        }
    }
}

impl PageConfig {
    /// Parse a JSON config block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| WidgetError::Config(err.to_string()))?;
        if !config.carousel.swipe_threshold.is_finite() || config.carousel.swipe_threshold < 0.0 {
            return Err(WidgetError::Config(format!(
                "swipe_threshold must be a non-negative number, got {}",
                config.carousel.swipe_threshold
            )));
        }
        Ok(config)
    }

    /// Like [`PageConfig::from_json`], but logs and falls back to defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring page config: {err}");
                Self::default()
            },
        }
    }
}
