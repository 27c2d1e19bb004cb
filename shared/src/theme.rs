//! Persisted dark/light theme preference.

use crate::error::Result;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_FLAG_KEY: &str = "prefers-dark";
pub const NAMED_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("light") {
            Some(Self::Light)
        } else if value.eq_ignore_ascii_case("dark") {
            Some(Self::Dark)
        } else {
            None
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// How a theme is stored and expressed on the page.
///
/// Pages built around a toggle button store a boolean flag and only set the
/// document attribute for dark mode. Pages built around a checkbox store the
/// theme name and always set the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSchema {
    DarkFlag { key: String },
    Named { key: String },
}

impl ThemeSchema {
    pub fn dark_flag() -> Self {
        Self::DarkFlag {
            key: DARK_FLAG_KEY.to_string(),
        }
    }

    pub fn named() -> Self {
        Self::Named {
            key: NAMED_THEME_KEY.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::DarkFlag { key } | Self::Named { key } => key,
        }
    }

    /// Theme used when nothing usable is stored.
    pub fn default_theme(&self) -> Theme {
        match self {
            Self::DarkFlag { .. } => Theme::Light,
            Self::Named { .. } => Theme::Dark,
        }
    }

    pub fn encode(&self, theme: Theme) -> &'static str {
        match self {
            Self::DarkFlag { .. } => {
                if theme.is_dark() {
                    "true"
                } else {
                    "false"
                }
            },
            Self::Named { .. } => theme.as_str(),
        }
    }

    pub fn decode(&self, stored: Option<&str>) -> Theme {
        match (self, stored) {
            (Self::DarkFlag { .. }, Some(value)) => {
                if value == "true" {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            },
            (Self::Named { .. }, Some(value)) => {
                Theme::parse(value).unwrap_or_else(|| self.default_theme())
            },
            (_, None) => self.default_theme(),
        }
    }

    /// Value for the document `data-theme` attribute, `None` to remove it.
    pub fn attribute_value(&self, theme: Theme) -> Option<&'static str> {
        match self {
            Self::DarkFlag { .. } => theme.is_dark().then_some("dark"),
            Self::Named { .. } => Some(theme.as_str()),
        }
    }
}

/// Key/value backend for persisted preferences.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Session-only key/value map. Nothing survives the page.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persistent backend shadowed by a [`MemoryStorage`].
///
/// Every write lands in the session map first, then goes to `primary` if
/// there is one. A missing backend or a rejected access is logged and the
/// session value is used, so a preference set during the visit still reads
/// back until the page is left.
#[derive(Debug)]
pub struct FallbackStorage<P> {
    primary: Option<P>,
    session: MemoryStorage,
}

impl<P: PreferenceStorage> FallbackStorage<P> {
    pub fn new(primary: Option<P>) -> Self {
        if primary.is_none() {
            tracing::warn!("no persistent preference storage, keeping preferences for this visit only");
        }
        Self {
            primary,
            session: MemoryStorage::default(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.primary.is_some()
    }
}

impl<P: PreferenceStorage> PreferenceStorage for FallbackStorage<P> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.session.get(key)? {
            return Ok(Some(value));
        }
        let Some(primary) = &self.primary else {
            return Ok(None);
        };
        match primary.get(key) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, "falling back to session preference: {err}");
                Ok(None)
            },
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.session.set(key, value)?;
        if let Some(primary) = &mut self.primary {
            if let Err(err) = primary.set(key, value) {
                tracing::warn!(key, "preference kept for this visit only: {err}");
            }
        }
        Ok(())
    }
}

/// Where a theme becomes visible: the document attribute plus whatever
/// control reflects it.
pub trait ThemeSurface {
    fn apply(&mut self, schema: &ThemeSchema, theme: Theme);
}

/// Theme preference bound to a storage backend and a page surface.
#[derive(Debug)]
pub struct ThemeStore<S, P> {
    schema: ThemeSchema,
    storage: S,
    surface: P,
    theme: Theme,
}

impl<S: PreferenceStorage, P: ThemeSurface> ThemeStore<S, P> {
    /// Load the stored preference and apply it.
    pub fn load(schema: ThemeSchema, storage: S, surface: P) -> Self {
        let stored = match storage.get(schema.key()) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = schema.key(), "theme preference not readable: {err}");
                None
            },
        };
        let theme = schema.decode(stored.as_deref());
        let mut store = Self {
            schema,
            storage,
            surface,
            theme,
        };
        store.surface.apply(&store.schema, theme);
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Apply `theme` and try to persist it. Persistence failures are logged
    /// and otherwise ignored; the page keeps the new theme for this visit.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.surface.apply(&self.schema, theme);
        if let Err(err) = self.storage.set(self.schema.key(), self.schema.encode(theme)) {
            tracing::warn!(key = self.schema.key(), "theme preference not saved: {err}");
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }
}

/// Text for the theme toggle button in the flag schema.
pub fn toggle_button_label(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "☀️ Theme"
    } else {
        "🌙 Theme"
    }
}
