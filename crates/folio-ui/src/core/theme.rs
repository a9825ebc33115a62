//! Light/dark theme state and its persistence contract.
//!
//! # Design
//! - One [`ThemeState`] per mounted app root; it is passed down explicitly and
//!   never stored in a static.
//! - Storage and the document root are reached through [`ThemeStorage`] and
//!   [`ThemeSurface`] so the state machine runs without a DOM.
//! - Mounting is two-phase: the configured default renders first, then the
//!   persisted value (if any) is applied once storage is reachable.
//! - A persisted value other than `light`/`dark` is ignored and left in place.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::core::error::{ThemeError, ThemeResult};

/// Storage key used when the app root does not configure one.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";

/// Attribute on the document root mirroring the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Style property on the document root mirroring the active theme.
pub const THEME_PROPERTY: &str = "--theme";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Both themes, in toggle order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Identifier used for storage, class tokens, and `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable label for toggles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme {
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle phase of a mounted theme state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePhase {
    /// Showing the configured default; storage has not been consulted yet.
    Uninitialized,
    /// Storage has been consulted (whether or not it held a value).
    Hydrated,
}

/// Mount-time configuration for the theme provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme shown until storage is consulted, and kept if storage is empty.
    pub default_theme: Theme,
    /// Durable storage key.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Durable client-side key/value storage.
pub trait ThemeStorage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when storage cannot be reached.
    fn read(&self, key: &str) -> ThemeResult<Option<String>>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the write is rejected.
    fn write(&self, key: &str, value: &str) -> ThemeResult<()>;
}

/// Global presentation target carrying the theme markers (the document root).
pub trait ThemeSurface {
    /// Remove a class token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Surface`] when the mutation fails.
    fn remove_class(&self, class: &str) -> ThemeResult<()>;

    /// Add a class token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Surface`] when the mutation fails.
    fn add_class(&self, class: &str) -> ThemeResult<()>;

    /// Set an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Surface`] when the mutation fails.
    fn set_attribute(&self, name: &str, value: &str) -> ThemeResult<()>;

    /// Set an inline style property.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Surface`] when the mutation fails.
    fn set_style_property(&self, name: &str, value: &str) -> ThemeResult<()>;
}

/// Reflect `theme` onto the surface.
///
/// Both theme classes are cleared before the active one is added, so exactly
/// one of them is present afterwards. `data-theme` and `--theme` mirror it.
///
/// # Errors
///
/// Stops at the first failing mutation and returns its error.
pub fn apply_to_surface(surface: &impl ThemeSurface, theme: Theme) -> ThemeResult<()> {
    for candidate in Theme::ALL {
        surface.remove_class(candidate.as_str())?;
    }
    surface.add_class(theme.as_str())?;
    surface.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    surface.set_style_property(THEME_PROPERTY, theme.as_str())
}

/// What hydration found in storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// A valid persisted theme replaced the default.
    Restored(Theme),
    /// Nothing was stored; the default stays.
    Missing,
    /// An unrecognized value was stored; the default stays and the value is left untouched.
    Ignored(String),
    /// Storage could not be read; the default stays.
    Unavailable(ThemeError),
}

/// Theme state owned by one mounted app root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    phase: ThemePhase,
    storage_key: String,
}

impl ThemeState {
    /// Fresh state showing the configured default.
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            theme: config.default_theme,
            phase: ThemePhase::Uninitialized,
            storage_key: config.storage_key.clone(),
        }
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Theme actually rendered. Always equal to [`Self::theme`]; there is no
    /// system-preference mode.
    #[must_use]
    pub const fn resolved_theme(&self) -> Theme {
        self.theme
    }

    /// Lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ThemePhase {
        self.phase
    }

    /// Whether storage has been consulted.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        matches!(self.phase, ThemePhase::Hydrated)
    }

    /// Key this state persists under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Consult storage and adopt a valid persisted theme.
    ///
    /// Always ends in [`ThemePhase::Hydrated`]. Safe to call again; it
    /// re-reads storage each time.
    pub fn hydrate(&mut self, storage: &impl ThemeStorage) -> HydrateOutcome {
        self.phase = ThemePhase::Hydrated;
        match storage.read(&self.storage_key) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => {
                    self.theme = theme;
                    HydrateOutcome::Restored(theme)
                }
                Err(_) => HydrateOutcome::Ignored(raw),
            },
            Ok(None) => HydrateOutcome::Missing,
            Err(err) => HydrateOutcome::Unavailable(err),
        }
    }

    /// Switch to `theme` and persist it.
    ///
    /// The in-memory theme changes even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write is rejected.
    pub fn set_theme(&mut self, theme: Theme, storage: &impl ThemeStorage) -> ThemeResult<()> {
        self.theme = theme;
        storage.write(&self.storage_key, theme.as_str())
    }

    /// Flip between light and dark and persist the result.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write is rejected.
    pub fn toggle(&mut self, storage: &impl ThemeStorage) -> ThemeResult<()> {
        self.set_theme(self.theme.toggled(), storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
        reject_writes: bool,
        unreachable: bool,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn read(&self, key: &str) -> ThemeResult<Option<String>> {
            if self.unreachable {
                return Err(ThemeError::storage(key, "unreachable"));
            }
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> ThemeResult<()> {
            if self.reject_writes {
                return Err(ThemeError::storage(key, "quota exceeded"));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        classes: RefCell<BTreeSet<String>>,
        attributes: RefCell<HashMap<String, String>>,
        properties: RefCell<HashMap<String, String>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn remove_class(&self, class: &str) -> ThemeResult<()> {
            self.classes.borrow_mut().remove(class);
            Ok(())
        }

        fn add_class(&self, class: &str) -> ThemeResult<()> {
            self.classes.borrow_mut().insert(class.to_string());
            Ok(())
        }

        fn set_attribute(&self, name: &str, value: &str) -> ThemeResult<()> {
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn set_style_property(&self, name: &str, value: &str) -> ThemeResult<()> {
            self.properties
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }
    }

    fn config(default_theme: Theme, key: &str) -> ThemeConfig {
        ThemeConfig {
            default_theme,
            storage_key: key.to_string(),
        }
    }

    #[test]
    fn theme_strings_round_trip_exactly() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("system".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn theme_serializes_lowercase() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Theme::Dark)?, "\"dark\"");
        assert_eq!(serde_json::from_str::<Theme>("\"light\"")?, Theme::Light);
        Ok(())
    }

    #[test]
    fn default_config_matches_site_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.storage_key, "portfolio-theme");
    }

    #[test]
    fn new_state_is_uninitialized_with_default() {
        let state = ThemeState::new(&config(Theme::Dark, "k"));
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.phase(), ThemePhase::Uninitialized);
        assert!(!state.is_hydrated());
        assert_eq!(state.storage_key(), "k");
    }

    #[test]
    fn hydrate_with_empty_storage_keeps_default() {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new(&config(Theme::Dark, "k"));
        assert_eq!(state.hydrate(&storage), HydrateOutcome::Missing);
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.is_hydrated());
    }

    #[test]
    fn hydrate_prefers_persisted_value_over_default() {
        let storage = MemoryStorage::with("k", "light");
        let mut state = ThemeState::new(&config(Theme::Dark, "k"));
        assert_eq!(state.hydrate(&storage), HydrateOutcome::Restored(Theme::Light));
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.resolved_theme(), Theme::Light);
    }

    #[test]
    fn malformed_persisted_value_is_ignored_not_erased() {
        let storage = MemoryStorage::with("k", "sepia");
        let mut state = ThemeState::new(&config(Theme::Light, "k"));
        assert_eq!(
            state.hydrate(&storage),
            HydrateOutcome::Ignored("sepia".to_string())
        );
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(storage.get("k").as_deref(), Some("sepia"));
    }

    #[test]
    fn unreachable_storage_keeps_default_and_hydrates() {
        let storage = MemoryStorage {
            unreachable: true,
            ..MemoryStorage::default()
        };
        let mut state = ThemeState::new(&config(Theme::Dark, "k"));
        assert!(matches!(
            state.hydrate(&storage),
            HydrateOutcome::Unavailable(ThemeError::Storage { .. })
        ));
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.is_hydrated());
    }

    #[test]
    fn other_keys_are_not_consulted() {
        let storage = MemoryStorage::with("other", "dark");
        let mut state = ThemeState::new(&config(Theme::Light, "k"));
        assert_eq!(state.hydrate(&storage), HydrateOutcome::Missing);
    }

    #[test]
    fn set_theme_persists_for_a_fresh_state() -> ThemeResult<()> {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new(&config(Theme::Light, "k"));
        state.set_theme(Theme::Dark, &storage)?;
        assert_eq!(storage.get("k").as_deref(), Some("dark"));

        let mut reloaded = ThemeState::new(&config(Theme::Light, "k"));
        reloaded.hydrate(&storage);
        assert_eq!(reloaded.theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn set_theme_overwrites_a_malformed_value() -> ThemeResult<()> {
        let storage = MemoryStorage::with("k", "garbage");
        let mut state = ThemeState::new(&config(Theme::Light, "k"));
        state.hydrate(&storage);
        state.set_theme(Theme::Light, &storage)?;
        assert_eq!(storage.get("k").as_deref(), Some("light"));
        Ok(())
    }

    #[test]
    fn rejected_write_still_switches_theme() {
        let storage = MemoryStorage {
            reject_writes: true,
            ..MemoryStorage::default()
        };
        let mut state = ThemeState::new(&config(Theme::Light, "k"));
        let err = state
            .set_theme(Theme::Dark, &storage)
            .expect_err("write rejected");
        assert!(matches!(err, ThemeError::Storage { ref key, .. } if key == "k"));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn double_toggle_returns_to_start() -> ThemeResult<()> {
        let storage = MemoryStorage::default();
        for start in Theme::ALL {
            let mut state = ThemeState::new(&config(start, "k"));
            state.toggle(&storage)?;
            assert_eq!(state.theme(), start.toggled());
            state.toggle(&storage)?;
            assert_eq!(state.theme(), start);
        }
        Ok(())
    }

    #[test]
    fn toggle_then_reload_restores_dark() -> ThemeResult<()> {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new(&config(Theme::Light, "portfolio-theme"));
        state.hydrate(&storage);
        assert_eq!(state.resolved_theme(), Theme::Light);

        state.toggle(&storage)?;
        assert_eq!(state.resolved_theme(), Theme::Dark);

        let mut reloaded = ThemeState::new(&config(Theme::Light, "portfolio-theme"));
        reloaded.hydrate(&storage);
        assert_eq!(reloaded.resolved_theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn surface_carries_exactly_one_theme_class() -> ThemeResult<()> {
        let surface = RecordingSurface::default();
        apply_to_surface(&surface, Theme::Light)?;
        apply_to_surface(&surface, Theme::Dark)?;

        let classes = surface.classes.borrow();
        assert!(classes.contains("dark"));
        assert!(!classes.contains("light"));
        assert_eq!(
            surface.attributes.borrow().get(THEME_ATTRIBUTE).map(String::as_str),
            Some("dark")
        );
        assert_eq!(
            surface.properties.borrow().get(THEME_PROPERTY).map(String::as_str),
            Some("dark")
        );
        Ok(())
    }

    #[test]
    fn surface_keeps_unrelated_classes() -> ThemeResult<()> {
        let surface = RecordingSurface::default();
        surface.add_class("antialiased")?;
        apply_to_surface(&surface, Theme::Dark)?;
        apply_to_surface(&surface, Theme::Light)?;
        let classes = surface.classes.borrow();
        assert!(classes.contains("antialiased"));
        assert!(classes.contains("light"));
        assert_eq!(classes.len(), 2);
        Ok(())
    }
}
