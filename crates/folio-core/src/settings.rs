//! Persisted user settings abstraction.

use log::debug;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Toggle button icon for this theme.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "moon",
            Self::Light => "sun",
        }
    }
}

/// User-tunable settings that should survive a reload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PersistedSettings {
    pub theme: Theme,
}

impl PersistedSettings {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error>;
    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error>;
}

/// Volatile store for hosts without persistent storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemorySettingsStore {
    saved: Option<PersistedSettings>,
    writes: u32,
}

impl MemorySettingsStore {
    pub const fn new() -> Self {
        Self {
            saved: None,
            writes: 0,
        }
    }

    pub const fn with_settings(settings: PersistedSettings) -> Self {
        Self {
            saved: Some(settings),
            writes: 0,
        }
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl SettingsStore for MemorySettingsStore {
    type Error = core::convert::Infallible;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error> {
        Ok(self.saved)
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error> {
        debug!("settings: theme={} (memory)", settings.theme.as_str());
        self.saved = Some(*settings);
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}
