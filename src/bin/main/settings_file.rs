use std::{fs, io, path::PathBuf};

use folio_core::settings::{PersistedSettings, SettingsStore, Theme};
use log::{debug, warn};

const THEME_KEY: &str = "theme";

/// Settings kept as `key=value` lines in a plain text file.
pub(super) struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub(super) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettingsStore {
    type Error = io::Error;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        Ok(parse_settings(&contents))
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error> {
        debug!("settings: writing {}", self.path.display());
        fs::write(
            &self.path,
            format!("{THEME_KEY}={}\n", settings.theme.as_str()),
        )
    }
}

fn parse_settings(contents: &str) -> Option<PersistedSettings> {
    let value = contents.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        (key.trim() == THEME_KEY).then_some(value)
    })?;

    match Theme::parse(value) {
        Some(theme) => Some(PersistedSettings::new(theme)),
        None => {
            warn!("settings: unknown theme {:?}; ignoring", value.trim());
            None
        }
    }
}
