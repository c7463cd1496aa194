use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult, FieldError};
use crate::models::settings::{SettingsPatch, UserSettings};

/// Storage key of the persisted settings blob.
pub const SETTINGS_KEY: &str = "ramadan-app-settings";

/// Location settings backed by a key-value store.
pub struct SettingsStore<S: KeyValueStore> {
    storage: S,
    current: UserSettings,
    first_run: bool,
}

/// Trim city/country and reject empty values, collecting every field error.
pub fn validate(settings: &UserSettings) -> Result<UserSettings, Vec<FieldError>> {
    let city = settings.city.trim();
    let country = settings.country.trim();
    let mut errors = Vec::new();

    if city.is_empty() {
        errors.push(FieldError::new("city", "City is required"));
    }
    if country.is_empty() {
        errors.push(FieldError::new("country", "Country is required"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserSettings {
        city: city.to_string(),
        country: country.to_string(),
        ..settings.clone()
    })
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Load the persisted record. A malformed record is logged and replaced by
    /// defaults in memory; it does not count as a first run.
    pub fn open(storage: S) -> AppResult<Self> {
        let (current, first_run) = match storage.get(SETTINGS_KEY)? {
            None => (UserSettings::default(), true),
            Some(raw) => match serde_json::from_str::<UserSettings>(&raw) {
                Ok(s) => (s, false),
                Err(e) => {
                    log::warn!("Failed to parse settings, using defaults: {e}");
                    (UserSettings::default(), false)
                }
            },
        };

        Ok(Self {
            storage,
            current,
            first_run,
        })
    }

    pub fn get(&self) -> &UserSettings {
        &self.current
    }

    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    /// Merge `patch`, validate, persist immediately.
    pub fn set(&mut self, patch: SettingsPatch) -> AppResult<&UserSettings> {
        let merged = self.current.merge(&patch);
        let valid = validate(&merged).map_err(AppError::InvalidSettings)?;

        let blob = serde_json::to_string(&valid)?;
        self.storage.set(SETTINGS_KEY, &blob)?;

        self.current = valid;
        self.first_run = false;
        Ok(&self.current)
    }

    /// Forget the persisted record; the next session starts as a first run.
    pub fn reset(&mut self) -> AppResult<()> {
        self.storage.remove(SETTINGS_KEY)?;
        self.current = UserSettings::default();
        self.first_run = true;
        Ok(())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
