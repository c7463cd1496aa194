use super::method::{CalculationMethod, School};
use serde::{Deserialize, Serialize};

/// User location settings, persisted as a single JSON blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub city: String,
    pub country: String,
    pub method: CalculationMethod,
    pub school: School,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            city: "San Francisco".to_string(),
            country: "United States".to_string(),
            method: CalculationMethod::Isna,
            school: School::Shafi,
        }
    }
}

impl UserSettings {
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Overwrite only the fields present in `patch`.
    pub fn merge(&self, patch: &SettingsPatch) -> Self {
        Self {
            city: patch.city.clone().unwrap_or_else(|| self.city.clone()),
            country: patch.country.clone().unwrap_or_else(|| self.country.clone()),
            method: patch.method.unwrap_or(self.method),
            school: patch.school.unwrap_or(self.school),
        }
    }
}

/// Partial update applied through `SettingsStore::set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub city: Option<String>,
    pub country: Option<String>,
    pub method: Option<CalculationMethod>,
    pub school: Option<School>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.country.is_none() && self.method.is_none() && self.school.is_none()
    }
}
