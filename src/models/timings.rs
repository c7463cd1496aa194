use serde::{Deserialize, Serialize};

/// Prayer clock-times for one day, as returned by the provider.
/// Values look like `"05:12"` or `"05:12 (PST)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
    pub imsak: String,
    pub midnight: String,
}

impl DailyTimings {
    /// Sehar boundary (Fajr).
    pub fn sehar(&self) -> &str {
        &self.fajr
    }

    /// Iftar boundary (Maghrib).
    pub fn iftar(&self) -> &str {
        &self.maghrib
    }

    /// Rows shown in the "Today's Timings" table, in display order.
    pub fn display_rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Sehar (Fajr)", &self.fajr),
            ("Sunrise", &self.sunrise),
            ("Dhuhr", &self.dhuhr),
            ("Asr", &self.asr),
            ("Iftar (Maghrib)", &self.maghrib),
            ("Isha", &self.isha),
            ("Midnight", &self.midnight),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    #[serde(default)]
    pub abbreviated: String,
    #[serde(default)]
    pub expanded: String,
}

/// Gregorian part of a provider date. `date` is `DD-MM-YYYY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianDate {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub weekday: NamedValue,
    #[serde(default)]
    pub month: CalendarMonth,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub weekday: NamedValue,
    #[serde(default)]
    pub month: CalendarMonth,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub designation: Designation,
}

impl HijriDate {
    pub const RAMADAN: u32 = 9;

    pub fn is_ramadan(&self) -> bool {
        self.month.number == Self::RAMADAN
    }

    /// "14 Ramadan" style label used in the calendar table.
    pub fn short_label(&self) -> String {
        format!("{} {}", self.day, self.month.en).trim().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    #[serde(default)]
    pub readable: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub gregorian: GregorianDate,
    #[serde(default)]
    pub hijri: HijriDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodMeta {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub method: MethodMeta,
}

/// One entry of the provider's `data` payload: a day's timings with its dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    pub timings: DailyTimings,
    #[serde(default)]
    pub date: DateInfo,
    #[serde(default)]
    pub meta: Meta,
}
