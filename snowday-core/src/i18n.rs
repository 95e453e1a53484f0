//! Localized message catalogs.
//!
//! Language selection only ever changes the rendered text, never which code
//! path runs. Catalogs are a static lookup table indexed by
//! `(Language, MessageKey)`; placeholders are substituted at render time.

use chrono::{DateTime, Utc};

use crate::error::LookupError;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::English, Language::Hindi]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{value}'. Supported languages: en, hi."
            )),
        }
    }
}

/// Every user-visible string the core can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    PromptCity,
    Checking,
    ChanceHeadline,
    SnowLabel,
    TemperatureLabel,
    WindLabel,
    HumidityLabel,
    FeelsLikeLabel,
    CheckedOn,
    FavoriteSaved,
    FavoriteAlready,
    NoFavorites,
    ShareLine,
    ErrEmptyInput,
    ErrAuth,
    ErrNotFound,
    ErrProvider,
}

impl MessageKey {
    pub const fn all() -> &'static [MessageKey] {
        use MessageKey::*;
        &[
            AppTitle,
            PromptCity,
            Checking,
            ChanceHeadline,
            SnowLabel,
            TemperatureLabel,
            WindLabel,
            HumidityLabel,
            FeelsLikeLabel,
            CheckedOn,
            FavoriteSaved,
            FavoriteAlready,
            NoFavorites,
            ShareLine,
            ErrEmptyInput,
            ErrAuth,
            ErrNotFound,
            ErrProvider,
        ]
    }
}

/// Catalog lookup. `{}` marks a placeholder filled by the render helpers.
pub fn text(lang: Language, key: MessageKey) -> &'static str {
    use Language::{English, Hindi};
    use MessageKey::*;

    match (lang, key) {
        (English, AppTitle) => "Snow Day Predictor",
        (Hindi, AppTitle) => "स्नो डे प्रेडिक्टर",

        (English, PromptCity) => "Type a city, e.g. Shimla",
        (Hindi, PromptCity) => "शहर टाइप करें, जैसे: शिमला",

        (English, Checking) => "Checking...",
        (Hindi, Checking) => "लोड हो रहा है...",

        (English, ChanceHeadline) => "Chance of school closing",
        (Hindi, ChanceHeadline) => "स्कूल बंद होने की संभावना",

        (English, SnowLabel) => "Snow",
        (Hindi, SnowLabel) => "बर्फ़",

        (English, TemperatureLabel) => "Temperature",
        (Hindi, TemperatureLabel) => "तापमान",

        (English, WindLabel) => "Wind",
        (Hindi, WindLabel) => "हवा",

        (English, HumidityLabel) => "Humidity",
        (Hindi, HumidityLabel) => "नमी",

        (English, FeelsLikeLabel) => "Feels like",
        (Hindi, FeelsLikeLabel) => "महसूस होता है",

        (English, CheckedOn) => "Checked on",
        (Hindi, CheckedOn) => "जाँच की तारीख",

        (English, FavoriteSaved) => "Added '{}' to favorites",
        (Hindi, FavoriteSaved) => "'{}' पसंदीदा में जोड़ा गया",

        (English, FavoriteAlready) => "'{}' is already in favorites",
        (Hindi, FavoriteAlready) => "'{}' पहले से पसंदीदा में है",

        (English, NoFavorites) => "No favorites saved yet",
        (Hindi, NoFavorites) => "अभी कोई पसंदीदा नहीं है",

        (English, ShareLine) => "Snow day chance for {city}: {chance}% ❄",
        (Hindi, ShareLine) => "{city} में स्नो डे की संभावना: {chance}% ❄",

        (English, ErrEmptyInput) => "Please enter a city name",
        (Hindi, ErrEmptyInput) => "कृपया शहर का नाम दर्ज करें",

        (English, ErrAuth) => "The weather service rejected the API key",
        (Hindi, ErrAuth) => "मौसम सेवा ने एपीआई कुंजी अस्वीकार कर दी",

        (English, ErrNotFound) => "No location matched '{}'",
        (Hindi, ErrNotFound) => "'{}' नहीं मिला",

        (English, ErrProvider) => "Something went wrong, please try again ({})",
        (Hindi, ErrProvider) => "कुछ गलत हुआ, कृपया दोबारा कोशिश करें ({})",
    }
}

/// Render `key` with its single `{}` placeholder substituted.
pub fn text_with(lang: Language, key: MessageKey, value: &str) -> String {
    text(lang, key).replace("{}", value)
}

/// Localized text for a lookup failure, interpolating the offending query
/// or the provider's own message.
pub fn error_message(lang: Language, err: &LookupError) -> String {
    match err {
        LookupError::EmptyInput => text(lang, MessageKey::ErrEmptyInput).to_string(),
        LookupError::Auth => text(lang, MessageKey::ErrAuth).to_string(),
        LookupError::NotFound { query } => text_with(lang, MessageKey::ErrNotFound, query),
        LookupError::Provider { message } => text_with(lang, MessageKey::ErrProvider, message),
    }
}

/// Locale-formatted lookup timestamp: month-first English, day-first Hindi.
pub fn checked_date(lang: Language, at: DateTime<Utc>) -> String {
    match lang {
        Language::English => at.format("%b %-d, %Y %H:%M UTC").to_string(),
        Language::Hindi => at.format("%d/%m/%Y %H:%M UTC").to_string(),
    }
}

/// The shareable one-line summary of a result.
pub fn share_line(lang: Language, city: &str, chance_percent: u8) -> String {
    text(lang, MessageKey::ShareLine)
        .replace("{city}", city)
        .replace("{chance}", &chance_percent.to_string())
}
