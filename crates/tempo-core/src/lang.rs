//! Supported display languages.
//!
//! A language supplies two tables, both indexed by weekday (Sunday first):
//! the full names drawn in the calendar header, and the short forms accepted
//! in day specs such as `mon-fri`.

use std::str::FromStr;

use crate::{CoreError, Weekday};

/// Locale used for weekday names.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[non_exhaustive]
pub enum Language {
    /// English (default).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    En,
    /// German.
    #[cfg_attr(feature = "serde", serde(rename = "de"))]
    De,
    /// Brazilian Portuguese.
    #[cfg_attr(feature = "serde", serde(rename = "pt-BR"))]
    PtBr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::PtBr];

    /// Locale code as written in source documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En   => "en",
            Language::De   => "de",
            Language::PtBr => "pt-BR",
        }
    }

    /// Full weekday names, Sunday first.
    pub fn day_names(self) -> &'static [&'static str; 7] {
        match self {
            Language::En => &[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ],
            Language::De => &[
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ],
            Language::PtBr => &[
                "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
            ],
        }
    }

    /// Short forms accepted in day specs, Sunday first.
    pub fn day_abbreviations(self) -> &'static [&'static str; 7] {
        match self {
            Language::En   => &["sun", "mon", "tue", "wed", "thu", "fri", "sat"],
            Language::De   => &["so", "mo", "di", "mi", "do", "fr", "sa"],
            Language::PtBr => &["dom", "seg", "ter", "qua", "qui", "sex", "sab"],
        }
    }

    /// Look up a day abbreviation (case-insensitive).
    pub fn parse_day(self, abbr: &str) -> Option<Weekday> {
        let abbr = abbr.trim().to_lowercase();
        self.day_abbreviations()
            .iter()
            .position(|a| *a == abbr)
            .map(|i| Weekday::ALL[i])
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_owned()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
