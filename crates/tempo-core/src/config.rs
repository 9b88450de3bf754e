//! Rendering configuration for one weekly schedule.
//!
//! Typically loaded from the `[config]` table of a source document by
//! `tempo-schedule` and handed to `Schedule::new`.  All lengths are in
//! centimetres on a landscape A4 page.

use crate::{CoreError, DAY_HOURS, Language};

/// Landscape A4 width (cm).
pub const PAGE_WIDTH_CM: f64 = 29.7;

/// Landscape A4 height (cm).
pub const PAGE_HEIGHT_CM: f64 = 21.0;

/// Characters that would break `\includegraphics{..}` if they appeared in
/// the logo path.
const LOGO_PATH_RESERVED: &[char] = &['%', '#', '{', '}', '\\'];

/// Top-level schedule configuration.
///
/// Every field has a default, so a source document may specify any subset.
/// Key names follow the source document format (`lang`, `start`, `hours`,
/// `left`, …).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ScheduleConfig {
    /// Locale for the weekday header.  Default: `en`.
    #[cfg_attr(feature = "serde", serde(rename = "lang"))]
    pub language: Language,

    /// Large heading drawn above the grid.
    pub title: Option<String>,

    /// Smaller heading drawn below the title.
    pub subtitle: Option<String>,

    /// Image path placed in the top-left corner of the page.
    #[cfg_attr(feature = "serde", serde(rename = "logo"))]
    pub logo_path: Option<String>,

    /// Rendered logo width.  Default: 9.0 cm.
    #[cfg_attr(feature = "serde", serde(rename = "logo-width"))]
    pub logo_width: f64,

    #[cfg_attr(feature = "serde", serde(rename = "left"))]
    pub margin_left: f64,

    #[cfg_attr(feature = "serde", serde(rename = "right"))]
    pub margin_right: f64,

    /// Leaves room for title, subtitle and logo.  Default: 5.0 cm.
    #[cfg_attr(feature = "serde", serde(rename = "top"))]
    pub margin_top: f64,

    #[cfg_attr(feature = "serde", serde(rename = "bottom"))]
    pub margin_bottom: f64,

    /// First hour row of the grid.  Default: 6.
    #[cfg_attr(feature = "serde", serde(rename = "start"))]
    pub start_hour: u8,

    /// Number of hour rows.  Default: 18 (06:00 through 23:00).
    #[cfg_attr(feature = "serde", serde(rename = "hours"))]
    pub hour_span: u8,

    /// Palette shuffle seed.  `None` gives a different shuffle every run.
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            language:      Language::En,
            title:         None,
            subtitle:      None,
            logo_path:     None,
            logo_width:    9.0,
            margin_left:   2.0,
            margin_right:  2.0,
            margin_top:    5.0,
            margin_bottom: 3.0,
            start_hour:    6,
            hour_span:     18,
            seed:          None,
        }
    }
}

impl ScheduleConfig {
    /// Check the hour window and page geometry.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start_hour >= DAY_HOURS {
            return Err(CoreError::Config(format!(
                "start hour {} is out of range (0–23)",
                self.start_hour
            )));
        }
        if self.hour_span == 0 {
            return Err(CoreError::Config("hour span must be at least 1".into()));
        }
        if self.start_hour as u16 + self.hour_span as u16 > DAY_HOURS as u16 {
            return Err(CoreError::Config(format!(
                "hour window {:02}:00 + {}h runs past midnight",
                self.start_hour, self.hour_span
            )));
        }

        let margins = [
            ("left", self.margin_left),
            ("right", self.margin_right),
            ("top", self.margin_top),
            ("bottom", self.margin_bottom),
            ("logo-width", self.logo_width),
        ];
        if let Some((name, v)) = margins.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(CoreError::Config(format!("{name} must be a non-negative length, got {v}")));
        }
        if let Some(path) = &self.logo_path {
            if let Some(c) = path.chars().find(|c| LOGO_PATH_RESERVED.contains(c)) {
                return Err(CoreError::Config(format!(
                    "logo path {path:?} contains reserved character {c:?}"
                )));
            }
        }
        if self.grid_width() <= 0.0 || self.grid_height() <= 0.0 {
            return Err(CoreError::Config(format!(
                "margins leave no drawable area on a {PAGE_WIDTH_CM}×{PAGE_HEIGHT_CM} cm page"
            )));
        }
        Ok(())
    }

    /// Width of the grid area between the side margins.
    #[inline]
    pub fn grid_width(&self) -> f64 {
        PAGE_WIDTH_CM - (self.margin_left + self.margin_right)
    }

    /// Height of the grid area between the top and bottom margins.
    #[inline]
    pub fn grid_height(&self) -> f64 {
        PAGE_HEIGHT_CM - (self.margin_top + self.margin_bottom)
    }
}
