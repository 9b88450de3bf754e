//! Label → color assignment.
//!
//! The base palette is shuffled once per render pass with an injected
//! [`PaletteRng`].  Each label seen for the first time advances a counter
//! and takes `shuffled[counter % len]`; later occurrences reuse the cached
//! color.  With more distinct labels than base colors, colors repeat.

use std::collections::HashMap;
use std::fmt;

use tempo_core::{CoreError, CoreResult, PaletteRng};

/// Tint applied to every base color so labels stay readable.
pub const TINT_PERCENT: u8 = 30;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BaseColor {
    Blue,
    Red,
    Yellow,
    Orange,
    Brown,
    Violet,
}

impl BaseColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseColor::Blue   => "blue",
            BaseColor::Red    => "red",
            BaseColor::Yellow => "yellow",
            BaseColor::Orange => "orange",
            BaseColor::Brown  => "brown",
            BaseColor::Violet => "violet",
        }
    }
}

/// Unshuffled base palette.
pub const BASE_PALETTE: [BaseColor; 6] = [
    BaseColor::Blue,
    BaseColor::Red,
    BaseColor::Yellow,
    BaseColor::Orange,
    BaseColor::Brown,
    BaseColor::Violet,
];

/// A base color mixed with white: `tint` percent of the base.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub base: BaseColor,
    pub tint: u8,
}

impl fmt::Display for Color {
    /// xcolor mix syntax, e.g. `blue!30`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.base.as_str(), self.tint)
    }
}

// ── PaletteAssigner ───────────────────────────────────────────────────────────

/// Per-render-pass label → color cache.
pub struct PaletteAssigner {
    shuffled: Vec<BaseColor>,
    counter:  usize,
    assigned: HashMap<String, Color>,
}

impl PaletteAssigner {
    /// Shuffle `palette` once with `rng`.  Fails if `palette` is empty.
    pub fn new(palette: &[BaseColor], rng: &mut PaletteRng) -> CoreResult<Self> {
        if palette.is_empty() {
            return Err(CoreError::Config("palette must not be empty".into()));
        }
        Ok(Self::shuffled(palette, rng))
    }

    /// [`BASE_PALETTE`] shuffled with `rng`.
    pub fn with_base_palette(rng: &mut PaletteRng) -> Self {
        Self::shuffled(&BASE_PALETTE, rng)
    }

    fn shuffled(palette: &[BaseColor], rng: &mut PaletteRng) -> Self {
        let mut shuffled = palette.to_vec();
        rng.shuffle(&mut shuffled);
        Self { shuffled, counter: 0, assigned: HashMap::new() }
    }

    /// The palette order established by the shuffle.
    pub fn order(&self) -> &[BaseColor] {
        &self.shuffled
    }

    /// Color for `label`, assigning the next palette slot on first sight.
    pub fn color_for(&mut self, label: &str) -> Color {
        if let Some(&c) = self.assigned.get(label) {
            return c;
        }
        self.counter += 1;
        let base = self.shuffled[self.counter % self.shuffled.len()];
        let color = Color { base, tint: TINT_PERCENT };
        self.assigned.insert(label.to_owned(), color);
        color
    }

    /// Number of distinct labels seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
