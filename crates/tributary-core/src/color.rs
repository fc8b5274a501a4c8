//! Color handling for Tributary diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`ColorScale`] that assigns palette colors to
//! node categories.

use std::str::FromStr;

use color::DynamicColor;
use indexmap::IndexMap;
use log::trace;
use serde::{Serialize, Serializer};

/// The ten-color categorical palette used by default (d3's `schemeCategory10`).
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use tributary_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An ordinal scale mapping category keys to palette colors.
///
/// Keys receive colors in the order they are first requested, and the palette
/// wraps around once every entry has been handed out. The same key always maps
/// to the same color for the lifetime of the scale.
#[derive(Debug, Clone)]
pub struct ColorScale {
    palette: Vec<Color>,
    assigned: IndexMap<String, usize>,
}

impl ColorScale {
    /// Create a scale over the given palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty.
    pub fn new(palette: Vec<Color>) -> Result<Self, String> {
        if palette.is_empty() {
            return Err("color palette must contain at least one color".to_string());
        }
        Ok(Self {
            palette,
            assigned: IndexMap::new(),
        })
    }

    /// Create a scale from CSS color strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a valid CSS color or the list is empty.
    pub fn from_css<S: AsRef<str>>(colors: &[S]) -> Result<Self, String> {
        let palette = colors
            .iter()
            .map(|color| Color::new(color.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(palette)
    }

    /// Create a scale over [`CATEGORY10`].
    pub fn category10() -> Self {
        Self::from_css(&CATEGORY10).expect("CATEGORY10 entries are valid CSS colors")
    }

    /// Return the color for `key`, assigning the next palette entry on first use.
    pub fn color_for(&mut self, key: &str) -> Color {
        let next = self.assigned.len() % self.palette.len();
        let index = *self.assigned.entry(key.to_string()).or_insert_with(|| {
            trace!(key = key, index = next; "Assigned palette color");
            next
        });
        self.palette[index]
    }

    /// The colors this scale cycles through.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no key has been assigned a color yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::category10()
    }
}
