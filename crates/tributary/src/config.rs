//! Configuration types for Tributary reports.
//!
//! This module provides configuration structures that control how charts
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from TOML; every field is optional and falls back to the values
//! the report has always used.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Parameters handed to the Sankey layout.
//! - [`StyleConfig`] - Colors, link opacity, and font.
//! - [`AssetsConfig`] - Script sources embedded in HTML output.
//!
//! # Example
//!
//! ```
//! # use tributary::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [layout]
//!     width = 1200
//!     node_align = "left"
//!
//!     [style]
//!     palette = ["steelblue", "#ff7f0e"]
//!     "##,
//! ).unwrap();
//!
//! assert_eq!(config.layout().width(), 1200.0);
//! assert_eq!(config.layout().height(), 600.0);
//! assert_eq!(config.style().color_scale().unwrap().palette().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use tributary_core::color::{CATEGORY10, Color, ColorScale};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    assets: AssetsConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig, assets: AssetsConfig) -> Self {
        Self {
            layout,
            style,
            assets,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the asset configuration.
    pub fn assets(&self) -> &AssetsConfig {
        &self.assets
    }
}

/// How nodes are aligned horizontally by the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeAlign {
    /// Sinks are pushed to the rightmost column.
    #[default]
    Justify,
    Left,
    Right,
    Center,
}

impl NodeAlign {
    /// Name of the matching d3-sankey alignment function.
    pub fn d3_function(&self) -> &'static str {
        match self {
            Self::Justify => "sankeyJustify",
            Self::Left => "sankeyLeft",
            Self::Right => "sankeyRight",
            Self::Center => "sankeyCenter",
        }
    }
}

/// Parameters of the Sankey layout.
///
/// The layout extent is `[[1, 5], [width - 1, height - 5]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct LayoutConfig {
    width: f64,
    height: f64,
    node_width: f64,
    node_padding: f64,
    node_align: NodeAlign,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 928.0,
            height: 600.0,
            node_width: 15.0,
            node_padding: 10.0,
            node_align: NodeAlign::default(),
        }
    }
}

impl LayoutConfig {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn node_width(&self) -> f64 {
        self.node_width
    }

    pub fn node_padding(&self) -> f64 {
        self.node_padding
    }

    pub fn node_align(&self) -> NodeAlign {
        self.node_align
    }

    /// Check the dimensions leave room for the layout extent.
    pub fn validate(&self) -> Result<(), String> {
        let dimensions = [
            ("width", self.width, 2.0),
            ("height", self.height, 10.0),
            ("node_width", self.node_width, 0.0),
            ("node_padding", self.node_padding, 0.0),
        ];
        for (name, value, min) in dimensions {
            if !value.is_finite() || value <= min {
                return Err(format!("Invalid layout {name} in config: {value} (must be greater than {min})"));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered charts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Ordinal palette for node categories, as color strings.
    palette: Vec<String>,

    link_opacity: f32,

    background_color: Option<String>,

    /// CSS font shorthand for node labels.
    font: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: CATEGORY10.iter().map(ToString::to_string).collect(),
            link_opacity: 0.5,
            background_color: None,
            font: "10px sans-serif".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns a fresh ordinal scale over the configured palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or a color cannot be parsed.
    pub fn color_scale(&self) -> Result<ColorScale, String> {
        ColorScale::from_css(&self.palette).map_err(|err| format!("Invalid palette in config: {err}"))
    }

    /// Returns the link stroke opacity.
    ///
    /// # Errors
    ///
    /// Returns an error unless the opacity is within `0.0..=1.0`.
    pub fn link_opacity(&self) -> Result<f32, String> {
        if (0.0..=1.0).contains(&self.link_opacity) {
            Ok(self.link_opacity)
        } else {
            Err(format!(
                "Invalid link opacity in config: {} (must be between 0 and 1)",
                self.link_opacity
            ))
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font(&self) -> &str {
        &self.font
    }
}

/// Script sources loaded by HTML output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    d3_url: String,
    d3_sankey_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            d3_url: "https://cdn.jsdelivr.net/npm/d3@7".to_string(),
            d3_sankey_url: "https://cdn.jsdelivr.net/npm/d3-sankey@0.12".to_string(),
        }
    }
}

impl AssetsConfig {
    pub fn d3_url(&self) -> &str {
        &self.d3_url
    }

    pub fn d3_sankey_url(&self) -> &str {
        &self.d3_sankey_url
    }
}
