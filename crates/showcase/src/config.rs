//! Configuration types for showcase rendering.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! every missing field, so an empty TOML document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Diagram scale factors, page padding and panel width.
//! - [`StyleConfig`] - Background, highlight color and font family.
//! - [`SiteConfig`] - Page title and deployment base path of the static site.
//!
//! # Example
//!
//! ```
//! # use showcase::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     architecture_scale = 2.0
//!
//!     [site]
//!     base_path = "/Adaptive-Profiler-Demo"
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.layout().architecture_scale(), 2.0);
//! assert_eq!(config.layout().flow_scale(), 1.0);
//! assert_eq!(config.site().base_url(), "/Adaptive-Profiler-Demo/");
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use showcase_core::color::Color;

use crate::ShowcaseError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Static site configuration section.
    #[serde(default)]
    site: SiteConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig, site: SiteConfig) -> Self {
        Self {
            layout,
            style,
            site,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Checks value ranges and color strings of every section.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        self.layout.validate()?;
        self.style.validate()?;
        self.site.validate()
    }
}

/// Geometry of the rendered page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Multiplier applied to flow view position hints.
    flow_scale: f32,

    /// Multiplier applied to architecture view position hints.
    architecture_scale: f32,

    /// Space around the page and between panels, in pixels.
    padding: f32,

    /// Width of the detail panel, in pixels.
    panel_width: f32,
}

impl LayoutConfig {
    pub fn new(flow_scale: f32, architecture_scale: f32, padding: f32, panel_width: f32) -> Self {
        Self {
            flow_scale,
            architecture_scale,
            padding,
            panel_width,
        }
    }

    pub fn flow_scale(&self) -> f32 {
        self.flow_scale
    }

    pub fn architecture_scale(&self) -> f32 {
        self.architecture_scale
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    fn validate(&self) -> Result<(), ShowcaseError> {
        for (name, scale) in [
            ("flow_scale", self.flow_scale),
            ("architecture_scale", self.architecture_scale),
        ] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ShowcaseError::Config(format!(
                    "layout.{name} must be a positive number, got {scale}"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ShowcaseError::Config(format!(
                "layout.padding must not be negative, got {}",
                self.padding
            )));
        }
        if !self.panel_width.is_finite() || self.panel_width < MIN_PANEL_WIDTH {
            return Err(ShowcaseError::Config(format!(
                "layout.panel_width must be at least {MIN_PANEL_WIDTH}, got {}",
                self.panel_width
            )));
        }
        Ok(())
    }
}

const MIN_PANEL_WIDTH: f32 = 200.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            flow_scale: 1.0,
            architecture_scale: 1.6,
            padding: 24.0,
            panel_width: 380.0,
        }
    }
}

/// Colors and typography.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Page background, as a color string. Renderer default when unset.
    background_color: Option<String>,

    /// Border color of highlighted nodes, as a color string.
    highlight_color: String,

    /// Font family used for all text.
    font_family: String,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed highlight [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn highlight_color(&self) -> Result<Color, String> {
        Color::new(&self.highlight_color)
            .map_err(|err| format!("Invalid highlight color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    fn validate(&self) -> Result<(), ShowcaseError> {
        self.background_color().map_err(ShowcaseError::Config)?;
        self.highlight_color().map_err(ShowcaseError::Config)?;
        if self.font_family.trim().is_empty() {
            return Err(ShowcaseError::Config(
                "style.font_family must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            highlight_color: "#F59E0B".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }
}

/// Static site settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title, also drawn as the header of every view.
    title: String,

    /// Path the site is served under, e.g. `/Adaptive-Profiler-Demo/`.
    base_path: String,
}

impl SiteConfig {
    pub fn new(title: &str, base_path: &str) -> Self {
        Self {
            title: title.to_string(),
            base_path: base_path.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the base path with exactly one trailing slash.
    pub fn base_url(&self) -> String {
        let trimmed = self.base_path.trim_end_matches('/');
        format!("{trimmed}/")
    }

    fn validate(&self) -> Result<(), ShowcaseError> {
        if !self.base_path.starts_with('/') {
            return Err(ShowcaseError::Config(format!(
                "site.base_path must start with `/`, got `{}`",
                self.base_path
            )));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Adaptive Profiling Demo".to_string(),
            base_path: "/".to_string(),
        }
    }
}
