use serde::{Deserialize, Serialize};

/// Stroke color applied when a shape does not set one.
pub const DEFAULT_STROKE_COLOR: &str = "#3388ff";

/// Path rendering attributes of a shape. Every field is optional; unset
/// fields fall back to the renderer defaults exposed by the `effective_*`
/// accessors. Field names follow the wire format map documents use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

/// A style patch carrying exactly one key. Setting a style never replaces
/// the whole [`PathStyle`]; patches are merged one key at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Color(String),
    Opacity(f64),
    Weight(f64),
    DashArray(String),
    FillColor(String),
    FillOpacity(f64),
}

impl StyleUpdate {
    pub fn key(&self) -> &'static str {
        match self {
            StyleUpdate::Color(_) => "color",
            StyleUpdate::Opacity(_) => "opacity",
            StyleUpdate::Weight(_) => "weight",
            StyleUpdate::DashArray(_) => "dashArray",
            StyleUpdate::FillColor(_) => "fillColor",
            StyleUpdate::FillOpacity(_) => "fillOpacity",
        }
    }
}

impl PathStyle {
    /// Merges one key into the style, leaving every other key untouched.
    pub fn apply(&mut self, update: StyleUpdate) {
        match update {
            StyleUpdate::Color(color) => self.color = Some(color),
            StyleUpdate::Opacity(opacity) => self.opacity = Some(opacity),
            StyleUpdate::Weight(weight) => self.weight = Some(weight),
            StyleUpdate::DashArray(pattern) => self.dash_array = Some(pattern),
            StyleUpdate::FillColor(color) => self.fill_color = Some(color),
            StyleUpdate::FillOpacity(opacity) => self.fill_opacity = Some(opacity),
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == PathStyle::default()
    }

    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_STROKE_COLOR)
    }

    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(3.0)
    }

    /// Fill color defaults to the stroke color, matching how map renderers
    /// treat paths without an explicit fill.
    pub fn effective_fill_color(&self) -> &str {
        self.fill_color
            .as_deref()
            .unwrap_or_else(|| self.effective_color())
    }

    pub fn effective_fill_opacity(&self) -> f64 {
        self.fill_opacity.unwrap_or(0.2)
    }
}
