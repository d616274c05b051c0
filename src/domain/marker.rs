use serde::{Deserialize, Serialize};

use super::shape::Shape;

/// Discrete marker sizes offered by the size picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    S,
    M,
    L,
}

impl MarkerSize {
    pub const ALL: [MarkerSize; 3] = [MarkerSize::S, MarkerSize::M, MarkerSize::L];

    /// Icon pixel dimensions (width, height) for this size.
    pub fn icon_dimensions(self) -> (u32, u32) {
        match self {
            MarkerSize::S => (20, 50),
            MarkerSize::M => (30, 70),
            MarkerSize::L => (35, 90),
        }
    }

    /// Size code embedded in icon URLs.
    pub fn code(self) -> &'static str {
        match self {
            MarkerSize::S => "s",
            MarkerSize::M => "m",
            MarkerSize::L => "l",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerSize::S => "Small",
            MarkerSize::M => "Medium",
            MarkerSize::L => "Large",
        }
    }
}

/// A resolved marker icon: the image URL plus its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub url: String,
    pub size: (u32, u32),
}

/// Marker appearance accumulated across edits. The state outlives individual
/// selections: picking a color on one marker and then an icon on another
/// combines both into the second marker's icon.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyleState {
    pub size: Option<MarkerSize>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl Default for MarkerStyleState {
    fn default() -> Self {
        Self {
            size: Some(MarkerSize::M),
            color: Some("48a".to_string()),
            icon: None,
        }
    }
}

impl MarkerStyleState {
    /// Builds the icon for the current state, or `None` while any of size,
    /// icon name or color is still missing or empty.
    pub fn resolve_icon(&self, api_base: &str) -> Option<MarkerIcon> {
        let size = self.size?;
        let icon = self.icon.as_deref().filter(|name| !name.is_empty())?;
        let color = self.color.as_deref().filter(|color| !color.is_empty())?;
        let color = color.trim_start_matches('#');
        Some(MarkerIcon {
            url: format!("{}pin-{}-{}+{}.png", api_base, size.code(), icon, color),
            size: size.icon_dimensions(),
        })
    }
}

/// Sub-classification of marker shapes, derived from the property bag. The
/// first truthy property wins: `text` over `rectangle` over `ellipse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    Text,
    Rectangle,
    Ellipse,
    Plain,
}

impl MarkerClass {
    pub fn of(shape: &Shape) -> Self {
        if shape.has_property("text") {
            MarkerClass::Text
        } else if shape.has_property("rectangle") {
            MarkerClass::Rectangle
        } else if shape.has_property("ellipse") {
            MarkerClass::Ellipse
        } else {
            MarkerClass::Plain
        }
    }
}
