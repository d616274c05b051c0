/// Configuration consumed when forms are built: which geometry controls are
/// offered, the color ramp behind every swatch picker, and the marker icon
/// catalogue. Shared by the editor and the host application, typically
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Offer the stroke opacity input on geometry forms.
    pub show_stroke_opacity: bool,
    /// Offer the line width input on geometry forms.
    pub show_line_width: bool,
    /// Offer the dash pattern picker on geometry forms.
    pub show_stroke: bool,
    /// Offer the fill opacity input on fillable geometry forms.
    pub show_fill_opacity: bool,
    /// Swatch colors, in display order.
    pub color_ramp: Vec<String>,
    /// Base URL marker icons are fetched from.
    pub marker_api: String,
    /// Icon names offered by the marker icon drop-down.
    pub marker_icons: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            show_stroke_opacity: true,
            show_line_width: true,
            show_stroke: true,
            show_fill_opacity: true,
            color_ramp: default_color_ramp(),
            marker_api: "https://api.tiles.mapbox.com/v3/marker/".to_string(),
            marker_icons: default_marker_icons(),
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_opacity(mut self, show: bool) -> Self {
        self.show_stroke_opacity = show;
        self
    }

    pub fn with_line_width(mut self, show: bool) -> Self {
        self.show_line_width = show;
        self
    }

    pub fn with_stroke(mut self, show: bool) -> Self {
        self.show_stroke = show;
        self
    }

    pub fn with_fill_opacity(mut self, show: bool) -> Self {
        self.show_fill_opacity = show;
        self
    }

    pub fn with_color_ramp(mut self, ramp: Vec<String>) -> Self {
        self.color_ramp = ramp;
        self
    }

    pub fn with_marker_api(mut self, base: impl Into<String>) -> Self {
        self.marker_api = base.into();
        self
    }

    pub fn with_marker_icons(mut self, icons: Vec<String>) -> Self {
        self.marker_icons = icons;
        self
    }
}

fn default_color_ramp() -> Vec<String> {
    [
        "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#34495e", "#16a085", "#27ae60", "#2980b9",
        "#8e44ad", "#2c3e50", "#f1c40f", "#e67e22", "#e74c3c", "#ecf0f1", "#95a5a6", "#f39c12",
        "#d35400", "#c0392b", "#bdc3c7", "#7f8c8d",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_marker_icons() -> Vec<String> {
    [
        "circle", "square", "triangle", "star", "cross", "embassy", "town-hall", "art-gallery",
        "bus", "rail", "airport", "harbor",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
