use crate::domain::MetaProperty;

/// What a control's report does to the selected shape. Assigned when the
/// form is built; the dispatcher pairs each report with the action of the
/// control that produced it.
#[derive(Debug, Clone)]
pub(crate) enum ControlAction {
    /// Merge the stroke color into the path style.
    StrokeColor,
    /// Merge the fill color into the path style.
    FillColor,
    /// Merge the stroke opacity.
    Opacity,
    /// Merge the fill opacity.
    FillOpacity,
    /// Merge the line width. Reports outside `1..20` are dropped.
    LineWidth,
    /// Merge the dash pattern.
    DashPattern,
    /// Overwrite the `text` feature property.
    Text,
    /// Overwrite a numeric feature property; reports outside
    /// `min..=max` are dropped.
    NumericProperty { name: String, min: f64, max: f64 },
    /// Write a metadata property and run the refresh cycle.
    Meta(MetaProperty),
    /// Record the marker icon name and recompute the icon.
    MarkerIcon,
    /// Record the marker color, mirror it into the `color` property and
    /// recompute the icon.
    MarkerColor,
    /// Record the marker size and recompute the icon.
    MarkerSize,
    /// Flip the marker between its rectangle and ellipse variants.
    MarkerType,
}
