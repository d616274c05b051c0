use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::{
    MarkerClass, MarkerStyleState, MetaKind, MetaProperty, SelectChoice, Shape, ShapeId,
    ShapeKind, StyleUpdate, normalize_color,
};

use super::{
    actions::ControlAction,
    controls::{
        BoolInput, ColorPicker, ControlInput, ControlWidget, NumberInput, Reported, SelectInput,
        SizePicker, StrokePicker, TextInput,
    },
    convert::{parse_number, value_to_string},
    error::MissingMetadataError,
    options::FormOptions,
    panel::FormPanel,
};

/// Notification that a setter changed a shape. One fires per setter call,
/// regardless of whether the value actually differed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChanged {
    pub shape: ShapeId,
}

/// Callback invoked after a metadata property is written but before the
/// registered controls are refreshed from the model. May mutate the shape
/// further; the refresh pass picks those edits up.
pub type MetaChangedHook = Box<dyn FnMut(&mut Shape, &MetaProperty, Option<Value>, &Value)>;

/// Builds the geometry, metadata and marker forms for the selected shape
/// and routes control reports back onto it.
///
/// The editor never owns shapes. It remembers the selected [`ShapeId`] and
/// takes `&mut Shape` at every call that writes, so the host keeps full
/// ownership of its document.
pub struct StyleEditor {
    options: Arc<FormOptions>,
    panel: FormPanel,
    current: Option<ShapeId>,
    marker_style: MarkerStyleState,
    refresh_registry: Vec<RefreshBinding>,
    on_meta_changed: Option<MetaChangedHook>,
    events: Vec<StyleChanged>,
}

/// Registry entry pairing a refreshable control with the property it
/// mirrors. Registered in form build order; refreshed in the same order.
#[derive(Debug, Clone)]
struct RefreshBinding {
    control: usize,
    property: String,
}

impl StyleEditor {
    pub fn new(options: Arc<FormOptions>) -> Self {
        Self {
            options,
            panel: FormPanel::default(),
            current: None,
            marker_style: MarkerStyleState::default(),
            refresh_registry: Vec::new(),
            on_meta_changed: None,
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn panel(&self) -> &FormPanel {
        &self.panel
    }

    pub fn current(&self) -> Option<ShapeId> {
        self.current
    }

    /// Marker appearance accumulated across edits. Not reset on selection
    /// changes; a color picked on one marker carries over to the icon
    /// computed for the next.
    pub fn marker_style(&self) -> &MarkerStyleState {
        &self.marker_style
    }

    pub fn focus_next(&mut self) {
        self.panel.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.panel.focus_prev();
    }

    /// Registers the hook run after every metadata write.
    pub fn set_meta_changed_hook(
        &mut self,
        hook: impl FnMut(&mut Shape, &MetaProperty, Option<Value>, &Value) + 'static,
    ) {
        self.on_meta_changed = Some(Box::new(hook));
    }

    pub(crate) fn install_meta_hook(&mut self, hook: MetaChangedHook) {
        self.on_meta_changed = Some(hook);
    }

    /// Selects a shape and builds the form matching its kind: the marker
    /// form for markers, the geometry form for everything else.
    pub fn select(&mut self, shape: &Shape) {
        match shape.kind {
            ShapeKind::Marker => self.build_marker_form(shape),
            _ => self.build_geometry_form(shape),
        }
    }

    /// Builds the path style form: stroke color, then the gated opacity,
    /// line width and dash pattern controls, then the fill pair for fillable
    /// kinds.
    pub fn build_geometry_form(&mut self, shape: &Shape) {
        debug!(shape = %shape.id, kind = shape.kind.label(), "building geometry form");
        self.begin_form(shape);
        let options = Arc::clone(&self.options);

        self.push_color_picker("Color:", ControlAction::StrokeColor);
        if options.show_stroke_opacity {
            self.push_number(
                "Opacity:",
                shape.style.effective_opacity().to_string(),
                0.0,
                1.0,
                0.1,
                ControlAction::Opacity,
            );
        }
        if options.show_line_width {
            self.push_number(
                "Linewidth:",
                shape.style.effective_weight().to_string(),
                0.0,
                20.0,
                1.0,
                ControlAction::LineWidth,
            );
        }
        if options.show_stroke {
            self.panel.push(
                "Line Stroke:",
                ControlWidget::Stroke(StrokePicker::new()),
                ControlAction::DashPattern,
            );
        }

        if shape.kind.has_fill() {
            self.push_color_picker("Fill Color:", ControlAction::FillColor);
            if options.show_fill_opacity {
                self.push_number(
                    "Fill Opacity:",
                    shape.style.effective_fill_opacity().to_string(),
                    0.0,
                    1.0,
                    0.1,
                    ControlAction::FillOpacity,
                );
            }
        }
    }

    /// Builds one control per metadata descriptor that carries a display
    /// name, in schema order. Numeric controls are additionally entered into
    /// the refresh registry so hook edits flow back into the form.
    ///
    /// Fails without touching the panel when the shape has no metadata.
    pub fn build_meta_form(&mut self, shape: &Shape) -> Result<(), MissingMetadataError> {
        let Some(meta) = shape.meta.as_ref() else {
            return Err(MissingMetadataError::new(shape.display_label()));
        };

        debug!(shape = %shape.id, properties = meta.len(), "building metadata form");
        self.begin_form(shape);
        for property in meta.properties() {
            let Some(display_name) = property.display_name.clone() else {
                continue;
            };
            let current = shape.properties.get(&property.name);
            let action = ControlAction::Meta(property.clone());

            let index = match &property.kind {
                MetaKind::Color => self.push_color_picker(display_name, action),
                MetaKind::Number { min, max, step } => self.push_number(
                    display_name,
                    current.map(value_to_string).unwrap_or_default(),
                    *min,
                    *max,
                    *step,
                    action,
                ),
                MetaKind::Boolean => self.panel.push(
                    display_name,
                    ControlWidget::Bool(BoolInput::new(current)),
                    action,
                ),
                MetaKind::String {
                    allowed: Some(choices),
                } => self.panel.push(
                    display_name,
                    ControlWidget::Select(SelectInput::new(
                        choices.clone(),
                        current.and_then(Value::as_str),
                    )),
                    action,
                ),
                MetaKind::String { allowed: None } => self.panel.push(
                    display_name,
                    ControlWidget::Text(TextInput::new(
                        current.map(value_to_string).unwrap_or_default(),
                    )),
                    action,
                ),
            };

            if self.panel.controls()[index].widget.supports_refresh() {
                self.refresh_registry.push(RefreshBinding {
                    control: index,
                    property: property.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Builds the marker appearance form. Text markers get a text edit;
    /// plain markers an icon drop-down; rectangle and ellipse markers a type
    /// drop-down. Every marker gets the color picker. The size row is a
    /// numeric editor when the shape carries a `size` property, otherwise
    /// the size picker (text markers size to their text and get neither).
    pub fn build_marker_form(&mut self, shape: &Shape) {
        debug!(shape = %shape.id, "building marker form");
        self.begin_form(shape);
        let class = MarkerClass::of(shape);

        if class == MarkerClass::Text {
            self.panel.push(
                "Text:",
                ControlWidget::Text(TextInput::new(
                    shape
                        .properties
                        .get("text")
                        .map(value_to_string)
                        .unwrap_or_default(),
                )),
                ControlAction::Text,
            );
        }

        match class {
            MarkerClass::Plain => {
                let choices = self
                    .options
                    .marker_icons
                    .iter()
                    .map(SelectChoice::plain)
                    .collect::<Vec<_>>();
                self.panel.push(
                    "Icon:",
                    ControlWidget::Select(SelectInput::new(choices, None)),
                    ControlAction::MarkerIcon,
                );
            }
            MarkerClass::Rectangle | MarkerClass::Ellipse => {
                let choices = vec![
                    SelectChoice::labeled("Rectangle", "rectangle"),
                    SelectChoice::labeled("Ellipse", "ellipse"),
                ];
                let current = if class == MarkerClass::Ellipse {
                    "ellipse"
                } else {
                    "rectangle"
                };
                self.panel.push(
                    "Type:",
                    ControlWidget::Select(SelectInput::new(choices, Some(current))),
                    ControlAction::MarkerType,
                );
            }
            _ => {}
        }

        self.push_color_picker("Color:", ControlAction::MarkerColor);

        if shape.has_property("size") {
            self.push_number(
                "Size:",
                shape
                    .properties
                    .get("size")
                    .map(value_to_string)
                    .unwrap_or_default(),
                0.0,
                500.0,
                10.0,
                ControlAction::NumericProperty {
                    name: "size".to_string(),
                    min: 0.0,
                    max: 500.0,
                },
            );
        } else if class != MarkerClass::Text {
            self.panel.push(
                "Size:",
                ControlWidget::Size(SizePicker::new()),
                ControlAction::MarkerSize,
            );
        }
    }

    /// Feeds an interaction to the focused control and applies its report.
    /// Returns whether the control changed at all.
    pub fn handle_input(&mut self, shape: &mut Shape, input: ControlInput) -> bool {
        let focus = self.panel.focus();
        self.apply_input(shape, focus, input)
    }

    /// Same as [`StyleEditor::handle_input`] for an explicit control index.
    pub fn apply_input(&mut self, shape: &mut Shape, index: usize, input: ControlInput) -> bool {
        let absorbing = matches!(input, ControlInput::Edit(_) | ControlInput::Move(_));
        let Some(control) = self.panel.control_mut(index) else {
            return false;
        };
        let action = control.action.clone();
        let Some(report) = control.widget.handle(input) else {
            return absorbing;
        };
        self.apply_report(shape, action, report);
        true
    }

    fn apply_report(&mut self, shape: &mut Shape, action: ControlAction, report: Reported) {
        match (action, report) {
            (ControlAction::StrokeColor, Reported::Color(color)) => {
                self.set_style(shape, StyleUpdate::Color(normalize_color(&color)));
            }
            (ControlAction::FillColor, Reported::Color(color)) => {
                self.set_style(shape, StyleUpdate::FillColor(normalize_color(&color)));
            }
            (ControlAction::Opacity, Reported::Number(raw)) => {
                if let Some(opacity) = parse_number(&raw) {
                    self.set_style(shape, StyleUpdate::Opacity(opacity));
                }
            }
            (ControlAction::FillOpacity, Reported::Number(raw)) => {
                if let Some(opacity) = parse_number(&raw) {
                    self.set_style(shape, StyleUpdate::FillOpacity(opacity));
                }
            }
            (ControlAction::LineWidth, Reported::Number(raw)) => {
                // Half-open range: a width of exactly 20 is rejected.
                if let Some(weight) = parse_number(&raw) {
                    if (1.0..20.0).contains(&weight) {
                        self.set_style(shape, StyleUpdate::Weight(weight));
                    }
                }
            }
            (ControlAction::DashPattern, Reported::Dash(pattern)) => {
                self.set_style(shape, StyleUpdate::DashArray(pattern));
            }
            (ControlAction::Text, Reported::Text(text)) => {
                self.set_text(shape, &text);
            }
            (ControlAction::NumericProperty { name, min, max }, Reported::Number(raw)) => {
                if let Some(value) = parse_number(&raw) {
                    if value >= min && value <= max {
                        if let Some(number) = serde_json::Number::from_f64(value) {
                            self.set_property(shape, &name, Value::Number(number));
                        }
                    }
                }
            }
            (ControlAction::Meta(property), report) => {
                self.apply_meta_edit(shape, &property, report);
            }
            (ControlAction::MarkerIcon, Reported::Choice(icon)) => {
                self.marker_style.icon = Some(icon);
                self.set_new_marker(shape);
            }
            (ControlAction::MarkerColor, Reported::Color(color)) => {
                let hex = normalize_color(&color);
                self.marker_style.color = Some(hex.trim_start_matches('#').to_string());
                shape.properties.insert("color".to_string(), Value::String(hex));
                self.set_new_marker(shape);
            }
            (ControlAction::MarkerSize, Reported::Size(size)) => {
                self.marker_style.size = Some(size);
                self.set_new_marker(shape);
            }
            (ControlAction::MarkerType, Reported::Choice(variant)) => {
                if variant == "ellipse" {
                    shape.properties.shift_remove("rectangle");
                    shape
                        .properties
                        .insert("ellipse".to_string(), Value::Bool(true));
                } else {
                    shape.properties.shift_remove("ellipse");
                    shape
                        .properties
                        .insert("rectangle".to_string(), Value::Bool(true));
                }
                self.set_new_marker(shape);
            }
            _ => {}
        }
    }

    /// Writes one metadata property, runs the changed hook, refreshes the
    /// registered controls from the model and fires the change event.
    fn apply_meta_edit(&mut self, shape: &mut Shape, property: &MetaProperty, report: Reported) {
        let new_value = match (&property.kind, report) {
            (MetaKind::Color, Reported::Color(color)) => Value::String(normalize_color(&color)),
            (MetaKind::Number { .. }, Reported::Number(raw)) => {
                let Some(number) = parse_number(&raw).and_then(serde_json::Number::from_f64) else {
                    return;
                };
                Value::Number(number)
            }
            (MetaKind::Boolean, Reported::Flag(flag)) => Value::Bool(flag),
            (MetaKind::String { .. }, Reported::Choice(value)) => Value::String(value),
            (MetaKind::String { .. }, Reported::Text(text)) => Value::String(text),
            _ => return,
        };

        let previous = shape
            .properties
            .insert(property.name.clone(), new_value.clone());
        debug!(shape = %shape.id, property = %property.name, "metadata property changed");

        if let Some(hook) = self.on_meta_changed.as_mut() {
            hook(shape, property, previous, &new_value);
        }
        // The hook may have rewritten derived properties; move every value
        // from the model back into the registered controls before firing.
        self.refresh_from(shape);
        self.fire(shape);
    }

    /// Merges one style key into the shape and fires the change event.
    pub fn set_style(&mut self, shape: &mut Shape, update: StyleUpdate) {
        debug!(shape = %shape.id, key = update.key(), "style updated");
        shape.style.apply(update);
        self.fire(shape);
    }

    /// Overwrites the `text` feature property and fires the change event.
    pub fn set_text(&mut self, shape: &mut Shape, text: &str) {
        shape
            .properties
            .insert("text".to_string(), Value::String(text.to_string()));
        self.fire(shape);
    }

    /// Overwrites an arbitrary feature property and fires the change event.
    pub fn set_property(&mut self, shape: &mut Shape, name: &str, value: Value) {
        debug!(shape = %shape.id, property = name, "property updated");
        shape.properties.insert(name.to_string(), value);
        self.fire(shape);
    }

    /// Recomputes the marker icon from the accumulated marker style. The
    /// icon is only replaced once size, icon name and color are all known;
    /// the change event fires either way.
    pub fn set_new_marker(&mut self, shape: &mut Shape) {
        if let Some(icon) = self.marker_style.resolve_icon(&self.options.marker_api) {
            debug!(shape = %shape.id, url = %icon.url, "marker icon updated");
            shape.icon = Some(icon);
        }
        self.fire(shape);
    }

    /// Drains the change notifications accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<StyleChanged> {
        std::mem::take(&mut self.events)
    }

    fn begin_form(&mut self, shape: &Shape) {
        self.current = Some(shape.id);
        self.panel.clear();
        self.refresh_registry.clear();
    }

    fn refresh_from(&mut self, shape: &Shape) {
        let bindings = std::mem::take(&mut self.refresh_registry);
        for binding in &bindings {
            if let Some(control) = self.panel.control_mut(binding.control) {
                control.widget.refresh(shape.properties.get(&binding.property));
            }
        }
        self.refresh_registry = bindings;
    }

    fn fire(&mut self, shape: &Shape) {
        self.events.push(StyleChanged { shape: shape.id });
    }

    fn push_color_picker(&mut self, label: impl Into<String>, action: ControlAction) -> usize {
        let picker = ColorPicker::new(&self.options.color_ramp);
        self.panel.push(label, ControlWidget::Color(picker), action)
    }

    fn push_number(
        &mut self,
        label: impl Into<String>,
        seed: String,
        min: f64,
        max: f64,
        step: f64,
        action: ControlAction,
    ) -> usize {
        let input = NumberInput::new(seed, min, max, step);
        self.panel.push(label, ControlWidget::Number(input), action)
    }
}
