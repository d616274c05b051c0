use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Describes which feature properties of a shape are user-editable and which
/// control edits each one. Entry order is preserved; the metadata form lists
/// controls in exactly this order.
///
/// The wire form is a JSON object keyed by property name:
///
/// ```json
/// {
///   "capacity": { "displayName": "Capacity", "type": { "kind": "number", "max": 500 } },
///   "open": { "displayName": "Open to public", "type": { "kind": "boolean" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetaSchema {
    entries: IndexMap<String, MetaProperty>,
}

impl MetaSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, keyed by its property name. Replaces any previous
    /// descriptor for the same property.
    pub fn insert(&mut self, property: MetaProperty) {
        self.entries.insert(property.name.clone(), property);
    }

    pub fn with(mut self, property: MetaProperty) -> Self {
        self.insert(property);
        self
    }

    pub fn get(&self, name: &str) -> Option<&MetaProperty> {
        self.entries.get(name)
    }

    pub fn properties(&self) -> impl Iterator<Item = &MetaProperty> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Property names live in the map keys on the wire; copy them into the
// descriptors so a `MetaProperty` is self-contained once handed out.
impl<'de> Deserialize<'de> for MetaSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut entries = IndexMap::<String, MetaProperty>::deserialize(deserializer)?;
        for (name, property) in entries.iter_mut() {
            property.name = name.clone();
        }
        Ok(Self { entries })
    }
}

/// A single editable property: its key in the property bag, the label shown
/// next to its control, and the control type. Descriptors without a display
/// name are skipped by the metadata form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProperty {
    #[serde(default, skip_serializing)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: MetaKind,
}

impl MetaProperty {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, kind: MetaKind) -> Self {
        Self {
            name: name.into(),
            display_name: Some(display_name.into()),
            kind,
        }
    }

    /// A descriptor with no display name: the property is known to the
    /// schema but never surfaced in the form.
    pub fn hidden(name: impl Into<String>, kind: MetaKind) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind,
        }
    }
}

/// Control type of a metadata property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetaKind {
    /// Color swatch picker; stores a hex color string.
    Color,
    /// Numeric input; `min`, `max` and `step` drive the arrow-key stepping
    /// and its clamping, typed values are stored as-is.
    Number {
        #[serde(default)]
        min: f64,
        #[serde(default = "default_max")]
        max: f64,
        #[serde(default = "default_step")]
        step: f64,
    },
    /// Checkbox; stores JSON `true`/`false`.
    Boolean,
    /// Free text, or a drop-down when `allowed` lists the choices.
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<SelectChoice>>,
    },
}

fn default_max() -> f64 {
    100.0
}

fn default_step() -> f64 {
    1.0
}

impl MetaKind {
    pub fn number(min: f64, max: f64, step: f64) -> Self {
        MetaKind::Number { min, max, step }
    }

    pub fn text() -> Self {
        MetaKind::String { allowed: None }
    }

    pub fn choices(allowed: Vec<SelectChoice>) -> Self {
        MetaKind::String {
            allowed: Some(allowed),
        }
    }
}

/// One option of an enumerated string property. A plain string doubles as
/// both label and stored value; a labeled pair separates the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectChoice {
    Plain(String),
    Labeled { label: String, value: String },
}

impl SelectChoice {
    pub fn plain(value: impl Into<String>) -> Self {
        SelectChoice::Plain(value.into())
    }

    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        SelectChoice::Labeled {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Text shown in the drop-down.
    pub fn label(&self) -> &str {
        match self {
            SelectChoice::Plain(value) => value,
            SelectChoice::Labeled { label, .. } => label,
        }
    }

    /// Value written into the property bag when chosen.
    pub fn value(&self) -> &str {
        match self {
            SelectChoice::Plain(value) => value,
            SelectChoice::Labeled { value, .. } => value,
        }
    }
}
