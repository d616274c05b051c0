use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{marker::MarkerIcon, meta::MetaSchema, style::PathStyle};

/// Identifier of a shape within a [`MapDocument`]. Assigned by the document
/// when the shape is inserted; stable for the lifetime of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geometry classification of a shape. The form builder only cares about two
/// things: whether the kind is `Marker` (marker form instead of geometry
/// form) and whether it exposes a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Polyline,
    Polygon,
    Rectangle,
    Circle,
    Marker,
    Group,
}

impl ShapeKind {
    /// Whether shapes of this kind carry a fill color and fill opacity in
    /// addition to their stroke.
    pub fn has_fill(self) -> bool {
        matches!(
            self,
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Circle | ShapeKind::Group
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Polyline => "polyline",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Marker => "marker",
            ShapeKind::Group => "group",
        }
    }
}

/// An editable map feature: geometry kind, path style, a free-form property
/// bag and, for markers, the resolved icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    #[serde(skip)]
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "PathStyle::is_unset")]
    pub style: PathStyle,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<MarkerIcon>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: ShapeId::default(),
            name: None,
            kind,
            style: PathStyle::default(),
            properties: IndexMap::new(),
            meta: None,
            icon: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_meta(mut self, meta: MetaSchema) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Truthiness check over the property bag: absent keys, `null`, `false`,
    /// `0`, and the empty string all count as "not set".
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.get(name).is_some_and(is_truthy)
    }

    pub fn numeric_property(&self, name: &str) -> Option<f64> {
        self.properties.get(name).and_then(Value::as_f64)
    }

    pub fn text_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    /// Human-readable handle used in list panes, status messages and errors.
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} #{}", self.kind.label(), self.id),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Owning store for every shape on the map. The editor never holds shape
/// references; it addresses shapes through the document by [`ShapeId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Shape>", into = "Vec<Shape>")]
pub struct MapDocument {
    shapes: Vec<Shape>,
    next_id: u64,
}

impl MapDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from loaded shapes, assigning fresh ids in order.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        let mut document = Self::new();
        for shape in shapes {
            document.insert(shape);
        }
        document
    }

    /// Adds a shape and returns the id the document assigned to it.
    pub fn insert(&mut self, mut shape: Shape) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        shape.id = id;
        self.shapes.push(shape);
        id
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl From<Vec<Shape>> for MapDocument {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::from_shapes(shapes)
    }
}

impl From<MapDocument> for Vec<Shape> {
    fn from(document: MapDocument) -> Self {
        document.shapes
    }
}
