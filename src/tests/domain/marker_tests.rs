use crate::domain::{MarkerClass, MarkerSize, MarkerStyleState, Shape, ShapeKind};

const API: &str = "https://api.tiles.mapbox.com/v3/marker/";

#[test]
fn resolves_icon_url_from_complete_state() {
    let state = MarkerStyleState {
        size: Some(MarkerSize::L),
        color: Some("ff8800".to_string()),
        icon: Some("park".to_string()),
    };
    let icon = state.resolve_icon(API).expect("complete state");
    assert_eq!(
        icon.url,
        "https://api.tiles.mapbox.com/v3/marker/pin-l-park+ff8800.png"
    );
    assert_eq!(icon.size, (35, 90));
}

#[test]
fn strips_hash_from_color_in_url() {
    let state = MarkerStyleState {
        size: Some(MarkerSize::S),
        color: Some("#e74c3c".to_string()),
        icon: Some("camera".to_string()),
    };
    let icon = state.resolve_icon(API).expect("complete state");
    assert_eq!(
        icon.url,
        "https://api.tiles.mapbox.com/v3/marker/pin-s-camera+e74c3c.png"
    );
}

#[test]
fn incomplete_state_resolves_to_none() {
    let no_icon = MarkerStyleState::default();
    assert_eq!(no_icon.resolve_icon(API), None);

    let empty_color = MarkerStyleState {
        size: Some(MarkerSize::M),
        color: Some(String::new()),
        icon: Some("park".to_string()),
    };
    assert_eq!(empty_color.resolve_icon(API), None);

    let no_size = MarkerStyleState {
        size: None,
        color: Some("48a".to_string()),
        icon: Some("park".to_string()),
    };
    assert_eq!(no_size.resolve_icon(API), None);
}

#[test]
fn icon_dimensions_follow_size() {
    assert_eq!(MarkerSize::S.icon_dimensions(), (20, 50));
    assert_eq!(MarkerSize::M.icon_dimensions(), (30, 70));
    assert_eq!(MarkerSize::L.icon_dimensions(), (35, 90));
}

#[test]
fn default_state_is_medium_and_preset_color() {
    let state = MarkerStyleState::default();
    assert_eq!(state.size, Some(MarkerSize::M));
    assert_eq!(state.color.as_deref(), Some("48a"));
    assert_eq!(state.icon, None);
}

#[test]
fn text_property_outranks_shape_flags() {
    let shape = Shape::new(ShapeKind::Marker)
        .with_property("text", "gate")
        .with_property("rectangle", true)
        .with_property("ellipse", true);
    assert_eq!(MarkerClass::of(&shape), MarkerClass::Text);
}

#[test]
fn rectangle_outranks_ellipse() {
    let shape = Shape::new(ShapeKind::Marker)
        .with_property("rectangle", true)
        .with_property("ellipse", true);
    assert_eq!(MarkerClass::of(&shape), MarkerClass::Rectangle);
}

#[test]
fn falsy_flags_leave_a_plain_marker() {
    let shape = Shape::new(ShapeKind::Marker)
        .with_property("text", "")
        .with_property("rectangle", false)
        .with_property("ellipse", 0);
    assert_eq!(MarkerClass::of(&shape), MarkerClass::Plain);
}
