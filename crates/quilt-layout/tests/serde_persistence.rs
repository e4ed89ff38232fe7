#![forbid(unsafe_code)]

//! Layout configuration survives a JSON round trip and partial documents
//! fill in defaults.
//!
//!   cargo test -p quilt-layout --features serde --test serde_persistence

use quilt_layout::{Effect, LinearLayout, Orientation, Policy, Sides, SizePolicy};

#[test]
fn size_policy_json_shape() {
    let policy = SizePolicy::expanding(12).with_max(40).with_stretch(2);
    let json = serde_json::to_value(policy).unwrap();
    assert_eq!(json["policy"], "Expanding");
    assert_eq!(json["hint"], 12);
    assert_eq!(json["max"], 40);
    assert_eq!(json["stretch"], 2);
}

#[test]
fn partial_policy_uses_defaults() {
    let policy: SizePolicy = serde_json::from_str(r#"{ "policy": "Fixed", "hint": 8 }"#).unwrap();
    assert_eq!(policy.policy, Policy::Fixed);
    assert_eq!(policy.hint, 8);
    assert_eq!(policy.min, 0);
    assert_eq!(policy.max, u16::MAX);
    assert_eq!(policy.stretch, 1);
}

#[test]
fn empty_document_is_default_policy() {
    let policy: SizePolicy = serde_json::from_str("{}").unwrap();
    assert_eq!(policy, SizePolicy::default());
}

#[test]
fn unknown_category_is_rejected() {
    let err = serde_json::from_str::<SizePolicy>(r#"{ "policy": "Stretchy" }"#);
    assert!(err.is_err());
}

#[test]
fn layout_config_round_trips() {
    let layout = LinearLayout::vertical().border(Sides::new(1, 2, 1, 2));
    let json = serde_json::to_string(&layout).unwrap();
    let back: LinearLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layout);
    assert_eq!(back.primary_axis(), Orientation::Vertical);
}

#[test]
fn layout_config_defaults_to_borderless_horizontal() {
    let layout: LinearLayout = serde_json::from_str("{}").unwrap();
    assert_eq!(layout, LinearLayout::horizontal());
}

#[test]
fn effect_stream_is_serializable() {
    use quilt_core::geometry::Rect;
    use quilt_layout::LayoutChild;

    struct Pane;
    impl LayoutChild for Pane {
        fn enabled(&self) -> bool {
            true
        }
        fn width_policy(&self) -> SizePolicy {
            SizePolicy::fixed(4)
        }
        fn height_policy(&self) -> SizePolicy {
            SizePolicy::fixed(2)
        }
    }

    let mut effects: Vec<Effect> = Vec::new();
    LinearLayout::horizontal().update_geometry(Rect::new(3, 1, 10, 5), &[Pane], &mut effects);
    let json = serde_json::to_value(&effects).unwrap();
    assert_eq!(json[0]["Move"]["to"]["x"], 3);
    assert_eq!(json[1]["Resize"]["size"]["width"], 4);
    let back: Vec<Effect> = serde_json::from_str(&json.to_string()).unwrap();
    assert_eq!(back, effects);
}
