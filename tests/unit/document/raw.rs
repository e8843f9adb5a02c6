use super::*;
use serde_json::json;

#[test]
fn plain_text_joins_paragraphs_with_newlines() {
    let frame = RawTextFrame {
        paragraphs: vec![
            RawParagraph {
                runs: vec![
                    RawRun {
                        text: "Hello ".to_owned(),
                        ..RawRun::default()
                    },
                    RawRun {
                        text: "world".to_owned(),
                        ..RawRun::default()
                    },
                ],
            },
            RawParagraph {
                runs: vec![RawRun {
                    text: "second".to_owned(),
                    ..RawRun::default()
                }],
            },
        ],
    };
    assert_eq!(frame.plain_text(), "Hello world\nsecond");
    assert_eq!(frame.runs().count(), 3);
}

#[test]
fn empty_text_frames_are_not_text() {
    let mut shape = RawShape::new(4, "Rectangle 3", ShapeCategory::AutoShape);
    assert_eq!(shape.non_empty_text(), None);
    shape.text = Some(RawTextFrame::default());
    assert_eq!(shape.non_empty_text(), None);
}

#[test]
fn shape_deserializes_with_defaults() {
    let shape: RawShape = serde_json::from_value(json!({
        "id": 7,
        "name": "Oval 6",
        "category": "auto_shape",
        "auto_shape_type": "oval",
        "bbox": { "left": 0, "top": 0, "width": 914400, "height": 914400 },
        "fill": { "scheme": "accent1", "lum_mod": 75000 }
    }))
    .unwrap();
    assert_eq!(shape.auto_shape_type, Some(AutoShapeType::Oval));
    assert_eq!(shape.bbox.unwrap().width, Emu(914_400));
    let fill = shape.fill.unwrap();
    assert_eq!(fill.lum_mod, Some(75_000));
    assert!(!shape.flip_h);
    assert!(shape.text.is_none());
}

#[test]
fn deck_frame_requires_positive_slide_size() {
    let deck: Deck = serde_json::from_value(json!({
        "slide_width": 9144000,
        "slide_height": 0,
        "slides": []
    }))
    .unwrap();
    assert!(deck.frame().is_err());

    let deck: Deck = serde_json::from_value(json!({
        "slide_width": 9144000,
        "slide_height": 6858000,
        "slides": [{ "shapes": [] }]
    }))
    .unwrap();
    let frame = deck.frame().unwrap();
    assert_eq!(frame.width, 10.0);
    assert_eq!(deck.master_map.redirect("bg1"), Some("lt1"));
}
