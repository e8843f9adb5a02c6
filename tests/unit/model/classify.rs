use super::*;
use crate::document::raw::{RawParagraph, RawRun, RawTextFrame};

fn auto(name: &str, preset: Option<AutoShapeType>) -> RawShape {
    let mut s = RawShape::new(1, name, ShapeCategory::AutoShape);
    s.auto_shape_type = preset;
    s
}

fn with_text(mut s: RawShape, text: &str) -> RawShape {
    s.text = Some(RawTextFrame {
        paragraphs: vec![RawParagraph {
            runs: vec![RawRun {
                text: text.to_owned(),
                ..RawRun::default()
            }],
        }],
    });
    s
}

#[test]
fn name_overrides_win_over_structure() {
    let rect = Some(AutoShapeType::Rectangle);
    assert_eq!(classify(&auto("Line 2", rect.clone())), Classification::Line);
    assert_eq!(classify(&auto("Connector 5", rect.clone())), Classification::Connector);
    assert_eq!(
        classify(&auto("Straight Arrow Connector 4", rect.clone())),
        Classification::Arrow
    );
    assert_eq!(classify(&auto("Rectangle 3", rect)), Classification::Rectangle);
}

#[test]
fn line_prefix_is_a_prefix_match() {
    let rect = Some(AutoShapeType::Rectangle);
    assert_eq!(classify(&auto("Outline 1", rect)), Classification::Rectangle);
}

#[test]
fn auto_shape_presets_dispatch() {
    assert_eq!(
        classify(&auto("Oval 6", Some(AutoShapeType::Oval))),
        Classification::Oval
    );
    assert_eq!(
        classify(&auto("Star 7", Some(AutoShapeType::Other("star5".to_owned())))),
        Classification::Dropped(DropReason::UnsupportedAutoShape("star5".to_owned()))
    );
    assert_eq!(
        classify(&auto("Shape 8", None)),
        Classification::Dropped(DropReason::MissingAutoShapeType)
    );
    // Text on an unsupported preset does not rescue it.
    let labelled = with_text(auto("Star 7", Some(AutoShapeType::Other("star5".to_owned()))), "hi");
    assert!(matches!(classify(&labelled), Classification::Dropped(_)));
}

#[test]
fn text_boxes_need_text() {
    let empty = RawShape::new(2, "TextBox 1", ShapeCategory::TextBox);
    assert_eq!(
        classify(&empty),
        Classification::Dropped(DropReason::EmptyText)
    );
    assert_eq!(classify(&with_text(empty, "x")), Classification::TextBox);
}

#[test]
fn text_exposing_nodes_fall_back_to_text_boxes() {
    let title = with_text(RawShape::new(2, "Title 1", ShapeCategory::Placeholder), "Title");
    assert_eq!(classify(&title), Classification::TextBox);

    let freeform = with_text(RawShape::new(3, "Freeform 2", ShapeCategory::Freeform), "f");
    assert_eq!(classify(&freeform), Classification::TextBox);

    let group = RawShape::new(4, "Group 3", ShapeCategory::Group);
    assert_eq!(
        classify(&group),
        Classification::Dropped(DropReason::UnsupportedCategory(ShapeCategory::Group))
    );
}

#[test]
fn payload_categories_dispatch() {
    assert_eq!(
        classify(&RawShape::new(5, "Picture 4", ShapeCategory::Picture)),
        Classification::Picture
    );
    assert_eq!(
        classify(&RawShape::new(6, "Table 5", ShapeCategory::Table)),
        Classification::Table
    );
    assert_eq!(
        classify(&RawShape::new(7, "Elbow 6", ShapeCategory::Connector)),
        Classification::Connector
    );
}

#[test]
fn kinds_map_connectors_to_lines() {
    assert_eq!(Classification::Connector.kind(), Some(ShapeKind::Line));
    assert_eq!(Classification::Arrow.kind(), Some(ShapeKind::Arrow));
    assert_eq!(
        Classification::Dropped(DropReason::EmptyText).kind(),
        None
    );
}
