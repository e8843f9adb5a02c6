use super::*;
use crate::assets::store::InMemoryImageStore;
use crate::diff::ops::Field;
use crate::document::raw::{AutoShapeType, RawBox, RawShape, ShapeCategory};
use crate::emit::sink::InMemoryEmitter;
use crate::foundation::units::{EMU_PER_INCH, Emu};
use crate::model::record::{ShapeId, ShapeKind};
use crate::theme::table::{MasterColorMap, ThemeColor, ThemeColorTable};

fn inch(v: f64) -> Emu {
    Emu((v * EMU_PER_INCH as f64) as i64)
}

fn rect_at(id: u32, left: f64) -> RawShape {
    let mut s = RawShape::new(id, format!("Rectangle {id}"), ShapeCategory::AutoShape);
    s.auto_shape_type = Some(AutoShapeType::Rectangle);
    s.bbox = Some(RawBox {
        left: inch(left),
        top: inch(1.0),
        width: inch(1.0),
        height: inch(1.0),
    });
    s
}

fn deck(slides: Vec<Vec<RawShape>>) -> Deck {
    Deck {
        slide_width: inch(10.0),
        slide_height: inch(7.5),
        theme: ThemeColorTable::from_entries([
            ("lt1", ThemeColor::Srgb(Rgb8::new(0xFA, 0xFA, 0xF0))),
            ("dk1", ThemeColor::Srgb(Rgb8::BLACK)),
        ]),
        master_map: MasterColorMap::office_default(),
        slides: slides.into_iter().map(|shapes| RawSlide { shapes }).collect(),
    }
}

#[test]
fn run_builds_and_diffs_every_slide() {
    let d = deck(vec![
        vec![rect_at(1, 0.0), rect_at(2, 3.0)],
        vec![rect_at(1, 2.0)],
    ]);
    let mut images = InMemoryImageStore::new();
    let timeline = DeckPipeline::run(&d, &mut images).unwrap();

    assert_eq!(timeline.frame, SceneFrame::new(10.0, 7.5).unwrap());
    assert_eq!(timeline.slides.len(), 2);
    assert_eq!(timeline.slides[0].slide_index, 0);
    assert_eq!(timeline.slides[0].operations.len(), 2);
    assert!(
        timeline.slides[0]
            .operations
            .iter()
            .all(|op| matches!(op, Operation::Create(_)))
    );

    let second = &timeline.slides[1];
    assert_eq!(second.slide_index, 1);
    assert_eq!(second.records.len(), 1);
    assert_eq!(second.records[0].kind, ShapeKind::Rectangle);
    assert_eq!(second.operations.len(), 2);
    assert_eq!(second.operations[0], Operation::Remove(ShapeId::from(2u32)));
    let Operation::Update(u) = &second.operations[1] else {
        panic!("expected update after remove, got {:?}", second.operations[1]);
    };
    assert_eq!(u.id, ShapeId::from(1u32));
    assert_eq!(u.fields(), [Field::Position]);
}

fn picture(id: u32, bytes: &[u8]) -> RawShape {
    let mut s = RawShape::new(id, format!("Picture {id}"), ShapeCategory::Picture);
    s.bbox = Some(RawBox {
        left: inch(6.0),
        top: inch(4.0),
        width: inch(1.0),
        height: inch(1.0),
    });
    s.image = Some(bytes.to_vec());
    s
}

#[test]
fn unchanged_picture_emits_no_operation() {
    let d = deck(vec![vec![picture(4, b"png-bytes")], vec![picture(4, b"png-bytes")]]);
    let mut images = InMemoryImageStore::new();
    let timeline = DeckPipeline::run(&d, &mut images).unwrap();

    assert!(timeline.slides[1].operations.is_empty());
    assert_eq!(
        timeline.slides[0].records[0].image,
        timeline.slides[1].records[0].image
    );
    assert_eq!(images.write_count(), 2);
}

#[test]
fn replaced_picture_swaps_its_image() {
    let d = deck(vec![vec![picture(4, b"before")], vec![picture(4, b"after")]]);
    let timeline = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap();

    let ops = &timeline.slides[1].operations;
    assert_eq!(ops.len(), 1);
    let Operation::Update(u) = &ops[0] else {
        panic!("expected update, got {:?}", ops[0]);
    };
    assert_eq!(u.fields(), [Field::Image]);
}

#[test]
fn background_resolves_through_master_map() {
    let d = deck(vec![]);
    let timeline = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap();
    assert_eq!(timeline.background, Rgb8::new(0xFA, 0xFA, 0xF0));
    assert!(timeline.slides.is_empty());
}

#[test]
fn background_falls_back_to_white_without_bg1() {
    let mut d = deck(vec![]);
    d.master_map = MasterColorMap::default();
    let pipeline = DeckPipeline::new(&d).unwrap();
    assert_eq!(pipeline.background(), Rgb8::WHITE);
}

#[test]
fn zero_sized_deck_is_rejected() {
    let mut d = deck(vec![]);
    d.slide_width = Emu(0);
    let err = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"), "{err}");
}

#[test]
fn duplicate_ids_abort_the_run() {
    let d = deck(vec![vec![rect_at(1, 0.0), rect_at(1, 3.0)]]);
    let err = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"), "{err}");
}

#[test]
fn emit_timeline_streams_slides_in_order() {
    let d = deck(vec![vec![rect_at(1, 0.0)], vec![], vec![rect_at(3, 1.0)]]);
    let timeline = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap();

    let mut emitter = InMemoryEmitter::new();
    emit_timeline(&timeline, &mut emitter).unwrap();

    let cfg = emitter.config().unwrap();
    assert_eq!(cfg.slide_count, 3);
    assert_eq!(cfg.background, timeline.background);
    assert!(emitter.is_finished());

    let indices: Vec<usize> = emitter.slides().iter().map(|s| s.slide_index).collect();
    assert_eq!(indices, [0, 1, 2]);
    assert_eq!(
        emitter.slides()[1].operations,
        [Operation::Remove(ShapeId::from(1u32))]
    );
}

#[test]
fn timeline_serializes_to_json() {
    let d = deck(vec![vec![rect_at(1, 0.0)]]);
    let timeline = DeckPipeline::run(&d, &mut InMemoryImageStore::new()).unwrap();
    let json = serde_json::to_value(&timeline).unwrap();
    assert_eq!(json["background"], "#FAFAF0");
    assert_eq!(json["slides"][0]["records"][0]["kind"], "rectangle");
    let back: SceneTimeline = serde_json::from_value(json).unwrap();
    assert_eq!(back, timeline);
}
