//! Deckmorph turns a slide deck into a scene model suitable for animation.
//!
//! Each slide is normalized into canonical [`ShapeRecord`]s in a continuous scene coordinate
//! space, and consecutive slides are diffed into morph [`Operation`]s:
//!
//! - Load and validate a [`Deck`]
//! - Convert it with [`DeckPipeline::run`] into a [`SceneTimeline`]
//! - Stream the timeline into a [`SceneEmitter`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod diff;
mod document;
mod emit;
mod foundation;
mod model;
mod pipeline;
mod theme;

pub use crate::foundation::core::{Line, Point, Rgb8, ScenePos, Size};
pub use crate::foundation::error::{DeckmorphError, DeckmorphResult};
pub use crate::foundation::units::{
    EMU_PER_INCH, EMU_PER_POINT, Emu, POINTS_PER_INCH, SceneFrame, UnitTransformer,
};

pub use crate::assets::store::{DirImageStore, ImageKey, ImageStore, InMemoryImageStore};
pub use crate::diff::differ::{SlideSequenceDiffer, diff_records};
pub use crate::diff::ops::{ChangeMode, Field, FieldChange, FieldDelta, Operation, ShapeUpdate};
pub use crate::document::raw::{
    AutoShapeType, DashStyle, Deck, RawBox, RawCell, RawEndpoints, RawOutline, RawParagraph,
    RawRow, RawRun, RawShape, RawSlide, RawTable, RawTextFrame, ShapeCategory,
};
pub use crate::emit::sink::{EmitConfig, EmittedSlide, InMemoryEmitter, SceneEmitter};
pub use crate::model::builder::ShapeModelBuilder;
pub use crate::model::classify::{
    ARROW_NAME_TOKEN, CONNECTOR_NAME_TOKEN, Classification, DropReason, LINE_NAME_PREFIX,
    classify,
};
pub use crate::model::record::{
    CAPTION_SUFFIX, DEFAULT_FONT_SIZE_PT, DEFAULT_STROKE_COLOR, DEFAULT_TEXT_COLOR, Extent,
    ImageRef, MIN_ARROW_STROKE_WIDTH_PT, ShapeId, ShapeKind, ShapeRecord, ShapeStyle,
    TableData, TextContent,
};
pub use crate::pipeline::{
    BACKGROUND_TOKEN, DeckPipeline, SceneTimeline, SlideScene, emit_timeline,
};
pub use crate::theme::color::{ColorBase, ColorRef};
pub use crate::theme::resolver::{
    MOD_SCALE, SlotResolution, ThemeColorResolver, UNRESOLVED_COLOR, apply_modifiers,
};
pub use crate::theme::table::{MasterColorMap, SCHEME_SLOTS, ThemeColor, ThemeColorTable};
