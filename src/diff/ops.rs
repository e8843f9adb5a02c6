use crate::foundation::core::{Line, ScenePos, Size};
use crate::model::record::{
    ImageRef, ShapeId, ShapeKind, ShapeRecord, ShapeStyle, TableData, TextContent,
};

/// One unit of change between consecutive slides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A shape appears; carries its full record.
    Create(ShapeRecord),
    /// A shape present on both slides changed.
    Update(ShapeUpdate),
    /// A shape disappears.
    Remove(ShapeId),
}

impl Operation {
    /// Id the operation targets.
    pub fn id(&self) -> &ShapeId {
        match self {
            Operation::Create(r) => &r.id,
            Operation::Update(u) => &u.id,
            Operation::Remove(id) => id,
        }
    }

    /// Emission phase: removes (0) precede updates (1), which precede creates (2).
    pub fn phase(&self) -> u8 {
        match self {
            Operation::Remove(_) => 0,
            Operation::Update(_) => 1,
            Operation::Create(_) => 2,
        }
    }
}

/// Changed fields of one kept shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeUpdate {
    /// Target id.
    pub id: ShapeId,
    /// Kind on the new slide.
    pub kind: ShapeKind,
    /// Changes in field order; never empty.
    pub changes: Vec<FieldChange>,
}

impl ShapeUpdate {
    /// Fields touched by this update, in change order.
    pub fn fields(&self) -> Vec<Field> {
        self.changes.iter().map(|c| c.delta.field()).collect()
    }
}

/// How an emitter should apply a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeMode {
    /// Animate continuously from the old value to the new one.
    Interpolate,
    /// Swap the value in place at the transition.
    Replace,
}

/// One changed field with its application mode.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldChange {
    /// Application mode.
    pub mode: ChangeMode,
    /// Old and new values.
    pub delta: FieldDelta,
}

/// Field names, for inspection without payloads.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Scene position.
    Position,
    /// Box size.
    Size,
    /// Segment endpoints.
    Endpoints,
    /// Fill, stroke and dash.
    Style,
    /// Text payload.
    Text,
    /// Table payload.
    Table,
    /// Image reference.
    Image,
    /// Record kind; the whole record is replaced.
    Kind,
}

/// Old and new value of one field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDelta {
    /// Position change.
    Position {
        /// Previous value.
        from: Option<ScenePos>,
        /// New value.
        to: Option<ScenePos>,
    },
    /// Box size change.
    Size {
        /// Previous value.
        from: Option<Size>,
        /// New value.
        to: Option<Size>,
    },
    /// Segment endpoints change.
    Endpoints {
        /// Previous value.
        from: Option<Line>,
        /// New value.
        to: Option<Line>,
    },
    /// Style change.
    Style {
        /// Previous value.
        from: Option<ShapeStyle>,
        /// New value.
        to: Option<ShapeStyle>,
    },
    /// Text change.
    Text {
        /// Previous value.
        from: Option<TextContent>,
        /// New value.
        to: Option<TextContent>,
    },
    /// Table content change.
    Table {
        /// New value.
        to: Option<TableData>,
    },
    /// Image change.
    Image {
        /// New value.
        to: Option<ImageRef>,
    },
    /// Kind change; carries the complete new record.
    Kind {
        /// Previous kind.
        from: ShapeKind,
        /// Complete replacement record.
        to: Box<ShapeRecord>,
    },
}

impl FieldDelta {
    /// Name of the changed field.
    pub fn field(&self) -> Field {
        match self {
            FieldDelta::Position { .. } => Field::Position,
            FieldDelta::Size { .. } => Field::Size,
            FieldDelta::Endpoints { .. } => Field::Endpoints,
            FieldDelta::Style { .. } => Field::Style,
            FieldDelta::Text { .. } => Field::Text,
            FieldDelta::Table { .. } => Field::Table,
            FieldDelta::Image { .. } => Field::Image,
            FieldDelta::Kind { .. } => Field::Kind,
        }
    }
}
