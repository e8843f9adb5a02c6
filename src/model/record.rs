use std::fmt;

use crate::document::raw::DashStyle;
use crate::foundation::core::{Line, Point, Rgb8, ScenePos, Size};
use crate::foundation::error::{DeckmorphError, DeckmorphResult};

/// Stroke color of line-like shapes whose outline declares none.
pub const DEFAULT_STROKE_COLOR: Rgb8 = Rgb8::BLACK;
/// Text color when no run declares one.
pub const DEFAULT_TEXT_COLOR: Rgb8 = Rgb8::BLACK;
/// Font size (points) when no run declares one.
pub const DEFAULT_FONT_SIZE_PT: f64 = 18.0;
/// Thinnest renderable arrow stroke (points).
pub const MIN_ARROW_STROKE_WIDTH_PT: f64 = 1.0;
/// Suffix of the synthetic caption record emitted for labelled shapes.
pub const CAPTION_SUFFIX: &str = "_text";

/// Record identifier, unique within one slide.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ShapeId(pub String);

impl ShapeId {
    /// Id of the caption record derived from this shape.
    pub fn caption(&self) -> ShapeId {
        ShapeId(format!("{}{CAPTION_SUFFIX}", self.0))
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ShapeId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Closed set of record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Ellipse with independent width and height.
    Oval,
    /// Straight segment.
    Line,
    /// Straight segment with an arrow head.
    Arrow,
    /// Free-standing text.
    TextBox,
    /// Raster image.
    Picture,
    /// Text grid.
    Table,
}

impl ShapeKind {
    /// Kinds whose geometry is a segment rather than a box.
    pub fn is_segment(self) -> bool {
        matches!(self, ShapeKind::Line | ShapeKind::Arrow)
    }
}

/// Geometric extent of a record in scene units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// Box width and height, centered on the record position.
    Size(Size),
    /// Absolute start and end points.
    Segment(Line),
}

/// Resolved drawing style.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeStyle {
    /// Solid fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgb8>,
    /// Stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgb8>,
    /// Stroke width in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Dash pattern.
    #[serde(default)]
    pub dash: DashStyle,
}

/// Text payload with its resolved formatting.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextContent {
    /// Plain text, paragraphs separated by `\n`.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Text color.
    pub color: Rgb8,
}

/// Table payload: an `R x C` text grid and a parallel grid of per-run font sizes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableData {
    /// Cell text, row-major.
    pub cells: Vec<Vec<String>>,
    /// Font sizes (points) of each cell's runs; empty for cells without runs.
    pub font_sizes: Vec<Vec<Vec<f64>>>,
}

impl TableData {
    /// Row and column count of the text grid (`columns` of the widest row).
    pub fn dims(&self) -> (usize, usize) {
        let cols = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        (self.cells.len(), cols)
    }

    /// Check that the font-size grid mirrors the text grid.
    pub fn validate(&self) -> DeckmorphResult<()> {
        if self.cells.len() != self.font_sizes.len() {
            return Err(DeckmorphError::construction(
                "table font_sizes row count differs from cells",
            ));
        }
        for (r, (cells, sizes)) in self.cells.iter().zip(&self.font_sizes).enumerate() {
            if cells.len() != sizes.len() {
                return Err(DeckmorphError::construction(format!(
                    "table row {r} font_sizes column count differs from cells"
                )));
            }
        }
        Ok(())
    }
}

/// Stable reference to persisted image bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

/// Canonical, renderer-agnostic description of one visible slide element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeRecord {
    /// Identifier, unique within the slide.
    pub id: ShapeId,
    /// Record kind.
    pub kind: ShapeKind,
    /// Scene position; `None` when the document carried no geometry ("unplaced").
    pub position: Option<ScenePos>,
    /// Box size or segment endpoints; `None` when unplaced.
    pub extent: Option<Extent>,
    /// Resolved style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ShapeStyle>,
    /// Text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    /// Table payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableData>,
    /// Persisted image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl ShapeRecord {
    /// Unplaced record of `kind` with no payload.
    pub fn new(id: impl Into<ShapeId>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: None,
            extent: None,
            style: None,
            text: None,
            table: None,
            image: None,
        }
    }

    /// Place as a box.
    pub fn with_box(mut self, position: ScenePos, size: Size) -> Self {
        self.position = Some(position);
        self.extent = Some(Extent::Size(size));
        self
    }

    /// Place as a segment; the position becomes the segment midpoint.
    pub fn with_segment(mut self, segment: Line) -> Self {
        self.position = Some(ScenePos::from(segment.midpoint()));
        self.extent = Some(Extent::Segment(segment));
        self
    }

    /// Return `true` when the record has no position.
    pub fn is_unplaced(&self) -> bool {
        self.position.is_none()
    }

    /// Box size, if the extent is a box.
    pub fn size(&self) -> Option<Size> {
        match self.extent {
            Some(Extent::Size(s)) => Some(s),
            _ => None,
        }
    }

    /// Segment endpoints, if the extent is a segment.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.extent {
            Some(Extent::Segment(l)) => Some((l.p0, l.p1)),
            _ => None,
        }
    }

    /// Reject records whose kind requires a payload or extent shape they do not carry.
    pub fn validate(&self) -> DeckmorphResult<()> {
        let missing = |what: &str| {
            DeckmorphError::construction(format!(
                "{:?} record '{}' has no {what}",
                self.kind, self.id
            ))
        };

        match self.kind {
            ShapeKind::Table => self
                .table
                .as_ref()
                .ok_or_else(|| missing("table data"))?
                .validate()?,
            ShapeKind::Picture => {
                self.image.as_ref().ok_or_else(|| missing("image reference"))?;
            }
            ShapeKind::TextBox => {
                self.text.as_ref().ok_or_else(|| missing("text"))?;
            }
            ShapeKind::Rectangle | ShapeKind::Oval | ShapeKind::Line | ShapeKind::Arrow => {}
        }

        match (self.kind.is_segment(), self.extent) {
            (true, Some(Extent::Size(_))) => Err(DeckmorphError::construction(format!(
                "{:?} record '{}' must carry segment endpoints, not a box size",
                self.kind, self.id
            ))),
            (false, Some(Extent::Segment(_))) => Err(DeckmorphError::construction(format!(
                "{:?} record '{}' must carry a box size, not segment endpoints",
                self.kind, self.id
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/record.rs"]
mod tests;
