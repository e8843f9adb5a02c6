//! Shape nodes as supplied by the document collaborator.
//!
//! These types are the input contract of the extraction pipeline. They carry raw document
//! values only (EMU geometry, color references, font sizes in hundredths of a point); no
//! interpretation happens here.

use crate::foundation::error::{DeckmorphError, DeckmorphResult};
use crate::foundation::units::{Emu, SceneFrame};
use crate::theme::color::ColorRef;
use crate::theme::table::{MasterColorMap, ThemeColorTable};

/// A whole deck: slide size, color tables and ordered slides.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    /// Slide width in document units.
    pub slide_width: Emu,
    /// Slide height in document units.
    pub slide_height: Emu,
    /// Theme scheme table.
    #[serde(default)]
    pub theme: ThemeColorTable,
    /// Master-slide token redirections.
    #[serde(default = "MasterColorMap::office_default")]
    pub master_map: MasterColorMap,
    /// Slides in document order.
    pub slides: Vec<RawSlide>,
}

impl Deck {
    /// Validate deck-level invariants.
    pub fn validate(&self) -> DeckmorphResult<()> {
        if self.slide_width.0 <= 0 || self.slide_height.0 <= 0 {
            return Err(DeckmorphError::validation(
                "deck slide_width/slide_height must be > 0",
            ));
        }
        Ok(())
    }

    /// Scene canvas matching the slide size.
    pub fn frame(&self) -> DeckmorphResult<SceneFrame> {
        self.validate()?;
        SceneFrame::from_slide_emu(self.slide_width, self.slide_height)
    }
}

/// One slide's shape tree, flattened in z-order (back to front).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RawSlide {
    /// Shape nodes in drawing order.
    #[serde(default)]
    pub shapes: Vec<RawShape>,
}

/// Structural category tag of a shape node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    /// Preset-geometry shape (`p:sp` with `prstGeom`).
    AutoShape,
    /// Connector (`p:cxnSp`).
    Connector,
    /// Free-form drawing.
    Freeform,
    /// Shape flagged as a text box.
    TextBox,
    /// Layout placeholder.
    Placeholder,
    /// Raster picture.
    Picture,
    /// Graphic frame hosting a table.
    Table,
    /// Group of shapes.
    Group,
    /// Chart, SmartArt, media, OLE object and anything else.
    Other,
}

/// Preset geometry of an auto-shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoShapeType {
    /// `rect`.
    Rectangle,
    /// `ellipse`.
    Oval,
    /// Any other preset, by name.
    Other(String),
}

/// Axis-aligned bounding box in document units (top-left corner and extent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawBox {
    /// Left edge.
    pub left: Emu,
    /// Top edge.
    pub top: Emu,
    /// Width.
    pub width: Emu,
    /// Height.
    pub height: Emu,
}

/// Explicit line endpoints in document units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawEndpoints {
    /// Begin point x.
    pub begin_x: Emu,
    /// Begin point y.
    pub begin_y: Emu,
    /// End point x.
    pub end_x: Emu,
    /// End point y.
    pub end_y: Emu,
}

/// Dash pattern of an outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Any dashed or dotted preset.
    Dashed,
}

/// Outline properties (`a:ln`).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawOutline {
    /// Stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorRef>,
    /// Stroke width in document units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Emu>,
    /// Dash pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashStyle>,
}

/// A run of uniformly formatted text.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawRun {
    /// Run text.
    pub text: String,
    /// Font size in hundredths of a point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Run color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorRef>,
}

/// A paragraph of runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawParagraph {
    /// Runs in reading order.
    #[serde(default)]
    pub runs: Vec<RawRun>,
}

/// Text frame content.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTextFrame {
    /// Paragraphs in reading order.
    #[serde(default)]
    pub paragraphs: Vec<RawParagraph>,
}

impl RawTextFrame {
    /// Plain text: runs concatenated, paragraphs joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.runs.iter().map(|r| r.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate every run across paragraphs.
    pub fn runs(&self) -> impl Iterator<Item = &RawRun> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }
}

/// Table cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawCell {
    /// Cell text frame.
    #[serde(default)]
    pub text: RawTextFrame,
}

/// Table row.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawRow {
    /// Cells left to right.
    #[serde(default)]
    pub cells: Vec<RawCell>,
}

/// Table content.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    /// Rows top to bottom.
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

/// One shape node.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawShape {
    /// Shape id, unique within its slide.
    pub id: u32,
    /// Declared name (`Rectangle 3`, `Straight Connector 5`, ...).
    #[serde(default)]
    pub name: String,
    /// Structural category.
    pub category: ShapeCategory,
    /// Preset geometry for auto-shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_shape_type: Option<AutoShapeType>,
    /// Bounding box; absent when the node inherits placement it cannot resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<RawBox>,
    /// Explicit endpoints for lines and connectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<RawEndpoints>,
    /// Horizontal flip of the box geometry.
    #[serde(default)]
    pub flip_h: bool,
    /// Vertical flip of the box geometry.
    #[serde(default)]
    pub flip_v: bool,
    /// Solid fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorRef>,
    /// Outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<RawOutline>,
    /// Text frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<RawTextFrame>,
    /// Picture payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    /// Table payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<RawTable>,
}

impl RawShape {
    /// Bare node with no geometry or content.
    pub fn new(id: u32, name: impl Into<String>, category: ShapeCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            auto_shape_type: None,
            bbox: None,
            endpoints: None,
            flip_h: false,
            flip_v: false,
            fill: None,
            outline: None,
            text: None,
            image: None,
            table: None,
        }
    }

    /// Plain text if the node carries a non-empty text frame.
    pub fn non_empty_text(&self) -> Option<String> {
        let text = self.text.as_ref()?.plain_text();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/raw.rs"]
mod tests;
