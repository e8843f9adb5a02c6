//! Shape classification: a total function from a raw node to a record kind (or a drop).
//!
//! Name patterns are checked first because connectors and arrows are structurally ordinary
//! auto-shapes; only then does the structural category decide.

use crate::document::raw::{AutoShapeType, RawShape, ShapeCategory};
use crate::model::record::ShapeKind;

/// Names starting with this are lines.
pub const LINE_NAME_PREFIX: &str = "Line";
/// Names containing this are arrows.
pub const ARROW_NAME_TOKEN: &str = "Arrow";
/// Names containing this are connectors.
pub const CONNECTOR_NAME_TOKEN: &str = "Connector";

/// Outcome of classifying one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Plain line.
    Line,
    /// Arrow; stroke width is floored when built.
    Arrow,
    /// Connector, built as a [`ShapeKind::Line`] with dash style and stroke color.
    Connector,
    /// Rectangle auto-shape.
    Rectangle,
    /// Oval auto-shape.
    Oval,
    /// Text box.
    TextBox,
    /// Picture.
    Picture,
    /// Table.
    Table,
    /// Not emitted.
    Dropped(DropReason),
}

/// Why a node produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Auto-shape with a preset other than rectangle or oval.
    UnsupportedAutoShape(String),
    /// Auto-shape without any preset geometry.
    MissingAutoShapeType,
    /// Text box, placeholder or other text-capable node with no text.
    EmptyText,
    /// Category with no record counterpart (groups, charts, media, ...).
    UnsupportedCategory(ShapeCategory),
}

impl Classification {
    /// Record kind this classification builds, `None` for drops.
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Classification::Line | Classification::Connector => Some(ShapeKind::Line),
            Classification::Arrow => Some(ShapeKind::Arrow),
            Classification::Rectangle => Some(ShapeKind::Rectangle),
            Classification::Oval => Some(ShapeKind::Oval),
            Classification::TextBox => Some(ShapeKind::TextBox),
            Classification::Picture => Some(ShapeKind::Picture),
            Classification::Table => Some(ShapeKind::Table),
            Classification::Dropped(_) => None,
        }
    }
}

/// Classify `shape` in fixed priority order: line prefix, arrow token, connector token,
/// structural category, then text fallback.
pub fn classify(shape: &RawShape) -> Classification {
    if shape.name.starts_with(LINE_NAME_PREFIX) {
        return Classification::Line;
    }
    if shape.name.contains(ARROW_NAME_TOKEN) {
        return Classification::Arrow;
    }
    if shape.name.contains(CONNECTOR_NAME_TOKEN) {
        return Classification::Connector;
    }

    match shape.category {
        ShapeCategory::AutoShape => match &shape.auto_shape_type {
            Some(AutoShapeType::Rectangle) => Classification::Rectangle,
            Some(AutoShapeType::Oval) => Classification::Oval,
            Some(AutoShapeType::Other(preset)) => {
                Classification::Dropped(DropReason::UnsupportedAutoShape(preset.clone()))
            }
            None => Classification::Dropped(DropReason::MissingAutoShapeType),
        },
        ShapeCategory::Connector => Classification::Connector,
        ShapeCategory::TextBox => text_or_drop(shape, DropReason::EmptyText),
        ShapeCategory::Picture => Classification::Picture,
        ShapeCategory::Table => Classification::Table,
        ShapeCategory::Placeholder => text_or_drop(shape, DropReason::EmptyText),
        other @ (ShapeCategory::Freeform | ShapeCategory::Group | ShapeCategory::Other) => {
            text_or_drop(shape, DropReason::UnsupportedCategory(other))
        }
    }
}

fn text_or_drop(shape: &RawShape, reason: DropReason) -> Classification {
    if shape.non_empty_text().is_some() {
        Classification::TextBox
    } else {
        Classification::Dropped(reason)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/classify.rs"]
mod tests;
