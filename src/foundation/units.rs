//! Document length units and the mapping into scene coordinates.
//!
//! Document lengths are English Metric Units (EMU): 914 400 per inch, 12 700 per point. The scene
//! is measured in inches with the origin at the canvas center and `y` pointing up, which is the
//! `frameWidth x frameHeight` canvas emitters draw into.

use crate::foundation::core::{Line, Point, ScenePos, Size};
use crate::foundation::error::{DeckmorphError, DeckmorphResult};

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;
/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// EMU per typographic point.
pub const EMU_PER_POINT: f64 = 12_700.0;

/// A length in document units (1/914400 inch).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    /// Length in typographic points.
    pub fn to_points(self) -> f64 {
        (self.0 as f64) / EMU_PER_POINT
    }

    /// Length in scene units (inches).
    pub fn to_scene(self) -> f64 {
        self.to_points() / POINTS_PER_INCH
    }
}

/// Scene canvas extent, matching the slide's aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    /// Canvas width in scene units.
    pub width: f64,
    /// Canvas height in scene units.
    pub height: f64,
}

impl SceneFrame {
    /// Create a validated frame; both extents must be finite and `> 0`.
    pub fn new(width: f64, height: f64) -> DeckmorphResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(DeckmorphError::validation(
                "scene frame width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Frame for a slide of the given size in document units.
    pub fn from_slide_emu(width: Emu, height: Emu) -> DeckmorphResult<Self> {
        Self::new(width.to_scene(), height.to_scene())
    }
}

/// Maps document-space boxes and points into scene coordinates.
///
/// Pure and total: no clamping happens, shapes outside the canvas keep their off-canvas
/// coordinates so they can animate in and out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitTransformer {
    frame: SceneFrame,
}

impl UnitTransformer {
    /// Create a transformer for `frame`.
    pub fn new(frame: SceneFrame) -> Self {
        Self { frame }
    }

    /// Canvas this transformer targets.
    pub fn frame(&self) -> SceneFrame {
        self.frame
    }

    /// Center position and scene size of a box given by its top-left corner and extent.
    pub fn place_box(&self, left: Emu, top: Emu, width: Emu, height: Emu) -> (ScenePos, Size) {
        let (left, top) = (left.to_points(), top.to_points());
        let (w, h) = (width.to_points(), height.to_points());

        let x = left / POINTS_PER_INCH - self.frame.width / 2.0 + (w / POINTS_PER_INCH) / 2.0;
        let y = self.frame.height / 2.0 - top / POINTS_PER_INCH - (h / POINTS_PER_INCH) / 2.0;
        (
            ScenePos::new(x, y),
            Size::new(w / POINTS_PER_INCH, h / POINTS_PER_INCH),
        )
    }

    /// Absolute point (e.g. a connector endpoint); no half-extent offset applies.
    pub fn place_point(&self, x: Emu, y: Emu) -> Point {
        Point::new(
            x.to_points() / POINTS_PER_INCH - self.frame.width / 2.0,
            self.frame.height / 2.0 - y.to_points() / POINTS_PER_INCH,
        )
    }

    /// Segment between two independently transformed endpoints.
    pub fn place_segment(&self, begin_x: Emu, begin_y: Emu, end_x: Emu, end_y: Emu) -> Line {
        Line::new(
            self.place_point(begin_x, begin_y),
            self.place_point(end_x, end_y),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
