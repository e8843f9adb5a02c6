use std::collections::BTreeSet;

use crate::assets::store::{ImageKey, ImageStore};
use crate::document::raw::{DashStyle, RawCell, RawShape, RawTable, RawTextFrame};
use crate::foundation::core::{Line, ScenePos, Size};
use crate::foundation::error::{DeckmorphError, DeckmorphResult};
use crate::foundation::units::{Emu, SceneFrame, UnitTransformer};
use crate::model::classify::{Classification, classify};
use crate::model::record::{
    DEFAULT_FONT_SIZE_PT, DEFAULT_STROKE_COLOR, DEFAULT_TEXT_COLOR, MIN_ARROW_STROKE_WIDTH_PT,
    ShapeId, ShapeKind, ShapeRecord, ShapeStyle, TableData, TextContent,
};
use crate::theme::resolver::ThemeColorResolver;
use crate::theme::table::{MasterColorMap, ThemeColorTable};

/// Turns one slide's raw shape nodes into ordered [`ShapeRecord`]s.
///
/// Records come out in input z-order. A labelled non-text shape is followed immediately by its
/// caption record (`<id>_text`) so consumers draw the label above its container.
#[derive(Clone, Copy, Debug)]
pub struct ShapeModelBuilder<'a> {
    resolver: ThemeColorResolver<'a>,
    units: UnitTransformer,
}

impl<'a> ShapeModelBuilder<'a> {
    /// Create a builder for one document.
    pub fn new(theme: &'a ThemeColorTable, master: &'a MasterColorMap, frame: SceneFrame) -> Self {
        Self {
            resolver: ThemeColorResolver::new(theme, master),
            units: UnitTransformer::new(frame),
        }
    }

    /// Color resolver used for fills, strokes and text.
    pub fn resolver(&self) -> ThemeColorResolver<'a> {
        self.resolver
    }

    /// Build the record list of slide `slide_index`.
    ///
    /// Unsupported shapes are dropped. Pictures are persisted through `images` once each.
    #[tracing::instrument(skip(self, shapes, images), fields(shapes = shapes.len()))]
    pub fn build_slide(
        &self,
        slide_index: usize,
        shapes: &[RawShape],
        images: &mut dyn ImageStore,
    ) -> DeckmorphResult<Vec<ShapeRecord>> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::with_capacity(shapes.len());

        for shape in shapes {
            if !seen.insert(shape.id) {
                return Err(DeckmorphError::validation(format!(
                    "slide {slide_index} has duplicate shape id {}",
                    shape.id
                )));
            }

            let class = classify(shape);
            let Some(kind) = class.kind() else {
                tracing::debug!(id = shape.id, name = %shape.name, ?class, "dropped shape");
                continue;
            };

            let record = self.build_record(slide_index, shape, &class, kind, images)?;
            record.validate()?;
            out.push(record);

            if kind != ShapeKind::TextBox
                && let Some(text) = self.text_content(shape)
            {
                let caption = self.caption_for(shape, text);
                caption.validate()?;
                out.push(caption);
            }
        }

        Ok(out)
    }

    fn build_record(
        &self,
        slide_index: usize,
        shape: &RawShape,
        class: &Classification,
        kind: ShapeKind,
        images: &mut dyn ImageStore,
    ) -> DeckmorphResult<ShapeRecord> {
        let id = ShapeId::from(shape.id);
        let mut record = ShapeRecord::new(id.clone(), kind);

        if kind.is_segment() {
            if let Some(segment) = self.segment(shape) {
                record = record.with_segment(segment);
            }
            record.style = Some(self.stroke_style(shape, class));
        } else {
            if let Some((pos, size)) = self.placed_box(shape) {
                record = record.with_box(pos, size);
            }
            record.style = self.box_style(shape);
        }

        match kind {
            ShapeKind::TextBox => record.text = self.text_content(shape),
            ShapeKind::Table => {
                let table = shape.table.as_ref().ok_or_else(|| {
                    DeckmorphError::construction(format!("table shape '{id}' has no table data"))
                })?;
                record.table = Some(table_data(table));
            }
            ShapeKind::Picture => {
                let bytes = shape.image.as_deref().ok_or_else(|| {
                    DeckmorphError::construction(format!("picture shape '{id}' has no image bytes"))
                })?;
                let key = ImageKey {
                    slide_index,
                    shape_id: id,
                };
                record.image = Some(images.persist(&key, bytes)?);
            }
            ShapeKind::Rectangle | ShapeKind::Oval | ShapeKind::Line | ShapeKind::Arrow => {}
        }

        Ok(record)
    }

    fn caption_for(&self, shape: &RawShape, text: TextContent) -> ShapeRecord {
        let mut caption = ShapeRecord::new(ShapeId::from(shape.id).caption(), ShapeKind::TextBox);
        if let Some((pos, size)) = self.placed_box(shape) {
            caption = caption.with_box(pos, size);
        } else if let Some(segment) = self.segment(shape) {
            caption.position = Some(ScenePos::from(segment.midpoint()));
        }
        caption.text = Some(text);
        caption
    }

    fn placed_box(&self, shape: &RawShape) -> Option<(ScenePos, Size)> {
        let b = shape.bbox?;
        Some(self.units.place_box(b.left, b.top, b.width, b.height))
    }

    /// Explicit endpoints, else the box diagonal honoring flips.
    fn segment(&self, shape: &RawShape) -> Option<Line> {
        if let Some(e) = shape.endpoints {
            return Some(
                self.units
                    .place_segment(e.begin_x, e.begin_y, e.end_x, e.end_y),
            );
        }

        let b = shape.bbox?;
        let (x0, x1) = (b.left, Emu(b.left.0.saturating_add(b.width.0)));
        let (y0, y1) = (b.top, Emu(b.top.0.saturating_add(b.height.0)));
        let (bx, ex) = if shape.flip_h { (x1, x0) } else { (x0, x1) };
        let (by, ey) = if shape.flip_v { (y1, y0) } else { (y0, y1) };
        Some(self.units.place_segment(bx, by, ex, ey))
    }

    fn stroke_style(&self, shape: &RawShape, class: &Classification) -> ShapeStyle {
        let outline = shape.outline.as_ref();
        let stroke = outline
            .and_then(|o| o.color.as_ref())
            .map_or(DEFAULT_STROKE_COLOR, |c| self.resolver.resolve_ref(c));
        let mut stroke_width = outline.and_then(|o| o.width).map(Emu::to_points);
        if *class == Classification::Arrow {
            stroke_width = Some(stroke_width.unwrap_or(0.0).max(MIN_ARROW_STROKE_WIDTH_PT));
        }

        ShapeStyle {
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            dash: outline.and_then(|o| o.dash).unwrap_or(DashStyle::Solid),
        }
    }

    fn box_style(&self, shape: &RawShape) -> Option<ShapeStyle> {
        if shape.fill.is_none() && shape.outline.is_none() {
            return None;
        }
        let outline = shape.outline.as_ref();
        Some(ShapeStyle {
            fill: shape.fill.as_ref().map(|c| self.resolver.resolve_ref(c)),
            stroke: outline
                .and_then(|o| o.color.as_ref())
                .map(|c| self.resolver.resolve_ref(c)),
            stroke_width: outline.and_then(|o| o.width).map(Emu::to_points),
            dash: outline.and_then(|o| o.dash).unwrap_or_default(),
        })
    }

    fn text_content(&self, shape: &RawShape) -> Option<TextContent> {
        let text = shape.non_empty_text()?;
        let frame = shape.text.as_ref()?;
        Some(TextContent {
            text,
            font_size: first_font_size(frame).unwrap_or(DEFAULT_FONT_SIZE_PT),
            color: frame
                .runs()
                .find_map(|r| r.color.as_ref())
                .map_or(DEFAULT_TEXT_COLOR, |c| self.resolver.resolve_ref(c)),
        })
    }
}

fn first_font_size(frame: &RawTextFrame) -> Option<f64> {
    frame.runs().find_map(|r| r.size).map(hundredths_to_points)
}

fn hundredths_to_points(size: u32) -> f64 {
    f64::from(size) / 100.0
}

/// Rows, then cells, then runs; a cell without runs keeps an empty size list.
fn table_data(table: &RawTable) -> TableData {
    TableData {
        cells: table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| c.text.plain_text()).collect())
            .collect(),
        font_sizes: table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(cell_font_sizes).collect())
            .collect(),
    }
}

fn cell_font_sizes(cell: &RawCell) -> Vec<f64> {
    cell.text
        .runs()
        .map(|r| r.size.map_or(DEFAULT_FONT_SIZE_PT, hundredths_to_points))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/model/builder.rs"]
mod tests;
