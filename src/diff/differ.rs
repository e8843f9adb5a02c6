use std::collections::{BTreeMap, BTreeSet};

use crate::diff::ops::{ChangeMode, FieldChange, FieldDelta, Operation, ShapeUpdate};
use crate::foundation::core::Line;
use crate::foundation::error::{DeckmorphError, DeckmorphResult};
use crate::model::record::{Extent, ShapeId, ShapeKind, ShapeRecord};

/// Tracks shape identity across the slide sequence and emits per-transition operations.
///
/// Holds the Live Identity Set: the last-seen record of every id present on the most recently
/// diffed slide. [`SlideSequenceDiffer::diff`] must be called once per slide, in document order.
#[derive(Clone, Debug, Default)]
pub struct SlideSequenceDiffer {
    live: BTreeMap<ShapeId, ShapeRecord>,
    // Previous slide's ids in record order; keeps remove order stable.
    order: Vec<ShapeId>,
    slides_seen: usize,
}

impl SlideSequenceDiffer {
    /// Differ with an empty identity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slides diffed so far.
    pub fn slides_seen(&self) -> usize {
        self.slides_seen
    }

    /// Records of the Live Identity Set in the previous slide's order.
    pub fn live(&self) -> impl Iterator<Item = &ShapeRecord> {
        self.order.iter().filter_map(|id| self.live.get(id))
    }

    /// Diff the next slide against the identity set, then replace the set with `records`.
    ///
    /// Output order: every `Remove` (previous slide order), then every `Update`, then every
    /// `Create` (both in `records` order). A slide with duplicate ids is rejected and leaves the
    /// identity set untouched.
    #[tracing::instrument(
        skip(self, records),
        fields(slide = self.slides_seen, records = records.len())
    )]
    pub fn diff(&mut self, records: &[ShapeRecord]) -> DeckmorphResult<Vec<Operation>> {
        let mut curr_ids = BTreeSet::new();
        for r in records {
            if !curr_ids.insert(&r.id) {
                return Err(DeckmorphError::validation(format!(
                    "slide {} repeats record id '{}'",
                    self.slides_seen, r.id
                )));
            }
        }

        let mut removes = Vec::new();
        let mut updates = Vec::new();
        let mut creates = Vec::new();

        for id in &self.order {
            if !curr_ids.contains(id) {
                removes.push(Operation::Remove(id.clone()));
            }
        }

        for rec in records {
            match self.live.get(&rec.id) {
                Some(prev) => {
                    let changes = diff_records(prev, rec);
                    if !changes.is_empty() {
                        updates.push(Operation::Update(ShapeUpdate {
                            id: rec.id.clone(),
                            kind: rec.kind,
                            changes,
                        }));
                    }
                }
                None => creates.push(Operation::Create(rec.clone())),
            }
        }

        tracing::debug!(
            removes = removes.len(),
            updates = updates.len(),
            creates = creates.len(),
            "slide transition"
        );

        self.live = records.iter().map(|r| (r.id.clone(), r.clone())).collect();
        self.order = records.iter().map(|r| r.id.clone()).collect();
        self.slides_seen += 1;

        let mut ops = removes;
        ops.append(&mut updates);
        ops.append(&mut creates);
        Ok(ops)
    }
}

/// Field-by-field comparison of one id's previous and current record.
///
/// Returns an empty list when the records are equal. A kind change yields a single
/// [`FieldDelta::Kind`] replacement carrying the whole new record.
pub fn diff_records(prev: &ShapeRecord, curr: &ShapeRecord) -> Vec<FieldChange> {
    if prev.kind != curr.kind {
        return vec![FieldChange {
            mode: ChangeMode::Replace,
            delta: FieldDelta::Kind {
                from: prev.kind,
                to: Box::new(curr.clone()),
            },
        }];
    }

    let kind = curr.kind;
    let mut changes = Vec::new();

    if kind.is_segment() {
        let (from, to) = (segment_of(prev.extent), segment_of(curr.extent));
        if from != to {
            changes.push(FieldChange {
                mode: interpolate_if(from.is_some() && to.is_some()),
                delta: FieldDelta::Endpoints { from, to },
            });
        }
    } else {
        if prev.position != curr.position {
            changes.push(FieldChange {
                mode: interpolate_if(prev.position.is_some() && curr.position.is_some()),
                delta: FieldDelta::Position {
                    from: prev.position,
                    to: curr.position,
                },
            });
        }
        let (from, to) = (prev.size(), curr.size());
        if from != to {
            // Text boxes move but never resize continuously.
            let both = from.is_some() && to.is_some();
            changes.push(FieldChange {
                mode: interpolate_if(both && kind != ShapeKind::TextBox),
                delta: FieldDelta::Size { from, to },
            });
        }
    }

    if prev.style != curr.style {
        changes.push(replace(FieldDelta::Style {
            from: prev.style,
            to: curr.style,
        }));
    }
    if prev.text != curr.text {
        changes.push(replace(FieldDelta::Text {
            from: prev.text.clone(),
            to: curr.text.clone(),
        }));
    }
    if prev.table != curr.table {
        changes.push(replace(FieldDelta::Table {
            to: curr.table.clone(),
        }));
    }
    if prev.image != curr.image {
        changes.push(replace(FieldDelta::Image {
            to: curr.image.clone(),
        }));
    }

    changes
}

fn segment_of(extent: Option<Extent>) -> Option<Line> {
    match extent {
        Some(Extent::Segment(l)) => Some(l),
        _ => None,
    }
}

fn interpolate_if(cond: bool) -> ChangeMode {
    if cond {
        ChangeMode::Interpolate
    } else {
        ChangeMode::Replace
    }
}

fn replace(delta: FieldDelta) -> FieldChange {
    FieldChange {
        mode: ChangeMode::Replace,
        delta,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diff/differ.rs"]
mod tests;
