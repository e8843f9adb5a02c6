//! Deck-level glue: build each slide, diff it against the previous one, hand the result on.

use crate::assets::store::ImageStore;
use crate::diff::differ::SlideSequenceDiffer;
use crate::diff::ops::Operation;
use crate::document::raw::{Deck, RawSlide};
use crate::emit::sink::{EmitConfig, SceneEmitter};
use crate::foundation::core::Rgb8;
use crate::foundation::error::DeckmorphResult;
use crate::foundation::units::SceneFrame;
use crate::model::builder::ShapeModelBuilder;
use crate::model::record::ShapeRecord;

/// Master token the deck background resolves from.
pub const BACKGROUND_TOKEN: &str = "bg1";

/// One slide of the scene timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideScene {
    /// 0-based slide index.
    pub slide_index: usize,
    /// Canonical records in z-order.
    pub records: Vec<ShapeRecord>,
    /// Operations morphing the previous slide into this one.
    pub operations: Vec<Operation>,
}

/// The whole deck as one continuous timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTimeline {
    /// Scene canvas.
    pub frame: SceneFrame,
    /// Background color.
    pub background: Rgb8,
    /// Slides in document order.
    pub slides: Vec<SlideScene>,
}

/// Incremental deck conversion: slides must be pushed in document order.
#[derive(Debug)]
pub struct DeckPipeline<'a> {
    builder: ShapeModelBuilder<'a>,
    differ: SlideSequenceDiffer,
    frame: SceneFrame,
}

impl<'a> DeckPipeline<'a> {
    /// Pipeline over `deck`'s theme, master map and slide size.
    pub fn new(deck: &'a Deck) -> DeckmorphResult<Self> {
        let frame = deck.frame()?;
        Ok(Self {
            builder: ShapeModelBuilder::new(&deck.theme, &deck.master_map, frame),
            differ: SlideSequenceDiffer::new(),
            frame,
        })
    }

    /// Scene canvas.
    pub fn frame(&self) -> SceneFrame {
        self.frame
    }

    /// Deck background, resolved through the master map.
    pub fn background(&self) -> Rgb8 {
        self.builder.resolver().resolve(BACKGROUND_TOKEN, None, None)
    }

    /// Build and diff the next slide.
    pub fn push_slide(
        &mut self,
        slide: &RawSlide,
        images: &mut dyn ImageStore,
    ) -> DeckmorphResult<SlideScene> {
        let slide_index = self.differ.slides_seen();
        let records = self.builder.build_slide(slide_index, &slide.shapes, images)?;
        let operations = self.differ.diff(&records)?;
        Ok(SlideScene {
            slide_index,
            records,
            operations,
        })
    }

    /// Convert every slide of `deck` into a timeline.
    #[tracing::instrument(skip(deck, images), fields(slides = deck.slides.len()))]
    pub fn run(deck: &Deck, images: &mut dyn ImageStore) -> DeckmorphResult<SceneTimeline> {
        let mut pipeline = DeckPipeline::new(deck)?;
        let slides = deck
            .slides
            .iter()
            .map(|slide| pipeline.push_slide(slide, images))
            .collect::<DeckmorphResult<Vec<_>>>()?;

        tracing::info!(
            slides = slides.len(),
            operations = slides.iter().map(|s| s.operations.len()).sum::<usize>(),
            "deck converted"
        );

        Ok(SceneTimeline {
            frame: pipeline.frame(),
            background: pipeline.background(),
            slides,
        })
    }
}

/// Feed a finished timeline to `emitter` in slide order.
pub fn emit_timeline(
    timeline: &SceneTimeline,
    emitter: &mut dyn SceneEmitter,
) -> DeckmorphResult<()> {
    emitter.begin(EmitConfig {
        frame: timeline.frame,
        background: timeline.background,
        slide_count: timeline.slides.len(),
    })?;
    for slide in &timeline.slides {
        emitter.push_slide(slide.slide_index, &slide.records, &slide.operations)?;
    }
    emitter.end()
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
