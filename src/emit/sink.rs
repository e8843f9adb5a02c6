use crate::diff::ops::Operation;
use crate::foundation::core::Rgb8;
use crate::foundation::error::DeckmorphResult;
use crate::foundation::units::SceneFrame;
use crate::model::record::ShapeRecord;

/// Configuration handed to a [`SceneEmitter`] before the first slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitConfig {
    /// Scene canvas.
    pub frame: SceneFrame,
    /// Deck background color.
    pub background: Rgb8,
    /// Number of slides that will be pushed.
    pub slide_count: usize,
}

/// Consumer of the scene timeline (a renderer, a code generator, an animation player).
///
/// Ordering contract: `push_slide` is called once per slide in strictly increasing slide order,
/// with the operations that morph the previous slide into this one. For slide 0 these are all
/// `Create`s.
pub trait SceneEmitter {
    /// Called once before any slide is pushed.
    fn begin(&mut self, cfg: EmitConfig) -> DeckmorphResult<()>;
    /// Push one slide's records and its incoming transition.
    fn push_slide(
        &mut self,
        slide_index: usize,
        records: &[ShapeRecord],
        operations: &[Operation],
    ) -> DeckmorphResult<()>;
    /// Called once after the last slide.
    fn end(&mut self) -> DeckmorphResult<()>;
}

/// One slide as captured by [`InMemoryEmitter`].
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedSlide {
    /// 0-based slide index.
    pub slide_index: usize,
    /// Records of the slide.
    pub records: Vec<ShapeRecord>,
    /// Incoming transition operations.
    pub operations: Vec<Operation>,
}

/// In-memory emitter for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryEmitter {
    cfg: Option<EmitConfig>,
    slides: Vec<EmittedSlide>,
    finished: bool,
}

impl InMemoryEmitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<EmitConfig> {
        self.cfg
    }

    /// Captured slides in push order.
    pub fn slides(&self) -> &[EmittedSlide] {
        &self.slides
    }

    /// Return `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SceneEmitter for InMemoryEmitter {
    fn begin(&mut self, cfg: EmitConfig) -> DeckmorphResult<()> {
        self.cfg = Some(cfg);
        self.slides.clear();
        self.finished = false;
        Ok(())
    }

    fn push_slide(
        &mut self,
        slide_index: usize,
        records: &[ShapeRecord],
        operations: &[Operation],
    ) -> DeckmorphResult<()> {
        self.slides.push(EmittedSlide {
            slide_index,
            records: records.to_vec(),
            operations: operations.to_vec(),
        });
        Ok(())
    }

    fn end(&mut self) -> DeckmorphResult<()> {
        self.finished = true;
        Ok(())
    }
}
