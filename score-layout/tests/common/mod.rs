#![allow(dead_code)]
use score_layout::{
    formatting::{ModifierShift, TickContextId, Tickable, TickableMetrics},
    primitives::Duration,
    render::{FontMetrics, RenderContext, Stave},
    tuplet::{StemDirection, StemExtents, StemmableNote, TupletId},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinesStave {
    pub top: f64,
    pub spacing: f64,
}
impl Stave for LinesStave {
    fn y_for_line(&self, line: f64) -> f64 {
        self.top + line * self.spacing
    }
}
pub const STAVE: LinesStave = LinesStave {
    top: 50.0,
    spacing: 10.0,
};

#[derive(Debug, Clone)]
pub struct MockNote {
    pub duration: Duration,
    pub metrics: TickableMetrics,
    pub ignore_ticks: bool,
    pub center_aligned: bool,
    pub modifier_shift: Option<ModifierShift>,
    pub tick_context: Option<TickContextId>,
    pub measure_calls: u32,
    pub x: f64,
    pub stem_direction: StemDirection,
    pub stem_extents: StemExtents,
    pub stave: Option<LinesStave>,
    pub beamed: bool,
    pub tuplets: Vec<TupletId>,
}
impl MockNote {
    pub fn new(duration: &str) -> Self {
        Self {
            duration: duration.parse().expect("invalid duration"),
            metrics: TickableMetrics::default(),
            ignore_ticks: false,
            center_aligned: false,
            modifier_shift: None,
            tick_context: None,
            measure_calls: 0,
            x: 0.0,
            stem_direction: StemDirection::Up,
            stem_extents: StemExtents {
                top_y: 60.0,
                base_y: 90.0,
            },
            stave: Some(STAVE),
            beamed: false,
            tuplets: Vec::new(),
        }
    }
    pub fn with_width(mut self, note_width: f64) -> Self {
        self.metrics.note_width = note_width;
        self
    }
    pub fn ignored(mut self) -> Self {
        self.ignore_ticks = true;
        self
    }
    pub fn at(mut self, x: f64) -> Self {
        self.x = x;
        self
    }
    pub fn stem(mut self, direction: StemDirection, top_y: f64, base_y: f64) -> Self {
        self.stem_direction = direction;
        self.stem_extents = StemExtents { top_y, base_y };
        self
    }
    pub fn beamed(mut self) -> Self {
        self.beamed = true;
        self
    }
}
impl Tickable for MockNote {
    fn duration(&self) -> Duration {
        self.duration
    }
    fn should_ignore_ticks(&self) -> bool {
        self.ignore_ticks
    }
    fn is_center_aligned(&self) -> bool {
        self.center_aligned
    }
    fn measure(&mut self) {
        self.measure_calls += 1;
    }
    fn metrics(&self) -> TickableMetrics {
        self.metrics
    }
    fn modifier_shift(&self) -> Option<ModifierShift> {
        self.modifier_shift
    }
    fn assign_tick_context(&mut self, id: TickContextId) {
        self.tick_context = Some(id)
    }
}
/// Notehead is 10px wide, stem is at its right edge.
impl StemmableNote for MockNote {
    fn stem_x(&self) -> f64 {
        self.x + 10.0
    }
    fn tie_left_x(&self) -> f64 {
        self.x
    }
    fn tie_right_x(&self) -> f64 {
        self.x + 10.0
    }
    fn stem_direction(&self) -> StemDirection {
        self.stem_direction
    }
    fn stem_extents(&self) -> StemExtents {
        self.stem_extents
    }
    fn stave(&self) -> Option<&dyn Stave> {
        self.stave.as_ref().map(|stave| stave as &dyn Stave)
    }
    fn is_beamed(&self) -> bool {
        self.beamed
    }
    fn tuplet_stack(&self) -> &[TupletId] {
        &self.tuplets
    }
    fn tuplet_stack_mut(&mut self) -> &mut Vec<TupletId> {
        &mut self.tuplets
    }
}

/// Every glyph has the same width.
pub struct FixedFont(pub f64);
impl FontMetrics for FixedFont {
    fn glyph_width(&self, _code: &str, _point: f64) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect(f64, f64, f64, f64),
    BeginPath,
    ClosePath,
    Arc { x: f64, y: f64, radius: f64 },
    Fill,
    Glyph(String, f64, f64),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}
impl Recorder {
    pub fn glyphs(&self) -> Vec<(String, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph(code, x, _) => Some((code.clone(), *x)),
                _ => None,
            })
            .collect()
    }
    pub fn rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }
}
impl RenderContext for Recorder {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::FillRect(x, y, width, height));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64, _ccw: bool) {
        self.ops.push(Op::Arc { x, y, radius });
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn draw_glyph(&mut self, code: &str, _point: f64, x: f64, y: f64) {
        self.ops.push(Op::Glyph(code.to_string(), x, y));
    }
}
