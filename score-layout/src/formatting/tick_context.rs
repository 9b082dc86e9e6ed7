//! Slot of simultaneous events.
//!
//! All tickables of one TickContext start at the same tick and are
//! drawn stacked at the same x. So the slot reserves space of its
//! widest occupant, never the sum of them.
//!
//! Layout is done in two phases: [TickContext::measure] folds metrics
//! of the tickables, [TickContext::place] is called when every slot of
//! the pass knows its x. Both are idempotent, and adding a tickable
//! invalidates the measurement.
use derivative::Derivative;
use log::trace;

use crate::{
    error::{LayoutError, LayoutResult},
    primitives::{Duration, TickPosition},
    settings::LayoutSettings,
};

use super::{TickContextId, Tickable};

/// Folded widths of the slot.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct TickContextMetrics {
    /// reserved width, without padding
    pub width: f64,
    pub note_width: f64,
    pub extra_left_width: f64,
    pub extra_right_width: f64,
}

/// Space of modifiers, that formatter adds between slots.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct ExtraPixels {
    pub left: f64,
    pub right: f64,
    pub extra_left: f64,
    pub extra_right: f64,
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct TickContext<T> {
    id: TickContextId,
    current_tick: TickPosition,
    max_duration: Duration,
    min_duration: Option<Duration>,
    width: f64,
    padding: f64,
    pixels_used: f64,
    x: f64,
    note_width: f64,
    extra_left_width: f64,
    extra_right_width: f64,
    #[derivative(Debug = "ignore")]
    tickables: Vec<T>,
    ignore_ticks: bool,
    measured: bool,
    placed: bool,
}
impl<T: Tickable> TickContext<T> {
    pub fn new(id: TickContextId, current_tick: TickPosition) -> Self {
        Self::with_settings(id, current_tick, &LayoutSettings::default())
    }
    pub fn with_settings(
        id: TickContextId,
        current_tick: TickPosition,
        settings: &LayoutSettings,
    ) -> Self {
        Self {
            id,
            current_tick,
            max_duration: Duration::zero(),
            min_duration: None,
            width: 0.0,
            padding: settings.tick_context.padding,
            pixels_used: 0.0,
            x: 0.0,
            note_width: 0.0,
            extra_left_width: 0.0,
            extra_right_width: 0.0,
            tickables: Vec::new(),
            ignore_ticks: true,
            measured: false,
            placed: false,
        }
    }

    pub fn id(&self) -> TickContextId {
        self.id
    }
    pub fn current_tick(&self) -> TickPosition {
        self.current_tick
    }
    pub fn set_current_tick(&mut self, tick: TickPosition) -> &mut Self {
        self.current_tick = tick;
        self.measured = false;
        self
    }
    /// Longest duration of not ignored tickables.
    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }
    /// Shortest duration of not ignored tickables, None if there are no
    /// such tickables yet.
    pub fn min_duration(&self) -> Option<Duration> {
        self.min_duration
    }
    /// True, until the first not ignored tickable is added.
    ///
    /// Formatter should not take such slot into time-based justification.
    pub fn should_ignore_ticks(&self) -> bool {
        self.ignore_ticks
    }
    pub fn is_measured(&self) -> bool {
        self.measured
    }
    pub fn is_placed(&self) -> bool {
        self.placed
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }
    pub fn pixels_used(&self) -> f64 {
        self.pixels_used
    }
    pub fn set_pixels_used(&mut self, pixels_used: f64) -> &mut Self {
        self.pixels_used = pixels_used;
        self
    }
    pub fn padding(&self) -> f64 {
        self.padding
    }
    pub fn set_padding(&mut self, padding: f64) -> &mut Self {
        self.padding = padding;
        self
    }
    pub fn tickables(&self) -> &[T] {
        &self.tickables
    }
    /// Access to tickables for modification. The slot will be measured
    /// again.
    pub fn tickables_mut(&mut self) -> &mut [T] {
        self.measured = false;
        &mut self.tickables
    }
    pub fn center_aligned_tickables(&self) -> Vec<&T> {
        self.tickables
            .iter()
            .filter(|tickable| tickable.is_center_aligned())
            .collect()
    }

    pub fn metrics(&self) -> TickContextMetrics {
        TickContextMetrics {
            width: self.width,
            note_width: self.note_width,
            extra_left_width: self.extra_left_width,
            extra_right_width: self.extra_right_width,
        }
    }
    /// Width of the widest occupant with its extra space.
    pub fn reserved_width(&self) -> f64 {
        self.width
    }
    /// Width, that justification should allocate for the slot.
    pub fn reported_width(&self) -> f64 {
        self.width + self.padding * 2.0
    }

    /// Put tickable into the slot.
    ///
    /// # Example
    /// ```
    /// # use score_layout::formatting::{TickContext, TickContextId, Tickable, TickableMetrics};
    /// # use score_layout::primitives::Duration;
    /// struct Rest(Option<TickContextId>);
    /// impl Tickable for Rest {
    ///     fn duration(&self) -> Duration { Duration::new(1, 4).unwrap() }
    ///     fn metrics(&self) -> TickableMetrics { Default::default() }
    ///     fn assign_tick_context(&mut self, id: TickContextId) { self.0 = Some(id) }
    /// }
    /// let mut context = TickContext::new(TickContextId(0), Duration::zero());
    /// context.add_tickable(Rest(None)).unwrap();
    /// assert!(context.add_tickable(None::<Rest>).is_err());
    /// assert_eq!(context.tickables()[0].0, Some(TickContextId(0)));
    /// assert_eq!(context.min_duration(), Some(Duration::new(1, 4).unwrap()));
    /// assert!(!context.should_ignore_ticks());
    /// ```
    pub fn add_tickable(
        &mut self,
        tickable: impl Into<Option<T>>,
    ) -> LayoutResult<&mut Self> {
        let mut tickable = tickable.into().ok_or(LayoutError::InvalidArgument(
            "Invalid tickable added.".to_string(),
        ))?;
        if !tickable.should_ignore_ticks() {
            self.ignore_ticks = false;
            let duration = tickable.duration();
            if duration > self.max_duration {
                self.max_duration = duration;
            }
            match self.min_duration {
                None => self.min_duration = Some(duration),
                Some(min) if duration < min => self.min_duration = Some(duration),
                Some(_) => (),
            }
        }
        tickable.assign_tick_context(self.id);
        self.tickables.push(tickable);
        self.measured = false;
        Ok(self)
    }

    /// Measure tickables and reserve width of the widest one.
    pub fn measure(&mut self) -> &mut Self {
        if self.measured {
            return self;
        }
        self.note_width = 0.0;
        self.extra_left_width = 0.0;
        self.extra_right_width = 0.0;
        for tickable in self.tickables.iter_mut() {
            tickable.measure();
            let metrics = tickable.metrics();
            self.extra_left_width = self
                .extra_left_width
                .max(metrics.extra_left_width + metrics.modifier_left_width);
            self.extra_right_width = self
                .extra_right_width
                .max(metrics.extra_right_width + metrics.modifier_right_width);
            self.note_width = self.note_width.max(metrics.note_width);
        }
        self.width = self.note_width + self.extra_left_width + self.extra_right_width;
        self.measured = true;
        trace!(
            "tick context {:?} at {} measured: {:?}",
            self.id,
            self.current_tick,
            self.metrics()
        );
        self
    }

    /// Second phase, after all slots of the pass got their x.
    pub fn place(&mut self) -> &mut Self {
        if self.placed {
            return self;
        }
        self.placed = true;
        self
    }

    /// Left and right pixels, used by modifiers of tickables.
    pub fn extra_pixels(&self) -> ExtraPixels {
        let mut extra = ExtraPixels::default();
        for tickable in self.tickables.iter() {
            let metrics = tickable.metrics();
            extra.extra_left = extra.extra_left.max(metrics.extra_left_width);
            extra.extra_right = extra.extra_right.max(metrics.extra_right_width);
            if let Some(shift) = tickable.modifier_shift() {
                extra.left = extra.left.max(shift.left);
                extra.right = extra.right.max(shift.right);
            }
        }
        extra
    }
}
