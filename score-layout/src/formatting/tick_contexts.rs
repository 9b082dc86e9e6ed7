//! One TickContext per distinct tick position, kept in time order.
use std::ops::Deref;

use log::debug;

use crate::{
    error::{LayoutError, LayoutResult},
    primitives::TickPosition,
    settings::LayoutSettings,
};

use super::{TickContext, TickContextId, Tickable};

/// Mutable access to a slot of [TickContexts].
///
/// Everything but the tick position can be changed, use
/// [TickContexts::move_context] to move the slot in time.
#[derive(Debug)]
pub struct TickContextMut<'a, T> {
    context: &'a mut TickContext<T>,
}
impl<'a, T> Deref for TickContextMut<'a, T> {
    type Target = TickContext<T>;
    fn deref(&self) -> &Self::Target {
        self.context
    }
}
impl<'a, T: Tickable> TickContextMut<'a, T> {
    pub fn add_tickable(&mut self, tickable: impl Into<Option<T>>) -> LayoutResult<&mut Self> {
        self.context.add_tickable(tickable)?;
        Ok(self)
    }
    pub fn tickables_mut(&mut self) -> &mut [T] {
        self.context.tickables_mut()
    }
    pub fn measure(&mut self) -> &mut Self {
        self.context.measure();
        self
    }
    pub fn place(&mut self) -> &mut Self {
        self.context.place();
        self
    }
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.context.set_x(x);
        self
    }
    pub fn set_pixels_used(&mut self, pixels_used: f64) -> &mut Self {
        self.context.set_pixels_used(pixels_used);
        self
    }
    pub fn set_padding(&mut self, padding: f64) -> &mut Self {
        self.context.set_padding(padding);
        self
    }
}

#[derive(Debug)]
pub struct TickContexts<T> {
    contexts: Vec<TickContext<T>>,
    next_id: usize,
    settings: LayoutSettings,
}
impl<T: Tickable> TickContexts<T> {
    pub fn new() -> Self {
        Self::with_settings(LayoutSettings::default())
    }
    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self {
            contexts: Vec::new(),
            next_id: 0,
            settings,
        }
    }

    /// Add tickable to the slot at position, creating slot if needed.
    ///
    /// # Returns
    /// Id of the slot, which tickable now belongs to.
    pub fn add_tickable(
        &mut self,
        position: TickPosition,
        tickable: impl Into<Option<T>>,
    ) -> LayoutResult<TickContextId> {
        let tickable = tickable.into().ok_or(LayoutError::InvalidArgument(
            format!("Invalid tickable added at position {}.", position),
        ))?;
        let index = match self
            .contexts
            .iter()
            .position(|context| context.current_tick() >= position)
        {
            Some(idx) if self.contexts[idx].current_tick() == position => idx,
            Some(idx) => self.insert_context(idx, position),
            None => self.insert_context(self.contexts.len(), position),
        };
        let context = &mut self.contexts[index];
        context.add_tickable(tickable)?;
        Ok(context.id())
    }

    fn insert_context(&mut self, index: usize, position: TickPosition) -> usize {
        let id = TickContextId(self.next_id);
        self.next_id += 1;
        debug!("new tick context {:?} at {}", id, position);
        self.contexts
            .insert(index, TickContext::with_settings(id, position, &self.settings));
        index
    }

    pub fn get(&self, id: TickContextId) -> Option<&TickContext<T>> {
        self.contexts.iter().find(|context| context.id() == id)
    }
    pub fn get_mut(&mut self, id: TickContextId) -> Option<TickContextMut<T>> {
        self.contexts
            .iter_mut()
            .find(|context| context.id() == id)
            .map(|context| TickContextMut { context })
    }

    /// Move slot to another tick, keeping the time order.
    ///
    /// Fails, if the tick is taken by another slot.
    pub fn move_context(&mut self, id: TickContextId, tick: TickPosition) -> LayoutResult<()> {
        let index = self
            .contexts
            .iter()
            .position(|context| context.id() == id)
            .ok_or(LayoutError::InvalidArgument(format!(
                "No tick context with id {:?}",
                id
            )))?;
        if let Some(other) = self.at_position(tick) {
            if other.id() == id {
                return Ok(());
            }
            return Err(LayoutError::InvalidArgument(format!(
                "Tick {} is already taken by {:?}",
                tick,
                other.id()
            )));
        }
        let mut context = self.contexts.remove(index);
        context.set_current_tick(tick);
        let index = self
            .contexts
            .iter()
            .position(|context| context.current_tick() > tick)
            .unwrap_or(self.contexts.len());
        debug!("tick context {:?} moved to {}", id, tick);
        self.contexts.insert(index, context);
        Ok(())
    }
    pub fn at_position(&self, position: TickPosition) -> Option<&TickContext<T>> {
        self.contexts
            .iter()
            .find(|context| context.current_tick() == position)
    }

    /// The slot, following given one in time.
    pub fn next_context(&self, id: TickContextId) -> Option<&TickContext<T>> {
        let index = self.contexts.iter().position(|context| context.id() == id)?;
        self.contexts.get(index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickContext<T>> {
        self.contexts.iter()
    }
    pub fn len(&self) -> usize {
        self.contexts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn measure_all(&mut self) -> &mut Self {
        for context in self.contexts.iter_mut() {
            context.measure();
        }
        self
    }
    pub fn place_all(&mut self) -> &mut Self {
        for context in self.contexts.iter_mut() {
            context.place();
        }
        self
    }
}
impl<T: Tickable> Default for TickContexts<T> {
    fn default() -> Self {
        Self::new()
    }
}
