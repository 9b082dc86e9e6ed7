//! Owner of all tuplets of the voice.
//!
//! Notes are held by the caller, arena receives them as a slice on
//! every call that needs notes. A tuplet is attached to its notes
//! (pushed to their tuplet stacks) as soon as it is inserted, and is
//! detached and attached again on every ratio change.
use std::f64::consts::PI;

use derivative::Derivative;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    error::{LayoutError, LayoutResult},
    render::{digit_glyphs, FontMetrics, RenderContext},
    settings::{LayoutSettings, TupletSettings},
};

use super::{
    Location, NoteId, StemDirection, StemmableNote, Tuplet, TupletId,
    TupletOptions, COLON_WIDTH,
};

/// Computed placement of the tuplet.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct TupletGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// width of the number (or ratio)
    pub text_width: f64,
    /// left edge of the number (or ratio)
    pub text_x: f64,
    /// length of each horizontal bracket line. None if bracket is not
    /// drawn.
    pub bracket_segment: Option<f64>,
}

fn note<N: StemmableNote>(notes: &[N], id: NoteId) -> LayoutResult<&N> {
    notes.get(id.0).ok_or(LayoutError::InvalidArgument(format!(
        "Note {} is not in the voice of {} notes",
        id.0,
        notes.len()
    )))
}

fn check_members<N: StemmableNote>(notes: &[N], members: &[NoteId]) -> LayoutResult<()> {
    for id in members.iter() {
        note(notes, *id)?;
    }
    Ok(())
}

/// Ids of removed tuplets are never given to new ones.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct TupletArena {
    tuplets: Vec<Option<Tuplet>>,
    settings: TupletSettings,
    #[derivative(Debug = "ignore")]
    font: Box<dyn FontMetrics>,
}
impl TupletArena {
    pub fn new(font: impl FontMetrics + 'static) -> Self {
        Self::with_settings(font, &LayoutSettings::default())
    }
    pub fn with_settings(
        font: impl FontMetrics + 'static,
        settings: &LayoutSettings,
    ) -> Self {
        Self {
            tuplets: Vec::new(),
            settings: settings.tuplet,
            font: Box::new(font),
        }
    }

    pub fn get(&self, id: TupletId) -> Option<&Tuplet> {
        self.tuplets.get(id.0)?.as_ref()
    }
    pub fn get_mut(&mut self, id: TupletId) -> Option<&mut Tuplet> {
        self.tuplets.get_mut(id.0)?.as_mut()
    }
    pub fn iter(&self) -> impl Iterator<Item = (TupletId, &Tuplet)> {
        self.tuplets
            .iter()
            .enumerate()
            .filter_map(|(idx, tuplet)| Some((TupletId(idx), tuplet.as_ref()?)))
    }

    fn tuplet(&self, id: TupletId) -> LayoutResult<&Tuplet> {
        self.get(id).ok_or(LayoutError::InvalidArgument(format!(
            "No tuplet with id {:?}",
            id
        )))
    }

    /// Group notes of the voice into tuplet.
    ///
    /// # Example
    /// ```
    /// # use score_layout::{error::LayoutError, render::FontMetrics, tuplet::*};
    /// # use score_layout::formatting::{TickContextId, Tickable, TickableMetrics};
    /// # use score_layout::{primitives::Duration, render::Stave};
    /// # #[derive(Default)]
    /// # struct Eighth(Vec<TupletId>);
    /// # impl Tickable for Eighth {
    /// #     fn duration(&self) -> Duration { Duration::new(1, 8).unwrap() }
    /// #     fn metrics(&self) -> TickableMetrics { Default::default() }
    /// #     fn assign_tick_context(&mut self, _: TickContextId) {}
    /// # }
    /// # impl StemmableNote for Eighth {
    /// #     fn stem_x(&self) -> f64 { 0.0 }
    /// #     fn tie_left_x(&self) -> f64 { 0.0 }
    /// #     fn tie_right_x(&self) -> f64 { 0.0 }
    /// #     fn stem_direction(&self) -> StemDirection { StemDirection::Up }
    /// #     fn stem_extents(&self) -> StemExtents { Default::default() }
    /// #     fn stave(&self) -> Option<&dyn Stave> { None }
    /// #     fn tuplet_stack(&self) -> &[TupletId] { &self.0 }
    /// #     fn tuplet_stack_mut(&mut self) -> &mut Vec<TupletId> { &mut self.0 }
    /// # }
    /// # struct Font;
    /// # impl FontMetrics for Font {
    /// #     fn glyph_width(&self, _: &str, _: f64) -> f64 { 10.0 }
    /// # }
    /// let mut voice: Vec<Eighth> = (0..4).map(|_| Eighth::default()).collect();
    /// let mut arena = TupletArena::new(Font);
    /// let triplet = arena
    ///     .insert(&mut voice, vec![NoteId(0), NoteId(1), NoteId(2)], Default::default())
    ///     .unwrap();
    /// assert_eq!(arena.get(triplet).unwrap().note_count(), 3);
    /// assert_eq!(arena.get(triplet).unwrap().notes_occupied(), 2);
    /// assert!(!arena.get(triplet).unwrap().is_ratioed());
    /// assert_eq!(voice[0].tuplet_stack(), &[triplet]);
    /// assert!(voice[3].tuplet_stack().is_empty());
    ///
    /// assert_eq!(
    ///     arena.insert(&mut voice, vec![NoteId(3)], Default::default()),
    ///     Err(LayoutError::InsufficientNotes(1))
    /// );
    /// ```
    pub fn insert<N: StemmableNote>(
        &mut self,
        notes: &mut [N],
        members: Vec<NoteId>,
        options: TupletOptions,
    ) -> LayoutResult<TupletId> {
        match members.len() {
            0 => {
                return Err(LayoutError::InvalidArgument(
                    "No notes provided for tuplet.".to_string(),
                ))
            }
            1 => return Err(LayoutError::InsufficientNotes(1)),
            _ => (),
        }
        check_members(notes, &members)?;
        if members.iter().unique().count() != members.len() {
            return Err(LayoutError::InvalidArgument(format!(
                "Tuplet notes are repeated: {:?}",
                members
            )));
        }
        let num_notes = options.num_notes.unwrap_or(members.len() as u32);
        let notes_occupied = options.notes_occupied.unwrap_or(2);
        if num_notes == 0 || notes_occupied == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "Tuplet ratio should be positive: {}:{}",
                num_notes, notes_occupied
            )));
        }
        if options.num_notes.is_none()
            && !members.iter().map(|id| notes[id.0].duration()).all_equal()
        {
            warn!(
                "Tuplet of notes {:?} has different durations, \
                but amount of notes is not specified",
                members
            );
        }
        let bracketed = options
            .bracketed
            .unwrap_or_else(|| members.iter().any(|id| !notes[id.0].is_beamed()));
        let ratioed = options
            .ratioed
            .unwrap_or((notes_occupied as i64 - num_notes as i64).abs() > 1);

        let mut tuplet = Tuplet {
            notes: members,
            num_notes,
            notes_occupied,
            bracketed,
            ratioed,
            location: options.location,
            y_offset: options.y_offset,
            point: self.settings.point,
            num_glyphs: Vec::new(),
            denom_glyphs: Vec::new(),
        };
        self.resolve_glyphs(&mut tuplet);
        let id = TupletId(self.tuplets.len());
        debug!(
            "tuplet {:?} {}:{} over {:?}",
            id, num_notes, notes_occupied, tuplet.notes
        );
        attach(notes, id, &tuplet.notes);
        self.tuplets.push(Some(tuplet));
        Ok(id)
    }

    fn resolve_glyphs(&self, tuplet: &mut Tuplet) {
        tuplet.num_glyphs =
            digit_glyphs(tuplet.num_notes, tuplet.point, self.font.as_ref());
        tuplet.denom_glyphs =
            digit_glyphs(tuplet.notes_occupied, tuplet.point, self.font.as_ref());
    }

    /// Detach tuplet from its notes and forget it.
    ///
    /// The id stays vacant: [TupletArena::get] returns None for it from
    /// now on.
    pub fn remove<N: StemmableNote>(
        &mut self,
        notes: &mut [N],
        id: TupletId,
    ) -> LayoutResult<Tuplet> {
        check_members(notes, &self.tuplet(id)?.notes)?;
        let tuplet = self
            .tuplets
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(LayoutError::InvalidArgument(format!(
                "No tuplet with id {:?}",
                id
            )))?;
        detach(notes, id, &tuplet.notes);
        debug!("tuplet {:?} removed", id);
        Ok(tuplet)
    }

    pub fn notes_occupied(&self, id: TupletId) -> LayoutResult<u32> {
        Ok(self.tuplet(id)?.notes_occupied)
    }

    /// Redefine the space, which notes of the tuplet occupy.
    ///
    /// `ratioed` flag is kept as it was.
    pub fn set_notes_occupied<N: StemmableNote>(
        &mut self,
        notes: &mut [N],
        id: TupletId,
        notes_occupied: u32,
    ) -> LayoutResult<()> {
        if notes_occupied == 0 {
            return Err(LayoutError::InvalidArgument(
                "Tuplet can not occupy zero notes".to_string(),
            ));
        }
        let mut tuplet = self.tuplet(id)?.clone();
        check_members(notes, &tuplet.notes)?;
        detach(notes, id, &tuplet.notes);
        tuplet.notes_occupied = notes_occupied;
        self.resolve_glyphs(&mut tuplet);
        attach(notes, id, &tuplet.notes);
        debug!(
            "tuplet {:?} ratio redefined: {}:{}",
            id, tuplet.num_notes, notes_occupied
        );
        self.tuplets[id.0] = Some(tuplet);
        Ok(())
    }

    /// Set location from raw value: 1 is above, -1 is below.
    pub fn set_location(&mut self, id: TupletId, location: i32) -> LayoutResult<()> {
        let location = Location::try_from(location)?;
        self.get_mut(id)
            .ok_or(LayoutError::InvalidArgument(format!(
                "No tuplet with id {:?}",
                id
            )))?
            .set_location(location);
        Ok(())
    }

    /// Difference between the deepest and the shallowest nesting of the
    /// tuplet notes, counting only other tuplets at the same side.
    pub fn nested_tuplet_count<N: StemmableNote>(
        &self,
        notes: &[N],
        id: TupletId,
    ) -> LayoutResult<u32> {
        let tuplet = self.tuplet(id)?;
        let counts = tuplet
            .notes
            .iter()
            .map(|note_id| -> LayoutResult<u32> {
                let count = note(notes, *note_id)?
                    .tuplet_stack()
                    .iter()
                    .filter(|other| **other != id)
                    .filter_map(|other| self.get(*other))
                    .filter(|other| other.location == tuplet.location)
                    .count();
                Ok(count as u32)
            })
            .collect::<LayoutResult<Vec<u32>>>()?;
        Ok(counts
            .into_iter()
            .minmax()
            .into_option()
            .map(|(min, max)| max - min)
            .unwrap_or(0))
    }

    /// Vertical position of the bracket line.
    pub fn y_position<N: StemmableNote>(
        &self,
        notes: &[N],
        id: TupletId,
    ) -> LayoutResult<f64> {
        let tuplet = self.tuplet(id)?;
        let settings = &self.settings;
        let first_note = note(notes, tuplet.notes[0])?;
        let stave = first_note.stave().ok_or(LayoutError::MissingRenderTarget(
            format!("first note of tuplet {:?} has no stave", id),
        ))?;
        let nested_y_offset = self.nested_tuplet_count(notes, id)? as f64
            * settings.nesting_offset
            * -tuplet.location.sign();

        let mut y = match tuplet.location {
            Location::Above => stave.y_for_line(0.0) - settings.stave_clearance_above,
            Location::Below => stave.y_for_line(4.0) + settings.stave_clearance_below,
        };
        for note_id in tuplet.notes.iter() {
            let note = note(notes, *note_id)?;
            let extents = note.stem_extents();
            y = match (tuplet.location, note.stem_direction()) {
                (Location::Above, StemDirection::Up) => {
                    y.min(extents.top_y - settings.stem_tip_clearance)
                }
                (Location::Above, StemDirection::Down) => {
                    y.min(extents.base_y - settings.stem_base_clearance)
                }
                (Location::Below, StemDirection::Up) => {
                    y.max(extents.base_y + settings.stem_base_clearance)
                }
                (Location::Below, StemDirection::Down) => {
                    y.max(extents.top_y + settings.stem_tip_clearance)
                }
            };
        }
        Ok(y + nested_y_offset + tuplet.y_offset)
    }

    pub fn geometry<N: StemmableNote>(
        &self,
        notes: &[N],
        id: TupletId,
    ) -> LayoutResult<TupletGeometry> {
        let tuplet = self.tuplet(id)?;
        let padding = self.settings.bracket_padding;
        let first_note = note(notes, tuplet.notes[0])?;
        let last_note = note(notes, tuplet.notes[tuplet.notes.len() - 1])?;
        let (x, width) = match tuplet.bracketed {
            false => {
                let x = first_note.stem_x();
                (x, last_note.stem_x() - x)
            }
            true => {
                let x = first_note.tie_left_x() - padding;
                (x, last_note.tie_right_x() - x + padding)
            }
        };
        let text_width = tuplet.text_width();
        let bracket_segment = match tuplet.bracketed {
            false => None,
            true => {
                let length = width / 2.0 - text_width / 2.0 - padding;
                (length > 0.0).then_some(length)
            }
        };
        Ok(TupletGeometry {
            x,
            y: self.y_position(notes, id)?,
            width,
            text_width,
            text_x: x + width / 2.0 - text_width / 2.0,
            bracket_segment,
        })
    }

    /// Draw bracket and number (or ratio) of the tuplet.
    pub fn draw<N: StemmableNote>(
        &self,
        context: &mut dyn RenderContext,
        notes: &[N],
        id: TupletId,
    ) -> LayoutResult<()> {
        let geometry = self.geometry(notes, id)?;
        let tuplet = self.tuplet(id)?;
        let point = tuplet.point;

        if let Some(line_width) = geometry.bracket_segment {
            let TupletGeometry {
                x,
                y,
                width,
                text_width,
                ..
            } = geometry;
            context.fill_rect(x, y, line_width, 1.0);
            context.fill_rect(
                x + width / 2.0 + text_width / 2.0 + self.settings.bracket_padding,
                y,
                line_width,
                1.0,
            );
            let leg_y = match tuplet.location {
                Location::Above => y,
                Location::Below => y + 1.0,
            };
            let leg_height = tuplet.location.sign() * self.settings.bracket_height;
            context.fill_rect(x, leg_y, 1.0, leg_height);
            context.fill_rect(x + width, leg_y, 1.0, leg_height);
        }

        let glyph_y = geometry.y + point / 3.0 - 2.0;
        let mut x_offset = 0.0;
        for glyph in tuplet.num_glyphs.iter().rev() {
            glyph.render(context, geometry.text_x + x_offset, glyph_y);
            x_offset += glyph.width();
        }
        if tuplet.ratioed {
            let colon_x = geometry.text_x + x_offset + point * COLON_WIDTH / 2.0;
            let colon_radius = point * 0.06;
            for dot_y in [geometry.y - point * 0.08, geometry.y + point * 0.12] {
                context.begin_path();
                context.arc(colon_x, dot_y, colon_radius, 0.0, PI * 2.0, true);
                context.close_path();
                context.fill();
            }
            x_offset += point * COLON_WIDTH;
            for glyph in tuplet.denom_glyphs.iter().rev() {
                glyph.render(context, geometry.text_x + x_offset, glyph_y);
                x_offset += glyph.width();
            }
        }
        Ok(())
    }
}

fn attach<N: StemmableNote>(notes: &mut [N], id: TupletId, members: &[NoteId]) {
    for note_id in members.iter() {
        if let Some(note) = notes.get_mut(note_id.0) {
            note.tuplet_stack_mut().push(id);
        }
    }
}

fn detach<N: StemmableNote>(notes: &mut [N], id: TupletId, members: &[NoteId]) {
    for note_id in members.iter() {
        if let Some(note) = notes.get_mut(note_id.0) {
            let stack = note.tuplet_stack_mut();
            if let Some(idx) = stack.iter().position(|other| *other == id) {
                stack.remove(idx);
            }
        }
    }
}
