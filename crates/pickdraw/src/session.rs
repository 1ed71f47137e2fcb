//! Drawing session: the context object UI glue calls into.
//!
//! One `Session` owns the primitive store, the selection engine and the
//! marker lists the renderer reads back after every event. Primary clicks
//! build primitives, secondary clicks select; `clear` wipes everything in one
//! call.
//!
//! Single writer: every operation takes `&mut self`, and the type is `!Sync`,
//! so a session cannot be shared between threads without an external lock.

use std::cell::Cell;
use std::marker::PhantomData;

use crate::error::GeomError;
use crate::geom2::Vec2;
use crate::select::{ClickLocation, SelectCfg, SelectionCandidate, SelectionState, Selector};
use crate::store::{AppendOutcome, DrawMode, PrimitiveStore, QuadStrip, Segment, StoreCfg, Triangle};

/// Mouse button of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Build primitives.
    Primary,
    /// Select primitives.
    Secondary,
}

/// What the last click did; the renderer picks the marker color from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Draw,
    Select,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionCfg {
    pub store: StoreCfg,
    pub select: SelectCfg,
}

/// Result of one click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    Drawn(AppendOutcome),
    Selected {
        location: ClickLocation,
        active: Option<SelectionCandidate>,
    },
}

/// Read-only views handed to the renderer after an event.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub segments: &'a [Segment],
    pub triangles: &'a [Triangle],
    pub quad_strips: &'a [QuadStrip],
    /// Pending clicks of the active draw mode.
    pub pending: &'a [Vec2],
    /// Clicked points of the primitive under construction.
    pub markers: &'a [Vec2],
    /// Vertices of the active selection candidate.
    pub highlight: &'a [Vec2],
    pub interaction: Interaction,
}

impl Frame<'_> {
    /// Points to draw as markers: the highlight while selecting, else draw feedback.
    pub fn points(&self) -> &[Vec2] {
        match self.interaction {
            Interaction::Select => self.highlight,
            _ => self.markers,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: PrimitiveStore,
    selector: Selector,
    mode: DrawMode,
    interaction: Interaction,
    markers: Vec<Vec2>,
    highlight: Vec<Vec2>,
    _single_writer: PhantomData<Cell<()>>,
}

impl Session {
    pub fn new(cfg: SessionCfg) -> Self {
        Self {
            store: PrimitiveStore::new(cfg.store),
            selector: Selector::new(cfg.select),
            ..Self::default()
        }
    }

    /// Handle one canvas click at `p` (normalized device coordinates).
    pub fn on_click(
        &mut self,
        p: Vec2,
        button: Button,
        mode: DrawMode,
    ) -> Result<ClickOutcome, GeomError> {
        self.mode = mode;
        match button {
            Button::Primary => Ok(ClickOutcome::Drawn(self.draw(p))),
            Button::Secondary => self.select(p),
        }
    }

    fn draw(&mut self, p: Vec2) -> AppendOutcome {
        if self.interaction == Interaction::Select {
            self.highlight.clear();
        }
        self.interaction = Interaction::Draw;
        if self.mode != DrawMode::None {
            self.markers.push(p);
        }
        let out = self.store.append_point(self.mode, p);
        if matches!(out, AppendOutcome::Committed(_)) {
            self.markers.clear();
        }
        out
    }

    fn select(&mut self, p: Vec2) -> Result<ClickOutcome, GeomError> {
        self.interaction = Interaction::Select;
        self.markers.clear();
        let (location, active) = self.selector.click(&self.store, p);
        self.highlight = self.selector.highlight(&self.store)?;
        Ok(ClickOutcome::Selected { location, active })
    }

    /// Wipe store, pending buffers, markers and selection; draw mode back to `Line`.
    pub fn clear(&mut self) {
        self.store.reset();
        self.selector.clear();
        self.markers.clear();
        self.highlight.clear();
        self.interaction = Interaction::Idle;
        self.mode = DrawMode::Line;
        tracing::debug!("session cleared");
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            segments: self.store.segments(),
            triangles: self.store.triangles(),
            quad_strips: self.store.quad_strips(),
            pending: self.store.pending(self.mode),
            markers: &self.markers,
            highlight: &self.highlight,
            interaction: self.interaction,
        }
    }

    #[inline]
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    #[inline]
    pub fn store(&self) -> &PrimitiveStore {
        &self.store
    }

    #[inline]
    pub fn selection(&self) -> &SelectionState {
        self.selector.state()
    }
}

/// Interleave `x, y` as `f32` for vertex-buffer upload.
pub fn flatten(points: &[Vec2]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x() as f32, p.y() as f32])
        .collect()
}
