//! Selection engine: hit testing plus cycling through overlapping hits.
//!
//! Purpose
//! - A click at a new location rescans the store and produces an ordered
//!   candidate list (segments, triangles, quad sub-triangles).
//! - Repeated clicks at the same location walk a cursor through that list,
//!   wrapping at the end, without rescanning.
//!
//! State is `{NoSelection, HasCandidates} × cursor`; see `SelectionState`.
//!
//! Code cross-refs: `geom2::{barycentric, point_segment_distance}`, `store::PrimitiveStore`.

mod scan;
mod types;

pub use scan::scan;
pub use types::{
    CandidateKind, CandidateOrder, ClickLocation, QuadHighlight, SameLocationPolicy, SelectCfg,
    SelectionCandidate, SelectionState,
};

use crate::error::GeomError;
use crate::geom2::Vec2;
use crate::store::PrimitiveStore;

/// Selection engine. Reads a `PrimitiveStore`, owns only derived state.
#[derive(Clone, Debug, Default)]
pub struct Selector {
    cfg: SelectCfg,
    state: SelectionState,
}

impl Selector {
    pub fn new(cfg: SelectCfg) -> Self {
        Self {
            cfg,
            state: SelectionState::default(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SelectCfg {
        &self.cfg
    }

    #[inline]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Compare `p` with the click that produced the current list.
    pub fn classify(&self, p: Vec2) -> ClickLocation {
        match self.state.last_click {
            Some(prev) if self.cfg.same_location.is_same(prev, p) => ClickLocation::SameLocation,
            _ => ClickLocation::NewLocation,
        }
    }

    /// Rescan or cycle, then return the active candidate.
    pub fn select(
        &mut self,
        store: &PrimitiveStore,
        p: Vec2,
        loc: ClickLocation,
    ) -> Option<SelectionCandidate> {
        match loc {
            ClickLocation::NewLocation => {
                let found = scan(store, p, &self.cfg);
                tracing::debug!(x = p.x(), y = p.y(), candidates = found.len(), "rescan");
                self.state.replace(found, p);
            }
            ClickLocation::SameLocation => self.state.advance(),
        }
        let active = self.state.active().copied();
        if let Some(c) = &active {
            match c.describe(store) {
                Ok(desc) => tracing::info!(
                    cursor = self.state.cursor,
                    total = self.state.candidates.len(),
                    "selected {desc}"
                ),
                Err(e) => tracing::warn!(error = %e, "active candidate not in store"),
            }
        }
        active
    }

    /// `classify` followed by `select`.
    pub fn click(
        &mut self,
        store: &PrimitiveStore,
        p: Vec2,
    ) -> (ClickLocation, Option<SelectionCandidate>) {
        let loc = self.classify(p);
        (loc, self.select(store, p, loc))
    }

    /// Points to highlight for the active candidate (empty if none).
    ///
    /// A quad hit highlights the whole strip unless `QuadHighlight::SubTriangle`.
    pub fn highlight(&self, store: &PrimitiveStore) -> Result<Vec<Vec2>, GeomError> {
        let Some(active) = self.state.active() else {
            return Ok(Vec::new());
        };
        match (*active, self.cfg.quad_highlight) {
            (SelectionCandidate::Quad { strip, .. }, QuadHighlight::WholeStrip) => {
                Ok(store.quad_strip(strip)?.vertices().to_vec())
            }
            _ => active.vertices(store),
        }
    }

    /// Back to `NoSelection`.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

#[cfg(test)]
mod tests;
