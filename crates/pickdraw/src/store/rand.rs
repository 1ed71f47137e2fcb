//! Random scenes in normalized device coordinates (replayable).
//!
//! Purpose
//! - Fill a `PrimitiveStore` with random segments, triangles and quads for
//!   benchmarks and randomized tests. Geometry enters through
//!   `PrimitiveStore::append_point`, the same path real clicks take.
//!
//! Model
//! - Each primitive picks an anchor uniformly in `[-extent, extent]²` and
//!   places its remaining clicks within `size` of the anchor.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DrawMode, PrimitiveStore, StoreCfg};
use crate::geom2::Vec2;

/// Scene size and spread.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub segments: usize,
    pub triangles: usize,
    pub quads: usize,
    /// Half-width of the square that anchors are drawn from.
    pub extent: f64,
    /// Maximum offset of a primitive's later clicks from its anchor.
    pub size: f64,
    pub store: StoreCfg,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            segments: 16,
            triangles: 16,
            quads: 4,
            extent: 1.0,
            size: 0.3,
            store: StoreCfg::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random scene; click order is segments, then triangles, then quads.
pub fn draw_scene(cfg: SceneCfg, tok: ReplayToken) -> PrimitiveStore {
    let mut rng = tok.to_std_rng();
    let mut store = PrimitiveStore::new(cfg.store);
    let ext = cfg.extent.abs();
    let size = cfg.size.abs();
    for (mode, count) in [
        (DrawMode::Line, cfg.segments),
        (DrawMode::Triangle, cfg.triangles),
        (DrawMode::Quad, cfg.quads),
    ] {
        let clicks = mode.points_per_primitive().unwrap_or(0);
        for _ in 0..count {
            let anchor = Vec2::new(
                rng.gen_range(-ext..=ext),
                rng.gen_range(-ext..=ext),
            );
            store.append_point(mode, anchor);
            for _ in 1..clicks {
                let off = Vec2::new(rng.gen_range(-size..=size), rng.gen_range(-size..=size));
                store.append_point(mode, anchor + off);
            }
        }
    }
    store
}
