//! Hit testing and cycling scenarios.

use super::*;
use crate::store::{DrawMode, PrimitiveStore, QuadAssembly, StoreCfg};

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn store_with(clicks: &[(DrawMode, [f64; 2])]) -> PrimitiveStore {
    store_with_cfg(StoreCfg::default(), clicks)
}

fn store_with_cfg(cfg: StoreCfg, clicks: &[(DrawMode, [f64; 2])]) -> PrimitiveStore {
    let mut s = PrimitiveStore::new(cfg);
    for (mode, p) in clicks {
        s.append_point(*mode, Vec2::from(*p));
    }
    s
}

/// Three horizontal segments through the origin region, 0.005 apart.
fn three_segments() -> PrimitiveStore {
    use DrawMode::Line;
    store_with(&[
        (Line, [-0.5, 0.0]),
        (Line, [0.5, 0.0]),
        (Line, [-0.5, 0.005]),
        (Line, [0.5, 0.005]),
        (Line, [-0.5, -0.005]),
        (Line, [0.5, -0.005]),
    ])
}

#[test]
fn overlapping_segments_cycle_through_all() {
    let store = three_segments();
    let mut sel = Selector::default();
    let p = v(0.0, 0.001);

    let (loc, first) = sel.click(&store, p);
    assert_eq!(loc, ClickLocation::NewLocation);
    assert_eq!(sel.state().candidates().len(), 3);
    let first = first.unwrap();

    let mut visited = vec![first.primitive()];
    for _ in 0..2 {
        let (loc, c) = sel.click(&store, p);
        assert_eq!(loc, ClickLocation::SameLocation);
        visited.push(c.unwrap().primitive());
    }
    visited.sort_by_key(|r| format!("{r:?}"));
    visited.dedup();
    assert_eq!(visited.len(), 3);

    // full period returns to the first
    let (_, again) = sel.click(&store, p);
    assert_eq!(again.unwrap().primitive(), first.primitive());
    assert_eq!(sel.state().cursor(), 0);
}

#[test]
fn segments_kept_in_scan_order_not_distance() {
    let store = three_segments();
    let mut sel = Selector::default();
    // nearest is segment 2 (y = -0.005), but scan order wins
    sel.select(&store, v(0.0, -0.004), ClickLocation::NewLocation);
    let idx: Vec<_> = sel
        .state()
        .candidates()
        .iter()
        .map(|c| match c {
            SelectionCandidate::LineSegment { index, .. } => *index,
            _ => usize::MAX,
        })
        .collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(
        sel.state().closest_segment().map(|c| c.primitive()),
        Some(crate::store::PrimitiveRef::Segment(2))
    );
}

#[test]
fn nearest_first_sorts_by_distance() {
    let store = three_segments();
    let mut sel = Selector::new(SelectCfg {
        order: CandidateOrder::NearestFirst,
        ..SelectCfg::default()
    });
    let active = sel.select(&store, v(0.0, -0.004), ClickLocation::NewLocation);
    assert_eq!(
        active.map(|c| c.primitive()),
        Some(crate::store::PrimitiveRef::Segment(2))
    );
    let d: Vec<f64> = sel.state().candidates().iter().map(|c| c.proximity()).collect();
    assert!(d.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn proximity_threshold_is_strict() {
    use DrawMode::Line;
    let store = store_with(&[(Line, [0.0, 0.0]), (Line, [1.0, 0.0])]);
    let mut sel = Selector::default();
    assert!(sel
        .select(&store, v(0.5, 0.019), ClickLocation::NewLocation)
        .is_some());
    assert!(sel
        .select(&store, v(0.5, 0.03), ClickLocation::NewLocation)
        .is_none());
    assert!(sel.state().is_empty());
    assert_eq!(sel.state().cursor(), 0);
}

#[test]
fn candidates_ordered_segments_triangles_quads() {
    use DrawMode::{Line, Quad, Triangle};
    // quad first in click order, still reported last
    let store = store_with(&[
        (Quad, [-1.0, -1.0]),
        (Quad, [-1.0, 1.0]),
        (Quad, [1.0, -1.0]),
        (Quad, [1.0, 1.0]),
        (Triangle, [-1.0, -1.0]),
        (Triangle, [1.0, -1.0]),
        (Triangle, [0.0, 1.0]),
        (Line, [-1.0, 0.0]),
        (Line, [1.0, 0.0]),
    ]);
    let mut sel = Selector::default();
    sel.select(&store, v(0.0, 0.0), ClickLocation::NewLocation);
    let kinds: Vec<_> = sel.state().candidates().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds.first(), Some(&CandidateKind::LineSegment));
    assert_eq!(kinds[1], CandidateKind::Triangle);
    assert!(kinds[2..].iter().all(|k| *k == CandidateKind::Quad));
    assert!(kinds.len() >= 3);
}

#[test]
fn overlapping_strip_windows_reported_separately() {
    use DrawMode::Quad;
    // below the diagonal only window (0,1,2) covers the click
    let store = store_with(&[
        (Quad, [-1.0, -1.0]),
        (Quad, [-1.0, 1.0]),
        (Quad, [1.0, -1.0]),
        (Quad, [1.0, 1.0]),
    ]);
    let mut sel = Selector::default();
    sel.select(&store, v(-0.5, -0.1), ClickLocation::NewLocation);
    let windows: Vec<_> = sel
        .state()
        .candidates()
        .iter()
        .filter_map(|c| match c {
            SelectionCandidate::Quad { first_vertex, .. } => Some(*first_vertex),
            _ => None,
        })
        .collect();
    assert_eq!(windows, vec![0]);

    // a window spanning two quads of the shared strip
    let store = store_with(&[
        (Quad, [0.0, 0.0]),
        (Quad, [0.0, 1.0]),
        (Quad, [1.0, 0.0]),
        (Quad, [1.0, 1.0]),
        (Quad, [2.0, 0.0]),
        (Quad, [2.0, 1.0]),
        (Quad, [3.0, 0.0]),
        (Quad, [3.0, 1.0]),
    ]);
    sel.select(&store, v(1.4, 0.5), ClickLocation::NewLocation);
    let hit: Vec<_> = sel
        .state()
        .candidates()
        .iter()
        .map(|c| c.primitive())
        .collect();
    assert!(hit.contains(&crate::store::PrimitiveRef::Quad {
        strip: 0,
        first_vertex: 2
    }));
}

#[test]
fn quad_highlight_whole_strip_vs_sub_triangle() {
    use DrawMode::Quad;
    let clicks = [
        (Quad, [0.0, 0.0]),
        (Quad, [0.0, 1.0]),
        (Quad, [1.0, 0.0]),
        (Quad, [1.0, 1.0]),
        (Quad, [2.0, 0.0]),
        (Quad, [2.0, 1.0]),
        (Quad, [3.0, 0.0]),
        (Quad, [3.0, 1.0]),
    ];
    let store = store_with(&clicks);
    let p = v(0.2, 0.2);

    let mut whole = Selector::default();
    whole.select(&store, p, ClickLocation::NewLocation);
    assert_eq!(whole.highlight(&store).unwrap().len(), 8);

    let mut sub = Selector::new(SelectCfg {
        quad_highlight: QuadHighlight::SubTriangle,
        ..SelectCfg::default()
    });
    sub.select(&store, p, ClickLocation::NewLocation);
    assert_eq!(
        sub.highlight(&store).unwrap(),
        vec![v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)]
    );

    let separate = store_with_cfg(
        StoreCfg {
            quad_assembly: QuadAssembly::Separate,
        },
        &clicks,
    );
    whole.select(&separate, v(2.2, 0.2), ClickLocation::NewLocation);
    assert_eq!(whole.highlight(&separate).unwrap().len(), 4);
}

#[test]
fn highlight_segment_and_triangle() {
    use DrawMode::{Line, Triangle};
    let store = store_with(&[
        (Line, [0.0, 0.0]),
        (Line, [1.0, 0.0]),
        (Triangle, [0.0, 0.5]),
        (Triangle, [1.0, 0.5]),
        (Triangle, [0.0, 1.5]),
    ]);
    let mut sel = Selector::default();
    assert!(sel.highlight(&store).unwrap().is_empty());
    sel.select(&store, v(0.5, 0.01), ClickLocation::NewLocation);
    assert_eq!(sel.highlight(&store).unwrap(), vec![v(0.0, 0.0), v(1.0, 0.0)]);
    sel.select(&store, v(0.2, 0.7), ClickLocation::NewLocation);
    assert_eq!(sel.highlight(&store).unwrap().len(), 3);
}

#[test]
fn degenerate_primitives_do_not_block_scan() {
    use DrawMode::{Line, Triangle};
    let store = store_with(&[
        // zero-length line at the origin
        (Line, [0.0, 0.0]),
        (Line, [0.0, 0.0]),
        // collinear triangle through the origin
        (Triangle, [-1.0, 0.0]),
        (Triangle, [0.0, 0.0]),
        (Triangle, [1.0, 0.0]),
        // real triangle around the origin
        (Triangle, [-0.5, -0.5]),
        (Triangle, [0.5, -0.5]),
        (Triangle, [0.0, 0.5]),
    ]);
    let mut sel = Selector::default();
    sel.select(&store, v(0.005, 0.0), ClickLocation::NewLocation);
    let refs: Vec<_> = sel
        .state()
        .candidates()
        .iter()
        .map(|c| c.primitive())
        .collect();
    assert_eq!(
        refs,
        vec![
            crate::store::PrimitiveRef::Segment(0),
            crate::store::PrimitiveRef::Triangle(1)
        ]
    );
    match sel.state().candidates()[0] {
        SelectionCandidate::LineSegment { distance, .. } => assert!((distance - 0.005).abs() < 1e-12),
        _ => panic!("expected segment"),
    }
}

#[test]
fn exact_policy_rescans_on_any_movement() {
    let store = three_segments();
    let mut sel = Selector::default();
    sel.click(&store, v(0.0, 0.001));
    let (loc, _) = sel.click(&store, v(0.0, 0.001 + 1e-12));
    assert_eq!(loc, ClickLocation::NewLocation);
    assert_eq!(sel.state().cursor(), 0);
}

#[test]
fn epsilon_policy_cycles_on_small_movement() {
    let store = three_segments();
    let mut sel = Selector::new(SelectCfg {
        same_location: SameLocationPolicy::Epsilon(1e-3),
        ..SelectCfg::default()
    });
    sel.click(&store, v(0.0, 0.001));
    let (loc, _) = sel.click(&store, v(0.0002, 0.001));
    assert_eq!(loc, ClickLocation::SameLocation);
    assert_eq!(sel.state().cursor(), 1);
    let (loc, _) = sel.click(&store, v(0.3, 0.001));
    assert_eq!(loc, ClickLocation::NewLocation);
}

#[test]
fn any_axis_policy_matches_on_one_coordinate() {
    let p = SameLocationPolicy::AnyAxis;
    assert!(p.is_same(v(0.1, 0.2), v(0.1, 0.9)));
    assert!(p.is_same(v(0.1, 0.2), v(0.7, 0.2)));
    assert!(!p.is_same(v(0.1, 0.2), v(0.7, 0.9)));
    assert!(SameLocationPolicy::Exact.is_same(v(0.1, 0.2), v(0.1, 0.2)));
    assert!(!SameLocationPolicy::Exact.is_same(v(0.1, 0.2), v(0.1, 0.9)));
}

#[test]
fn first_click_is_always_new_location() {
    let store = PrimitiveStore::default();
    let mut sel = Selector::default();
    assert_eq!(sel.classify(v(0.0, 0.0)), ClickLocation::NewLocation);
    let (_, c) = sel.click(&store, v(0.0, 0.0));
    assert!(c.is_none());
    // same spot on an empty list stays empty
    let (loc, c) = sel.click(&store, v(0.0, 0.0));
    assert_eq!(loc, ClickLocation::SameLocation);
    assert!(c.is_none());
    assert_eq!(sel.state().cursor(), 0);
}

#[test]
fn clear_returns_to_no_selection() {
    let store = three_segments();
    let mut sel = Selector::default();
    sel.click(&store, v(0.0, 0.0));
    assert!(!sel.state().is_empty());
    sel.clear();
    assert!(sel.state().is_empty());
    assert!(sel.state().last_click().is_none());
    assert!(sel.state().active().is_none());
}

#[test]
fn describe_mentions_kind_and_score() {
    let store = three_segments();
    let mut sel = Selector::default();
    let c = sel
        .select(&store, v(0.0, 0.0), ClickLocation::NewLocation)
        .unwrap();
    let s = c.describe(&store).unwrap();
    assert!(s.starts_with("line segment (-0.5, 0) -> (0.5, 0)"));
    assert!(s.contains("distance 0"));
    let empty = PrimitiveStore::default();
    assert!(c.describe(&empty).is_err());
}
