//! Walk through selection cycling on three overlapping primitives.
//!
//! Usage:
//!   cargo run -p pickdraw --example cycle_demo
//!   cargo run -p pickdraw --example cycle_demo -- sub   (highlight only the hit quad sub-triangle)

use pickdraw::prelude::*;

fn main() -> Result<(), GeomError> {
    let highlight = match std::env::args().nth(1).as_deref() {
        Some("sub") => QuadHighlight::SubTriangle,
        _ => QuadHighlight::WholeStrip,
    };
    let mut session = Session::new(SessionCfg {
        select: SelectCfg {
            quad_highlight: highlight,
            ..SelectCfg::default()
        },
        ..SessionCfg::default()
    });

    let clicks = [
        (DrawMode::Line, [-0.8, 0.0]),
        (DrawMode::Line, [0.8, 0.0]),
        (DrawMode::Triangle, [-0.5, -0.5]),
        (DrawMode::Triangle, [0.5, -0.5]),
        (DrawMode::Triangle, [0.0, 0.5]),
        (DrawMode::Quad, [-0.3, -0.3]),
        (DrawMode::Quad, [-0.3, 0.3]),
        (DrawMode::Quad, [0.3, -0.3]),
        (DrawMode::Quad, [0.3, 0.3]),
    ];
    for (mode, p) in clicks {
        session.on_click(Vec2::from(p), Button::Primary, mode)?;
    }

    let at = Vec2::new(0.0, 0.005);
    for _ in 0..4 {
        match session.on_click(at, Button::Secondary, DrawMode::Line)? {
            ClickOutcome::Selected {
                location,
                active: Some(c),
            } => {
                println!(
                    "{location:?}: {}  (highlight {} pts)",
                    c.describe(session.store())?,
                    session.frame().highlight.len()
                );
            }
            other => println!("{other:?}"),
        }
    }
    Ok(())
}
