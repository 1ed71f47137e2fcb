//! Click scripts, config files, and the JSON form of a rendered frame.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pickdraw::prelude::*;
use serde::{Deserialize, Serialize};

/// One recorded UI event.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Event {
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        button: ButtonName,
        #[serde(default)]
        mode: ModeName,
    },
    Clear,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonName {
    #[default]
    Primary,
    Secondary,
}

impl From<ButtonName> for Button {
    fn from(b: ButtonName) -> Self {
        match b {
            ButtonName::Primary => Button::Primary,
            ButtonName::Secondary => Button::Secondary,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModeName {
    #[default]
    Line,
    Triangle,
    Quad,
    None,
}

impl From<ModeName> for DrawMode {
    fn from(m: ModeName) -> Self {
        match m {
            ModeName::Line => DrawMode::Line,
            ModeName::Triangle => DrawMode::Triangle,
            ModeName::Quad => DrawMode::Quad,
            ModeName::None => DrawMode::None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SameLocationName {
    #[default]
    Exact,
    Epsilon {
        eps: f64,
    },
    AnyAxis,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderName {
    #[default]
    Scan,
    Nearest,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuadHighlightName {
    #[default]
    WholeStrip,
    SubTriangle,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuadAssemblyName {
    #[default]
    SharedStrip,
    Separate,
}

/// Session settings as read from `--config`; missing fields take library defaults.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub proximity: f64,
    pub same_location: SameLocationName,
    pub order: OrderName,
    pub quad_highlight: QuadHighlightName,
    pub quad_assembly: QuadAssemblyName,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            proximity: SelectCfg::default().proximity,
            same_location: SameLocationName::default(),
            order: OrderName::default(),
            quad_highlight: QuadHighlightName::default(),
            quad_assembly: QuadAssemblyName::default(),
        }
    }
}

impl From<ConfigFile> for SessionCfg {
    fn from(c: ConfigFile) -> Self {
        SessionCfg {
            store: StoreCfg {
                quad_assembly: match c.quad_assembly {
                    QuadAssemblyName::SharedStrip => QuadAssembly::SharedStrip,
                    QuadAssemblyName::Separate => QuadAssembly::Separate,
                },
            },
            select: SelectCfg {
                proximity: c.proximity,
                same_location: match c.same_location {
                    SameLocationName::Exact => SameLocationPolicy::Exact,
                    SameLocationName::Epsilon { eps } => SameLocationPolicy::Epsilon(eps),
                    SameLocationName::AnyAxis => SameLocationPolicy::AnyAxis,
                },
                order: match c.order {
                    OrderName::Scan => CandidateOrder::ScanOrder,
                    OrderName::Nearest => CandidateOrder::NearestFirst,
                },
                quad_highlight: match c.quad_highlight {
                    QuadHighlightName::WholeStrip => QuadHighlight::WholeStrip,
                    QuadHighlightName::SubTriangle => QuadHighlight::SubTriangle,
                },
            },
        }
    }
}

pub fn load_script(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing script {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };
    let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
}

/// Feed every event to `session`, in order.
pub fn replay(session: &mut Session, events: &[Event]) -> Result<()> {
    for (i, ev) in events.iter().enumerate() {
        match *ev {
            Event::Click { x, y, button, mode } => {
                let out = session
                    .on_click(Vec2::new(x, y), button.into(), mode.into())
                    .with_context(|| format!("event {i}"))?;
                tracing::debug!(event = i, outcome = ?out, "click");
            }
            Event::Clear => session.clear(),
        }
    }
    Ok(())
}

type P = [f64; 2];

/// Serializable snapshot of `Frame` plus the selection list.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FrameJson {
    pub segments: Vec<[P; 2]>,
    pub triangles: Vec<[P; 3]>,
    pub quad_strips: Vec<StripJson>,
    pub pending: Vec<P>,
    pub points: Vec<P>,
    pub highlight: Vec<P>,
    pub interaction: String,
    pub selection: SelectionJson,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StripJson {
    pub vertices: Vec<P>,
    pub renderable: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SelectionJson {
    pub cursor: usize,
    pub candidates: Vec<CandidateJson>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CandidateJson {
    pub kind: String,
    pub primitive: String,
    pub score: Vec<f64>,
}

impl From<&SelectionCandidate> for CandidateJson {
    fn from(c: &SelectionCandidate) -> Self {
        let score = match c {
            SelectionCandidate::LineSegment { distance, .. } => vec![*distance],
            SelectionCandidate::Triangle { bary, .. } | SelectionCandidate::Quad { bary, .. } => {
                bary.as_array().to_vec()
            }
        };
        Self {
            kind: format!("{:?}", c.kind()),
            primitive: format!("{:?}", c.primitive()),
            score,
        }
    }
}

fn pts(v: &[Vec2]) -> Vec<P> {
    v.iter().map(Vec2::as_array).collect()
}

pub fn frame_json(session: &Session) -> FrameJson {
    let f = session.frame();
    FrameJson {
        segments: f
            .segments
            .iter()
            .map(|s| s.vertices().map(|v| v.as_array()))
            .collect(),
        triangles: f
            .triangles
            .iter()
            .map(|t| t.vertices().map(|v| v.as_array()))
            .collect(),
        quad_strips: f
            .quad_strips
            .iter()
            .map(|q| StripJson {
                vertices: pts(q.vertices()),
                renderable: q.is_renderable(),
            })
            .collect(),
        pending: pts(f.pending),
        points: pts(f.points()),
        highlight: pts(f.highlight),
        interaction: format!("{:?}", f.interaction),
        selection: SelectionJson {
            cursor: session.selection().cursor(),
            candidates: session
                .selection()
                .candidates()
                .iter()
                .map(CandidateJson::from)
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events_with_defaults() {
        let evs: Vec<Event> = serde_json::from_str(
            r#"[
                {"op": "click", "x": 0.0, "y": 0.5},
                {"op": "click", "x": 1.0, "y": 0.5, "button": "secondary", "mode": "quad"},
                {"op": "clear"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            evs[0],
            Event::Click {
                x: 0.0,
                y: 0.5,
                button: ButtonName::Primary,
                mode: ModeName::Line
            }
        );
        assert!(matches!(
            evs[1],
            Event::Click {
                button: ButtonName::Secondary,
                mode: ModeName::Quad,
                ..
            }
        ));
        assert_eq!(evs[2], Event::Clear);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let c: ConfigFile = serde_json::from_str(
            r#"{"same_location": {"policy": "epsilon", "eps": 0.001}, "order": "nearest"}"#,
        )
        .unwrap();
        let cfg = SessionCfg::from(c);
        assert_eq!(cfg.select.proximity, 0.02);
        assert_eq!(cfg.select.same_location, SameLocationPolicy::Epsilon(0.001));
        assert_eq!(cfg.select.order, CandidateOrder::NearestFirst);
        assert_eq!(cfg.select.quad_highlight, QuadHighlight::WholeStrip);
        assert_eq!(cfg.store.quad_assembly, QuadAssembly::SharedStrip);
    }

    #[test]
    fn replay_then_snapshot() {
        let evs = vec![
            Event::Click {
                x: 0.0,
                y: 0.0,
                button: ButtonName::Primary,
                mode: ModeName::Line,
            },
            Event::Click {
                x: 1.0,
                y: 0.0,
                button: ButtonName::Primary,
                mode: ModeName::Line,
            },
            Event::Click {
                x: 0.5,
                y: 0.01,
                button: ButtonName::Secondary,
                mode: ModeName::Line,
            },
        ];
        let mut s = Session::default();
        replay(&mut s, &evs).unwrap();
        let f = frame_json(&s);
        assert_eq!(f.segments, vec![[[0.0, 0.0], [1.0, 0.0]]]);
        assert_eq!(f.interaction, "Select");
        assert_eq!(f.points, vec![[0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(f.selection.candidates.len(), 1);
        assert_eq!(f.selection.candidates[0].kind, "LineSegment");
        assert_eq!(f.selection.candidates[0].primitive, "Segment(0)");

        replay(&mut s, &[Event::Clear]).unwrap();
        let f = frame_json(&s);
        assert!(f.segments.is_empty() && f.selection.candidates.is_empty());
    }

    #[test]
    fn loads_files_and_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("events.json");
        fs::write(
            &script,
            r#"[{"op":"click","x":0,"y":0,"mode":"triangle"},{"op":"click","x":1,"y":0,"mode":"triangle"}]"#,
        )
        .unwrap();
        let evs = load_script(&script).unwrap();
        assert_eq!(evs.len(), 2);

        assert_eq!(load_config(None).unwrap(), ConfigFile::default());
        let bad = dir.path().join("cfg.json");
        fs::write(&bad, "{not json").unwrap();
        let err = load_config(Some(&bad)).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
        assert!(load_script(&dir.path().join("missing.json")).is_err());

        let mut s = Session::default();
        replay(&mut s, &evs).unwrap();
        assert_eq!(s.store().pending(DrawMode::Triangle).len(), 2);
    }
}
