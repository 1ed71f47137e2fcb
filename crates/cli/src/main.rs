use anyhow::Result;
use clap::{Parser, Subcommand};
use pickdraw::prelude::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod script;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Replay click scripts against the drawing core")]
struct Cmd {
    /// -v for debug logs, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a script and print the final frame as JSON
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the frame here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a script, then select repeatedly at one point
    Pick {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Extra clicks at the same point (cycles through candidates)
        #[arg(long, default_value_t = 0)]
        repeat: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Replay {
            script,
            config,
            out,
        } => replay(script, config, out),
        Action::Pick {
            script,
            config,
            x,
            y,
            repeat,
        } => pick(script, config, Vec2::new(x, y), repeat),
        Action::Report => report(),
    }
}

fn session_from(script: &Path, config: Option<&Path>) -> Result<Session> {
    let cfg = script::load_config(config)?;
    let events = script::load_script(script)?;
    tracing::info!(events = events.len(), script = %script.display(), "replay");
    let mut session = Session::new(cfg.into());
    script::replay(&mut session, &events)?;
    Ok(session)
}

fn replay(script: PathBuf, config: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let session = session_from(&script, config.as_deref())?;
    let frame = serde_json::to_value(script::frame_json(&session))?;
    match out {
        Some(out) => {
            let params = serde_json::json!({
                "script": script.to_string_lossy(),
                "config": config.as_ref().map(|c| c.to_string_lossy().into_owned()),
            });
            let sidecar = provenance::write_frame_with_sidecar(&out, &frame, params)?;
            tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote frame");
        }
        None => println!("{}", serde_json::to_string_pretty(&frame)?),
    }
    Ok(())
}

fn pick(script: PathBuf, config: Option<PathBuf>, at: Vec2, repeat: usize) -> Result<()> {
    let mut session = session_from(&script, config.as_deref())?;
    let mode = session.mode();
    for click in 0..=repeat {
        let ClickOutcome::Selected { location, active } =
            session.on_click(at, Button::Secondary, mode)?
        else {
            continue;
        };
        let desc = match &active {
            Some(c) => Some(c.describe(session.store())?),
            None => None,
        };
        let line = serde_json::json!({
            "click": click,
            "location": format!("{location:?}"),
            "cursor": session.selection().cursor(),
            "candidates": session.selection().candidates().len(),
            "active": active.as_ref().map(script::CandidateJson::from),
            "description": desc,
            "highlight": session.frame().highlight.iter().map(Vec2::as_array).collect::<Vec<_>>(),
        });
        println!("{line}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "pickdraw": pickdraw::VERSION,
        "defaults": script::ConfigFile::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
