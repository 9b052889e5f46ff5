use std::path::PathBuf;

use casement_wm::Screen;
use clap::Parser;

/// Casement: client-side window chrome for a remote compositor.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Backend address (host:port), overriding the config.
    #[arg(short = 'b', long)]
    pub backend: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Screen size for maximize, e.g. 1920x1080.
    #[arg(long, value_parser = parse_screen)]
    pub screen: Option<Screen>,

    /// Program to launch once connected. Repeatable.
    #[arg(long = "run", value_name = "CMD")]
    pub run: Vec<String>,

    /// Do not read input events from stdin; only mirror the backend.
    #[arg(long)]
    pub no_input: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_screen(s: &str) -> Result<Screen, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width: i32 = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let height: i32 = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("screen size must be positive, got {width}x{height}"));
    }
    Ok(Screen { width, height })
}
