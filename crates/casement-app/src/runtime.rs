//! The shell's event loop.
//!
//! One task owns the [`Shell`]. Input lines, the in-flight bridge call, the
//! refresh timer and registry events are multiplexed with `select!`; the
//! bridge call is an owned future, so input keeps flowing while it runs.

use std::future::Future;
use std::pin::Pin;

use casement_bridge::{Bridge, Exchanged, TcpTransport};
use casement_wm::Shell;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::input::InputEvent;
use crate::settings::Settings;

type InFlight = Pin<Box<dyn Future<Output = Exchanged> + Send>>;

pub fn build_shell(settings: &Settings) -> Shell {
    let mut shell = Shell::with_chrome(settings.chrome, settings.screen);
    shell.set_coalescing(settings.coalesce_window_maps);
    shell.boot();
    for program in &settings.startup_programs {
        shell.run_program(program);
    }
    shell
}

pub async fn run(settings: Settings) {
    let mut shell = build_shell(&settings);
    let mut bridge = Bridge::new(TcpTransport::new(settings.backend.clone()));
    info!(backend = %settings.backend, "casement started");

    if !settings.read_input {
        let stats = bridge
            .run(&mut shell, settings.refresh_interval, shutdown_signal())
            .await;
        info!(?stats, "shutdown complete");
        return;
    }

    let mut events = shell.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut in_flight: Option<InFlight> = None;
    let next_tick = tokio::time::sleep(std::time::Duration::ZERO);
    tokio::pin!(next_tick);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,

            () = &mut next_tick, if in_flight.is_none() => {
                let exchange = bridge.begin(&mut shell);
                in_flight = Some(Box::pin(bridge.exchange(exchange)));
            }

            exchanged = wait_in_flight(&mut in_flight) => {
                in_flight = None;
                bridge.complete(&mut shell, exchanged);
                next_tick
                    .as_mut()
                    .reset(Instant::now() + settings.refresh_interval);
            }

            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => handle_line(&mut shell, &line),
                Ok(None) => {
                    info!("input closed");
                    stdin_open = false;
                }
                Err(e) => {
                    warn!(error = %e, "input read failed");
                    stdin_open = false;
                }
            },

            event = events.recv() => match event {
                Ok(_) | Err(RecvError::Lagged(_)) => {
                    while events.try_recv().is_ok() {}
                    log_frames(&shell);
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    info!(stats = ?bridge.stats(), "shutdown complete");
}

/// Resolve the in-flight exchange, or never if there is none.
async fn wait_in_flight(in_flight: &mut Option<InFlight>) -> Exchanged {
    match in_flight {
        Some(exchange) => exchange.await,
        None => std::future::pending().await,
    }
}

fn handle_line(shell: &mut Shell, line: &str) {
    match InputEvent::parse(line) {
        Ok(Some(event)) => {
            debug!(?event, "input");
            event.apply(shell);
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, line, "ignoring malformed input"),
    }
}

fn log_frames(shell: &Shell) {
    let frames = shell.frames();
    debug!(count = frames.len(), "frames changed");
    for frame in &frames {
        debug!(
            window = %frame.id,
            name = %frame.name,
            z = frame.z_index,
            x = frame.content.x,
            y = frame.content.y,
            width = frame.content.width,
            height = frame.content.height,
            active = frame.title_active,
            "frame"
        );
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_bridge::{ScriptedTransport, Transport};
    use casement_common::{Bounds, WindowId};
    use casement_config::CasementConfig;
    use clap::Parser;

    use crate::cli::Args;

    /// Drive one shell against any transport for `ticks` ticks, applying
    /// `input` lines before the first tick.
    async fn drive<T: Transport + 'static>(
        shell: &mut Shell,
        bridge: &mut Bridge<T>,
        input: &[&str],
        ticks: usize,
    ) {
        for line in input {
            handle_line(shell, line);
        }
        for _ in 0..ticks {
            bridge.tick(shell).await;
        }
    }

    fn settings(argv: &[&str]) -> Settings {
        let args = Args::try_parse_from(argv).unwrap();
        Settings::resolve(&CasementConfig::default(), &args)
    }

    #[test]
    fn shell_boots_with_handshake_and_programs() {
        let shell = build_shell(&settings(&["casement", "--run", "xterm", "--run", "  "]));
        let tags: Vec<&str> = shell.queue().as_slice().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["browser_start", "run_program"]);
    }

    #[tokio::test]
    async fn session_mirrors_backend_and_forwards_input() {
        let mut shell = build_shell(&settings(&["casement"]));
        let map = r#"[{"t":"window_map","window":"w1","name":"xterm","visible":true,"has_border":true,"x":0,"y":0,"width":500,"height":500,"win_t":"WINDOW_TYPE_NORMAL"}]"#;
        let mut bridge = Bridge::new(ScriptedTransport::new().reply(map).reply("[]").reply("[]"));

        drive(&mut shell, &mut bridge, &[], 2).await;
        assert_eq!(
            shell.registry().get(&WindowId::from("w1")).unwrap().bounds,
            Bounds::new(100, 100, 500, 500)
        );

        // Close button of w1: title bar spans x 100..600, y 74..100.
        drive(
            &mut shell,
            &mut bridge,
            &[r#"{"type":"pointer_down","x":590,"y":80}"#, "garbage"],
            1,
        )
        .await;
        assert!(!shell.registry().get(&WindowId::from("w1")).unwrap().visible);

        let requests = bridge.with_transport(|t| t.requests().to_vec()).await;
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2], r#"[{"t":"window_close","window":"w1"}]"#);
    }
}
