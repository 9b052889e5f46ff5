//! Input events read from stdin, one JSON object per line.

use casement_common::Point;
use casement_wm::{Screen, Shell};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    /// Launcher command line.
    Run { command: String },
    Screen { width: i32, height: i32 },
}

impl InputEvent {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, serde_json::Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line).map(Some)
    }

    pub fn apply(self, shell: &mut Shell) {
        match self {
            Self::PointerDown { x, y } => {
                if shell.pointer_down(Point::new(x, y)).is_none() {
                    debug!(x, y, "pointer down on desktop");
                }
            }
            Self::PointerMove { x, y } => shell.pointer_move(Point::new(x, y)),
            Self::PointerUp => shell.pointer_up(),
            Self::Run { command } => {
                shell.run_program(&command);
            }
            Self::Screen { width, height } => shell.set_screen(Screen { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::{Bounds, WindowId};
    use casement_wm::{IncomingSegment, OutgoingCommand, WindowMapSegment, WindowType};

    #[test]
    fn parse_pointer_events() {
        assert_eq!(
            InputEvent::parse(r#"{"type":"pointer_down","x":10,"y":20}"#).unwrap(),
            Some(InputEvent::PointerDown { x: 10, y: 20 })
        );
        assert_eq!(
            InputEvent::parse(r#"{"type":"pointer_up"}"#).unwrap(),
            Some(InputEvent::PointerUp)
        );
        assert_eq!(InputEvent::parse("   ").unwrap(), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(InputEvent::parse("click").is_err());
        assert!(InputEvent::parse(r#"{"type":"scroll","dy":3}"#).is_err());
        assert!(InputEvent::parse(r#"{"type":"pointer_move","x":1}"#).is_err());
    }

    #[test]
    fn drag_through_input_events() {
        let mut shell = Shell::new();
        shell.apply_segment(IncomingSegment::WindowMap(WindowMapSegment {
            window: WindowId::from("w1"),
            name: "xterm".into(),
            visible: true,
            has_border: true,
            x: 200,
            y: 200,
            width: 400,
            height: 300,
            win_t: WindowType::Normal,
        }));

        let script = [
            r#"{"type":"pointer_down","x":250,"y":180}"#,
            r#"{"type":"pointer_move","x":260,"y":190}"#,
            r#"{"type":"pointer_up"}"#,
            r#"{"type":"run","command":"xclock -digital"}"#,
        ];
        for line in script {
            InputEvent::parse(line).unwrap().unwrap().apply(&mut shell);
        }

        assert_eq!(
            shell.registry().get(&WindowId::from("w1")).unwrap().bounds,
            Bounds::new(210, 210, 400, 300)
        );
        assert_eq!(
            shell.take_batch().last(),
            Some(&OutgoingCommand::RunProgram {
                command: vec!["xclock".into(), "-digital".into()],
            })
        );
    }

    #[test]
    fn screen_event_resizes_maximize_area() {
        let mut shell = Shell::new();
        InputEvent::Screen {
            width: 1024,
            height: 768,
        }
        .apply(&mut shell);
        assert_eq!(
            shell.screen(),
            Screen {
                width: 1024,
                height: 768
            }
        );
    }
}
