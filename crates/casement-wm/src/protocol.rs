//! Wire protocol between the shell and the compositor backend.
//!
//! Both directions carry JSON arrays of records tagged by a `t` field.
//! The shell sends one array of [`OutgoingCommand`] per tick; the backend
//! answers with an array of [`IncomingSegment`] or the literal `[]`.

use casement_common::{Bounds, ProtocolError, WindowId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Reply meaning "nothing changed since the last tick".
pub const NO_UPDATE: &str = "[]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum OutgoingCommand {
    /// Handshake sent in the first batch and after every reload.
    BrowserStart,
    WindowMap {
        window: WindowId,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    WindowFocus {
        window: WindowId,
    },
    WindowClose {
        window: WindowId,
    },
    WindowRegisterBorder {
        window: WindowId,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    WindowReorder {
        windows: Vec<WindowId>,
    },
    RunProgram {
        command: Vec<String>,
    },
}

impl OutgoingCommand {
    pub fn map(window: &WindowId, bounds: Bounds) -> Self {
        Self::WindowMap {
            window: window.clone(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        }
    }

    /// Window this command targets, if any.
    pub fn window(&self) -> Option<&WindowId> {
        match self {
            Self::WindowMap { window, .. }
            | Self::WindowFocus { window }
            | Self::WindowClose { window }
            | Self::WindowRegisterBorder { window, .. } => Some(window),
            Self::BrowserStart | Self::WindowReorder { .. } | Self::RunProgram { .. } => None,
        }
    }

    /// Wire tag (`t` field).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::BrowserStart => "browser_start",
            Self::WindowMap { .. } => "window_map",
            Self::WindowFocus { .. } => "window_focus",
            Self::WindowClose { .. } => "window_close",
            Self::WindowRegisterBorder { .. } => "window_register_border",
            Self::WindowReorder { .. } => "window_reorder",
            Self::RunProgram { .. } => "run_program",
        }
    }
}

/// Backend window type carried in `win_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowType {
    #[serde(rename = "WINDOW_TYPE_NORMAL")]
    Normal,
    /// Menus, tooltips, docks and anything else the shell does not frame.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMapSegment {
    pub window: WindowId,
    #[serde(default)]
    pub name: String,
    pub visible: bool,
    #[serde(default)]
    pub has_border: bool,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub win_t: WindowType,
}

impl WindowMapSegment {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum IncomingSegment {
    WindowMap(WindowMapSegment),
    WindowFocus {
        window: WindowId,
    },
    WindowIcon {
        window: WindowId,
        image: String,
    },
    Reload,
    #[serde(other)]
    Unknown,
}

/// Serialize one outgoing batch.
pub fn encode_batch(batch: &[OutgoingCommand]) -> Result<String, ProtocolError> {
    serde_json::to_string(batch).map_err(|e| ProtocolError::Encode(e.to_string()))
}

/// Whether a reply carries no segments at all.
pub fn is_no_update(reply: &str) -> bool {
    let reply = reply.trim();
    reply.is_empty() || reply == NO_UPDATE
}

/// Parse a reply into segments, in array order.
///
/// A reply that is not a JSON array fails as a whole. A single malformed
/// element is skipped with a warning so the rest of the batch still applies.
pub fn decode_reply(reply: &str) -> Result<Vec<IncomingSegment>, ProtocolError> {
    if is_no_update(reply) {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(reply).map_err(|e| ProtocolError::MalformedReply(e.to_string()))?;
    let serde_json::Value::Array(items) = value else {
        return Err(ProtocolError::NotAnArray);
    };

    let mut segments = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<IncomingSegment>(item) {
            Ok(segment) => segments.push(segment),
            Err(e) => warn!(index, error = %e, "skipping malformed segment"),
        }
    }
    Ok(segments)
}
