//! Actions returned by the model and the directives they produce

mod decode;

pub use decode::{decode_action, decode_batch, extract_json_payload};

use serde::{Deserialize, Serialize};

/// A screen coordinate as returned by the model.
///
/// Values in `[0, 1]` are fractions of the screen; anything larger is pixels.
/// A pixel click at 0 or 1 on both axes is therefore read as a fraction.
/// The OS driver decides how to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

impl ClickPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are screen fractions
    pub fn is_relative(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl std::fmt::Display for ClickPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{x: {}, y: {}}}", self.x, self.y)
    }
}

/// Kind-specific payload of an action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Press a key sequence
    Press { keys: Vec<String> },
    /// Press a key combination; dispatched exactly like `Press`
    Hotkey { keys: Vec<String> },
    /// Type literal text
    Write { content: String },
    /// Click at a point
    Click { point: ClickPoint },
    /// The objective is complete
    Done { summary: String },
    /// Anything the decoder did not recognise, kept verbatim for diagnosis
    Unknown {
        operation: String,
        payload: serde_json::Value,
    },
    /// An entry that could not be decoded. Dispatching it is a fault, but
    /// only once the turn reaches it.
    Malformed {
        operation: Option<String>,
        message: String,
        payload: serde_json::Value,
    },
}

/// One decoded instruction from the model
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Free-text rationale supplied by the model
    pub thought: Option<String>,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            thought: None,
            kind,
        }
    }

    pub fn with_thought(mut self, thought: impl Into<String>) -> Self {
        self.thought = Some(thought.into());
        self
    }

    pub fn press<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ActionKind::Press {
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    pub fn write(content: impl Into<String>) -> Self {
        Self::new(ActionKind::Write {
            content: content.into(),
        })
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self::new(ActionKind::Click {
            point: ClickPoint::new(x, y),
        })
    }

    pub fn done(summary: impl Into<String>) -> Self {
        Self::new(ActionKind::Done {
            summary: summary.into(),
        })
    }

    /// Operation name as it appears on the wire
    pub fn operation(&self) -> &str {
        match &self.kind {
            ActionKind::Press { .. } => "press",
            ActionKind::Hotkey { .. } => "hotkey",
            ActionKind::Write { .. } => "write",
            ActionKind::Click { .. } => "click",
            ActionKind::Done { .. } => "done",
            ActionKind::Unknown { operation, .. } => operation,
            ActionKind::Malformed { operation, .. } => operation.as_deref().unwrap_or("malformed"),
        }
    }

    /// Human-readable payload for the action trace
    pub fn detail(&self) -> String {
        match &self.kind {
            ActionKind::Press { keys } | ActionKind::Hotkey { keys } => {
                format!("[{}]", keys.join(", "))
            }
            ActionKind::Write { content } => content.clone(),
            ActionKind::Click { point } => point.to_string(),
            ActionKind::Done { summary } => summary.clone(),
            ActionKind::Unknown { payload, .. } | ActionKind::Malformed { payload, .. } => {
                payload.to_string()
            }
        }
    }
}

/// Loop-control signal computed from one batch of actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    /// Keep looping on the current objective
    Continue,
    /// The objective is complete; ask for a new one
    Done,
    /// Halt the objective loop
    Stop,
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::Continue => write!(f, "continue"),
            Directive::Done => write!(f, "done"),
            Directive::Stop => write!(f, "stop"),
        }
    }
}
