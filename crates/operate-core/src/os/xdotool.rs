//! X11 driver backed by the `xdotool` binary

use super::OsAutomation;
use crate::action::ClickPoint;
use crate::error::{OperateError, OperateResult};
use crate::process::run_command;
use async_trait::async_trait;
use tracing::instrument;

/// Delay between typed characters, in milliseconds
const TYPE_DELAY_MS: u32 = 12;

/// Map the key names models use to X keysyms
pub fn keysym(key: &str) -> String {
    let lower = key.trim().to_lowercase();
    let mapped = match lower.as_str() {
        "enter" | "return" => "Return",
        "esc" | "escape" => "Escape",
        "tab" => "Tab",
        "space" => "space",
        "backspace" => "BackSpace",
        "delete" | "del" => "Delete",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "home" => "Home",
        "end" => "End",
        "pageup" => "Prior",
        "pagedown" => "Next",
        "ctrl" | "control" | "ctrlleft" => "ctrl",
        "alt" | "option" | "altleft" => "alt",
        "shift" | "shiftleft" => "shift",
        "cmd" | "command" | "win" | "super" | "meta" => "super",
        _ => return key.trim().to_string(),
    };
    mapped.to_string()
}

/// `OsAutomation` for X11 sessions
#[derive(Debug, Clone)]
pub struct XdotoolDriver {
    binary: String,
}

impl XdotoolDriver {
    pub fn new() -> Self {
        Self {
            binary: "xdotool".to_string(),
        }
    }

    /// Use a different xdotool binary
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn xdotool(&self, action: &str, args: Vec<String>) -> OperateResult<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.binary.clone());
        argv.extend(args);
        run_command(&argv)
            .await
            .map_err(|e| OperateError::automation(action, e.to_string()))
    }

    /// Screen size in pixels
    async fn display_geometry(&self) -> OperateResult<(u32, u32)> {
        let out = self
            .xdotool("click", vec!["getdisplaygeometry".to_string()])
            .await?;
        parse_geometry(&out).ok_or_else(|| {
            OperateError::automation("click", format!("unexpected display geometry: {}", out.trim()))
        })
    }
}

impl Default for XdotoolDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_geometry(out: &str) -> Option<(u32, u32)> {
    let mut parts = out.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some((width, height))
}

/// Scale a fractional point to pixels, staying on screen
fn to_pixels(point: ClickPoint, geometry: (u32, u32)) -> (i64, i64) {
    let scale = |fraction: f64, extent: u32| {
        let max = i64::from(extent.max(1)) - 1;
        ((fraction * f64::from(extent)).round() as i64).clamp(0, max)
    };
    (scale(point.x, geometry.0), scale(point.y, geometry.1))
}

#[async_trait]
impl OsAutomation for XdotoolDriver {
    #[instrument(skip(self), level = "debug")]
    async fn press(&self, keys: &[String]) -> OperateResult<()> {
        let chord = keys.iter().map(|k| keysym(k)).collect::<Vec<_>>().join("+");
        self.xdotool("press", vec!["key".to_string(), "--clearmodifiers".to_string(), chord])
            .await?;
        Ok(())
    }

    #[instrument(skip(self, text), level = "debug", fields(len = text.len()))]
    async fn write(&self, text: &str) -> OperateResult<()> {
        self.xdotool(
            "write",
            vec![
                "type".to_string(),
                "--delay".to_string(),
                TYPE_DELAY_MS.to_string(),
                "--".to_string(),
                text.to_string(),
            ],
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn mouse(&self, point: ClickPoint) -> OperateResult<()> {
        let (x, y) = if point.is_relative() {
            to_pixels(point, self.display_geometry().await?)
        } else {
            (point.x.round() as i64, point.y.round() as i64)
        };

        self.xdotool(
            "click",
            vec![
                "mousemove".to_string(),
                "--sync".to_string(),
                x.to_string(),
                y.to_string(),
                "click".to_string(),
                "1".to_string(),
            ],
        )
        .await?;
        Ok(())
    }
}
