//! Scripted input for the desktop host.
//!
//! A script is a plain text file with one command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! wheel 240        # wheel delta in pixels, positive scrolls forward
//! next             # press the "next box" button
//! prev             # press the "previous box" button
//! resize 1920 1080
//! wait 1.5         # let 1.5 seconds of frames pass
//! ```

use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use arc_showcase_hal::{InputEvent, InputSource, NavButton};

use crate::error::HostError;

/// One parsed script line.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    Input(InputEvent),
    Wait(Duration),
}

/// Parse script text into steps.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, HostError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let err = |message: String| HostError::Script {
            line: index + 1,
            message,
        };

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        let step = match (command, args.as_slice()) {
            ("wheel", [dy]) => ScriptStep::Input(InputEvent::Wheel {
                delta_y: parse_number(dy).map_err(err)?,
            }),
            ("next", []) => ScriptStep::Input(InputEvent::Button(NavButton::Next)),
            ("prev", []) => ScriptStep::Input(InputEvent::Button(NavButton::Previous)),
            ("resize", [w, h]) => ScriptStep::Input(InputEvent::Resize {
                width: w
                    .parse()
                    .map_err(|_| err(format!("bad width '{w}'")))?,
                height: h
                    .parse()
                    .map_err(|_| err(format!("bad height '{h}'")))?,
            }),
            ("wait", [secs]) => {
                let secs: f32 = parse_number(secs).map_err(err)?;
                if secs < 0.0 {
                    return Err(err(format!("negative wait {secs}")));
                }
                let wait = Duration::try_from_secs_f32(secs)
                    .map_err(|e| err(format!("bad wait '{secs}': {e}")))?;
                ScriptStep::Wait(wait)
            }
            (other, _) => return Err(err(format!("unrecognized command '{other}'"))),
        };
        steps.push(step);
    }
    Ok(steps)
}

fn parse_number(word: &str) -> Result<f32, String> {
    match word.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("bad number '{word}'")),
    }
}

/// Replays a parsed script as an [`InputSource`].
///
/// `wait` steps hold back further events until enough frame time has been
/// reported through [`ScriptInput::advance`].
#[derive(Debug)]
pub struct ScriptInput {
    steps: VecDeque<ScriptStep>,
    waiting: Duration,
}

impl ScriptInput {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            waiting: Duration::ZERO,
        }
    }

    /// Load and parse a script file.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let text = std::fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(parse_script(&text)?))
    }

    /// Report elapsed frame time.
    pub fn advance(&mut self, dt: Duration) {
        self.waiting = self.waiting.saturating_sub(dt);
    }

    /// True once every step has been delivered and no wait is pending.
    pub fn is_exhausted(&self) -> bool {
        self.steps.is_empty() && self.waiting.is_zero()
    }
}

impl InputSource for ScriptInput {
    fn init(&mut self) {
        log::info!("script input: {} steps", self.steps.len());
    }

    fn poll(&mut self) -> Option<InputEvent> {
        while self.waiting.is_zero() {
            match self.steps.pop_front()? {
                ScriptStep::Input(event) => return Some(event),
                ScriptStep::Wait(duration) => self.waiting = duration,
            }
        }
        None
    }
}
