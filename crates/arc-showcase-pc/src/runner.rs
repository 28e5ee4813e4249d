//! Fixed-step frame loop.

use std::time::Duration;

use arc_showcase_core::Session;
use arc_showcase_hal::{FrameSink, InputEvent, InputSource, UiSurface};

use crate::error::HostError;
use crate::input::ScriptInput;

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Index of the view the session ended on.
    pub final_view: usize,
    /// Simulated time.
    pub elapsed: Duration,
    /// True if the run stopped at `max_duration` rather than going idle.
    pub timed_out: bool,
}

/// Drive `session` one frame at a time until the script is exhausted and
/// the session is idle, or until `max_duration` of simulated time passes.
///
/// Each frame polls every pending input event, advances time by
/// `frame_time`, renders and syncs the chrome.
pub fn run<S, U>(
    session: &mut Session,
    input: &mut ScriptInput,
    sink: &mut S,
    ui: &mut U,
    frame_time: Duration,
    max_duration: Duration,
) -> Result<RunSummary, HostError>
where
    S: FrameSink,
    U: UiSurface,
{
    input.init();
    session.sync_ui(ui);

    let mut frames = 0u64;
    let mut elapsed = Duration::ZERO;

    loop {
        if input.is_exhausted() && session.is_idle() {
            break;
        }
        if elapsed >= max_duration {
            log::warn!("stopping after {:.1}s of simulated time", elapsed.as_secs_f32());
            return Ok(summary(session, frames, elapsed, true));
        }

        while let Some(event) = input.poll() {
            log::debug!("input: {event:?}");
            if let InputEvent::Resize { width, height } = event {
                sink.resize(width, height)
                    .map_err(|e| HostError::Render(format!("{e:?}")))?;
            }
            session.handle(event);
        }

        let report = session.tick(frame_time);
        if let Some(view) = report.settled {
            let name = session.table().get(view).map_or("", |v| v.name.as_str());
            log::info!("settled on view {view}: {name}");
        }

        session
            .render(sink)
            .map_err(|e| HostError::Render(format!("{e:?}")))?;
        session.sync_ui(ui);

        input.advance(frame_time);
        elapsed += frame_time;
        frames += 1;
    }

    Ok(summary(session, frames, elapsed, false))
}

fn summary(session: &Session, frames: u64, elapsed: Duration, timed_out: bool) -> RunSummary {
    RunSummary {
        frames,
        final_view: session.current_view_index(),
        elapsed,
        timed_out,
    }
}
