//! Desktop debug host for the arc presentation.
//!
//! Runs the presentation headlessly: input comes from a script file, frames
//! and chrome updates go to the log.

mod error;
mod input;
mod runner;
mod surface;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use arc_showcase_core::{PresentationConfig, Session, Viewport};
use clap::{Args, Parser, Subcommand};

use crate::error::HostError;
use crate::input::ScriptInput;
use crate::surface::{ConsoleUi, LogFrameSink};

#[derive(Parser)]
#[command(name = "arc-showcase")]
#[command(about = "Scroll-driven arc presentation (headless debug host)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the view table for a scene
    Views {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Replay an input script against a scene
    Run {
        #[command(flatten)]
        scene: SceneArgs,

        /// Input script file
        #[arg(short, long)]
        script: PathBuf,

        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Stop after this many seconds of simulated time
        #[arg(long, default_value = "120")]
        max_seconds: u64,
    },
}

#[derive(Args)]
struct SceneArgs {
    /// Number of boxes on the arc
    #[arg(long, default_value = "8")]
    boxes: usize,

    /// Arc radius
    #[arg(long, default_value = "48")]
    radius: f32,

    /// Angle spanned by the arc, in degrees
    #[arg(long, default_value = "42")]
    arc_degrees: f32,

    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "720")]
    height: u32,
}

impl SceneArgs {
    fn session(&self) -> Result<Session, HostError> {
        let config = PresentationConfig {
            box_count: self.boxes,
            arc_radius: self.radius,
            arc_angle_deg: self.arc_degrees,
            ..PresentationConfig::default()
        };
        Ok(Session::new(&config, Viewport::new(self.width, self.height))?)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let result = match cli.command {
        Commands::Views { scene } => print_views(&scene),
        Commands::Run {
            scene,
            script,
            fps,
            max_seconds,
        } => run_script(&scene, &script, fps, max_seconds),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_views(scene: &SceneArgs) -> Result<(), HostError> {
    let session = scene.session()?;
    let table = session.table();
    for (index, view) in table.views().iter().enumerate() {
        let Some(pose) = table.pose(index) else {
            continue;
        };
        println!(
            "{index:>2}  {:<32} {:<12} pos ({:7.2}, {:6.2}, {:7.2})  look ({:7.2}, {:6.2}, {:7.2})  fov {:.0}",
            view.name,
            view.kind.label(),
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.look_at.x,
            pose.look_at.y,
            pose.look_at.z,
            pose.fov
        );
    }
    Ok(())
}

fn run_script(
    scene: &SceneArgs,
    script: &std::path::Path,
    fps: u32,
    max_seconds: u64,
) -> Result<(), HostError> {
    let mut session = scene.session()?;
    let mut input = ScriptInput::load(script)?;
    let mut sink = LogFrameSink::new(scene.width, scene.height);
    let mut ui = ConsoleUi::new();

    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let summary = runner::run(
        &mut session,
        &mut input,
        &mut sink,
        &mut ui,
        frame_time,
        Duration::from_secs(max_seconds),
    )?;

    let view_name = session
        .current_view()
        .map_or("<none>", |v| v.name.as_str());
    log::info!(
        "{} ticks, {} frames at {}x{} ({} draws, {} ui updates) over {:.2}s, ended on view {}: {}{}",
        summary.frames,
        sink.frames(),
        sink.size().0,
        sink.size().1,
        sink.draws(),
        ui.updates(),
        summary.elapsed.as_secs_f32(),
        summary.final_view,
        view_name,
        if summary.timed_out { " (timed out)" } else { "" }
    );
    Ok(())
}
