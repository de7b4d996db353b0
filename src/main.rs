use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drag_and_draw::draw::composite::rasterize;
use drag_and_draw::draw::palette::clock_seed;
use drag_and_draw::draw::save::{export_frame, write_png};
use drag_and_draw::draw::settings_store::{self, DRAW_SETTINGS_FILE_NAME};
use drag_and_draw::draw::{
    deserialize, render, serialize, DrawHost, DrawSession, GestureController, Milestone,
    PointerEvent, Snapshot,
};
use drag_and_draw::{logging, toast_log};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "drag_and_draw", about = "Headless host for the box drawing surface")]
struct Cli {
    /// Settings file; defaults apply when it does not exist.
    #[arg(long, default_value = DRAW_SETTINGS_FILE_NAME)]
    settings: PathBuf,
    /// Force debug logging regardless of the settings file.
    #[arg(long)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON array of pointer events against a drawing session.
    Replay(ReplayArgs),
    /// Write the default settings to the settings path.
    InitSettings,
}

#[derive(Debug, Args)]
struct ReplayArgs {
    script: PathBuf,
    /// Snapshot JSON to resume from before replaying.
    #[arg(long)]
    restore: Option<PathBuf>,
    /// Where to write the session snapshot after replaying.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Write the final frame to this PNG file.
    #[arg(long)]
    frame: Option<PathBuf>,
    /// Write the final frame into this folder under a timestamped name.
    #[arg(long, conflicts_with = "frame")]
    export_dir: Option<PathBuf>,
    #[arg(long, default_value_t = 480)]
    width: u32,
    #[arg(long, default_value_t = 800)]
    height: u32,
}

struct CliHost {
    notification_log: Option<PathBuf>,
    redraws: usize,
}

impl DrawHost for CliHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn notify(&mut self, milestone: &Milestone) {
        println!("{}", milestone.message);
        if let Some(path) = &self.notification_log {
            toast_log::append_toast_log(path, &milestone.message);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings_store::load_or_default(&cli.settings)?;
    let _log_guard = logging::init(
        cli.debug || settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );

    match cli.command {
        Command::InitSettings => {
            settings_store::save_to_path(&cli.settings, &settings)?;
            println!("wrote {}", cli.settings.display());
        }
        Command::Replay(args) => {
            let script = fs::read_to_string(&args.script)
                .with_context(|| format!("read event script {}", args.script.display()))?;
            let events: Vec<PointerEvent> = serde_json::from_str(&script)
                .with_context(|| format!("parse event script {}", args.script.display()))?;

            let session = match &args.restore {
                Some(path) => {
                    let text = fs::read_to_string(path)
                        .with_context(|| format!("read snapshot {}", path.display()))?;
                    deserialize(&Snapshot::from_json(&text)?)
                        .with_context(|| format!("restore snapshot {}", path.display()))?
                }
                None => DrawSession::new(),
            };

            let seed = settings.resolved_seed(clock_seed);
            tracing::debug!(seed, events = events.len(), "replaying pointer events");
            let mut controller = GestureController::restore(session, &settings, seed);
            let mut host = CliHost {
                notification_log: settings.notification_log.as_ref().map(PathBuf::from),
                redraws: 0,
            };
            for event in events {
                controller.handle_event(event, &mut host);
            }

            let session = controller.session();
            if args.frame.is_some() || args.export_dir.is_some() {
                let commands = render(session, settings.background_color);
                let frame = rasterize(&commands, args.width, args.height);
                if let Some(path) = &args.frame {
                    write_png(&frame, path)?;
                }
                if let Some(dir) = &args.export_dir {
                    let path = export_frame(&frame, dir, chrono::Local::now())?;
                    println!("exported {}", path.display());
                }
            }

            if let Some(path) = &args.snapshot {
                let json = serialize(session).to_json()?;
                fs::write(path, json)
                    .with_context(|| format!("write snapshot {}", path.display()))?;
            }

            println!("{} boxes, {} redraws", session.len(), host.redraws);
        }
    }
    Ok(())
}
