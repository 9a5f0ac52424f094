mod config;
mod feedback;
mod input;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::logger::init_logger;
use common::{log, FileSettingsStore, GameController};

use feedback::{AudioFeedback, BoardFlash, DesktopFeedback};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML file holding the high score and feedback toggles.
    #[arg(long)]
    settings_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    init_logger(prefix);

    let settings_path = args.settings_file.unwrap_or_else(config::get_settings_path);
    log!("Using settings file {}", settings_path.display());
    let settings = Arc::new(FileSettingsStore::open(settings_path));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("snake-ticks")
        .build()?;

    let flash = Arc::new(BoardFlash::new());
    let feedback = Arc::new(DesktopFeedback::new(AudioFeedback::spawn(), flash.clone()));
    let controller = GameController::new(runtime.handle().clone(), settings, feedback);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([520.0, 640.0])
            .with_title("Classic Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Classic Snake",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            controller.subscribe(move |_| ctx.request_repaint());
            Ok(Box::new(SnakeApp::new(controller, flash)))
        }),
    )?;

    log!("Window closed, shutting down");
    Ok(())
}
