mod api;
mod common;
mod config;
mod ui;

use api::ApiClient;
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::FeedbackApp;

#[derive(Parser)]
#[command(
    name = "rust_feedback_collector",
    version,
    about = "Desktop client for collecting feedback"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Submit directly, without the confirmation dialog
    #[arg(long)]
    no_confirm: bool,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if cli.no_confirm {
        app_config.confirm_before_submit = false;
    }

    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> API
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // API -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy API worker (Chạy ngầm)
    let api_base = app_config.api_base.clone();
    tokio::spawn(async move {
        ApiClient::new(api_base, event_tx, cmd_rx).run().await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Feedback Collector",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("FeedbackApp should only be initialized once");

            log::info!("Client started against {}", app_config.api_base);

            Ok(Box::new(FeedbackApp::new(
                cc,
                app_config.clone(),
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
