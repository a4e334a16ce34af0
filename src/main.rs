// src/main.rs
//
// Lotto number generator: draws random 6+1 number combinations and shows
// them in a desktop window.
//
// CLI Options:
// - --count: override the configured default game count
// - --max-number: override the configured default max number
// - --headless: perform one draw, print it to stdout and exit

use clap::Parser;
use eframe::egui;

use lottogen::app::LottoApp;
use lottogen::config::AppConfig;
use lottogen::defs::{MAIN_COUNT, Number, WINDOWCONFIG};
use lottogen::draw::draw;
use lottogen::game::format_games;
use lottogen::logging::{log_error, log_info};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Lotto Generator - Draw random 6+1 number combinations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Number of games to prefill the form with (default from configuration)
    #[arg(long)]
    count: Option<u32>,

    /// Highest drawable number to prefill the form with (default from configuration)
    #[arg(long)]
    max_number: Option<Number>,

    /// Perform one draw, print it to stdout and exit without opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    // CLI flags take precedence over the config file, which beats built-ins.
    let mut config = AppConfig::load_or_default();
    if let Some(count) = args.count {
        config.default_count = count;
    }
    if let Some(max_number) = args.max_number {
        config.default_max_number = max_number;
    }

    if args.headless {
        run_headless(&config);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOWCONFIG.width, WINDOWCONFIG.height])
            .with_resizable(WINDOWCONFIG.resizable),
        ..Default::default()
    };
    eframe::run_native(
        "Lotto Generator",
        options,
        Box::new(|cc| Ok(Box::new(LottoApp::new(cc, config)))),
    )
}

fn run_headless(config: &AppConfig) {
    match draw(config.default_count, config.default_max_number, MAIN_COUNT) {
        Ok(games) => {
            log_info(&format!(
                "Drew {} game(s) with range 1-{}",
                games.len(),
                config.default_max_number
            ));
            println!("{}", format_games(&games));
        }
        Err(e) => {
            log_error(&format!("Draw failed: {e}"));
            std::process::exit(1);
        }
    }
}
