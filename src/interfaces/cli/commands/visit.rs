//! `visit`: run the miner page in the terminal

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::miner::{Miner, MinerState};
use crate::navigator::{Navigator, RecordingNavigator, SystemNavigator};
use crate::router::short_code_from_target;
use crate::runtime::lifetime::ClientContext;

const REFRESH: Duration = Duration::from_millis(100);
const BAR_WIDTH: usize = 30;

fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub async fn visit(ctx: &ClientContext, target: String, no_open: bool) -> Result<(), CliError> {
    let code = short_code_from_target(&target, &ctx.config.frontend.public_url).ok_or_else(|| {
        CliError::ParseError(format!("Not a short link: {}", target))
    })?;

    let recorder = Arc::new(RecordingNavigator::new());
    let miner = Miner::start(&code, Arc::clone(&ctx.api), recorder.clone());
    let mut ticker = tokio::time::interval(REFRESH);
    let mut stdout = io::stdout();

    println!(
        "{}",
        "Definitely not a crypto miner... trust me bro 😏".dimmed()
    );

    let destination = loop {
        ticker.tick().await;
        let snapshot = miner.snapshot();

        print!(
            "\r{} {} {:>3}%  {:<32}",
            "⛏".yellow(),
            progress_bar(snapshot.progress).green(),
            snapshot.progress.floor() as u32,
            snapshot.status_text
        );
        stdout
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        match snapshot.state {
            MinerState::Mining => continue,
            MinerState::Redirecting(url) => {
                // 等待 miner 把目标交给 navigator
                if recorder.count() > 0 {
                    break url;
                }
            }
            MinerState::Failed(message) => {
                println!();
                return Err(CliError::CommandError(message));
            }
        }
    };
    println!();

    println!("{} {}", "→".bold().green(), destination.blue().underline());
    if !no_open {
        SystemNavigator.navigate(&destination)?;
    }
    Ok(())
}
