use clap::Parser;
use tracing::debug;

use trustmebro::cli::Cli;
use trustmebro::config::init_config_from;
use trustmebro::runtime::modes::{self, Mode};
use trustmebro::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.as_ref());

    let config = match init_config_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // TUI 占用终端，控制台日志会破坏画面
    #[cfg(feature = "tui")]
    let quiet_console = matches!(mode, Mode::Tui | Mode::Landing);
    #[cfg(not(feature = "tui"))]
    let quiet_console = matches!(mode, Mode::Landing);
    let _guard = init_logging(&config.logging, quiet_console)?;
    debug!("Running in {:?} mode", mode);

    match (mode, cli.command) {
        (Mode::Landing, _) => {
            modes::print_landing();
            Ok(())
        }
        #[cfg(feature = "tui")]
        (Mode::Tui, Some(trustmebro::cli::Commands::Tui { path })) => {
            modes::run_tui(config, path)
                .await
                .map_err(|e| anyhow::anyhow!("{:?}", e))
        }
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(cmd)) => {
            if let Err(e) = modes::run_cli(config, cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        _ => {
            eprintln!("This command is not available: the binary was built without its feature.");
            std::process::exit(2);
        }
    }
}
