//! Link commands: list, create, delete

use colored::Colorize;

use super::helpers::confirm;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::ClientContext;
use crate::views::{LayoutMode, LinksView};

pub async fn list_links(ctx: &ClientContext, narrow: bool) -> Result<(), CliError> {
    let dashboard = ctx.dashboard();
    dashboard.refresh_links().await?;

    let snapshot = dashboard.snapshot();
    let mode = if narrow {
        LayoutMode::Narrow
    } else {
        LayoutMode::Wide
    };
    let view = LinksView::with_local_dates(&snapshot.links, mode, ctx.truncate_limits(), |_| {
        false
    });

    println!("{}", view.header.bold().green());
    println!();

    if view.is_empty() {
        println!("{} {}", "ℹ".bold().blue(), view.empty_text());
        return Ok(());
    }

    for row in &view.rows {
        let clicks = if row.has_clicks {
            row.clicks_label.green().bold()
        } else {
            row.clicks_label.dimmed()
        };
        match view.mode {
            LayoutMode::Wide => {
                println!(
                    "  {:<12} {:<45} {:>6}  {}",
                    row.short_code.cyan(),
                    row.display_url.blue(),
                    clicks,
                    row.created.dimmed()
                );
            }
            LayoutMode::Narrow => {
                println!("  {}  {}", row.short_code.cyan().bold(), clicks);
                println!("    {}", row.display_url.blue().underline());
                println!("    {}", row.created.dimmed());
                println!("    {}", dashboard.short_link(&row.short_code).yellow());
                println!();
            }
        }
    }
    Ok(())
}

pub async fn create_link(ctx: &ClientContext, url: String) -> Result<(), CliError> {
    let dashboard = ctx.dashboard();

    match dashboard.create_link(&url).await {
        Ok(generated) => {
            println!(
                "{} Generated Link: {}",
                "✓".bold().green(),
                generated.cyan().underline()
            );
            Ok(())
        }
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            let message = dashboard
                .snapshot()
                .error
                .unwrap_or_else(|| e.message());
            Err(CliError::CommandError(message))
        }
    }
}

pub async fn delete_link(ctx: &ClientContext, short_code: String, yes: bool) -> Result<(), CliError> {
    let dashboard = ctx.dashboard();
    let confirmer = |prompt: &str| yes || confirm(prompt);

    if dashboard.delete_link(&short_code, &confirmer).await? {
        println!(
            "{} Deleted short link: {}",
            "✓".bold().green(),
            short_code.cyan()
        );
    } else {
        println!("{}", "Aborted.".red());
    }
    Ok(())
}
