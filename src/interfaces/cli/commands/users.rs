//! User administration commands (admin only)

use colored::Colorize;

use super::helpers::confirm;
use crate::dashboard::Dashboard;
use crate::interfaces::cli::CliError;
use crate::models::User;
use crate::runtime::lifetime::ClientContext;
use crate::views::{LayoutMode, UsersView};

/// Load identity and user list; fail early for non-admins
async fn admin_dashboard(ctx: &ClientContext) -> Result<Dashboard, CliError> {
    let dashboard = ctx.dashboard();
    dashboard.refresh_me().await?;
    if !dashboard.snapshot().is_admin() {
        return Err(CliError::AuthError("Admin rights required".to_string()));
    }
    dashboard.refresh_users().await?;
    Ok(dashboard)
}

fn find_user(dashboard: &Dashboard, id: i64) -> Result<User, CliError> {
    dashboard
        .snapshot()
        .users
        .into_iter()
        .find(|u| u.id == id)
        .ok_or_else(|| CliError::CommandError(format!("User does not exist: {}", id)))
}

pub async fn list_users(ctx: &ClientContext) -> Result<(), CliError> {
    let dashboard = admin_dashboard(ctx).await?;
    let snapshot = dashboard.snapshot();
    let view = UsersView::with_local_dates(
        &snapshot.users,
        snapshot.current_user.as_ref(),
        LayoutMode::Wide,
    );

    println!("{}", format!("👥 {}", view.header).bold().green());
    println!();

    if view.is_empty() {
        println!("{} {}", "ℹ".bold().blue(), view.empty_text());
        return Ok(());
    }

    for row in &view.rows {
        let status = if row.is_active {
            row.status_label.green()
        } else {
            row.status_label.red()
        };
        let role = if row.is_admin {
            row.role_label.magenta().bold()
        } else {
            row.role_label.normal()
        };
        let marker = if row.actions_enabled {
            "".normal()
        } else {
            "(you)".dimmed()
        };
        println!(
            "  {:>5}  {:<32} {:<9} {:<6} {}  {}",
            row.id.to_string().dimmed(),
            row.username.cyan(),
            status,
            role,
            row.created.dimmed(),
            marker
        );
    }
    Ok(())
}

pub async fn toggle_user_active(ctx: &ClientContext, id: i64) -> Result<(), CliError> {
    let dashboard = admin_dashboard(ctx).await?;
    let user = find_user(&dashboard, id)?;

    let updated = dashboard.toggle_user_active(id, user.is_active).await?;
    let state = if updated.is_active {
        "Active".green()
    } else {
        "Inactive".red()
    };
    println!(
        "{} {} is now {}",
        "✓".bold().green(),
        updated.username.cyan(),
        state
    );
    Ok(())
}

pub async fn toggle_user_admin(ctx: &ClientContext, id: i64) -> Result<(), CliError> {
    let dashboard = admin_dashboard(ctx).await?;
    let user = find_user(&dashboard, id)?;

    let updated = dashboard.toggle_user_admin(id, user.is_admin).await?;
    let role = if updated.is_admin {
        "Admin".magenta().bold()
    } else {
        "User".normal()
    };
    println!(
        "{} {} is now {}",
        "✓".bold().green(),
        updated.username.cyan(),
        role
    );
    Ok(())
}

pub async fn delete_user(ctx: &ClientContext, id: i64, yes: bool) -> Result<(), CliError> {
    let dashboard = admin_dashboard(ctx).await?;
    let user = find_user(&dashboard, id)?;
    let confirmer = |prompt: &str| yes || confirm(prompt);

    if dashboard.delete_user(id, &confirmer).await? {
        println!(
            "{} Deleted user: {}",
            "✓".bold().green(),
            user.username.cyan()
        );
    } else {
        println!("{}", "Aborted.".red());
    }
    Ok(())
}
