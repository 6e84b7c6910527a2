//! Session commands: login, logout, register, whoami

use colored::Colorize;

use super::helpers::{prompt_password, username_or_prompt};
use crate::auth::{LoginForm, RegisterForm};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::ClientContext;

pub async fn login(
    ctx: &ClientContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let username = username_or_prompt(username)?;
    let password = match password {
        Some(pwd) => pwd,
        None => prompt_password("Password")?,
    };

    let mut form = LoginForm::with_credentials(&username, &password);
    form.submit(ctx.api.as_ref(), &ctx.session)
        .await
        .map_err(|e| CliError::AuthError(e.to_string()))?;

    println!(
        "{} Logged in as {}",
        "✓".bold().green(),
        username.cyan().bold()
    );
    Ok(())
}

pub fn logout(ctx: &ClientContext) -> Result<(), CliError> {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.dashboard().logout();

    if was_logged_in {
        println!("{} Logged out", "✓".bold().green());
    } else {
        println!("{} Not logged in", "ℹ".bold().blue());
    }
    Ok(())
}

pub async fn register(ctx: &ClientContext, username: Option<String>) -> Result<(), CliError> {
    let username = username_or_prompt(username)?;
    let password = prompt_password("Password")?;
    let confirm = prompt_password("Confirm Password")?;

    let mut form = RegisterForm::with_input(&username, &password, &confirm);
    form.submit(ctx.api.as_ref())
        .await
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    println!("{}", "Registration Successful!".bold().green());
    println!(
        "  {}",
        "Your account has been created but needs to be activated by an admin.".yellow()
    );
    println!(
        "  {} {}",
        "Log in once activated:".dimmed(),
        "trustmebro login".cyan()
    );
    Ok(())
}

pub async fn whoami(ctx: &ClientContext) -> Result<(), CliError> {
    let dashboard = ctx.dashboard();
    dashboard.refresh_me().await?;

    let snapshot = dashboard.snapshot();
    let Some(user) = snapshot.current_user else {
        return Err(CliError::AuthError("Not logged in".to_string()));
    };

    let role = if user.is_admin {
        "Admin".magenta().bold()
    } else {
        "User".normal()
    };
    println!(
        "{} {} (id {}) {}",
        "👤".bold(),
        user.username.cyan().bold(),
        user.id,
        role
    );
    Ok(())
}
