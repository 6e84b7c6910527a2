//! Prompt helpers shared by CLI commands

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use crate::interfaces::cli::CliError;

/// Ask a y/N question on stdin; anything but "y" is a no
pub fn confirm(prompt: &str) -> bool {
    print!("{} {} ", prompt.yellow(), "[y/N]".dimmed());
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Read one line, prompting with `label`
pub fn prompt_line(label: &str) -> Result<String, CliError> {
    print!("{}: ", label);
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::CommandError(format!("Failed to read from stdin: {}", e)))?;
    Ok(line.trim().to_string())
}

/// Read a password without echo
pub fn prompt_password(label: &str) -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::CommandError(
            "No password provided. Use --password or run interactively.".to_string(),
        ));
    }

    print!("{}: ", label);
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    rpassword::read_password()
        .map_err(|e| CliError::CommandError(format!("Failed to read password: {}", e)))
}

/// Use the flag value, or prompt for it
pub fn username_or_prompt(username: Option<String>) -> Result<String, CliError> {
    match username {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => prompt_line("Email / Username"),
    }
}
