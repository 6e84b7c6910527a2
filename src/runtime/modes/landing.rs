//! Landing page

use colored::Colorize;

/// The landing page, printed when no subcommand is given
pub fn print_landing() {
    println!();
    println!("  {}", "🔗 Trust Me Bro".bold().cyan());
    println!(
        "  {}",
        "The most suspicious URL shortener on the internet".dimmed()
    );
    println!();
    println!("  ⚡ {}", "Lightning fast redirects".white());
    println!("  ⛏  {}", "Definitely not a miner".white());
    println!("  🤝 {}", "Trust me bro".white());
    println!();
    println!(
        "  {}",
        "Want to create your own suspicious links?".yellow()
    );
    println!(
        "    {}  {}",
        "trustmebro register".green(),
        "create an account".dimmed()
    );
    println!(
        "    {}     {}",
        "trustmebro login".green(),
        "then `trustmebro links create <URL>`".dimmed()
    );
    println!(
        "    {}       {}",
        "trustmebro tui".green(),
        "interactive dashboard".dimmed()
    );
    println!();
    println!("  {}", "Made with 💀 for maximum suspicion".dimmed());
    println!(
        "  {}",
        "* No actual miners were harmed in the making of this website".dimmed()
    );
    println!();
}
