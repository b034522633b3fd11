//! lifequest - note rendering and progression from the command line

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lifequest::{compute_level, render_markdown, title_for_level};

#[derive(Parser)]
#[command(name = "lifequest")]
#[command(version, about = "Markdown note rendering and XP progression", long_about = None)]
#[command(after_help = "EXAMPLES:
    lifequest render note.md    Render a Markdown note to HTML
    lifequest level 2350        Show level info for an XP total")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file to an HTML fragment on stdout
    Render {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        file: String,
    },
    /// Print level info for a cumulative XP total as JSON
    Level {
        /// Cumulative XP total
        #[arg(value_name = "XP")]
        total_xp: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { file } => render(&file),
        Command::Level { total_xp } => level(total_xp),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(path: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    print!("{}", render_markdown(&source));
    Ok(())
}

fn level(total_xp: u64) -> Result<(), String> {
    let info = compute_level(total_xp);
    let output = serde_json::json!({
        "level": info.level,
        "current_xp": info.current_xp,
        "xp_for_next_level": info.xp_for_next_level,
        "title": title_for_level(info.level),
    });
    let rendered = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
