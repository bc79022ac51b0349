use console::style;

use crate::git::CommitInfo;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", style("WARNING:").yellow().bold(), message);
}

pub fn display_submodule(name: &str, target: &str, commit: &CommitInfo) {
    println!(
        "Submodule {} now at {} (\"{}\" commit {} by {} @ {})",
        style(name).bold(),
        target,
        commit.summary,
        commit.hash,
        commit.author,
        commit.time.format("%Y-%m-%d %H:%M:%S")
    );
}
