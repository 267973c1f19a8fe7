//! Status lines printed to stdout.
//!
//! Each line starts with a coloured marker: `[+]` success, `[-]` failure,
//! `[!]` notice, `[~]` progress and `[?]` a question for the user.

use owo_colors::OwoColorize;

/// Print a success line.
///
/// ```no_run
/// vite::ui::good("Done in 0.01000s.");
/// ```
pub fn good(message: &str) {
    println!("{} {}", "[+]".green().bold(), message);
}

/// Print a failure line.
pub fn bad(message: &str) {
    println!("{} {}", "[-]".red().bold(), message.red());
}

/// Print a notice.
pub fn info(message: &str) {
    println!("{} {}", "[!]".yellow().bold(), message);
}

/// Print a progress line.
pub fn run(message: &str) {
    println!("{} {}", "[~]".white().bold(), message);
}

/// Print a question or suggestion for the user.
pub fn que(message: &str) {
    println!("{} {}", "[?]".blue().bold(), message);
}

/// Italicises a word inside a status line.
pub fn emphasis(word: &str) -> String {
    word.italic().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        good("good");
        bad("bad");
        info("info");
        run("run");
        que("que");
    }

    #[test]
    fn test_emphasis_keeps_text() {
        assert!(emphasis("build").contains("build"));
    }
}
