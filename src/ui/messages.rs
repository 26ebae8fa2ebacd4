//! Console output of racegen: one tagged, coloured line per event.
//! Errors go to stderr, everything else to stdout.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_MAGENTA: &str = "\x1b[35m";

/// Width of the label column in run summaries
const TALLY_WIDTH: usize = 28;

fn tagged(color: &str, tag: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}[{tag:^4}]{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_CYAN, "info", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_GREEN, "ok", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_YELLOW, "warn", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(FG_RED, "fail", msg));
}

/// Item left untouched, e.g. an image already on disk.
pub fn skipped<T: fmt::Display>(msg: T) {
    println!("{DIM}[skip] {msg}{RESET}");
}

/// Title line opening a run summary.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    println!("\n{FG_MAGENTA}{BOLD}🏇 {title}{RESET}");
    println!("{FG_MAGENTA}{}{RESET}", "─".repeat(title.chars().count() + 3));
}

/// One `label: count` line of a run summary, counts aligned.
pub fn tally(label: &str, count: usize) {
    println!("  {:<width$} {:>5}", format!("{label}:"), count, width = TALLY_WIDTH);
}
