//! Status lines printed by the subcommands. Diagnostics go through
//! `tracing` instead.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn marker(self) -> &'static str {
        match self {
            Level::Info => "zz",
            Level::Success => "ok",
            Level::Warning => "!!",
            Level::Error => "xx",
        }
    }

    fn colour(self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    let marker = Style::new()
        .bold()
        .fg(level.colour())
        .paint(format!("[{}]", level.marker()));
    format!("{} {}", marker, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Written to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section title followed by a rule of the same width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "~".repeat(title.chars().count());
    println!("{}", Style::new().bold().fg(Colour::Blue).paint(title));
    println!("{}\n", Style::new().fg(Colour::Blue).paint(rule));
}
