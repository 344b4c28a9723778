//! CLI console utilities

use colored::*;
use console::Term;
use operate_core::error::OperateError;

const WELCOME: &str = "
Welcome to Self-Operating Computer!

This tool allows multimodal models to operate a computer.
It uses screen vision and decides on mouse/keyboard actions.

Let's get started!
";

/// One-line description of an error for the terminal
pub fn describe_error(error: &OperateError) -> String {
    let mut line = error.to_string();
    if let OperateError::Config {
        context: Some(context),
        ..
    } = error
    {
        line.push_str(&format!(" ({})", context));
    }
    if error.is_transient() {
        line.push_str(" [transient, may succeed if retried]");
    }
    line
}

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    term: Term,
}

impl CliConsole {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            term: Term::stdout(),
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn println(&self, message: &str) {
        println!("{}", message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    pub fn print_welcome(&self) {
        println!("{}", WELCOME);
    }

    pub fn clear_screen(&self) {
        if self.term.is_term() {
            let _ = self.term.clear_screen();
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
