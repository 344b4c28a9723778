//! Terminal rendering of loop events

use crate::console::describe_error;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use operate_core::action::Action;
use operate_core::error::OperateError;
use operate_core::reporter::Reporter;
use operate_core::session::SessionExit;
use parking_lot::Mutex;
use std::time::Duration;

const PRODUCT: &str = "Self-Operating Computer";

/// Prints the action trace and shows a spinner while the model thinks
pub struct ConsoleReporter {
    spinner: Mutex<Option<ProgressBar>>,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            verbose,
        }
    }

    fn banner(model: &str) -> String {
        format!(
            "[{}|{}]",
            format!("{} ", PRODUCT).green(),
            format!(" {}", model).bright_magenta()
        )
    }

    fn error_prefix() -> String {
        format!("{}{}", format!("[{}]", PRODUCT).green(), "[Error]".red())
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn querying(&self, model: &str, loop_count: u32) {
        if self.verbose {
            println!("[{}] loop_count {}", PRODUCT, loop_count);
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{} is thinking...", model));
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock() = Some(spinner);
    }

    fn query_finished(&self) {
        self.clear_spinner();
    }

    fn action(&self, model: &str, action: &Action) {
        println!("{}", Self::banner(model));
        println!("{}", action.thought.as_deref().unwrap_or_default());
        println!(
            "{}{} {}\n",
            "Action: ".blue(),
            action.operation(),
            action.detail()
        );
    }

    fn completed(&self, model: &str, summary: &str) {
        println!("{}", Self::banner(model));
        println!("{}{}\n", "Objective Complete: ".blue(), summary);
    }

    fn unknown_operation(&self, action: &Action) {
        println!("{} {}", Self::error_prefix(), "unknown operation response :(".red());
        println!("{} {}{}", Self::error_prefix(), "AI response ".red(), action.detail());
    }

    fn error(&self, error: &OperateError) {
        self.clear_spinner();
        println!("{} -> {}", Self::error_prefix(), describe_error(error).red());
    }

    fn session_exit(&self, exit: &SessionExit) {
        self.clear_spinner();
        if let SessionExit::LoopCapReached { loop_count } = exit {
            println!(
                "{} {}",
                format!("[{}]", PRODUCT).green(),
                format!("Stopped after {} turns without completing the objective", loop_count)
                    .yellow()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cleared_after_query() {
        let reporter = ConsoleReporter::new(false);
        reporter.querying("gpt-4o", 0);
        assert!(reporter.spinner.lock().is_some());
        reporter.query_finished();
        assert!(reporter.spinner.lock().is_none());
    }

    #[test]
    fn test_error_clears_spinner() {
        let reporter = ConsoleReporter::new(false);
        reporter.querying("gpt-4o", 3);
        reporter.error(&OperateError::unsupported_model("gpt-9"));
        assert!(reporter.spinner.lock().is_none());
    }
}
