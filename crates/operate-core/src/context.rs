//! Explicit run context handed to every loop component

use crate::config::Config;
use crate::os::OsAutomation;
use crate::reporter::Reporter;
use std::sync::Arc;
use std::time::Duration;

/// Everything the loop needs from its environment, built once per process
#[derive(Clone)]
pub struct OperateContext {
    config: Config,
    os: Arc<dyn OsAutomation>,
    reporter: Arc<dyn Reporter>,
}

impl OperateContext {
    pub fn new(config: Config, os: Arc<dyn OsAutomation>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            os,
            reporter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn os(&self) -> &dyn OsAutomation {
        self.os.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn settle_delay(&self) -> Duration {
        self.config.settle_delay()
    }

    pub fn max_loops(&self) -> u32 {
        self.config.max_loops
    }

    pub fn verbose(&self) -> bool {
        self.config.verbose
    }
}

impl std::fmt::Debug for OperateContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperateContext")
            .field("max_loops", &self.config.max_loops)
            .field("settle_delay_ms", &self.config.settle_delay_ms)
            .field("verbose", &self.config.verbose)
            .finish()
    }
}
