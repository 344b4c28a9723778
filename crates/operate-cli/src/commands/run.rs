//! The operate loop

use crate::console::CliConsole;
use crate::logging;
use crate::objective::{TerminalObjectiveSource, VoiceObjectiveSource};
use crate::reporter::ConsoleReporter;
use crate::selection;
use operate_core::config::load_config;
use operate_core::error::OperateResult;
use operate_core::model::ModelRouter;
use operate_core::objective::{ObjectiveSource, normalize_objective};
use operate_core::screen::CommandScreenCapture;
use operate_core::session::SessionLoop;
use operate_core::{OperateContext, XdotoolDriver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Arguments of a run
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub voice: bool,
    pub verbose: bool,
    pub config_file: Option<PathBuf>,
}

/// Select a model, acquire the first objective and run the session loop
pub async fn execute(args: RunArgs) -> OperateResult<()> {
    let mut config = load_config(args.config_file.as_deref())?;
    config.verbose = args.verbose;
    logging::init(&config.logging, config.verbose);

    let console = CliConsole::new(args.verbose);
    console.print_welcome();

    let interactive = console.is_interactive();
    let model = selection::resolve_model(args.model, interactive)?;
    config.validate(&model, args.voice)?;

    let custom_prompt = match config.custom_system_prompt()? {
        Some(prompt) => Some(prompt),
        None if interactive && args.prompt.is_none() => selection::choose_custom_prompt()?,
        None => None,
    };

    console.clear_screen();

    let terminal = TerminalObjectiveSource;
    let voice = args
        .voice
        .then(|| VoiceObjectiveSource::new(config.voice.command.clone().unwrap_or_default()));
    let objectives: &dyn ObjectiveSource = match &voice {
        Some(voice) => voice,
        None => &terminal,
    };

    let objective = match args.prompt.as_deref() {
        Some(prompt) => normalize_objective(prompt)?,
        None => objectives.next_objective(&model).await?,
    };

    let mut router = ModelRouter::new(&config)?;
    if let Some(command) = config.screenshot.command.clone() {
        router = router.with_screen_capture(Arc::new(CommandScreenCapture::new(
            command,
            config.screenshot.path.clone(),
        )));
    }

    let context = OperateContext::new(
        config,
        Arc::new(XdotoolDriver::new()),
        Arc::new(ConsoleReporter::new(args.verbose)),
    );

    let exit = SessionLoop::new(&context, &router, objectives, &model)
        .with_custom_prompt(custom_prompt.as_deref())
        .run(objective)
        .await;

    info!(%exit, "session ended");
    Ok(())
}
