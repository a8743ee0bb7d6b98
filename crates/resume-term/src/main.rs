use std::io;
use std::str::FromStr;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use resume_term::application::cli;
use resume_term::application::cli::RunMode;
use resume_term::application::ui::destruct_terminal_for_panic;
use resume_term::application::ui::start_loop;
use resume_term::configuration::Config;
use resume_term::configuration::ConfigKey;
use resume_term::domain::models::Action;
use resume_term::domain::models::EntryType;
use resume_term::domain::models::Event;
use resume_term::domain::models::Resume;
use resume_term::domain::services::actions::ActionsService;
use resume_term::domain::services::AppStateProps;
use resume_term::domain::services::Interpreter;
use resume_term::infrastructure::sources::SourceManager;
use tokio::sync::mpsc;
use tokio::task;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;

/// Logs go to a JSON file under the cache dir. The terminal is busy with the
/// UI, and exec mode keeps stdout for command output.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir().unwrap_or_default().join("resume-term");
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("resume-term.log")
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = tracing::Level::from_str(&Config::get(ConfigKey::LogLevel))
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(writer)
        .init();

    return Ok(guard);
}

async fn start_ui(
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}

async fn run_interactive() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let mut username = None;
    if !Config::get(ConfigKey::Username).is_empty() {
        username = Some(Config::get(ConfigKey::Username));
    }

    let app_state_props = AppStateProps {
        greeting: Config::get(ConfigKey::Greeting),
        username,
    };

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    let source = SourceManager::from_config();
    background_futures
        .spawn(async move { ActionsService::start(source, event_tx, &mut action_rx).await });

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = start_ui(app_state_props, action_tx, event_rx) => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    return result;
}

async fn run_exec(command: &str) -> Result<()> {
    better_panic::install();

    let mut resume = Resume::default();
    if let Some(source) = SourceManager::from_config() {
        let (loaded, message) = ActionsService::load_now(source.as_ref()).await;
        if let Some(loaded) = loaded {
            resume = loaded;
        }
        if message.entry_type() == EntryType::Error {
            eprintln!("{}", message.output);
        }
    }

    let output = Interpreter::new().execute(command, &resume);
    if !output.is_empty() {
        println!("{output}");
    }

    return Ok(());
}

#[tokio::main]
async fn main() -> Result<()> {
    let run_mode = match cli::parse().await? {
        Some(run_mode) => run_mode,
        None => return Ok(()),
    };

    let _guard = init_logging()?;
    tracing::debug!(
        config_file = %Config::get(ConfigKey::ConfigFile),
        github_user = %Config::get(ConfigKey::GithubUser),
        resume_file = %Config::get(ConfigKey::ResumeFile),
        "config loaded"
    );

    match run_mode {
        RunMode::Exec(command) => return run_exec(&command).await,
        RunMode::Interactive => return run_interactive().await,
    }
}
