use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use popcorn_core::{Catalog, DEFAULT_WINDOW_TITLE, OmdbCatalog};

mod action;
mod app;
mod backend;
mod config_file;
mod input;
mod logging;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use config_file::ConfigFile;
use model::settings::Settings;

/// popcorn: search movies, read the details, rate what you watched.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial search query
    query: Option<String>,

    /// OMDb API key (overrides OMDB_API_KEY and the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Catalog base URL (overrides OMDB_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Color theme: popcorn (default) or hacker
    #[arg(long)]
    theme: Option<String>,

    /// Minimum query length before a search is issued
    #[arg(long)]
    min_query_len: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Resolve settings: defaults, then config file, then env, then CLI flags.
/// Empty environment values count as unset.
fn resolve_settings(
    args: &Args,
    file_cfg: &ConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();
    config_file::apply_to_settings(file_cfg, &mut settings);

    if let Some(key) = env("OMDB_API_KEY").filter(|k| !k.is_empty()) {
        settings.api_key = key;
    }
    if let Some(url) = env("OMDB_BASE_URL").filter(|u| !u.is_empty()) {
        settings.base_url = url;
    }

    if let Some(key) = &args.api_key {
        settings.api_key = key.clone();
    }
    if let Some(url) = &args.base_url {
        settings.base_url = url.clone();
    }
    if let Some(theme) = &args.theme {
        settings.theme_name = theme.clone();
    }
    if let Some(len) = args.min_query_len {
        settings.min_query_len = len.max(1);
    }
    settings
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Held until exit so buffered log records are flushed.
    let _log_guard = logging::init_logging(args.verbose)?;

    let settings = resolve_settings(&args, &config_file::load_config(), |name| {
        std::env::var(name).ok()
    });
    tracing::info!(
        base_url = %settings.base_url,
        api_key = %Settings::mask_key(&settings.api_key),
        min_query_len = settings.min_query_len,
        theme = %settings.theme_name,
        "starting popcorn"
    );

    let catalog: Arc<dyn Catalog> = Arc::new(OmdbCatalog::new(settings.omdb_config()));
    let theme = theme::Theme::from_name(&settings.theme_name);
    let mut app = App::new(settings, theme);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            SetTitle(DEFAULT_WINDOW_TITLE)
        );
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(cmd_tx);
    let listener = backend::spawn_listener(catalog, cmd_rx, event_tx);

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    if let Some(query) = &args.query {
        app.set_query(query);
    }

    let mut title = String::new();
    let tick_rate = Duration::from_millis(100);

    loop {
        let wanted = app.window_title();
        if wanted != title {
            execute!(terminal.backend_mut(), SetTitle(&wanted))?;
            title = wanted;
        }

        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            Some(backend_event) = event_rx.recv() => {
                app.handle_backend_event(backend_event);
                // Drain any additional queued backend events
                while let Ok(evt) = event_rx.try_recv() {
                    app.handle_backend_event(evt);
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    app.update(input::map_event(&evt, &app.input_mode));
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            break;
        }
    }

    // Stop outstanding fetches; the listener exits once its channel closes.
    app.search.cancel_in_flight();
    app.detail.close();
    app.backend_cmd_tx = None;
    listener.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        SetTitle(DEFAULT_WINDOW_TITLE)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("popcorn").chain(argv.iter().copied()))
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn file_cfg() -> ConfigFile {
        toml::from_str(
            "[catalog]\napi_key = \"file-key\"\nbase_url = \"http://file.local/\"\n[display]\ntheme = \"hacker\"\n",
        )
        .unwrap()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = resolve_settings(&args(&[]), &ConfigFile::default(), env_of(&[]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_overrides_file() {
        let env = env_of(&[("OMDB_API_KEY", "env-key")]);
        let settings = resolve_settings(&args(&[]), &file_cfg(), env);
        assert_eq!(settings.api_key, "env-key");
        // Untouched by env, so the file value stands.
        assert_eq!(settings.base_url, "http://file.local/");
        assert_eq!(settings.theme_name, "hacker");
    }

    #[test]
    fn cli_flag_overrides_env() {
        let env = env_of(&[
            ("OMDB_API_KEY", "env-key"),
            ("OMDB_BASE_URL", "http://env.local/"),
        ]);
        let settings = resolve_settings(
            &args(&["--api-key", "cli-key", "--theme", "popcorn", "--min-query-len", "0"]),
            &file_cfg(),
            env,
        );
        assert_eq!(settings.api_key, "cli-key");
        assert_eq!(settings.base_url, "http://env.local/");
        assert_eq!(settings.theme_name, "popcorn");
        assert_eq!(settings.min_query_len, 1);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let env = env_of(&[("OMDB_API_KEY", ""), ("OMDB_BASE_URL", "")]);
        let settings = resolve_settings(&args(&[]), &file_cfg(), env);
        assert_eq!(settings.api_key, "file-key");
        assert_eq!(settings.base_url, "http://file.local/");
    }

    #[test]
    fn positional_query_is_optional() {
        assert_eq!(args(&["blade runner"]).query.as_deref(), Some("blade runner"));
        assert!(args(&["-vv"]).query.is_none());
        assert_eq!(args(&["-vv"]).verbose, 2);
    }
}
