mod app;
mod cli;
mod config;
mod event;
mod keys;
mod logging;
mod replay;
mod scroller;
mod settings;
mod theme;
mod tui;
mod views;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ratatui::Frame;

use app::{App, Message};
use cli::{
    Cli, Commands, ConfigArgs, ConfigCommands, OutputFormat, ReplayArgs, ThemeArgs,
    ThemeCommands, TraceFormat,
};
use config::{ScrollerConfig, ScrollerOverrides};
use event::Event;
use settings::Settings;
use theme::{
    ResolvedTheme, ThemeVariant, all_themes, by_name, default_for_variant, detect_terminal_theme,
    load_theme_file,
};
use tui::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = settings::config_dir(cli.config_dir.as_ref());

    match &cli.command {
        Some(Commands::Theme(args)) => handle_theme_command(args, config_dir.as_deref()),
        Some(Commands::Config(args)) => handle_config_command(&cli, args, config_dir.as_deref()),
        Some(Commands::Replay(args)) => handle_replay_command(&cli, args, config_dir.as_deref()),
        None => run_tui(&cli, config_dir.as_deref()).await,
    }
}

fn handle_theme_command(args: &ThemeArgs, config_dir: Option<&Path>) -> Result<()> {
    match &args.command {
        ThemeCommands::List { verbose } => {
            let themes = all_themes();
            if *verbose {
                for theme in themes {
                    println!(
                        "{:<20} {:?}  {}",
                        theme.name,
                        theme.meta.variant,
                        theme.meta.description.as_deref().unwrap_or("")
                    );
                }
            } else {
                for theme in themes {
                    println!("{}", theme.name);
                }
            }
        }
        ThemeCommands::Show { name, format } => {
            let theme = by_name(name).with_context(|| format!("Theme '{}' not found", name))?;

            match format {
                OutputFormat::Toml => {
                    let toml = theme::loader::theme_to_toml(&theme)
                        .context("Failed to serialize theme")?;
                    println!("{}", toml);
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&theme)
                        .context("Failed to serialize theme to JSON")?;
                    println!("{}", json);
                }
            }
        }
        ThemeCommands::Path => {
            if let Some(config_dir) = config_dir {
                println!("{}", settings::themes_dir(config_dir).display());
            } else {
                eprintln!("Could not determine config directory");
            }
        }
    }
    Ok(())
}

fn handle_config_command(cli: &Cli, args: &ConfigArgs, config_dir: Option<&Path>) -> Result<()> {
    match &args.command {
        ConfigCommands::Show { format } => {
            let settings = load_settings(config_dir);
            let config = resolve_config(cli, &settings)?;
            match format {
                OutputFormat::Toml => {
                    let toml = toml::to_string_pretty(&config)
                        .context("Failed to serialize configuration")?;
                    print!("{}", toml);
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&config)
                        .context("Failed to serialize configuration to JSON")?;
                    println!("{}", json);
                }
            }
        }
        ConfigCommands::Path => {
            let config_dir = config_dir.context("Could not determine config directory")?;
            println!("{}", settings::settings_path(config_dir).display());
        }
        ConfigCommands::Init { force } => {
            let config_dir = config_dir.context("Could not determine config directory")?;
            let path = settings::settings_path(config_dir);
            if path.exists() && !force {
                bail!(
                    "{} already exists. Use --force to overwrite it.",
                    path.display()
                );
            }
            let settings = load_settings(Some(config_dir));
            let config = resolve_config(cli, &settings)?;
            let settings = Settings {
                scroller: ScrollerOverrides::from(config),
                ..settings
            };
            settings.save(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn handle_replay_command(cli: &Cli, args: &ReplayArgs, config_dir: Option<&Path>) -> Result<()> {
    let _log_guard = logging::init(config_dir, cli.verbose)?;
    let settings = load_settings(config_dir);
    let config = resolve_config(cli, &settings)?;
    let steps = replay::replay(config, args.lines, &args.offsets)?;

    match args.format {
        TraceFormat::Text => println!("{}", replay::format_text(&steps)),
        TraceFormat::Json => {
            let json =
                serde_json::to_string_pretty(&steps).context("Failed to serialize replay")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn load_settings(config_dir: Option<&Path>) -> Settings {
    config_dir
        .map(|dir| {
            let path = settings::settings_path(dir);
            Settings::load(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {}", e);
                Settings::default()
            })
        })
        .unwrap_or_default()
}

/// Priority: CLI flags > settings file > built-in defaults.
fn resolve_config(cli: &Cli, settings: &Settings) -> Result<ScrollerConfig> {
    let config = settings
        .apply(ScrollerConfig::default())
        .with_overrides(&cli.overrides());
    config
        .validate()
        .context("Invalid scroller configuration")?;
    Ok(config)
}

fn resolve_theme(cli: &Cli, settings: &Settings, config_dir: Option<&Path>) -> Result<ResolvedTheme> {
    let variant = if cli.dark {
        ThemeVariant::Dark
    } else if cli.light {
        ThemeVariant::Light
    } else {
        detect_terminal_theme()
    };

    // Priority: CLI --theme > settings file > default
    let theme_name = cli.theme.as_ref().or(settings.theme.as_ref());

    if let Some(theme_arg) = theme_name {
        let path = Path::new(theme_arg);
        if path.exists() && path.extension().is_some_and(|e| e == "toml") {
            let theme = load_theme_file(path)?;
            return Ok(theme.into());
        }

        if let Some(theme) = by_name(theme_arg) {
            return Ok(theme.into());
        }

        if let Some(config_dir) = config_dir {
            let custom_path = settings::themes_dir(config_dir).join(format!("{}.toml", theme_arg));
            if custom_path.exists() {
                let theme = load_theme_file(&custom_path)?;
                return Ok(theme.into());
            }
        }

        bail!(
            "Theme '{}' not found. Use 'scroller theme list' to see available themes.",
            theme_arg
        );
    }

    Ok(default_for_variant(variant))
}

async fn run_tui(cli: &Cli, config_dir: Option<&Path>) -> Result<()> {
    let settings = load_settings(config_dir);
    let config = resolve_config(cli, &settings)?;
    let resolved_theme = resolve_theme(cli, &settings, config_dir)?;
    let _log_guard = logging::init(config_dir, cli.verbose)?;
    tracing::info!(theme = %resolved_theme.name, ?config, "starting");

    let mut terminal = tui::init()?;
    let mut app = App::new(resolved_theme, config);
    let mut events = EventHandler::new(250);

    loop {
        let height = terminal.size()?.height;
        app.update(Message::Resize(height));

        app.dispatch_scroll();
        app.commit();
        terminal.draw(|frame| render(&app, frame))?;
        app.after_paint();

        if app.should_quit {
            break;
        }

        // A settled slide queues a re-check; handle it without waiting for
        // input. The app stops re-queuing after a bounded chain of slides.
        if app.has_pending_scroll() {
            continue;
        }

        match events.next().await? {
            Event::Key(key) => {
                if let Some(msg) = keys::handle_key(key) {
                    app.update(msg);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(msg) = keys::handle_mouse(mouse) {
                    app.update(msg);
                }
            }
            Event::Tick | Event::Resize => {}
        }
    }

    tui::restore()?;
    tracing::info!("exiting");
    Ok(())
}

fn render(app: &App, frame: &mut Frame) {
    use ratatui::layout::{Constraint, Layout};

    let area = frame.area();

    let (main_area, debug_area) = if app.debug.visible {
        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(App::DEBUG_PANE_HEIGHT),
        ])
        .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    views::scroller::render(frame, app, main_area);

    if let Some(debug_area) = debug_area {
        views::debug::render(frame, app, debug_area);
    }
}
