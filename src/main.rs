//! uisamples - headless inventory panel and main menu
//!
//! Replays a session script against the inventory store and main menu,
//! optionally writing every event to a JSONL log.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::{env, path::Path};
use tracing::info;
use uisamples::config::{SessionConfig, DEFAULT_CONFIG_PATH};
use uisamples::observers::{JsonlObserver, TracingObserver};
use uisamples::{Session, SessionScript};

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting uisamples v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let config = load_config(&cli)?;
    if cli.write_default_config.is_some() && cli.script.is_none() {
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        anyhow::bail!("--script is required");
    };
    let script = SessionScript::from_path(script_path)
        .with_context(|| format!("Failed to load session script {}", script_path.display()))?;

    let mut session = Session::new(&config)?;
    session.subscribe_inventory(Box::new(TracingObserver));
    session.subscribe_menu(Box::new(TracingObserver));

    let event_log = match cli.event_log.as_deref() {
        Some(path) => Some(attach_event_log(&mut session, path)?),
        None => None,
    };

    let report = session.run(&script);
    info!(
        steps = report.steps_run,
        refused = report.refused,
        items = report.items.len(),
        "session finished"
    );

    if let Some(log) = event_log {
        log.borrow_mut().flush()?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Writes the default config first so `--config` may name the file it creates.
fn load_config(cli: &CliOptions) -> Result<SessionConfig> {
    if let Some(path) = cli.write_default_config.as_deref() {
        SessionConfig::default().save_to_path(path)?;
        info!("Default config written to {}", path.display());
    }

    match cli.config.as_deref() {
        Some(path) => SessionConfig::load_strict(path),
        None => Ok(SessionConfig::load()),
    }
}

fn attach_event_log(session: &mut Session, path: &Path) -> Result<Rc<RefCell<JsonlObserver>>> {
    let observer = Rc::new(RefCell::new(JsonlObserver::create(
        path,
        session.step_counter(),
    )?));
    session.subscribe_inventory(Box::new(observer.clone()));
    session.subscribe_menu(Box::new(observer.clone()));
    info!("Writing event log to {}", path.display());
    Ok(observer)
}

fn print_usage() {
    eprintln!(
        "usage: uisamples --script <session.json> [--config <path>] [--event-log <path>] \
         [--write-default-config <path>]\n\
         \n\
         --config defaults to {DEFAULT_CONFIG_PATH} (missing file uses built-in defaults)"
    );
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    event_log: Option<PathBuf>,
    write_default_config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => opts.help = true,
                "--config" => opts.config = Some(path_value(&arg, args.next())?),
                "--script" => opts.script = Some(path_value(&arg, args.next())?),
                "--event-log" => opts.event_log = Some(path_value(&arg, args.next())?),
                "--write-default-config" => {
                    opts.write_default_config = Some(path_value(&arg, args.next())?)
                }
                other => anyhow::bail!("unknown argument {other}"),
            }
        }

        Ok(opts)
    }
}

fn path_value(flag: &str, value: Option<String>) -> Result<PathBuf> {
    match value {
        Some(value) if !value.starts_with("--") => Ok(PathBuf::from(value)),
        _ => anyhow::bail!("{flag} requires a path"),
    }
}
