use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{build_routine, load_config, resolve_prefs_path};
use crate::io::prefs_store::FileStore;
use crate::logging::init_logging;
use crate::model::{AppConfig, PrefKey};
use crate::ops::prefs_ops::{load_preferences, toggle};
use crate::ops::stats::compute_stats;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = load_config(cli.config.as_deref())?;

    // Logging is best-effort; the handle must outlive the command
    let _logger = match init_logging(&config.log) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let prefs_path = resolve_prefs_path(cli.prefs_file.as_deref(), &config);
    log::debug!("preferences file: {}", prefs_path.display());

    match cli.command {
        None => crate::tui::run(config, prefs_path),
        Some(Commands::List) => cmd_list(&config, json),
        Some(Commands::Stats) => cmd_stats(&config, json),
        Some(Commands::Prefs(cmd)) => match cmd.action {
            None => cmd_prefs(&prefs_path, json),
            Some(PrefsAction::Toggle { which }) => cmd_prefs_toggle(&prefs_path, which.into(), json),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routine = build_routine(&config.routine)?;

    if json {
        let tasks: Vec<TaskJson> = routine.tasks().iter().map(task_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if routine.is_empty() {
        println!("{}", crate::tui::view::EMPTY_PLACEHOLDER);
    } else {
        for task in routine.tasks() {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_stats(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routine = build_routine(&config.routine)?;
    let stats = compute_stats(routine.tasks());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&stats))?);
    } else {
        println!("{}", format_stats(&stats));
    }
    Ok(())
}

fn cmd_prefs(prefs_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(prefs_path);
    let prefs = load_preferences(&store);

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs_to_json(&prefs))?);
    } else {
        for key in PrefKey::ALL {
            println!("{}", format_pref(key, prefs.get(key)));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_prefs_toggle(
    prefs_path: &Path,
    key: PrefKey,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(prefs_path);
    let mut prefs = load_preferences(&store);
    let value = toggle(&mut prefs, &mut store, key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs_to_json(&prefs))?);
    } else {
        println!("{}", format_pref(key, value));
    }
    Ok(())
}
