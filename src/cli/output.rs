use serde::Serialize;

use crate::model::{PrefKey, Preferences, Task};
use crate::ops::stats::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub completed: bool,
    pub points: u32,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub points: u64,
    pub level: u64,
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
    pub progress_width: String,
    pub caption: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsJson {
    pub dark_mode: bool,
    pub low_stimulus: bool,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        name: task.name.clone(),
        icon: task.icon.as_str().to_string(),
        completed: task.completed,
        points: task.points,
    }
}

pub fn stats_to_json(stats: &Stats) -> StatsJson {
    StatsJson {
        points: stats.points,
        level: stats.level,
        completed: stats.completed,
        total: stats.total,
        percentage: stats.percentage,
        progress_width: stats.progress_width(),
        caption: stats.caption(),
    }
}

pub fn prefs_to_json(prefs: &Preferences) -> PrefsJson {
    PrefsJson {
        dark_mode: prefs.dark_mode,
        low_stimulus: prefs.low_stimulus,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per task: `<glyph> <name>  +<points>`, with a check when done
pub fn format_task_line(task: &Task) -> String {
    let mark = if task.completed { " ✓" } else { "" };
    format!(
        "{} {}  +{}{}",
        task.icon.glyph(),
        task.name,
        task.points,
        mark
    )
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Pontos: {}\nNível: {}\n{}",
        stats.points,
        stats.level,
        stats.caption()
    )
}

pub fn format_pref(key: PrefKey, value: bool) -> String {
    format!("{}: {}", key.label(), if value { "ligado" } else { "desligado" })
}
