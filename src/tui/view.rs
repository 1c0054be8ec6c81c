//! Pure projection of the routine into what the screen shows.
//!
//! Rows carry the task id, so input resolves a row to a task at the moment
//! the event arrives; nothing needs re-binding after a draw.

use crate::model::routine::Routine;
use crate::model::task::TaskId;
use crate::ops::stats::Stats;

/// Shown instead of the list when the routine has no tasks
pub const EMPTY_PLACEHOLDER: &str = "Nenhuma tarefa na sua rotina. Que tal adicionar uma?";

/// The action control at the end of each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Mark complete, showing the reward
    Complete { points: u32 },
    /// Disabled indicator for a finished task
    Done,
}

impl Control {
    pub fn label(&self) -> String {
        match self {
            Control::Complete { points } => format!("[Concluir (+{})]", points),
            Control::Done => "✓ Feito".to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Control::Complete { .. })
    }
}

/// One line of the routine list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub glyph: &'static str,
    pub name: String,
    pub control: Control,
}

pub fn task_rows(routine: &Routine) -> Vec<TaskRow> {
    routine
        .tasks()
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            glyph: task.icon.glyph(),
            name: task.name.clone(),
            control: if task.completed {
                Control::Done
            } else {
                Control::Complete {
                    points: task.points,
                }
            },
        })
        .collect()
}

/// Header and progress bar contents
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub points: String,
    pub level: String,
    pub ratio: f64,
    pub caption: String,
}

pub fn stats_view(stats: &Stats) -> StatsView {
    StatsView {
        points: stats.points.to_string(),
        level: stats.level.to_string(),
        ratio: stats.ratio(),
        caption: stats.caption(),
    }
}

/// Text of the popup shown after completing a task
pub fn acknowledgement_text(task_name: &str, points: u32, calm: bool) -> String {
    let body = format!(
        "Parabéns! Você completou: {}! Você ganhou {} pontos!",
        task_name, points
    );
    if calm { body } else { format!("🎉 {}", body) }
}

/// First row index shown when the list is `height` rows tall
pub fn visible_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Icon;
    use crate::ops::stats::compute_stats;

    #[test]
    fn rows_follow_completion_state() {
        let mut routine = Routine::default();
        let a = routine.add_task("Brush Teeth".into(), Icon::sanitize("tooth").unwrap(), 10);
        routine.add_task("Read".into(), Icon::sanitize("zzz").unwrap(), 5);

        let rows = task_rows(&routine);
        assert_eq!(rows[0].control, Control::Complete { points: 10 });
        assert_eq!(rows[0].glyph, "🦷");
        assert_eq!(rows[1].glyph, "•");

        routine.complete_task(a);
        let rows = task_rows(&routine);
        assert_eq!(rows[0].control, Control::Done);
        assert!(!rows[0].control.is_enabled());
        assert!(rows[1].control.is_enabled());
    }

    #[test]
    fn control_labels() {
        assert_eq!(Control::Complete { points: 15 }.label(), "[Concluir (+15)]");
        assert_eq!(Control::Done.label(), "✓ Feito");
    }

    #[test]
    fn stats_view_strings() {
        let mut routine = Routine::default();
        let id = routine.add_task("Brush Teeth".into(), Icon::sanitize("tooth").unwrap(), 10);
        routine.complete_task(id);
        let view = stats_view(&compute_stats(routine.tasks()));
        assert_eq!(view.points, "10");
        assert_eq!(view.level, "1");
        assert_eq!(view.caption, "1 de 1 tarefas concluídas (100%)");
        assert_eq!(view.ratio, 1.0);
    }

    #[test]
    fn acknowledgement_wording() {
        let text = acknowledgement_text("Ler", 20, false);
        assert!(text.starts_with("🎉"));
        assert!(text.contains("Você completou: Ler!"));
        assert!(text.contains("Você ganhou 20 pontos!"));
        assert!(!acknowledgement_text("Ler", 20, true).contains('🎉'));
    }

    #[test]
    fn offset_keeps_cursor_visible() {
        assert_eq!(visible_offset(0, 5), 0);
        assert_eq!(visible_offset(4, 5), 0);
        assert_eq!(visible_offset(5, 5), 1);
        assert_eq!(visible_offset(9, 5), 5);
        assert_eq!(visible_offset(3, 0), 0);
    }
}
