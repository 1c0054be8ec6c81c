
use crate::model::task::Task;

/// Points needed to advance one level
pub const POINTS_PER_LEVEL: u64 = 100;

/// Gamification numbers derived from the task list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Sum of the points of completed tasks
    pub points: u64,
    pub level: u64,
    pub completed: usize,
    pub total: usize,
    /// 0..=100, 0 when there are no tasks
    pub percentage: f64,
}

/// Recompute points, level and progress from scratch
pub fn compute_stats(tasks: &[Task]) -> Stats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    let total = tasks.len();
    let points: u64 = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| u64::from(t.points))
        .sum();
    let percentage = if total > 0 {
        (completed as f64 / total as f64) * 100.0
    } else {
        0.0
    };
    Stats {
        points,
        level: level_for(points),
        completed,
        total,
        percentage,
    }
}

/// Level 1 at zero points, one more every `POINTS_PER_LEVEL`
pub fn level_for(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

impl Stats {
    pub fn rounded_percentage(&self) -> u64 {
        self.percentage.round() as u64
    }

    /// Width of the progress bar, e.g. `"33.33333333333333%"`
    pub fn progress_width(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Progress line shown under the bar
    pub fn caption(&self) -> String {
        format!(
            "{} de {} tarefas concluídas ({}%)",
            self.completed,
            self.total,
            self.rounded_percentage()
        )
    }

    /// Progress as a 0.0..=1.0 ratio
    pub fn ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::routine::Routine;
    use crate::model::task::Icon;

    fn routine_with(points: &[u32]) -> Routine {
        let mut routine = Routine::default();
        for (i, p) in points.iter().enumerate() {
            routine.add_task(format!("t{}", i), Icon::sanitize("sun").unwrap(), *p);
        }
        routine
    }

    #[test]
    fn empty_list() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.points, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.percentage, 0.0);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.caption(), "0 de 0 tarefas concluídas (0%)");
        assert_eq!(stats.progress_width(), "0%");
    }

    #[test]
    fn level_formula_holds() {
        for points in [0, 1, 99, 100, 101, 199, 200, 250, 999, 1000, 12_345] {
            assert_eq!(level_for(points), points / 100 + 1, "points = {}", points);
        }
    }

    #[test]
    fn single_completed_task() {
        let mut routine = routine_with(&[10]);
        let id = routine.tasks()[0].id;
        routine.complete_task(id);
        let stats = compute_stats(routine.tasks());
        assert_eq!(stats.points, 10);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.percentage, 100.0);
        assert_eq!(stats.progress_width(), "100%");
    }

    #[test]
    fn three_tasks_all_completed() {
        let mut routine = routine_with(&[10, 15, 20]);
        let ids: Vec<_> = routine.tasks().iter().map(|t| t.id).collect();
        for id in ids {
            routine.complete_task(id);
        }
        let stats = compute_stats(routine.tasks());
        assert_eq!(stats.points, 45);
        assert_eq!(stats.level, 1);
        assert_eq!((stats.completed, stats.total), (3, 3));
        assert_eq!(stats.percentage, 100.0);
        assert_eq!(stats.caption(), "3 de 3 tarefas concluídas (100%)");
    }

    #[test]
    fn exactly_one_hundred_points_is_level_two() {
        let mut routine = routine_with(&[60, 40, 5]);
        let ids: Vec<_> = routine.tasks().iter().map(|t| t.id).collect();
        routine.complete_task(ids[0]);
        assert_eq!(compute_stats(routine.tasks()).level, 1);
        routine.complete_task(ids[1]);
        let stats = compute_stats(routine.tasks());
        assert_eq!(stats.points, 100);
        assert_eq!(stats.level, 2);
    }

    #[test]
    fn partial_progress_caption_rounds() {
        let mut routine = routine_with(&[1, 1, 1]);
        let id = routine.tasks()[0].id;
        routine.complete_task(id);
        let stats = compute_stats(routine.tasks());
        assert_eq!(stats.caption(), "1 de 3 tarefas concluídas (33%)");
        assert!(stats.progress_width().starts_with("33.3"));
        assert!((stats.ratio() - 1.0 / 3.0).abs() < 1e-9);

        let id = routine.tasks()[1].id;
        routine.complete_task(id);
        assert_eq!(
            compute_stats(routine.tasks()).caption(),
            "2 de 3 tarefas concluídas (67%)"
        );
    }

    #[test]
    fn incomplete_tasks_award_nothing() {
        let routine = routine_with(&[500, 500]);
        let stats = compute_stats(routine.tasks());
        assert_eq!(stats.points, 0);
        assert_eq!(stats.level, 1);
    }
}
