use super::task::{Icon, Task, TaskId};

/// The ordered task list for one session, plus the id generator.
///
/// Insertion order is display order. `next_id` is always greater than every
/// id handed out so far.
#[derive(Debug, Clone)]
pub struct Routine {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Routine {
    /// An empty routine whose first task gets id `seed` (clamped to 1)
    pub fn with_seed(seed: u64) -> Self {
        Routine {
            tasks: Vec::new(),
            next_id: seed.max(1),
        }
    }

    /// Append a new, incomplete task and return its id
    pub fn add_task(&mut self, name: String, icon: Icon, points: u32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, name, icon, points));
        id
    }

    /// Mark a task done. Returns the awarded points, or `None` when the task
    /// does not exist or was already completed.
    pub fn complete_task(&mut self, id: TaskId) -> Option<u32> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if task.completed {
            return None;
        }
        task.completed = true;
        Some(task.points)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The id the next `add_task` will hand out
    pub fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for Routine {
    fn default() -> Self {
        Routine::with_seed(1)
    }
}
