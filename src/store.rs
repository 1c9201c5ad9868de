use crate::models::{Category, ProgressSummary, Task};

/// Owns the task list and the active category filter. All mutations go
/// through here; the UI only reads projections of the current state.
pub struct TaskStore {
    tasks: Vec<Task>,
    active_filter: Option<Category>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            active_filter: None,
        }
    }

    /// A small starter list so the board is not blank on first launch.
    pub fn with_sample_tasks() -> Self {
        let mut store = TaskStore::new();
        store.tasks = vec![
            Task {
                id: 1,
                title: "Finish two math practice tests".to_string(),
                category: Category::School,
                focus_minutes: 40,
                done: false,
            },
            Task {
                id: 2,
                title: "30 minute walk".to_string(),
                category: Category::Health,
                focus_minutes: 30,
                done: false,
            },
            Task {
                id: 3,
                title: "Write journal for 10 minutes".to_string(),
                category: Category::Personal,
                focus_minutes: 10,
                done: true,
            },
        ];
        store
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn active_filter(&self) -> Option<Category> {
        self.active_filter
    }

    /// Adds a task if the input passes validation, otherwise does nothing.
    /// The title is stored trimmed; `minutes_text` must parse to a number
    /// greater than zero. Unparseable text counts as zero and is rejected.
    pub fn add_task(&mut self, title: &str, category: Category, minutes_text: &str) {
        let title = title.trim();
        if title.is_empty() {
            log::debug!("add_task rejected: empty title");
            return;
        }
        let minutes: u32 = minutes_text.parse().unwrap_or(0);
        if minutes == 0 {
            log::debug!("add_task rejected: minutes {:?}", minutes_text);
            return;
        }

        // Highest id so far plus one, so ids stay unique even though the
        // list only ever grows within a session.
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            category,
            focus_minutes: minutes,
            done: false,
        });

        // New tasks should show up immediately, so drop any active filter.
        self.active_filter = None;
        log::debug!("added task {} ({:?}, {} min)", id, category, minutes);
    }

    /// Flips the done flag of the task with the given id. Unknown ids are
    /// ignored.
    pub fn toggle_task(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            log::debug!("task {} now done={}", id, task.done);
        }
    }

    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.active_filter = filter;
    }

    /// Tasks matching the active filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.active_filter.map_or(true, |c| t.category == c))
            .collect()
    }

    /// Completion counts over the visible tasks only. Switching the filter
    /// changes what this reports.
    pub fn progress_summary(&self) -> ProgressSummary {
        let visible = self.visible_tasks();
        let total = visible.len();
        let done = visible.iter().filter(|t| t.done).count();
        let ratio = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64
        };
        ProgressSummary { total, done, ratio }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}
