#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    School,
    Health,
    Personal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::School, Category::Health, Category::Personal];

    pub fn label(self) -> &'static str {
        match self {
            Category::School => "School",
            Category::Health => "Health",
            Category::Personal => "Personal",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim().to_lowercase().as_str() {
            "school" => Some(Category::School),
            "health" => Some(Category::Health),
            "personal" => Some(Category::Personal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub category: Category,
    pub focus_minutes: u32,
    pub done: bool,
}

/// Snapshot of completion over the currently visible tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub total: usize,
    pub done: usize,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Empty,
    Complete,
    MostlyDone,
    JustStarted,
}

impl ProgressSummary {
    /// Maps the summary onto one of four mutually exclusive tiers.
    /// Exactly half done is still `JustStarted`; `MostlyDone` needs strictly
    /// more than half.
    pub fn tier(self) -> ProgressTier {
        if self.total == 0 {
            ProgressTier::Empty
        } else if self.done == self.total {
            ProgressTier::Complete
        } else if self.done * 2 > self.total {
            ProgressTier::MostlyDone
        } else {
            ProgressTier::JustStarted
        }
    }
}
