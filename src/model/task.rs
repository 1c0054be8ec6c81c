use std::fmt;


/// Identifier of a task within a routine (positive, handed out in order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized icon identifier: non-empty, only `[a-z0-9-]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(String);

/// Known icon names and the glyph drawn for them
const GLYPHS: &[(&str, &str)] = &[
    ("tooth", "🦷"),
    ("coffee", "☕"),
    ("book", "📖"),
    ("bed", "🛏"),
    ("shower", "🚿"),
    ("dumbbell", "🏋"),
    ("person-running", "🏃"),
    ("running", "🏃"),
    ("apple-whole", "🍎"),
    ("apple", "🍎"),
    ("utensils", "🍴"),
    ("pills", "💊"),
    ("glass-water", "💧"),
    ("water", "💧"),
    ("music", "🎵"),
    ("broom", "🧹"),
    ("dog", "🐕"),
    ("sun", "☀"),
    ("moon", "🌙"),
    ("laptop", "💻"),
];

/// Glyph for icons without a known mapping
pub const FALLBACK_GLYPH: &str = "•";

impl Icon {
    /// Lower-case the input and drop everything outside `[a-z0-9-]`.
    /// Returns `None` when nothing is left.
    pub fn sanitize(raw: &str) -> Option<Icon> {
        let token: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();
        if token.is_empty() {
            None
        } else {
            Some(Icon(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The icon name without a leading `fas-` / `fa-` style prefix
    pub fn base_name(&self) -> &str {
        let name = self.0.as_str();
        let name = name.strip_prefix("fas-").unwrap_or(name);
        let name = name.strip_prefix("fa-").unwrap_or(name);
        if name.is_empty() { self.0.as_str() } else { name }
    }

    /// Glyph drawn in the routine list
    pub fn glyph(&self) -> &'static str {
        let base = self.base_name();
        GLYPHS
            .iter()
            .find(|(name, _)| *name == base)
            .map(|(_, glyph)| *glyph)
            .unwrap_or(FALLBACK_GLYPH)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single routine task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display name
    pub name: String,
    pub icon: Icon,
    /// Only ever goes from false to true
    pub completed: bool,
    /// Reward for completing the task, fixed at creation
    pub points: u32,
}

impl Task {
    pub fn new(id: TaskId, name: String, icon: Icon, points: u32) -> Self {
        Task {
            id,
            name,
            icon,
            completed: false,
            points,
        }
    }
}
