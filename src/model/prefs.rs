
/// One of the two persisted display flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    DarkMode,
    LowStimulus,
}

impl PrefKey {
    pub const ALL: [PrefKey; 2] = [PrefKey::DarkMode, PrefKey::LowStimulus];

    /// Key used in the preference store
    pub fn storage_key(self) -> &'static str {
        match self {
            PrefKey::DarkMode => "darkMode",
            PrefKey::LowStimulus => "lowStimulus",
        }
    }

    /// Human label shown in the TUI
    pub fn label(self) -> &'static str {
        match self {
            PrefKey::DarkMode => "modo escuro",
            PrefKey::LowStimulus => "baixo estímulo",
        }
    }
}

/// Accessibility display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub low_stimulus: bool,
}

impl Preferences {
    pub fn get(&self, key: PrefKey) -> bool {
        match key {
            PrefKey::DarkMode => self.dark_mode,
            PrefKey::LowStimulus => self.low_stimulus,
        }
    }

    pub fn set(&mut self, key: PrefKey, value: bool) {
        match key {
            PrefKey::DarkMode => self.dark_mode = value,
            PrefKey::LowStimulus => self.low_stimulus = value,
        }
    }
}
