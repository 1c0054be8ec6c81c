use crate::io::prefs_store::{PreferenceStore, StoreError};
use crate::model::prefs::{PrefKey, Preferences};

/// Read both flags. Absent or malformed entries are off.
pub fn load_preferences(store: &dyn PreferenceStore) -> Preferences {
    let mut prefs = Preferences::default();
    for key in PrefKey::ALL {
        prefs.set(key, store.get(key.storage_key()).unwrap_or(false));
    }
    prefs
}

/// Flip one flag and persist the new value under its own key.
///
/// The in-memory flag is flipped even if the write fails; the error is
/// returned so the caller can report it. Returns the new value.
pub fn toggle(
    prefs: &mut Preferences,
    store: &mut dyn PreferenceStore,
    key: PrefKey,
) -> Result<bool, StoreError> {
    let value = !prefs.get(key);
    prefs.set(key, value);
    log::info!("{} = {}", key.storage_key(), value);
    store.set(key.storage_key(), value)?;
    Ok(value)
}

pub fn toggle_dark_mode(
    prefs: &mut Preferences,
    store: &mut dyn PreferenceStore,
) -> Result<bool, StoreError> {
    toggle(prefs, store, PrefKey::DarkMode)
}

pub fn toggle_low_stimulus(
    prefs: &mut Preferences,
    store: &mut dyn PreferenceStore,
) -> Result<bool, StoreError> {
    toggle(prefs, store, PrefKey::LowStimulus)
}
