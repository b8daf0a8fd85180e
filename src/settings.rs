use crate::core::errors::Result;
use crate::models::models::Settings;
use crate::App;

pub fn load(app: &App) -> Settings {
    app.store.settings.clone()
}

/// Replace the whole record, last write wins. There is no per-field merge.
pub fn save(app: &mut App, settings: Settings) -> Result<()> {
    app.store.settings = settings;
    app.save_settings()?;
    Ok(())
}
