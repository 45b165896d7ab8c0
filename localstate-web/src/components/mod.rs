mod counter;
mod draft_note;
mod preferences;

pub use counter::Counter;
pub use draft_note::DraftNote;
pub use preferences::PreferencesForm;
