//! Utility helpers shared by the Folio binary and terminal UI.

pub mod path_processing;
pub mod preferences;
pub mod test_ids;

pub use path_processing::expand_tilde;
pub use preferences::{PreferencesError, UserPreferences};
pub use test_ids::test_id;
