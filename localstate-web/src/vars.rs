pub const LOCALSTORAGE_PREFIX: &str = "localstate";

pub const COUNTER_KEY: &str = "count";
pub const PREFERENCES_KEY: &str = "preferences";
pub const DRAFT_KEY: &str = "draft";
