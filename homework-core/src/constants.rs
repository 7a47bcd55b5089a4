/// Due time used when an assignment doesn't specify one (23:59).
pub const DEFAULT_DUE_HOUR: u32 = 23;
pub const DEFAULT_DUE_MINUTE: u32 = 59;

/// Key under which the document is kept in mapping-based storage.
pub const STORAGE_KEY: &str = "homework-manager-data";

/// File name of the JSON document inside the data directory.
pub const DOCUMENT_FILE: &str = "homework.json";

/// Canonical storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical storage format for due times (24-hour).
pub const TIME_FORMAT: &str = "%H:%M";
