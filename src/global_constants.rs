pub const APPLICATION_TITLE: &str = "Museum Explorer";

pub const DEFAULT_API_BASE_URL: &str = "https://api.harvardartmuseums.org";

pub const SETTINGS_DIR_NAME: &str = "museum-explorer";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const SEARCH_TERM_CULTURE: &str = "culture";
pub const SEARCH_TERM_TECHNIQUE: &str = "technique";
pub const SEARCH_TERM_MEDIUM: &str = "medium";
pub const SEARCH_TERM_PERSON: &str = "person";
pub const SEARCH_TERM_KEYWORD: &str = "keyword";

pub const MISSING_INFO_TITLE: &str = "MISSING INFO";

pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
