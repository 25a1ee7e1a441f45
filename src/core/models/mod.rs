mod museum_object;
mod result_set;
mod search_query;
mod user_settings;

pub use museum_object::{non_empty, MuseumObject, ObjectImage, ObjectPerson};
pub use result_set::{ResultSet, ResultsInfo};
pub use search_query::SearchQuery;
pub use user_settings::{ThemeMode, UserSettings};
