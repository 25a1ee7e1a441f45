pub mod app_theme;
mod feature_view;
mod preview_view;
mod search_link;

pub use feature_view::{FeatureMessage, FeatureView, PhotoCache};
pub use preview_view::{PreviewMessage, PreviewView};
pub use search_link::SearchLink;
