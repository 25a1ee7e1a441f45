mod image_loader;
mod query_results_provider;

pub use image_loader::ImageLoader;
pub use query_results_provider::QueryResultsProvider;
