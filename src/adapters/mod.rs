mod harvard_art_museums_provider;
mod http_image_loader;

pub use harvard_art_museums_provider::HarvardArtMuseumsProvider;
pub use http_image_loader::HttpImageLoader;
