pub mod app_orchestrator;
mod reported_lookup;

pub use reported_lookup::report_lookup;
