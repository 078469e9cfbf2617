pub mod location;
pub mod models;
pub mod summary;

#[cfg(test)]
mod testing;

pub use models::{load_model, load_with, GraphLoader, LoaderOptions, RtenLoader};
pub use summary::ModelSummary;
