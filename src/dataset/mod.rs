pub mod columns;
mod cache;
mod prepare;

pub use cache::DatasetCache;
pub use prepare::PreparedDataset;
