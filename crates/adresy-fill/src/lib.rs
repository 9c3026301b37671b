pub mod complete;
pub mod dataset;
pub mod pipeline;
pub mod report;

pub use complete::{CompletionEngine, Fill, FillSource};
pub use dataset::{Dataset, DatasetError, Row};
pub use pipeline::{complete, prepare};
pub use report::{FillReport, PrepareReport, RunSummary, filled_fields};
