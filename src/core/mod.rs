pub mod csv_io;
pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{OutputRow, Record, SourceTable, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
