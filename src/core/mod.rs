pub mod agent;
pub mod planner;
pub mod points;
pub mod summary;

pub use crate::domain::model::{PointsDocument, PointsProperties};
pub use crate::domain::ports::{ConfigProvider, Fetcher, TextGenerator};
pub use crate::utils::error::Result;
