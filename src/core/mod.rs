pub mod engine;
pub mod markdown;
pub mod order;
pub mod render;

pub use crate::domain::ports::{ConfigProvider, GameDataSource};
pub use crate::utils::error::Result;
