// Library root for the course recommendation service

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod recommend;
pub mod scoring;

// Re-export commonly used types
pub use config::{ConfigProvider, EnvConfig, StaticConfig};
pub use db::{CourseStore, PgCourseStore, RecommendationQuery};
pub use error::RecommendError;
pub use models::{HandlerResponse, RecommendationEvent, RecommendationsBody, ScoredCourse};
pub use recommend::RecommendationHandler;
