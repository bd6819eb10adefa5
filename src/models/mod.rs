// Models module

pub mod course;
pub mod event;
pub mod request;

// Re-export commonly used types
pub use course::{RecommendationsBody, ScoredCourse};
pub use event::{HandlerResponse, RecommendationEvent};
pub use request::RecommendationRequest;
