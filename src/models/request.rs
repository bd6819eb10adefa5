use crate::error::{RecommendError, RecommendResult};
use crate::models::event::RecommendationEvent;

pub const DEFAULT_LIMIT: i64 = 5;

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Validated query parameters for one recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// `None` means every category is eligible.
    pub category: Option<String>,
    pub limit: i64,
}

impl RecommendationRequest {
    pub fn from_event(event: &RecommendationEvent) -> RecommendResult<Self> {
        let category = event
            .param("category")
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
            .map(str::to_string);

        let limit = match event.param("limit") {
            Some(raw) => parse_limit(raw)?,
            None => DEFAULT_LIMIT,
        };

        Ok(RecommendationRequest { category, limit })
    }
}

fn parse_limit(raw: &str) -> RecommendResult<i64> {
    let limit = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| RecommendError::invalid_limit(raw, e))?;

    if limit < 0 {
        return Err(RecommendError::invalid_limit(raw, "limit must not be negative"));
    }

    Ok(limit)
}
