use serde::{Deserialize, Serialize};

/// An active course from the `courses` table together with its ranking score.
///
/// Field order matches the column order of the recommendation query and is
/// the order keys appear in the JSON output. `price` keeps the exact decimal
/// text Postgres returns for the NUMERIC column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCourse {
    pub id: i64,
    pub title: String,
    pub instructor: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub students_count: Option<i64>,
    pub score: Option<f64>,
}

/// Success payload: `{"success": true, "recommendations": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsBody {
    pub success: bool,
    pub recommendations: Vec<ScoredCourse>,
}

impl RecommendationsBody {
    pub fn new(recommendations: Vec<ScoredCourse>) -> Self {
        RecommendationsBody {
            success: true,
            recommendations,
        }
    }
}
