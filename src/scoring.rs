// Course ranking score
//
// score = rating * 0.7 + log10(max(students_count, 1)) * 0.3

pub const RATING_WEIGHT: f64 = 0.7;
pub const POPULARITY_WEIGHT: f64 = 0.3;

/// SQL rendering of [`score`], evaluated by Postgres over the `courses` columns.
///
/// `LOG` with a single argument is base 10 in Postgres. `GREATEST` keeps the
/// argument at 1 or above so a course without students contributes 0 instead
/// of failing on `LOG(0)`.
pub const SCORE_SQL: &str =
    "(CAST(rating AS FLOAT8) * 0.7 + LOG(GREATEST(students_count, 1)::FLOAT8) * 0.3)";

/// Popularity term: log-scaled student count, clamped so zero students score 0.
pub fn popularity(students_count: i64) -> f64 {
    (students_count.max(1) as f64).log10()
}

/// Ranking score for a course.
pub fn score(rating: f64, students_count: i64) -> f64 {
    rating * RATING_WEIGHT + popularity(students_count) * POPULARITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_score_formula() {
        assert!((score(4.5, 100) - 3.75).abs() < EPSILON);
        assert!((score(4.9, 1) - 3.43).abs() < EPSILON);
        assert!((score(3.0, 1000) - (2.1 + 0.9)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_students_matches_one_student() {
        assert_eq!(popularity(0), 0.0);
        assert_eq!(popularity(0), popularity(1));
        assert_eq!(score(4.0, 0), score(4.0, 1));
        assert!(score(4.0, 0).is_finite());
    }

    #[test]
    fn test_negative_student_count_is_clamped() {
        assert_eq!(popularity(-5), 0.0);
    }

    #[test]
    fn test_score_sql_statement() {
        assert_eq!(
            SCORE_SQL,
            "(CAST(rating AS FLOAT8) * 0.7 + LOG(GREATEST(students_count, 1)::FLOAT8) * 0.3)"
        );
    }

    #[test]
    fn test_score_sql_matches_weight_constants() {
        let expected = format!(
            "(CAST(rating AS FLOAT8) * {} + LOG(GREATEST(students_count, 1)::FLOAT8) * {})",
            RATING_WEIGHT, POPULARITY_WEIGHT
        );
        assert_eq!(SCORE_SQL, expected);
    }
}
