//! Request types.
//!
//! Every field is carried as raw text so the server can validate it and
//! report a precise error, rather than failing to decode the body.

use serde::{Deserialize, Deserializer, Serialize};

/// A scalar that may arrive as JSON text or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Reads an optional field as text, accepting JSON numbers as well.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}

// ============================================================================
// User Requests
// ============================================================================

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

// ============================================================================
// Exercise Requests
// ============================================================================

/// Body of `POST /api/users/{id}/exercises`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Query string of `GET /api/users/{id}/logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_exercise_from_json_number_or_text() {
        let numeric: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert_eq!(numeric.duration.as_deref(), Some("30"));
        assert_eq!(numeric.date, None);

        let fractional: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":1.5}"#).unwrap();
        assert_eq!(fractional.duration.as_deref(), Some("1.5"));

        let text: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":"abc","date":"2024-01-02"}"#)
                .unwrap();
        assert_eq!(text.duration.as_deref(), Some("abc"));
        assert_eq!(text.date.as_deref(), Some("2024-01-02"));

        let missing: AddExerciseRequest = serde_json::from_str(r#"{"duration":null}"#).unwrap();
        assert_eq!(missing.description, None);
        assert_eq!(missing.duration, None);
    }

    #[test]
    fn test_add_exercise_from_form() {
        let form: AddExerciseRequest =
            serde_urlencoded::from_str("description=run&duration=30&date=").unwrap();
        assert_eq!(form.description.as_deref(), Some("run"));
        assert_eq!(form.duration.as_deref(), Some("30"));
        assert_eq!(form.date.as_deref(), Some(""));
    }

    #[test]
    fn test_log_query_from_query_string() {
        let query: LogQuery = serde_urlencoded::from_str("from=2024-01-01&limit=5").unwrap();
        assert_eq!(query.from.as_deref(), Some("2024-01-01"));
        assert_eq!(query.to, None);
        assert_eq!(query.limit.as_deref(), Some("5"));
    }
}
