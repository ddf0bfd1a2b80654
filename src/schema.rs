use serde::Deserialize;

// Struct representing the request body for creating a new Todo
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoSchema {
    pub task: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_task_field() {
        let body: CreateTodoSchema =
            serde_json::from_str(r#"{"task":"buy milk","user_id":"paul"}"#).unwrap();
        assert_eq!(body.task, "buy milk");
        assert_eq!(body.user_id.as_deref(), Some("paul"));
    }

    #[test]
    fn rejects_title_in_place_of_task() {
        let result: Result<CreateTodoSchema, _> =
            serde_json::from_str(r#"{"title":"buy milk"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ignores_client_supplied_id() {
        let body: CreateTodoSchema =
            serde_json::from_str(r#"{"id":42,"task":"buy milk"}"#).unwrap();
        assert_eq!(body.task, "buy milk");
    }

    #[test]
    fn rejects_missing_task() {
        let result: Result<CreateTodoSchema, _> = serde_json::from_str(r#"{"user_id":"paul"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_type() {
        let result: Result<CreateTodoSchema, _> = serde_json::from_str(r#"{"task":5}"#);
        assert!(result.is_err());
    }
}
