use serde::{Deserialize, Serialize};

// Data model representing a Todo item
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// Owner a Todo may reference; seeded at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

pub fn seed_users() -> [User; 4] {
    [
        User::new("shelley", "Shelley"),
        User::new("keagan", "Keagan"),
        User::new("dane", "Dane"),
        User::new("paul", "Paul"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_without_owner_omits_user_id() {
        let todo = Todo {
            id: 1,
            task: "buy milk".to_string(),
            user_id: None,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "task": "buy milk"}));
    }

    #[test]
    fn todo_with_owner_includes_user_id() {
        let todo = Todo {
            id: 7,
            task: "walk dog".to_string(),
            user_id: Some("dane".to_string()),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["user_id"], "dane");
    }

    #[test]
    fn seed_ids_are_distinct() {
        let users = seed_users();
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["shelley", "keagan", "dane", "paul"]);
    }
}
