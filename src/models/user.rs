use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authorized user's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub login: String,
    pub avatar_url: String,
    pub github_id: i64,
    pub is_admin: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_deserialize_normalizes_timestamps() {
        let json = r#"{
            "id": "u1",
            "name": "Test User",
            "login": "testuser",
            "avatarUrl": "https://example.com/a.png",
            "githubId": 12345,
            "isAdmin": false,
            "isBlocked": false,
            "createdAt": "2023-01-01T00:00:00Z",
            "updatedAt": "2023-06-15T12:30:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.login, "testuser");
        assert_eq!(user.github_id, 12345);
        assert!(!user.is_admin);
        assert_eq!(user.created_at, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            user.updated_at,
            Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: "u1".to_string(),
            name: "Test".to_string(),
            login: "test".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            github_id: 1,
            is_admin: true,
            is_blocked: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"avatarUrl\""));
        assert!(json.contains("\"isAdmin\":true"));
        assert!(json.contains("\"createdAt\""));
    }
}
