use serde::{Deserialize, Serialize};

/// A user as served by the users endpoint.
///
/// Everything except `id` is an opaque display string; the page never
/// interprets names, contacts or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uses_wire_field_names() {
        let json = r#"{
            "id": 7,
            "firstname": "Ivan",
            "lastname": "Petrov",
            "email": "ivan@example.com",
            "phone": "+7 900 000 00 00",
            "updatedAt": "2023-05-01T10:00:00Z"
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.firstname, "Ivan");
        assert_eq!(user.lastname, "Petrov");
        assert_eq!(user.updated_at, "2023-05-01T10:00:00Z");
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let json = r#"{"id": 1, "firstname": "Only"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }
}
