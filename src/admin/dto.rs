use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo::User;

/// Non-admin user as shown in the admin panel.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// PATCH body for marking an appointment attended (or not).
#[derive(Debug, Deserialize)]
pub struct SetAttendedRequest {
    pub attended: bool,
}

/// PATCH body for marking a coupon used (or not).
#[derive(Debug, Deserialize)]
pub struct SetUsedRequest {
    pub used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_summary_hides_everything_but_identity() {
        let summary = UserSummary {
            id: Uuid::new_v4(),
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            email: "ana@example.com".into(),
        };
        let json = serde_json::to_string(&summary).expect("serialize");
        assert!(json.contains(r#""firstName":"Ana""#));
        assert!(!json.contains("points"));
        assert!(!json.contains("dni"));
    }
}
