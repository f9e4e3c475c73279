use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub is_admin: bool,
}

/// Profile view of the authenticated user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_camel_case_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Gomez","dni":"12345678","email":"ana@example.com","password":"hunter22!"}"#,
        )
        .expect("valid register body");
        assert_eq!(req.first_name, "Ana");
        assert_eq!(req.last_name, "Gomez");
        assert_eq!(req.dni, "12345678");
    }

    #[test]
    fn login_response_exposes_is_admin_as_camel_case() {
        let res = LoginResponse {
            message: "Login successful".into(),
            token: "abc".into(),
            is_admin: true,
        };
        let json = serde_json::to_string(&res).expect("serialize");
        assert!(json.contains(r#""isAdmin":true"#));
    }

    #[test]
    fn profile_response_field_names() {
        let res = ProfileResponse {
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            dni: "12345678".into(),
            email: "ana@example.com".into(),
            points: 30,
        };
        let json = serde_json::to_string(&res).expect("serialize");
        assert!(json.contains(r#""firstName":"Ana""#));
        assert!(json.contains(r#""points":30"#));
    }
}
