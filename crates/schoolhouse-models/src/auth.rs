//! Registration and login payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use schoolhouse_auth::Role;

use crate::users::User;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dto_validation() {
        let dto: RegisterRequestDto = serde_json::from_str(
            r#"{"name":"Admin","email":"admin@example.com","password":"password123","role":"school-admin"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.role, Role::SchoolAdmin);

        let dto = RegisterRequestDto {
            password: "short".to_string(),
            email: "not-an-email".to_string(),
            ..dto
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_email_longer_than_column_is_rejected() {
        let domain = format!("{0}.{0}.{0}.{0}.com", "b".repeat(60));
        let email = format!("{}@{}", "a".repeat(64), domain);
        assert!(email.len() > 255);

        let dto = RegisterRequestDto {
            name: "Admin".to_string(),
            email: email.clone(),
            password: "password123".to_string(),
            role: Role::SchoolAdmin,
        };
        let errors = dto.validate().unwrap_err();
        let email_errors = errors.field_errors();
        let email_errors = email_errors.get("email").unwrap();
        assert_eq!(email_errors.len(), 1);
        assert_eq!(email_errors[0].code, "length");

        let login = LoginRequest {
            email,
            password: "password123".to_string(),
        };
        assert!(login.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_unknown_role() {
        let result = serde_json::from_str::<RegisterRequestDto>(
            r#"{"name":"A","email":"a@example.com","password":"password123","role":"teacher"}"#,
        );
        assert!(result.is_err());
    }
}
