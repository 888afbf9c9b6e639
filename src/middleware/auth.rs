use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use schoolhouse_auth::{Claims, Role, verify_credential};
use schoolhouse_core::AppError;

use crate::state::AppState;

/// Extractor that verifies the bearer token and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AppError::invalid_credential("Invalid token"))
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let claims = verify_credential(auth_header, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Declares an extractor that authenticates the caller and then runs the
/// role gate for one [`schoolhouse_auth::Operation`].
///
/// Extractors from request parts run before the body is read, so a caller
/// with the wrong role is rejected whatever the payload looks like.
#[macro_export]
macro_rules! require_operation {
    ($name:ident, $operation:ident) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $crate::schoolhouse_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::schoolhouse_auth::authorize(
                    auth_user.role(),
                    $crate::schoolhouse_auth::Operation::$operation,
                )?;

                Ok($name(auth_user))
            }
        }
    };
}

// Schools
require_operation!(CanCreateSchool, CreateSchool);
require_operation!(CanUpdateSchool, UpdateSchool);
require_operation!(CanDeleteSchool, DeleteSchool);

// Classrooms
require_operation!(CanCreateClassroom, CreateClassroom);
require_operation!(CanListClassrooms, ListClassrooms);
require_operation!(CanGetClassroom, GetClassroom);
require_operation!(CanUpdateClassroom, UpdateClassroom);
require_operation!(CanDeleteClassroom, DeleteClassroom);

// Students
require_operation!(CanCreateStudent, CreateStudent);
require_operation!(CanListStudents, ListStudents);
require_operation!(CanGetStudent, GetStudent);
require_operation!(CanUpdateStudent, UpdateStudent);
require_operation!(CanDeleteStudent, DeleteStudent);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use schoolhouse_auth::create_access_token;
    use schoolhouse_config::{CorsConfig, JwtConfig};
    use schoolhouse_core::ErrorKind;

    fn state() -> AppState {
        AppState::in_memory(
            JwtConfig {
                secret: "middleware-test-secret".to_string(),
                access_token_expiry: 600,
            },
            CorsConfig::default(),
        )
    }

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/classrooms");
        if let Some(value) = header {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_auth_user_from_valid_token() {
        let state = state();
        let user_id = Uuid::new_v4();
        let token = create_access_token(
            user_id,
            "admin@example.com",
            Role::SchoolAdmin,
            &state.jwt_config,
        )
        .unwrap();

        let mut parts = parts_with(Some(&format!("Bearer {}", token)));
        let auth_user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(auth_user.user_id().unwrap(), user_id);
        assert_eq!(auth_user.role(), Role::SchoolAdmin);
        assert_eq!(auth_user.email(), "admin@example.com");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthenticated() {
        let state = state();
        let mut parts = parts_with(None);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_operation_extractor_rejects_wrong_role() {
        let state = state();
        let token = create_access_token(
            Uuid::new_v4(),
            "super@example.com",
            Role::SuperAdmin,
            &state.jwt_config,
        )
        .unwrap();

        let mut parts = parts_with(Some(&format!("Bearer {}", token)));
        let err = CanCreateClassroom::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let mut parts = parts_with(Some(&format!("Bearer {}", token)));
        assert!(
            CanListClassrooms::from_request_parts(&mut parts, &state)
                .await
                .is_ok()
        );
    }
}
