//! Administrative commands shared by the `schoolhouse-cli` binary.

use tracing::info;
use validator::Validate;

use schoolhouse_auth::Role;
use schoolhouse_core::{AppError, hash_password};
use schoolhouse_db::UserStore;
use schoolhouse_models::{NewUser, RegisterRequestDto, User};

use crate::validator::format_errors;

/// Creates a superadmin account.
///
/// Input goes through the same rules as `POST /api/auth/register`, so the
/// account can always log in afterwards.
///
/// # Errors
///
/// Fails with a validation error when a field breaks those rules, or with a
/// bad request when the e-mail is already registered.
pub async fn create_superadmin(
    users: &dyn UserStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let dto = RegisterRequestDto {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role: Role::SuperAdmin,
    };
    dto.validate()
        .map_err(|errors| AppError::unprocessable(anyhow::anyhow!("{}", format_errors(&errors))))?;

    let password_hash = hash_password(&dto.password)?;
    let user = users
        .create(NewUser {
            name: dto.name,
            email: dto.email,
            password_hash,
            role: dto.role,
        })
        .await?;

    info!(user.id = %user.id, "Superadmin created");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolhouse_core::{ErrorKind, verify_password};
    use schoolhouse_db::MemoryUserStore;

    #[tokio::test]
    async fn test_create_superadmin() {
        let users = MemoryUserStore::new();
        let user = create_superadmin(&users, "Root", "root@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(user.role, Role::SuperAdmin);
        assert!(verify_password("password123", &user.password_hash).unwrap());

        let err = create_superadmin(&users, "Root", "root@example.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let users = MemoryUserStore::new();
        let err = create_superadmin(&users, "Root", "root@example.com", "short")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationFailed);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let users = MemoryUserStore::new();
        let err = create_superadmin(&users, "Root", "root", "password123")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationFailed);
        assert_eq!(err.to_string(), "email must be a valid email address");
        assert!(users.find_by_email("root").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let users = MemoryUserStore::new();
        let err = create_superadmin(&users, "   ", "root@example.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationFailed);
        assert!(err.to_string().contains("name must be between 1 and 100 characters"));
        assert!(
            users
                .find_by_email("root@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
