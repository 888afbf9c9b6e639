use tracing::{info, instrument, warn};

use schoolhouse_auth::create_access_token;
use schoolhouse_config::JwtConfig;
use schoolhouse_core::{AppError, hash_password, verify_password};
use schoolhouse_db::UserStore;
use schoolhouse_models::{LoginRequest, LoginResponse, NewUser, RegisterRequestDto, User};

pub struct AuthService;

fn invalid_credentials() -> AppError {
    AppError::bad_request(anyhow::anyhow!("Invalid credentials"))
}

impl AuthService {
    #[instrument(skip(users, dto), fields(user.email = %dto.email, user.role = %dto.role))]
    pub async fn register_user(
        users: &dyn UserStore,
        dto: RegisterRequestDto,
    ) -> Result<User, AppError> {
        if users.find_by_email(&dto.email).await?.is_some() {
            warn!("Attempted to register an existing email");
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = users
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
                role: dto.role,
            })
            .await?;

        info!(user.id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(users, dto, jwt_config), fields(user.email = %dto.email))]
    pub async fn login_user(
        users: &dyn UserStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(&dto.password, &user.password_hash)? {
            warn!(user.id = %user.id, "Login with wrong password");
            return Err(invalid_credentials());
        }

        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        info!(user.id = %user.id, "User logged in");
        Ok(LoginResponse { token, user })
    }
}
