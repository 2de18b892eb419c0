//! User registration, login, listing, and deletion

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::user::{LoginRequest, LoginResponse, RegisterRequest};
use crate::handlers::error::{domain_error_response, validation_failure_response};

use ws_core::domain::entities::user::UserRole;
use ws_core::errors::ValidationError;
use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::PaymentGateway;

use super::AppState;

/// Handler for POST /api/v1/users/register
pub async fn register<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure_response(&errors);
    }

    let role = match UserRole::parse(&request.role) {
        Some(role) => role,
        None => {
            return domain_error_response(
                &ValidationError::InvalidFormat {
                    field: "role".to_string(),
                }
                .into(),
            );
        }
    };

    match state
        .auth_service
        .register(
            &request.name,
            &request.email,
            &request.phone,
            &request.password,
            role,
        )
        .await
    {
        Ok(user) => HttpResponse::Created().json(user),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/v1/users/login
pub async fn login<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            access_token: outcome.access_token,
            token_type: "Bearer".to_string(),
            expires_in: outcome.expires_in,
            user: outcome.user,
        }),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/v1/users
pub async fn list<U, C, B, R, G>(state: web::Data<AppState<U, C, B, R, G>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state.auth_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for DELETE /api/v1/users/{id}
pub async fn remove<U, C, B, R, G>(
    state: web::Data<AppState<U, C, B, R, G>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    match state.auth_service.delete_user(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "User deleted successfully"
        })),
        Err(error) => domain_error_response(&error),
    }
}
