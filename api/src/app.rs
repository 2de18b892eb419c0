//! Application factory
//!
//! Builds the actix-web application around an [`AppState`] service graph
//! and the token service used by the JWT middleware. `main` wires in the
//! MySQL repositories and the Stripe gateway; the integration tests wire
//! in mocks.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{bookings, cars, payments, reviews, users, verify, AppState};

use ws_core::repositories::{BookingRepository, CarRepository, ReviewRepository, UserRepository};
use ws_core::services::{PaymentGateway, TokenService};
use ws_shared::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<U, C, B, R, G>(
    app_state: web::Data<AppState<U, C, B, R, G>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<Error: std::fmt::Debug>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    G: PaymentGateway + 'static,
{
    let cors = create_cors();
    let auth = JwtAuth::new(token_service);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(users::register::<U, C, B, R, G>))
                        .route("/login", web::post().to(users::login::<U, C, B, R, G>))
                        .route("", web::get().to(users::list::<U, C, B, R, G>))
                        .route("/{id}", web::delete().to(users::remove::<U, C, B, R, G>)),
                )
                .service(
                    web::scope("/cars")
                        .route(
                            "/add",
                            web::post()
                                .to(cars::add::<U, C, B, R, G>)
                                .wrap(auth.clone()),
                        )
                        .route("", web::get().to(cars::search::<U, C, B, R, G>)),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "",
                            web::post()
                                .to(bookings::create::<U, C, B, R, G>)
                                .wrap(auth.clone()),
                        )
                        .route("", web::get().to(bookings::list::<U, C, B, R, G>))
                        .route(
                            "/{id}",
                            web::delete()
                                .to(bookings::cancel::<U, C, B, R, G>)
                                .wrap(auth.clone()),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .route(
                            "",
                            web::post()
                                .to(reviews::create::<U, C, B, R, G>)
                                .wrap(auth.clone()),
                        )
                        .route(
                            "/{car_id}",
                            web::get().to(reviews::list_for_car::<U, C, B, R, G>),
                        ),
                )
                .service(web::scope("/verify").route(
                    "/pan",
                    web::post().to(verify::pan::<U, C, B, R, G>).wrap(auth),
                ))
                .route("/payments", web::post().to(payments::charge::<U, C, B, R, G>))
                .route(
                    "/dummy-payments",
                    web::post().to(payments::dummy::<U, C, B, R, G>),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "wheelshare-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
