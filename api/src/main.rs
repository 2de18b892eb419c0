//! WheelShare API server entry point

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use ws_api::app::create_app;
use ws_api::routes::AppState;

use ws_core::services::auth::AuthServiceConfig;
use ws_core::services::{
    AuthService, BookingService, CarService, DummyPaymentProcessor, PaymentService,
    ReviewService, TokenService, TokenServiceConfig, VerificationService,
};
use ws_infra::database::mysql::{
    MySqlBookingRepository, MySqlCarRepository, MySqlReviewRepository, MySqlUserRepository,
};
use ws_infra::database::create_pool;
use ws_infra::payment::StripeGateway;
use ws_shared::config::{AuthConfig, DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting WheelShare API server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let auth_config = AuthConfig::from_env();

    if auth_config.is_using_default_secret() {
        warn!("JWT_SECRET not set; using the default secret. Do not run this in production.");
    }

    let pool = create_pool(&database_config).await?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let car_repository = Arc::new(MySqlCarRepository::new(pool.clone()));
    let booking_repository = Arc::new(MySqlBookingRepository::new(pool.clone()));
    let review_repository = Arc::new(MySqlReviewRepository::new(pool));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&auth_config)));
    let gateway = Arc::new(StripeGateway::from_env()?);

    let app_state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&token_service),
            AuthServiceConfig::from(&auth_config),
        )),
        car_service: Arc::new(CarService::new(Arc::clone(&car_repository))),
        booking_service: Arc::new(BookingService::new(
            Arc::clone(&car_repository),
            Arc::clone(&booking_repository),
        )),
        review_service: Arc::new(ReviewService::new(Arc::clone(&review_repository))),
        payment_service: Arc::new(PaymentService::new(gateway)),
        verification_service: Arc::new(VerificationService::new(Arc::clone(&user_repository))),
        dummy_payments: DummyPaymentProcessor::new(),
    });

    let bind_address = server_config.bind_address();
    info!("Server listening on {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&token_service)))
            .keep_alive(Duration::from_secs(server_config.keep_alive));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
