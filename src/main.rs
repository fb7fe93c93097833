pub mod modules;
pub use modules::auth;
pub use modules::portfolio;
pub use modules::search;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

use crate::portfolio::adapter::outgoing::attachment_storage_gcs::GcsAttachmentStorage;
use crate::portfolio::adapter::outgoing::portfolio_store_postgres::PortfolioStorePostgres;
use crate::portfolio::adapter::outgoing::profile_pointer_postgres::ProfilePointerPostgres;
use crate::portfolio::application::use_cases::{
    add_item::{AddItemUseCase, IAddItemUseCase},
    create_portfolio::{CreatePortfolioUseCase, ICreatePortfolioUseCase},
    delete_item::{DeleteItemUseCase, IDeleteItemUseCase},
    delete_portfolio::{DeletePortfolioUseCase, IDeletePortfolioUseCase},
    exists_portfolio::{ExistsPortfolioUseCase, IExistsPortfolioUseCase},
    get_portfolio::{GetPortfolioUseCase, IGetPortfolioUseCase},
    reorder_items::{IReorderItemsUseCase, ReorderItemsUseCase},
    update_basic_info::{IUpdateBasicInfoUseCase, UpdateBasicInfoUseCase},
    update_item::{IUpdateItemUseCase, UpdateItemUseCase},
};

use crate::search::adapter::outgoing::ai_search_http::AiSearchHttpClient;
use crate::search::application::use_cases::search_candidates::{
    ISearchCandidatesUseCase, SearchCandidatesUseCase,
};

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_portfolio_use_case: Arc<dyn ICreatePortfolioUseCase + Send + Sync>,
    pub get_portfolio_use_case: Arc<dyn IGetPortfolioUseCase + Send + Sync>,
    pub exists_portfolio_use_case: Arc<dyn IExistsPortfolioUseCase + Send + Sync>,
    pub update_basic_info_use_case: Arc<dyn IUpdateBasicInfoUseCase + Send + Sync>,
    pub add_item_use_case: Arc<dyn IAddItemUseCase + Send + Sync>,
    pub update_item_use_case: Arc<dyn IUpdateItemUseCase + Send + Sync>,
    pub delete_item_use_case: Arc<dyn IDeleteItemUseCase + Send + Sync>,
    pub reorder_items_use_case: Arc<dyn IReorderItemsUseCase + Send + Sync>,
    pub delete_portfolio_use_case: Arc<dyn IDeletePortfolioUseCase + Send + Sync>,
    pub search_candidates_use_case: Arc<dyn ISearchCandidatesUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let gcs_bucket = env::var("GCS_BUCKET").expect("GCS_BUCKET is not set in .env file");
    let ai_server_url = env::var("AI_SERVER_URL").expect("AI_SERVER_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let portfolio_store = PortfolioStorePostgres::new(Arc::clone(&db_arc));
    let profile_pointer_store = ProfilePointerPostgres::new(Arc::clone(&db_arc));
    let attachment_storage = GcsAttachmentStorage::new(gcs_bucket);
    let search_client = AiSearchHttpClient::new(ai_server_url);

    // Use cases
    let create_portfolio_use_case =
        CreatePortfolioUseCase::new(portfolio_store.clone(), profile_pointer_store.clone());
    let get_portfolio_use_case = GetPortfolioUseCase::new(portfolio_store.clone());
    let exists_portfolio_use_case = ExistsPortfolioUseCase::new(portfolio_store.clone());
    let update_basic_info_use_case = UpdateBasicInfoUseCase::new(portfolio_store.clone());
    let add_item_use_case =
        AddItemUseCase::new(portfolio_store.clone(), attachment_storage.clone());
    let update_item_use_case =
        UpdateItemUseCase::new(portfolio_store.clone(), attachment_storage.clone());
    let delete_item_use_case =
        DeleteItemUseCase::new(portfolio_store.clone(), attachment_storage.clone());
    let reorder_items_use_case = ReorderItemsUseCase::new(portfolio_store.clone());
    let delete_portfolio_use_case = DeletePortfolioUseCase::new(
        portfolio_store.clone(),
        profile_pointer_store,
        attachment_storage,
    );
    let search_candidates_use_case =
        SearchCandidatesUseCase::new(search_client, portfolio_store);

    let state = AppState {
        create_portfolio_use_case: Arc::new(create_portfolio_use_case),
        get_portfolio_use_case: Arc::new(get_portfolio_use_case),
        exists_portfolio_use_case: Arc::new(exists_portfolio_use_case),
        update_basic_info_use_case: Arc::new(update_basic_info_use_case),
        add_item_use_case: Arc::new(add_item_use_case),
        update_item_use_case: Arc::new(update_item_use_case),
        delete_item_use_case: Arc::new(delete_item_use_case),
        reorder_items_use_case: Arc::new(reorder_items_use_case),
        delete_portfolio_use_case: Arc::new(delete_portfolio_use_case),
        search_candidates_use_case: Arc::new(search_candidates_use_case),
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_my_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_basic_info_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::exists_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_basic_info_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_item_handler);
    // reorder must come before the parametrized item routes
    cfg.service(crate::portfolio::adapter::incoming::web::routes::reorder_items_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_portfolio_handler);
    // Search
    cfg.service(crate::search::adapter::incoming::web::routes::search_candidates_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
