use std::env;

use config::Config;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use member_query::db::{establish_connection_pool_with, get_connection};
use member_query::models::config::{AppConfig, environment_overrides};
use member_query::repository::{DieselRepository, MemberReader};
use member_query::seed_sample_data;
use member_query::services::member::{CountStrategy, search_members_page};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn load_config() -> Result<AppConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (`APP_` prefix, `__` for nesting)
        .add_source(environment_overrides())
        .build()?
        .try_deserialize::<AppConfig>()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool_with(
        &app_config.database_url,
        app_config.store.clone(),
    ) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    match get_connection(&pool) {
        Ok(mut conn) => {
            if let Err(err) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run migrations: {err}");
                std::process::exit(1);
            }
        }
        Err(_) => std::process::exit(1),
    }

    let repo = DieselRepository::new(pool);

    if app_config.seed_sample_data {
        match repo.count_members() {
            Ok(0) => {
                if let Err(err) = seed_sample_data(&repo) {
                    log::error!("Failed to seed sample data: {err}");
                    std::process::exit(1);
                }
            }
            Ok(total) => log::info!("Store already holds {total} members"),
            Err(err) => {
                log::error!("Failed to inspect store: {err}");
                std::process::exit(1);
            }
        }
    }

    let page = match search_members_page(
        &repo,
        &app_config.search,
        app_config.page,
        app_config.page_size,
        CountStrategy::Lazy,
    ) {
        Ok(page) => page,
        Err(err) => {
            log::error!("Search failed: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Page {} of {} ({} matching members)",
        page.number() + 1,
        page.total_pages(),
        page.total
    );

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize page: {err}");
            std::process::exit(1);
        }
    }
}
