use anyhow::Result;
use planhub::application::usecases::seeder::DatabaseSeeder;
use planhub::config::config_loader;
use planhub::infrastructure::postgres::{
    postgres_connection,
    repositories::{plans::PlanPostgres, users::UserPostgres},
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Seeder exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    planhub::init_observability();

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool =
        Arc::new(postgres_connection::establish_connection(&dotenvy_env.database.url)?);
    info!("Postgres connection has been established");

    let seeder = DatabaseSeeder::new(
        Arc::new(PlanPostgres::new(Arc::clone(&postgres_pool))),
        Arc::new(UserPostgres::new(Arc::clone(&postgres_pool))),
    );
    seeder.run().await?;

    info!("Database seeding completed");
    Ok(())
}
