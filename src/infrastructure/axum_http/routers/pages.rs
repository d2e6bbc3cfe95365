use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;

use crate::{
    application::usecases::pages::PageUseCase,
    auth::VerifiedUser,
    domain::{repositories::plans::PlanRepository, value_objects::plans::PlanDto},
    infrastructure::{
        axum_http::page_render,
        postgres::{postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let page_usecase = PageUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .route("/chat", get(chat))
        .route("/help-center", get(help_center))
        .with_state(Arc::new(page_usecase))
}

pub async fn home<T>(State(page_usecase): State<Arc<PageUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    render_with_active_plans(&page_usecase, "Welcome").await
}

pub async fn dashboard<T>(
    State(_page_usecase): State<Arc<PageUseCase<T>>>,
    _auth: VerifiedUser,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    page_render::render("Dashboard", json!({}))
}

pub async fn chat<T>(State(page_usecase): State<Arc<PageUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    render_with_active_plans(&page_usecase, "Chat").await
}

pub async fn help_center<T>(State(page_usecase): State<Arc<PageUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    render_with_active_plans(&page_usecase, "HelpCenter").await
}

async fn render_with_active_plans<T>(
    page_usecase: &PageUseCase<T>,
    component: &'static str,
) -> axum::response::Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match page_usecase.active_plans().await {
        Ok(plans) => {
            let plans: Vec<PlanDto> = plans.into_iter().map(PlanDto::from).collect();
            page_render::render(component, json!({ "plans": plans })).into_response()
        }
        Err(e) => e.into_response(),
    }
}
