use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{
    application::usecases::plans::PlanUseCase,
    auth::AuthUser,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{PlanDto, SavePlanModel},
    },
    infrastructure::{
        axum_http::{flash, page_render},
        postgres::{postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let plan_usecase = PlanUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", get(index).post(store))
        .route("/create", get(create))
        .route("/:id", get(show).put(update).patch(update).delete(destroy))
        .route("/:id/edit", get(edit))
        .with_state(Arc::new(plan_usecase))
}

pub async fn index<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    jar: CookieJar,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.list().await {
        Ok(plans) => {
            let (jar, flash) = flash::take_flash(jar);
            let plans: Vec<PlanDto> = plans.into_iter().map(PlanDto::from).collect();

            (
                jar,
                page_render::render(
                    "Admin/Plans/Index",
                    json!({ "plans": plans, "flash": flash }),
                ),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn create<T>(
    State(_plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    page_render::render("Admin/Plans/Create", json!({}))
}

pub async fn store<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    jar: CookieJar,
    Json(save_plan_model): Json<SavePlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.create(save_plan_model).await {
        Ok(_) => (
            flash::set_flash(jar, "Plan created successfully!"),
            Redirect::to("/admin/plans"),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn show<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.get(plan_id).await {
        Ok(plan) => page_render::render(
            "Admin/Plans/Show",
            json!({ "plan": PlanDto::from(plan) }),
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn edit<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.get(plan_id).await {
        Ok(plan) => page_render::render(
            "Admin/Plans/Edit",
            json!({ "plan": PlanDto::from(plan) }),
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    jar: CookieJar,
    Path(plan_id): Path<i64>,
    Json(save_plan_model): Json<SavePlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.update(plan_id, save_plan_model).await {
        Ok(_) => (
            flash::set_flash(jar, "Plan updated successfully!"),
            Redirect::to("/admin/plans"),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn destroy<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _auth: AuthUser,
    jar: CookieJar,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.delete(plan_id).await {
        Ok(()) => (
            flash::set_flash(jar, "Plan deleted successfully!"),
            Redirect::to("/admin/plans"),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
