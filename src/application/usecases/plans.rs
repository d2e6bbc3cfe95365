use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::plans::PlanEntity,
    repositories::plans::PlanRepository,
    value_objects::plans::{SavePlanModel, ValidationErrors},
};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan not found")]
    NotFound,
    #[error("validation failed")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PlanError::NotFound => StatusCode::NOT_FOUND,
            PlanError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PlanError>;

pub struct PlanUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
}

impl<P> PlanUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>) -> Self {
        Self { plan_repo }
    }

    /// All plans, in natural store order, for the admin listing.
    pub async fn list(&self) -> UseCaseResult<Vec<PlanEntity>> {
        let plans = self.plan_repo.list_all().await.map_err(|err| {
            error!(db_error = ?err, "plans: failed to list plans");
            PlanError::Internal(err)
        })?;

        Ok(plans)
    }

    pub async fn get(&self, plan_id: i64) -> UseCaseResult<PlanEntity> {
        let plan = self.plan_repo.find_by_id(plan_id).await.map_err(|err| {
            error!(%plan_id, db_error = ?err, "plans: failed to load plan");
            PlanError::Internal(err)
        })?;

        plan.ok_or_else(|| {
            warn!(%plan_id, "plans: plan not found");
            PlanError::NotFound
        })
    }

    pub async fn create(&self, save_plan_model: SavePlanModel) -> UseCaseResult<PlanEntity> {
        let new_plan = save_plan_model.validate().map_err(|errors| {
            warn!(errors = ?errors, "plans: rejected invalid plan payload");
            PlanError::Validation(errors)
        })?;

        let plan = self.plan_repo.create(new_plan.into()).await.map_err(|err| {
            error!(db_error = ?err, "plans: failed to create plan");
            PlanError::Internal(err)
        })?;

        info!(plan_id = plan.id, name = %plan.name, "plans: created plan");
        Ok(plan)
    }

    pub async fn update(
        &self,
        plan_id: i64,
        save_plan_model: SavePlanModel,
    ) -> UseCaseResult<PlanEntity> {
        let new_plan = save_plan_model.validate().map_err(|errors| {
            warn!(%plan_id, errors = ?errors, "plans: rejected invalid plan payload");
            PlanError::Validation(errors)
        })?;

        let updated = self
            .plan_repo
            .update(plan_id, new_plan.into())
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "plans: failed to update plan");
                PlanError::Internal(err)
            })?;

        let plan = updated.ok_or_else(|| {
            warn!(%plan_id, "plans: plan not found for update");
            PlanError::NotFound
        })?;

        info!(plan_id = plan.id, "plans: updated plan");
        Ok(plan)
    }

    pub async fn delete(&self, plan_id: i64) -> UseCaseResult<()> {
        let deleted = self.plan_repo.delete(plan_id).await.map_err(|err| {
            error!(%plan_id, db_error = ?err, "plans: failed to delete plan");
            PlanError::Internal(err)
        })?;

        if deleted == 0 {
            warn!(%plan_id, "plans: plan not found for delete");
            return Err(PlanError::NotFound);
        }

        info!(%plan_id, "plans: deleted plan");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::repositories::plans::MockPlanRepository;

    fn sample_plan(id: i64) -> PlanEntity {
        let now = Utc::now();
        PlanEntity {
            id,
            name: "Basic Plan".to_string(),
            description: Some("Perfect for small businesses and startups".to_string()),
            price_minor: 2999,
            duration: "monthly".to_string(),
            features: vec!["Email support".to_string()],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_payload() -> SavePlanModel {
        SavePlanModel {
            name: Some("Basic Plan".to_string()),
            description: Some("Perfect for small businesses and startups".to_string()),
            price: Some(2999),
            duration: Some("monthly".to_string()),
            features: Some(vec!["Email support".to_string()]),
            is_active: Some(true),
        }
    }

    #[tokio::test]
    async fn create_persists_validated_payload() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_create()
            .withf(|insert| {
                insert.name == "Basic Plan"
                    && insert.price_minor == 2999
                    && insert.duration == "monthly"
                    && insert.is_active
            })
            .returning(|_| Box::pin(async { Ok(sample_plan(1)) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let plan = usecase.create(sample_payload()).await.unwrap();

        assert_eq!(plan.id, 1);
        assert_eq!(plan.name, "Basic Plan");
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_touching_store() {
        let mut plan_repo = MockPlanRepository::new();
        plan_repo.expect_create().times(0);

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let result = usecase.create(SavePlanModel::default()).await;

        match result {
            Err(PlanError::Validation(errors)) => {
                assert!(errors.contains("name"));
                assert!(errors.contains("price"));
                assert!(errors.contains("duration"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_missing_plan_returns_not_found() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_find_by_id()
            .with(eq(999))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let result = usecase.get(999).await;

        assert!(matches!(result, Err(PlanError::NotFound)));
    }

    #[tokio::test]
    async fn update_missing_plan_returns_not_found() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_update()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let result = usecase.update(999, sample_payload()).await;

        assert!(matches!(result, Err(PlanError::NotFound)));
    }

    #[tokio::test]
    async fn update_is_idempotent_under_identical_input() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_update()
            .times(2)
            .withf(|plan_id, changes| *plan_id == 1 && changes.name == "Basic Plan")
            .returning(|_, _| Box::pin(async { Ok(Some(sample_plan(1))) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let first = usecase.update(1, sample_payload()).await.unwrap();
        let second = usecase.update(1, sample_payload()).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.name, second.name);
        assert_eq!(first.price_minor, second.price_minor);
        assert_eq!(first.duration, second.duration);
        assert_eq!(first.features, second.features);
        assert_eq!(first.is_active, second.is_active);
    }

    #[tokio::test]
    async fn delete_missing_plan_returns_not_found() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_delete()
            .with(eq(999))
            .returning(|_| Box::pin(async { Ok(0) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));
        let result = usecase.delete(999).await;

        assert!(matches!(result, Err(PlanError::NotFound)));
    }

    #[tokio::test]
    async fn delete_existing_plan_succeeds() {
        let mut plan_repo = MockPlanRepository::new();

        plan_repo
            .expect_delete()
            .with(eq(1))
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = PlanUseCase::new(Arc::new(plan_repo));

        usecase.delete(1).await.unwrap();
    }
}
