use std::sync::Arc;

use tracing::error;

use crate::{
    application::usecases::plans::{PlanError, UseCaseResult},
    domain::{entities::plans::PlanEntity, repositories::plans::PlanRepository},
};

/// Props provider for the public pages. Only active plans are ever exposed.
pub struct PageUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
}

impl<P> PageUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>) -> Self {
        Self { plan_repo }
    }

    pub async fn active_plans(&self) -> UseCaseResult<Vec<PlanEntity>> {
        let plans = self.plan_repo.list_active().await.map_err(|err| {
            error!(db_error = ?err, "pages: failed to load active plans");
            PlanError::Internal(err)
        })?;

        Ok(plans)
    }
}
