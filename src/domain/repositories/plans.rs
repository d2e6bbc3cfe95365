use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity};

#[async_trait]
#[automock]
pub trait PlanRepository {
    async fn list_all(&self) -> Result<Vec<PlanEntity>>;
    async fn list_active(&self) -> Result<Vec<PlanEntity>>;
    async fn count(&self) -> Result<i64>;
    async fn find_by_id(&self, plan_id: i64) -> Result<Option<PlanEntity>>;
    async fn create(&self, insert_plan_entity: InsertPlanEntity) -> Result<PlanEntity>;
    async fn update(
        &self,
        plan_id: i64,
        update_plan_entity: UpdatePlanEntity,
    ) -> Result<Option<PlanEntity>>;
    async fn delete(&self, plan_id: i64) -> Result<usize>;
}
