use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::plans::{InsertPlanEntity, PlanEntity, PlanRow, UpdatePlanEntity},
        repositories::plans::PlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::plans},
};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn list_all(&self) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = plans::table
            .select(PlanRow::as_select())
            .load::<PlanRow>(&mut conn)?;

        Ok(rows.into_iter().map(PlanEntity::from).collect())
    }

    async fn list_active(&self) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = plans::table
            .filter(plans::is_active.eq(true))
            .select(PlanRow::as_select())
            .load::<PlanRow>(&mut conn)?;

        Ok(rows.into_iter().map(PlanEntity::from).collect())
    }

    async fn count(&self) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = plans::table.count().get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    async fn find_by_id(&self, plan_id: i64) -> Result<Option<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = plans::table
            .filter(plans::id.eq(plan_id))
            .select(PlanRow::as_select())
            .first::<PlanRow>(&mut conn)
            .optional()?;

        Ok(row.map(PlanEntity::from))
    }

    async fn create(&self, insert_plan_entity: InsertPlanEntity) -> Result<PlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = insert_into(plans::table)
            .values(&insert_plan_entity)
            .returning(PlanRow::as_returning())
            .get_result::<PlanRow>(&mut conn)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        plan_id: i64,
        update_plan_entity: UpdatePlanEntity,
    ) -> Result<Option<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = update(plans::table.filter(plans::id.eq(plan_id)))
            .set(&update_plan_entity)
            .returning(PlanRow::as_returning())
            .get_result::<PlanRow>(&mut conn)
            .optional()?;

        Ok(row.map(PlanEntity::from))
    }

    async fn delete(&self, plan_id: i64) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(plans::table.filter(plans::id.eq(plan_id))).execute(&mut conn)?;

        Ok(deleted)
    }
}
