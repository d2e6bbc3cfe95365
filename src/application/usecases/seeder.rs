use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::{
    auth,
    domain::{
        entities::users::InsertUserEntity,
        repositories::{plans::PlanRepository, users::UserRepository},
        value_objects::plans::NewPlan,
    },
};

pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_NAME: &str = "Admin";
pub const ADMIN_DEFAULT_PASSWORD: &str = "123123";

/// One-shot bootstrap: ensures the admin account exists and, on an empty
/// store, inserts the baseline plans. Safe to run any number of times.
pub struct DatabaseSeeder<P, U>
where
    P: PlanRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P, U> DatabaseSeeder<P, U>
where
    P: PlanRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            plan_repo,
            user_repo,
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.seed_admin_account().await?;
        self.seed_baseline_plans().await?;

        Ok(())
    }

    /// Keyed on email: a second run finds the account and leaves it alone.
    async fn seed_admin_account(&self) -> Result<()> {
        if self.user_repo.find_by_email(ADMIN_EMAIL).await?.is_some() {
            info!(email = ADMIN_EMAIL, "seeder: admin account already present");
            return Ok(());
        }

        let password_hash = auth::hash_password(ADMIN_DEFAULT_PASSWORD)?;
        let admin = self
            .user_repo
            .create(InsertUserEntity {
                name: ADMIN_NAME.to_string(),
                email: ADMIN_EMAIL.to_string(),
                password_hash,
                email_verified_at: Some(Utc::now()),
            })
            .await?;

        info!(user_id = admin.id, email = ADMIN_EMAIL, "seeder: created admin account");
        Ok(())
    }

    /// Baseline plans are only inserted into an empty store, so reruns never
    /// duplicate them.
    async fn seed_baseline_plans(&self) -> Result<()> {
        let existing = self.plan_repo.count().await?;
        if existing > 0 {
            info!(existing, "seeder: plans already present, skipping baseline");
            return Ok(());
        }

        for new_plan in baseline_plans() {
            let plan = self.plan_repo.create(new_plan.into()).await?;
            info!(plan_id = plan.id, name = %plan.name, "seeder: created baseline plan");
        }

        Ok(())
    }
}

pub fn baseline_plans() -> Vec<NewPlan> {
    vec![
        NewPlan {
            name: "Basic Plan".to_string(),
            description: Some("Perfect for small businesses and startups".to_string()),
            price_minor: 2999,
            duration: "monthly".to_string(),
            features: vec![
                "Up to 100 users".to_string(),
                "Basic analytics".to_string(),
                "Email support".to_string(),
                "5GB storage".to_string(),
            ],
            is_active: true,
        },
        NewPlan {
            name: "Pro Plan".to_string(),
            description: Some("Advanced features for growing businesses".to_string()),
            price_minor: 7999,
            duration: "monthly".to_string(),
            features: vec![
                "Up to 1000 users".to_string(),
                "Advanced analytics".to_string(),
                "Priority support".to_string(),
                "25GB storage".to_string(),
                "Custom integrations".to_string(),
                "Team collaboration".to_string(),
            ],
            is_active: true,
        },
        NewPlan {
            name: "Enterprise Plan".to_string(),
            description: Some("Full-featured solution for large organizations".to_string()),
            price_minor: 19999,
            duration: "monthly".to_string(),
            features: vec![
                "Unlimited users".to_string(),
                "Enterprise analytics".to_string(),
                "24/7 phone support".to_string(),
                "100GB storage".to_string(),
                "Custom integrations".to_string(),
                "Advanced security".to_string(),
                "Dedicated account manager".to_string(),
                "SLA guarantee".to_string(),
            ],
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::{
        entities::{plans::PlanEntity, users::UserEntity},
        repositories::{plans::MockPlanRepository, users::MockUserRepository},
    };

    fn sample_admin() -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id: 1,
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            email_verified_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_plan(id: i64, name: &str) -> PlanEntity {
        let now = Utc::now();
        PlanEntity {
            id,
            name: name.to_string(),
            description: None,
            price_minor: 2999,
            duration: "monthly".to_string(),
            features: vec![],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn fresh_store_gets_admin_and_baseline_plans() {
        let mut plan_repo = MockPlanRepository::new();
        let mut user_repo = MockUserRepository::new();

        user_repo
            .expect_find_by_email()
            .with(eq(ADMIN_EMAIL))
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repo
            .expect_create()
            .withf(|insert| {
                insert.email == ADMIN_EMAIL
                    && insert.email_verified_at.is_some()
                    && insert.password_hash.starts_with("$argon2")
            })
            .returning(|_| Box::pin(async { Ok(sample_admin()) }));

        plan_repo
            .expect_count()
            .returning(|| Box::pin(async { Ok(0) }));
        for (id, name) in [(1, "Basic Plan"), (2, "Pro Plan"), (3, "Enterprise Plan")] {
            let expected = name.to_string();
            plan_repo
                .expect_create()
                .withf(move |insert| insert.name == expected && insert.is_active)
                .returning(move |_| {
                    let plan = sample_plan(id, name);
                    Box::pin(async move { Ok(plan) })
                });
        }

        let seeder = DatabaseSeeder::new(Arc::new(plan_repo), Arc::new(user_repo));

        seeder.run().await.unwrap();
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let mut plan_repo = MockPlanRepository::new();
        let mut user_repo = MockUserRepository::new();

        user_repo
            .expect_find_by_email()
            .with(eq(ADMIN_EMAIL))
            .returning(|_| Box::pin(async { Ok(Some(sample_admin())) }));
        user_repo.expect_create().times(0);

        plan_repo
            .expect_count()
            .returning(|| Box::pin(async { Ok(3) }));
        plan_repo.expect_create().times(0);

        let seeder = DatabaseSeeder::new(Arc::new(plan_repo), Arc::new(user_repo));

        seeder.run().await.unwrap();
    }

    #[test]
    fn baseline_covers_the_three_tiers() {
        let plans = baseline_plans();

        assert_eq!(plans.len(), 3);
        assert!(plans.iter().all(|plan| plan.is_active));
        assert!(plans.iter().all(|plan| plan.duration == "monthly"));
        assert_eq!(
            plans.iter().map(|plan| plan.price_minor).collect::<Vec<_>>(),
            vec![2999, 7999, 19999]
        );
    }
}
