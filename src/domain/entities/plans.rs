use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{domain::value_objects::plans::NewPlan, infrastructure::postgres::schema::plans};

#[derive(Debug, Clone)]
pub struct PlanEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration: String,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw row used for Diesel queries. Features stay as JSON and are parsed into a string list.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanRow> for PlanEntity {
    fn from(value: PlanRow) -> Self {
        let features = serde_json::from_value(value.features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price_minor: value.price_minor,
            duration: value.duration,
            features,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plans)]
pub struct InsertPlanEntity {
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_active: bool,
}

impl From<NewPlan> for InsertPlanEntity {
    fn from(value: NewPlan) -> Self {
        Self {
            name: value.name,
            description: value.description,
            price_minor: value.price_minor,
            duration: value.duration,
            features: serde_json::Value::from(value.features),
            is_active: value.is_active,
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = plans)]
#[diesel(treat_none_as_null = true)]
pub struct UpdatePlanEntity {
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<NewPlan> for UpdatePlanEntity {
    fn from(value: NewPlan) -> Self {
        Self {
            name: value.name,
            description: value.description,
            price_minor: value.price_minor,
            duration: value.duration,
            features: serde_json::Value::from(value.features),
            is_active: value.is_active,
            updated_at: Utc::now(),
        }
    }
}
