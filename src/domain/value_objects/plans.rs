use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::plans::PlanEntity;

/// Upper bound for the `name` and `duration` labels.
pub const MAX_LABEL_CHARS: usize = 255;

/// Request body accepted by the store and update operations. Every field is
/// optional at the deserialization layer so that missing values surface as
/// field-level validation messages instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavePlanModel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl SavePlanModel {
    /// Applies the shared store/update rule set and returns the validated
    /// form, or the per-field messages when any rule fails.
    pub fn validate(self) -> Result<NewPlan, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.map(|name| name.trim().to_string()).unwrap_or_default();
        if name.is_empty() {
            errors.add("name", "name is required");
        } else if name.chars().count() > MAX_LABEL_CHARS {
            errors.add("name", "name must not exceed 255 characters");
        }

        let duration = self
            .duration
            .map(|duration| duration.trim().to_string())
            .unwrap_or_default();
        if duration.is_empty() {
            errors.add("duration", "duration is required");
        } else if duration.chars().count() > MAX_LABEL_CHARS {
            errors.add("duration", "duration must not exceed 255 characters");
        }

        let price_minor = match self.price {
            None => {
                errors.add("price", "price is required");
                0
            }
            Some(price) if price < 0 => {
                errors.add("price", "price must be a non-negative integer");
                0
            }
            Some(price) => match i32::try_from(price) {
                Ok(value) => value,
                Err(_) => {
                    errors.add("price", "price is out of range");
                    0
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPlan {
            name,
            description: self.description,
            price_minor,
            duration,
            features: self.features.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Validated form of a plan payload, shared by the admin store/update
/// operations and the seeder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlan {
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration: String,
    pub features: Vec<String>,
    pub is_active: bool,
}

/// Field-level validation messages, keyed by the offending request field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

/// Wire shape of a plan. Prices travel as non-negative integers in minor
/// currency units under the `price` key.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub duration: String,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanEntity> for PlanDto {
    fn from(value: PlanEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price_minor,
            duration: value.duration,
            features: value.features,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
