//! Load repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;
use fleetops_entity::load::model::{Load, NewLoad};

/// Repository for load CRUD operations.
#[derive(Debug, Clone)]
pub struct LoadRepository {
    pool: PgPool,
}

impl LoadRepository {
    /// Create a new load repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a load by its primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Load>> {
        sqlx::query_as::<_, Load>("SELECT * FROM loads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find load", e))
    }

    /// Return the highest-sorted load number with a `LOAD-<year>-` prefix,
    /// if any load exists for that year.
    pub async fn last_load_number_for_year(&self, year: i32) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT load_number FROM loads WHERE load_number LIKE $1 \
             ORDER BY load_number DESC LIMIT 1",
        )
        .bind(format!("LOAD-{year}-%"))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up last load number", e)
        })
    }

    /// Check whether a recurring group already has a load picking up on
    /// the given calendar date.
    pub async fn exists_for_group_on(&self, group_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loads \
             WHERE recurring_group_id = $1 AND scheduled_pickup_date::date = $2",
        )
        .bind(group_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check existing loads", e)
        })?;
        Ok(count > 0)
    }

    /// Create a load and return the stored row.
    pub async fn create(&self, load: &NewLoad) -> AppResult<Load> {
        sqlx::query_as::<_, Load>(
            "INSERT INTO loads (\
                load_number, \
                pickup_address, pickup_city, pickup_state, pickup_zip, \
                pickup_contact_name, pickup_contact_phone, scheduled_pickup_date, \
                delivery_address, delivery_city, delivery_state, delivery_zip, \
                delivery_contact_name, delivery_contact_phone, scheduled_delivery_date, \
                distance, deadhead_distance, load_rate, custom_rate_per_distance, \
                detention_time, detention_pay, notes, special_instructions, \
                driver_id, truck_id, status, is_recurring, recurring_group_id\
             ) VALUES (\
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28\
             ) RETURNING *",
        )
        .bind(&load.load_number)
        .bind(&load.pickup_address)
        .bind(&load.pickup_city)
        .bind(&load.pickup_state)
        .bind(&load.pickup_zip)
        .bind(&load.pickup_contact_name)
        .bind(&load.pickup_contact_phone)
        .bind(load.scheduled_pickup_date)
        .bind(&load.delivery_address)
        .bind(&load.delivery_city)
        .bind(&load.delivery_state)
        .bind(&load.delivery_zip)
        .bind(&load.delivery_contact_name)
        .bind(&load.delivery_contact_phone)
        .bind(load.scheduled_delivery_date)
        .bind(load.distance)
        .bind(load.deadhead_distance)
        .bind(load.load_rate)
        .bind(load.custom_rate_per_distance)
        .bind(load.detention_time)
        .bind(load.detention_pay)
        .bind(&load.notes)
        .bind(&load.special_instructions)
        .bind(load.driver_id)
        .bind(load.truck_id)
        .bind(load.status)
        .bind(load.is_recurring)
        .bind(load.recurring_group_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create load", e))
    }
}
