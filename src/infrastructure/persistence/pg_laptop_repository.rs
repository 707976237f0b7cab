//! PostgreSQL implementation of the laptop repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::constants::not_found;
use crate::domain::entities::{Laptop, NewLaptop};
use crate::domain::repositories::LaptopRepository;
use crate::error::AppError;

const LAPTOP_COLUMNS: &str =
    "id, name, price, brand, is_in_stock, description, user_id, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct LaptopRow {
    id: i64,
    name: String,
    price: f64,
    brand: String,
    is_in_stock: bool,
    description: Option<String>,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LaptopRow> for Laptop {
    fn from(r: LaptopRow) -> Self {
        Laptop {
            id: r.id,
            name: r.name,
            price: r.price,
            brand: r.brand,
            is_in_stock: r.is_in_stock,
            description: r.description,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgLaptopRepository {
    pool: Arc<PgPool>,
}

impl PgLaptopRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LaptopRepository for PgLaptopRepository {
    async fn create(&self, new_laptop: NewLaptop) -> Result<Laptop, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = match new_laptop.id {
            Some(id) => {
                let row = sqlx::query_as::<_, LaptopRow>(&format!(
                    "INSERT INTO laptops (id, name, price, brand, is_in_stock, description, user_id) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {LAPTOP_COLUMNS}"
                ))
                .bind(id)
                .bind(&new_laptop.name)
                .bind(new_laptop.price)
                .bind(&new_laptop.brand)
                .bind(new_laptop.is_in_stock)
                .bind(&new_laptop.description)
                .bind(new_laptop.user_id)
                .fetch_one(&mut *tx)
                .await?;

                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('laptops', 'id'), (SELECT MAX(id) FROM laptops))",
                )
                .execute(&mut *tx)
                .await?;

                row
            }
            None => {
                sqlx::query_as::<_, LaptopRow>(&format!(
                    "INSERT INTO laptops (name, price, brand, is_in_stock, description, user_id) \
                     VALUES ($1, $2, $3, $4, $5, $6) RETURNING {LAPTOP_COLUMNS}"
                ))
                .bind(&new_laptop.name)
                .bind(new_laptop.price)
                .bind(&new_laptop.brand)
                .bind(new_laptop.is_in_stock)
                .bind(&new_laptop.description)
                .bind(new_laptop.user_id)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, laptop: NewLaptop) -> Result<Laptop, AppError> {
        let row = sqlx::query_as::<_, LaptopRow>(&format!(
            "UPDATE laptops SET \
                name        = $2, \
                price       = $3, \
                brand       = $4, \
                is_in_stock = $5, \
                description = $6, \
                user_id     = $7, \
                updated_at  = NOW() \
             WHERE id = $1 \
             RETURNING {LAPTOP_COLUMNS}"
        ))
        .bind(id)
        .bind(&laptop.name)
        .bind(laptop.price)
        .bind(&laptop.brand)
        .bind(laptop.is_in_stock)
        .bind(&laptop.description)
        .bind(laptop.user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Laptop::from)
            .ok_or_else(|| AppError::not_found(not_found("LapTop", id)))
    }

    async fn list(&self) -> Result<Vec<Laptop>, AppError> {
        let rows = sqlx::query_as::<_, LaptopRow>(&format!(
            "SELECT {LAPTOP_COLUMNS} FROM laptops ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Laptop::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Laptop>, AppError> {
        let row = sqlx::query_as::<_, LaptopRow>(&format!(
            "SELECT {LAPTOP_COLUMNS} FROM laptops WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Laptop::from))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, AppError> {
        let rows = sqlx::query_as::<_, LaptopRow>(&format!(
            "SELECT {LAPTOP_COLUMNS} FROM laptops WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Laptop::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM laptops WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(not_found("LapTop", id)));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM laptops WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
