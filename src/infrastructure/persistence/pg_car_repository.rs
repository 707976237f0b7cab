//! PostgreSQL implementation of the car repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::constants::not_found;
use crate::domain::entities::{Car, NewCar};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

const CAR_COLUMNS: &str =
    "id, name, price, brand, registration_number, is_in_stock, user_id, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct CarRow {
    id: i64,
    name: String,
    price: f64,
    brand: String,
    registration_number: String,
    is_in_stock: bool,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(r: CarRow) -> Self {
        Car {
            id: r.id,
            name: r.name,
            price: r.price,
            brand: r.brand,
            registration_number: r.registration_number,
            is_in_stock: r.is_in_stock,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for cars.
///
/// `user_id` is stored as a plain column; the owning user lives in another
/// service's database.
pub struct PgCarRepository {
    pool: Arc<PgPool>,
}

impl PgCarRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = match new_car.id {
            Some(id) => {
                let row = sqlx::query_as::<_, CarRow>(&format!(
                    "INSERT INTO cars (id, name, price, brand, registration_number, is_in_stock, user_id) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {CAR_COLUMNS}"
                ))
                .bind(id)
                .bind(&new_car.name)
                .bind(new_car.price)
                .bind(&new_car.brand)
                .bind(&new_car.registration_number)
                .bind(new_car.is_in_stock)
                .bind(new_car.user_id)
                .fetch_one(&mut *tx)
                .await?;

                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('cars', 'id'), (SELECT MAX(id) FROM cars))",
                )
                .execute(&mut *tx)
                .await?;

                row
            }
            None => {
                sqlx::query_as::<_, CarRow>(&format!(
                    "INSERT INTO cars (name, price, brand, registration_number, is_in_stock, user_id) \
                     VALUES ($1, $2, $3, $4, $5, $6) RETURNING {CAR_COLUMNS}"
                ))
                .bind(&new_car.name)
                .bind(new_car.price)
                .bind(&new_car.brand)
                .bind(&new_car.registration_number)
                .bind(new_car.is_in_stock)
                .bind(new_car.user_id)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, car: NewCar) -> Result<Car, AppError> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "UPDATE cars SET \
                name                = $2, \
                price               = $3, \
                brand               = $4, \
                registration_number = $5, \
                is_in_stock         = $6, \
                user_id             = $7, \
                updated_at          = NOW() \
             WHERE id = $1 \
             RETURNING {CAR_COLUMNS}"
        ))
        .bind(id)
        .bind(&car.name)
        .bind(car.price)
        .bind(&car.brand)
        .bind(&car.registration_number)
        .bind(car.is_in_stock)
        .bind(car.user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Car::from)
            .ok_or_else(|| AppError::not_found(not_found("Car", id)))
    }

    async fn list(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars ORDER BY id"))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Car::from))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(not_found("Car", id)));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1)")
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
