//! In-memory stores and in-process clients shared by the handler tests.
//!
//! The three services run against [`World`]: each store is a `Mutex<Vec<_>>`,
//! and the remote clients call the sibling stores directly, so a test can
//! drive the user service and then inspect the car store.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};

use asset_services::AppError;
use asset_services::constants::not_found;
use asset_services::prelude::*;
use asset_services::routes::{car_router, laptop_router, user_router};

// ─── Stores ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[derive(Default)]
pub struct MemoryCars {
    rows: Mutex<Vec<Car>>,
    next_id: AtomicI64,
}

#[derive(Default)]
pub struct MemoryLaptops {
    rows: Mutex<Vec<Laptop>>,
    next_id: AtomicI64,
}

fn assign_id(next_id: &AtomicI64, explicit: Option<i64>, taken: bool) -> Result<i64, AppError> {
    match explicit {
        Some(_) if taken => Err(AppError::conflict("Resource already exists")),
        Some(id) => {
            next_id.fetch_max(id, Ordering::SeqCst);
            Ok(id)
        }
        None => Ok(next_id.fetch_add(1, Ordering::SeqCst) + 1),
    }
}

impl MemoryUsers {
    pub fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

impl MemoryCars {
    pub fn all(&self) -> Vec<Car> {
        self.rows.lock().unwrap().clone()
    }
}

impl MemoryLaptops {
    pub fn all(&self) -> Vec<Laptop> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let taken = new_user
            .id
            .is_some_and(|id| rows.iter().any(|u| u.id == id));
        let id = assign_id(&self.next_id, new_user.id, taken)?;
        let now = Utc::now();
        let user = User::new(
            id,
            new_user.first_name,
            new_user.last_name,
            new_user.username,
            new_user.email,
            now,
            now,
        );
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(not_found("User", id)))?;
        row.first_name = user.first_name;
        row.last_name = user.last_name;
        row.username = user.username;
        row.email = user.email;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.all().into_iter().find(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.all().into_iter().find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.all().into_iter().find(|u| u.email == email))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(not_found("User", id)));
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.all().iter().any(|u| u.id == id))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.all().iter().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.all().iter().any(|u| u.email == email))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl CarRepository for MemoryCars {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let taken = new_car.id.is_some_and(|id| rows.iter().any(|c| c.id == id));
        let id = assign_id(&self.next_id, new_car.id, taken)?;
        let now = Utc::now();
        let car = Car {
            id,
            name: new_car.name,
            price: new_car.price,
            brand: new_car.brand,
            registration_number: new_car.registration_number,
            is_in_stock: new_car.is_in_stock,
            user_id: new_car.user_id,
            created_at: now,
            updated_at: now,
        };
        rows.push(car.clone());
        Ok(car)
    }

    async fn update(&self, id: i64, car: NewCar) -> Result<Car, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(not_found("Car", id)))?;
        row.name = car.name;
        row.price = car.price;
        row.brand = car.brand;
        row.registration_number = car.registration_number;
        row.is_in_stock = car.is_in_stock;
        row.user_id = car.user_id;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.all().into_iter().find(|c| c.id == id))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, AppError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(not_found("Car", id)));
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.all().iter().any(|c| c.id == id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl LaptopRepository for MemoryLaptops {
    async fn create(&self, new_laptop: NewLaptop) -> Result<Laptop, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let taken = new_laptop
            .id
            .is_some_and(|id| rows.iter().any(|l| l.id == id));
        let id = assign_id(&self.next_id, new_laptop.id, taken)?;
        let now = Utc::now();
        let laptop = Laptop {
            id,
            name: new_laptop.name,
            price: new_laptop.price,
            brand: new_laptop.brand,
            is_in_stock: new_laptop.is_in_stock,
            description: new_laptop.description,
            user_id: new_laptop.user_id,
            created_at: now,
            updated_at: now,
        };
        rows.push(laptop.clone());
        Ok(laptop)
    }

    async fn update(&self, id: i64, laptop: NewLaptop) -> Result<Laptop, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::not_found(not_found("LapTop", id)))?;
        row.name = laptop.name;
        row.price = laptop.price;
        row.brand = laptop.brand;
        row.is_in_stock = laptop.is_in_stock;
        row.description = laptop.description;
        row.user_id = laptop.user_id;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<Laptop>, AppError> {
        Ok(self.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Laptop>, AppError> {
        Ok(self.all().into_iter().find(|l| l.id == id))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, AppError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|l| l.user_id == user_id)
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.id != id);
        if rows.len() == before {
            return Err(AppError::not_found(not_found("LapTop", id)));
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.all().iter().any(|l| l.id == id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

// ─── Clients ─────────────────────────────────────────────────────────────────

fn to_client_error(e: AppError) -> ClientError {
    ClientError::Status {
        status: e.status_code().as_u16(),
        message: e.to_string(),
    }
}

/// Car client backed directly by a [`MemoryCars`] store.
pub struct LocalCarClient(pub Arc<MemoryCars>);

#[async_trait]
impl CarClient for LocalCarClient {
    async fn add_car(&self, car: NewCar) -> Result<Car, ClientError> {
        self.0.create(car).await.map_err(to_client_error)
    }

    async fn update_car(&self, car_id: i64, car: NewCar) -> Result<Car, ClientError> {
        self.0.update(car_id, car).await.map_err(to_client_error)
    }

    async fn delete_car(&self, car_id: i64) -> Result<(), ClientError> {
        self.0.delete(car_id).await.map_err(to_client_error)
    }

    async fn cars_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, ClientError> {
        self.0.find_by_user_id(user_id).await.map_err(to_client_error)
    }
}

pub struct LocalLaptopClient(pub Arc<MemoryLaptops>);

#[async_trait]
impl LaptopClient for LocalLaptopClient {
    async fn laptops_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, ClientError> {
        self.0.find_by_user_id(user_id).await.map_err(to_client_error)
    }
}

pub struct LocalUserClient(pub Arc<MemoryUsers>);

#[async_trait]
impl UserClient for LocalUserClient {
    async fn find_user(&self, user_id: i64) -> Result<User, ClientError> {
        match self.0.find_by_id(user_id).await.map_err(to_client_error)? {
            Some(user) => Ok(user),
            None => Err(ClientError::Status {
                status: 404,
                message: not_found("User", user_id),
            }),
        }
    }
}

/// A sibling service that cannot be reached.
pub struct DownClient;

fn unreachable_service() -> ClientError {
    ClientError::Transport("connection refused".to_string())
}

#[async_trait]
impl CarClient for DownClient {
    async fn add_car(&self, _car: NewCar) -> Result<Car, ClientError> {
        Err(unreachable_service())
    }

    async fn update_car(&self, _car_id: i64, _car: NewCar) -> Result<Car, ClientError> {
        Err(unreachable_service())
    }

    async fn delete_car(&self, _car_id: i64) -> Result<(), ClientError> {
        Err(unreachable_service())
    }

    async fn cars_by_user_id(&self, _user_id: i64) -> Result<Vec<Car>, ClientError> {
        Err(unreachable_service())
    }
}

#[async_trait]
impl LaptopClient for DownClient {
    async fn laptops_by_user_id(&self, _user_id: i64) -> Result<Vec<Laptop>, ClientError> {
        Err(unreachable_service())
    }
}

#[async_trait]
impl UserClient for DownClient {
    async fn find_user(&self, _user_id: i64) -> Result<User, ClientError> {
        Err(unreachable_service())
    }
}

// ─── Servers ─────────────────────────────────────────────────────────────────

/// The three stores behind one test.
#[derive(Default, Clone)]
pub struct World {
    pub users: Arc<MemoryUsers>,
    pub cars: Arc<MemoryCars>,
    pub laptops: Arc<MemoryLaptops>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_server(&self) -> TestServer {
        self.user_server_with(
            Arc::new(LocalCarClient(self.cars.clone())),
            Arc::new(LocalLaptopClient(self.laptops.clone())),
        )
    }

    pub fn user_server_with(
        &self,
        car_client: Arc<dyn CarClient>,
        laptop_client: Arc<dyn LaptopClient>,
    ) -> TestServer {
        let service = UserService::new(self.users.clone(), car_client, laptop_client);
        let app = user_router(UserState {
            user_service: Arc::new(service),
        });
        TestServer::new(app).unwrap()
    }

    pub fn car_server(&self) -> TestServer {
        self.car_server_with(Arc::new(LocalUserClient(self.users.clone())))
    }

    pub fn car_server_with(&self, user_client: Arc<dyn UserClient>) -> TestServer {
        let service = CarService::new(self.cars.clone(), user_client);
        let app = car_router(CarState {
            car_service: Arc::new(service),
        });
        TestServer::new(app).unwrap()
    }

    pub fn laptop_server(&self) -> TestServer {
        self.laptop_server_with(Arc::new(LocalUserClient(self.users.clone())))
    }

    pub fn laptop_server_with(&self, user_client: Arc<dyn UserClient>) -> TestServer {
        let service = LaptopService::new(self.laptops.clone(), user_client);
        let app = laptop_router(LaptopState {
            laptop_service: Arc::new(service),
        });
        TestServer::new(app).unwrap()
    }
}

// ─── Payloads ────────────────────────────────────────────────────────────────

pub fn user_body(username: &str, email: &str) -> Value {
    json!({
        "firstName": "Alice",
        "lastName": "Martin",
        "username": username,
        "email": email
    })
}

pub fn car_body(name: &str, user_id: Option<i64>) -> Value {
    json!({
        "name": name,
        "price": 12500.0,
        "brand": "Renault",
        "registrationNumber": format!("REG-{name}"),
        "isInStock": true,
        "userId": user_id
    })
}

pub fn laptop_body(name: &str, user_id: i64) -> Value {
    json!({
        "name": name,
        "price": 999.0,
        "brand": "Lenovo",
        "isInStock": false,
        "description": "14 inch",
        "userId": user_id
    })
}

/// Inserts a user straight into the store and returns its id.
pub async fn seed_user(world: &World, username: &str) -> i64 {
    world
        .users
        .create(NewUser {
            id: None,
            first_name: "Seed".to_string(),
            last_name: "User".to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        })
        .await
        .unwrap()
        .id
}

pub async fn seed_car(world: &World, name: &str, user_id: i64) -> i64 {
    world
        .cars
        .create(NewCar {
            id: None,
            name: name.to_string(),
            price: 10_000.0,
            brand: "Fiat".to_string(),
            registration_number: format!("REG-{name}"),
            is_in_stock: true,
            user_id,
        })
        .await
        .unwrap()
        .id
}

pub async fn seed_laptop(world: &World, name: &str, user_id: i64) -> i64 {
    world
        .laptops
        .create(NewLaptop {
            id: None,
            name: name.to_string(),
            price: 800.0,
            brand: "Asus".to_string(),
            is_in_stock: true,
            description: None,
            user_id,
        })
        .await
        .unwrap()
        .id
}
