//! Per-service route tables, mounted under each service's base path.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::handlers::{cars, laptops, users};
use crate::state::{CarState, LaptopState, UserState};

/// User service routes.
///
/// # Endpoints
///
/// - `POST   /add`                          - Register a user
/// - `GET    /all`                          - List users
/// - `GET    /{id}`                         - Fetch a user
/// - `PUT    /{id}`                         - Replace a user
/// - `DELETE /{id}`                         - Delete a user
/// - `GET    /cars/{userId}`                - Cars of a user (car service)
/// - `GET    /lapTops/{userId}`             - Laptops of a user (laptop service)
/// - `GET    /cars-and-lapTops/{userId}`    - User with cars and laptops
/// - `POST   /addCar/{userId}`              - Create a car through the car service
/// - `PUT    /editCar/{userId}/{carId}`     - Replace a car through the car service
/// - `DELETE /deleteCar/{userId}/{carId}`   - Delete a car through the car service
pub fn user_routes() -> Router<UserState> {
    Router::new()
        .route("/add", post(users::add_user_handler))
        .route("/all", get(users::list_users_handler))
        .route(
            "/{id}",
            get(users::get_user_handler)
                .put(users::edit_user_handler)
                .delete(users::delete_user_handler),
        )
        .route("/cars/{user_id}", get(users::user_cars_handler))
        .route("/lapTops/{user_id}", get(users::user_laptops_handler))
        .route(
            "/cars-and-lapTops/{user_id}",
            get(users::user_assets_handler),
        )
        .route("/addCar/{user_id}", post(users::add_car_handler))
        .route("/editCar/{user_id}/{car_id}", put(users::edit_car_handler))
        .route(
            "/deleteCar/{user_id}/{car_id}",
            delete(users::delete_car_handler),
        )
}

/// Car service routes.
///
/// # Endpoints
///
/// - `POST   /add`                          - Store a car
/// - `GET    /all`                          - List cars
/// - `GET    /{id}`                         - Fetch a car
/// - `PUT    /{id}`                         - Replace a car
/// - `DELETE /{id}`                         - Delete a car
/// - `GET    /byUserId/{userId}`            - Cars owned by a user
/// - `GET    /detail-car-and-user/{id}`     - Car with its owner
pub fn car_routes() -> Router<CarState> {
    Router::new()
        .route("/add", post(cars::add_car_handler))
        .route("/all", get(cars::list_cars_handler))
        .route(
            "/{id}",
            get(cars::get_car_handler)
                .put(cars::edit_car_handler)
                .delete(cars::delete_car_handler),
        )
        .route("/byUserId/{user_id}", get(cars::cars_by_user_handler))
        .route("/detail-car-and-user/{id}", get(cars::car_detail_handler))
}

/// Laptop service routes.
///
/// Same shape as [`car_routes`], with `/detail-laptop-and-user/{id}` as the
/// detail view.
pub fn laptop_routes() -> Router<LaptopState> {
    Router::new()
        .route("/add", post(laptops::add_laptop_handler))
        .route("/all", get(laptops::list_laptops_handler))
        .route(
            "/{id}",
            get(laptops::get_laptop_handler)
                .put(laptops::edit_laptop_handler)
                .delete(laptops::delete_laptop_handler),
        )
        .route(
            "/byUserId/{user_id}",
            get(laptops::laptops_by_user_handler),
        )
        .route(
            "/detail-laptop-and-user/{id}",
            get(laptops::laptop_detail_handler),
        )
}
