pub mod errors;
pub mod db;
pub mod brand;
pub mod color;
pub mod car_model;
pub mod model_color;
pub mod accessory;
pub mod insurance;
pub mod customer;
pub mod sales_person;
pub mod car;
pub mod car_accessory;
pub mod car_insurance;
pub mod purchase;

#[cfg(test)]
mod tests;
