pub mod damages;
pub mod health;
pub mod locations;
pub mod quotations;
pub mod vehicles;
