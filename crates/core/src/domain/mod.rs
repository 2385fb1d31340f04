pub mod location;
pub mod offer;
pub mod request;
pub mod vehicle;
