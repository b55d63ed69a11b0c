pub mod health;
pub mod metrics;
pub mod policies;
pub mod products;
pub mod swagger;
