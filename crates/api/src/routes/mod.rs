pub mod fallback;
pub mod health;
pub mod home;
pub mod metrics;
