pub mod auth;
pub mod bookings;
pub mod cabins;
pub mod context;
pub mod dashboard;
pub mod settings;
pub mod today;

pub use context::AppContext;
