pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use error::AppError;
pub use routes::configure;
pub use state::AppState;
