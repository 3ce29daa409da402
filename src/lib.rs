//! Simple API: CRUD over a single `Data` record type, backed by PostgreSQL, with OpenAPI docs.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use config::{PoolSettings, Settings};
pub use error::AppError;
pub use migration::ensure_data_table;
pub use model::{Data, DataInput};
pub use routes::app;
pub use state::AppState;
pub use store::{DataStore, MemoryStore, PgDataStore};
