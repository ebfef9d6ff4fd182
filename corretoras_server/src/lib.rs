//! HTTP front end for the CVM broker listing.
//!
//! Two routes are served:
//!
//! - `GET /` renders every broker (projected to name, net equity, and UF)
//!   into an HTML table.
//! - `GET /paginated?page=&pageSize=` returns one page of raw broker
//!   records wrapped in a JSON envelope.
//!
//! Any other path gets a plain-text 404. Upstream failures are mapped to
//! JSON error responses by [`AppError`].

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::{Cli, ServerConfig};
pub use error::AppError;
pub use state::AppState;
