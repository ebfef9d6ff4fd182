//! Library layer for Corretoras: upstream facade, projection, and pagination.
//!
//! Wraps the `brasilapi_cvm` client with the two views the server exposes:
//! the projected display list and a page of raw broker records.

pub mod directory;
pub mod error;
pub mod pagination;
pub mod projection;

pub use brasilapi_cvm;
pub use brasilapi_cvm::types;

pub use directory::BrokerDirectory;
pub use error::CorretorasError;
pub use pagination::{paginate, PageRequest, Paginated};
pub use projection::{project, BrokerDisplay};
