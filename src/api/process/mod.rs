// Start of file: /src/api/process/mod.rs

/*
    * Text decoration endpoint: payload models, the decoration itself,
    * request errors, handlers and routes.
*/

pub mod decoration;
pub mod error;
pub mod handler;
pub mod models;
pub mod routes;

pub use decoration::decorate;
pub use error::ProcessError;
pub use models::{InboundMessage, OutboundResult};
pub use routes::process_routes;

// End of file: /src/api/process/mod.rs
