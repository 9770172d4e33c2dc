// Process bootstrap: logging setup and the HTTP server

pub mod logging;
pub mod server;
