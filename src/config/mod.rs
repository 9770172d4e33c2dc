// Start of file: /src/config/mod.rs

/*
* Startup configuration (environment variables) and the state handed to handlers.
*/

pub mod environment;
pub mod state;

pub use environment::EnvironmentVariables;
pub use state::AppState;

// End of file: /src/config/mod.rs
