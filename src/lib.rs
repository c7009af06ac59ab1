pub mod app;
pub mod client;
pub mod endpoints;
pub mod enrollment;
pub mod error;
pub mod forms;
pub mod interface;
pub mod model;
pub mod validation;

#[cfg(feature = "no-wasm")]
pub use reqwest::Client;
#[cfg(feature = "no-wasm")]
pub use tokio;
