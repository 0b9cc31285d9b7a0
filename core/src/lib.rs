pub mod config;
pub mod errors;
pub mod handler;
pub mod telemetry;

pub use config::{GreeterConfig, load_config};
pub use errors::{GreeterError, Result};
pub use handler::{GreetingResponse, InvocationContext, handle};
