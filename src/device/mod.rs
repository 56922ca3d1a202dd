/// Driver side: the info display collaborator, its errors and its lifecycle.
pub mod driver;
pub mod errors;
pub mod session;
pub mod simulated;

#[cfg(test)]
pub mod fake;

pub use driver::{InfoDisplay, Section};
pub use errors::DriverError;
pub use session::Session;
pub use simulated::SimulatedBackend;
