/// Device registry and selector resolution.
pub mod devices;
pub mod errors;
pub mod resolve;

pub use devices::Registry;
pub use errors::TdcError;
pub use resolve::{Selection, resolve};
