pub mod aggregate;

pub use aggregate::{Service, ServiceForm};
