pub mod aggregate;

pub use aggregate::{Addon, AddonForm};
