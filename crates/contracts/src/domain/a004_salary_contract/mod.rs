pub mod aggregate;

pub use aggregate::{SalaryContract, SalaryContractForm};
