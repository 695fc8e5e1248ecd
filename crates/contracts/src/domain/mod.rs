pub mod a001_customer;
pub mod a002_addon;
pub mod a003_service;
pub mod a004_salary_contract;
pub mod a005_deal;
pub mod a006_ticket;
pub mod common;
