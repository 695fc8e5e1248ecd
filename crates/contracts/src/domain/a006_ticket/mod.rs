pub mod aggregate;

pub use aggregate::{Ticket, TicketForm};
