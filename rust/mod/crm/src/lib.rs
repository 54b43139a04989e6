//! CRM and books module: customers, tickets, ledger accounts and
//! projects. One independent manager and sample dataset per page.

pub mod account;
pub mod customer;
pub mod project;
pub mod ticket;

pub use account::{Account, AccountStatus, AccountType};
pub use customer::{Customer, CustomerStatus};
pub use project::{Project, ProjectStatus};
pub use ticket::{Priority, Ticket, TicketStatus};
