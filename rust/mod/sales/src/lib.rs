//! Sales module: sales orders, invoices and payments.
//!
//! Each page keeps its own independent manager and sample dataset, as in
//! the source application — nothing is shared between pages.

pub mod invoice;
pub mod payment;
pub mod sales_order;

pub use invoice::{Invoice, InvoiceStatus};
pub use payment::{Payment, PaymentStatus};
pub use sales_order::{OrderStatus, SalesOrder};

#[cfg(test)]
mod tests {
    use super::*;

    // Pages are independent: mutating one kind's store never shows up in
    // another kind's view.
    #[test]
    fn page_datasets_are_independent() {
        let mut orders = sales_order::manager();
        let invoices = invoice::manager();

        let orders_before = orders.store().len();
        let invoices_before = invoices.store().len();

        orders.start_delete(1).unwrap();
        orders.confirm_delete().unwrap();

        assert_eq!(orders.store().len(), orders_before - 1);
        assert_eq!(invoices.store().len(), invoices_before);
    }
}
