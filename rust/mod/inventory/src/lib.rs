//! Inventory module: purchase orders, goods received notes and stock
//! movements. One independent manager and sample dataset per page.

pub mod grn;
pub mod purchase_order;
pub mod stock_movement;

pub use grn::{Grn, GrnStatus};
pub use purchase_order::{PurchaseOrder, PurchaseOrderStatus};
pub use stock_movement::{Direction, MovementStatus, StockMovement};
