use std::rc::Rc;

use common::subject_observer::Observer;

pub mod customers;
pub mod pricing;
mod store;

pub use store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    NewProduct,
}

/// What subscribers are allowed to see of the store while being notified.
pub trait StoreView {
    fn latest_product_cost(&self) -> u32;
}

pub type SharedCustomer = Rc<dyn Observer<dyn StoreView, StoreEvent>>;
