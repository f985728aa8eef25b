mod businessman;
mod student;

pub use businessman::{Businessman, DEFAULT_BUSINESSMAN_MIN_PRICE};
pub use student::{Student, DEFAULT_STUDENT_BUDGET};

use common::report::Report;
use log::debug;
use strum::Display;

use crate::{StoreEvent, StoreView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Reaction {
    Purchased,
    Declined,
}

pub trait Customer {
    fn name(&self) -> &'static str;

    /// Pure decision for a product announced at `cost`.
    fn decide(&self, cost: u32) -> Reaction;

    fn describe(&self, reaction: Reaction, cost: u32) -> String;
}

pub(crate) fn react<C>(
    customer: &C,
    report: &dyn Report,
    source: &dyn StoreView,
    event: StoreEvent,
)
where
    C: Customer + ?Sized,
{
    match event {
        StoreEvent::NewProduct => {
            let cost = source.latest_product_cost();
            let reaction = customer.decide(cost);
            debug!("The {} {} a product at {}", customer.name(), reaction, cost);
            report.line(&customer.describe(reaction, cost));
        }
    }
}
