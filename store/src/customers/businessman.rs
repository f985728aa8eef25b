use std::rc::Rc;

use common::{report::Report, subject_observer::Observer};

use crate::{StoreEvent, StoreView};

use super::{react, Customer, Reaction};

pub const DEFAULT_BUSINESSMAN_MIN_PRICE: u32 = 20;

/// Wealthy customer: anything cheaper than `min_price` is not worth the bother.
pub struct Businessman {
    min_price: u32,
    report: Rc<dyn Report>,
}

impl Businessman {
    pub fn new(report: Rc<dyn Report>) -> Self {
        Self::with_min_price(DEFAULT_BUSINESSMAN_MIN_PRICE, report)
    }

    pub fn with_min_price(min_price: u32, report: Rc<dyn Report>) -> Self {
        Businessman { min_price, report }
    }
}

impl Customer for Businessman {
    fn name(&self) -> &'static str {
        "businessman"
    }

    fn decide(&self, cost: u32) -> Reaction {
        if cost > self.min_price {
            Reaction::Purchased
        } else {
            Reaction::Declined
        }
    }

    fn describe(&self, reaction: Reaction, cost: u32) -> String {
        match reaction {
            Reaction::Purchased => format!("The businessman bought the new {cost}€ product"),
            Reaction::Declined => {
                format!("The businessman didn't bother buying the new {cost}€ product")
            }
        }
    }
}

impl Observer<dyn StoreView, StoreEvent> for Businessman {
    fn update(&self, source: &dyn StoreView, event: StoreEvent) {
        react(self, self.report.as_ref(), source, event);
    }
}
