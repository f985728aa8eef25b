use std::rc::Rc;

use common::{report::Report, subject_observer::Observer};

use crate::{StoreEvent, StoreView};

use super::{react, Customer, Reaction};

pub const DEFAULT_STUDENT_BUDGET: u32 = 40;

/// Buys whatever fits in the budget.
pub struct Student {
    budget: u32,
    report: Rc<dyn Report>,
}

impl Student {
    pub fn new(report: Rc<dyn Report>) -> Self {
        Self::with_budget(DEFAULT_STUDENT_BUDGET, report)
    }

    pub fn with_budget(budget: u32, report: Rc<dyn Report>) -> Self {
        Student { budget, report }
    }
}

impl Customer for Student {
    fn name(&self) -> &'static str {
        "student"
    }

    fn decide(&self, cost: u32) -> Reaction {
        if cost <= self.budget {
            Reaction::Purchased
        } else {
            Reaction::Declined
        }
    }

    fn describe(&self, reaction: Reaction, cost: u32) -> String {
        match reaction {
            Reaction::Purchased => format!("The student bought the new {cost}€ product"),
            Reaction::Declined => {
                format!("The student wasn't able to afford the new {cost}€ product")
            }
        }
    }
}

impl Observer<dyn StoreView, StoreEvent> for Student {
    fn update(&self, source: &dyn StoreView, event: StoreEvent) {
        react(self, self.report.as_ref(), source, event);
    }
}
