use std::rc::Rc;

use common::{
    report::Report,
    subject_observer::{Observers, SharedObserver, Subject},
};
use log::{debug, trace};

use crate::{
    pricing::{PriceRange, PriceSource},
    SharedCustomer, StoreEvent, StoreView,
};

/// Publisher of new products.
///
/// Every outcome, including the ones that leave the store untouched, is narrated
/// through the [`Report`] the store was built with.
pub struct Store {
    customers: Observers<dyn StoreView, StoreEvent>,
    latest_product_cost: u32,
    price_range: PriceRange,
    report: Rc<dyn Report>,
}

impl Store {
    pub fn new(report: Rc<dyn Report>) -> Self {
        Self::with_price_range(PriceRange::default(), report)
    }

    pub fn with_price_range(price_range: PriceRange, report: Rc<dyn Report>) -> Self {
        Store {
            customers: Observers::new(),
            latest_product_cost: 0,
            price_range,
            report,
        }
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn subscriber_count(&self) -> usize {
        self.customers.len()
    }

    pub fn is_subscribed(&self, customer: &SharedCustomer) -> bool {
        self.customers.contains(customer)
    }

    pub fn subscribe(&mut self, customer: SharedCustomer) {
        if self.customers.insert(customer) {
            debug!("Customer subscribed, {} now subscribed", self.customers.len());
            self.report
                .line("Store: Customer succesfully added to subscriber list.");
        } else {
            self.report
                .line("Store: Customer is already on the subscriber list.");
        }
    }

    pub fn unsubscribe(&mut self, customer: &SharedCustomer) {
        if self.customers.remove(customer) {
            debug!(
                "Customer unsubscribed, {} still subscribed",
                self.customers.len()
            );
            self.report.line("Store: removed customer from subscriber list.");
        } else {
            self.report
                .line("Store: Customer is not a part of the subscriber list.");
        }
    }

    pub fn notify_new_product(&self) {
        self.report.line("Store: Notifying subscribed customers...");
        trace!(
            "Notifying {} customer(s) of a product at {}",
            self.customers.len(),
            self.latest_product_cost
        );
        self.customers.notify(self, StoreEvent::NewProduct);
    }

    pub fn add_new_product(&mut self, prices: &mut impl PriceSource) {
        self.report.line("");
        self.report.line("New product delivery incoming");
        self.latest_product_cost = prices.next_price(&self.price_range);
        debug!("New product priced at {}", self.latest_product_cost);
        self.report.line(&format!(
            "Store: NEW PRODUCT AVAILABLE, cost of new product is {}",
            self.latest_product_cost
        ));
        self.notify_new_product();
    }
}

impl StoreView for Store {
    fn latest_product_cost(&self) -> u32 {
        self.latest_product_cost
    }
}

impl Subject<dyn StoreView, StoreEvent> for Store {
    fn register_observer(&mut self, observer: SharedObserver<dyn StoreView, StoreEvent>) {
        self.subscribe(observer);
    }

    fn unregister_observer(&mut self, observer: &SharedObserver<dyn StoreView, StoreEvent>) {
        self.unsubscribe(observer);
    }

    fn notify_observers(&self, event: StoreEvent) {
        match event {
            StoreEvent::NewProduct => self.notify_new_product(),
        }
    }
}
