use std::rc::Rc;

use common::report::Report;
use log::debug;
use store::{
    customers::{Businessman, Student},
    pricing::PriceSource,
    SharedCustomer, Store,
};

use crate::{config::app::AppConfig, error::AppError};

/// Subscribes a businessman and a student, delivers products, then lets the
/// student go and delivers again.
pub fn run(
    config: &AppConfig,
    report: Rc<dyn Report>,
    prices: &mut impl PriceSource,
) -> Result<Store, AppError> {
    let mut store = Store::with_price_range(config.price_range()?, report.clone());

    let businessman: SharedCustomer = Rc::new(Businessman::with_min_price(
        config.businessman_min_price,
        report.clone(),
    ));
    store.subscribe(businessman);

    let student: SharedCustomer = Rc::new(Student::with_budget(config.student_budget, report));
    store.subscribe(student.clone());

    for _ in 0..config.deliveries_before_unsubscribe {
        store.add_new_product(prices);
    }

    store.unsubscribe(&student);

    for _ in 0..config.deliveries_after_unsubscribe {
        store.add_new_product(prices);
    }

    debug!(
        "Scenario done with {} customer(s) still subscribed",
        store.subscriber_count()
    );
    Ok(store)
}
