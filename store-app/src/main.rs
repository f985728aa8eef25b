use std::rc::Rc;

use common::report::Console;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use store::pricing::Random;

use crate::config::app::AppConfig;

mod config;
mod error;
mod scenario;

fn main() -> anyhow::Result<()> {
    config::log::init()?;

    let app_config = AppConfig::new()?;
    debug!("Running with configuration: {:?}", app_config);

    let mut rng = match app_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = scenario::run(&app_config, Rc::new(Console), &mut Random::new(&mut rng))?;
    info!(
        "Store closed with {} customer(s) subscribed",
        store.subscriber_count()
    );
    Ok(())
}
