use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use common::report::Report;
use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|seed_var| seed_var.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    }))
}

/// Rng seeded from `DEFAULT_TEST_SEED`, or from a random seed printed on first use.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(get_seed(key)?))
}

/// [`Report`] that keeps every line so tests can assert on the narration.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Lines matching `predicate`, in the order they were reported.
    pub fn filtered<P>(&self, predicate: P) -> Vec<String>
    where
        P: Fn(&str) -> bool,
    {
        self.lines
            .borrow()
            .iter()
            .filter(|line| predicate(line))
            .cloned()
            .collect()
    }

    pub fn count(&self, text: &str) -> usize {
        self.lines.borrow().iter().filter(|line| *line == text).count()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Report for Transcript {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
