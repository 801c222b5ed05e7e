//! Observer: a stock exchange publishes rates to every registered
//! participant.
//!
//! Observers are addressed by an [`ObserverId`] minted at construction.
//! Two observers built with the same name still get different ids, so
//! removal is always by identity.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockInfo {
    pub usd: u32,
    pub euro: u32,
}

/// What an observer wants after seeing an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Keep,
    Cancel,
}

pub trait Observer {
    fn id(&self) -> ObserverId;
    fn update(&mut self, info: &StockInfo, out: &mut Transcript) -> Subscription;
}

pub struct Bank {
    id: ObserverId,
    name: String,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObserverId::new(),
            name: name.into(),
        }
    }
}

impl Observer for Bank {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&mut self, info: &StockInfo, out: &mut Transcript) -> Subscription {
        if info.euro > 40 {
            out.line(format!("Bank {} sells euros; rate: {}", self.name, info.euro));
        } else {
            out.line(format!("Bank {} buys euros; rate: {}", self.name, info.euro));
        }
        Subscription::Keep
    }
}

/// Trades dollars until the rate climbs past its exit threshold, then leaves
/// the market.
pub struct Broker {
    id: ObserverId,
    name: String,
    exit_above: Option<u32>,
}

impl Broker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObserverId::new(),
            name: name.into(),
            exit_above: None,
        }
    }

    pub fn with_exit_above(mut self, usd: u32) -> Self {
        self.exit_above = Some(usd);
        self
    }
}

impl Observer for Broker {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&mut self, info: &StockInfo, out: &mut Transcript) -> Subscription {
        if let Some(limit) = self.exit_above {
            if info.usd > limit {
                out.line(format!("Broker {} stops trading", self.name));
                return Subscription::Cancel;
            }
        }
        if info.usd > 30 {
            out.line(format!("Broker {} sells dollars; rate: {}", self.name, info.usd));
        } else {
            out.line(format!("Broker {} buys dollars; rate: {}", self.name, info.usd));
        }
        Subscription::Keep
    }
}

// Publisher
pub struct Stock {
    info: StockInfo,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

impl Stock {
    pub fn new() -> Self {
        Self {
            info: StockInfo { usd: 0, euro: 0 },
            observers: Vec::new(),
        }
    }

    pub fn info(&self) -> StockInfo {
        self.info
    }

    pub fn register(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = observer.id();
        self.observers.push(observer);
        id
    }

    /// Returns `false` if no observer with this id was registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Delivers the current rates in registration order. Observers that
    /// cancel are dropped after their update; the rest are still visited.
    pub fn notify_all(&mut self, out: &mut Transcript) {
        let info = self.info;
        self.observers.retain_mut(|observer| {
            let keep = observer.update(&info, out) == Subscription::Keep;
            if !keep {
                tracing::debug!(observer = %observer.id(), "observer unsubscribed during notify");
            }
            keep
        });
    }

    pub fn set_rates(&mut self, usd: u32, euro: u32, out: &mut Transcript) {
        self.info = StockInfo { usd, euro };
        self.notify_all(out);
    }

    /// Simulates one trading session with random rates.
    pub fn market(&mut self, rng: &mut impl Rng, out: &mut Transcript) {
        let usd = rng.gen_range(20..40);
        let euro = rng.gen_range(30..50);
        self.set_rates(usd, euro, out);
    }
}

const MARKET_SEED: u64 = 0x5eed;

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(MARKET_SEED);
    let mut stock = Stock::new();
    let bank = stock.register(Box::new(Bank::new("UnitBank")));
    stock.register(Box::new(Broker::new("Ivan Ivanovich")));
    stock.register(Box::new(Broker::new("Cautious Carl").with_exit_above(35)));

    stock.market(&mut rng, out);
    stock.set_rates(36, 45, out);

    stock.remove(bank);
    stock.market(&mut rng, out);
    out.line(format!("Participants left on the exchange: {}", stock.observer_count()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_identity_then_notify() {
        let mut out = Transcript::new();
        let mut stock = Stock::new();
        let first = stock.register(Box::new(Bank::new("First")));
        stock.register(Box::new(Bank::new("Second")));

        assert!(stock.remove(first));
        stock.set_rates(25, 45, &mut out);

        assert_eq!(out.lines(), ["Bank Second sells euros; rate: 45"]);
    }

    #[test]
    fn test_same_name_observers_are_distinct() {
        let a = Bank::new("Twin");
        let b = Bank::new("Twin");
        assert_ne!(a.id(), b.id());

        let mut stock = Stock::new();
        stock.register(Box::new(a));
        assert!(!stock.remove(b.id()));
        assert_eq!(stock.observer_count(), 1);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let mut out = Transcript::new();
        let mut stock = Stock::new();
        stock.register(Box::new(Broker::new("A")));
        stock.register(Box::new(Bank::new("B")));
        stock.register(Box::new(Broker::new("C")));

        stock.set_rates(20, 30, &mut out);

        assert_eq!(
            out.lines(),
            [
                "Broker A buys dollars; rate: 20",
                "Bank B buys euros; rate: 30",
                "Broker C buys dollars; rate: 20",
            ]
        );
    }

    #[test]
    fn test_cancel_during_notify_skips_nobody() {
        let mut out = Transcript::new();
        let mut stock = Stock::new();
        stock.register(Box::new(Broker::new("Leaver").with_exit_above(30)));
        stock.register(Box::new(Bank::new("Stayer")));

        stock.set_rates(35, 45, &mut out);
        assert_eq!(
            out.lines(),
            ["Broker Leaver stops trading", "Bank Stayer sells euros; rate: 45"]
        );
        assert_eq!(stock.observer_count(), 1);

        stock.set_rates(35, 45, &mut out);
        assert_eq!(out.last(), Some("Bank Stayer sells euros; rate: 45"));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_market_is_reproducible_for_a_seed() {
        let mut first = Transcript::new();
        let mut second = Transcript::new();
        for out in [&mut first, &mut second] {
            let mut rng = StdRng::seed_from_u64(7);
            let mut stock = Stock::new();
            stock.register(Box::new(Bank::new("B")));
            stock.market(&mut rng, out);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario() {
        let mut out = Transcript::new();
        scenario(&mut out).unwrap();
        assert!(out.contains("Broker Cautious Carl stops trading"));
        assert_eq!(out.last(), Some("Participants left on the exchange: 1"));
    }
}
