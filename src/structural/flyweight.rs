//! Flyweight: a housing estate reuses one object per house type and passes
//! the coordinates in from outside.

use std::str::FromStr;
use std::sync::Arc;

use dashmap::DashMap;
use lazy_static::lazy_static;
use strum::{Display, EnumString};

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HouseKind {
    Panel,
    Brick,
}

/// Intrinsic state lives in the flyweight; the location is extrinsic.
pub trait House: Send + Sync {
    fn kind(&self) -> HouseKind;
    fn stages(&self) -> u32;
    fn build(&self, latitude: f64, longitude: f64, out: &mut Transcript);
}

pub struct PanelHouse {
    stages: u32,
}

impl PanelHouse {
    pub fn new() -> Self {
        Self { stages: 16 }
    }
}

impl Default for PanelHouse {
    fn default() -> Self {
        Self::new()
    }
}

impl House for PanelHouse {
    fn kind(&self) -> HouseKind {
        HouseKind::Panel
    }

    fn stages(&self) -> u32 {
        self.stages
    }

    fn build(&self, latitude: f64, longitude: f64, out: &mut Transcript) {
        out.line(format!(
            "Built a {}-storey panel house; coordinates: {latitude:.2} lat, {longitude:.2} long",
            self.stages
        ));
    }
}

pub struct BrickHouse {
    stages: u32,
}

impl BrickHouse {
    pub fn new() -> Self {
        Self { stages: 5 }
    }
}

impl Default for BrickHouse {
    fn default() -> Self {
        Self::new()
    }
}

impl House for BrickHouse {
    fn kind(&self) -> HouseKind {
        HouseKind::Brick
    }

    fn stages(&self) -> u32 {
        self.stages
    }

    fn build(&self, latitude: f64, longitude: f64, out: &mut Transcript) {
        out.line(format!(
            "Built a {}-storey brick house; coordinates: {latitude:.2} lat, {longitude:.2} long",
            self.stages
        ));
    }
}

#[derive(Default)]
pub struct HouseFactory {
    pool: DashMap<HouseKind, Arc<dyn House>>,
}

lazy_static! {
    static ref SHARED_FACTORY: HouseFactory = HouseFactory::new();
}

impl HouseFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide pool, safe to hit from several threads at once.
    pub fn shared() -> &'static HouseFactory {
        &SHARED_FACTORY
    }

    /// Returns the pooled flyweight for `kind`, creating and caching it on
    /// a miss.
    pub fn house(&self, kind: HouseKind) -> Arc<dyn House> {
        let entry = self.pool.entry(kind).or_insert_with(|| {
            tracing::debug!(%kind, "flyweight pool miss");
            match kind {
                HouseKind::Panel => Arc::new(PanelHouse::new()),
                HouseKind::Brick => Arc::new(BrickHouse::new()),
            }
        });
        Arc::clone(entry.value())
    }

    /// Lookup by identifier. Unknown identifiers yield `None`.
    pub fn get(&self, key: &str) -> Option<Arc<dyn House>> {
        HouseKind::from_str(key).ok().map(|kind| self.house(kind))
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let factory = HouseFactory::new();
    let mut longitude = 37.61;
    let latitude = 55.74;

    for _ in 0..5 {
        if let Some(house) = factory.get("Panel") {
            house.build(latitude, longitude, out);
        }
        longitude += 0.1;
    }
    for _ in 0..5 {
        if let Some(house) = factory.get("Brick") {
            house.build(latitude, longitude, out);
        }
        longitude += 0.1;
    }
    out.line(format!("Distinct house objects: {}", factory.pool_size()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;

    #[test]
    fn test_same_key_returns_same_instance() {
        let factory = HouseFactory::new();
        let a = factory.get("Panel").unwrap();
        let b = factory.get("Panel").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.kind(), HouseKind::Panel);
        assert_eq!(a.stages(), 16);
        assert_eq!(factory.pool_size(), 1);
    }

    #[test]
    fn test_unknown_key() {
        let factory = HouseFactory::new();
        assert!(factory.get("Igloo").is_none());
        assert_eq!(factory.pool_size(), 0);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let factory = HouseFactory::new();
        let a = factory.get("brick").unwrap();
        let b = factory.get("BRICK").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_shared_pool_under_concurrent_access() {
        let houses: Vec<Arc<dyn House>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| HouseFactory::shared().house(HouseKind::Brick)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(houses.iter().all(|h| Arc::ptr_eq(h, &houses[0])));
    }

    #[test]
    fn test_scenario() {
        let mut out = Transcript::new();
        scenario(&mut out).unwrap();
        assert_eq!(out.len(), 11);
        assert_eq!(out.last(), Some("Distinct house objects: 2"));
    }

    proptest! {
        #[test]
        fn test_pool_size_equals_distinct_keys(
            keys in prop::collection::vec(prop_oneof![Just("Panel"), Just("Brick")], 1..40),
        ) {
            let factory = HouseFactory::new();
            for key in &keys {
                factory.get(key);
            }
            let mut distinct = keys.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(factory.pool_size(), distinct.len());
        }
    }
}
