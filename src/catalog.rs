//! Pattern registry: every demonstration in the crate, its family, a one-line
//! summary and the scenario that runs it.

use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::error::{CatalogError, Result};
use crate::transcript::Transcript;
use crate::{behavioral, creational, structural};

pub type ScenarioFn = fn(&mut Transcript) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Creational,
    Structural,
    Behavioral,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    // Creational
    FactoryMethod,
    AbstractFactory,
    Prototype,
    Builder,
    Singleton,
    // Structural
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Proxy,
    Flyweight,
    // Behavioral
    Command,
    Strategy,
    Mediator,
    TemplateMethod,
    Memento,
    Observer,
    Iterator,
    State,
    Chain,
    Visitor,
}

impl Pattern {
    /// Every pattern in catalog order.
    pub fn all() -> impl Iterator<Item = Pattern> {
        Pattern::iter()
    }

    pub fn family(self) -> Family {
        use Pattern::*;
        match self {
            FactoryMethod | AbstractFactory | Prototype | Builder | Singleton => Family::Creational,
            Adapter | Bridge | Composite | Decorator | Facade | Proxy | Flyweight => {
                Family::Structural
            }
            Command | Strategy | Mediator | TemplateMethod | Memento | Observer | Iterator
            | State | Chain | Visitor => Family::Behavioral,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::FactoryMethod => "a selector enum decides which vehicle gets built",
            Pattern::AbstractFactory => "brand factories produce a car with matching spare parts",
            Pattern::Prototype => "planes are cloned from a registered original and renamed",
            Pattern::Builder => "a house is assembled step by step, incomplete builds are rejected",
            Pattern::Singleton => "one government per process, lazily created",
            Pattern::Adapter => "a camel is made to look like a car to a traveller",
            Pattern::Bridge => "programmers and the languages they work in vary independently",
            Pattern::Composite => "a shipping crate of products and nested boxes",
            Pattern::Decorator => "toppings wrap a pizza and add to its price",
            Pattern::Facade => "one IDE call drives editor, compiler and runtime",
            Pattern::Proxy => "archive access behind a passphrase and a lazy loader",
            Pattern::Flyweight => "houses of the same kind share one pooled object",
            Pattern::Command => "a remote presses microwave buttons and can undo them",
            Pattern::Strategy => "a car switches from petrol to electric propulsion",
            Pattern::Mediator => "a manager routes messages between customer and team",
            Pattern::TemplateMethod => "school and university follow one fixed curriculum",
            Pattern::Memento => "a hero's ammo and lives are saved and restored",
            Pattern::Observer => "bank and broker react to exchange rate changes",
            Pattern::Iterator => "a reader walks through a library book by book",
            Pattern::State => "water turns to ice or steam as temperature changes",
            Pattern::Chain => "a payment travels along bank, PayPal and cash handlers",
            Pattern::Visitor => "bank accounts are exported as HTML and XML",
        }
    }

    pub fn scenario(self) -> ScenarioFn {
        match self {
            Pattern::FactoryMethod => creational::factory_method::scenario,
            Pattern::AbstractFactory => creational::abstract_factory::scenario,
            Pattern::Prototype => creational::prototype::scenario,
            Pattern::Builder => creational::builder::scenario,
            Pattern::Singleton => creational::singleton::scenario,
            Pattern::Adapter => structural::adapter::scenario,
            Pattern::Bridge => structural::bridge::scenario,
            Pattern::Composite => structural::composite::scenario,
            Pattern::Decorator => structural::decorator::scenario,
            Pattern::Facade => structural::facade::scenario,
            Pattern::Proxy => structural::proxy::scenario,
            Pattern::Flyweight => structural::flyweight::scenario,
            Pattern::Command => behavioral::command::scenario,
            Pattern::Strategy => behavioral::strategy::scenario,
            Pattern::Mediator => behavioral::mediator::scenario,
            Pattern::TemplateMethod => behavioral::template_method::scenario,
            Pattern::Memento => behavioral::memento::scenario,
            Pattern::Observer => behavioral::observer::scenario,
            Pattern::Iterator => behavioral::iterator::scenario,
            Pattern::State => behavioral::state::scenario,
            Pattern::Chain => behavioral::chain::scenario,
            Pattern::Visitor => behavioral::visitor::scenario,
        }
    }
}

impl FromStr for Pattern {
    type Err = CatalogError;

    /// Case-insensitive; `_` and spaces count as `-`.
    fn from_str(name: &str) -> Result<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Pattern::iter()
            .find(|pattern| pattern.to_string() == normalized)
            .ok_or_else(|| CatalogError::unknown_pattern(name))
    }
}

/// Patterns of one family, in catalog order.
pub fn by_family(family: Family) -> Vec<Pattern> {
    Pattern::iter().filter(|p| p.family() == family).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(Pattern::COUNT, 22);
        assert_eq!(by_family(Family::Creational).len(), 5);
        assert_eq!(by_family(Family::Structural).len(), 7);
        assert_eq!(by_family(Family::Behavioral).len(), 10);
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(Pattern::TemplateMethod.to_string(), "template-method");
        assert_eq!(Pattern::AbstractFactory.to_string(), "abstract-factory");
        assert_eq!(Pattern::Chain.to_string(), "chain");
    }

    #[test]
    fn test_parse_accepts_loose_spelling() {
        assert_eq!("template-method".parse::<Pattern>().unwrap(), Pattern::TemplateMethod);
        assert_eq!("Template_Method".parse::<Pattern>().unwrap(), Pattern::TemplateMethod);
        assert_eq!("factory method".parse::<Pattern>().unwrap(), Pattern::FactoryMethod);
        assert_eq!(" OBSERVER ".parse::<Pattern>().unwrap(), Pattern::Observer);
    }

    #[test]
    fn test_parse_round_trips_every_name() {
        for pattern in Pattern::all() {
            assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "monad".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPattern { ref name } if name == "monad"));
    }

    #[test]
    fn test_summaries_are_filled_in() {
        assert!(Pattern::all().all(|p| !p.summary().is_empty()));
    }

    #[test]
    fn test_every_scenario_passes() {
        for pattern in Pattern::all() {
            let mut out = Transcript::new();
            let result = (pattern.scenario())(&mut out);
            assert!(result.is_ok(), "{pattern} failed: {result:?}");
            assert!(!out.is_empty(), "{pattern} wrote nothing");
        }
    }
}
