//! Strategy: a family of interchangeable algorithms selected at runtime.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Movable {
    fn name(&self) -> &'static str;
    fn travel(&self, model: &str, out: &mut Transcript);
}

pub struct PetrolMove;

impl Movable for PetrolMove {
    fn name(&self) -> &'static str {
        "petrol"
    }

    fn travel(&self, model: &str, out: &mut Transcript) {
        out.line(format!("{model} is moving on petrol"));
    }
}

pub struct ElectricMove;

impl Movable for ElectricMove {
    fn name(&self) -> &'static str {
        "electric"
    }

    fn travel(&self, model: &str, out: &mut Transcript) {
        out.line(format!("{model} is moving on electricity"));
    }
}

/// Context holding exactly one movement strategy.
pub struct Car {
    passengers: u32,
    model: String,
    strategy: Box<dyn Movable>,
}

impl Car {
    pub fn new(passengers: u32, model: impl Into<String>, strategy: Box<dyn Movable>) -> Self {
        Self {
            passengers,
            model: model.into(),
            strategy,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Movable>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn drive(&self, out: &mut Transcript) {
        self.strategy.travel(&self.model, out);
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut auto = Car::new(4, "Volvo", Box::new(PetrolMove));
    auto.drive(out);
    auto.set_strategy(Box::new(ElectricMove));
    auto.drive(out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_switch_takes_effect_immediately() {
        let mut out = Transcript::new();
        let mut car = Car::new(4, "Volvo", Box::new(PetrolMove));
        assert_eq!(car.strategy_name(), "petrol");
        car.drive(&mut out);

        car.set_strategy(Box::new(ElectricMove));
        assert_eq!(car.strategy_name(), "electric");
        car.drive(&mut out);

        assert_eq!(
            out.lines(),
            ["Volvo is moving on petrol", "Volvo is moving on electricity"]
        );
        assert_eq!(car.passengers(), 4);
    }
}
