//! Decorator: toppings wrap a pizza and add to its name and cost.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Pizza {
    fn name(&self) -> String;
    fn cost(&self) -> u32;
}

pub struct ItalianPizza;

impl Pizza for ItalianPizza {
    fn name(&self) -> String {
        "Italian pizza".to_string()
    }

    fn cost(&self) -> u32 {
        10
    }
}

pub struct BulgarianPizza;

impl Pizza for BulgarianPizza {
    fn name(&self) -> String {
        "Bulgarian pizza".to_string()
    }

    fn cost(&self) -> u32 {
        8
    }
}

pub struct TomatoPizza {
    wrapped: Box<dyn Pizza>,
}

impl TomatoPizza {
    pub const INCREMENT: u32 = 3;

    pub fn new(wrapped: Box<dyn Pizza>) -> Self {
        Self { wrapped }
    }
}

impl Pizza for TomatoPizza {
    fn name(&self) -> String {
        format!("{}, with tomatoes", self.wrapped.name())
    }

    fn cost(&self) -> u32 {
        self.wrapped.cost() + Self::INCREMENT
    }
}

pub struct CheesePizza {
    wrapped: Box<dyn Pizza>,
}

impl CheesePizza {
    pub const INCREMENT: u32 = 5;

    pub fn new(wrapped: Box<dyn Pizza>) -> Self {
        Self { wrapped }
    }
}

impl Pizza for CheesePizza {
    fn name(&self) -> String {
        format!("{}, with cheese", self.wrapped.name())
    }

    fn cost(&self) -> u32 {
        self.wrapped.cost() + Self::INCREMENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    Tomato,
    Cheese,
}

impl Topping {
    pub fn increment(self) -> u32 {
        match self {
            Topping::Tomato => TomatoPizza::INCREMENT,
            Topping::Cheese => CheesePizza::INCREMENT,
        }
    }

    pub fn apply(self, pizza: Box<dyn Pizza>) -> Box<dyn Pizza> {
        match self {
            Topping::Tomato => Box::new(TomatoPizza::new(pizza)),
            Topping::Cheese => Box::new(CheesePizza::new(pizza)),
        }
    }
}

/// Wraps `base` with each topping in order, innermost first.
pub fn dress(base: Box<dyn Pizza>, toppings: &[Topping]) -> Box<dyn Pizza> {
    toppings
        .iter()
        .fold(base, |pizza, topping| topping.apply(pizza))
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let pizza1: Box<dyn Pizza> = Box::new(ItalianPizza);
    let pizza1 = Box::new(TomatoPizza::new(pizza1));
    out.line(format!("Name: {}", pizza1.name()));
    out.line(format!("Price: {}", pizza1.cost()));

    let pizza2 = Box::new(CheesePizza::new(Box::new(ItalianPizza)));
    out.line(format!("Name: {}", pizza2.name()));
    out.line(format!("Price: {}", pizza2.cost()));

    let pizza3 = dress(Box::new(BulgarianPizza), &[Topping::Tomato, Topping::Cheese]);
    out.line(format!("Name: {}", pizza3.name()));
    out.line(format!("Price: {}", pizza3.cost()));
    Ok(())
}
