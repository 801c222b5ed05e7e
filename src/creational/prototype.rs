//! Prototype: new objects are copied from a configured original.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

/// Produces a copy that shares nothing mutable with `self`.
pub trait Prototype: Clone {
    fn clone_prototype(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub name: String,
    pub wingspan: f64,
    pub equipment: Vec<String>,
}

impl Plane {
    pub fn new(name: impl Into<String>, wingspan: f64) -> Self {
        Self {
            name: name.into(),
            wingspan,
            equipment: Vec::new(),
        }
    }

    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Clones the prototype and appends `suffix` to the model name.
    pub fn variant(&self, suffix: &str) -> Self {
        let mut plane = self.clone_prototype();
        plane.name.push_str(suffix);
        plane
    }
}

impl Prototype for Plane {}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(name: {}, wingspan: {:.1}", self.name, self.wingspan)?;
        if !self.equipment.is_empty() {
            write!(f, ", equipment: [{}]", self.equipment.join(", "))?;
        }
        write!(f, ")")
    }
}

/// Registry of ready-made prototypes keyed by model.
#[derive(Debug, Default)]
pub struct Hangar {
    prototypes: HashMap<String, Plane>,
}

impl Hangar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, plane: Plane) {
        self.prototypes.insert(plane.name.clone(), plane);
    }

    pub fn spawn(&self, model: &str) -> Option<Plane> {
        self.prototypes.get(model).map(Prototype::clone_prototype)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let il96 = Plane::new("IL-96", 60.0).with_equipment("weather radar");

    for suffix in ["-400", "-300", "MD"] {
        out.line(il96.variant(suffix).to_string());
    }
    out.line(format!("Prototype untouched: {il96}"));
    Ok(())
}
