//! Builder: a house is assembled step by step. Skipping a step yields a
//! typed [`IncompleteHouse`] instead of a half-built house.

use thiserror::Error;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    pub walls: String,
    pub windows: String,
    pub roof: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("House is incomplete, missing: {}", .missing.join(", "))]
pub struct IncompleteHouse {
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Default, Clone)]
pub struct HouseBuilder {
    walls: Option<String>,
    windows: Option<String>,
    roof: Option<String>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walls(mut self, walls: impl Into<String>) -> Self {
        self.walls = Some(walls.into());
        self
    }

    pub fn windows(mut self, windows: impl Into<String>) -> Self {
        self.windows = Some(windows.into());
        self
    }

    /// Optional step.
    pub fn roof(mut self, roof: impl Into<String>) -> Self {
        self.roof = Some(roof.into());
        self
    }

    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.walls.is_none() {
            missing.push("walls");
        }
        if self.windows.is_none() {
            missing.push("windows");
        }
        missing
    }

    pub fn build(self) -> Result<House, IncompleteHouse> {
        let missing = self.missing();
        match (self.walls, self.windows) {
            (Some(walls), Some(windows)) => Ok(House {
                walls,
                windows,
                roof: self.roof,
            }),
            _ => Err(IncompleteHouse { missing }),
        }
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let house = HouseBuilder::new()
        .walls("Build walls")
        .windows("Build windows")
        .build();

    match house {
        Ok(house) => out.line(format!(
            "Walls: {}, windows: {}",
            house.walls, house.windows
        )),
        Err(incomplete) => out.line(incomplete.to_string()),
    }

    let draft = HouseBuilder::new().walls("Build walls");
    if let Err(incomplete) = draft.build() {
        out.line(incomplete.to_string());
    }
    Ok(())
}
