//! State: water changes behaviour depending on its phase.
//!
//! The phase is a plain enum and [`transition`] is a pure table, so no
//! state object is allocated per step.

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterState {
    Solid,
    Liquid,
    Gas,
}

impl fmt::Display for WaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaterState::Solid => "ice",
            WaterState::Liquid => "liquid",
            WaterState::Gas => "steam",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    Heat,
    Frost,
}

pub fn transition(state: WaterState, event: Temperature) -> WaterState {
    use Temperature::*;
    use WaterState::*;

    match (state, event) {
        (Solid, Heat) => Liquid,
        (Solid, Frost) => Solid,
        (Liquid, Heat) => Gas,
        (Liquid, Frost) => Solid,
        (Gas, Heat) => Gas,
        (Gas, Frost) => Liquid,
    }
}

fn describe(state: WaterState, event: Temperature) -> &'static str {
    use Temperature::*;
    use WaterState::*;

    match (state, event) {
        (Solid, Heat) => "Turning ice into liquid",
        (Solid, Frost) => "Freezing the ice further",
        (Liquid, Heat) => "Turning liquid into steam",
        (Liquid, Frost) => "Turning liquid into ice",
        (Gas, Heat) => "Raising the temperature of the steam",
        (Gas, Frost) => "Turning steam into liquid",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Water {
    state: WaterState,
}

impl Water {
    pub fn new(state: WaterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> WaterState {
        self.state
    }

    pub fn apply(&mut self, event: Temperature, out: &mut Transcript) -> WaterState {
        out.line(describe(self.state, event));
        self.state = transition(self.state, event);
        self.state
    }

    pub fn heat(&mut self, out: &mut Transcript) -> WaterState {
        self.apply(Temperature::Heat, out)
    }

    pub fn frost(&mut self, out: &mut Transcript) -> WaterState {
        self.apply(Temperature::Frost, out)
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut water = Water::new(WaterState::Liquid);
    water.heat(out);
    water.heat(out);
    water.frost(out);
    water.frost(out);
    water.heat(out);
    out.line(format!("The water is now {}", water.state()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Temperature::*;
    use WaterState::*;

    #[test]
    fn test_heat_heat_frost_frost_heat_from_liquid() {
        let mut out = Transcript::new();
        let mut water = Water::new(Liquid);

        let states: Vec<WaterState> = [Heat, Heat, Frost, Frost, Heat]
            .into_iter()
            .map(|event| water.apply(event, &mut out))
            .collect();

        assert_eq!(states, [Gas, Gas, Liquid, Solid, Liquid]);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_scenario() {
        let mut out = Transcript::new();
        scenario(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Turning liquid into steam",
                "Raising the temperature of the steam",
                "Turning steam into liquid",
                "Turning liquid into ice",
                "Turning ice into liquid",
                "The water is now liquid",
            ]
        );
    }

    #[test]
    fn test_terminal_states_loop() {
        assert_eq!(transition(Solid, Frost), Solid);
        assert_eq!(transition(Gas, Heat), Gas);
    }

    #[test]
    fn test_messages_follow_current_state() {
        let mut out = Transcript::new();
        let mut water = Water::new(Solid);
        water.frost(&mut out);
        water.heat(&mut out);
        assert_eq!(
            out.lines(),
            ["Freezing the ice further", "Turning ice into liquid"]
        );
    }
}
