//! Command: a request wrapped in an object so it can be executed, queued
//! and undone without the invoker knowing the receiver.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Command {
    fn execute(&mut self, out: &mut Transcript);
    /// Reverts the last `execute`. A command that was never executed does
    /// nothing.
    fn undo(&mut self, out: &mut Transcript);
}

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Microwave;

impl Microwave {
    pub fn start_cooking(&self, out: &mut Transcript) {
        out.line("Heating the food");
    }

    pub fn stop_cooking(&self, out: &mut Transcript) {
        out.line("The food is ready!");
    }

    pub fn cancel_cooking(&self, out: &mut Transcript) {
        out.line("Heating cancelled!");
    }
}

// ============================================================================
// Concrete command
// ============================================================================

pub struct MicrowaveCommand {
    microwave: Microwave,
    executed: bool,
}

impl MicrowaveCommand {
    pub fn new(microwave: Microwave) -> Self {
        Self {
            microwave,
            executed: false,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }
}

impl Command for MicrowaveCommand {
    fn execute(&mut self, out: &mut Transcript) {
        self.microwave.start_cooking(out);
        self.microwave.stop_cooking(out);
        self.executed = true;
    }

    fn undo(&mut self, out: &mut Transcript) {
        if !self.executed {
            return;
        }
        self.microwave.cancel_cooking(out);
        self.executed = false;
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Remote control that runs commands and keeps them around for undo.
#[derive(Default)]
pub struct Pult {
    history: Vec<Box<dyn Command>>,
}

impl Pult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_button(&mut self, mut command: Box<dyn Command>, out: &mut Transcript) {
        command.execute(out);
        self.history.push(command);
    }

    /// Returns `false` when there is nothing left to undo.
    pub fn press_undo(&mut self, out: &mut Transcript) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo(out);
                true
            }
            None => false,
        }
    }

    pub fn pending_undo(&self) -> usize {
        self.history.len()
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let microwave = Microwave;
    let mut command = MicrowaveCommand::new(microwave);
    command.execute(out);
    command.undo(out);

    let mut pult = Pult::new();
    pult.press_button(Box::new(MicrowaveCommand::new(microwave)), out);
    pult.press_undo(out);
    Ok(())
}
