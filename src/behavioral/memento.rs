//! Memento: save and restore an object's state without exposing it.

use std::fmt;

use crate::error::{CatalogError, Result};
use crate::transcript::Transcript;

/// Frozen snapshot of a [`Hero`]. Only the hero can look inside.
#[derive(Clone, PartialEq, Eq)]
pub struct HeroMemento {
    patrons: u32,
    lives: u32,
}

impl fmt::Debug for HeroMemento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroMemento").finish_non_exhaustive()
    }
}

// Originator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    patrons: u32,
    lives: u32,
}

impl Default for Hero {
    fn default() -> Self {
        Self::new(10, 5)
    }
}

impl Hero {
    pub fn new(patrons: u32, lives: u32) -> Self {
        Self { patrons, lives }
    }

    pub fn patrons(&self) -> u32 {
        self.patrons
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn shoot(&mut self, out: &mut Transcript) {
        if self.patrons > 0 {
            self.patrons -= 1;
            out.line(format!("Shot fired. {} rounds left", self.patrons));
        } else {
            out.line("Out of ammo");
        }
    }

    pub fn take_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn save_state(&self, out: &mut Transcript) -> HeroMemento {
        out.line(format!(
            "Saving the game. State: {} rounds, {} lives",
            self.patrons, self.lives
        ));
        HeroMemento {
            patrons: self.patrons,
            lives: self.lives,
        }
    }

    /// Overwrites the whole state from `memento`. A missing snapshot is a
    /// caller error.
    pub fn restore_state(
        &mut self,
        memento: Option<&HeroMemento>,
        out: &mut Transcript,
    ) -> Result<()> {
        let memento = memento.ok_or_else(|| {
            CatalogError::invalid_argument("Hero::restore_state", "no snapshot to restore from")
        })?;
        self.patrons = memento.patrons;
        self.lives = memento.lives;
        out.line(format!(
            "Restoring the game. State: {} rounds, {} lives",
            self.patrons, self.lives
        ));
        Ok(())
    }
}

// Caretaker
#[derive(Debug, Default)]
pub struct GameHistory {
    history: Vec<HeroMemento>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, memento: HeroMemento) {
        self.history.push(memento);
    }

    pub fn last(&self) -> Option<&HeroMemento> {
        self.history.last()
    }

    pub fn pop(&mut self) -> Option<HeroMemento> {
        self.history.pop()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut hero = Hero::default();
    hero.shoot(out);

    let mut game = GameHistory::new();
    game.push(hero.save_state(out));

    hero.shoot(out);
    hero.restore_state(game.last(), out)?;
    hero.shoot(out);
    Ok(())
}
