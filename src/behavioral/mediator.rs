//! Mediator: colleagues talk through one manager instead of to each other.

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Programmer,
    Tester,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Customer => "customer",
            Role::Programmer => "programmer",
            Role::Tester => "tester",
        };
        f.write_str(name)
    }
}

/// Fixed routing table: a new order goes to the programmer, finished code
/// goes to the tester, a tested product goes back to the customer.
pub fn recipient_for(sender: Role) -> Role {
    match sender {
        Role::Customer => Role::Programmer,
        Role::Programmer => Role::Tester,
        Role::Tester => Role::Customer,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered(Role),
    NoRecipient(Role),
}

pub trait Colleague {
    fn role(&self) -> Role;
    fn notify(&self, message: &str, out: &mut Transcript);

    fn send(&self, mediator: &dyn Mediator, message: &str, out: &mut Transcript) -> Delivery {
        mediator.send(message, self.role(), out)
    }
}

pub trait Mediator {
    fn send(&self, message: &str, from: Role, out: &mut Transcript) -> Delivery;
}

pub struct CustomerColleague;

impl Colleague for CustomerColleague {
    fn role(&self) -> Role {
        Role::Customer
    }

    fn notify(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Message to the customer: {message}"));
    }
}

pub struct ProgrammerColleague;

impl Colleague for ProgrammerColleague {
    fn role(&self) -> Role {
        Role::Programmer
    }

    fn notify(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Message to the programmer: {message}"));
    }
}

pub struct TesterColleague;

impl Colleague for TesterColleague {
    fn role(&self) -> Role {
        Role::Tester
    }

    fn notify(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Message to the tester: {message}"));
    }
}

#[derive(Default)]
pub struct ManagerMediator {
    customer: Option<Box<dyn Colleague>>,
    programmer: Option<Box<dyn Colleague>>,
    tester: Option<Box<dyn Colleague>>,
}

impl ManagerMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats the colleague in the slot for its role, replacing any previous
    /// occupant.
    pub fn register(&mut self, colleague: Box<dyn Colleague>) {
        let slot = match colleague.role() {
            Role::Customer => &mut self.customer,
            Role::Programmer => &mut self.programmer,
            Role::Tester => &mut self.tester,
        };
        *slot = Some(colleague);
    }

    fn seat(&self, role: Role) -> Option<&dyn Colleague> {
        match role {
            Role::Customer => self.customer.as_deref(),
            Role::Programmer => self.programmer.as_deref(),
            Role::Tester => self.tester.as_deref(),
        }
    }
}

impl Mediator for ManagerMediator {
    fn send(&self, message: &str, from: Role, out: &mut Transcript) -> Delivery {
        let to = recipient_for(from);
        match self.seat(to) {
            Some(colleague) => {
                colleague.notify(message, out);
                Delivery::Delivered(to)
            }
            None => {
                tracing::debug!(%from, %to, "mediator has no recipient seated");
                Delivery::NoRecipient(to)
            }
        }
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut mediator = ManagerMediator::new();
    mediator.register(Box::new(CustomerColleague));
    mediator.register(Box::new(ProgrammerColleague));
    mediator.register(Box::new(TesterColleague));

    CustomerColleague.send(&mediator, "We have an order, the program must be written", out);
    ProgrammerColleague.send(&mediator, "The program is ready, it needs testing", out);
    TesterColleague.send(&mediator, "The program is tested and ready for sale", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staffed() -> ManagerMediator {
        let mut mediator = ManagerMediator::new();
        mediator.register(Box::new(CustomerColleague));
        mediator.register(Box::new(ProgrammerColleague));
        mediator.register(Box::new(TesterColleague));
        mediator
    }

    #[test]
    fn test_routing_table() {
        assert_eq!(recipient_for(Role::Customer), Role::Programmer);
        assert_eq!(recipient_for(Role::Programmer), Role::Tester);
        assert_eq!(recipient_for(Role::Tester), Role::Customer);
    }

    #[test]
    fn test_send_reaches_exactly_one_colleague() {
        let mediator = staffed();
        let mut out = Transcript::new();

        let delivery = CustomerColleague.send(&mediator, "order", &mut out);

        assert_eq!(delivery, Delivery::Delivered(Role::Programmer));
        assert_eq!(out.lines(), ["Message to the programmer: order"]);
    }

    #[test]
    fn test_missing_recipient() {
        let mut mediator = ManagerMediator::new();
        mediator.register(Box::new(CustomerColleague));
        let mut out = Transcript::new();

        let delivery = mediator.send("done", Role::Programmer, &mut out);

        assert_eq!(delivery, Delivery::NoRecipient(Role::Tester));
        assert!(out.is_empty());
    }

    #[test]
    fn test_scenario_round_trip() {
        let mut out = Transcript::new();
        scenario(&mut out).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.lines()[0].starts_with("Message to the programmer"));
        assert!(out.lines()[1].starts_with("Message to the tester"));
        assert!(out.lines()[2].starts_with("Message to the customer"));
    }
}
