//! Chain of Responsibility: a payment request walks a chain of handlers
//! until one accepts it.

use crate::error::Result;
use crate::transcript::Transcript;

/// Which transfer methods the payee accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Receiver {
    pub bank_transfer: bool,
    pub money_transfer: bool,
    pub paypal_transfer: bool,
}

impl Receiver {
    pub fn new(bank_transfer: bool, money_transfer: bool, paypal_transfer: bool) -> Self {
        Self {
            bank_transfer,
            money_transfer,
            paypal_transfer,
        }
    }
}

pub trait PaymentHandler {
    fn name(&self) -> &'static str;
    fn can_handle(&self, receiver: &Receiver) -> bool;
    fn process(&self, receiver: &Receiver, out: &mut Transcript);
}

pub struct BankPaymentHandler;

impl PaymentHandler for BankPaymentHandler {
    fn name(&self) -> &'static str {
        "bank"
    }

    fn can_handle(&self, receiver: &Receiver) -> bool {
        receiver.bank_transfer
    }

    fn process(&self, _receiver: &Receiver, out: &mut Transcript) {
        out.line("Making a bank transfer");
    }
}

pub struct PayPalPaymentHandler;

impl PaymentHandler for PayPalPaymentHandler {
    fn name(&self) -> &'static str {
        "paypal"
    }

    fn can_handle(&self, receiver: &Receiver) -> bool {
        receiver.paypal_transfer
    }

    fn process(&self, _receiver: &Receiver, out: &mut Transcript) {
        out.line("Making a transfer via PayPal");
    }
}

pub struct MoneyPaymentHandler;

impl PaymentHandler for MoneyPaymentHandler {
    fn name(&self) -> &'static str {
        "money"
    }

    fn can_handle(&self, receiver: &Receiver) -> bool {
        receiver.money_transfer
    }

    fn process(&self, _receiver: &Receiver, out: &mut Transcript) {
        out.line("Making a transfer through a money transfer system");
    }
}

/// One link of the chain: a handler and its optional successor.
pub struct PaymentChain {
    handler: Box<dyn PaymentHandler>,
    successor: Option<Box<PaymentChain>>,
}

impl PaymentChain {
    pub fn new(handler: Box<dyn PaymentHandler>) -> Self {
        Self {
            handler,
            successor: None,
        }
    }

    /// Appends `handler` at the tail of the chain.
    pub fn then(mut self, handler: Box<dyn PaymentHandler>) -> Self {
        let mut tail = &mut self.successor;
        while let Some(link) = tail {
            tail = &mut link.successor;
        }
        *tail = Some(Box::new(PaymentChain::new(handler)));
        self
    }

    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut link = self.successor.as_deref();
        while let Some(next) = link {
            count += 1;
            link = next.successor.as_deref();
        }
        count
    }

    /// Returns the name of the handler that took the request, or `None` if
    /// it fell off the end of the chain.
    pub fn handle(&self, receiver: &Receiver, out: &mut Transcript) -> Option<&'static str> {
        let mut link = Some(self);
        while let Some(current) = link {
            if current.handler.can_handle(receiver) {
                current.handler.process(receiver, out);
                return Some(current.handler.name());
            }
            link = current.successor.as_deref();
        }
        tracing::debug!(?receiver, "payment request dropped by every handler");
        None
    }
}

pub fn default_chain() -> PaymentChain {
    PaymentChain::new(Box::new(BankPaymentHandler))
        .then(Box::new(PayPalPaymentHandler))
        .then(Box::new(MoneyPaymentHandler))
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let chain = default_chain();
    chain.handle(&Receiver::new(false, true, true), out);
    chain.handle(&Receiver::new(false, true, false), out);
    chain.handle(&Receiver::new(false, false, false), out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let mut out = Transcript::new();
        let handled = default_chain().handle(&Receiver::new(true, true, true), &mut out);
        assert_eq!(handled, Some("bank"));
        assert_eq!(out.lines(), ["Making a bank transfer"]);
    }

    #[test]
    fn test_forwards_to_successor() {
        let mut out = Transcript::new();
        let handled = default_chain().handle(&Receiver::new(false, true, true), &mut out);
        assert_eq!(handled, Some("paypal"));

        let handled = default_chain().handle(&Receiver::new(false, true, false), &mut out);
        assert_eq!(handled, Some("money"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_unmatched_request_is_dropped_silently() {
        let mut out = Transcript::new();
        let chain = default_chain();
        assert_eq!(chain.len(), 3);

        let handled = chain.handle(&Receiver::default(), &mut out);

        assert_eq!(handled, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_link_without_successor() {
        let mut out = Transcript::new();
        let chain = PaymentChain::new(Box::new(MoneyPaymentHandler));
        assert_eq!(chain.handle(&Receiver::new(true, false, false), &mut out), None);
        assert!(out.is_empty());
    }
}
