//! Visitor: new operations over bank accounts without touching the account
//! types. `accept` picks the visit method, the visitor picks the behaviour.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait AccountVisitor {
    fn visit_person(&mut self, person: &Person);
    fn visit_company(&mut self, company: &Company);
}

pub trait Account {
    fn accept(&self, visitor: &mut dyn AccountVisitor);
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub number: String,
}

impl Account for Person {
    fn accept(&self, visitor: &mut dyn AccountVisitor) {
        visitor.visit_person(self);
    }
}

#[derive(Debug, Clone)]
pub struct Company {
    pub name: String,
    pub reg_number: String,
    pub number: String,
}

impl Account for Company {
    fn accept(&self, visitor: &mut dyn AccountVisitor) {
        visitor.visit_company(self);
    }
}

#[derive(Default)]
pub struct HtmlVisitor {
    lines: Vec<String>,
}

impl HtmlVisitor {
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl AccountVisitor for HtmlVisitor {
    fn visit_person(&mut self, person: &Person) {
        self.lines.push(format!(
            "<table><tr><td>Name</td><td>{}</td></tr><tr><td>Number</td><td>{}</td></tr></table>",
            person.name, person.number
        ));
    }

    fn visit_company(&mut self, company: &Company) {
        self.lines.push(format!(
            "<table><tr><td>Name</td><td>{}</td></tr><tr><td>Reg number</td><td>{}</td></tr><tr><td>Number</td><td>{}</td></tr></table>",
            company.name, company.reg_number, company.number
        ));
    }
}

#[derive(Default)]
pub struct XmlVisitor {
    lines: Vec<String>,
}

impl XmlVisitor {
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl AccountVisitor for XmlVisitor {
    fn visit_person(&mut self, person: &Person) {
        self.lines.push(format!(
            "<Person><Name>{}</Name><Number>{}</Number></Person>",
            person.name, person.number
        ));
    }

    fn visit_company(&mut self, company: &Company) {
        self.lines.push(format!(
            "<Company><Name>{}</Name><RegNumber>{}</RegNumber><Number>{}</Number></Company>",
            company.name, company.reg_number, company.number
        ));
    }
}

// Object structure
#[derive(Default)]
pub struct Bank {
    accounts: Vec<Box<dyn Account>>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, account: Box<dyn Account>) {
        self.accounts.push(account);
    }

    pub fn accept(&self, visitor: &mut dyn AccountVisitor) {
        for account in &self.accounts {
            account.accept(visitor);
        }
    }
}

fn sample_bank() -> Bank {
    let mut bank = Bank::new();
    bank.add(Box::new(Person {
        name: "John Smith".into(),
        number: "82184931".into(),
    }));
    bank.add(Box::new(Company {
        name: "Microsoft".into(),
        reg_number: "ewuir32141324".into(),
        number: "3424131445".into(),
    }));
    bank
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let bank = sample_bank();

    let mut html = HtmlVisitor::default();
    bank.accept(&mut html);
    out.extend(html.into_lines());

    let mut xml = XmlVisitor::default();
    bank.accept(&mut xml);
    out.extend(xml.into_lines());
    Ok(())
}
