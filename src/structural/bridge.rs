//! Bridge: programmers (abstraction) and languages (implementor) vary
//! independently.

use crate::error::Result;
use crate::transcript::Transcript;

/// Implementor
pub trait Language {
    fn build(&self, out: &mut Transcript);
    fn execute(&self, out: &mut Transcript);
}

pub struct CppLanguage;

impl Language for CppLanguage {
    fn build(&self, out: &mut Transcript) {
        out.line("Compiling the program to binary code with the C++ compiler");
    }

    fn execute(&self, out: &mut Transcript) {
        out.line("Running the program executable");
    }
}

pub struct SwiftLanguage;

impl Language for SwiftLanguage {
    fn build(&self, out: &mut Transcript) {
        out.line("Compiling the source code with Apple LLVM");
    }

    fn execute(&self, out: &mut Transcript) {
        out.line("Launching the .ipa file");
    }
}

/// Abstraction
pub trait Programmer {
    fn language(&self) -> &dyn Language;
    fn set_language(&mut self, language: Box<dyn Language>);
    fn earn_money(&self, out: &mut Transcript);

    fn do_work(&self, out: &mut Transcript) {
        let language = self.language();
        language.build(out);
        language.execute(out);
    }
}

pub struct FreelanceProgrammer {
    language: Box<dyn Language>,
}

impl FreelanceProgrammer {
    pub fn new(language: Box<dyn Language>) -> Self {
        Self { language }
    }
}

impl Programmer for FreelanceProgrammer {
    fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    fn set_language(&mut self, language: Box<dyn Language>) {
        self.language = language;
    }

    fn earn_money(&self, out: &mut Transcript) {
        out.line("Getting paid for the finished order");
    }
}

pub struct CorporateProgrammer {
    language: Box<dyn Language>,
}

impl CorporateProgrammer {
    pub fn new(language: Box<dyn Language>) -> Self {
        Self { language }
    }
}

impl Programmer for CorporateProgrammer {
    fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    fn set_language(&mut self, language: Box<dyn Language>) {
        self.language = language;
    }

    fn earn_money(&self, out: &mut Transcript) {
        out.line("Getting the salary at the end of the month");
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut freelancer = FreelanceProgrammer::new(Box::new(CppLanguage));
    freelancer.do_work(out);
    freelancer.earn_money(out);

    // a new order came in, this time in Swift
    freelancer.set_language(Box::new(SwiftLanguage));
    freelancer.do_work(out);
    freelancer.earn_money(out);

    let corporate = CorporateProgrammer::new(Box::new(SwiftLanguage));
    corporate.do_work(out);
    corporate.earn_money(out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapping_language_changes_work_only() {
        let mut out = Transcript::new();
        let mut programmer: Box<dyn Programmer> =
            Box::new(FreelanceProgrammer::new(Box::new(CppLanguage)));
        programmer.do_work(&mut out);
        programmer.set_language(Box::new(SwiftLanguage));
        programmer.do_work(&mut out);

        assert_eq!(
            out.lines(),
            [
                "Compiling the program to binary code with the C++ compiler",
                "Running the program executable",
                "Compiling the source code with Apple LLVM",
                "Launching the .ipa file",
            ]
        );
    }

    #[test]
    fn test_refined_abstractions_share_implementors() {
        let mut freelance = Transcript::new();
        let mut corporate = Transcript::new();
        FreelanceProgrammer::new(Box::new(CppLanguage)).do_work(&mut freelance);
        CorporateProgrammer::new(Box::new(CppLanguage)).do_work(&mut corporate);
        assert_eq!(freelance, corporate);
    }
}
