//! Template Method: the skeleton of an algorithm is fixed, individual steps
//! vary per implementation.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Education {
    fn enter(&self, out: &mut Transcript);
    fn study(&self, out: &mut Transcript);
    fn get_document(&self, out: &mut Transcript);

    fn pass_exams(&self, out: &mut Transcript) {
        out.line("Passing the final exams!");
    }
}

/// The template method. A free function so no implementation can reorder
/// or skip the steps.
pub fn learn(education: &dyn Education, out: &mut Transcript) {
    education.enter(out);
    education.study(out);
    education.pass_exams(out);
    education.get_document(out);
}

pub struct School;

impl Education for School {
    fn enter(&self, out: &mut Transcript) {
        out.line("Going to the first grade");
    }

    fn study(&self, out: &mut Transcript) {
        out.line("Attending lessons, doing homework");
    }

    fn get_document(&self, out: &mut Transcript) {
        out.line("Receiving the secondary school certificate");
    }
}

pub struct University;

impl Education for University {
    fn enter(&self, out: &mut Transcript) {
        out.line("Passing the entrance exams and enrolling in the university");
    }

    fn study(&self, out: &mut Transcript) {
        out.line("Attending lectures, going to practical classes");
    }

    fn pass_exams(&self, out: &mut Transcript) {
        out.line("Passing the exams in our major");
    }

    fn get_document(&self, out: &mut Transcript) {
        out.line("Receiving the diploma of higher education");
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    learn(&School, out);
    learn(&University, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_uses_default_exam_step() {
        let mut out = Transcript::new();
        learn(&School, &mut out);
        assert_eq!(
            out.lines(),
            [
                "Going to the first grade",
                "Attending lessons, doing homework",
                "Passing the final exams!",
                "Receiving the secondary school certificate",
            ]
        );
    }

    #[test]
    fn test_university_overrides_only_steps() {
        let mut out = Transcript::new();
        learn(&University, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out.lines()[2], "Passing the exams in our major");
        assert!(out.lines()[3].contains("diploma"));
    }
}
