//! Cross-checks a decoded response against the request it answers.
//!
//! Which checks run is decided by a [`ValidationPolicy`]. The strict policy
//! is the default: it accepts only a clean, non-authoritative, untruncated
//! recursive answer with at least one record. The lenient policy keeps the
//! checks that pair a response with its request and lets the caller decide
//! what to do with error codes, truncation and empty answers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::Deserialize;
use crate::error::{Field, ValidationError};
use crate::packet::{Request, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_answer: bool,
    /// nscount and arcount have to equal the request's.
    pub match_extra_sections: bool,
    pub allow_authoritative: bool,
    pub allow_truncated: bool,
    pub require_recursion_available: bool,
    pub allow_error_rcode: bool,
    pub check_questions: bool,
}

impl ValidationPolicy {
    pub const fn strict() -> Self {
        Self {
            require_answer: true,
            match_extra_sections: true,
            allow_authoritative: false,
            allow_truncated: false,
            require_recursion_available: true,
            allow_error_rcode: false,
            check_questions: true,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            require_answer: false,
            match_extra_sections: false,
            allow_authoritative: true,
            allow_truncated: true,
            require_recursion_available: false,
            allow_error_rcode: true,
            check_questions: true,
        }
    }

    /// Runs the checks in a fixed order and reports the first failure.
    pub fn validate(&self, response: &Response, request: &Request) -> Result<(), ValidationError> {
        let res = &response.header;
        let req = &request.header;

        expect(Field::Id, req.id, res.id)?;
        expect(Field::QuestionCount, req.question_count, res.question_count)?;

        if self.require_answer && res.answer_count == 0 {
            return Err(ValidationError::NoAnswer);
        }

        if self.match_extra_sections {
            expect(Field::AuthorityCount, req.authority_count, res.authority_count)?;
            expect(Field::AdditionalCount, req.additional_count, res.additional_count)?;
        }

        expect(Field::Qr, 1, res.flags.qr() as u16)?;
        expect(Field::Opcode, 0, res.flags.opcode() as u16)?;

        if !self.allow_authoritative {
            expect(Field::Authoritative, 0, res.flags.aa() as u16)?;
        }
        if !self.allow_truncated {
            expect(Field::Truncated, 0, res.flags.tc() as u16)?;
        }

        expect(Field::RecursionDesired, req.flags.rd() as u16, res.flags.rd() as u16)?;

        if self.require_recursion_available {
            expect(Field::RecursionAvailable, 1, res.flags.ra() as u16)?;
        }

        expect(Field::Reserved, 0, res.flags.z() as u16)?;

        if !self.allow_error_rcode {
            expect(Field::ResultCode, 0, res.flags.rcode() as u16)?;
        }

        if self.check_questions {
            check_questions(response, request)?;
        }

        Ok(())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Named policies selectable from configuration.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Strict,
    Lenient,
}

impl PolicyKind {
    pub fn policy(&self) -> ValidationPolicy {
        match self {
            PolicyKind::Strict => ValidationPolicy::strict(),
            PolicyKind::Lenient => ValidationPolicy::lenient(),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(PolicyKind::Strict),
            "lenient" => Ok(PolicyKind::Lenient),
            _ => Err(format!("{} is not a validation policy", s)),
        }
    }
}

impl Display for PolicyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Strict => write!(f, "strict"),
            PolicyKind::Lenient => write!(f, "lenient"),
        }
    }
}

/// Validates with the strict policy.
pub fn validate(response: &Response, request: &Request) -> Result<(), ValidationError> {
    ValidationPolicy::strict().validate(response, request)
}

fn expect(field: Field, expected: u16, actual: u16) -> Result<(), ValidationError> {
    if expected != actual {
        return Err(ValidationError::Mismatch { field, expected, actual });
    }

    Ok(())
}

fn check_questions(response: &Response, request: &Request) -> Result<(), ValidationError> {
    // the header counts agree but a hand-built response may still disagree with them
    expect(
        Field::QuestionCount,
        section_len(request.questions.len()),
        section_len(response.questions.len()),
    )?;

    for (index, (asked, echoed)) in request.questions.iter().zip(&response.questions).enumerate() {
        if !asked.domain.trim_end_matches('.').eq_ignore_ascii_case(&echoed.domain) {
            return Err(ValidationError::QuestionName {
                index,
                expected: asked.domain.clone(),
                actual: echoed.domain.clone(),
            });
        }

        if asked.qtype != echoed.qtype {
            return Err(ValidationError::QuestionType {
                index,
                expected: asked.qtype.to_num(),
                actual: echoed.qtype.to_num(),
            });
        }

        if asked.qclass != echoed.qclass {
            return Err(ValidationError::QuestionClass {
                index,
                expected: asked.qclass.to_num(),
                actual: echoed.qclass.to_num(),
            });
        }
    }

    Ok(())
}

fn section_len(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
