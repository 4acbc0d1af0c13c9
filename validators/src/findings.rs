//! Per-line checks behind the batch validator.

use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;

use crate::patterns::fullname::{prepare_name_input, validate};
use crate::patterns::PatternMatcher;
use crate::{get_all_matchers, identify};

/// A single pattern to check instead of all of them.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Email,
    Float,
    Fullname,
    Phonenumber,
    Username,
}

impl Kind {
    pub fn key(self) -> &'static str {
        match self {
            Kind::Email => "email",
            Kind::Float => "float",
            Kind::Fullname => "fullname",
            Kind::Phonenumber => "phonenumber",
            Kind::Username => "username",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line: usize,
    pub value: String,
    pub kinds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

pub struct LineChecker {
    matchers: HashMap<String, Box<dyn PatternMatcher>>,
}

impl Default for LineChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChecker {
    pub fn new() -> Self {
        Self {
            matchers: get_all_matchers(),
        }
    }

    /// Checks one trimmed value against `kind`, or against every pattern
    /// when no kind is given. Full names also carry their normalized form.
    pub fn check(&self, line: usize, raw: &str, kind: Option<Kind>) -> Finding {
        let value = raw.trim();
        let kinds = match kind {
            Some(kind) => self
                .matchers
                .get(kind.key())
                .filter(|m| m.matches(value))
                .map(|_| vec![kind.key().to_string()])
                .unwrap_or_default(),
            None => identify(value),
        };

        let normalized = if kinds.iter().any(|k| k == "fullname") {
            validate(&prepare_name_input(value)).normalized().map(str::to_string)
        } else {
            None
        };

        Finding {
            line,
            value: value.to_string(),
            kinds,
            normalized,
        }
    }
}
