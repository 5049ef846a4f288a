//! Splits command arguments into a preamble and prefixed values.
//!
//! `S1234567A dt/2024-09-01 10:00 h/CONSULT` tokenizes into the preamble `S1234567A` and the
//! values `dt/ -> ["2024-09-01 10:00"]`, `h/ -> ["CONSULT"]`. A prefix is only recognised at the
//! start of the arguments or directly after whitespace.

use std::collections::HashMap;

/// A labelled value slot such as `n/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_NRIC: Prefix = Prefix::new("i/");
pub const PREFIX_SEX: Prefix = Prefix::new("s/");
pub const PREFIX_BIRTHDATE: Prefix = Prefix::new("d/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_ALLERGY: Prefix = Prefix::new("al/");
pub const PREFIX_DATE_TIME: Prefix = Prefix::new("dt/");
pub const PREFIX_HEALTH_SERVICE: Prefix = Prefix::new("h/");
pub const PREFIX_START_DATE: Prefix = Prefix::new("sd/");
pub const PREFIX_END_DATE: Prefix = Prefix::new("ed/");

/// Result of tokenizing an argument string.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Returns the prefixes among `prefixes` that were given more than once.
    pub fn repeated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect()
    }
}

/// Tokenizes `args` against the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(index, _)| {
                    args[..*index]
                        .chars()
                        .next_back()
                        .map_or(true, char::is_whitespace)
                })
                .map(move |(index, _)| (index, prefix))
        })
        .collect();
    positions.sort_by_key(|(index, _)| *index);

    let mut multimap = ArgumentMultimap {
        preamble: args[..positions.first().map_or(args.len(), |(i, _)| *i)]
            .trim()
            .to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(args.len(), |(i, _)| *i);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}
