//! Classification of raw user input into provider request parameters.
//!
//! Pure string transformation; no I/O happens here.

use crate::error::LookupError;

/// Parameters for one provider request, after classifying the raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedParams {
    /// Free-form city lookup: `q=<name>` or `q=<name>,<country>`.
    City {
        name: String,
        country: Option<String>,
    },

    /// Postal lookup: `zip=<code>,<country>`. The country is always present,
    /// inferred when the user did not supply one.
    Zip { code: String, country: String },
}

impl ResolvedParams {
    /// Render as the query pair sent to the provider.
    pub fn to_query_pair(&self) -> (&'static str, String) {
        match self {
            ResolvedParams::City { name, country: Some(cc) } => ("q", format!("{name},{cc}")),
            ResolvedParams::City { name, country: None } => ("q", name.clone()),
            ResolvedParams::Zip { code, country } => ("zip", format!("{code},{country}")),
        }
    }
}

/// Classify a raw query string.
///
/// A comma splits the input into a name part and a country part (country
/// uppercased). The postal candidate is the name part when a country was
/// supplied, otherwise the whole trimmed input. A bare all-digit string is
/// ALWAYS the postal path, even when it happens to be a numeric place name.
pub fn parse(input: &str) -> Result<ResolvedParams, LookupError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    match trimmed.split_once(',') {
        Some((name, country)) => {
            let name = name.trim().to_string();
            let country = country.trim().to_uppercase();

            if looks_postal(&name) {
                Ok(ResolvedParams::Zip { code: name, country })
            } else {
                Ok(ResolvedParams::City { name, country: Some(country) })
            }
        }
        None => {
            if looks_postal(trimmed) {
                Ok(ResolvedParams::Zip {
                    code: trimmed.to_string(),
                    country: infer_country(trimmed).to_string(),
                })
            } else {
                Ok(ResolvedParams::City { name: trimmed.to_string(), country: None })
            }
        }
    }
}

/// True for 3-10 ASCII digits and nothing else.
fn looks_postal(s: &str) -> bool {
    (3..=10).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Six digits with a non-zero leading digit is an Indian PIN code; every
/// other bare postal code defaults to a US zip.
fn infer_country(code: &str) -> &'static str {
    if code.len() == 6 && code.as_bytes()[0] != b'0' { "IN" } else { "US" }
}
