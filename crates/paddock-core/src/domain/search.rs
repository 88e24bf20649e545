//! Search parameters for the horse list endpoint.
//!
//! The list endpoint takes an arbitrary subset of query parameters; unset
//! fields are simply not sent.  The two fixed-sex constructors back the
//! parent autocomplete searches: a mother candidate must be female, a
//! father candidate male.

use chrono::NaiveDate;

use crate::domain::horse::Sex;

/// Parameter set for `GET /horses`.
///
/// All fields are optional; [`HorseSearchParams::to_query`] renders only
/// the set ones, in a stable order, ready to be appended to the request
/// URL as query pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorseSearchParams {
    /// Name substring filter.
    pub name: Option<String>,
    pub sex: Option<Sex>,
    /// Lower bound (exclusive) on the date of birth.
    pub born_after: Option<NaiveDate>,
    /// Upper bound (exclusive) on the date of birth.
    pub born_before: Option<NaiveDate>,
    pub owner_id: Option<i64>,
    /// Maximum number of results to return.
    pub limit: Option<u32>,
}

impl HorseSearchParams {
    /// Parameters for the mother autocomplete: name substring, female only,
    /// at most `limit` results.
    pub fn mother_candidates(name: &str, limit: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            sex: Some(Sex::Female),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Parameters for the father autocomplete: name substring, male only,
    /// at most `limit` results.
    pub fn father_candidates(name: &str, limit: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            sex: Some(Sex::Male),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Renders the set parameters as query pairs.
    ///
    /// The order is stable (name, sex, bornAfter, bornBefore, ownerId,
    /// limit) so request URLs are reproducible in logs and tests.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(sex) = self.sex {
            pairs.push(("sex", sex.as_param().to_string()));
        }
        if let Some(born_after) = self.born_after {
            pairs.push(("bornAfter", born_after.to_string()));
        }
        if let Some(born_before) = self.born_before {
            pairs.push(("bornBefore", born_before.to_string()));
        }
        if let Some(owner_id) = self.owner_id {
            pairs.push(("ownerId", owner_id.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
