//! # Tax Table
//!
//! Static jurisdiction → tax policy lookup.
//!
//! Two independent maps, both immutable after construction:
//! - jurisdiction code → tax rate
//! - jurisdiction code → set of exempt categories
//!
//! A jurisdiction may appear in either map, both, or neither. Absence is
//! never an error: a missing rate means zero, a missing exemption entry
//! means no category is exempt there.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::types::TaxRate;

/// Immutable rate and exemption lookup.
///
/// ## Built-In Table
/// | Jurisdiction | Rate    | Exempt categories |
/// |---           |---      |---                |
/// | CA           | 9.75%   | food              |
/// | NY           | 8.875%  | food, clothing    |
/// | anything else| 0%      | none              |
///
/// Deployments can replace the built-in table through the builder methods:
///
/// ```rust
/// use tally_core::tax_table::TaxTable;
/// use tally_core::types::TaxRate;
///
/// let table = TaxTable::empty()
///     .with_rate("TX", TaxRate::from_bps(825))
///     .with_exemptions("TX", ["food"]);
///
/// assert_eq!(table.rate_for("TX"), TaxRate::from_bps(825));
/// assert!(table.is_exempt("TX", "food"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxTable {
    rates: HashMap<String, TaxRate>,
    exemptions: HashMap<String, BTreeSet<String>>,
}

impl TaxTable {
    /// The built-in jurisdiction table.
    pub fn builtin() -> Self {
        TaxTable::empty()
            .with_rate("CA", TaxRate::from_ppm(97_500))
            .with_exemptions("CA", ["food"])
            .with_rate("NY", TaxRate::from_ppm(88_750))
            .with_exemptions("NY", ["food", "clothing"])
    }

    /// An empty table: every jurisdiction has a zero rate and no exemptions.
    pub fn empty() -> Self {
        TaxTable {
            rates: HashMap::new(),
            exemptions: HashMap::new(),
        }
    }

    /// Adds or replaces the rate for a jurisdiction.
    /// The code is stored uppercased; lookups expect uppercase codes.
    pub fn with_rate(mut self, jurisdiction: &str, rate: TaxRate) -> Self {
        self.rates.insert(jurisdiction.to_uppercase(), rate);
        self
    }

    /// Adds or replaces the exemption set for a jurisdiction.
    /// Categories are stored verbatim: exemption matching is case-sensitive.
    pub fn with_exemptions<I, S>(mut self, jurisdiction: &str, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exemptions.insert(
            jurisdiction.to_uppercase(),
            categories.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Returns the rate for an exact jurisdiction-code match, or zero if no
    /// entry exists. Callers normalize codes to uppercase before lookup.
    /// Never fails.
    pub fn rate_for(&self, jurisdiction: &str) -> TaxRate {
        self.rates
            .get(jurisdiction)
            .copied()
            .unwrap_or(TaxRate::zero())
    }

    /// Returns true iff the jurisdiction has an exemption set and the
    /// category is a member of it. Membership is an exact, case-sensitive
    /// string match ("Food" does not match "food"). A jurisdiction with no
    /// exemption entry yields false for every category. Never fails.
    pub fn is_exempt(&self, jurisdiction: &str, category: &str) -> bool {
        self.exemptions
            .get(jurisdiction)
            .map(|set| set.contains(category))
            .unwrap_or(false)
    }
}

/// The default table is the built-in one.
impl Default for TaxTable {
    fn default() -> Self {
        TaxTable::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rates() {
        let table = TaxTable::builtin();
        assert_eq!(table.rate_for("CA"), TaxRate::from_ppm(97_500));
        assert_eq!(table.rate_for("NY"), TaxRate::from_ppm(88_750));
    }

    #[test]
    fn test_unknown_jurisdiction_has_zero_rate() {
        let table = TaxTable::builtin();
        assert_eq!(table.rate_for("TX"), TaxRate::zero());
        assert_eq!(table.rate_for(""), TaxRate::zero());
    }

    #[test]
    fn test_builtin_exemptions() {
        let table = TaxTable::builtin();
        assert!(table.is_exempt("CA", "food"));
        assert!(!table.is_exempt("CA", "clothing"));
        assert!(table.is_exempt("NY", "food"));
        assert!(table.is_exempt("NY", "clothing"));
        assert!(!table.is_exempt("NY", "general"));
    }

    #[test]
    fn test_no_exemption_entry_means_nothing_exempt() {
        let table = TaxTable::builtin().with_rate("TX", TaxRate::from_bps(825));
        assert!(!table.is_exempt("TX", "food"));
        assert!(!table.is_exempt("ZZ", "food"));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let table = TaxTable::builtin();
        assert!(table.is_exempt("CA", "food"));
        assert!(!table.is_exempt("CA", "Food"));
        assert!(!table.is_exempt("CA", "FOOD"));
    }

    #[test]
    fn test_builder_replaces_entries() {
        let table = TaxTable::builtin()
            .with_rate("CA", TaxRate::from_bps(800))
            .with_exemptions("CA", ["medicine"]);

        assert_eq!(table.rate_for("CA"), TaxRate::from_bps(800));
        assert!(table.is_exempt("CA", "medicine"));
        assert!(!table.is_exempt("CA", "food"));
    }

    #[test]
    fn test_builder_uppercases_codes() {
        let table = TaxTable::empty()
            .with_rate("wa", TaxRate::from_bps(650))
            .with_exemptions("wa", ["food"]);
        assert_eq!(table.rate_for("WA"), TaxRate::from_bps(650));
        assert!(table.is_exempt("WA", "food"));
    }
}
