use serde::{Deserialize, Serialize};

/// How to select interaction partner records by name.
///
/// `Exact` is the default and deliberately narrow: "Hirudin variant-1" and
/// "Hirudin-2" are distinct partners and are not merged. `Prefix` and
/// `Contains` widen the selection for callers who want a whole partner
/// family. Case-sensitive in all modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerMatch {
    Exact(String),
    Prefix(String),
    Contains(String),
}

impl PartnerMatch {
    /// Whether a record with this partner name is selected.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            PartnerMatch::Exact(p)    => name == p,
            PartnerMatch::Prefix(p)   => name.starts_with(p.as_str()),
            PartnerMatch::Contains(p) => name.contains(p.as_str()),
        }
    }
}
