//! Study configuration root: groups and their probability weights.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{GroupId, StudyId};
use super::protocol::Protocol;

fn default_total_weight() -> Decimal {
    Decimal::ONE
}

/// A complete study configuration.
///
/// Loaded once from TOML, validated, then treated as immutable: the sampler
/// and the session materializer only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub id: StudyId,

    #[serde(default)]
    pub title: String,

    /// Declared sum of all group weights. Weights are validated against this
    /// total; commonly 1, sometimes 100 for percent-style configs.
    #[serde(default = "default_total_weight")]
    pub total_weight: Decimal,

    #[serde(rename = "group", default)]
    pub groups: Vec<Group>,
}

impl Study {
    /// Weights of all groups in declaration order.
    pub fn weights(&self) -> Vec<Decimal> {
        self.groups.iter().map(|g| g.weight).collect()
    }

    /// Look up a group by id.
    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }
}

/// An experimental arm: a probability weight plus the protocol served to
/// participants assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,

    #[serde(default)]
    pub label: String,

    /// Relative selection probability. Decimal, not binary float: cumulative
    /// sums over many groups must be exact so selection boundaries never
    /// drift between loads.
    pub weight: Decimal,

    #[serde(default)]
    pub protocol: Protocol,
}
