use serde::{Deserialize, Serialize};

use crate::path::Cost;

/// The category of an Edge on the site, based on how far apart its two locations are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    /// a short step between two neighboring locations in the same row
    Short,
    /// a regular step between two rows
    Medium,
    /// a long step, usually crossing an obstacle
    Long,
}

impl WeightTier {
    /// All tiers, from the longest to the shortest
    pub const ALL: [WeightTier; 3] = [WeightTier::Long, WeightTier::Medium, WeightTier::Short];

    /// The key of this tier in the `weight_rules` of an exported document
    /// ```
    /// # use site_routing::graph::WeightTier;
    /// assert_eq!(WeightTier::Long.rule_name(), "long_distance");
    /// ```
    pub fn rule_name(self) -> &'static str {
        match self {
            WeightTier::Short => "short_distance",
            WeightTier::Medium => "medium_distance",
            WeightTier::Long => "long_distance",
        }
    }
}

/// Maps every [`WeightTier`] to the numeric weight used by the search.
///
/// Default values:
/// ```
/// # use site_routing::graph::WeightPolicy;
/// assert_eq!(
///     WeightPolicy {
///         short: 0.5,
///         medium: 1.0,
///         long: 2.0,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightPolicy {
    /// weight of [`WeightTier::Short`] edges (defaults to `0.5`)
    pub short: Cost,
    /// weight of [`WeightTier::Medium`] edges (defaults to `1.0`)
    pub medium: Cost,
    /// weight of [`WeightTier::Long`] edges (defaults to `2.0`)
    pub long: Cost,
}

impl WeightPolicy {
    /// The weights of the reference site
    pub const DEFAULT: WeightPolicy = WeightPolicy {
        short: 0.5,
        medium: 1.0,
        long: 2.0,
    };

    /// Looks up the weight of a tier
    /// ```
    /// # use site_routing::graph::{WeightPolicy, WeightTier};
    /// let policy = WeightPolicy { long: 3.0, ..WeightPolicy::DEFAULT };
    /// assert_eq!(policy.weight(WeightTier::Long), 3.0);
    /// assert_eq!(policy.weight(WeightTier::Short), 0.5);
    /// ```
    pub fn weight(&self, tier: WeightTier) -> Cost {
        match tier {
            WeightTier::Short => self.short,
            WeightTier::Medium => self.medium,
            WeightTier::Long => self.long,
        }
    }

    /// Iterates over `(tier, weight)` pairs in the order of [`WeightTier::ALL`]
    pub fn rules(&self) -> impl Iterator<Item = (WeightTier, Cost)> + '_ {
        WeightTier::ALL.into_iter().map(move |tier| (tier, self.weight(tier)))
    }

    /// Finds the tier whose weight is exactly `weight`, if any
    pub fn classify(&self, weight: Cost) -> Option<WeightTier> {
        self.rules()
            .find(|&(_, value)| value == weight)
            .map(|(tier, _)| tier)
    }
}

impl Default for WeightPolicy {
    fn default() -> WeightPolicy {
        WeightPolicy::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_ordered_long_to_short() {
        let rules: Vec<_> = WeightPolicy::DEFAULT.rules().collect();
        assert_eq!(
            rules,
            vec![
                (WeightTier::Long, 2.0),
                (WeightTier::Medium, 1.0),
                (WeightTier::Short, 0.5),
            ]
        );
    }

    #[test]
    fn classify() {
        let policy = WeightPolicy::DEFAULT;
        assert_eq!(policy.classify(0.5), Some(WeightTier::Short));
        assert_eq!(policy.classify(2.0), Some(WeightTier::Long));
        assert_eq!(policy.classify(1.5), None);
    }
}
