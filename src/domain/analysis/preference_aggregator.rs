//! Preference Aggregator - group-level summaries of member preferences.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CrowdTolerance, DomainError, ErrorCode, Season};
use crate::domain::trip::Member;

/// Default number of top activities surfaced to callers.
pub const DEFAULT_TOP_ACTIVITIES: usize = 5;

/// How often one interest tag appears across the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub tag: String,
    pub count: usize,
}

/// How many members prefer one travel season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCount {
    pub season: Season,
    pub count: usize,
}

/// Member counts per crowd-tolerance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrowdDistribution {
    pub avoid: usize,
    pub okay: usize,
    pub no_preference: usize,
}

impl CrowdDistribution {
    /// Total members counted.
    pub fn total(&self) -> usize {
        self.avoid + self.okay + self.no_preference
    }

    /// Count for one tolerance value.
    pub fn count_for(&self, tolerance: CrowdTolerance) -> usize {
        match tolerance {
            CrowdTolerance::Avoid => self.avoid,
            CrowdTolerance::Okay => self.okay,
            CrowdTolerance::NoPreference => self.no_preference,
        }
    }
}

/// Group-level summary derived from the current member set.
///
/// Never stored independently of the members it was computed from; the
/// trip recomputes it whenever the member list changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPreferences {
    member_count: usize,
    budget_average: u32,
    activity_counts: Vec<ActivityCount>,
    season_counts: Vec<SeasonCount>,
    crowd_distribution: CrowdDistribution,
}

impl AggregatedPreferences {
    /// Number of members the summary covers.
    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// Mean of per-member budget midpoints, rounded to the nearest
    /// whole currency unit.
    pub fn budget_average(&self) -> u32 {
        self.budget_average
    }

    /// All interest tags ranked by frequency, most common first. Ties
    /// keep the order the tags were first seen in across the member
    /// list.
    pub fn activity_counts(&self) -> &[ActivityCount] {
        &self.activity_counts
    }

    /// Prefix of the activity ranking, for display surfaces that only
    /// want the leading handful.
    pub fn top_activities(&self, limit: usize) -> &[ActivityCount] {
        &self.activity_counts[..limit.min(self.activity_counts.len())]
    }

    /// Seasons members prefer, ranked by popularity. Ties keep the
    /// canonical season order. Seasons nobody picked are omitted.
    pub fn season_counts(&self) -> &[SeasonCount] {
        &self.season_counts
    }

    /// Member counts per crowd-tolerance value.
    pub fn crowd_distribution(&self) -> CrowdDistribution {
        self.crowd_distribution
    }
}

/// Combines all members' stated preferences into group statistics.
pub struct PreferenceAggregator;

impl PreferenceAggregator {
    /// Computes the group summary for a non-empty member list.
    ///
    /// Pure: the same member list always produces the same summary,
    /// so callers are free to re-run it on every read.
    ///
    /// # Errors
    ///
    /// - `EmptyGroup` if `members` is empty; aggregation over zero
    ///   members is undefined and must not silently default
    pub fn aggregate(members: &[Member]) -> Result<AggregatedPreferences, DomainError> {
        if members.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyGroup,
                "Cannot aggregate preferences for a trip with no members",
            ));
        }

        Ok(AggregatedPreferences {
            member_count: members.len(),
            budget_average: Self::budget_average(members),
            activity_counts: Self::rank_activities(members),
            season_counts: Self::rank_seasons(members),
            crowd_distribution: Self::crowd_distribution(members),
        })
    }

    /// Mean of per-member budget midpoints, rounded to the nearest unit.
    fn budget_average(members: &[Member]) -> u32 {
        let sum: f64 = members.iter().map(|m| m.budget().midpoint()).sum();
        (sum / members.len() as f64).round() as u32
    }

    /// Ranks interest tags by frequency, breaking ties by the order
    /// each tag was first seen while walking the member list.
    fn rank_activities(members: &[Member]) -> Vec<ActivityCount> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut next_index = 0usize;

        for member in members {
            for tag in member.interests() {
                let entry = counts.entry(tag.as_str()).or_insert_with(|| {
                    let idx = next_index;
                    next_index += 1;
                    (0, idx)
                });
                entry.0 += 1;
            }
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(tag, (count, first_seen))| (tag, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .map(|(tag, count, _)| ActivityCount {
                tag: tag.to_string(),
                count,
            })
            .collect()
    }

    /// Counts season preferences, ranked descending. A member may
    /// contribute to several seasons.
    fn rank_seasons(members: &[Member]) -> Vec<SeasonCount> {
        let mut counts: Vec<SeasonCount> = Season::ALL
            .iter()
            .map(|&season| SeasonCount {
                season,
                count: members
                    .iter()
                    .filter(|m| m.seasons().contains(&season))
                    .count(),
            })
            .filter(|sc| sc.count > 0)
            .collect();

        // Stable sort keeps canonical season order for equal counts
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    fn crowd_distribution(members: &[Member]) -> CrowdDistribution {
        let mut distribution = CrowdDistribution::default();
        for member in members {
            match member.crowd_tolerance() {
                CrowdTolerance::Avoid => distribution.avoid += 1,
                CrowdTolerance::Okay => distribution.okay += 1,
                CrowdTolerance::NoPreference => distribution.no_preference += 1,
            }
        }
        distribution
    }
}
