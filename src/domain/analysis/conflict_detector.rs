//! Conflict Detector - finds disagreements in the group's preferences.
//!
//! Runs a fixed ordered set of independent rule checks over the member
//! list. Each rule emits at most one conflict, identified by its
//! category, so re-running detection after a member change lines up
//! with the previous run and can carry still-valid resolutions over.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Accommodation, CrowdTolerance, DomainError, Season};
use crate::domain::trip::{ConflictCategory, ConflictItem, Member, Severity};

/// Tunable thresholds for the detection rules.
///
/// The defaults are the product's shipped values; deployments can
/// override any of them through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionThresholds {
    /// Budget midpoint spread ratio above which the conflict is high
    /// severity.
    pub budget_spread_high: f64,
    /// Budget midpoint spread ratio above which the conflict is medium
    /// severity.
    pub budget_spread_medium: f64,
    /// Minimum share of members who must prefer the leading season.
    pub season_alignment_min: f64,
    /// Share at which one crowd-tolerance value counts as dominant.
    pub crowd_dominance_min: f64,
    /// Minimum share of members behind the leading accommodation type.
    pub accommodation_majority_min: f64,
    /// Minimum share of members behind the most common interest tag.
    pub activity_overlap_min: f64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            budget_spread_high: 0.5,
            budget_spread_medium: 0.25,
            season_alignment_min: 0.6,
            crowd_dominance_min: 0.7,
            accommodation_majority_min: 0.5,
            activity_overlap_min: 0.5,
        }
    }
}

impl DetectionThresholds {
    /// Checks that the thresholds are internally consistent.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a share falls outside (0, 1] or the
    ///   medium budget threshold exceeds the high one
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.budget_spread_medium > self.budget_spread_high {
            return Err(DomainError::validation(
                "budget_spread_medium",
                "Medium budget spread threshold cannot exceed the high threshold",
            ));
        }
        for (name, value) in [
            ("season_alignment_min", self.season_alignment_min),
            ("crowd_dominance_min", self.crowd_dominance_min),
            ("accommodation_majority_min", self.accommodation_majority_min),
            ("activity_overlap_min", self.activity_overlap_min),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(DomainError::validation(
                    name,
                    "Share thresholds must be within (0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Scans member preferences for disagreements above the configured
/// thresholds.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    thresholds: DetectionThresholds,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new(DetectionThresholds::default())
    }
}

impl ConflictDetector {
    /// Creates a detector with the given thresholds.
    pub fn new(thresholds: DetectionThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds in use.
    pub fn thresholds(&self) -> &DetectionThresholds {
        &self.thresholds
    }

    /// Runs all rules in their fixed order and reconciles the result
    /// against a previous run.
    ///
    /// Reconciliation rules, per conflict category:
    /// - previously resolved and the severity is unchanged: the
    ///   resolution carries over, the conflict stays settled
    /// - previously resolved but the severity changed: the conflict
    ///   reopens, because the original resolution may no longer apply
    /// - the rule no longer fires: the conflict drops off the active
    ///   list
    ///
    /// Detection is idempotent: without member changes, re-running it
    /// returns the same conflict set.
    ///
    /// A group of one (or none) has nobody to disagree with, so the
    /// result is always empty.
    pub fn detect(&self, members: &[Member], previous: &[ConflictItem]) -> Vec<ConflictItem> {
        if members.len() <= 1 {
            return Vec::new();
        }

        [
            self.budget_rule(members),
            self.season_rule(members),
            self.crowd_rule(members),
            self.accommodation_rule(members),
            self.dietary_rule(members),
            self.activity_rule(members),
        ]
        .into_iter()
        .flatten()
        .map(|fresh| Self::reconcile(fresh, previous))
        .collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Rules
    // ───────────────────────────────────────────────────────────────

    /// Budget spread: wide midpoint spread relative to the group
    /// average means members are shopping for different trips.
    fn budget_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let midpoints: Vec<f64> = members.iter().map(|m| m.budget().midpoint()).collect();
        let average = midpoints.iter().sum::<f64>() / midpoints.len() as f64;
        if average <= 0.0 {
            return None;
        }

        let lowest = midpoints.iter().cloned().fold(f64::INFINITY, f64::min);
        let highest = midpoints.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let spread = (highest - lowest) / average;

        let severity = if spread > self.thresholds.budget_spread_high {
            Severity::High
        } else if spread > self.thresholds.budget_spread_medium {
            Severity::Medium
        } else {
            return None;
        };

        Some(ConflictItem::new(
            ConflictCategory::Budget,
            severity,
            format!(
                "Per-person budget midpoints range from {} to {}, against a group average of {}",
                lowest.round() as i64,
                highest.round() as i64,
                average.round() as i64,
            ),
        ))
    }

    /// Season mismatch: even the most popular season fails to cover
    /// enough of the group.
    fn season_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let total = members.len();
        let (leader, leader_count) = Self::leading_season(members)?;

        let share = leader_count as f64 / total as f64;
        if share >= self.thresholds.season_alignment_min {
            return None;
        }

        Some(ConflictItem::new(
            ConflictCategory::Timing,
            Severity::Medium,
            format!(
                "Only {} of {} members share the most popular season ({})",
                leader_count,
                total,
                leader.label(),
            ),
        ))
    }

    /// Crowd tolerance split: both camps present and neither side (nor
    /// the undecided) dominates.
    fn crowd_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let total = members.len() as f64;
        let count = |value: CrowdTolerance| {
            members.iter().filter(|m| m.crowd_tolerance() == value).count()
        };
        let avoid = count(CrowdTolerance::Avoid);
        let okay = count(CrowdTolerance::Okay);
        let no_preference = count(CrowdTolerance::NoPreference);

        if avoid == 0 || okay == 0 {
            return None;
        }

        let dominant_share = [avoid, okay, no_preference]
            .into_iter()
            .map(|c| c as f64 / total)
            .fold(0.0, f64::max);
        if dominant_share >= self.thresholds.crowd_dominance_min {
            return None;
        }

        Some(ConflictItem::new(
            ConflictCategory::Pacing,
            Severity::Low,
            "Some members want to avoid crowds while others are okay with them, \
             and neither side has a clear majority"
                .to_string(),
        ))
    }

    /// Accommodation split: no lodging type carries a majority.
    fn accommodation_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let total = members.len();
        let mut leader = Accommodation::Hotel;
        let mut leader_count = 0usize;
        for kind in Accommodation::ALL {
            let count = members.iter().filter(|m| m.accommodation() == kind).count();
            if count > leader_count {
                leader = kind;
                leader_count = count;
            }
        }

        let share = leader_count as f64 / total as f64;
        if share >= self.thresholds.accommodation_majority_min {
            return None;
        }

        Some(ConflictItem::new(
            ConflictCategory::Accommodation,
            Severity::Medium,
            format!(
                "No accommodation type has majority support; {} leads with {} of {} members",
                leader, leader_count, total,
            ),
        ))
    }

    /// Dietary needs: part of the group has restrictions the rest does
    /// not share, so restaurant choices need coordination.
    fn dietary_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let total = members.len();
        let restricted = members.iter().filter(|m| m.has_dietary_restrictions()).count();
        if restricted == 0 || restricted == total {
            return None;
        }

        Some(ConflictItem::new(
            ConflictCategory::Dietary,
            Severity::Low,
            format!(
                "{} of {} members have dietary restrictions the rest of the group does not share",
                restricted, total,
            ),
        ))
    }

    /// Activity overlap: the most shared interest still covers too few
    /// members to anchor a joint itinerary.
    fn activity_rule(&self, members: &[Member]) -> Option<ConflictItem> {
        let total = members.len();
        let (leader, leader_count) = Self::leading_interest(members)?;

        let share = leader_count as f64 / total as f64;
        if share >= self.thresholds.activity_overlap_min {
            return None;
        }

        Some(ConflictItem::new(
            ConflictCategory::Activity,
            Severity::Medium,
            format!(
                "The most shared interest ({}) is common to only {} of {} members",
                leader, leader_count, total,
            ),
        ))
    }

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    /// Most popular season and its member count. `None` when nobody
    /// picked any season. Ties go to the earlier season in canonical
    /// order.
    fn leading_season(members: &[Member]) -> Option<(Season, usize)> {
        let mut leader: Option<(Season, usize)> = None;
        for season in Season::ALL {
            let count = members
                .iter()
                .filter(|m| m.seasons().contains(&season))
                .count();
            if count > leader.map_or(0, |(_, c)| c) {
                leader = Some((season, count));
            }
        }
        leader
    }

    /// Most common interest tag and its member count. `None` when no
    /// member listed any interest. Ties go to the tag seen first.
    fn leading_interest(members: &[Member]) -> Option<(String, usize)> {
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

        counts
            .into_iter()
            .min_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)))
            .map(|(tag, (count, _))| (tag.to_string(), count))
    }

    /// Carries a still-valid resolution from the previous run onto a
    /// freshly detected conflict.
    fn reconcile(fresh: ConflictItem, previous: &[ConflictItem]) -> ConflictItem {
        match previous.iter().find(|p| p.id() == fresh.id()) {
            Some(prev) if prev.is_resolved() && prev.severity() == fresh.severity() => {
                ConflictItem::reconstitute(
                    fresh.category(),
                    fresh.severity(),
                    fresh.description().to_string(),
                    true,
                    prev.resolution().map(str::to_string),
                )
            }
            _ => fresh,
        }
    }
}
