//! Property-based tests for preference aggregation and conflict detection.
//!
//! These tests check invariants that must hold for any group composition:
//! - Groups of at most one member never conflict
//! - Detection is deterministic and idempotent
//! - Member order never changes which conflicts fire
//! - Resolutions carry over re-runs while the severity is stable
//! - Aggregation totals always line up with the member list

use proptest::prelude::*;

use trip_accord::domain::analysis::{ConflictDetector, PreferenceAggregator};
use trip_accord::domain::foundation::{
    Accommodation, BudgetRange, CrowdTolerance, MemberId, Season, TravelStyle,
};
use trip_accord::domain::trip::{ConflictCategory, Member, Severity};

// =============================================================================
// Strategies
// =============================================================================

fn arb_season() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Cny),
        Just(Season::Easter),
        Just(Season::JuneHoliday),
        Just(Season::SeptemberHoliday),
        Just(Season::YearEnd),
    ]
}

fn arb_crowd() -> impl Strategy<Value = CrowdTolerance> {
    prop_oneof![
        Just(CrowdTolerance::Avoid),
        Just(CrowdTolerance::Okay),
        Just(CrowdTolerance::NoPreference),
    ]
}

fn arb_style() -> impl Strategy<Value = TravelStyle> {
    prop_oneof![
        Just(TravelStyle::Relaxed),
        Just(TravelStyle::Balanced),
        Just(TravelStyle::Packed),
    ]
}

fn arb_accommodation() -> impl Strategy<Value = Accommodation> {
    prop_oneof![
        Just(Accommodation::Hotel),
        Just(Accommodation::Hostel),
        Just(Accommodation::Apartment),
        Just(Accommodation::Resort),
    ]
}

fn arb_interests() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(
        vec![
            "food".to_string(),
            "hiking".to_string(),
            "museums".to_string(),
            "nightlife".to_string(),
            "beaches".to_string(),
        ],
        0..=3,
    )
}

fn arb_dietary() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(
        vec![
            "vegetarian".to_string(),
            "halal".to_string(),
            "gluten-free".to_string(),
        ],
        0..=2,
    )
}

fn arb_member() -> impl Strategy<Value = Member> {
    (
        "[a-z]{1,12}",
        (100u32..5000, 0u32..5000),
        prop::collection::vec(arb_season(), 0..=2),
        arb_interests(),
        arb_crowd(),
        arb_style(),
        arb_accommodation(),
        arb_dietary(),
    )
        .prop_map(
            |(name, (min, extra), seasons, interests, crowd, style, accommodation, dietary)| {
                Member::new(
                    MemberId::new(),
                    name,
                    BudgetRange::new(min, min + extra).unwrap(),
                    seasons,
                    interests,
                    crowd,
                    style,
                    accommodation,
                    dietary,
                    vec![],
                    None,
                )
                .unwrap()
            },
        )
}

fn categories_and_severities(
    conflicts: &[trip_accord::domain::trip::ConflictItem],
) -> Vec<(ConflictCategory, Severity)> {
    conflicts.iter().map(|c| (c.category(), c.severity())).collect()
}

// =============================================================================
// Detection Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Invariant: a group of zero or one members has nobody to disagree with.
    #[test]
    fn lone_members_never_conflict(member in arb_member()) {
        let detector = ConflictDetector::default();
        prop_assert!(detector.detect(&[], &[]).is_empty());
        prop_assert!(detector.detect(&[member], &[]).is_empty());
    }

    /// Invariant: re-running detection without member changes returns the
    /// same conflict set.
    #[test]
    fn detection_is_idempotent(members in prop::collection::vec(arb_member(), 2..6)) {
        let detector = ConflictDetector::default();
        let first = detector.detect(&members, &[]);
        let second = detector.detect(&members, &first);
        prop_assert_eq!(first, second);
    }

    /// Invariant: the order members joined in never changes which rules
    /// fire or how severe they are.
    #[test]
    fn member_order_does_not_change_conflicts(members in prop::collection::vec(arb_member(), 2..6)) {
        let detector = ConflictDetector::default();
        let forward = detector.detect(&members, &[]);

        let mut reversed = members.clone();
        reversed.reverse();
        let backward = detector.detect(&reversed, &[]);

        prop_assert_eq!(
            categories_and_severities(&forward),
            categories_and_severities(&backward)
        );
    }

    /// Invariant: every category appears at most once per run.
    #[test]
    fn each_category_fires_at_most_once(members in prop::collection::vec(arb_member(), 2..8)) {
        let detector = ConflictDetector::default();
        let conflicts = detector.detect(&members, &[]);

        let mut categories: Vec<ConflictCategory> =
            conflicts.iter().map(|c| c.category()).collect();
        let before = categories.len();
        categories.dedup();
        prop_assert_eq!(before, categories.len());
    }

    /// Invariant: with unchanged members, a resolution recorded on any
    /// conflict survives the next detection run.
    #[test]
    fn resolutions_carry_over_stable_reruns(members in prop::collection::vec(arb_member(), 2..6)) {
        let detector = ConflictDetector::default();
        let mut conflicts = detector.detect(&members, &[]);
        for conflict in &mut conflicts {
            conflict.resolve("Settled by the group".to_string()).unwrap();
        }

        let rerun = detector.detect(&members, &conflicts);

        prop_assert_eq!(rerun.len(), conflicts.len());
        for conflict in &rerun {
            prop_assert!(conflict.is_resolved());
            prop_assert_eq!(conflict.resolution(), Some("Settled by the group"));
        }
    }

    /// Invariant: a tenfold budget gap between two members always fires
    /// the budget rule at high severity, whoever else is in the group.
    #[test]
    fn extreme_budget_gap_always_fires_high(
        others in prop::collection::vec(arb_member(), 0..4)
    ) {
        let frugal = Member::new(
            MemberId::new(),
            "frugal".to_string(),
            BudgetRange::new(100, 100).unwrap(),
            vec![],
            vec![],
            CrowdTolerance::Okay,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec![],
            vec![],
            None,
        )
        .unwrap();
        let lavish = Member::new(
            MemberId::new(),
            "lavish".to_string(),
            BudgetRange::new(10000, 10000).unwrap(),
            vec![],
            vec![],
            CrowdTolerance::Okay,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec![],
            vec![],
            None,
        )
        .unwrap();

        let mut members = vec![frugal, lavish];
        members.extend(others);

        let detector = ConflictDetector::default();
        let conflicts = detector.detect(&members, &[]);
        let budget = conflicts
            .iter()
            .find(|c| c.category() == ConflictCategory::Budget);

        prop_assert!(budget.is_some());
        prop_assert_eq!(budget.unwrap().severity(), Severity::High);
    }
}

// =============================================================================
// Aggregation Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Invariant: aggregation covers exactly the member list.
    #[test]
    fn aggregation_totals_match_members(members in prop::collection::vec(arb_member(), 1..8)) {
        let aggregated = PreferenceAggregator::aggregate(&members).unwrap();

        prop_assert_eq!(aggregated.member_count(), members.len());
        prop_assert_eq!(aggregated.crowd_distribution().total(), members.len());

        let lowest = members
            .iter()
            .map(|m| m.budget().midpoint())
            .fold(f64::INFINITY, f64::min);
        let highest = members
            .iter()
            .map(|m| m.budget().midpoint())
            .fold(f64::NEG_INFINITY, f64::max);
        let average = aggregated.budget_average() as f64;
        prop_assert!(average >= lowest.floor() && average <= highest.ceil());
    }

    /// Invariant: activity counts are sorted most popular first and never
    /// exceed the group size.
    #[test]
    fn activity_counts_are_ranked(members in prop::collection::vec(arb_member(), 1..8)) {
        let aggregated = PreferenceAggregator::aggregate(&members).unwrap();

        let counts = aggregated.activity_counts();
        for pair in counts.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for activity in counts {
            prop_assert!(activity.count <= members.len());
        }
    }

    /// Invariant: an empty group cannot be aggregated.
    #[test]
    fn empty_group_aggregation_fails(_seed in 0u8..1) {
        prop_assert!(PreferenceAggregator::aggregate(&[]).is_err());
    }
}
