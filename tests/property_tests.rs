use fitmatch::core::{MatchScorer, DEFAULT_MAX_DISTANCE_M};
use fitmatch::models::{FitnessLevel, Location, Profile, WorkoutStyle};
use proptest::prelude::*;

// --- STRATEGIES ---

const ACTIVITIES: &[&str] = &["Yoga", "Pilates", "Running", "Weight Training", "Tennis", "Swimming", "Cycling"];
const SLOTS: &[&str] = &["Weekdays", "Weekends", "Morning", "Afternoons", "Evenings"];
const GOALS: &[&str] = &["Weight Loss", "Stay Active", "Weight Lifter", "Get Ripped"];

fn arb_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(pool, 0..=pool.len())
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn arb_level() -> impl Strategy<Value = Option<FitnessLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(FitnessLevel::Beginner)),
        Just(Some(FitnessLevel::Intermediate)),
        Just(Some(FitnessLevel::Advanced)),
    ]
}

fn arb_style() -> impl Strategy<Value = Option<WorkoutStyle>> {
    prop_oneof![
        Just(None),
        Just(Some(WorkoutStyle::PushingIt)),
        Just(Some(WorkoutStyle::Recreational)),
    ]
}

prop_compose! {
    fn arb_profile()(
        id in "[a-z]{1,8}",
        located in any::<bool>(),
        lat in -1.0..1.0f64,
        lon in -1.0..1.0f64,
        fitness_level in arb_level(),
        preferences in arb_subset(ACTIVITIES),
        availability in arb_subset(SLOTS),
        workout_style in arb_style(),
        fitness_goals in arb_subset(GOALS)
    ) -> Profile {
        Profile {
            id,
            name: None,
            location: if located { Location::new(lat, lon) } else { None },
            fitness_level,
            preferences,
            availability,
            workout_style,
            fitness_goals,
        }
    }
}

proptest! {
    #[test]
    fn score_is_within_unit_range(requester in arb_profile(), candidate in arb_profile()) {
        let score = MatchScorer::with_default_weights().score(&requester, &candidate);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn rank_keeps_every_candidate(
        requester in arb_profile(),
        pool in proptest::collection::vec(arb_profile(), 0..40)
    ) {
        let ranked = MatchScorer::with_default_weights().rank(&requester, pool.clone());

        prop_assert_eq!(ranked.len(), pool.len());
        let mut in_ids: Vec<String> = pool.iter().map(|p| p.id.clone()).collect();
        let mut out_ids: Vec<String> = ranked.iter().map(|m| m.candidate.id.clone()).collect();
        in_ids.sort();
        out_ids.sort();
        prop_assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn rank_is_sorted_stable_and_idempotent(
        requester in arb_profile(),
        pool in proptest::collection::vec(arb_profile(), 0..40)
    ) {
        let scorer = MatchScorer::with_default_weights();
        let indexed: Vec<Profile> = pool
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| { p.id = i.to_string(); p })
            .collect();

        let first = scorer.rank(&requester, indexed.clone());
        let second = scorer.rank(&requester, indexed);

        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].candidate.id.parse().unwrap();
                let b: usize = pair[1].candidate.id.parse().unwrap();
                prop_assert!(a < b, "tie broke input order");
            }
        }

        let first_ids: Vec<&str> = first.iter().map(|m| m.candidate.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|m| m.candidate.id.as_str()).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn disjoint_and_out_of_range_scores_zero(requester in arb_profile()) {
        let requester = Profile {
            location: Location::new(0.0, 0.0),
            ..requester
        };
        let candidate = Profile {
            id: "other".to_string(),
            name: None,
            // ~111km from the requester
            location: Location::new(1.0, 0.0),
            fitness_level: match requester.fitness_level {
                Some(FitnessLevel::Beginner) => Some(FitnessLevel::Advanced),
                _ => Some(FitnessLevel::Beginner),
            },
            preferences: vec!["Rock Climbing".to_string()],
            availability: vec!["Midnight".to_string()],
            workout_style: match requester.workout_style {
                Some(WorkoutStyle::Recreational) => Some(WorkoutStyle::PushingIt),
                _ => Some(WorkoutStyle::Recreational),
            },
            fitness_goals: vec!["Marathon".to_string()],
        };

        let scorer = MatchScorer::with_default_weights();
        prop_assert!(scorer.max_distance_m() == DEFAULT_MAX_DISTANCE_M);
        prop_assert_eq!(scorer.score(&requester, &candidate), 0.0);
    }
}
