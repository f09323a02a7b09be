// tests/classifier_properties.rs

use proptest::prelude::*;

use imapsync_runner::classify::{LineClass, ProgressTracker, SyncState, classify};

/// Lines that can never be markers: anything not starting with "++++ ".
fn non_marker_line() -> impl Strategy<Value = String> {
    "[^+][ -~]{0,40}"
}

fn any_state() -> impl Strategy<Value = Option<SyncState>> {
    prop_oneof![
        Just(None),
        Just(Some(SyncState::Started)),
        Just(Some(SyncState::Calculating)),
        Just(Some(SyncState::Listing)),
        Just(Some(SyncState::Syncing)),
        Just(Some(SyncState::Statistics)),
        "[A-Z]{1,8}".prop_map(|t| Some(SyncState::Other(t))),
    ]
}

proptest! {
    #[test]
    fn non_marker_lines_never_change_state(
        start in any_state(),
        lines in proptest::collection::vec(non_marker_line(), 0..50),
    ) {
        for line in &lines {
            let class = classify(line, start.as_ref());
            let is_transition = matches!(class, LineClass::Transition(_));
            prop_assert!(!is_transition);
        }
    }

    #[test]
    fn statistics_only_outside_markers_in_statistics_state(
        start in any_state(),
        line in non_marker_line(),
    ) {
        let class = classify(&line, start.as_ref());
        if let LineClass::Statistic { key, value } = class {
            prop_assert_eq!(start, Some(SyncState::Statistics));
            prop_assert!(line.contains(':'));
            prop_assert_eq!(key.trim(), key.as_str());
            prop_assert_eq!(value.trim(), value.as_str());
        }
    }

    #[test]
    fn derived_marker_state_is_uppercased_second_token(word in "[a-z]{1,12}") {
        let line = format!("++++ {word} something");
        let expected = SyncState::from_token(&word.to_uppercase());
        prop_assert_eq!(classify(&line, None), LineClass::Transition(expected));
    }

    #[test]
    fn last_statistic_write_wins(values in proptest::collection::vec(0u32..10_000, 1..20)) {
        let mut tracker = ProgressTracker::new();
        tracker.observe("++++ Statistics");
        for v in &values {
            tracker.observe(&format!("Folders: {v}"));
        }
        let expected = values.last().unwrap().to_string();
        prop_assert_eq!(tracker.statistics().get("Folders"), Some(&expected));
        prop_assert_eq!(tracker.statistics().len(), 1);
    }
}
