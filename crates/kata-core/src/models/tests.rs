//! Tests for the data model types.

use super::*;
use std::str::FromStr;

#[test]
fn test_activity_status_round_trip() {
    for status in [
        ActivityStatus::Locked,
        ActivityStatus::Current,
        ActivityStatus::Completed,
    ] {
        let parsed = ActivityStatus::from_str(status.as_str()).expect("Failed to parse status");
        assert_eq!(parsed, status);
    }
    assert!(ActivityStatus::from_str("done").is_err());
}

#[test]
fn test_activity_status_icons() {
    assert_eq!(ActivityStatus::Completed.with_icon(), "✓ Completed");
    assert_eq!(ActivityStatus::Current.with_icon(), "➤ Current");
    assert_eq!(ActivityStatus::Locked.with_icon(), "🔒 Locked");
}

#[test]
fn test_build_status_defaults_to_ok() {
    assert_eq!(BuildStatus::default(), BuildStatus::Ok);
    assert_eq!(BuildStatus::Broken.with_icon(), "🔴 BROKEN");
}

#[test]
fn test_activity_kind_serde_tagging() {
    let activity = Activity {
        id: "act-x".to_string(),
        lesson_id: "lesson-1".to_string(),
        order: 1,
        title: "Spot the Bug".to_string(),
        objective: "Find it".to_string(),
        instructions: "Read the snippet.".to_string(),
        target_files: vec![],
        status: ActivityStatus::Current,
        kind: ActivityKind::ReadAndChoose {
            snippet: "let x = 1;".to_string(),
            choices: vec![ChoiceOption {
                id: "c1".to_string(),
                description: "It binds x".to_string(),
            }],
            correct_choice: "c1".to_string(),
        },
    };

    let json = serde_json::to_value(&activity).expect("Failed to serialize");
    assert_eq!(json["kind"], "read_and_choose");
    assert_eq!(json["status"], "current");

    let back: Activity = serde_json::from_value(json).expect("Failed to deserialize");
    assert_eq!(back, activity);
}

#[test]
fn test_missing_video_payload_is_flagged() {
    let activity = Activity {
        id: "act-v".to_string(),
        lesson_id: "lesson-1".to_string(),
        order: 5,
        title: "Fetch on Mount".to_string(),
        objective: String::new(),
        instructions: String::new(),
        target_files: vec!["src/a.tsx".to_string()],
        status: ActivityStatus::Locked,
        kind: ActivityKind::VideoChallenge {
            starter_code: String::new(),
            video: None,
        },
    };

    let err = activity.ensure_payload().unwrap_err();
    assert!(matches!(
        err,
        crate::SessionError::MissingPayload { ref activity_id, .. } if activity_id == "act-v"
    ));

    let with_video = Activity {
        kind: ActivityKind::VideoChallenge {
            starter_code: String::new(),
            video: Some(VideoRef {
                video_id: "vid-1".to_string(),
                title: "Data fetching".to_string(),
                duration: "10:38".to_string(),
            }),
        },
        ..activity
    };
    assert!(with_video.ensure_payload().is_ok());
}

#[test]
fn test_project_update_file_guards_unknown_paths() {
    let mut project = ProjectState {
        id: "p1".to_string(),
        name: "BoxShop".to_string(),
        status: BuildStatus::Ok,
        files: vec![ProjectFile {
            path: "src/App.tsx".to_string(),
            name: "App.tsx".to_string(),
            language: "typescript".to_string(),
            content: "old".to_string(),
        }],
        decisions: vec![],
    };

    assert!(project.update_file("src/App.tsx", "new"));
    assert_eq!(project.file("src/App.tsx").map(|f| f.content.as_str()), Some("new"));

    assert!(!project.update_file("src/Missing.tsx", "x"));
    assert_eq!(project.files.len(), 1);
}

#[test]
fn test_git_entry_kind_round_trip() {
    for kind in [
        GitEntryKind::ActivityComplete,
        GitEntryKind::Decision,
        GitEntryKind::Fix,
    ] {
        let parsed = GitEntryKind::from_str(kind.as_str()).expect("Failed to parse kind");
        assert_eq!(parsed, kind);
    }
}

#[test]
fn test_state_management_option_mapping() {
    assert_eq!(
        StateManagement::from_option_id("opt-context"),
        Some(StateManagement::Context)
    );
    assert_eq!(
        StateManagement::from_option_id("opt-zustand"),
        Some(StateManagement::Zustand)
    );
    assert_eq!(
        StateManagement::from_option_id("opt-localstorage"),
        Some(StateManagement::LocalStorage)
    );
    assert_eq!(StateManagement::from_option_id("opt-redux"), None);
}
