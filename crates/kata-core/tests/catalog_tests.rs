//! Integration tests over the public catalog and session API.

use kata_core::{
    Action, ActionEffect, ActivityStatus, Catalog, SessionBuilder, SessionError,
};

/// A minimal one-lesson catalog with a read-and-choose activity,
/// exercising the JSON loading path end to end.
fn quiz_catalog_json() -> String {
    serde_json::json!({
        "lessons": [{
            "id": "lesson-quiz",
            "title": "Reading React",
            "description": "Read real-world snippets and answer questions about them.",
            "project_name": "BoxShop",
            "total_activities": 2,
            "estimated_minutes": 10
        }],
        "activities": [
            {
                "id": "quiz-1",
                "lesson_id": "lesson-quiz",
                "order": 1,
                "title": "What does useMemo cache?",
                "objective": "Understand memoization",
                "instructions": "Read the snippet and pick the correct answer.",
                "status": "current",
                "kind": "read_and_choose",
                "snippet": "const total = useMemo(() => items.reduce((a, b) => a + b.price, 0), [items]);",
                "choices": [
                    {"id": "a", "description": "The reduce callback"},
                    {"id": "b", "description": "The computed total, recomputed when items changes"}
                ],
                "correct_choice": "b"
            },
            {
                "id": "quiz-2",
                "lesson_id": "lesson-quiz",
                "order": 2,
                "title": "Approve the cleanup",
                "objective": "Review generated code",
                "instructions": "Approve or edit the refactor.",
                "target_files": ["src/App.tsx"],
                "status": "locked",
                "kind": "quality_review",
                "generated_code": "export default function App() { return null; }"
            }
        ],
        "project": {
            "id": "proj-quiz",
            "name": "BoxShop",
            "status": "ok",
            "files": [{
                "path": "src/App.tsx",
                "name": "App.tsx",
                "language": "typescript",
                "content": "export default function App() {}"
            }]
        },
        "seed_commit": {
            "activity_id": "setup",
            "message": "feat: initial scaffold",
            "files_changed": ["src/App.tsx"],
            "kind": "activity_complete"
        },
        "feedback": {
            "read-choose.success": {"message": "Exactly right.", "is_success": true},
            "read-choose.failure": {"message": "Not quite.", "is_success": false},
            "default.success": {"message": "Done.", "is_success": true},
            "default.failure": {"message": "Try again.", "is_success": false}
        }
    })
    .to_string()
}

#[test]
fn test_catalog_loads_from_json_and_runs() {
    let catalog = Catalog::from_json(&quiz_catalog_json()).expect("Failed to load catalog");
    let mut session = SessionBuilder::new()
        .with_catalog(catalog)
        .with_lesson("lesson-quiz")
        .build()
        .expect("Failed to build session");

    // Wrong answer first: costs a life, no progression.
    let effect = session
        .apply_action(
            "quiz-1",
            Action::Decide {
                option_id: "a".to_string(),
            },
        )
        .expect("Failed to apply action");
    match effect {
        ActionEffect::Resolved(outcome) => {
            assert!(!outcome.is_success);
            assert_eq!(outcome.feedback_text, "Not quite.");
        }
        ActionEffect::Feedback { .. } => panic!("expected a verdict"),
    }
    assert_eq!(session.lives(), kata_core::DEFAULT_LIVES - 1);
    assert_eq!(session.activities()[0].status, ActivityStatus::Current);

    // Correct answer completes the activity and unlocks the next.
    let effect = session
        .apply_action(
            "quiz-1",
            Action::Decide {
                option_id: "b".to_string(),
            },
        )
        .expect("Failed to apply action");
    match effect {
        ActionEffect::Resolved(outcome) => {
            assert!(outcome.is_success);
            assert_eq!(outcome.feedback_text, "Exactly right.");
        }
        ActionEffect::Feedback { .. } => panic!("expected a verdict"),
    }
    assert_eq!(session.activities()[1].status, ActivityStatus::Current);
    assert_eq!(session.project().decisions.len(), 1);
}

#[test]
fn test_catalog_rejects_gapped_orders() {
    let json = quiz_catalog_json().replace("\"order\":2", "\"order\":3");
    let err = Catalog::from_json(&json).unwrap_err();
    assert!(matches!(err, SessionError::Catalog { .. }));
}

#[test]
fn test_catalog_rejects_malformed_json() {
    let err = Catalog::from_json("{not json").unwrap_err();
    assert!(matches!(err, SessionError::Serialization { .. }));
}

#[test]
fn test_submit_without_video_reference_is_an_error() {
    let json = serde_json::json!({
        "lessons": [{
            "id": "lesson-v",
            "title": "Video lesson",
            "description": "One video challenge with a missing reference.",
            "project_name": "BoxShop",
            "total_activities": 1,
            "estimated_minutes": 5
        }],
        "activities": [{
            "id": "vid-1",
            "lesson_id": "lesson-v",
            "order": 1,
            "title": "Apply the pattern",
            "objective": "Use useMemo",
            "instructions": "Watch, then submit.",
            "target_files": ["src/App.tsx"],
            "status": "current",
            "kind": "video_challenge",
            "starter_code": "export default function App() {}"
        }],
        "project": {
            "id": "proj-v",
            "name": "BoxShop",
            "status": "ok",
            "files": [{
                "path": "src/App.tsx",
                "name": "App.tsx",
                "language": "typescript",
                "content": ""
            }]
        },
        "seed_commit": {
            "activity_id": "setup",
            "message": "feat: initial scaffold",
            "files_changed": [],
            "kind": "activity_complete"
        },
        "feedback": {}
    })
    .to_string();

    let catalog = Catalog::from_json(&json).expect("Failed to load catalog");
    let mut session = SessionBuilder::new()
        .with_catalog(catalog)
        .build()
        .expect("Failed to build session");

    let err = session
        .apply_action(
            "vid-1",
            Action::Submit {
                code: "useMemo(() => 1, [])".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::MissingPayload { .. }));

    // The failed configuration never counts as an attempt.
    assert_eq!(session.lives(), kata_core::DEFAULT_LIVES);
    assert_eq!(session.xp(), 0);
}

#[test]
fn test_builtin_catalog_round_trips() {
    let catalog = Catalog::builtin();
    let json = catalog.to_json().expect("Failed to serialize");
    let back = Catalog::from_json(&json).expect("Failed to reload");
    assert_eq!(back.lessons[0].id, catalog.lessons[0].id);
    assert_eq!(back.activities.len(), catalog.activities.len());
}
