//! The time-travel preview calculator.
//!
//! Derives what the mock storefront looks like at any viewed position
//! from two inputs only: the set of completed activity indices and the
//! recorded decisions. Nothing here mutates the session; scrubbing
//! backwards through the lesson renders earlier previews without
//! rewinding any state.

use crate::models::{CardStyle, Decision, HeaderStyle, PreviewState, StateManagement};

use std::collections::BTreeSet;

/// Upgrade table: completing the activity at `trigger` upgrades the
/// preview for every viewed position from `trigger + 1` onward. The
/// badge only shows on the position right after the trigger, where the
/// upgrade is news.
struct Upgrade {
    trigger: usize,
    badge: &'static str,
    apply: fn(&mut PreviewState, &[Decision]),
}

const UPGRADES: &[Upgrade] = &[
    Upgrade {
        trigger: 0,
        badge: "✨ Header updated",
        apply: |preview, _| preview.header_style = HeaderStyle::Styled,
    },
    Upgrade {
        trigger: 1,
        badge: "⚡ Performance optimized",
        apply: |preview, _| preview.card_style = CardStyle::Enhanced,
    },
    Upgrade {
        trigger: 2,
        badge: "🗄️ State management live",
        apply: |preview, decisions| {
            preview.state_management = chosen_state_management(decisions);
            preview.cart_count = 2;
        },
    },
    Upgrade {
        trigger: 3,
        badge: "✅ Checkout working",
        apply: |preview, _| {
            preview.checkout_working = true;
            preview.cart_count = 3;
        },
    },
];

/// Computes the preview for the given viewed position.
///
/// Pure over its inputs; calling it for every position in turn yields
/// the full time-travel strip.
pub(crate) fn compute_preview(
    view_index: usize,
    completed: &BTreeSet<usize>,
    decisions: &[Decision],
) -> PreviewState {
    let mut preview = PreviewState::default();

    for upgrade in UPGRADES {
        if completed.contains(&upgrade.trigger) && view_index > upgrade.trigger {
            (upgrade.apply)(&mut preview, decisions);
            if view_index == upgrade.trigger + 1 {
                preview.update_badge = Some(upgrade.badge.to_string());
            }
        }
    }

    preview
}

/// Reads the state-management choice out of the decision log: the first
/// recognizable option wins. Defaults to Zustand when the fork was
/// resolved without a recognizable option.
fn chosen_state_management(decisions: &[Decision]) -> StateManagement {
    decisions
        .iter()
        .filter_map(|d| d.choice.as_deref())
        .find_map(StateManagement::from_option_id)
        .unwrap_or(StateManagement::Zustand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn decision(choice: &str) -> Decision {
        Decision {
            activity_id: "act-3".to_string(),
            activity_title: "Choose State Management".to_string(),
            choice: Some(choice.to_string()),
            timestamp: Timestamp::UNIX_EPOCH,
            description: String::new(),
        }
    }

    #[test]
    fn test_no_completions_yields_default_preview() {
        let preview = compute_preview(0, &BTreeSet::new(), &[]);
        assert_eq!(preview, PreviewState::default());
        let preview = compute_preview(5, &BTreeSet::new(), &[]);
        assert_eq!(preview, PreviewState::default());
    }

    #[test]
    fn test_upgrade_requires_viewing_past_the_trigger() {
        let completed = BTreeSet::from([0]);
        // Looking at the trigger itself: still the "before" preview.
        let preview = compute_preview(0, &completed, &[]);
        assert_eq!(preview.header_style, HeaderStyle::Basic);
        // One past the trigger: upgraded, with the badge.
        let preview = compute_preview(1, &completed, &[]);
        assert_eq!(preview.header_style, HeaderStyle::Styled);
        assert_eq!(preview.update_badge.as_deref(), Some("✨ Header updated"));
    }

    #[test]
    fn test_badge_only_on_position_right_after_trigger() {
        let completed = BTreeSet::from([0]);
        let preview = compute_preview(2, &completed, &[]);
        assert_eq!(preview.header_style, HeaderStyle::Styled);
        assert_eq!(preview.update_badge, None);
    }

    #[test]
    fn test_later_badge_wins_when_several_triggers_fire() {
        let completed = BTreeSet::from([0, 1]);
        let preview = compute_preview(2, &completed, &[]);
        assert_eq!(preview.header_style, HeaderStyle::Styled);
        assert_eq!(preview.card_style, CardStyle::Enhanced);
        assert_eq!(
            preview.update_badge.as_deref(),
            Some("⚡ Performance optimized")
        );
    }

    #[test]
    fn test_state_management_follows_recorded_decision() {
        let completed = BTreeSet::from([0, 1, 2]);
        let decisions = vec![decision("opt-context")];
        let preview = compute_preview(3, &completed, &decisions);
        assert_eq!(preview.state_management, StateManagement::Context);
        assert_eq!(preview.cart_count, 2);
        assert_eq!(
            preview.update_badge.as_deref(),
            Some("🗄️ State management live")
        );
    }

    #[test]
    fn test_first_recognizable_choice_wins() {
        let completed = BTreeSet::from([0, 1, 2]);
        let decisions = vec![decision("opt-context"), decision("opt-zustand")];
        let preview = compute_preview(3, &completed, &decisions);
        assert_eq!(preview.state_management, StateManagement::Context);
    }

    #[test]
    fn test_state_management_defaults_to_zustand() {
        let completed = BTreeSet::from([0, 1, 2]);
        let preview = compute_preview(3, &completed, &[]);
        assert_eq!(preview.state_management, StateManagement::Zustand);
    }

    #[test]
    fn test_all_complete_full_preview() {
        let completed = BTreeSet::from([0, 1, 2, 3, 4, 5]);
        let decisions = vec![decision("opt-zustand")];
        let preview = compute_preview(5, &completed, &decisions);
        assert_eq!(preview.header_style, HeaderStyle::Styled);
        assert_eq!(preview.card_style, CardStyle::Enhanced);
        assert_eq!(preview.state_management, StateManagement::Zustand);
        assert!(preview.checkout_working);
        assert_eq!(preview.cart_count, 3);
        assert_eq!(preview.update_badge, None);
    }

    #[test]
    fn test_scrubbing_back_rewinds_the_preview() {
        let completed = BTreeSet::from([0, 1, 2, 3]);
        // Viewing position 1 again only shows the first upgrade.
        let preview = compute_preview(1, &completed, &[]);
        assert_eq!(preview.header_style, HeaderStyle::Styled);
        assert_eq!(preview.card_style, CardStyle::Basic);
        assert!(!preview.checkout_working);
        assert_eq!(preview.cart_count, 0);
    }
}
