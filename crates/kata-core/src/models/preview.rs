//! Derived preview of the mock storefront at a point in the timeline.

use serde::{Deserialize, Serialize};

/// Visual style of the storefront header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Unstyled placeholder header
    #[default]
    Basic,

    /// Header after the quality-review activity lands
    Styled,
}

/// Visual style of the storefront product cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    /// Unoptimized cards
    #[default]
    Basic,

    /// Cards after the constrained-edit optimization lands
    Enhanced,
}

/// State-management approach in effect, resolved from the decision log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    /// No cart state wired up yet
    #[default]
    None,

    /// React context + reducer
    Context,

    /// Zustand store
    Zustand,

    /// LocalStorage-backed custom hook
    LocalStorage,
}

impl StateManagement {
    /// Maps a decision-fork option id to an approach.
    pub fn from_option_id(id: &str) -> Option<Self> {
        match id {
            "opt-context" => Some(StateManagement::Context),
            "opt-zustand" => Some(StateManagement::Zustand),
            "opt-localstorage" => Some(StateManagement::LocalStorage),
            _ => None,
        }
    }
}

/// Snapshot of the mock storefront's visible state at a timeline point.
///
/// This is a derived value, recomputed on every read from (viewing index,
/// completed activity indices, decision log). It is never stored;
/// identical inputs always yield an identical snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PreviewState {
    /// Header styling in effect
    pub header_style: HeaderStyle,

    /// Product card styling in effect
    pub card_style: CardStyle,

    /// Cart state-management approach in effect
    pub state_management: StateManagement,

    /// Whether the checkout flow works at this point
    pub checkout_working: bool,

    /// Number of items in the simulated cart
    pub cart_count: u32,

    /// One-shot caption for the most recently crossed upgrade, if the
    /// viewing index sits exactly on that threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_badge: Option<String>,
}
