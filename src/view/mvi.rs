//! Model-View-Intent primitives.
//!
//! Unidirectional data flow: intents describe what happened, a pure
//! reducer produces the next state, the view renders from state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for UI state objects.
///
/// States should be self-contained (everything the view needs to render)
/// and comparable (PartialEq for change detection).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
pub trait Intent {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
