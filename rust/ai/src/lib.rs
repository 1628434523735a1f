//! # headsup-ai: decision providers for heads-up hold'em
//!
//! A decision provider looks at a [`Snapshot`] of the table from its own seat
//! and answers with an [`Action`]. It never touches the engine; the
//! orchestrator validates the answer with
//! [`headsup_engine::rules::validate_action`] and executes it.
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_ai;
//! use headsup_engine::config::TableConfig;
//! use headsup_engine::engine::Engine;
//! use headsup_engine::rules::validate_action;
//!
//! let ai = create_ai("baseline").unwrap();
//!
//! let mut engine = Engine::new(&TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
//! engine.new_round().unwrap();
//! engine.post_blinds().unwrap();
//!
//! let seat = engine.current_action();
//! let snapshot = engine.snapshot(seat).unwrap();
//! let action = validate_action(&snapshot, ai.decide(&snapshot)).unwrap();
//! engine.apply_action(seat, action).unwrap();
//! ```

use headsup_engine::game::Snapshot;
use headsup_engine::player::Action;

pub mod baseline;

/// Something that can sit in a seat and make betting decisions.
///
/// # Example Implementation
///
/// ```rust
/// use headsup_ai::DecisionProvider;
/// use headsup_engine::game::Snapshot;
/// use headsup_engine::player::Action;
///
/// struct CallingStation;
///
/// impl DecisionProvider for CallingStation {
///     fn decide(&self, snapshot: &Snapshot) -> Action {
///         if snapshot.to_call == 0 { Action::Check } else { Action::Call }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait DecisionProvider: Send + Sync {
    /// Chooses the next action for the seat the snapshot was taken from.
    fn decide(&self, snapshot: &Snapshot) -> Action;

    fn name(&self) -> &str;
}

/// Builds a decision provider by kind, `None` for kinds this crate does not
/// know.
///
/// ```rust
/// use headsup_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(kind: &str) -> Option<Box<dyn DecisionProvider>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}
