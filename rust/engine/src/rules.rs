use crate::errors::GameError;
use crate::game::Snapshot;
use crate::player::Action as A;

/// Validates a decision against the table as `snapshot` sees it.
///
/// This is the orchestrator-side legality check the engine's primitives
/// deliberately leave out. Returns the action to execute, which may differ
/// from the request: a call or raise that needs the whole stack becomes
/// [`A::AllIn`].
///
/// Raise rules: the target must be at least the big blind, at least
/// `snapshot.min_raise` (double the current bet) and at most
/// `snapshot.max_raise` (what the opponent can still match).
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - checking while chips are owed
/// - [`GameError::InvalidRaise`] - raise target outside the legal window
///
/// # Examples
///
/// ```
/// use headsup_engine::config::TableConfig;
/// use headsup_engine::engine::Engine;
/// use headsup_engine::errors::GameError;
/// use headsup_engine::player::Action;
/// use headsup_engine::rules::validate_action;
///
/// let mut engine = Engine::new(&TableConfig { seed: Some(1), ..TableConfig::default() }).unwrap();
/// engine.new_round().unwrap();
/// engine.post_blinds().unwrap();
/// let snap = engine.snapshot(engine.button()).unwrap();
///
/// assert_eq!(validate_action(&snap, Action::Call), Ok(Action::Call));
/// assert!(matches!(
///     validate_action(&snap, Action::Raise(15)),
///     Err(GameError::InvalidRaise { .. })
/// ));
/// assert!(matches!(
///     validate_action(&snap, Action::Check),
///     Err(GameError::CannotCheck { to_call: 5 })
/// ));
/// ```
pub fn validate_action(snapshot: &Snapshot, action: A) -> Result<A, GameError> {
    let total = snapshot.total_chips();
    match action {
        A::Fold => Ok(A::Fold),
        A::Check => {
            if snapshot.to_call == 0 {
                Ok(A::Check)
            } else {
                Err(GameError::CannotCheck {
                    to_call: snapshot.to_call,
                })
            }
        }
        A::Call => {
            if total <= snapshot.current_bet {
                Ok(A::AllIn)
            } else {
                Ok(A::Call)
            }
        }
        A::Raise(amount) => {
            let minimum = snapshot.min_raise.max(snapshot.big_blind);
            let maximum = snapshot.max_raise;
            if amount < minimum || amount > maximum {
                return Err(GameError::InvalidRaise {
                    amount,
                    minimum,
                    maximum,
                });
            }
            if amount >= total {
                Ok(A::AllIn)
            } else {
                Ok(A::Raise(amount))
            }
        }
        A::AllIn => Ok(A::AllIn),
    }
}
