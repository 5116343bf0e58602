//! Core State trait for game statuses.
//!
//! Every status the session engine can be in implements this trait, which
//! exposes pure inspection methods used by guards, history and snapshots.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for session statuses.
///
/// All methods are pure. A status is a plain value describing where a round
/// currently stands; the engine owns the data that goes with it.
///
/// # Required Traits
///
/// - `Clone`: statuses are copied into history records
/// - `PartialEq`: guards compare statuses
/// - `Debug`: statuses show up in logs
/// - `Serialize` + `Deserialize`: snapshots and history are serializable
///
/// # Example
///
/// ```rust
/// use guesswork::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Guessing,
///     Revealed,
///     Over,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Guessing => "Guessing",
///             Self::Revealed => "Revealed",
///             Self::Over => "Over",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Over)
///     }
/// }
///
/// assert!(Phase::Over.is_final());
/// assert!(!Phase::Guessing.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and history dumps.
    fn name(&self) -> &str;

    /// Whether the session can no longer change once it reaches this status.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this status represents a failed round.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum RoundPhase {
        Guessing,
        Solved,
        Finished,
        Abandoned,
    }

    impl State for RoundPhase {
        fn name(&self) -> &str {
            match self {
                Self::Guessing => "Guessing",
                Self::Solved => "Solved",
                Self::Finished => "Finished",
                Self::Abandoned => "Abandoned",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Finished | Self::Abandoned)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Abandoned)
        }
    }

    #[test]
    fn default_flags_are_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Only;

        impl State for Only {
            fn name(&self) -> &str {
                "Only"
            }
        }

        assert!(!Only.is_final());
        assert!(!Only.is_error());
    }

    #[test]
    fn overridden_flags_are_respected() {
        assert!(!RoundPhase::Guessing.is_final());
        assert!(!RoundPhase::Solved.is_final());
        assert!(RoundPhase::Finished.is_final());
        assert!(RoundPhase::Abandoned.is_error());
        assert!(!RoundPhase::Finished.is_error());
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(RoundPhase::Guessing.name(), "Guessing");
        assert_eq!(RoundPhase::Abandoned.name(), "Abandoned");
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&RoundPhase::Solved).unwrap();
        let back: RoundPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoundPhase::Solved);
    }
}
