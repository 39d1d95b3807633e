//! Behaviour state kinds

use serde::{Deserialize, Serialize};

/// The behaviour state of an organism, as reported by the server
///
/// Drives both the visual representation and the reconciliation rules:
/// a `Dead` organism is never materialized from an update that names an
/// unknown id, and the transition to `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    /// Idle but alive
    #[default]
    Alive,
    /// Moving toward food or a mate
    Seeking,
    /// Moving away from a threat
    Fleeing,
    /// Attacking a target organism
    Attacking,
    /// Defending against an attacker
    Defending,
    /// Consuming a target organism
    Consuming,
    /// Terminal state; removed from the live set on the next reconciliation pass
    Dead,
}

impl StateKind {
    /// Check if this is the terminal state
    pub fn is_dead(&self) -> bool {
        matches!(self, StateKind::Dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dead() {
        assert!(StateKind::Dead.is_dead());
        assert!(!StateKind::Seeking.is_dead());
        assert!(!StateKind::Alive.is_dead());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&StateKind::Attacking).unwrap();
        assert_eq!(json, "\"attacking\"");

        let kind: StateKind = serde_json::from_str("\"dead\"").unwrap();
        assert_eq!(kind, StateKind::Dead);
    }
}
