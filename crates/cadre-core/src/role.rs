//! UI role labels and the controls they expose.

use serde::{Deserialize, Serialize};

/// Which set of roster controls the interface offers.
///
/// A role is a label chosen on the opening screen, not a credential. It
/// gates what the presentation layer draws; the store itself is ungated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Administrator,
  Manager,
}

impl Role {
  /// Both roles may add employees.
  pub fn can_add(self) -> bool { true }

  /// Editing is reserved for administrators.
  pub fn can_edit(self) -> bool { matches!(self, Self::Administrator) }

  /// Deleting is reserved for administrators.
  pub fn can_delete(self) -> bool { matches!(self, Self::Administrator) }

  pub fn label(self) -> &'static str {
    match self {
      Self::Administrator => "Administrator",
      Self::Manager => "Manager",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Role;

  #[test]
  fn manager_can_only_add() {
    assert!(Role::Manager.can_add());
    assert!(!Role::Manager.can_edit());
    assert!(!Role::Manager.can_delete());
  }

  #[test]
  fn administrator_has_all_controls() {
    assert!(Role::Administrator.can_add());
    assert!(Role::Administrator.can_edit());
    assert!(Role::Administrator.can_delete());
  }
}
