//! Role-based command gate.
//!
//! Binary allow/deny: the caller either holds the configured role in the guild
//! the command came from, or is refused. Interactions from DMs carry no roles
//! and are always refused.

use tracing::debug;

use crate::error::BotError;
use crate::interaction::Caller;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    role_id: String,
    role_name: String,
}

impl RoleGate {
    pub fn new(role_id: impl Into<String>, role_name: impl Into<String>) -> Self {
        RoleGate {
            role_id: role_id.into(),
            role_name: role_name.into(),
        }
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn allows(&self, caller: &Caller) -> bool {
        caller.in_guild && caller.role_ids.iter().any(|id| *id == self.role_id)
    }

    pub fn check(&self, caller: &Caller) -> Result<(), BotError> {
        if self.allows(caller) {
            return Ok(());
        }

        debug!(
            user_id = %caller.user_id,
            in_guild = caller.in_guild,
            role = %self.role_name,
            "Caller lacks required role"
        );
        Err(BotError::PermissionDenied {
            role: self.role_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(roles: &[&str], in_guild: bool) -> Caller {
        Caller {
            user_id: "555".to_string(),
            username: "alice".to_string(),
            role_ids: roles.iter().map(|r| r.to_string()).collect(),
            in_guild,
        }
    }

    #[test]
    fn test_member_with_role_is_allowed() {
        let gate = RoleGate::new("42", "Paid Sainsburys");
        assert!(gate.check(&caller(&["7", "42"], true)).is_ok());
    }

    #[test]
    fn test_member_without_role_is_denied() {
        let gate = RoleGate::new("42", "Paid Sainsburys");
        let err = gate.check(&caller(&["7"], true)).unwrap_err();
        assert!(matches!(err, BotError::PermissionDenied { role } if role == "Paid Sainsburys"));
    }

    #[test]
    fn test_dm_is_denied_even_with_matching_ids() {
        let gate = RoleGate::new("42", "Paid Sainsburys");
        assert!(!gate.allows(&caller(&["42"], false)));
    }
}
