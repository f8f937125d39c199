use std::collections::HashSet;

use crate::server::error::license::LicenseError;

/// The fixed set of users allowed to administer keys and run bot text commands.
///
/// Built once from configuration and shared by every command handler. The check is a
/// plain membership test so it can be exercised without any chat gateway.
#[derive(Debug, Clone)]
pub struct Operators {
    ids: HashSet<u64>,
    /// Configured order, first entry is the operator mentioned on new tickets.
    ordered: Vec<u64>,
}

impl Operators {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut ordered = Vec::new();
        let mut set = HashSet::new();
        for id in ids {
            if set.insert(id) {
                ordered.push(id);
            }
        }

        Self { ids: set, ordered }
    }

    pub fn is_operator(&self, user_id: u64) -> bool {
        self.ids.contains(&user_id)
    }

    /// Requires `user_id` to be an operator.
    ///
    /// # Returns
    /// - `Ok(())` - Caller is an operator
    /// - `Err(LicenseError::Forbidden)` - Caller is not an operator
    pub fn require(&self, user_id: u64) -> Result<(), LicenseError> {
        if self.is_operator(user_id) {
            return Ok(());
        }

        tracing::warn!("User {} attempted an operator-only action", user_id);

        Err(LicenseError::Forbidden)
    }

    /// Operator ids in configured order.
    pub fn ids(&self) -> &[u64] {
        &self.ordered
    }

    /// First configured operator.
    pub fn primary(&self) -> Option<u64> {
        self.ordered.first().copied()
    }
}
