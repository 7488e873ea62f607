use anchor_lang::prelude::*;

/// Phase of a source identity's migration request.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum MigrationState {
    #[default]
    NoRequest,
    Pushed,
}

/// Per-source migration record PDA: NoRequest -> Pushed -> NoRequest.
/// A re-push overwrites the destination; a matching pull consumes the
/// record.
#[account]
pub struct PendingMigration {
    pub state: MigrationState,
    pub destination: Pubkey,
}

impl PendingMigration {
    pub const SIZE: usize =
        1 +  // state
        32; // destination

    pub fn push(&mut self, destination: Pubkey) {
        self.state = MigrationState::Pushed;
        self.destination = destination;
    }

    /// True when `claimer` is the recorded destination of a live push.
    pub fn claimable_by(&self, claimer: &Pubkey) -> bool {
        self.state == MigrationState::Pushed && self.destination == *claimer
    }

    pub fn clear(&mut self) {
        self.state = MigrationState::NoRequest;
        self.destination = Pubkey::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_overwrites_and_pull_consumes() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        let mut m = PendingMigration {
            state: MigrationState::NoRequest,
            destination: Pubkey::default(),
        };
        assert!(!m.claimable_by(&a));

        m.push(a);
        assert!(m.claimable_by(&a));
        assert!(!m.claimable_by(&b));

        // Re-push replaces the target.
        m.push(b);
        assert!(!m.claimable_by(&a));
        assert!(m.claimable_by(&b));

        m.clear();
        assert_eq!(m.state, MigrationState::NoRequest);
        assert!(!m.claimable_by(&b));
    }
}
