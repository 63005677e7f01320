use anchor_lang::prelude::*;

pub const PARTNER_SEED: &str = "partner";

/// Allow-list marker for a corporate partner authorized to create and
/// fund pools, one PDA per identity.
#[account]
#[derive(Default, Debug)]
pub struct PartnerInfo {
    pub bump: u8,
    pub authority: Pubkey,
    pub active: bool,
    /// Display name surfaced to indexers/frontends.
    pub name: String,
}

impl PartnerInfo {
    pub const LEN: usize = 8 + 1 + 32 + 1 + (4 + crate::MAX_POOL_NAME_LEN);
}

/// Single authorization predicate for partner-gated operations: the vault
/// admin always passes, anyone else needs an active marker for their own
/// key.
pub fn partner_allowed(signer: &Pubkey, admin: &Pubkey, marker: Option<&PartnerInfo>) -> bool {
    if signer == admin || *signer == crate::admin::id() {
        return true;
    }
    marker.map_or(false, |m| m.active && m.authority == *signer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_always_passes() {
        let admin = Pubkey::new_unique();
        assert!(partner_allowed(&admin, &admin, None));
    }

    #[test]
    fn marker_must_be_active_and_match() {
        let admin = Pubkey::new_unique();
        let partner = Pubkey::new_unique();
        let mut marker = PartnerInfo {
            bump: 255,
            authority: partner,
            active: true,
            name: "Acme Recycling".to_string(),
        };
        assert!(partner_allowed(&partner, &admin, Some(&marker)));

        marker.active = false;
        assert!(!partner_allowed(&partner, &admin, Some(&marker)));

        let impostor = Pubkey::new_unique();
        marker.active = true;
        assert!(!partner_allowed(&impostor, &admin, Some(&marker)));
    }
}
