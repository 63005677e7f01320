use anchor_lang::prelude::*;

pub const VERIFIER_SEED: &str = "verifier";

/// Allow-list marker for an authorized verifier, one PDA per identity.
#[account]
#[derive(Default, Debug)]
pub struct VerifierInfo {
    pub bump: u8,
    pub authority: Pubkey,
    pub active: bool,
}

impl VerifierInfo {
    pub const LEN: usize = 8 + 1 + 32 + 1;
}

/// Single authorization predicate for verifier-gated operations: the
/// protocol admin always passes, anyone else needs an active marker for
/// their own key.
pub fn verifier_allowed(signer: &Pubkey, admin: &Pubkey, marker: Option<&VerifierInfo>) -> bool {
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
        assert!(verifier_allowed(&admin, &admin, None));
    }

    #[test]
    fn marker_must_be_active_and_match() {
        let admin = Pubkey::new_unique();
        let verifier = Pubkey::new_unique();
        let mut marker = VerifierInfo {
            bump: 255,
            authority: verifier,
            active: true,
        };
        assert!(verifier_allowed(&verifier, &admin, Some(&marker)));

        marker.active = false;
        assert!(!verifier_allowed(&verifier, &admin, Some(&marker)));

        marker.active = true;
        let impostor = Pubkey::new_unique();
        assert!(!verifier_allowed(&impostor, &admin, Some(&marker)));
        assert!(!verifier_allowed(&verifier, &admin, None));
    }
}
