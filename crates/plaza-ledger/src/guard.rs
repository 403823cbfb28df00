//! The authorization guard.
//!
//! No record carries an access list. A mutating operation is authorized by
//! two checks instead:
//! - the stored owner identity matches the caller, and
//! - re-deriving the address from the record's own fields reproduces both
//!   the supplied address and the stored salt.
//!
//! Both failures collapse to [`LedgerError::Unauthorized`], so a rejected
//! caller learns nothing about the record beyond what the public
//! derivation scheme already reveals.

use plaza_crypto::AddressDeriver;
use plaza_types::{AuthorId, RecordAddress};

use crate::error::LedgerError;

/// Require that the record's stored owner is the caller.
pub fn check_owner(owner: &AuthorId, caller: &AuthorId) -> Result<(), LedgerError> {
    if owner != caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

/// Require that (address, salt) is exactly what deriving `components` in
/// `deriver`'s namespace produces.
///
/// Run before every close, so a record planted at a colliding slot by the
/// substrate can never be mutated through the ledger.
pub fn check_derivation(
    deriver: &AddressDeriver,
    components: &[&[u8]],
    address: &RecordAddress,
    salt: u8,
) -> Result<(), LedgerError> {
    if !deriver.verify(components, address, salt) {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_owner_passes() {
        let author = AuthorId::from_public_key(&[1u8; 32]);
        assert!(check_owner(&author, &author).is_ok());
    }

    #[test]
    fn mismatched_owner_is_unauthorized() {
        let owner = AuthorId::from_public_key(&[1u8; 32]);
        let intruder = AuthorId::from_public_key(&[2u8; 32]);
        assert_eq!(
            check_owner(&owner, &intruder).unwrap_err(),
            LedgerError::Unauthorized
        );
    }

    #[test]
    fn matching_derivation_passes() {
        let author = AuthorId::from_public_key(&[3u8; 32]);
        let components: &[&[u8]] = &[b"topic", author.as_bytes()];
        let derivation = AddressDeriver::POST.derive(components).unwrap();
        assert!(check_derivation(
            &AddressDeriver::POST,
            components,
            &derivation.address,
            derivation.salt
        )
        .is_ok());
    }

    #[test]
    fn foreign_address_is_unauthorized() {
        let author = AuthorId::from_public_key(&[3u8; 32]);
        let components: &[&[u8]] = &[b"topic", author.as_bytes()];
        let err = check_derivation(
            &AddressDeriver::POST,
            components,
            &RecordAddress::from_raw([0xee; 32]),
            0,
        )
        .unwrap_err();
        assert_eq!(err, LedgerError::Unauthorized);
    }

    #[test]
    fn wrong_salt_is_unauthorized() {
        let components: &[&[u8]] = &[b"topic", &[3u8; 32]];
        let derivation = AddressDeriver::POST.derive(components).unwrap();
        let err = check_derivation(
            &AddressDeriver::POST,
            components,
            &derivation.address,
            derivation.salt.wrapping_add(1),
        )
        .unwrap_err();
        assert_eq!(err, LedgerError::Unauthorized);
    }
}
