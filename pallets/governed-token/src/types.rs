//! Role identifiers, role membership sets and admin succession records.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::PalletError;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::{
    traits::{Hash, Keccak256},
    RuntimeDebug,
};

/// ERC-165 capability introspection.
pub const INTERFACE_ERC165: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];
/// ERC-20 token transfer surface.
pub const INTERFACE_ERC20: [u8; 4] = [0x36, 0x37, 0x2b, 0x07];
/// Role registry (grant / revoke / has role).
pub const INTERFACE_ACCESS_CONTROL: [u8; 4] = [0x79, 0x65, 0xdb, 0x0b];
/// Two-phase, timelocked succession of the admin role.
pub const INTERFACE_ADMIN_RULES: [u8; 4] = [0x31, 0x49, 0x87, 0x86];
/// Freeze, seize, withdraw, pause and batch operations of this token.
pub const INTERFACE_GOVERNED_TOKEN: [u8; 4] = [0xe0, 0x81, 0xa4, 0xb5];

/// Every interface the token answers `true` for.
pub const SUPPORTED_INTERFACES: [[u8; 4]; 5] = [
    INTERFACE_ERC165,
    INTERFACE_ERC20,
    INTERFACE_ACCESS_CONTROL,
    INTERFACE_ADMIN_RULES,
    INTERFACE_GOVERNED_TOKEN,
];

/// Capabilities that can be held by accounts.
///
/// `Admin` is singular: it only changes hands through the two-phase
/// succession in the pallet and can never be granted or revoked directly.
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    PalletError,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    RuntimeDebug,
)]
pub enum Role {
    Admin,
    Minter,
    Burner,
    Pauser,
    Govern,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::Minter, Role::Burner, Role::Pauser, Role::Govern];

    /// Stable 32-byte identifier of the role.
    ///
    /// `Admin` is all zeroes; every other role is the keccak-256 hash of its
    /// upper-case label, e.g. `keccak256("MINTER_ROLE")`.
    pub fn id(self) -> [u8; 32] {
        match self.label() {
            Some(label) => Keccak256::hash(label).0,
            None => [0u8; 32],
        }
    }

    /// Inverse of [`Role::id`].
    pub fn from_id(id: &[u8; 32]) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.id() == *id)
    }

    fn label(self) -> Option<&'static [u8]> {
        match self {
            Role::Admin => None,
            Role::Minter => Some(b"MINTER_ROLE"),
            Role::Burner => Some(b"BURNER_ROLE"),
            Role::Pauser => Some(b"PAUSER_ROLE"),
            Role::Govern => Some(b"GOVERN_ROLE"),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Role::Admin => 1 << 0,
            Role::Minter => 1 << 1,
            Role::Burner => 1 << 2,
            Role::Pauser => 1 << 3,
            Role::Govern => 1 << 4,
        }
    }
}

/// Roles held by a single account, one bit per [`Role`].
#[derive(
    Encode, Decode, MaxEncodedLen, TypeInfo, Clone, Copy, Default, PartialEq, Eq, RuntimeDebug,
)]
pub struct RoleSet(u8);

impl RoleSet {
    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Adds `role`, returning `false` if it was already present.
    pub fn insert(&mut self, role: Role) -> bool {
        let added = !self.contains(role);
        self.0 |= role.bit();
        added
    }

    /// Removes `role`, returning `false` if it was not present.
    pub fn remove(&mut self, role: Role) -> bool {
        let removed = self.contains(role);
        self.0 &= !role.bit();
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// An admin handover that has been proposed but not yet accepted.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct PendingAdminTransfer<AccountId, BlockNumber> {
    /// The account that must call `accept_admin_transfer`.
    pub new_admin: AccountId,
    /// First block at which the handover may be accepted.
    pub eligible_at: BlockNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_id_is_zero() {
        assert_eq!(Role::Admin.id(), [0u8; 32]);
    }

    #[test]
    fn minter_role_id_is_keccak_of_label() {
        let hex: String = Role::Minter.id().iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, "9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6");
    }

    #[test]
    fn role_ids_round_trip_and_are_distinct() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(&role.id()), Some(role));
        }
        assert_eq!(Role::from_id(&[0xff; 32]), None);
    }

    #[test]
    fn role_set_tracks_membership() {
        let mut set = RoleSet::default();
        assert!(set.is_empty());

        assert!(set.insert(Role::Minter));
        assert!(!set.insert(Role::Minter));
        assert!(set.insert(Role::Govern));
        assert!(set.contains(Role::Minter));
        assert!(!set.contains(Role::Burner));

        assert!(set.remove(Role::Minter));
        assert!(!set.remove(Role::Minter));
        assert!(set.contains(Role::Govern));
        assert!(set.remove(Role::Govern));
        assert!(set.is_empty());
    }
}
