use crate as pallet_governed_token;
use crate::Role;
use core::cell::RefCell;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, Get},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GovernedToken: pallet_governed_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

pub const ADMIN: u64 = 1;
pub const MINTER: u64 = 2;
pub const BURNER: u64 = 3;
pub const PAUSER: u64 = 4;
pub const GOVERNOR: u64 = 5;
pub const ALICE: u64 = 10;
pub const BOB: u64 = 11;
pub const CHARLIE: u64 = 12;

/// Balance each of `ALICE`, `BOB` and `CHARLIE` starts with.
pub const INITIAL_BALANCE: u128 = 1_000;

/// Blocks between proposing and accepting an admin handover.
pub const ADMIN_TRANSFER_DELAY: u64 = 100;

parameter_types! {
    pub const TokenPalletId: PalletId = PalletId(*b"py/gvtkn");
}

thread_local! {
    static ALLOW_RENOUNCE: RefCell<bool> = const { RefCell::new(false) };
}

/// Lets individual tests switch self-renouncing of roles on.
pub struct AllowRoleRenounce;
impl AllowRoleRenounce {
    pub fn set(allow: bool) {
        ALLOW_RENOUNCE.with(|v| *v.borrow_mut() = allow);
    }
}
impl Get<bool> for AllowRoleRenounce {
    fn get() -> bool {
        ALLOW_RENOUNCE.with(|v| *v.borrow())
    }
}

impl pallet_governed_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminTransferDelay = ConstU64<ADMIN_TRANSFER_DELAY>;
    type MaxBatchSize = ConstU32<256>;
    type PalletId = TokenPalletId;
    type AllowRoleRenounce = AllowRoleRenounce;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_governed_token::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        token_name: b"Wunderpar Token".to_vec(),
        token_symbol: b"Wunder".to_vec(),
        roles: vec![
            (Role::Minter, MINTER),
            (Role::Burner, BURNER),
            (Role::Pauser, PAUSER),
            (Role::Govern, GOVERNOR),
        ],
        initial_balances: vec![
            (ALICE, INITIAL_BALANCE),
            (BOB, INITIAL_BALANCE),
            (CHARLIE, INITIAL_BALANCE),
        ],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    AllowRoleRenounce::set(false);

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 on
    ext.execute_with(|| System::set_block_number(1));
    ext
}
