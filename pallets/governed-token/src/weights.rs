//! Weights for pallet-governed-token.
//!
//! Hand-estimated from the storage accesses of each call until the
//! benchmarks in `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-governed-token.
pub trait WeightInfo {
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn begin_admin_transfer() -> Weight;
    fn cancel_admin_transfer() -> Weight;
    fn accept_admin_transfer() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn freeze() -> Weight;
    fn unfreeze() -> Weight;
    fn seize() -> Weight;
    fn withdraw() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn batch_mint(n: u32) -> Weight;
    fn batch_transfer(n: u32) -> Weight;
}

/// Weights for pallet-governed-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn grant_role() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn begin_admin_transfer() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn cancel_admin_transfer() -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn accept_admin_transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(24_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 3_600)
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn freeze() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn seize() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn batch_mint(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(Weight::from_parts(9_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn batch_transfer(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn grant_role() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn begin_admin_transfer() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn cancel_admin_transfer() -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn accept_admin_transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(24_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 3_600).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn freeze() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn seize() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(20_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn batch_mint(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(Weight::from_parts(9_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn batch_transfer(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
}
