//! Benchmarking setup for pallet-governed-token

use super::*;

#[allow(unused)]
use crate::Pallet as GovernedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

const SEED: u32 = 0;
const FUNDS: u128 = 1_000_000_000;

fn holder<T: Config>(role: Role) -> T::AccountId {
    let who: T::AccountId = whitelisted_caller();
    Pallet::<T>::insert_role(role, &who);
    if role == Role::Admin {
        Admin::<T>::put(&who);
    }
    who
}

fn funded<T: Config>(name: &'static str, index: u32) -> T::AccountId {
    let who: T::AccountId = account(name, index, SEED);
    Balances::<T>::mutate(&who, |balance| *balance += FUNDS);
    TotalSupply::<T>::mutate(|supply| *supply += FUNDS);
    who
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let caller = holder::<T>(Role::Admin);
        let member: T::AccountId = account("member", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, member.clone());

        assert!(Pallet::<T>::has_role(Role::Minter, &member));
    }

    #[benchmark]
    fn revoke_role() {
        let caller = holder::<T>(Role::Admin);
        let member: T::AccountId = account("member", 0, SEED);
        Pallet::<T>::insert_role(Role::Minter, &member);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, member.clone());

        assert!(!Pallet::<T>::has_role(Role::Minter, &member));
    }

    #[benchmark]
    fn renounce_role() -> Result<(), BenchmarkError> {
        if !T::AllowRoleRenounce::get() {
            return Err(BenchmarkError::Skip);
        }
        let caller = holder::<T>(Role::Minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Minter);

        assert!(!Pallet::<T>::has_role(Role::Minter, &caller));
        Ok(())
    }

    #[benchmark]
    fn begin_admin_transfer() {
        let caller = holder::<T>(Role::Admin);
        let new_admin: T::AccountId = account("new_admin", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_admin.clone());

        assert_eq!(PendingAdmin::<T>::get().map(|p| p.new_admin), Some(new_admin));
    }

    #[benchmark]
    fn cancel_admin_transfer() {
        let caller = holder::<T>(Role::Admin);
        let new_admin: T::AccountId = account("new_admin", 0, SEED);
        let eligible_at = frame_system::Pallet::<T>::block_number();
        PendingAdmin::<T>::put(PendingAdminTransfer { new_admin, eligible_at });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(PendingAdmin::<T>::get().is_none());
    }

    #[benchmark]
    fn accept_admin_transfer() {
        let previous: T::AccountId = account("previous", 0, SEED);
        Pallet::<T>::insert_role(Role::Admin, &previous);
        Admin::<T>::put(&previous);

        let caller: T::AccountId = whitelisted_caller();
        let eligible_at = frame_system::Pallet::<T>::block_number();
        PendingAdmin::<T>::put(PendingAdminTransfer { new_admin: caller.clone(), eligible_at });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Admin::<T>::get(), Some(caller));
        assert!(!Pallet::<T>::has_role(Role::Admin, &previous));
    }

    #[benchmark]
    fn mint() {
        let caller = holder::<T>(Role::Minter);
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), FUNDS);

        assert_eq!(Balances::<T>::get(&recipient), FUNDS);
    }

    #[benchmark]
    fn burn() {
        let caller = holder::<T>(Role::Burner);
        Balances::<T>::mutate(&caller, |balance| *balance += FUNDS);
        TotalSupply::<T>::mutate(|supply| *supply += FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), FUNDS);

        assert_eq!(Balances::<T>::get(&caller), 0);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::mutate(&caller, |balance| *balance += FUNDS);
        TotalSupply::<T>::mutate(|supply| *supply += FUNDS);
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), FUNDS);

        assert_eq!(Balances::<T>::get(&recipient), FUNDS);
    }

    #[benchmark]
    fn transfer_from() {
        let owner = funded::<T>("owner", 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Allowances::<T>::insert(&owner, &spender, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), FUNDS);

        assert_eq!(Balances::<T>::get(&recipient), FUNDS);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), FUNDS);

        assert_eq!(Allowances::<T>::get(&caller, &spender), FUNDS);
    }

    #[benchmark]
    fn freeze() {
        let caller = holder::<T>(Role::Govern);
        let target: T::AccountId = account("target", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert!(Frozen::<T>::get(&target));
    }

    #[benchmark]
    fn unfreeze() {
        let caller = holder::<T>(Role::Govern);
        let target: T::AccountId = account("target", 0, SEED);
        Frozen::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert!(!Frozen::<T>::get(&target));
    }

    #[benchmark]
    fn seize() {
        let caller = holder::<T>(Role::Govern);
        let target = funded::<T>("target", 0);
        Frozen::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Balances::<T>::get(&target), 0);
    }

    #[benchmark]
    fn withdraw() {
        let caller = holder::<T>(Role::Govern);
        let custody = Pallet::<T>::custody_account();
        Balances::<T>::mutate(&custody, |balance| *balance += FUNDS);
        TotalSupply::<T>::mutate(|supply| *supply += FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), FUNDS);

        assert!(Balances::<T>::get(&caller) >= FUNDS);
    }

    #[benchmark]
    fn pause() {
        let caller = holder::<T>(Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(IsPaused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller = holder::<T>(Role::Pauser);
        IsPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!IsPaused::<T>::get());
    }

    #[benchmark]
    fn batch_mint(n: Linear<1, 256>) {
        let n = n.min(T::MaxBatchSize::get());
        let caller = holder::<T>(Role::Minter);
        let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts = vec![FUNDS; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipients.clone(), amounts);

        assert!(recipients.iter().all(|r| Balances::<T>::get(r) == FUNDS));
    }

    #[benchmark]
    fn batch_transfer(n: Linear<1, 256>) {
        let n = n.min(T::MaxBatchSize::get());
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::mutate(&caller, |balance| *balance += FUNDS * n as u128);
        TotalSupply::<T>::mutate(|supply| *supply += FUNDS * n as u128);
        let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts = vec![FUNDS; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipients.clone(), amounts);

        assert!(recipients.iter().all(|r| Balances::<T>::get(r) == FUNDS));
    }

    impl_benchmark_test_suite!(GovernedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
