//! # Governed Token Pallet
//!
//! A single fungible token whose issuance and movement are controlled by roles:
//!
//! - `Admin` grants and revokes the operational roles and is handed over only
//!   through a timelocked two-phase succession.
//! - `Minter` and `Burner` control supply.
//! - `Pauser` engages the circuit breaker that stops all value movement.
//! - `Govern` freezes accounts, seizes frozen balances into pallet custody and
//!   withdraws from custody.
//!
//! Every call runs in its own storage layer: a call that returns an error
//! leaves no trace in storage.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters and the explicit `RuntimeEvent` config item are kept for now
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, Saturating};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-governed-token";

/// Fixed number of decimals of the token.
pub const DECIMALS: u8 = 18;

pub type PendingAdminOf<T> =
    PendingAdminTransfer<<T as frame_system::Config>::AccountId, BlockNumberFor<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Blocks that must pass between proposing and accepting an admin handover.
        #[pallet::constant]
        type AdminTransferDelay: Get<BlockNumberFor<Self>>;

        /// Maximum number of recipients in a batch call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        /// Derives the custody account that holds seized balances.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Whether role holders may renounce their own operational roles.
        #[pallet::constant]
        type AllowRoleRenounce: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Wunderpar Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "Wunder")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply, always equal to the sum of `Balances`
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Frozen accounts (cannot send, receive or be minted to)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Roles held by each account. Accounts without roles have no entry.
    #[pallet::storage]
    pub type Roles<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, RoleSet, ValueQuery>;

    /// The single holder of `Role::Admin`
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Admin handover waiting to be accepted
    #[pallet::storage]
    #[pallet::getter(fn pending_admin_transfer)]
    pub type PendingAdmin<T: Config> = StorageValue<_, PendingAdminOf<T>, OptionQuery>;

    /// Circuit breaker for value movement
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type IsPaused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// `owner` set the allowance of `spender`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
        /// Admin handover proposed; acceptable from `eligible_at` on
        AdminTransferStarted { new_admin: T::AccountId, eligible_at: BlockNumberFor<T> },
        AdminTransferCanceled { new_admin: T::AccountId },
        AdminTransferred { previous_admin: Option<T::AccountId>, new_admin: T::AccountId },
        /// Account frozen
        Frozen { account: T::AccountId },
        /// Account unfrozen
        Unfrozen { account: T::AccountId },
        /// Balance of a frozen account moved into custody
        Seized { account: T::AccountId, amount: u128 },
        /// Custody balance moved to a governor
        Withdrawn { to: T::AccountId, amount: u128 },
        Paused { by: T::AccountId },
        Unpaused { by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller does not hold the role required for this call.
        Unauthorized { role: Role },
        /// Value movement is paused.
        Paused,
        /// Value movement is not paused.
        NotPaused,
        /// An account involved in the call is frozen.
        AccountFrozen,
        /// The account is already frozen.
        AlreadyFrozen,
        /// The account is not frozen.
        NotFrozen,
        /// The debited account holds less than the amount.
        InsufficientBalance,
        /// The caller's allowance is below the amount.
        InsufficientAllowance,
        /// Recipient and amount lists differ in length.
        LengthMismatch,
        /// More recipients than `MaxBatchSize`.
        TooManyRecipients,
        /// Admin only changes hands through `begin_admin_transfer`.
        DirectAdminGrantForbidden,
        /// Admin cannot be revoked or renounced.
        DirectAdminRevokeForbidden,
        /// No admin handover has been proposed.
        TransferNotPending,
        /// The handover delay has not elapsed yet.
        DelayNotElapsed,
        /// Only the proposed admin can accept the handover.
        NotPendingAdmin,
        /// Role holders may not renounce roles on this chain.
        RenounceDisabled,
        /// A balance or the total supply would exceed `u128::MAX`.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "MaxBatchSize must allow at least one recipient");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Grant an operational role. Admin only; granting a held role is a no-op.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &sender)?;
            ensure!(role != Role::Admin, Error::<T>::DirectAdminGrantForbidden);

            if Self::insert_role(role, &account) {
                log::info!(target: LOG_TARGET, "{role:?} granted to {account:?}");
                Self::deposit_event(Event::RoleGranted { role, account, sender });
            }
            Ok(())
        }

        /// Revoke an operational role. Admin only; revoking a missing role is a no-op.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &sender)?;
            ensure!(role != Role::Admin, Error::<T>::DirectAdminRevokeForbidden);

            if Self::remove_role(role, &account) {
                log::info!(target: LOG_TARGET, "{role:?} revoked from {account:?}");
                Self::deposit_event(Event::RoleRevoked { role, account, sender });
            }
            Ok(())
        }

        /// Give up one of the caller's own roles, if the runtime allows it.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::AllowRoleRenounce::get(), Error::<T>::RenounceDisabled);
            ensure!(role != Role::Admin, Error::<T>::DirectAdminRevokeForbidden);

            if Self::remove_role(role, &who) {
                log::info!(target: LOG_TARGET, "{who:?} renounced {role:?}");
                Self::deposit_event(Event::RoleRevoked { role, account: who.clone(), sender: who });
            }
            Ok(())
        }

        /// Propose `new_admin` as the next admin, replacing any earlier proposal.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::begin_admin_transfer())]
        pub fn begin_admin_transfer(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &sender)?;

            let eligible_at =
                frame_system::Pallet::<T>::block_number().saturating_add(T::AdminTransferDelay::get());
            PendingAdmin::<T>::put(PendingAdminTransfer { new_admin: new_admin.clone(), eligible_at });

            log::info!(
                target: LOG_TARGET,
                "admin handover to {new_admin:?} proposed, eligible at {eligible_at:?}"
            );
            Self::deposit_event(Event::AdminTransferStarted { new_admin, eligible_at });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::cancel_admin_transfer())]
        pub fn cancel_admin_transfer(origin: OriginFor<T>) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &sender)?;

            let pending = PendingAdmin::<T>::take().ok_or(Error::<T>::TransferNotPending)?;
            log::info!(target: LOG_TARGET, "admin handover to {:?} canceled", pending.new_admin);
            Self::deposit_event(Event::AdminTransferCanceled { new_admin: pending.new_admin });
            Ok(())
        }

        /// Complete a proposed admin handover. Only callable by the proposed
        /// admin, and only once the delay has elapsed.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::accept_admin_transfer())]
        pub fn accept_admin_transfer(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let pending = PendingAdmin::<T>::get().ok_or(Error::<T>::TransferNotPending)?;
            ensure!(pending.new_admin == who, Error::<T>::NotPendingAdmin);

            let now = frame_system::Pallet::<T>::block_number();
            if now < pending.eligible_at {
                log::debug!(
                    target: LOG_TARGET,
                    "admin handover not eligible before {:?}, now {now:?}",
                    pending.eligible_at
                );
                return Err(Error::<T>::DelayNotElapsed.into());
            }

            let previous_admin = Admin::<T>::take();
            if let Some(previous) = &previous_admin {
                Self::remove_role(Role::Admin, previous);
            }
            Self::insert_role(Role::Admin, &who);
            Admin::<T>::put(&who);
            PendingAdmin::<T>::kill();

            log::info!(target: LOG_TARGET, "admin handed over from {previous_admin:?} to {who:?}");
            Self::deposit_event(Event::AdminTransferred { previous_admin, new_admin: who });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::Minter, &who)?;
            Self::do_mint(&to, amount)
        }

        /// Burn from the caller's own balance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::Burner, &who)?;
            Self::do_burn(&who, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Move `amount` out of `from` using the caller's allowance.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_frozen(&from)?;
            Self::ensure_not_frozen(&to)?;
            Self::spend_allowance(&from, &spender, amount)?;
            Self::do_transfer(&from, &to, amount)
        }

        /// Set the allowance of `spender`, overwriting the previous value.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::freeze())]
        pub fn freeze(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Govern, &who)?;
            ensure!(!Frozen::<T>::get(&account), Error::<T>::AlreadyFrozen);

            Frozen::<T>::insert(&account, true);
            log::info!(target: LOG_TARGET, "{account:?} frozen by {who:?}");
            Self::deposit_event(Event::Frozen { account });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::unfreeze())]
        pub fn unfreeze(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Govern, &who)?;
            ensure!(Frozen::<T>::get(&account), Error::<T>::NotFrozen);

            Frozen::<T>::remove(&account);
            log::info!(target: LOG_TARGET, "{account:?} unfrozen by {who:?}");
            Self::deposit_event(Event::Unfrozen { account });
            Ok(())
        }

        /// Move the whole balance of a frozen account into custody.
        ///
        /// The account has to be frozen first so that seizure never hits an
        /// account that is still transacting. Supply is unchanged.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::seize())]
        pub fn seize(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Govern, &who)?;
            ensure!(Frozen::<T>::get(&account), Error::<T>::NotFrozen);

            let amount = Balances::<T>::get(&account);
            Self::move_balance(&account, &Self::custody_account(), amount)?;

            log::info!(target: LOG_TARGET, "{amount} seized from {account:?} by {who:?}");
            Self::deposit_event(Event::Seized { account, amount });
            Ok(())
        }

        /// Move `amount` from custody to the calling governor.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        pub fn withdraw(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Govern, &who)?;
            Self::ensure_not_frozen(&who)?;

            Self::move_balance(&Self::custody_account(), &who, amount)?;

            log::info!(target: LOG_TARGET, "{amount} withdrawn from custody by {who:?}");
            Self::deposit_event(Event::Withdrawn { to: who, amount });
            Ok(())
        }

        /// Engage the circuit breaker. Fails if already paused.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Pauser, &who)?;
            ensure!(!IsPaused::<T>::get(), Error::<T>::Paused);

            IsPaused::<T>::put(true);
            log::info!(target: LOG_TARGET, "paused by {who:?}");
            Self::deposit_event(Event::Paused { by: who });
            Ok(())
        }

        /// Release the circuit breaker. Fails if not paused.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Pauser, &who)?;
            ensure!(IsPaused::<T>::get(), Error::<T>::NotPaused);

            IsPaused::<T>::put(false);
            log::info!(target: LOG_TARGET, "unpaused by {who:?}");
            Self::deposit_event(Event::Unpaused { by: who });
            Ok(())
        }

        /// Mint `amounts[i]` to `recipients[i]` for every `i`, all or nothing.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::batch_mint(recipients.len() as u32))]
        pub fn batch_mint(
            origin: OriginFor<T>,
            recipients: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::Minter, &who)?;
            Self::ensure_batch(&recipients, &amounts)?;

            for (to, amount) in recipients.iter().zip(amounts) {
                Self::do_mint(to, amount)?;
            }
            Ok(())
        }

        /// Transfer `amounts[i]` from the caller to `recipients[i]` for every
        /// `i`, all or nothing.
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::batch_transfer(recipients.len() as u32))]
        pub fn batch_transfer(
            origin: OriginFor<T>,
            recipients: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_batch(&recipients, &amounts)?;
            Self::ensure_not_frozen(&sender)?;

            for (to, amount) in recipients.iter().zip(amounts) {
                Self::do_transfer(&sender, to, amount)?;
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin account (required)
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Operational roles granted at genesis. `Role::Admin` is not allowed here.
        pub roles: Vec<(Role, T::AccountId)>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            let admin = self.admin.clone().expect("Genesis admin is required");
            Pallet::<T>::insert_role(Role::Admin, &admin);
            Admin::<T>::put(admin);

            for (role, account) in &self.roles {
                assert!(*role != Role::Admin, "Admin is set through the `admin` field only");
                Pallet::<T>::insert_role(*role, account);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                total = total.checked_add(*amount).expect("Genesis supply overflows u128");
                Balances::<T>::mutate(account, |balance| *balance += *amount);
            }
            TotalSupply::<T>::put(total);
        }
    }
}

/// Read surface.
impl<T: Config> Pallet<T> {
    pub fn has_role(role: Role, account: &T::AccountId) -> bool {
        Roles::<T>::get(account).contains(role)
    }

    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Allowances::<T>::get(owner, spender)
    }

    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// The pallet-owned account that accumulates seized balances.
    pub fn custody_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// ERC-165 style capability query.
    pub fn supports_interface(interface_id: [u8; 4]) -> bool {
        SUPPORTED_INTERFACES.contains(&interface_id)
    }
}

/// Guards and ledger primitives shared by the dispatchables.
impl<T: Config> Pallet<T> {
    fn ensure_role(role: Role, account: &T::AccountId) -> DispatchResult {
        if !Self::has_role(role, account) {
            log::debug!(target: LOG_TARGET, "{account:?} is missing role {role:?}");
            return Err(Error::<T>::Unauthorized { role }.into());
        }
        Ok(())
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!IsPaused::<T>::get(), Error::<T>::Paused);
        Ok(())
    }

    fn ensure_not_frozen(account: &T::AccountId) -> DispatchResult {
        if Frozen::<T>::get(account) {
            log::debug!(target: LOG_TARGET, "{account:?} is frozen");
            return Err(Error::<T>::AccountFrozen.into());
        }
        Ok(())
    }

    fn ensure_batch(recipients: &[T::AccountId], amounts: &[u128]) -> DispatchResult {
        ensure!(recipients.len() == amounts.len(), Error::<T>::LengthMismatch);
        ensure!(
            recipients.len() <= T::MaxBatchSize::get() as usize,
            Error::<T>::TooManyRecipients
        );
        Ok(())
    }

    /// Returns `true` if the role was newly added.
    fn insert_role(role: Role, account: &T::AccountId) -> bool {
        Roles::<T>::mutate(account, |roles| roles.insert(role))
    }

    /// Returns `true` if the role was held. Drops the entry once no role is left.
    fn remove_role(role: Role, account: &T::AccountId) -> bool {
        Roles::<T>::mutate_exists(account, |maybe_roles| {
            let mut roles = maybe_roles.unwrap_or_default();
            let removed = roles.remove(role);
            *maybe_roles = (!roles.is_empty()).then_some(roles);
            removed
        })
    }

    fn spend_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        Allowances::<T>::try_mutate(owner, spender, |allowance| -> DispatchResult {
            // u128::MAX is an unlimited approval
            if *allowance == u128::MAX {
                return Ok(());
            }
            if *allowance < amount {
                log::debug!(
                    target: LOG_TARGET,
                    "{spender:?} may spend {} of {owner:?}, needs {amount}",
                    *allowance
                );
                return Err(Error::<T>::InsufficientAllowance.into());
            }
            *allowance -= amount;
            Ok(())
        })
    }

    /// Debit `from` and credit `to` without any pause or freeze checks.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T>::get(from);
        let Some(remaining) = balance.checked_sub(amount) else {
            log::debug!(target: LOG_TARGET, "{from:?} holds {balance}, needs {amount}");
            return Err(Error::<T>::InsufficientBalance.into());
        };
        Balances::<T>::insert(from, remaining);

        Balances::<T>::try_mutate(to, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    /// Transfer between two unfrozen accounts. Pause is checked by the caller.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(from)?;
        Self::ensure_not_frozen(to)?;
        Self::move_balance(from, to, amount)?;

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    pub fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(to)?;

        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);

        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    pub fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(from)?;

        let balance = Balances::<T>::get(from);
        let Some(remaining) = balance.checked_sub(amount) else {
            log::debug!(target: LOG_TARGET, "{from:?} holds {balance}, cannot burn {amount}");
            return Err(Error::<T>::InsufficientBalance.into());
        };
        // this can never fail, as supply is at least the burner's balance
        let supply = TotalSupply::<T>::get().saturating_sub(amount);
        Balances::<T>::insert(from, remaining);
        TotalSupply::<T>::put(supply);

        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        Ok(())
    }

    /// Checks that the total supply equals the sum of all balances and that
    /// exactly one account holds `Role::Admin`.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply differs from the sum of balances");

        let admin = Admin::<T>::get().ok_or("no admin set")?;
        let holders: Vec<T::AccountId> = Roles::<T>::iter()
            .filter(|(_, roles)| roles.contains(Role::Admin))
            .map(|(account, _)| account)
            .collect();
        ensure!(holders.len() == 1, "admin role must have exactly one holder");
        ensure!(holders[0] == admin, "admin role holder differs from the recorded admin");
        Ok(())
    }
}
