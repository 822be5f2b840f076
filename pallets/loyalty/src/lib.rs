// Copyright 2023 Centrifuge Foundation (centrifuge.io).
//
// This file is part of the Centrifuge chain project.
// Centrifuge is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version (see http://www.gnu.org/licenses).
// Centrifuge is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

//! # Loyalty token registry
//!
//! A registry of non-transferable loyalty tokens issued by a single
//! administrator. The pallet owns the lifecycle state: a monotone id
//! allocator, the permanent record of burnt ids and the two flags that
//! gate peer-to-peer transfers. The holder records themselves live in
//! an external ownership ledger, consumed through
//! [`loy_traits::ItemLedger`], and the administrator identity is
//! resolved through [`loy_traits::Administrator`].
//!
//! Transfers are forbidden by default. They are permitted only while
//! the administrator has both declared the registry transferable and
//! not engaged the emergency lock. The same decision drives the
//! [`PreConditions`] hook a ledger can install as its pre-transfer
//! check.
#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::RuntimeDebug;
use loy_traits::PreConditions;
pub use pallet::*;
use scale_info::TypeInfo;
pub use weights::*;

#[cfg(test)]
mod mock;
pub mod weights;

/// Transfer data passed to the pre-transfer hook.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Default, MaxEncodedLen, RuntimeDebug, TypeInfo)]
pub struct TransferDetails<AccountId, ItemId> {
	pub send: AccountId,
	pub recv: AccountId,
	pub item: ItemId,
}

impl<AccountId, ItemId> TransferDetails<AccountId, ItemId> {
	pub fn new(send: AccountId, recv: AccountId, item: ItemId) -> Self {
		Self { send, recv, item }
	}
}

#[frame_support::pallet]
pub mod pallet {
	use frame_support::{pallet_prelude::*, traits::GenesisBuild};
	use frame_system::pallet_prelude::*;
	use loy_traits::{Administrator, ItemLedger};
	use sp_runtime::{
		traits::{AtLeast32BitUnsigned, CheckedAdd, One, Zero},
		ArithmeticError,
	};
	use sp_std::vec::Vec;

	use super::*;

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The identifier of the items the registry issues. Must match
		/// the identifier type of the ledger.
		type ItemId: Parameter
			+ Member
			+ AtLeast32BitUnsigned
			+ Copy
			+ Default
			+ MaxEncodedLen
			+ MaybeSerializeDeserialize;

		/// The ownership ledger holding the actual items.
		type Ledger: ItemLedger<Self::AccountId, ItemId = Self::ItemId>;

		/// Resolves the administrator of the registry.
		type Admin: Administrator<Self::AccountId>;

		/// The account standing in for "no holder". Minting to it is
		/// rejected.
		#[pallet::constant]
		type NullAccount: Get<Self::AccountId>;

		type WeightInfo: WeightInfo;
	}

	#[pallet::type_value]
	pub fn FirstItemId<T: Config>() -> T::ItemId {
		One::one()
	}

	/// The next id the allocator will hand out. Id 0 is the reserved
	/// sentinel and is never minted.
	#[pallet::storage]
	#[pallet::getter(fn next_item_id)]
	pub type NextItemId<T: Config> = StorageValue<_, T::ItemId, ValueQuery, FirstItemId<T>>;

	/// Ids that have been burnt. Entries are permanent; a burnt id is
	/// never minted or burnt again.
	#[pallet::storage]
	#[pallet::getter(fn is_burnt)]
	pub type Burnt<T: Config> = StorageMap<_, Blake2_128Concat, T::ItemId, bool, ValueQuery>;

	/// Whether the administrator has declared the registry
	/// transferable.
	#[pallet::storage]
	#[pallet::getter(fn transferable)]
	pub type Transferable<T: Config> = StorageValue<_, bool, ValueQuery>;

	/// The emergency lock. While set, transfers are forbidden
	/// regardless of [`Transferable`].
	#[pallet::storage]
	#[pallet::getter(fn locked)]
	pub type Locked<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		/// Ids to seed as burnt, besides the sentinel.
		pub burnt: Vec<T::ItemId>,
	}

	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			Self { burnt: Vec::new() }
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			<Burnt<T>>::insert(T::ItemId::zero(), true);
			for item in self.burnt.iter() {
				<Burnt<T>>::insert(item, true);
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// An item was minted to a recipient.
		Minted {
			recipient: T::AccountId,
			item: T::ItemId,
		},
		/// An item was burnt.
		Burned { who: T::AccountId, item: T::ItemId },
		/// The emergency lock was engaged.
		Locked,
		/// The emergency lock was released.
		Unlocked,
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The caller lacks the standing the call requires.
		Unauthorized,
		/// Minting to the null account is forbidden.
		InvalidRecipient,
		/// The item has already been burnt.
		AlreadyBurnt,
		/// No such item exists in the ledger.
		NotFound,
		/// The transferability gate is closed.
		TransfersDisabled,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Mint a new item to `recipient`.
		///
		/// Administrator-only. Ids are allocated strictly increasing,
		/// starting at 1; a failed mint leaves the allocator
		/// untouched.
		#[pallet::weight(T::WeightInfo::mint())]
		#[pallet::call_index(0)]
		pub fn mint(origin: OriginFor<T>, recipient: T::AccountId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_administrator(&who)?;
			ensure!(
				recipient != T::NullAccount::get(),
				Error::<T>::InvalidRecipient
			);

			let item = <NextItemId<T>>::get();
			let next = item
				.checked_add(&One::one())
				.ok_or(ArithmeticError::Overflow)?;

			T::Ledger::create(&item, &recipient)?;
			<NextItemId<T>>::put(next);

			Self::deposit_event(Event::Minted { recipient, item });
			Ok(())
		}

		/// Burn `item`, retiring its id permanently.
		///
		/// The caller must be the holder or approved by the holder.
		/// The administrator gets no bypass. Burning an already-burnt
		/// id fails with [`Error::AlreadyBurnt`], a never-minted id
		/// with [`Error::NotFound`].
		#[pallet::weight(T::WeightInfo::burn())]
		#[pallet::call_index(1)]
		pub fn burn(origin: OriginFor<T>, item: T::ItemId) -> DispatchResult {
			let who = ensure_signed(origin)?;

			// The burnt check runs first so re-burning a destroyed id
			// reports AlreadyBurnt, not NotFound.
			ensure!(!<Burnt<T>>::get(item), Error::<T>::AlreadyBurnt);
			ensure!(T::Ledger::exists(&item), Error::<T>::NotFound);
			ensure!(
				T::Ledger::is_owner_or_approved(&who, &item),
				Error::<T>::Unauthorized
			);

			T::Ledger::destroy(&item)?;
			<Burnt<T>>::insert(item, true);

			Self::deposit_event(Event::Burned { who, item });
			Ok(())
		}

		/// Transfer `item` to `dest` through the ledger.
		///
		/// Permission is decided here; the mechanics are the ledger's.
		/// Fails with [`Error::TransfersDisabled`] unless the registry
		/// is transferable and not locked.
		#[pallet::weight(T::WeightInfo::transfer())]
		#[pallet::call_index(2)]
		pub fn transfer(origin: OriginFor<T>, item: T::ItemId, dest: T::AccountId) -> DispatchResult {
			let who = ensure_signed(origin)?;

			ensure!(T::Ledger::exists(&item), Error::<T>::NotFound);
			ensure!(
				T::Ledger::is_owner_or_approved(&who, &item),
				Error::<T>::Unauthorized
			);
			ensure!(Self::transfers_allowed(), Error::<T>::TransfersDisabled);

			T::Ledger::transfer(&item, &dest)?;
			Ok(())
		}

		/// Declare whether the registry is transferable.
		///
		/// Administrator-only. This sets the intent flag only; the
		/// emergency lock overrides it. Emits no event.
		#[pallet::weight(T::WeightInfo::set_transferable())]
		#[pallet::call_index(3)]
		pub fn set_transferable(origin: OriginFor<T>, transferable: bool) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_administrator(&who)?;

			<Transferable<T>>::put(transferable);
			Ok(())
		}

		/// Engage the emergency lock. Administrator-only, idempotent.
		#[pallet::weight(T::WeightInfo::lock())]
		#[pallet::call_index(4)]
		pub fn lock(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_administrator(&who)?;

			<Locked<T>>::put(true);

			Self::deposit_event(Event::Locked);
			Ok(())
		}

		/// Release the emergency lock. Administrator-only, idempotent.
		#[pallet::weight(T::WeightInfo::unlock())]
		#[pallet::call_index(5)]
		pub fn unlock(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_administrator(&who)?;

			<Locked<T>>::put(false);

			Self::deposit_event(Event::Unlocked);
			Ok(())
		}
	}

	impl<T: Config> Pallet<T> {
		/// Whether the transferability gate is open.
		pub fn transfers_allowed() -> bool {
			<Transferable<T>>::get() && !<Locked<T>>::get()
		}

		fn ensure_administrator(who: &T::AccountId) -> DispatchResult {
			ensure!(T::Admin::is_administrator(who), Error::<T>::Unauthorized);
			Ok(())
		}
	}
}

/// The pre-transfer hook a ledger installs to have the registry vet
/// its transfers. Shares its decision with the `transfer` extrinsic.
impl<T: Config> PreConditions<TransferDetails<T::AccountId, T::ItemId>> for Pallet<T> {
	type Result = bool;

	fn check(_details: TransferDetails<T::AccountId, T::ItemId>) -> bool {
		Pallet::<T>::transfers_allowed()
	}
}
