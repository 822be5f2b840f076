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

use std::{cell::RefCell, collections::HashMap};

use frame_support::{dispatch::DispatchResult, parameter_types, traits::GenesisBuild};
use frame_system as system;
use loy_traits::{Administrator, ItemLedger};
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	DispatchError,
};

use crate::{self as pallet_loyalty, Config};

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Runtime>;
type Block = frame_system::mocking::MockBlock<Runtime>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
	pub enum Runtime where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system::{Pallet, Call, Config, Storage, Event<T>},
		Loyalty: pallet_loyalty::{Pallet, Call, Config<T>, Storage, Event<T>},
	}
);

// System config
parameter_types! {
	pub const BlockHashCount: u64 = 250;
	pub const SS58Prefix: u8 = 42;
}

impl system::Config for Runtime {
	type AccountData = ();
	type AccountId = u64;
	type BaseCallFilter = frame_support::traits::Everything;
	type BlockHashCount = BlockHashCount;
	type BlockLength = ();
	type BlockNumber = u64;
	type BlockWeights = ();
	type DbWeight = ();
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type Header = Header;
	type Index = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type MaxConsumers = frame_support::traits::ConstU32<16>;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type OnSetCode = ();
	type PalletInfo = PalletInfo;
	type RuntimeCall = RuntimeCall;
	type RuntimeEvent = RuntimeEvent;
	type RuntimeOrigin = RuntimeOrigin;
	type SS58Prefix = SS58Prefix;
	type SystemWeightInfo = ();
	type Version = ();
}

pub type ItemId = u64;

pub const ADMIN: u64 = 0x1;
pub const HOLDER: u64 = 0x2;
pub const OPERATOR: u64 = 0x3;
pub const STRANGER: u64 = 0x4;
pub const NULL: u64 = 0x0;

thread_local! {
	static HOLDINGS: RefCell<HashMap<ItemId, u64>> = RefCell::new(HashMap::new());
	static APPROVALS: RefCell<HashMap<ItemId, Vec<u64>>> = RefCell::new(HashMap::new());
}

/// In-memory ownership ledger.
pub struct MockLedger;

impl MockLedger {
	pub fn holder(item: ItemId) -> Option<u64> {
		HOLDINGS.with(|h| h.borrow().get(&item).copied())
	}

	pub fn approve(item: ItemId, operator: u64) {
		APPROVALS.with(|a| a.borrow_mut().entry(item).or_default().push(operator));
	}

	fn reset() {
		HOLDINGS.with(|h| h.borrow_mut().clear());
		APPROVALS.with(|a| a.borrow_mut().clear());
	}
}

impl ItemLedger<u64> for MockLedger {
	type ItemId = ItemId;

	fn create(item: &ItemId, holder: &u64) -> DispatchResult {
		HOLDINGS.with(|h| {
			let mut holdings = h.borrow_mut();
			if holdings.contains_key(item) {
				return Err(DispatchError::Other("item already exists"));
			}
			holdings.insert(*item, *holder);
			Ok(())
		})
	}

	fn destroy(item: &ItemId) -> DispatchResult {
		HOLDINGS.with(|h| {
			h.borrow_mut()
				.remove(item)
				.ok_or(DispatchError::Other("no such item"))
		})?;
		APPROVALS.with(|a| a.borrow_mut().remove(item));
		Ok(())
	}

	fn exists(item: &ItemId) -> bool {
		HOLDINGS.with(|h| h.borrow().contains_key(item))
	}

	fn is_owner_or_approved(who: &u64, item: &ItemId) -> bool {
		HOLDINGS.with(|h| h.borrow().get(item) == Some(who))
			|| APPROVALS.with(|a| {
				a.borrow()
					.get(item)
					.map_or(false, |operators| operators.contains(who))
			})
	}

	fn transfer(item: &ItemId, dest: &u64) -> DispatchResult {
		HOLDINGS.with(|h| {
			let mut holdings = h.borrow_mut();
			let holder = holdings
				.get_mut(item)
				.ok_or(DispatchError::Other("no such item"))?;
			*holder = *dest;
			Ok(())
		})
	}
}

/// Fixed single-administrator access control.
pub struct MockAdmin;

impl Administrator<u64> for MockAdmin {
	fn administrator() -> Option<u64> {
		Some(ADMIN)
	}

	fn is_administrator(who: &u64) -> bool {
		*who == ADMIN
	}
}

parameter_types! {
	pub const NullAccount: u64 = NULL;
}

impl Config for Runtime {
	type Admin = MockAdmin;
	type ItemId = ItemId;
	type Ledger = MockLedger;
	type NullAccount = NullAccount;
	type RuntimeEvent = RuntimeEvent;
	type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
	MockLedger::reset();

	let mut storage = system::GenesisConfig::default()
		.build_storage::<Runtime>()
		.unwrap();

	pallet_loyalty::GenesisConfig::<Runtime> { burnt: vec![] }
		.assimilate_storage(&mut storage)
		.unwrap();

	let mut ext: sp_io::TestExternalities = storage.into();

	// Ensure that we set a block number otherwise no events would be deposited.
	ext.execute_with(|| frame_system::Pallet::<Runtime>::set_block_number(1));

	ext
}
