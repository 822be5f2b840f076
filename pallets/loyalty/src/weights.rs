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

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
	traits::Get,
	weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
	fn mint() -> Weight;
	fn burn() -> Weight;
	fn transfer() -> Weight;
	fn set_transferable() -> Weight;
	fn lock() -> Weight;
	fn unlock() -> Weight;
}

/// Weights for pallet_loyalty using the Substrate node and recommended
/// hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: Loyalty NextItemId (r:1 w:1)
	/// Storage: Uniques Asset (r:1 w:1)
	fn mint() -> Weight {
		Weight::from_parts(26_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(2))
	}

	/// Storage: Loyalty Burnt (r:1 w:1)
	/// Storage: Uniques Asset (r:1 w:1)
	fn burn() -> Weight {
		Weight::from_parts(28_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(2))
	}

	/// Storage: Loyalty Transferable (r:1 w:0)
	/// Storage: Loyalty Locked (r:1 w:0)
	/// Storage: Uniques Asset (r:1 w:1)
	fn transfer() -> Weight {
		Weight::from_parts(32_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(1))
	}

	/// Storage: Loyalty Transferable (r:0 w:1)
	fn set_transferable() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}

	/// Storage: Loyalty Locked (r:0 w:1)
	fn lock() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}

	/// Storage: Loyalty Locked (r:0 w:1)
	fn unlock() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn mint() -> Weight {
		Weight::from_parts(26_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(2))
	}

	fn burn() -> Weight {
		Weight::from_parts(28_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(2))
	}

	fn transfer() -> Weight {
		Weight::from_parts(32_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(1))
	}

	fn set_transferable() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}

	fn lock() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}

	fn unlock() -> Weight {
		Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
	}
}
