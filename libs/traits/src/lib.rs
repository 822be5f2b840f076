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

//! # A common trait lib for the loyalty registry
//!
//! This crate provides the capability traits the loyalty registry is
//! loosely coupled against: the ownership ledger holding the actual
//! items, the access-control primitive naming the administrator, and
//! the precondition seam a ledger wires its pre-transfer check into.

// Ensure we're `no_std` when compiling for WebAssembly.
#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode};
use frame_support::{dispatch::DispatchResult, RuntimeDebug};
use scale_info::TypeInfo;

/// The ownership-ledger capability.
///
/// The ledger owns the holder record of every live item together with
/// the approval relationships, and carries out the mechanics of
/// creating, destroying and moving items. Consumers of this trait only
/// decide whether those operations may happen.
pub trait ItemLedger<AccountId> {
	/// The item identifier type of the ledger.
	type ItemId;

	/// Create the holding record `(holder, item)`.
	fn create(item: &Self::ItemId, holder: &AccountId) -> DispatchResult;

	/// Destroy the holding record of `item`.
	fn destroy(item: &Self::ItemId) -> DispatchResult;

	/// Whether a holding record exists for `item`.
	fn exists(item: &Self::ItemId) -> bool;

	/// Whether `who` is the holder of `item` or has been approved by
	/// the holder to manage it.
	fn is_owner_or_approved(who: &AccountId, item: &Self::ItemId) -> bool;

	/// Move `item` to `dest`.
	///
	/// Callers are expected to have checked standing and transfer
	/// permission beforehand.
	fn transfer(item: &Self::ItemId, dest: &AccountId) -> DispatchResult;
}

/// The access-control capability: a single privileged principal.
///
/// Transferring administrative rights is the concern of the
/// implementer, not of the consumers of this trait.
pub trait Administrator<AccountId> {
	/// The account currently holding administrative rights, if any.
	fn administrator() -> Option<AccountId>;

	/// Whether `who` currently holds administrative rights.
	fn is_administrator(who: &AccountId) -> bool;
}

/// Trait to check a precondition on some generic call data.
pub trait PreConditions<T> {
	type Result;

	fn check(t: T) -> Self::Result;
}

/// Precondition that lets everything pass.
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Always;
impl<T> PreConditions<T> for Always {
	type Result = bool;

	fn check(_t: T) -> bool {
		true
	}
}
