//! Handoff of a chosen region from the map to the purchase flow.
//!
//! The map publishes the region a user picked; the purchase flow takes it
//! exactly once. The store holds at most one pending selection, and a new
//! pick replaces an unconsumed one, so the purchase flow always sees the
//! latest choice.

use parking_lot::Mutex;

/// A region the user picked on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSelection {
	pub region_key: String,
}

/// Thread-safe slot holding at most one pending [`RegionSelection`].
#[derive(Debug, Default)]
pub struct SelectionStore {
	slot: Mutex<Option<RegionSelection>>,
}

impl SelectionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a selection, replacing any unconsumed one.
	pub fn publish(&self, selection: RegionSelection) {
		*self.slot.lock() = Some(selection);
	}

	/// Takes the pending selection, leaving the store empty. Each published
	/// selection can be taken at most once.
	pub fn take(&self) -> Option<RegionSelection> {
		self.slot.lock().take()
	}

	pub fn is_empty(&self) -> bool {
		self.slot.lock().is_none()
	}
}
