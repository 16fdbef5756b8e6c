//! Static card metadata and the catalog the host registers it with.

use indexmap::IndexMap;

use crate::error::CatalogError;

/// Descriptor a host widget catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDescriptor {
	pub type_name: &'static str,
	pub name: &'static str,
	pub description: &'static str,
}

/// The searchable multi-select logger picker.
pub const LOGGER_PICKER_CARD: CardDescriptor = CardDescriptor {
	type_name: "ha-logger-multiselect-card",
	name: "Logger Manager Card",
	description: "Multi-select logger management interface",
};

/// Registry of cards, filled explicitly by the integration layer.
#[derive(Debug, Default)]
pub struct CardCatalog {
	cards: IndexMap<&'static str, CardDescriptor>,
}

impl CardCatalog {
	/// Register a card, rejecting duplicate type names.
	pub fn register(&mut self, card: CardDescriptor) -> Result<(), CatalogError> {
		if self.cards.contains_key(card.type_name) {
			return Err(CatalogError::DuplicateType {
				type_name: card.type_name,
			});
		}
		self.cards.insert(card.type_name, card);
		Ok(())
	}

	/// Look up a card by type name.
	#[must_use]
	pub fn get(&self, type_name: &str) -> Option<&CardDescriptor> {
		self.cards.get(type_name)
	}

	/// Cards in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
		self.cards.values()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.cards.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn duplicate_registration_is_rejected() {
		let mut catalog = CardCatalog::default();
		catalog.register(LOGGER_PICKER_CARD).unwrap();
		let err = catalog.register(LOGGER_PICKER_CARD).unwrap_err();
		assert_eq!(
			err,
			CatalogError::DuplicateType {
				type_name: "ha-logger-multiselect-card"
			}
		);
		assert_eq!(catalog.len(), 1);
		assert_eq!(
			catalog.get("ha-logger-multiselect-card").map(|card| card.name),
			Some("Logger Manager Card")
		);
	}
}
