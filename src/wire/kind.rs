//! Symbol tables for enumerated kinds.
//!
//! One table per enum, read in both directions. Decoding never fails: the
//! unspecified symbol and any symbol the table does not know resolve to the
//! table's default. A newer service may add kinds this client has never seen.

use crate::models::{AssociationKind, AttributeKind};

pub struct KindTable<K: 'static> {
    entries: &'static [(K, &'static str)],
    unspecified: &'static str,
    default: K,
}

impl<K: Copy + PartialEq> KindTable<K> {
    pub const fn new(
        entries: &'static [(K, &'static str)],
        unspecified: &'static str,
        default: K,
    ) -> Self {
        Self {
            entries,
            unspecified,
            default,
        }
    }

    pub fn to_wire(&self, kind: K) -> &'static str {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(self.unspecified)
    }

    pub fn from_wire(&self, symbol: &str) -> K {
        self.entries
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|(k, _)| *k)
            .unwrap_or(self.default)
    }

    pub fn default_kind(&self) -> K {
        self.default
    }
}

pub static ATTRIBUTE_KINDS: KindTable<AttributeKind> = KindTable::new(
    &[
        (AttributeKind::String, "MODEL_ATTRIBUTE_KIND_STRING"),
        (AttributeKind::Integer, "MODEL_ATTRIBUTE_KIND_INTEGER"),
        (AttributeKind::Boolean, "MODEL_ATTRIBUTE_KIND_BOOLEAN"),
    ],
    "MODEL_ATTRIBUTE_KIND_UNSPECIFIED",
    AttributeKind::String,
);

pub static ASSOCIATION_KINDS: KindTable<AssociationKind> = KindTable::new(
    &[
        (AssociationKind::BelongsTo, "MODEL_ASSOCIATION_KIND_BELONGS_TO"),
        (AssociationKind::HasOne, "MODEL_ASSOCIATION_KIND_HAS_ONE"),
        (AssociationKind::HasMany, "MODEL_ASSOCIATION_KIND_HAS_MANY"),
    ],
    "MODEL_ASSOCIATION_KIND_UNSPECIFIED",
    AssociationKind::BelongsTo,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_kind_has_its_own_symbol() {
        for kind in AttributeKind::ALL {
            let symbol = ATTRIBUTE_KINDS.to_wire(kind);
            assert_ne!(symbol, "MODEL_ATTRIBUTE_KIND_UNSPECIFIED");
            assert_eq!(ATTRIBUTE_KINDS.from_wire(symbol), kind);
        }
    }

    #[test]
    fn every_association_kind_has_its_own_symbol() {
        for kind in AssociationKind::ALL {
            let symbol = ASSOCIATION_KINDS.to_wire(kind);
            assert_ne!(symbol, "MODEL_ASSOCIATION_KIND_UNSPECIFIED");
            assert_eq!(ASSOCIATION_KINDS.from_wire(symbol), kind);
        }
    }

    #[test]
    fn unknown_symbols_fall_back_to_default() {
        assert_eq!(
            ATTRIBUTE_KINDS.from_wire("MODEL_ATTRIBUTE_KIND_TIMESTAMP"),
            AttributeKind::String
        );
        assert_eq!(ATTRIBUTE_KINDS.from_wire(""), ATTRIBUTE_KINDS.default_kind());
        assert_eq!(
            ASSOCIATION_KINDS.from_wire("MODEL_ASSOCIATION_KIND_UNSPECIFIED"),
            AssociationKind::BelongsTo
        );
    }
}
