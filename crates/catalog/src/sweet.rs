//! Sweet entity: validation and stock-mutation rules.

use sweetshop_core::{DomainError, DomainResult, Entity, Price, SweetId};

/// A catalog entry.
///
/// # Invariants
/// - `quantity >= 0` after every operation.
/// - `name` is non-empty (trimmed).
/// - `price` invariants are carried by [`Price`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: i64,
}

impl Entity for Sweet {
    type Id = SweetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for create and full update: every field present.
#[derive(Debug, Clone)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: i64,
}

/// Input for partial update: only the provided fields change.
#[derive(Debug, Clone, Default)]
pub struct SweetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Price>,
    pub quantity: Option<i64>,
}

impl NewSweet {
    /// Validate and normalize item input.
    pub fn validated(self) -> DomainResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("Name may not be blank."));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation(
                "Ensure quantity is greater than or equal to 0.",
            ));
        }
        Ok(Self { name, ..self })
    }
}

impl Sweet {
    /// Build a new sweet from validated input.
    pub fn create(id: SweetId, input: NewSweet) -> DomainResult<Self> {
        let input = input.validated()?;
        Ok(Self {
            id,
            name: input.name,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
        })
    }

    /// Full replace of all mutable fields.
    pub fn apply_update(&mut self, input: NewSweet) -> DomainResult<()> {
        let input = input.validated()?;
        self.name = input.name;
        self.category = input.category;
        self.price = input.price;
        self.quantity = input.quantity;
        Ok(())
    }

    /// Merge the provided fields, then validate the merged result.
    pub fn apply_patch(&mut self, patch: SweetPatch) -> DomainResult<()> {
        let merged = NewSweet {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            category: patch.category.unwrap_or_else(|| self.category.clone()),
            price: patch.price.unwrap_or(self.price),
            quantity: patch.quantity.unwrap_or(self.quantity),
        };
        self.apply_update(merged)
    }

    /// Decrement stock by exactly one unit.
    pub fn purchase(&mut self) -> DomainResult<()> {
        if self.quantity > 0 {
            self.quantity -= 1;
            Ok(())
        } else {
            Err(DomainError::OutOfStock)
        }
    }

    /// Increase stock by an admin-specified amount.
    ///
    /// The amount must already be an integer; parsing arbitrary input happens
    /// at the API boundary. Non-positive amounts never mutate state.
    pub fn restock(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::validation(
                "Restock quantity must be a positive number.",
            ));
        }
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::validation("Restock quantity is too large."))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, quantity: i64) -> NewSweet {
        NewSweet {
            name: name.to_string(),
            category: "Indian".to_string(),
            price: "10.50".parse().unwrap(),
            quantity,
        }
    }

    fn sweet(quantity: i64) -> Sweet {
        Sweet::create(SweetId::new(), input("Ladoo", quantity)).unwrap()
    }

    #[test]
    fn create_trims_and_keeps_fields() {
        let s = Sweet::create(SweetId::new(), input("  Ladoo ", 5)).unwrap();
        assert_eq!(s.name, "Ladoo");
        assert_eq!(s.category, "Indian");
        assert_eq!(s.price.to_string(), "10.50");
        assert_eq!(s.quantity, 5);
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Sweet::create(SweetId::new(), input("   ", 5)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_negative_quantity() {
        assert!(Sweet::create(SweetId::new(), input("Ladoo", -1)).is_err());
    }

    #[test]
    fn purchase_decrements_by_one() {
        let mut s = sweet(5);
        s.purchase().unwrap();
        assert_eq!(s.quantity, 4);
    }

    #[test]
    fn purchase_at_zero_fails_and_leaves_quantity_unchanged() {
        let mut s = sweet(0);
        assert_eq!(s.purchase(), Err(DomainError::OutOfStock));
        assert_eq!(s.quantity, 0);
        assert_eq!(
            DomainError::OutOfStock.to_string(),
            "This sweet is out of stock."
        );
    }

    #[test]
    fn restock_adds_exactly_the_amount() {
        let mut s = sweet(2);
        s.restock(3).unwrap();
        assert_eq!(s.quantity, 5);
    }

    #[test]
    fn restock_rejects_non_positive_amounts_without_mutating() {
        let mut s = sweet(3);
        for amount in [0, -1, i64::MIN] {
            let err = s.restock(amount).unwrap_err();
            assert_eq!(
                err,
                DomainError::validation("Restock quantity must be a positive number.")
            );
            assert_eq!(s.quantity, 3);
        }
    }

    #[test]
    fn patch_merges_only_provided_fields() {
        let mut s = sweet(5);
        s.apply_patch(SweetPatch {
            category: Some("Festival".to_string()),
            ..SweetPatch::default()
        })
        .unwrap();

        assert_eq!(s.name, "Ladoo");
        assert_eq!(s.category, "Festival");
        assert_eq!(s.quantity, 5);
    }

    #[test]
    fn patch_with_invalid_field_leaves_entity_unchanged() {
        let mut s = sweet(5);
        let err = s
            .apply_patch(SweetPatch {
                quantity: Some(-2),
                ..SweetPatch::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(s.quantity, 5);
    }

    #[test]
    fn full_update_replaces_all_fields() {
        let mut s = sweet(5);
        s.apply_update(NewSweet {
            name: "Barfi".to_string(),
            category: "Milk".to_string(),
            price: "3.25".parse().unwrap(),
            quantity: 12,
        })
        .unwrap();

        assert_eq!(s.name, "Barfi");
        assert_eq!(s.category, "Milk");
        assert_eq!(s.price.to_string(), "3.25");
        assert_eq!(s.quantity, 12);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Purchase,
            Restock(i64),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Purchase),
                (-5i64..100).prop_map(Op::Restock),
            ]
        }

        proptest! {
            /// Quantity never goes negative, whatever the operation sequence.
            #[test]
            fn quantity_stays_non_negative(
                initial in 0i64..50,
                ops in proptest::collection::vec(op_strategy(), 0..64),
            ) {
                let mut s = sweet(initial);
                for op in ops {
                    // Failures are fine; the invariant must hold regardless.
                    let _ = match op {
                        Op::Purchase => s.purchase(),
                        Op::Restock(amount) => s.restock(amount),
                    };
                    prop_assert!(s.quantity >= 0);
                }
            }

            /// A successful purchase removes exactly one unit.
            #[test]
            fn purchase_decrements_exactly_one(initial in 1i64..100) {
                let mut s = sweet(initial);
                s.purchase().unwrap();
                prop_assert_eq!(s.quantity, initial - 1);
            }

            /// A successful restock adds exactly the requested amount.
            #[test]
            fn restock_adds_exactly_k(initial in 0i64..100, k in 1i64..1000) {
                let mut s = sweet(initial);
                s.restock(k).unwrap();
                prop_assert_eq!(s.quantity, initial + k);
            }

            /// Failed restocks are observationally side-effect free.
            #[test]
            fn failed_restock_never_mutates(initial in 0i64..100, k in -1000i64..=0) {
                let mut s = sweet(initial);
                prop_assert!(s.restock(k).is_err());
                prop_assert_eq!(s.quantity, initial);
            }
        }
    }
}
