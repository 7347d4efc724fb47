//! Invoice line-item editing operations.
//!
//! The update surface is a closed set of explicit operations rather than
//! a generic field-by-name mutation, so the recomputation rule is
//! statically checkable: editing quantity or rate recomputes that item's
//! `amount = round2(quantity * rate)`, and every edit recomputes the
//! invoice total over the full list.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::LineItem;
use crate::money::round2;

/// Appends the blank line item a user starts typing into.
pub fn add_item(items: &mut Vec<LineItem>) {
    items.push(LineItem::empty());
}

/// Removes the item at `index` and returns the recomputed total.
///
/// The list is never allowed to go empty: removing the last remaining
/// item is rejected, matching the screens that disable the remove button
/// at length one.
pub fn remove_item(items: &mut Vec<LineItem>, index: usize) -> EngineResult<Decimal> {
    if index >= items.len() {
        return Err(EngineError::InvalidLineItem {
            index,
            message: "index out of range".to_string(),
        });
    }
    if items.len() == 1 {
        return Err(EngineError::InvalidLineItem {
            index,
            message: "an invoice must keep at least one line item".to_string(),
        });
    }
    items.remove(index);
    Ok(invoice_total(items))
}

/// Sets an item's description. The amount is untouched.
pub fn set_description(
    items: &mut [LineItem],
    index: usize,
    description: impl Into<String>,
) -> EngineResult<()> {
    let item = get_mut(items, index)?;
    item.description = description.into();
    Ok(())
}

/// Sets an item's quantity, recomputing its amount and the total.
pub fn set_quantity(
    items: &mut [LineItem],
    index: usize,
    quantity: Decimal,
) -> EngineResult<Decimal> {
    let item = get_mut(items, index)?;
    item.quantity = quantity;
    item.amount = round2(item.quantity * item.rate);
    Ok(invoice_total(items))
}

/// Sets an item's rate, recomputing its amount and the total.
pub fn set_rate(items: &mut [LineItem], index: usize, rate: Decimal) -> EngineResult<Decimal> {
    let item = get_mut(items, index)?;
    item.rate = rate;
    item.amount = round2(item.quantity * item.rate);
    Ok(invoice_total(items))
}

/// The invoice total: the re-rounded sum of every item amount.
pub fn invoice_total(items: &[LineItem]) -> Decimal {
    round2(items.iter().map(|item| item.amount).sum())
}

/// Recomputes every item's amount from its quantity and rate.
///
/// Used when a raw item list arrives from a caller that may not have kept
/// the amount invariant (e.g. a request body), before totalling.
pub fn normalize_items(items: &mut [LineItem]) -> Decimal {
    for item in items.iter_mut() {
        item.amount = round2(item.quantity * item.rate);
    }
    invoice_total(items)
}

/// The total a raw item list would have after normalization.
///
/// Ignores the caller-supplied `amount` fields entirely; anything that
/// checks an amount against the total must use this, never
/// [`invoice_total`], so a forged `amount` in a request body cannot move
/// the bound.
pub fn normalized_total(items: &[LineItem]) -> Decimal {
    round2(
        items
            .iter()
            .map(|item| round2(item.quantity * item.rate))
            .sum(),
    )
}

fn get_mut(items: &mut [LineItem], index: usize) -> EngineResult<&mut LineItem> {
    let len = items.len();
    items.get_mut(index).ok_or(EngineError::InvalidLineItem {
        index,
        message: format!("index out of range for {} items", len),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Site supervision", dec("2"), dec("150.005")),
            LineItem::new("Material handling", dec("1"), dec("99.99")),
        ]
    }

    /// LI-001: quantity edit recomputes amount and total
    #[test]
    fn test_set_quantity_recomputes() {
        let mut items = sample_items();
        let total = set_quantity(&mut items, 1, dec("3")).unwrap();
        assert_eq!(items[1].amount, dec("299.97"));
        assert_eq!(total, dec("599.98")); // 300.01 + 299.97 re-rounded
    }

    /// LI-002: rate edit recomputes amount and total
    #[test]
    fn test_set_rate_recomputes() {
        let mut items = sample_items();
        let total = set_rate(&mut items, 0, dec("175")).unwrap();
        assert_eq!(items[0].amount, dec("350"));
        assert_eq!(total, dec("449.99"));
    }

    /// LI-003: only the edited item's amount changes
    #[test]
    fn test_edit_touches_only_target_item() {
        let mut items = sample_items();
        set_quantity(&mut items, 0, dec("5")).unwrap();
        assert_eq!(items[1].amount, dec("99.99"));
    }

    /// LI-004: description edit leaves amounts alone
    #[test]
    fn test_set_description_leaves_amounts() {
        let mut items = sample_items();
        set_description(&mut items, 0, "Supervision (revised)").unwrap();
        assert_eq!(items[0].description, "Supervision (revised)");
        assert_eq!(items[0].amount, dec("300.01"));
    }

    /// LI-005: add appends the blank row
    #[test]
    fn test_add_item_appends_blank() {
        let mut items = sample_items();
        add_item(&mut items);
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], LineItem::empty());
        // A blank row does not move the total.
        assert_eq!(invoice_total(&items), dec("400.00"));
    }

    /// LI-006: remove recomputes the total
    #[test]
    fn test_remove_item_recomputes_total() {
        let mut items = sample_items();
        let total = remove_item(&mut items, 0).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(total, dec("99.99"));
    }

    /// LI-007: the last item cannot be removed
    #[test]
    fn test_cannot_remove_last_item() {
        let mut items = vec![LineItem::new("Only line", dec("1"), dec("10"))];
        let err = remove_item(&mut items, 0).unwrap_err();
        match err {
            EngineError::InvalidLineItem { index, message } => {
                assert_eq!(index, 0);
                assert!(message.contains("at least one"));
            }
            other => panic!("Expected InvalidLineItem, got {:?}", other),
        }
        assert_eq!(items.len(), 1);
    }

    /// LI-008: out-of-range index is rejected
    #[test]
    fn test_out_of_range_index_rejected() {
        let mut items = sample_items();
        assert!(remove_item(&mut items, 5).is_err());
        assert!(set_quantity(&mut items, 5, dec("1")).is_err());
        assert!(set_rate(&mut items, 5, dec("1")).is_err());
        assert!(set_description(&mut items, 5, "x").is_err());
    }

    #[test]
    fn test_normalize_items_repairs_amounts() {
        let mut items = sample_items();
        items[0].amount = dec("999999"); // caller-supplied garbage
        let total = normalize_items(&mut items);
        assert_eq!(items[0].amount, dec("300.01"));
        assert_eq!(total, dec("400.00"));
    }

    #[test]
    fn test_normalized_total_ignores_supplied_amounts() {
        let mut items = sample_items();
        items[0].amount = dec("999999");
        assert_eq!(normalized_total(&items), dec("400.00"));
        // The items themselves are left as they arrived.
        assert_eq!(items[0].amount, dec("999999"));
    }

    proptest! {
        /// total == round2(sum(amounts)) and each amount == round2(q * r)
        /// after any single edit.
        #[test]
        fn prop_total_invariant_after_edit(
            quantities in proptest::collection::vec(1i64..1000, 1..8),
            rate_cents in 0i64..100_000,
            index in 0usize..8,
        ) {
            let mut items: Vec<LineItem> = quantities
                .iter()
                .map(|q| LineItem::new("work", Decimal::from(*q), dec("9.99")))
                .collect();
            let index = index % items.len();
            let rate = Decimal::new(rate_cents, 2);

            let total = set_rate(&mut items, index, rate).unwrap();

            for item in &items {
                prop_assert_eq!(item.amount, round2(item.quantity * item.rate));
            }
            let expected: Decimal = items.iter().map(|i| i.amount).sum();
            prop_assert_eq!(total, round2(expected));
        }
    }
}
