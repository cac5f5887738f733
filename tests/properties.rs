//! Property tests for store invariants.

use jiff::civil::date;
use proptest::prelude::*;
use rust_decimal::Decimal;
use thriftlift::{prelude::*, records::profit};

fn cents() -> impl Strategy<Value = i64> {
    0_i64..10_000_000
}

fn item(index: usize) -> NewItem {
    let mut item = NewItem {
        purchase_price: format!("{index}.50"),
        ..NewItem::default()
    };

    item.details.item_name = format!("Item {index}");
    item.details.category = format!("Category {}", index % 3);

    item
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn profit_is_exact(sale in cents(), purchase in cents(), shipping in cents(), fee in cents()) {
        let expected = Decimal::new(sale - purchase - shipping - fee, 2);

        prop_assert_eq!(
            profit(
                Decimal::new(sale, 2),
                Decimal::new(purchase, 2),
                Decimal::new(shipping, 2),
                Decimal::new(fee, 2),
            ),
            expected
        );
    }

    #[test]
    fn reopening_returns_every_created_record(count in 0_usize..12) {
        let dir = tempfile::tempdir().map_err(|error| TestCaseError::fail(error.to_string()))?;
        let path = dir.path().join("inventory.csv");
        let clock = FixedClock::new(1_718_900_000, date(2024, 6, 20));

        let mut store = InventoryStore::open_with_clock(&path, clock)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let mut created = Vec::new();

        for index in 0..count {
            created.push(
                store
                    .create(item(index))
                    .map_err(|error| TestCaseError::fail(error.to_string()))?,
            );
        }

        let reopened = InventoryStore::open_with_clock(&path, clock)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(reopened.records().cloned().collect::<Vec<_>>(), created);
    }

    #[test]
    fn delete_sold_removes_exactly_the_sold_records(sold in prop::collection::vec(any::<bool>(), 0..12)) {
        let dir = tempfile::tempdir().map_err(|error| TestCaseError::fail(error.to_string()))?;
        let path = dir.path().join("inventory.csv");
        let clock = FixedClock::new(1_718_900_000, date(2024, 6, 20));

        let mut store = InventoryStore::open_with_clock(&path, clock)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let mut kept = Vec::new();

        for (index, &is_sold) in sold.iter().enumerate() {
            let record = store
                .create(item(index))
                .map_err(|error| TestCaseError::fail(error.to_string()))?;

            if is_sold {
                store
                    .mark_sold(record.id(), "10", "1", "1")
                    .map_err(|error| TestCaseError::fail(error.to_string()))?;
            } else {
                kept.push(record.id());
            }
        }

        let removed = store
            .delete_sold()
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(removed, sold.iter().filter(|&&is_sold| is_sold).count());

        let remaining: Vec<_> = store.records().map(InventoryRecord::id).collect();

        prop_assert_eq!(&remaining, &kept);
        prop_assert!(store.records().all(|record| record.status() == Status::Listed));
    }
}
