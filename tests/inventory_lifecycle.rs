//! Full lifecycle of items through the inventory store.

use std::{fs, path::Path};

use jiff::civil::date;
use rust_decimal::Decimal;
use testresult::TestResult;
use thriftlift::prelude::*;

const NOW: i64 = 1_718_900_000;

fn open(path: &Path) -> Result<InventoryStore<FixedClock>, StoreError> {
    InventoryStore::open_with_clock(path, FixedClock::new(NOW, date(2024, 6, 20)))
}

fn jacket() -> NewItem {
    NewItem {
        details: ItemDetails {
            item_name: "Jacket".to_string(),
            brand: "Patagonia".to_string(),
            category: "Outerwear".to_string(),
            size: "M".to_string(),
        },
        purchase_price: "20.00".to_string(),
    }
}

#[test]
fn jacket_is_listed_then_sold_at_a_profit() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let mut store = open(&path)?;

    let listed = store.create(jacket())?;

    assert_eq!(listed.status(), Status::Listed);
    assert_eq!(listed.profit(), None);
    assert_eq!(listed.listed_date(), date(2024, 6, 20));

    let sold = store.mark_sold(listed.id(), "50.00", "5.00", "3.00")?;

    assert_eq!(sold.status(), Status::Sold);
    assert_eq!(sold.profit(), Some(Decimal::new(2200, 2)));
    assert_eq!(sold.sold_date(), Some(date(2024, 6, 20)));

    let reopened = open(&path)?;

    assert_eq!(reopened.find_by_id(listed.id()), Some(&sold));

    Ok(())
}

#[test]
fn rejected_sale_leaves_record_and_file_untouched() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let mut store = open(&path)?;

    let listed = store.create(jacket())?;
    let before = fs::read(&path)?;

    let result = store.mark_sold(listed.id(), "fifty", "5.00", "3.00");

    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::Amount {
            field: AmountField::SalePrice,
            ..
        }))
    ));
    assert_eq!(fs::read(&path)?, before);
    assert_eq!(
        store.find_by_id(listed.id()).map(InventoryRecord::status),
        Some(Status::Listed)
    );

    Ok(())
}

#[test]
fn editing_a_missing_item_is_not_found() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = open(&dir.path().join("inventory.csv"))?;

    let missing = RecordId::new(42);
    let result = store.update(
        missing,
        ItemUpdate {
            brand: Some("Arc'teryx".to_string()),
            ..ItemUpdate::default()
        },
    );

    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == missing));

    Ok(())
}

#[test]
fn records_survive_reopening_in_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let mut store = open(&path)?;

    let mut created = Vec::new();

    for name in ["Jacket", "Boots", "Scarf"] {
        let mut item = jacket();
        item.details.item_name = name.to_string();
        created.push(store.create(item)?);
    }

    let mut reopened = open(&path)?;

    assert_eq!(reopened.load_all()?, created);

    Ok(())
}

#[test]
fn ids_stay_unique_within_one_second() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");

    let first = open(&path)?.create(jacket())?;
    let second = open(&path)?.create(jacket())?;

    assert_eq!(first.id(), RecordId::new(1_718_900_000));
    assert_eq!(second.id(), RecordId::new(1_718_900_001));

    Ok(())
}

#[test]
fn sold_items_can_be_cleared() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let mut store = open(&path)?;

    let jacket = store.create(jacket())?;
    let mut boots = NewItem {
        purchase_price: "$35".to_string(),
        ..NewItem::default()
    };
    boots.details.item_name = "Boots".to_string();
    boots.details.category = "Footwear".to_string();
    let boots = store.create(boots)?;

    store.mark_sold(jacket.id(), "50", "5", "3")?;

    assert_eq!(store.delete_sold()?, 1);
    assert_eq!(store.delete_sold()?, 0);

    let reopened = open(&path)?;
    let remaining: Vec<_> = reopened.records().map(InventoryRecord::id).collect();

    assert_eq!(remaining, vec![boots.id()]);
    assert_eq!(
        reopened.list_categories().into_iter().collect::<Vec<_>>(),
        vec!["Footwear"]
    );

    Ok(())
}

#[test]
fn edits_to_a_sold_item_recompute_profit() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = open(&dir.path().join("inventory.csv"))?;

    let jacket = store.create(jacket())?;
    store.mark_sold(jacket.id(), "50.00", "5.00", "3.00")?;

    let edited = store.update(
        jacket.id(),
        ItemUpdate {
            purchase_price: Some("10.00".to_string()),
            fee: Some("4.50".to_string()),
            status: Some("sold".to_string()),
            ..ItemUpdate::default()
        },
    )?;

    assert_eq!(edited.profit(), Some(Decimal::new(3050, 2)));

    let reopen = store.update(
        jacket.id(),
        ItemUpdate {
            status: Some("Listed".to_string()),
            ..ItemUpdate::default()
        },
    );

    assert!(matches!(
        reopen,
        Err(StoreError::Validation(ValidationError::StatusChange { .. }))
    ));

    Ok(())
}

#[test]
fn report_is_exported_for_one_category() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = open(&dir.path().join("inventory.csv"))?;

    store.create(jacket())?;

    let mut hat = jacket();
    hat.details.item_name = "Bucket Hat".to_string();
    hat.details.category = "Accessories".to_string();
    store.create(hat)?;

    let out = dir.path().join("report.typ");
    let report = Report::new(store.filter_by_category("Accessories"));

    report.write_typst(&out)?;

    let typst = fs::read_to_string(&out)?;

    assert!(typst.contains("\"Bucket Hat\""));
    assert!(!typst.contains("\"Jacket\""));
    assert_eq!(report.len(), 1);

    Ok(())
}
