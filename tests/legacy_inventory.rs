//! Inventory files written by older versions of the app.

use std::{fs, path::Path};

use jiff::civil::date;
use rust_decimal::Decimal;
use testresult::TestResult;
use thriftlift::prelude::*;

const LEGACY: &str = "\
ID,Iterm Name,Brand,Category,Size,Purchase Price,Sale Price,Shipping Cost,eBay Fee,Profit,Listed Date,Sold Date,Status
1700000000,Jacket,Patagonia,Outerwear,M,$20.00,$50.00,$5.00,$3.00,$99.00,2023-11-14,2023-11-20,Sold
1700000100,Boots,Red Wing,Footwear,10,\"$1,250.00\",,,,,2023-11-14
garbage,row
1700000200,Scarf,,Accessories,,5.00,15.00,,,,2023-11-15,,Listed
";

fn open_legacy(dir: &Path) -> Result<InventoryStore<FixedClock>, Box<dyn std::error::Error>> {
    let path = dir.join("inventory.csv");

    fs::write(&path, LEGACY)?;

    Ok(InventoryStore::open_with_clock(
        path,
        FixedClock::new(1_718_900_000, date(2024, 6, 20)),
    )?)
}

#[test]
fn legacy_rows_are_read() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = open_legacy(dir.path())?;

    let ids: Vec<_> = store.records().map(|record| record.id().get()).collect();

    assert_eq!(ids, vec![1_700_000_000, 1_700_000_100, 1_700_000_200]);

    let jacket = store
        .find_by_id(RecordId::new(1_700_000_000))
        .ok_or("jacket missing")?;

    assert_eq!(jacket.status(), Status::Sold);
    assert_eq!(jacket.purchase_price(), Decimal::new(2000, 2));
    assert_eq!(jacket.profit(), Some(Decimal::new(2200, 2)));

    let boots = store
        .find_by_id(RecordId::new(1_700_000_100))
        .ok_or("boots missing")?;

    assert_eq!(boots.status(), Status::Listed);
    assert_eq!(boots.purchase_price(), Decimal::new(125_000, 2));

    Ok(())
}

#[test]
fn stray_sale_price_on_listed_item_is_dropped() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = open_legacy(dir.path())?;

    let scarf = store
        .find_by_id(RecordId::new(1_700_000_200))
        .ok_or("scarf missing")?;

    assert_eq!(scarf.status(), Status::Listed);
    assert_eq!(scarf.sale_price(), None);
    assert_eq!(scarf.profit(), None);

    Ok(())
}

#[test]
fn unreadable_rows_are_reported() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = open_legacy(dir.path())?;

    let rows: Vec<_> = store.unreadable_rows().collect();

    assert_eq!(rows.len(), 1);
    assert!(
        rows.iter()
            .all(|row| row.fields().collect::<Vec<_>>() == ["garbage", "row"])
    );

    Ok(())
}

#[test]
fn rewrite_normalises_rows_and_keeps_unreadable_ones() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = open_legacy(dir.path())?;

    let mut hat = NewItem {
        purchase_price: "4".to_string(),
        ..NewItem::default()
    };
    hat.details.item_name = "Hat".to_string();

    let hat = store.create(hat)?;

    let written = fs::read_to_string(store.path())?;
    let lines: Vec<_> = written.lines().collect();

    assert_eq!(
        lines,
        vec![
            "ID,Item Name,Brand,Category,Size,Purchase Price,Sale Price,Shipping Cost,eBay Fee,Profit,Listed Date,Sold Date,Status",
            "1700000000,Jacket,Patagonia,Outerwear,M,20.00,50.00,5.00,3.00,22.00,2023-11-14,2023-11-20,Sold",
            "1700000100,Boots,Red Wing,Footwear,10,1250.00,,,,,2023-11-14,,Listed",
            "garbage,row",
            "1700000200,Scarf,,Accessories,,5.00,,,,,2023-11-15,,Listed",
            &format!("{},Hat,,,,4.00,,,,,2024-06-20,,Listed", hat.id()),
        ]
    );

    Ok(())
}

#[test]
fn new_ids_follow_legacy_ids() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");

    fs::write(
        &path,
        "ID,Item Name,Brand,Category,Size,Purchase Price,Sale Price,Shipping Cost,eBay Fee,Profit,Listed Date,Sold Date,Status\n\
         1900000000,Coat,,,,1.00,,,,,2030-03-17,,Listed\n",
    )?;

    let mut store =
        InventoryStore::open_with_clock(&path, FixedClock::new(1_718_900_000, date(2024, 6, 20)))?;

    let created = store.create(NewItem {
        purchase_price: "1".to_string(),
        ..NewItem::default()
    })?;

    assert_eq!(created.id(), RecordId::new(1_900_000_001));

    Ok(())
}

#[test]
fn row_with_invalid_utf8_does_not_hide_other_rows() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");

    let mut bad_row = b"1700000300,".to_vec();
    bad_row.extend_from_slice(&[0xFF, 0xFE]);
    bad_row.extend_from_slice(b",,,,2.00,,,,,2023-11-16,,Listed\n");

    let mut contents = LEGACY.as_bytes().to_vec();
    contents.extend_from_slice(&bad_row);
    fs::write(&path, &contents)?;

    let mut store =
        InventoryStore::open_with_clock(&path, FixedClock::new(1_718_900_000, date(2024, 6, 20)))?;

    assert_eq!(store.len(), 3);
    assert_eq!(store.unreadable_rows().count(), 2);

    store.mark_sold(RecordId::new(1_700_000_200), "15", "2", "1")?;

    assert!(fs::read(&path)?.ends_with(&bad_row));

    Ok(())
}

#[test]
fn repeated_id_is_kept_aside_until_the_first_row_is_gone() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");

    fs::write(
        &path,
        "ID\n\
         5,A,,,,1.00,,,,,2023-11-14,,Listed\n\
         5,B,,,,2.00,,,,,2023-11-15,,Listed\n",
    )?;

    let clock = FixedClock::new(1_718_900_000, date(2024, 6, 20));
    let mut store = InventoryStore::open_with_clock(&path, clock)?;

    assert_eq!(store.len(), 1);
    assert_eq!(
        store.unreadable_rows().map(|row| row.reason().clone()).collect::<Vec<_>>(),
        vec![DecodeError::DuplicateId(RecordId::new(5))]
    );

    let sold = store.mark_sold(RecordId::new(5), "10", "1", "1")?;

    assert_eq!(sold.item_name(), "A");
    assert_eq!(store.delete_sold()?, 1);

    let reopened = InventoryStore::open_with_clock(&path, clock)?;
    let names: Vec<_> = reopened.records().map(InventoryRecord::item_name).collect();

    assert_eq!(names, vec!["B"]);
    assert_eq!(reopened.unreadable_rows().count(), 0);

    Ok(())
}
