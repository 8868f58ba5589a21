//! Runs the rendered statements against an in-memory SQLite store.

use std::sync::Arc;

use sea_orm::{ConnectOptions, ConnectionTrait, Database};

use super::SqlMerchantRepository;
use crate::domain::{
    common::entities::app_errors::CoreError,
    merchant::{
        entities::Merchant,
        ports::MerchantRepository,
        query::{Predicate, compile},
        value_objects::{MerchantQuery, Paginated},
    },
};

const SOFT_DELETED_ID: i64 = 5;
const WILDCARD_NAME_ID: i64 = 7;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE mb_merchant (
        mb_merchant_id INTEGER PRIMARY KEY,
        name TEXT,
        address TEXT,
        latitude REAL,
        longitude REAL,
        phone TEXT,
        description TEXT,
        mb_category_id INTEGER,
        area_id INTEGER,
        image TEXT,
        delivery INTEGER,
        time_start TEXT,
        time_end TEXT,
        facebook TEXT,
        is_deleted INTEGER
    )",
    "CREATE TABLE mb_merchant_image (
        id INTEGER PRIMARY KEY,
        mb_merchant_id INTEGER NOT NULL,
        image TEXT NOT NULL
    )",
];

fn area_of(id: i64) -> i64 {
    match id {
        1..=12 => 1,
        13..=22 => 2,
        _ => 3,
    }
}

/// Merchants 1..=25 over areas 1, 2 and 3; merchant 5 is soft-deleted.
async fn seeded_repository() -> SqlMerchantRepository {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    for statement in SCHEMA {
        db.execute_unprepared(statement).await.unwrap();
    }

    for id in 1..=25i64 {
        let name = if id == WILDCARD_NAME_ID {
            "Pho 50% off".to_string()
        } else {
            format!("Merchant {id}")
        };
        let is_deleted = if id == SOFT_DELETED_ID { "1" } else { "NULL" };

        db.execute_unprepared(&format!(
            "INSERT INTO mb_merchant (mb_merchant_id, name, address, mb_category_id, area_id, delivery, is_deleted) \
             VALUES ({id}, '{name}', '', 1, {area}, 1, {is_deleted})",
            area = area_of(id),
        ))
        .await
        .unwrap();
    }

    db.execute_unprepared(
        "INSERT INTO mb_merchant_image (id, mb_merchant_id, image) \
         VALUES (1, 6, '/images/6/1.jpg'), (2, 6, '/images/6/2.jpg')",
    )
    .await
    .unwrap();

    SqlMerchantRepository::new(Arc::new(db))
}

async fn filter(repository: &SqlMerchantRepository, pairs: &[(&str, &str)]) -> Paginated<Merchant> {
    let compiled = compile(&MerchantQuery::from_pairs(pairs.iter().copied())).unwrap();

    repository
        .fetch_all(compiled.predicate, compiled.pagination)
        .await
        .unwrap()
}

fn ids(page: &Paginated<Merchant>) -> Vec<i64> {
    page.items.iter().map(|merchant| merchant.id).collect()
}

fn live_ids(areas: &[i64]) -> Vec<i64> {
    (1..=25)
        .filter(|id| *id != SOFT_DELETED_ID && areas.contains(&area_of(*id)))
        .collect()
}

#[tokio::test]
async fn pages_concatenate_to_the_unwindowed_listing() {
    let repository = seeded_repository().await;

    let unwindowed = filter(&repository, &[("areaId", "1")]).await;
    assert_eq!(ids(&unwindowed), live_ids(&[1]));

    let mut concatenated = Vec::new();
    for page in ["1", "2", "3", "4"] {
        let window = filter(&repository, &[("areaId", "1"), ("page", page), ("offset", "4")]).await;
        assert_eq!(window.total, 11);
        assert!(window.items.len() <= 4);
        concatenated.extend(ids(&window));
    }

    assert_eq!(concatenated, ids(&unwindowed));
}

#[tokio::test]
async fn set_filter_returns_exactly_the_union() {
    let repository = seeded_repository().await;

    let two_areas = filter(&repository, &[("areaId", "1,2")]).await;
    assert_eq!(ids(&two_areas), live_ids(&[1, 2]));
    assert_eq!(two_areas.total, 21);

    let three_areas = filter(&repository, &[("areaId", "1, 2 ,3")]).await;
    assert_eq!(ids(&three_areas), live_ids(&[1, 2, 3]));
    assert_eq!(three_areas.total, 24);
}

#[tokio::test]
async fn total_is_the_unwindowed_count() {
    let repository = seeded_repository().await;

    let window = filter(&repository, &[("areaId", "2"), ("page", "2"), ("offset", "3")]).await;

    assert_eq!(ids(&window), vec![16, 17, 18]);
    assert_eq!(window.total, live_ids(&[2]).len() as i64);
}

#[tokio::test]
async fn soft_deleted_rows_are_never_listed() {
    let repository = seeded_repository().await;

    let all = repository.fetch_all(Predicate::new(), None).await.unwrap();

    assert_eq!(all.total, 24);
    assert!(!ids(&all).contains(&SOFT_DELETED_ID));
}

#[tokio::test]
async fn soft_deleted_merchant_is_not_found() {
    let repository = seeded_repository().await;

    let err = repository.get_by_id(SOFT_DELETED_ID).await.unwrap_err();
    assert_eq!(err, CoreError::NotFound);

    let merchant = repository.get_by_id(6).await.unwrap();
    assert_eq!(merchant.address, Some(String::new()));
    assert_eq!(merchant.phone, None);
    assert_eq!(
        merchant
            .images
            .iter()
            .map(|image| image.image.as_str())
            .collect::<Vec<&str>>(),
        vec!["/images/6/1.jpg", "/images/6/2.jpg"]
    );
}

#[tokio::test]
async fn keyword_matches_case_insensitively_and_literally() {
    let repository = seeded_repository().await;

    let wildcard = repository.search("50%".to_string()).await.unwrap();
    assert_eq!(ids(&wildcard), vec![WILDCARD_NAME_ID]);
    assert_eq!(wildcard.total, 1);

    let percent_only = repository.search("%".to_string()).await.unwrap();
    assert_eq!(ids(&percent_only), vec![WILDCARD_NAME_ID]);

    let prefix = repository.search("MERCHANT 1".to_string()).await.unwrap();
    let mut expected = vec![1];
    expected.extend(10..=19);
    assert_eq!(ids(&prefix), expected);
    assert_eq!(prefix.total, expected.len() as i64);
}
