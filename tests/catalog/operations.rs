//! Catalog-level behaviour: validation gates every entry point and errors
//! stay in their own category.

use movie_catalog::{Catalog, CatalogError, FilterParams, MovieStore, TopRatedParams};

use crate::support::{input, seeded_catalog, titles};

#[test]
fn create_then_get() {
    let catalog = Catalog::new(MovieStore::new());
    let created = catalog.create(input("Alien", 1979, 8.5)).unwrap();
    assert_eq!(created.id, 1);

    let fetched = catalog.get(1).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_rejects_exclusive_bounds() {
    let catalog = seeded_catalog();
    for (year, rating, field) in [
        (1900, 5.0, "year"),
        (2100, 5.0, "year"),
        (2000, 0.0, "rating"),
        (2000, 10.0, "rating"),
    ] {
        match catalog.create(input("Edge", year, rating)) {
            Err(CatalogError::Validation(e)) => assert!(e.has_field(field), "{year} {rating}"),
            other => panic!("expected validation error for {year}/{rating}, got {other:?}"),
        }
    }
    assert_eq!(catalog.store().len().unwrap(), 2);
}

#[test]
fn id_zero_is_validation_not_not_found() {
    let catalog = seeded_catalog();
    match catalog.get(0) {
        Err(CatalogError::Validation(e)) => assert!(e.has_field("id")),
        other => panic!("unexpected: {other:?}"),
    }
    match catalog.delete(0) {
        Err(CatalogError::Validation(e)) => assert!(e.has_field("id")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn absent_id_is_not_found() {
    let catalog = seeded_catalog();
    assert_eq!(catalog.get(3), Err(CatalogError::NotFound(3)));
    assert_eq!(catalog.delete(3), Err(CatalogError::NotFound(3)));
}

#[test]
fn delete_then_get() {
    let catalog = seeded_catalog();
    catalog.delete(2).unwrap();
    assert_eq!(catalog.get(2), Err(CatalogError::NotFound(2)));
    assert_eq!(catalog.delete(2), Err(CatalogError::NotFound(2)));
}

#[test]
fn list_filters() {
    let catalog = seeded_catalog();
    let all = catalog.list(&FilterParams::default()).unwrap();
    assert_eq!(all.len(), 2);

    let none = catalog
        .list(&FilterParams {
            min_rating: Some(9.0),
            max_year: Some(2005),
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn list_rejects_out_of_range_min_rating() {
    let catalog = seeded_catalog();
    let err = catalog
        .list(&FilterParams {
            min_rating: Some(-1.0),
            max_year: None,
        })
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
}

#[test]
fn top_rated_default_limit() {
    let catalog = seeded_catalog();
    catalog.create(input("Alien", 1979, 8.5)).unwrap();
    catalog.create(input("Heat", 1995, 8.3)).unwrap();
    let top = catalog.top_rated(&TopRatedParams::default()).unwrap();
    assert_eq!(titles(&top), ["Inception", "Matrix", "Alien"]);
}

#[test]
fn top_rated_limit_bounds() {
    let catalog = seeded_catalog();
    assert_eq!(
        titles(&catalog.top_rated(&TopRatedParams { limit: Some(1) }).unwrap()),
        ["Inception"]
    );
    for bad in [0, 10, -3] {
        let result = catalog.top_rated(&TopRatedParams { limit: Some(bad) });
        assert!(matches!(result, Err(CatalogError::Validation(_))), "{bad}");
    }
}
