use crate::support::CatalogFixture;
use pantry::error::CatalogError;
use pantry::types::Product;

#[test]
fn get_all_returns_complete_list() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();
    let source = fx.write_source("fake1.jpg");
    facade
        .append(Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();
    facade
        .append(Product::new(2, "Burger", 15.0, ""))
        .unwrap();

    let all = facade.get_all();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[1].id, 2);
}

#[test]
fn get_by_id_returns_matching_record() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();
    let source = fx.write_source("fake1.jpg");
    facade
        .append(Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();

    let found = facade.get_by_id(1).unwrap();

    assert_eq!(found.id, 1);
    assert_eq!(found.description, "Hot Dog");
}

#[test]
fn exists_reflects_record_presence() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();
    let source = fx.write_source("fake1.jpg");
    facade
        .append(Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();

    assert!(facade.exists(1));
    assert!(!facade.exists(99));
}

#[test]
fn append_reaches_both_stores() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();
    let source = fx.write_source("fake1.jpg");
    assert!(!fx.stored("1.jpg").exists());

    let stored = facade
        .append(Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();

    assert!(stored);
    assert!(facade.exists(1));
    assert!(fx.stored("1.jpg").exists());
}

#[test]
fn remove_reaches_both_stores() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();
    let source = fx.write_source("fake1.jpg");
    facade
        .append(Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();
    assert!(fx.stored("1.jpg").exists());

    facade.remove(1).unwrap();

    assert!(!facade.exists(1));
    assert!(!fx.stored("1.jpg").exists());
}

#[test]
fn failures_pass_through_untranslated() {
    let fx = CatalogFixture::new();
    let mut facade = fx.facade();

    assert!(matches!(
        facade.get_by_id(99),
        Err(CatalogError::NotFound(99))
    ));
    assert!(matches!(facade.remove(99), Err(CatalogError::NotFound(99))));
    assert!(matches!(
        facade.image_path(99),
        Err(CatalogError::ImageNotFound(99))
    ));
}
