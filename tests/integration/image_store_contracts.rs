use crate::support::CatalogFixture;
use pantry::error::CatalogError;
use pantry::image::ImageStore;
use pantry::types::Product;
use std::fs;

#[test]
fn save_copies_readable_source_to_derived_path() {
    let fx = CatalogFixture::new();
    let source = fx.write_source("fake.jpg");
    let product = Product::new(1, "Produto Teste", 10.0, source);

    let stored = fx.store().save(&product).unwrap();

    assert!(stored);
    assert!(fx.stored("1.jpg").exists());
}

#[test]
fn save_resolves_relative_source_against_source_root() {
    let fx = CatalogFixture::new();
    fx.write_source("fake.png");
    let product = Product::new(7, "Soda", 4.0, "fake.png");

    assert!(fx.store().save(&product).unwrap());
    assert!(fx.stored("7.png").exists());
}

#[test]
fn save_with_unreadable_source_stores_nothing() {
    let fx = CatalogFixture::new();
    let product = Product::new(1, "Produto Teste", 10.0, "missing.jpg");

    let stored = fx.store().save(&product).unwrap();

    assert!(!stored);
    assert!(fs::read_dir(&fx.image_root).unwrap().next().is_none());
}

#[test]
fn save_with_extensionless_source_stores_nothing() {
    let fx = CatalogFixture::new();
    let source = fx.write_source("fake");
    let product = Product::new(1, "Produto Teste", 10.0, source);

    assert!(!fx.store().save(&product).unwrap());
    assert!(fs::read_dir(&fx.image_root).unwrap().next().is_none());
}

#[test]
fn save_overwrites_existing_file_at_same_path() {
    let fx = CatalogFixture::new();
    let source = fx.write_source("fake.jpg");
    fs::write(fx.stored("1.jpg"), b"old bytes").unwrap();
    let product = Product::new(1, "Produto Teste", 10.0, source);

    assert!(fx.store().save(&product).unwrap());
    assert_eq!(fs::read(fx.stored("1.jpg")).unwrap(), b"fake image bytes");
}

#[test]
fn update_replaces_stored_file_across_extension_change() {
    let fx = CatalogFixture::new();
    let store = fx.store();

    let first = fx.write_source("fake1.jpg");
    store.save(&Product::new(1, "Hot Dog", 10.4, first)).unwrap();
    assert!(fx.stored("1.jpg").exists());

    let second = fx.write_source("fake2.png");
    let stored = store
        .update(&Product::new(1, "Super Hot Dog", 20.0, second))
        .unwrap();

    assert!(stored);
    assert!(!fx.stored("1.jpg").exists());
    assert!(fx.stored("1.png").exists());
}

#[test]
fn update_without_prior_file_falls_back_to_save() {
    let fx = CatalogFixture::new();
    let source = fx.write_source("fake.jpg");

    let stored = fx
        .store()
        .update(&Product::new(1, "Hot Dog", 10.4, source))
        .unwrap();

    assert!(stored);
    assert!(fx.stored("1.jpg").exists());
}

#[test]
fn remove_deletes_stored_file_regardless_of_extension() {
    let fx = CatalogFixture::new();
    let store = fx.store();
    let source = fx.write_source("fake.png");
    store.save(&Product::new(1, "Hot Dog", 10.4, source)).unwrap();

    store.remove(1).unwrap();

    assert!(!fx.stored("1.png").exists());
}

#[test]
fn remove_without_stored_file_is_image_not_found() {
    let fx = CatalogFixture::new();
    let err = fx.store().remove(99).unwrap_err();
    assert!(matches!(err, CatalogError::ImageNotFound(99)));
}

#[test]
fn image_path_locates_stored_file() {
    let fx = CatalogFixture::new();
    let store = fx.store();
    let source = fx.write_source("fake.jpg");
    store.save(&Product::new(1, "Hot Dog", 10.4, source)).unwrap();

    assert_eq!(store.image_path(1).unwrap(), fx.stored("1.jpg"));
}

#[test]
fn image_path_without_stored_file_is_image_not_found() {
    let fx = CatalogFixture::new();
    let err = fx.store().image_path(1).unwrap_err();
    assert!(matches!(err, CatalogError::ImageNotFound(1)));
}

#[test]
fn lookup_matches_whole_id_stem_only() {
    // The file for id 10 must never satisfy a lookup for id 1.
    let fx = CatalogFixture::new();
    let store = fx.store();
    let source = fx.write_source("fake.jpg");
    store.save(&Product::new(10, "Burger", 12.5, source)).unwrap();

    assert!(matches!(
        store.image_path(1),
        Err(CatalogError::ImageNotFound(1))
    ));
    assert_eq!(store.image_path(10).unwrap(), fx.stored("10.jpg"));
}
