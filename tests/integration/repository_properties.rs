use pantry::error::CatalogError;
use pantry::repository::ProductRepository;
use pantry::types::Product;
use proptest::prelude::*;

proptest! {
    /// Append keeps length, membership and insertion order coherent under
    /// arbitrary id sequences, duplicates included.
    #[test]
    fn append_keeps_store_coherent(ids in proptest::collection::vec(1u32..100, 1..30)) {
        let mut repo = ProductRepository::new();
        let mut admitted = Vec::new();

        for id in ids {
            match repo.append(Product::new(id, "item", 1.0, "")) {
                Ok(()) => admitted.push(id),
                Err(CatalogError::DuplicateId(rejected)) => {
                    prop_assert_eq!(rejected, id);
                    prop_assert!(admitted.contains(&id));
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        prop_assert_eq!(repo.len(), admitted.len());
        let order: Vec<u32> = repo.get_all().iter().map(|p| p.id).collect();
        prop_assert_eq!(&order, &admitted);
        for id in &admitted {
            prop_assert!(repo.exists(*id));
            prop_assert!(repo.get_by_id(*id).is_ok());
        }
    }
}
