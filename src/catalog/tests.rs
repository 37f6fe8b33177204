//! Catalog Module Tests
//!
//! Validates the SQLite store: snapshot filtering and projections, search-log
//! mechanics, seeding, and on-disk persistence.
//!
//! ## Test Scopes
//! - **Snapshots**: Availability filter, insertion order, projection widths.
//! - **Search log**: Append/read round trips, ordering, limits.
//! - **Seed**: Idempotence and demo content.

#[cfg(test)]
mod tests {
    use crate::catalog::seed::seed_demo_catalog;
    use crate::catalog::store::{Catalog, SqliteCatalog};
    use crate::catalog::types::NewLaptop;

    fn new_laptop(brand_id: &str, name: &str, slug: &str, available: bool) -> NewLaptop {
        NewLaptop {
            brand_id: brand_id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: format!("{} description", name),
            processor: "Intel Core i5".to_string(),
            ram: "8GB".to_string(),
            storage: "512GB SSD".to_string(),
            graphics: "Integrated".to_string(),
            display: "15.6 inch".to_string(),
            price: 100_000,
            stock_quantity: 3,
            is_available: available,
            main_image: String::new(),
        }
    }

    // ============================================================
    // SNAPSHOT TESTS
    // ============================================================

    #[test]
    fn test_list_available_filters_unavailable() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let brand = store.insert_brand("Dell", "dell", None).unwrap();

        store
            .insert_laptop(new_laptop(&brand.id, "Dell XPS 13", "dell-xps-13", true))
            .unwrap();
        store
            .insert_laptop(new_laptop(&brand.id, "Dell XPS 17", "dell-xps-17", false))
            .unwrap();

        let laptops = store.list_available().unwrap();
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].name, "Dell XPS 13");
        assert!(laptops[0].is_available);
    }

    #[test]
    fn test_list_available_preserves_insertion_order() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let brand = store.insert_brand("HP", "hp", None).unwrap();

        for i in 0..5 {
            let name = format!("HP Model {}", i);
            let slug = format!("hp-model-{}", i);
            store
                .insert_laptop(new_laptop(&brand.id, &name, &slug, true))
                .unwrap();
        }

        let laptops = store.list_available().unwrap();
        let names: Vec<&str> = laptops.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["HP Model 0", "HP Model 1", "HP Model 2", "HP Model 3", "HP Model 4"]
        );
    }

    #[test]
    fn test_full_snapshot_joins_brand_name() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let brand = store.insert_brand("Asus", "asus", None).unwrap();
        store
            .insert_laptop(new_laptop(&brand.id, "Asus Vivobook", "asus-vivobook", true))
            .unwrap();

        let laptops = store.list_available().unwrap();
        assert_eq!(laptops[0].brand_name, "Asus");
        assert_eq!(laptops[0].brand_id, brand.id);
    }

    #[test]
    fn test_summary_projection_matches_full_snapshot() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let brand = store.insert_brand("Lenovo", "lenovo", None).unwrap();
        store
            .insert_laptop(new_laptop(&brand.id, "Lenovo Yoga 7", "lenovo-yoga-7", true))
            .unwrap();
        store
            .insert_laptop(new_laptop(&brand.id, "Lenovo Flex 5", "lenovo-flex-5", false))
            .unwrap();

        let summaries = store.list_available_summaries().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Lenovo Yoga 7");
        assert_eq!(summaries[0].slug, "lenovo-yoga-7");
        assert_eq!(summaries[0].brand_name, "Lenovo");
        assert_eq!(summaries[0].price, 100_000);
    }

    #[test]
    fn test_empty_catalog_yields_empty_snapshots() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        assert!(store.list_available().unwrap().is_empty());
        assert!(store.list_available_summaries().unwrap().is_empty());
    }

    // ============================================================
    // SEARCH LOG TESTS
    // ============================================================

    #[test]
    fn test_log_search_round_trip() {
        let store = SqliteCatalog::open_in_memory().unwrap();

        store.log_search("dell xps", 3).unwrap();
        let entries = store.recent_searches(10).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].search_query, "dell xps");
        assert_eq!(entries[0].results_count, 3);
    }

    #[test]
    fn test_log_search_keeps_zero_result_entries() {
        let store = SqliteCatalog::open_in_memory().unwrap();

        store.log_search("nonexistent brand", 0).unwrap();
        let entries = store.recent_searches(10).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].results_count, 0);
    }

    #[test]
    fn test_recent_searches_newest_first_and_limited() {
        let store = SqliteCatalog::open_in_memory().unwrap();

        for i in 0..5 {
            store.log_search(&format!("query {}", i), i).unwrap();
        }

        let entries = store.recent_searches(3).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].search_query, "query 4");
        assert_eq!(entries[1].search_query, "query 3");
        assert_eq!(entries[2].search_query, "query 2");
    }

    // ============================================================
    // SEED TESTS
    // ============================================================

    #[test]
    fn test_seed_populates_empty_catalog() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let inserted = seed_demo_catalog(&store).unwrap();
        assert!(inserted > 0);

        let laptops = store.list_available().unwrap();
        assert!(laptops.iter().any(|l| l.name == "Dell XPS 15 9520"));
        // The seed includes one out-of-stock record that must not surface.
        assert!(laptops.iter().all(|l| l.is_available));
    }

    #[test]
    fn test_seed_skips_populated_catalog() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let first = seed_demo_catalog(&store).unwrap();
        let second = seed_demo_catalog(&store).unwrap();

        assert!(first > 0);
        assert_eq!(second, 0);
        assert_eq!(store.count_laptops().unwrap(), first);
    }

    // ============================================================
    // PERSISTENCE TESTS
    // ============================================================

    #[test]
    fn test_catalog_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");

        {
            let store = SqliteCatalog::open(&path).unwrap();
            let brand = store.insert_brand("Dell", "dell", None).unwrap();
            store
                .insert_laptop(new_laptop(&brand.id, "Dell G15", "dell-g15", true))
                .unwrap();
            store.log_search("g15", 1).unwrap();
        }

        let store = SqliteCatalog::open(&path).unwrap();
        assert_eq!(store.list_available().unwrap().len(), 1);
        assert_eq!(store.recent_searches(10).unwrap().len(), 1);
    }
}
