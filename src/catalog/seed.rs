//! Demo Catalog Seed
//!
//! Populates an empty database with a small brand and laptop set so the server
//! is searchable out of the box. Applied via the binary's `--seed` flag; a
//! non-empty catalog is left untouched.

use anyhow::Result;

use super::store::SqliteCatalog;
use super::types::NewLaptop;

struct SeedLaptop {
    brand_slug: &'static str,
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    processor: &'static str,
    ram: &'static str,
    storage: &'static str,
    graphics: &'static str,
    display: &'static str,
    price: i64,
    stock_quantity: i64,
    is_available: bool,
}

const SEED_BRANDS: &[(&str, &str)] = &[
    ("Dell", "dell"),
    ("HP", "hp"),
    ("Asus", "asus"),
    ("Lenovo", "lenovo"),
];

const SEED_LAPTOPS: &[SeedLaptop] = &[
    SeedLaptop {
        brand_slug: "dell",
        name: "Dell XPS 15 9520",
        slug: "dell-xps-15-9520",
        description: "Premium laptop with stunning display and powerful performance for professionals.",
        processor: "Intel Core i7 12th Gen",
        ram: "16GB DDR5",
        storage: "512GB SSD",
        graphics: "NVIDIA RTX 3050",
        display: "15.6 inch FHD+",
        price: 185000,
        stock_quantity: 8,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "dell",
        name: "Dell Inspiron 14",
        slug: "dell-inspiron-14",
        description: "Dependable everyday laptop for work and study.",
        processor: "Intel Core i5 12th Gen",
        ram: "8GB DDR4",
        storage: "512GB SSD",
        graphics: "Intel Iris Xe Graphics",
        display: "14 inch FHD",
        price: 78000,
        stock_quantity: 15,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "hp",
        name: "HP Pavilion 15",
        slug: "hp-pavilion-15",
        description: "Versatile laptop perfect for everyday computing and entertainment.",
        processor: "Intel Core i5 11th Gen",
        ram: "8GB DDR4",
        storage: "512GB SSD",
        graphics: "Intel Iris Xe Graphics",
        display: "15.6 inch FHD",
        price: 72000,
        stock_quantity: 12,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "hp",
        name: "HP Omen 16",
        slug: "hp-omen-16",
        description: "Gaming powerhouse with advanced cooling and a high refresh rate panel.",
        processor: "Intel Core i7 12th Gen",
        ram: "16GB DDR5",
        storage: "1TB SSD",
        graphics: "NVIDIA RTX 3060",
        display: "16.1 inch QHD 165Hz",
        price: 165000,
        stock_quantity: 5,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "asus",
        name: "Asus TUF Gaming A15",
        slug: "asus-tuf-gaming-a15",
        description: "Durable gaming laptop with AMD Ryzen performance at a sharp price.",
        processor: "AMD Ryzen 7 5800H",
        ram: "16GB DDR4",
        storage: "512GB SSD",
        graphics: "NVIDIA RTX 3050 Ti",
        display: "15.6 inch FHD 144Hz",
        price: 98000,
        stock_quantity: 10,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "asus",
        name: "Asus ZenBook 14 OLED",
        slug: "asus-zenbook-14-oled",
        description: "Ultraportable with a vivid OLED screen and all-day battery life.",
        processor: "AMD Ryzen 5 7530U",
        ram: "16GB LPDDR4X",
        storage: "512GB SSD",
        graphics: "AMD Radeon Graphics",
        display: "14 inch 2.8K OLED",
        price: 89000,
        stock_quantity: 7,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "lenovo",
        name: "Lenovo ThinkPad E14",
        slug: "lenovo-thinkpad-e14",
        description: "Business laptop with a legendary keyboard and robust build quality.",
        processor: "Intel Core i5 12th Gen",
        ram: "16GB DDR4",
        storage: "512GB SSD",
        graphics: "Intel Iris Xe Graphics",
        display: "14 inch FHD",
        price: 85000,
        stock_quantity: 9,
        is_available: true,
    },
    SeedLaptop {
        brand_slug: "lenovo",
        name: "Lenovo Legion 5 Pro",
        slug: "lenovo-legion-5-pro",
        description: "High-end gaming laptop driven by AMD Ryzen and a 16:10 QHD panel.",
        processor: "AMD Ryzen 7 6800H",
        ram: "32GB DDR5",
        storage: "1TB SSD",
        graphics: "NVIDIA RTX 3070 Ti",
        display: "16 inch WQXGA 165Hz",
        price: 210000,
        stock_quantity: 0,
        is_available: false,
    },
];

/// Seeds the demo catalog. Returns the number of laptops inserted, or 0 if the
/// catalog already holds data.
pub fn seed_demo_catalog(store: &SqliteCatalog) -> Result<usize> {
    if store.count_laptops()? > 0 {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    let mut brand_ids = std::collections::HashMap::new();
    for (name, slug) in SEED_BRANDS {
        let logo = format!("https://res.cloudinary.com/demo/image/upload/v1/logo/{}.png", slug);
        let brand = store.insert_brand(name, slug, Some(&logo))?;
        brand_ids.insert(*slug, brand.id);
    }

    for laptop in SEED_LAPTOPS {
        let brand_id = brand_ids
            .get(laptop.brand_slug)
            .expect("seed laptop references a seed brand")
            .clone();
        store.insert_laptop(NewLaptop {
            brand_id,
            name: laptop.name.to_string(),
            slug: laptop.slug.to_string(),
            description: laptop.description.to_string(),
            processor: laptop.processor.to_string(),
            ram: laptop.ram.to_string(),
            storage: laptop.storage.to_string(),
            graphics: laptop.graphics.to_string(),
            display: laptop.display.to_string(),
            price: laptop.price,
            stock_quantity: laptop.stock_quantity,
            is_available: laptop.is_available,
            main_image: format!(
                "https://res.cloudinary.com/demo/image/upload/v1/laptop/{}.jpg",
                laptop.slug
            ),
        })?;
        inserted += 1;
    }

    tracing::info!("Seeded {} brands and {} laptops", SEED_BRANDS.len(), inserted);
    Ok(inserted)
}
