//! Catalog Store
//!
//! SQLite-backed implementation of the catalog read/log collaborator.
//!
//! The [`Catalog`] trait is the seam between the HTTP layer and persistence:
//! handlers receive an `Arc<dyn Catalog>` and stay oblivious to the backend, so
//! tests can substitute counting fakes and a future indexed store can slot in
//! behind the same contract.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::types::{Brand, Laptop, LaptopSummary, NewLaptop, SearchLogEntry};

/// Read and log operations the search endpoints depend on.
///
/// Both snapshot reads apply the same `is_available` filter; they differ only in
/// projection width. `log_search` must complete before a search response is
/// considered successful — the append is synchronous by design.
pub trait Catalog: Send + Sync {
    /// Full projection of every available laptop, in insertion order.
    fn list_available(&self) -> Result<Vec<Laptop>>;

    /// Minimal projection of every available laptop, in insertion order.
    fn list_available_summaries(&self) -> Result<Vec<LaptopSummary>>;

    /// Append one entry to the search log.
    fn log_search(&self, query: &str, results_count: usize) -> Result<()>;

    /// Most recent search-log entries, newest first.
    fn recent_searches(&self, limit: usize) -> Result<Vec<SearchLogEntry>>;
}

const FULL_SNAPSHOT_SQL: &str = "
    SELECT l.id, l.brand_id, b.name, l.name, l.slug, l.description, l.processor,
           l.ram, l.storage, l.graphics, l.display, l.price, l.stock_quantity,
           l.is_available, l.main_image
    FROM laptops l
    JOIN brands b ON b.id = l.brand_id
    WHERE l.is_available = 1
    ORDER BY l.rowid";

const SUMMARY_SNAPSHOT_SQL: &str = "
    SELECT l.id, l.name, l.slug, l.main_image, l.price, b.name
    FROM laptops l
    JOIN brands b ON b.id = l.brand_id
    WHERE l.is_available = 1
    ORDER BY l.rowid";

/// The catalog database: brands, laptops and the search log in one SQLite file.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open catalog database at {}", path.display()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS brands (
                id        TEXT PRIMARY KEY,
                name      TEXT NOT NULL,
                slug      TEXT NOT NULL UNIQUE,
                logo_url  TEXT
            );

            CREATE TABLE IF NOT EXISTS laptops (
                id             TEXT PRIMARY KEY,
                brand_id       TEXT NOT NULL REFERENCES brands(id),
                name           TEXT NOT NULL,
                slug           TEXT NOT NULL UNIQUE,
                description    TEXT NOT NULL DEFAULT '',
                processor      TEXT NOT NULL DEFAULT '',
                ram            TEXT NOT NULL DEFAULT '',
                storage        TEXT NOT NULL DEFAULT '',
                graphics       TEXT NOT NULL DEFAULT '',
                display        TEXT NOT NULL DEFAULT '',
                price          INTEGER NOT NULL,
                stock_quantity INTEGER NOT NULL DEFAULT 0,
                is_available   INTEGER NOT NULL DEFAULT 1,
                main_image     TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS search_logs (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                search_query  TEXT NOT NULL,
                results_count INTEGER NOT NULL,
                created_at    TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("catalog connection lock poisoned"))
    }

    pub fn insert_brand(&self, name: &str, slug: &str, logo_url: Option<&str>) -> Result<Brand> {
        let brand = Brand {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            logo_url: logo_url.map(str::to_string),
        };
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO brands (id, name, slug, logo_url) VALUES (?1, ?2, ?3, ?4)",
            params![brand.id, brand.name, brand.slug, brand.logo_url],
        )?;
        Ok(brand)
    }

    pub fn insert_laptop(&self, new: NewLaptop) -> Result<Laptop> {
        let id = Uuid::new_v4().to_string();
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO laptops (id, brand_id, name, slug, description, processor, ram,
                                  storage, graphics, display, price, stock_quantity,
                                  is_available, main_image)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                id,
                new.brand_id,
                new.name,
                new.slug,
                new.description,
                new.processor,
                new.ram,
                new.storage,
                new.graphics,
                new.display,
                new.price,
                new.stock_quantity,
                new.is_available,
                new.main_image,
            ],
        )?;
        let brand_name: String = conn.query_row(
            "SELECT name FROM brands WHERE id = ?1",
            params![new.brand_id],
            |row| row.get(0),
        )?;
        Ok(Laptop {
            id,
            brand_id: new.brand_id,
            brand_name,
            name: new.name,
            slug: new.slug,
            description: new.description,
            processor: new.processor,
            ram: new.ram,
            storage: new.storage,
            graphics: new.graphics,
            display: new.display,
            price: new.price,
            stock_quantity: new.stock_quantity,
            is_available: new.is_available,
            main_image: new.main_image,
        })
    }

    pub fn count_laptops(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM laptops", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl Catalog for SqliteCatalog {
    fn list_available(&self) -> Result<Vec<Laptop>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(FULL_SNAPSHOT_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Laptop {
                id: row.get(0)?,
                brand_id: row.get(1)?,
                brand_name: row.get(2)?,
                name: row.get(3)?,
                slug: row.get(4)?,
                description: row.get(5)?,
                processor: row.get(6)?,
                ram: row.get(7)?,
                storage: row.get(8)?,
                graphics: row.get(9)?,
                display: row.get(10)?,
                price: row.get(11)?,
                stock_quantity: row.get(12)?,
                is_available: row.get(13)?,
                main_image: row.get(14)?,
            })
        })?;
        let mut laptops = Vec::new();
        for row in rows {
            laptops.push(row?);
        }
        Ok(laptops)
    }

    fn list_available_summaries(&self) -> Result<Vec<LaptopSummary>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(SUMMARY_SNAPSHOT_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(LaptopSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                slug: row.get(2)?,
                main_image: row.get(3)?,
                price: row.get(4)?,
                brand_name: row.get(5)?,
            })
        })?;
        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }

    fn log_search(&self, query: &str, results_count: usize) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO search_logs (search_query, results_count, created_at)
             VALUES (?1, ?2, ?3)",
            params![query, results_count as i64, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn recent_searches(&self, limit: usize) -> Result<Vec<SearchLogEntry>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT search_query, results_count, created_at
             FROM search_logs
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        let mut entries = Vec::new();
        for row in rows {
            let (search_query, results_count, created_at) = row?;
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .with_context(|| format!("malformed search log timestamp: {}", created_at))?
                .with_timezone(&Utc);
            entries.push(SearchLogEntry {
                search_query,
                results_count: results_count as usize,
                created_at,
            });
        }
        Ok(entries)
    }
}
