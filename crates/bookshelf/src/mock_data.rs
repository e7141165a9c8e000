//! Demo catalog used by the `--seed` flag.

use chrono::NaiveDate;

use bookshelf_core::catalog::{CatalogError, DateParseError, NewAuthor};

use crate::catalog::{Catalog, Result};

struct SeedBook {
    author: &'static str,
    isbn: i64,
    title: &'static str,
    published: (i32, u32, u32),
}

/// Builds a seed date. A typo in the tables below is an error, not a skip.
fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CatalogError::InvalidDate(DateParseError::OutOfRange { year, month, day }))
}

fn seed_authors() -> Result<Vec<NewAuthor>> {
    Ok(vec![
        NewAuthor::new("Jane Austen", date(1775, 12, 16)?)
            .with_date_of_death(date(1817, 7, 18)?),
        NewAuthor::new("Mary Shelley", date(1797, 8, 30)?).with_date_of_death(date(1851, 2, 1)?),
        NewAuthor::new("Herman Melville", date(1819, 8, 1)?)
            .with_date_of_death(date(1891, 9, 28)?),
        NewAuthor::new("Chimamanda Ngozi Adichie", date(1977, 9, 15)?),
    ])
}

const SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        author: "Jane Austen",
        isbn: 9780141439518,
        title: "Pride and Prejudice",
        published: (1813, 1, 28),
    },
    SeedBook {
        author: "Jane Austen",
        isbn: 9780141439587,
        title: "Emma",
        published: (1815, 12, 23),
    },
    SeedBook {
        author: "Mary Shelley",
        isbn: 9780141439471,
        title: "Frankenstein",
        published: (1818, 1, 1),
    },
    SeedBook {
        author: "Herman Melville",
        isbn: 9780142437247,
        title: "Moby-Dick",
        published: (1851, 10, 18),
    },
    SeedBook {
        author: "Chimamanda Ngozi Adichie",
        isbn: 9780007200283,
        title: "Half of a Yellow Sun",
        published: (2006, 9, 12),
    },
];

/// Inserts the demo authors and books when the catalog is empty.
///
/// Returns the number of books inserted; a non-empty catalog is left alone.
pub async fn seed_catalog(catalog: &Catalog) -> Result<usize> {
    let stats = catalog.stats().await?;
    if stats.authors > 0 || stats.books > 0 {
        tracing::info!(
            authors = stats.authors,
            books = stats.books,
            "Catalog already populated, skipping seed"
        );
        return Ok(0);
    }

    for author in seed_authors()? {
        catalog.create_author(author).await?;
    }

    let mut inserted = 0;
    for seed in SEED_BOOKS {
        let (year, month, day) = seed.published;
        let published = date(year, month, day)?;
        catalog
            .create_book(seed.author, seed.isbn, seed.title, published)
            .await?;
        inserted += 1;
    }

    tracing::info!(books = inserted, "Seeded demo catalog");
    Ok(inserted)
}
