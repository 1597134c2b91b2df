//! CSV export of the currently visible page.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::api::Product;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The visible page is empty; no file is produced.
    #[error("nothing to export")]
    NothingToExport,

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the given page slice to `products_page{page}_{date}.csv` in
/// `dir`, date in UTC. Export scope is the visible page only, never the
/// whole filtered set, and the operation reads view state without
/// changing it.
///
/// Text columns are always quoted (internal quotes doubled), images are
/// joined with `"; "`, and an absent category renders as an empty string.
/// The file starts with a UTF-8 BOM so spreadsheet tools pick the right
/// encoding.
pub fn export_page(slice: &[&Product], page: usize, dir: &Path) -> Result<PathBuf, ExportError> {
    if slice.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let name = format!("products_page{}_{}.csv", page, Utc::now().format("%Y-%m-%d"));
    let path = dir.join(name);

    let mut file = File::create(&path)?;
    file.write_all("\u{feff}".as_bytes())?;
    file.write_all(b"id,title,price,category,images,description\n")?;

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(file);

    for product in slice {
        let id = product.id.to_string();
        let price = product.price.to_string();
        let images = product.images.join("; ");
        wtr.write_record([
            id.as_str(),
            product.title.as_str(),
            price.as_str(),
            product
                .category
                .as_ref()
                .map(|c| c.name.as_str())
                .unwrap_or(""),
            images.as_str(),
            product.description.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = slice.len(), "exported page");
    Ok(path)
}
