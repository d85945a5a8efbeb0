//! Row extraction from the dependency-versions HTML tables
//!
//! ```text
//! <table>
//!   <thead><tr><th>Group ID</th><th>Artifact ID</th><th>Version</th></tr></thead>
//!   <tbody>
//!     <tr><td><code>org.springframework</code></td><td><code>spring-core</code></td><td><code>6.0.9</code></td></tr>
//!   </tbody>
//! </table>
//! ```

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::reference::error::FetchError;
use crate::reference::types::{ReferencePackage, ReferenceProperty};

/// Column holding the group id in a coordinates row
const GROUP_CELL: usize = 0;
/// Column holding the artifact id in a coordinates row
const NAME_CELL: usize = 1;
/// Column holding the version in a coordinates row
const VERSION_CELL: usize = 2;
/// Column holding the property name in a properties row
const PROPERTY_CELL: usize = 1;

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::InvalidResponse(e.to_string()))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Cell texts of every data row in the `body_index`-th `<tbody>`.
///
/// Rows without `<td>` cells (header rows) are skipped. A page without that
/// table body yields no rows.
pub fn table_rows(html: &str, body_index: usize) -> Result<Vec<Vec<String>>, FetchError> {
    let tbody = selector("tbody")?;
    let tr = selector("tr")?;
    let td = selector("td")?;

    let document = Html::parse_document(html);
    let Some(body) = document.select(&tbody).nth(body_index) else {
        debug!("No table body at index {}", body_index);
        return Ok(Vec::new());
    };

    Ok(body
        .select(&tr)
        .map(|row| row.select(&td).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect())
}

/// Parse group / artifact / version rows
pub fn parse_packages(html: &str, body_index: usize) -> Result<Vec<ReferencePackage>, FetchError> {
    let rows = table_rows(html, body_index)?;
    Ok(rows
        .iter()
        .filter_map(|cells| {
            let package = ReferencePackage::new(
                cells.get(GROUP_CELL)?,
                cells.get(NAME_CELL)?,
                cells.get(VERSION_CELL)?,
            );
            Some(package)
        })
        .collect())
}

/// Parse library / property rows, keeping the property name
pub fn parse_properties(
    html: &str,
    body_index: usize,
) -> Result<Vec<ReferenceProperty>, FetchError> {
    let rows = table_rows(html, body_index)?;
    Ok(rows
        .iter()
        .filter_map(|cells| cells.get(PROPERTY_CELL).map(|p| ReferenceProperty::new(p)))
        .collect())
}
