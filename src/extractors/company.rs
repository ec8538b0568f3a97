// src/extractors/company.rs
use crate::directory::models::{CompanyRecord, MetadataRow};
use crate::extractors::fields::parse_rows;
use crate::extractors::text::normalize;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// Company heading blocks. Matches the whole class attribute, not each class on its own.
static COMPANY_HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[class="fontsubsection nomarginpadding lmargin opensans"]"#)
        .expect("Failed to compile COMPANY_HEADING_SELECTOR")
});

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Failed to compile CELL_SELECTOR"));

/// Parses every company block on a category page.
///
/// Each heading is followed by a sibling element holding the company's
/// metadata table. Records are logged as they are produced. A page without
/// headings yields an empty list.
pub fn parse_companies(html: &str) -> Result<Vec<CompanyRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let mut companies = Vec::new();

    for heading in document.select(&COMPANY_HEADING_SELECTOR) {
        let company_name = normalize(&heading.text().collect::<String>());

        let block = next_sibling_element(heading).ok_or_else(|| {
            tracing::error!("No metadata block follows heading for '{}'", company_name);
            ExtractError::MissingMetadataBlock { company: company_name.clone() }
        })?;

        let rows = metadata_rows(block);
        tracing::debug!("Company '{}': {} metadata rows", company_name, rows.len());

        let mut record = parse_rows(rows);
        record.company_name = company_name;

        match serde_json::to_string(&record) {
            Ok(line) => tracing::info!("{}", line),
            Err(_) => tracing::info!("{:?}", record),
        }

        companies.push(record);
    }

    Ok(companies)
}

/// First element sibling after `element`, skipping text and comment nodes.
fn next_sibling_element(element: ElementRef) -> Option<ElementRef> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Normalized `td` texts for every `tr` below `block`.
fn metadata_rows(block: ElementRef) -> Vec<MetadataRow> {
    block
        .select(&ROW_SELECTOR)
        .map(|tr| {
            tr.select(&CELL_SELECTOR)
                .map(|td| normalize(&td.text().collect::<String>()))
                .collect()
        })
        .collect()
}
