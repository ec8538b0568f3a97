// src/extractors/category.rs
use crate::directory::models::{Category, CategoryLink, CategoryName};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// Category anchors on the listing page; exact class attribute match
static CATEGORY_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"a[class="fontLinkDirectory"]"#)
        .expect("Failed to compile CATEGORY_LINK_SELECTOR")
});

/// Removes the trailing `" (<count>)"` from an anchor text.
/// Text without `" ("` comes back unchanged.
pub fn strip_entry_count(text: &str) -> &str {
    match text.find(" (") {
        Some(idx) => &text[..idx],
        None => text,
    }
}

fn anchor_name(anchor: ElementRef) -> CategoryName {
    let text = anchor.text().collect::<String>();
    strip_entry_count(&text).to_string()
}

/// Hrefs of all category anchors, in document order.
pub fn parse_category_links(html: &str) -> Vec<CategoryLink> {
    let document = Html::parse_document(html);
    document
        .select(&CATEGORY_LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Display names of all category anchors, in document order.
pub fn parse_category_names(html: &str) -> Vec<CategoryName> {
    let document = Html::parse_document(html);
    document.select(&CATEGORY_LINK_SELECTOR).map(anchor_name).collect()
}

/// Name and link pairs. Anchors without an href are skipped.
pub fn parse_categories(html: &str) -> Vec<Category> {
    let document = Html::parse_document(html);
    document
        .select(&CATEGORY_LINK_SELECTOR)
        .filter_map(|a| {
            let link = a.value().attr("href")?;
            Some(Category {
                name: anchor_name(a),
                link: link.to_string(),
            })
        })
        .collect()
}
