//! Static product catalog and the in-memory product search.
//!
//! DESIGN
//! ======
//! Three hardcoded records back both the product grid and the search panel.
//! Search is a linear, case-insensitive substring filter; an empty query is
//! its own outcome so the panel renders nothing instead of every product.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A product as shown on the site. `price` is display-formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

impl ProductRecord {
    /// In-page link target of the product's category section.
    pub fn view_link(&self) -> String {
        format!("#{}", self.category)
    }
}

pub const PRODUCTS: &[ProductRecord] = &[
    ProductRecord {
        name: "Premium Hoodie",
        category: "hoodies",
        price: "R450",
        description: "Comfortable cotton blend hoodie",
    },
    ProductRecord {
        name: "Classic Beanie",
        category: "beanies",
        price: "R150",
        description: "Warm acrylic knit beanie",
    },
    ProductRecord {
        name: "Slim Fit Jeans",
        category: "jeans",
        price: "R600",
        description: "Premium denim jeans",
    },
];

/// Enquiry-form product codes and their display names.
pub const PRODUCT_OPTIONS: &[(&str, &str)] = &[
    ("hoodie", "Premium Hoodie"),
    ("beanie", "Classic Beanie"),
    ("jeans", "Slim Fit Jeans"),
    ("all", "All Products"),
];

pub const NO_RESULTS_TEXT: &str = "No products found. Try different keywords.";

/// Result of running a search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query: nothing is rendered.
    Empty,
    /// Query matched nothing.
    NoResults,
    Matches(Vec<&'static ProductRecord>),
}

/// Filter [`PRODUCTS`] by `query`, matching name, description or category.
pub fn search(query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::Empty;
    }
    let matches: Vec<_> = PRODUCTS
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect();
    if matches.is_empty() { SearchOutcome::NoResults } else { SearchOutcome::Matches(matches) }
}

/// Display name for an enquiry-form product code, if the code is known.
pub fn product_display_name(code: &str) -> Option<&'static str> {
    PRODUCT_OPTIONS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}
