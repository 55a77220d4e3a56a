//! Product catalog loading.
//!
//! The collection page renders whatever catalog it is given: a JSON array of
//! products read from disk, or a built-in demo catalog when no file is
//! available. Loading never fails the application; a bad catalog logs a
//! warning and falls back, keeping the storefront usable.

use std::path::Path;

/// A single product shown as a card on the collection page.
///
/// Identity is positional: the collection preserves catalog order, and
/// visibility logic addresses cards by index.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Price in cents, formatted for display by the UI layer.
    pub price_cents: u64,
    /// One-line description shown under the name.
    #[serde(default)]
    pub tagline: String,
    /// Optional short badge (e.g. "New", "Sale").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Built-in catalog used when no file is configured or loading fails.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    let entries: [(&str, u64, &str, Option<&str>); 10] = [
        ("Walnut Serving Platter", 6400, "Hand-finished hardwood, 14 inch", Some("New")),
        ("Stoneware Mug Set", 3200, "Four glazed mugs, dishwasher safe", None),
        ("Linen Table Runner", 2800, "Washed European flax, 72 inch", None),
        ("Copper Pour-Over Kettle", 8900, "Gooseneck spout, 0.9 litre", Some("Sale")),
        ("Ceramic Vase Trio", 5400, "Matte speckle glaze, three sizes", None),
        ("Oak Cheese Board", 4100, "End-grain block with groove", None),
        ("Cast Iron Trivet", 1900, "Honeycomb pattern, rubber feet", None),
        ("Glass Carafe", 2600, "Borosilicate, cork stopper", Some("New")),
        ("Wool Throw Blanket", 11800, "Lambswool herringbone weave", None),
        ("Brass Candle Holders", 3600, "Pair, weighted bases", None),
    ];
    entries
        .into_iter()
        .map(|(name, price_cents, tagline, badge)| Product {
            name: name.to_owned(),
            price_cents,
            tagline: tagline.to_owned(),
            badge: badge.map(str::to_owned),
        })
        .collect()
}

/// What: Load the product catalog, falling back to the demo catalog.
///
/// Inputs:
/// - `path`: Optional catalog file (JSON array of products).
///
/// Output:
/// - Products in catalog order; never empty unless the file itself holds an
///   empty array.
///
/// Details:
/// - Missing path or unreadable/invalid file logs a warning and returns the
///   demo catalog, so a broken config cannot take the storefront down.
#[must_use]
pub fn load(path: Option<&Path>) -> Vec<Product> {
    let Some(p) = path else {
        tracing::info!("no catalog configured; using demo catalog");
        return demo_catalog();
    };
    match std::fs::read_to_string(p) {
        Ok(s) => match serde_json::from_str::<Vec<Product>>(&s) {
            Ok(products) => {
                tracing::info!(path = %p.display(), count = products.len(), "loaded catalog");
                products
            }
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "invalid catalog; using demo catalog");
                demo_catalog()
            }
        },
        Err(e) => {
            tracing::warn!(path = %p.display(), error = %e, "unreadable catalog; using demo catalog");
            demo_catalog()
        }
    }
}
