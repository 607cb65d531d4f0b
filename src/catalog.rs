use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Item with id {id} not found")]
    NotFound { id: String },
}

/// A single inventory record.
///
/// The display label is exposed as `item` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "item")]
    pub name: String,
    pub price: String,
    pub sku: String,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        sku: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            sku: sku.into(),
            description: description.into(),
        }
    }
}

/// Immutable, ordered collection of items built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

const SEED: [(&str, &str, &str); 10] = [
    ("$1.84", "7bd1bbfcb932eb074039de6c328bf466dad50479", "New Shimmer! It's a dessert topping and a floor wax!"),
    ("$4.15", "0f08eca48ef464118a328701927002c9790fdc49", "Romano Tours - European Catalog"),
    ("$5.82", "a452c87245844fb12a3f0503830ea1c27805551b", "Canis Cologne for Dogs"),
    ("$5.18", "9960f6f5c2a1f7413c1dc416b6d58cc937ef9acb", "Chia Head - Nice green hair just like a Chia Pet"),
    ("$2.01", "f2223fe1710fae70f781b5480b7e08c6047d134a", "Epoxy-Dent — The strongest denture cream permitted by law"),
    ("$4.37", "4a187ce508a7f99c2f9b6941f989790a3f7642b9", "Happy Fun Ball"),
    ("$5.33", "1b08b936fe8e5fd1cf9f76ecb42c05214283c66f", "Jiffy Pop Air Bag"),
    ("$4.07", "37b995b1763f722feaf93be737919f098e9f154c", "Milsford Spring Water"),
    ("$3.43", "67bddfd6b853d04473fb4c4567cf04dd78e6a211", "Swiffer Sleepers"),
    ("$2.16", "c4f7620640ab26dd704790341590a404330cd210", "Yard-a-Pult"),
];

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The ten sample items with ids `"1"` to `"10"`.
    pub fn seeded() -> Self {
        let items = SEED
            .iter()
            .enumerate()
            .map(|(idx, (price, sku, description))| {
                let id = (idx + 1).to_string();
                Item::new(id.clone(), format!("Item_{}", id), *price, *sku, *description)
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Linear scan in catalog order, exact string comparison. First match wins.
    pub fn find_by_id(&self, id: &str) -> Result<&Item, LookupError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })
    }
}
