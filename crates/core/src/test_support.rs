//! Shared helpers for unit tests.

use smallvec::SmallVec;

use crate::products::{Category, Localized, Product, ProductId};

/// Build a product with placeholder text and a single image.
pub(crate) fn product(id: u32, price: u64, category: Category, colors: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        name: Localized {
            en: format!("Bag {id}"),
            ar: format!("حقيبة {id}"),
        },
        description: Localized {
            en: format!("Description {id}"),
            ar: format!("وصف {id}"),
        },
        price,
        category,
        image: format!("https://example.test/{id}.jpg"),
        images: Vec::new(),
        colors: colors
            .iter()
            .map(ToString::to_string)
            .collect::<SmallVec<[String; 4]>>(),
    }
}
