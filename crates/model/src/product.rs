use serde::{Deserialize, Serialize};

use orderlens_core::{Entity, Money, ProductId};

/// Product category taxonomy used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electronics,
    Home,
    Clothing,
    Sports,
    Books,
    Toys,
    Grocery,
    Beauty,
}

impl ProductCategory {
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Home,
        Self::Clothing,
        Self::Sports,
        Self::Books,
        Self::Toys,
        Self::Grocery,
        Self::Beauty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Home => "Home",
            Self::Clothing => "Clothing",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Grocery => "Grocery",
            Self::Beauty => "Beauty",
        }
    }

    /// Singular form used when composing product names ("Acme Book").
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronic",
            Self::Home => "Home",
            Self::Clothing => "Clothing",
            Self::Sports => "Sport",
            Self::Books => "Book",
            Self::Toys => "Toy",
            Self::Grocery => "Grocery",
            Self::Beauty => "Beauty",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product. Line items snapshot its price at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub unit_price: Money,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
