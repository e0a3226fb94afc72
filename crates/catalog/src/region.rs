use serde::{Deserialize, Serialize};

use sanskriti_core::{CatalogError, CatalogResult, Entity, ProductId, RegionId, ensure_unique_ids};

/// Product category used by the category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Jewelry,
    Apparel,
    Handicraft,
    Textile,
    Art,
    Food,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Jewelry => "Jewelry",
            ProductCategory::Apparel => "Apparels",
            ProductCategory::Handicraft => "Handicrafts",
            ProductCategory::Textile => "Textiles",
            ProductCategory::Art => "Art",
            ProductCategory::Food => "Food",
        }
    }
}

/// A purchasable item, owned by exactly one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Display string, shown as-is (e.g. `"₹1,200"`). Never parsed.
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: price.into(),
            image: String::new(),
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_in(&self, category: ProductCategory) -> bool {
        self.category == Some(category)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A state: descriptive metadata plus the products it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub image_name: String,
    pub description: String,
    pub capital: String,
    pub language: String,
    pub area: String,
    pub population: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_name: String::new(),
            description: String::new(),
            capital: String::new(),
            language: String::new(),
            area: String::new(),
            population: String::new(),
            products: Vec::new(),
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Check the record once at load time.
    ///
    /// Identifiers must be non-blank and product ids unique within the region.
    /// Descriptive fields are not checked; blank ones render blank.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.is_blank() {
            return Err(CatalogError::invalid_id(format!(
                "region '{}' has an empty id",
                self.name
            )));
        }
        if let Some(product) = self.products.iter().find(|p| p.id.is_blank()) {
            return Err(CatalogError::invalid_id(format!(
                "product '{}' in region '{}' has an empty id",
                product.name, self.id
            )));
        }
        ensure_unique_ids(&self.products, |id| {
            format!("product '{id}' in region '{}'", self.id)
        })?;
        Ok(())
    }
}

impl Entity for Region {
    type Id = RegionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
