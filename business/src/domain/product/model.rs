use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    /// Barcode identifier; the catalog's unique key, compared
    /// case-insensitively.
    pub ean: String,
    pub cost: BigDecimal,
    pub units_in_stock: u32,
    /// Insertion order is preserved; may be empty.
    pub categories: Vec<String>,
    pub brand: String,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub ean: String,
    pub cost: BigDecimal,
    pub units_in_stock: u32,
    pub categories: Vec<String>,
    pub brand: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            name: props.name,
            description: props.description,
            ean: props.ean,
            cost: props.cost,
            units_in_stock: props.units_in_stock,
            categories: props.categories,
            brand: props.brand,
        }
    }

    /// Display name with the brand prefixed when one is set.
    /// Computed on demand, never stored.
    pub fn full_display_name(&self) -> String {
        if self.brand.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.brand, self.name)
        }
    }

    /// Case-insensitive identity match against another EAN.
    pub fn has_ean(&self, ean: &str) -> bool {
        self.ean.eq_ignore_ascii_case(ean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::FromPrimitive;

    fn make_product(name: &str, brand: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            description: "A product".to_string(),
            ean: "4006381333931".to_string(),
            cost: BigDecimal::from_f64(2.99).unwrap(),
            units_in_stock: 5,
            categories: vec!["stationery".to_string()],
            brand: brand.to_string(),
        })
    }

    #[test]
    fn should_prefix_brand_in_full_display_name() {
        let product = make_product("Highlighter", "Stabilo");
        assert_eq!(product.full_display_name(), "Stabilo Highlighter");
    }

    #[test]
    fn should_use_plain_name_when_brand_is_empty() {
        let product = make_product("Highlighter", "");
        assert_eq!(product.full_display_name(), "Highlighter");
    }

    #[test]
    fn should_match_ean_ignoring_case() {
        let mut product = make_product("Highlighter", "Stabilo");
        product.ean = "ABC-123".to_string();
        assert!(product.has_ean("abc-123"));
        assert!(product.has_ean("ABC-123"));
        assert!(!product.has_ean("abc-124"));
    }
}
