use crate::utils::AppError;
use std::fmt;
use std::str::FromStr;

/// The product collections of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCollection {
    MensShoes,
    WomensShoes,
    KidsShoes,
    ShoesAccessories,
}

impl ProductCollection {
    pub const ALL: [ProductCollection; 4] = [
        ProductCollection::MensShoes,
        ProductCollection::WomensShoes,
        ProductCollection::KidsShoes,
        ProductCollection::ShoesAccessories,
    ];

    pub fn collection_name(&self) -> &'static str {
        match self {
            ProductCollection::MensShoes => "mensshoes",
            ProductCollection::WomensShoes => "womensshoes",
            ProductCollection::KidsShoes => "kidsshoes",
            ProductCollection::ShoesAccessories => "shoes_accessories",
        }
    }

    /// Value stored in the `category` field of the collection's products
    pub fn category_name(&self) -> &'static str {
        match self {
            ProductCollection::MensShoes => "Men's Shoes",
            ProductCollection::WomensShoes => "Women's Shoes",
            ProductCollection::KidsShoes => "Kids' Shoes",
            ProductCollection::ShoesAccessories => "Shoe Accessories",
        }
    }

    /// Controlled `subCategory` vocabulary.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            ProductCollection::MensShoes => &[
                "Sneakers", "Formal Shoes", "Loafers", "Sandals", "Boots", "Sports Shoes", "Slippers",
            ],
            ProductCollection::WomensShoes => &[
                "Heels", "Flats", "Sandals", "Chappals", "Sneakers", "Boots", "Wedges",
            ],
            ProductCollection::KidsShoes => &[
                "School Shoes", "Sneakers", "Sandals", "Boots", "Slippers",
            ],
            ProductCollection::ShoesAccessories => &[
                "Socks", "Insoles", "Shoe Laces", "Shoe Care", "Shoe Bags",
            ],
        }
    }

    pub fn is_canonical(&self, sub_category: &str) -> bool {
        self.vocabulary().contains(&sub_category)
    }

    /// Canonical term for a case/whitespace variant, if any.
    pub fn canonical_term(&self, sub_category: &str) -> Option<&'static str> {
        let normalized = normalize_term(sub_category);
        self.vocabulary()
            .iter()
            .copied()
            .find(|term| normalize_term(term) == normalized)
    }
}

fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl fmt::Display for ProductCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

impl FromStr for ProductCollection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCollection::ALL
            .into_iter()
            .find(|c| c.collection_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::NotFound(format!("product collection '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_names() {
        assert_eq!("womensshoes".parse::<ProductCollection>().unwrap(), ProductCollection::WomensShoes);
        assert_eq!("Shoes_Accessories".parse::<ProductCollection>().unwrap(), ProductCollection::ShoesAccessories);
        assert!("shoesaccessories".parse::<ProductCollection>().is_err());
    }

    #[test]
    fn test_canonical_term_ignores_case_and_spacing() {
        let women = ProductCollection::WomensShoes;
        assert_eq!(women.canonical_term("sandals"), Some("Sandals"));
        assert_eq!(women.canonical_term("  CHAPPALS "), Some("Chappals"));
        assert_eq!(women.canonical_term("Loafers"), None);

        let men = ProductCollection::MensShoes;
        assert_eq!(men.canonical_term("formal   shoes"), Some("Formal Shoes"));
        assert!(men.is_canonical("Formal Shoes"));
        assert!(!men.is_canonical("formal shoes"));
    }
}
