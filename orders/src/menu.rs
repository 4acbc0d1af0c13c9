//! The pizza menu: base option categories and toppings, each with prices.
//!
//! Prices are kept in file order, which is the order choices are offered in.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use regex_validator::text::capitalize;

use crate::error::{OrderError, OrderResult};

/// Named prices in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceList(Vec<(String, f64)>);

impl PriceList {
    pub fn new<S: Into<String>>(items: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self(items.into_iter().map(|(name, price)| (name.into(), price)).collect())
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn get(&self, index: usize) -> Option<(&str, f64)> {
        self.0.get(index).map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PriceList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, price) in &self.0 {
            map.serialize_entry(name, price)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PriceList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = PriceList;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of names to prices")
            }
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, price)) = map.next_entry::<String, f64>()? {
                    if price < 0.0 {
                        return Err(de::Error::custom(format!("price of {} is negative", name)));
                    }
                    items.push((name, price));
                }
                Ok(PriceList(items))
            }
        }
        deserializer.deserialize_map(V)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseOption {
    pub category: String,
    pub options: PriceList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredients {
    #[serde(default)]
    pub base_options: Vec<BaseOption>,
    #[serde(default)]
    pub toppings: PriceList,
}

impl Ingredients {
    pub fn load(path: &Path) -> OrderResult<Self> {
        let text = fs::read_to_string(path)?;
        let ingredients: Ingredients = serde_json::from_str(&text).map_err(|source| OrderError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        if ingredients.base_options.is_empty() && ingredients.toppings.is_empty() {
            return Err(OrderError::EmptyMenu(path.to_path_buf()));
        }
        debug!(
            path = %path.display(),
            categories = ingredients.base_options.len(),
            toppings = ingredients.toppings.len(),
            "menu loaded"
        );
        Ok(ingredients)
    }

    /// Writes the menu as pretty JSON. Returns `false` without touching an
    /// existing file unless `overwrite` is set.
    pub fn write(&self, path: &Path, overwrite: bool) -> OrderResult<bool> {
        if !overwrite {
            match fs::metadata(path) {
                Ok(_) => return Ok(false),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "menu written");
        Ok(true)
    }

    /// The house menu.
    pub fn default_menu() -> Self {
        Self {
            base_options: vec![
                BaseOption {
                    category: "crust".to_string(),
                    options: PriceList::new([
                        ("Thin", 10.99),
                        ("Traditional", 10.99),
                        ("Deep dish", 12.99),
                        ("Thick", 6.50),
                        ("Gluten-free", 7.00),
                    ]),
                },
                BaseOption {
                    category: "sauce".to_string(),
                    options: PriceList::new([
                        ("Traditional red", 0.0),
                        ("Olive oil", 0.0),
                        ("Marinara", 1.50),
                        ("Alfredo", 2.00),
                        ("BBQ sauce", 1.75),
                    ]),
                },
                BaseOption {
                    category: "cheese".to_string(),
                    options: PriceList::new([
                        ("Three-cheese blend", 0.0),
                        ("Tuscan Blend", 1.99),
                        ("Mozzarella", 2.00),
                        ("Cheddar", 2.50),
                        ("vegan", 3.00),
                    ]),
                },
            ],
            toppings: PriceList::new([
                ("Pepperoni", 2.00),
                ("Sausage", 2.50),
                ("Mushrooms", 1.50),
                ("Onions", 1.25),
                ("Bell peppers", 1.50),
                ("Black olives", 1.75),
                ("Pineapple", 2.00),
                ("Bacon", 3.00),
                ("Spinach", 1.50),
                ("Jalapenos", 1.50),
            ]),
        }
    }
}

fn price_line(name: &str, price: f64) -> String {
    format!("{:<20}           ${:>8.2}\n", name, price)
}

pub fn render_menu(ingredients: &Ingredients) -> String {
    let mut out = String::from("\n=============== Pizza Menu ===============\n");
    out.push_str(&format!("{:<20} {:>15}\n", "Ingredient", "Price"));
    out.push_str(&"-".repeat(42));
    out.push('\n');

    for option in &ingredients.base_options {
        out.push_str(&format!("\n{}:\n{}\n", capitalize(&option.category), "*".repeat(42)));
        for (name, price) in option.options.iter() {
            out.push_str(&price_line(name, price));
        }
    }

    out.push_str(&format!("\nToppings:\n{}\n", "*".repeat(42)));
    for (name, price) in ingredients.toppings.iter() {
        out.push_str(&price_line(name, price));
    }
    out.push_str(&"=".repeat(42));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prices_keep_file_order() {
        let json = r#"{"base_options":[{"category":"crust","options":{"Thin":10.99,"Deep dish":12.99,"Gluten-free":7}}],
                       "toppings":{"Spinach":1.5,"Bacon":3}}"#;
        let ingredients: Ingredients = serde_json::from_str(json).unwrap();
        assert_eq!(ingredients.base_options[0].options.names(), vec!["Thin", "Deep dish", "Gluten-free"]);
        assert_eq!(ingredients.toppings.get(1), Some(("Bacon", 3.0)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{"toppings":{"Spinach":-1.5}}"#;
        assert!(serde_json::from_str::<Ingredients>(json).is_err());
    }

    #[test]
    fn test_load_empty_menu() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ingredients.json");
        fs::write(&path, r#"{"base_options":[],"toppings":{}}"#).unwrap();
        assert!(matches!(Ingredients::load(&path), Err(OrderError::EmptyMenu(_))));

        fs::write(&path, "{}").unwrap();
        assert!(matches!(Ingredients::load(&path), Err(OrderError::EmptyMenu(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ingredients.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Ingredients::load(&path), Err(OrderError::Json { .. })));
    }

    #[test]
    fn test_write_then_load_default_menu() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ingredients.json");
        let menu = Ingredients::default_menu();

        assert!(menu.write(&path, false).unwrap());
        assert!(!menu.write(&path, false).unwrap());
        assert_eq!(Ingredients::load(&path).unwrap(), menu);
    }

    #[test]
    fn test_render_menu() {
        let text = render_menu(&Ingredients::default_menu());
        assert!(text.contains("\nCrust:\n"));
        assert!(text.contains("Deep dish                      $   12.99"));
        assert!(text.contains("Jalapenos"));
        assert!(text.ends_with(&"=".repeat(42)));
    }
}
