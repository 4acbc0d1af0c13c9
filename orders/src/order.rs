//! Pizzas, order totals and the saved `order.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{OrderError, OrderResult};

pub const SALES_TAX_RATE: f64 = 0.07;

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One chosen item: `(category, name, price)`, stored as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient(pub String, pub String, pub f64);

impl Ingredient {
    pub fn new(category: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self(category.into(), name.into(), price)
    }

    pub fn category(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn price(&self) -> f64 {
        self.2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub ingredients: Vec<Ingredient>,
    pub subtotal: f64,
}

impl Pizza {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let subtotal = round_cents(ingredients.iter().map(Ingredient::price).sum());
        Self { ingredients, subtotal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipRate {
    Zero,
    Ten,
    Twenty,
    Thirty,
    Forty,
}

impl TipRate {
    pub const ALL: [TipRate; 5] = [TipRate::Zero, TipRate::Ten, TipRate::Twenty, TipRate::Thirty, TipRate::Forty];

    pub fn label(self) -> &'static str {
        match self {
            TipRate::Zero => "0%",
            TipRate::Ten => "10%",
            TipRate::Twenty => "20%",
            TipRate::Thirty => "30%",
            TipRate::Forty => "40%",
        }
    }

    pub fn fraction(self) -> f64 {
        match self {
            TipRate::Zero => 0.0,
            TipRate::Ten => 0.10,
            TipRate::Twenty => 0.20,
            TipRate::Thirty => 0.30,
            TipRate::Forty => 0.40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_with_tax: f64,
    pub tip_amount: f64,
    pub final_total: f64,
}

impl Totals {
    /// Tax is taken on the pizza subtotals, the tip on the taxed total.
    /// Each step is rounded to cents.
    pub fn compute(pizzas: &[Pizza], tip: TipRate) -> Self {
        let subtotal: f64 = pizzas.iter().map(|p| p.subtotal).sum();
        let tax_amount = round_cents(subtotal * SALES_TAX_RATE);
        let total_with_tax = round_cents(subtotal + tax_amount);
        let tip_amount = round_cents(total_with_tax * tip.fraction());
        Self {
            subtotal: round_cents(subtotal),
            tax_amount,
            total_with_tax,
            tip_amount,
            final_total: round_cents(total_with_tax + tip_amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub pizzas: Vec<Pizza>,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub tip_amount: f64,
    #[serde(default)]
    pub final_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn submit(pizzas: Vec<Pizza>, tip: TipRate, placed_at: DateTime<Utc>) -> OrderResult<Self> {
        if pizzas.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let totals = Totals::compute(&pizzas, tip);
        Ok(Self {
            pizzas,
            tax_amount: totals.tax_amount,
            tip_amount: totals.tip_amount,
            final_total: totals.final_total,
            placed_at: Some(placed_at),
        })
    }

    /// Replaces whatever order was saved at `path`.
    pub fn place(&self, path: &Path) -> OrderResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), pizzas = self.pizzas.len(), total = self.final_total, "order placed");
        Ok(())
    }
}

/// The last placed order, or `None` when nothing has been saved yet.
pub fn load_previous(path: &Path) -> OrderResult<Option<Order>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no previous order");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&text).map(Some).map_err(|source| OrderError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn money_line(label: &str, amount: f64) -> String {
    format!("{:<32}              ${:>18.2}\n", label, amount)
}

/// Itemized pizzas followed by tax, the tip when one was left, and the total.
pub fn render_summary(title: &str, pizzas: &[Pizza], tax_amount: f64, tip_amount: f64, final_total: f64) -> String {
    let mut out = format!("\n{:^60}\n{}\n", title, "=".repeat(70));

    for (i, pizza) in pizzas.iter().enumerate() {
        out.push_str(&format!("\nPizza #{}:\n", i + 1));
        for item in &pizza.ingredients {
            out.push_str(&format!(
                "{:<12}     {:<20}         $ {:>17.2}\n",
                item.category(),
                item.name(),
                item.price()
            ));
        }
        out.push_str(&"-".repeat(70));
        out.push('\n');
        out.push_str(&money_line("Subtotal", pizza.subtotal));
    }

    out.push_str(&"-".repeat(70));
    out.push('\n');
    out.push_str(&money_line("Tax Amount", tax_amount));
    if tip_amount > 0.0 {
        out.push_str(&"-".repeat(70));
        out.push('\n');
        out.push_str(&money_line("Tip", tip_amount));
    }
    out.push_str(&"=".repeat(70));
    out.push('\n');
    out.push_str(money_line("Final Total", final_total).trim_end());
    out
}

impl Order {
    pub fn render(&self, title: &str) -> String {
        render_summary(title, &self.pizzas, self.tax_amount, self.tip_amount, self.final_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use tempfile::tempdir;

    fn thin_pepperoni() -> Pizza {
        Pizza::new(vec![
            Ingredient::new("Crust", "Thin", 10.99),
            Ingredient::new("Sauce", "Traditional red", 0.0),
            Ingredient::new("Cheese", "Mozzarella", 2.00),
            Ingredient::new("Topping", "Pepperoni", 2.00),
        ])
    }

    fn deep_dish_bacon() -> Pizza {
        Pizza::new(vec![
            Ingredient::new("Crust", "Deep dish", 12.99),
            Ingredient::new("Sauce", "Marinara", 1.50),
            Ingredient::new("Cheese", "Three-cheese blend", 0.0),
            Ingredient::new("Topping", "Bacon", 3.00),
        ])
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_pizza_subtotal() {
        assert_eq!(thin_pepperoni().subtotal, 14.99);
        assert_eq!(Pizza::new(vec![]).subtotal, 0.0);
    }

    #[rstest]
    #[case(TipRate::Zero, 0.0, 16.04)]
    #[case(TipRate::Twenty, 3.21, 19.25)]
    #[case(TipRate::Forty, 6.42, 22.46)]
    fn test_single_pizza_totals(#[case] tip: TipRate, #[case] tip_amount: f64, #[case] final_total: f64) {
        let totals = Totals::compute(&[thin_pepperoni()], tip);
        assert_eq!(totals.tax_amount, 1.05);
        assert_eq!(totals.total_with_tax, 16.04);
        assert_eq!(totals.tip_amount, tip_amount);
        assert_eq!(totals.final_total, final_total);
    }

    #[test]
    fn test_two_pizza_totals() {
        let totals = Totals::compute(&[thin_pepperoni(), deep_dish_bacon()], TipRate::Ten);
        assert_eq!(totals.subtotal, 32.48);
        assert_eq!(totals.tax_amount, 2.27);
        assert_eq!(totals.total_with_tax, 34.75);
        assert_eq!(totals.tip_amount, 3.48);
        assert_eq!(totals.final_total, 38.23);
    }

    #[test]
    fn test_empty_order_refused() {
        assert!(matches!(Order::submit(vec![], TipRate::Ten, noon()), Err(OrderError::EmptyOrder)));
    }

    #[test]
    fn test_place_and_load_previous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        assert_eq!(load_previous(&path).unwrap(), None);

        let order = Order::submit(vec![thin_pepperoni()], TipRate::Twenty, noon()).unwrap();
        order.place(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Crust\",\n"));
        assert!(text.contains("\"final_total\": 19.25"));
        assert_eq!(load_previous(&path).unwrap(), Some(order));
    }

    #[test]
    fn test_load_previous_without_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        fs::write(
            &path,
            r#"{"pizzas":[{"ingredients":[["Crust","Thin",10.99]],"subtotal":10.99}],
               "tax_amount":0.77,"tip_amount":0.0,"final_total":11.76}"#,
        )
        .unwrap();

        let order = load_previous(&path).unwrap().unwrap();
        assert_eq!(order.placed_at, None);
        assert_eq!(order.pizzas[0].ingredients[0].name(), "Thin");
    }

    #[test]
    fn test_load_previous_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        fs::write(&path, "{ broken").unwrap();
        assert!(matches!(load_previous(&path), Err(OrderError::Json { .. })));
    }

    #[test]
    fn test_render_summary() {
        let order = Order::submit(vec![thin_pepperoni()], TipRate::Zero, noon()).unwrap();
        let text = order.render("Order Summary:");
        assert!(text.contains("Crust            Thin                         $             10.99"));
        assert!(text.contains("Subtotal                                      $             14.99"));
        assert!(!text.contains("Tip"));
        assert!(text.ends_with("16.04"));

        let tipped = Order::submit(vec![thin_pepperoni()], TipRate::Twenty, noon()).unwrap();
        assert!(tipped.render("Order Summary:").contains("Tip"));
    }
}
