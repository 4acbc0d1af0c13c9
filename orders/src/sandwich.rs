//! Sandwich orders: a bread and a protein, optional cheese, then extras.
//! Orders are not saved; the session repeats until the user is done.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use regex_validator::prompt::{PromptResult, Prompter};
use regex_validator::text::capitalize;

use crate::menu::PriceList;
use crate::order::{round_cents, Ingredient};

/// Most sandwiches one order may hold.
pub const MAX_SANDWICHES: i64 = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandwichMenu {
    pub bread: PriceList,
    pub protein: PriceList,
    pub cheese: PriceList,
    pub extras: PriceList,
}

impl Default for SandwichMenu {
    fn default() -> Self {
        Self {
            bread: PriceList::new([("white", 1.95), ("wheat", 2.00), ("sourdough", 2.25)]),
            protein: PriceList::new([("chicken", 2.75), ("turkey", 2.50), ("ham", 2.50), ("tofu", 2.00)]),
            cheese: PriceList::new([("cheddar", 1.00), ("swiss", 1.25), ("mozzarella", 1.25)]),
            extras: PriceList::new([("mayo", 0.10), ("mustard", 0.05), ("lettuce", 0.50), ("tomato", 0.75)]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sandwich {
    pub ingredients: Vec<Ingredient>,
    pub subtotal: f64,
}

impl Sandwich {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let subtotal = round_cents(ingredients.iter().map(Ingredient::price).sum());
        Self { ingredients, subtotal }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandwichOrder {
    pub sandwiches: Vec<Sandwich>,
    pub total: f64,
}

impl SandwichOrder {
    pub fn new(sandwiches: Vec<Sandwich>) -> Self {
        let total = round_cents(sandwiches.iter().map(|s| s.subtotal).sum());
        Self { sandwiches, total }
    }

    pub fn render(&self) -> String {
        let rule = "-".repeat(40);
        let mut out = String::from("\nOrder Summary:\n");
        for (i, sandwich) in self.sandwiches.iter().enumerate() {
            out.push_str(&format!("\nSandwich #{}:\n", i + 1));
            for item in &sandwich.ingredients {
                out.push_str(&format!("{:<15}      $     {:>6.2}\n", capitalize(item.name()), item.price()));
            }
            out.push_str(&format!("{}\nSubtotal             $     {:>6.2}\n", rule, sandwich.subtotal));
        }
        out.push_str(&format!("{}\nTotal Order Cost     $ {:>10.2}", rule, self.total));
        out
    }
}

fn pick<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    category: &str,
    prices: &PriceList,
) -> PromptResult<Option<Ingredient>> {
    if prices.is_empty() {
        return Ok(None);
    }
    let choice = p.menu(&format!("\nChoose a {}:\n", category), &prices.names())?;
    Ok(prices
        .get(choice)
        .map(|(name, price)| Ingredient::new(capitalize(category), name, price)))
}

pub fn build_sandwich<R: BufRead, W: Write>(p: &mut Prompter<R, W>, menu: &SandwichMenu) -> PromptResult<Sandwich> {
    let mut chosen = Vec::new();
    chosen.extend(pick(p, "bread", &menu.bread)?);
    chosen.extend(pick(p, "protein", &menu.protein)?);

    if !menu.cheese.is_empty() && p.yes_no("Do you want cheese? (yes/no): ")? {
        chosen.extend(pick(p, "cheese", &menu.cheese)?);
    }

    for (extra, price) in menu.extras.iter() {
        if p.yes_no(&format!("Do you want {}? (yes/no): ", extra))? {
            chosen.push(Ingredient::new("Extra", extra, price));
        }
    }

    let sandwich = Sandwich::new(chosen);
    debug!(items = sandwich.ingredients.len(), subtotal = sandwich.subtotal, "sandwich built");
    Ok(sandwich)
}

/// Takes orders until the user declines a new one and returns them all.
pub fn run_sandwiches<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    menu: &SandwichMenu,
) -> PromptResult<Vec<SandwichOrder>> {
    let mut orders = Vec::new();
    loop {
        let count = p.until("How many sandwiches would you like to order? ", |answer| {
            match answer.trim().parse::<i64>() {
                Ok(n) if n < 1 => Err("Number must be at minimum 1.".to_string()),
                Ok(n) if n > MAX_SANDWICHES => Err(format!("Number must be at maximum {}.", MAX_SANDWICHES)),
                Ok(n) => Ok(n),
                Err(_) => Err(format!("'{}' is not an integer.", answer.trim())),
            }
        })?;

        let mut sandwiches = Vec::new();
        for i in 1..=count {
            p.say(format!("\nBuilding sandwich #{}...", i))?;
            sandwiches.push(build_sandwich(p, menu)?);
        }

        let order = SandwichOrder::new(sandwiches);
        p.say(order.render())?;
        info!(sandwiches = order.sandwiches.len(), total = order.total, "sandwich order summarized");
        orders.push(order);

        if !p.yes_no("\nDo you want to start a new order? (yes/no): ")? {
            p.say("Thanks for using the sandwich ordering program!")?;
            return Ok(orders);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_build_with_cheese_and_extras() {
        let mut p = prompter("1\nturkey\nyes\nswiss\ny\nn\nn\ny\n");
        let sandwich = build_sandwich(&mut p, &SandwichMenu::default()).unwrap();
        assert_eq!(sandwich.ingredients.len(), 5);
        assert_eq!(sandwich.ingredients[0], Ingredient::new("Bread", "white", 1.95));
        assert_eq!(sandwich.ingredients[2].category(), "Cheese");
        assert_eq!(sandwich.ingredients[4].name(), "tomato");
        assert_eq!(sandwich.subtotal, 6.55);
    }

    #[test]
    fn test_build_without_cheese() {
        let mut p = prompter("2\n4\nno\nn\nn\nn\nn\n");
        let sandwich = build_sandwich(&mut p, &SandwichMenu::default()).unwrap();
        assert_eq!(sandwich.subtotal, 4.0);
        assert!(!String::from_utf8(p.into_output()).unwrap().contains("Choose a cheese"));
    }

    #[test]
    fn test_render() {
        let order = SandwichOrder::new(vec![Sandwich::new(vec![
            Ingredient::new("Bread", "white", 1.95),
            Ingredient::new("Protein", "turkey", 2.50),
        ])]);
        let text = order.render();
        assert!(text.contains("Sandwich #1:"));
        assert!(text.contains("White                $       1.95"));
        assert!(text.contains("Subtotal             $       4.45"));
        assert!(text.ends_with("Total Order Cost     $       4.45"));
    }

    #[test]
    fn test_session_repeats_orders() {
        let input = "0\n30\n2\n\
                     1\nturkey\nyes\nswiss\ny\nn\nn\ny\n\
                     2\n4\nno\nn\nn\nn\nn\n\
                     yes\n\
                     1\n3\n3\nn\nn\nn\nn\nn\n\
                     no\n";
        let mut p = prompter(input);
        let orders = run_sandwiches(&mut p, &SandwichMenu::default()).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].sandwiches.len(), 2);
        assert_eq!(orders[0].total, 10.55);
        assert_eq!(orders[1].total, 4.75);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Number must be at minimum 1."));
        assert!(out.contains("Number must be at maximum 25."));
        assert!(out.contains("Building sandwich #2..."));
        assert!(out.ends_with("Thanks for using the sandwich ordering program!\n"));
    }
}
