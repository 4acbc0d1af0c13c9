//! The interactive ordering session.

use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

use regex_validator::prompt::{PromptResult, Prompter};
use regex_validator::text::capitalize;

use crate::error::{OrderError, OrderResult};
use crate::menu::{render_menu, Ingredients};
use crate::order::{load_previous, render_summary, Ingredient, Order, Pizza, TipRate};

const MAIN_MENU: [&str; 4] = ["Add a Pizza", "View Current Order", "View Previous Order", "Submit Order"];

/// One menu per base option category, then a yes/no per topping.
pub fn build_pizza<R: BufRead, W: Write>(p: &mut Prompter<R, W>, ingredients: &Ingredients) -> PromptResult<Pizza> {
    let mut chosen = Vec::new();

    for option in &ingredients.base_options {
        let names = option.options.names();
        if names.is_empty() {
            continue;
        }
        let pick = p.menu(&format!("\nChoose a {}:\n", option.category), &names)?;
        if let Some((name, price)) = option.options.get(pick) {
            chosen.push(Ingredient::new(capitalize(&option.category), name, price));
        }
    }

    if ingredients.toppings.is_empty() {
        p.say("\nNo toppings are available.")?;
    }
    for (topping, price) in ingredients.toppings.iter() {
        if p.yes_no(&format!("Do you want {}? (yes/no): ", topping))? {
            chosen.push(Ingredient::new("Topping", topping, price));
        }
    }

    let pizza = Pizza::new(chosen);
    debug!(items = pizza.ingredients.len(), subtotal = pizza.subtotal, "pizza built");
    Ok(pizza)
}

pub fn choose_tip<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<TipRate> {
    let labels: Vec<&str> = TipRate::ALL.iter().map(|rate| rate.label()).collect();
    let pick = p.menu("\nSelect a tip percentage:\n", &labels)?;
    Ok(TipRate::ALL[pick])
}

fn show_previous<R: BufRead, W: Write>(p: &mut Prompter<R, W>, order_path: &Path) -> OrderResult<()> {
    match load_previous(order_path) {
        Ok(Some(order)) if order.pizzas.is_empty() => p.say("\nYour order is currently empty.")?,
        Ok(Some(order)) => {
            p.say(order.render("Previous Order Summary"))?;
            p.say("\nYour previous order has been successfully displayed.")?;
        }
        Ok(None) => p.say("\nError: No previous order found. Please place an order first.")?,
        Err(OrderError::Json { path, source }) => {
            warn!(path = %path.display(), error = %source, "previous order unreadable");
            p.say("\nError: The order file is not in a valid format. Please try again.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Runs the main menu until an order is submitted and saved to `order_path`.
pub fn run_orders<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    ingredients: &Ingredients,
    order_path: &Path,
) -> OrderResult<Order> {
    p.say(render_menu(ingredients))?;

    let mut pizzas: Vec<Pizza> = Vec::new();
    loop {
        match p.menu("\nChoose an option:\n", &MAIN_MENU)? {
            0 => {
                p.say(format!("\nAdding Pizza #{}...", pizzas.len() + 1))?;
                pizzas.push(build_pizza(p, ingredients)?);
            }
            1 => {
                if pizzas.is_empty() {
                    p.say("\nYour current order is empty.")?;
                }
                p.say(render_summary("Order Summary:", &pizzas, 0.0, 0.0, 0.0))?;
            }
            2 => show_previous(p, order_path)?,
            _ => {
                if pizzas.is_empty() {
                    p.say(format!("\n{}", OrderError::EmptyOrder))?;
                    continue;
                }
                let tip = choose_tip(p)?;
                let order = Order::submit(std::mem::take(&mut pizzas), tip, Utc::now())?;
                if order.tip_amount > 0.0 {
                    p.say(format!("Thank you so much for the generous tip of ${:.2}!", order.tip_amount))?;
                }
                p.say(order.render("Order Summary:"))?;
                order.place(order_path)?;
                p.say(format!(
                    "\nYour order has been placed! The details are saved in '{}'. Thank you!",
                    order_path.display()
                ))?;
                p.say("Your order has been submitted!")?;
                return Ok(order);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{BaseOption, PriceList};
    use std::fs;
    use tempfile::tempdir;

    fn small_menu() -> Ingredients {
        Ingredients {
            base_options: vec![
                BaseOption {
                    category: "crust".to_string(),
                    options: PriceList::new([("Thin", 10.99), ("Deep dish", 12.99)]),
                },
                BaseOption {
                    category: "cheese".to_string(),
                    options: PriceList::new([("Mozzarella", 2.00)]),
                },
            ],
            toppings: PriceList::new([("Pepperoni", 2.00), ("Bacon", 3.00)]),
        }
    }

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_build_pizza_by_number_and_name() {
        let mut p = prompter("deep dish\n1\nyes\nn\n");
        let pizza = build_pizza(&mut p, &small_menu()).unwrap();
        assert_eq!(pizza.ingredients.len(), 3);
        assert_eq!(pizza.ingredients[0], Ingredient::new("Crust", "Deep dish", 12.99));
        assert_eq!(pizza.ingredients[2].name(), "Pepperoni");
        assert_eq!(pizza.subtotal, 16.99);
    }

    #[test]
    fn test_build_pizza_without_toppings() {
        let mut menu = small_menu();
        menu.toppings = PriceList::default();
        let mut p = prompter("1\n1\n");
        let pizza = build_pizza(&mut p, &menu).unwrap();
        assert_eq!(pizza.subtotal, 12.99);
        assert!(String::from_utf8(p.into_output()).unwrap().contains("No toppings are available."));
    }

    #[test]
    fn test_empty_submit_refused_then_order_placed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        // submit empty, view previous (none), add Thin + Mozzarella + Bacon, submit with 20% tip
        let mut p = prompter("4\n3\n1\n1\n1\nn\ny\n4\n3\n");

        let order = run_orders(&mut p, &small_menu(), &path).unwrap();
        let out = String::from_utf8(p.into_output()).unwrap();

        assert!(out.contains("Pizza Menu"));
        assert!(out.contains("You cannot submit an empty order."));
        assert!(out.contains("No previous order found."));
        assert!(out.contains("Adding Pizza #1..."));
        assert_eq!(order.pizzas[0].subtotal, 15.99);
        assert_eq!(order.tax_amount, 1.12);
        assert_eq!(order.tip_amount, 3.42);
        assert_eq!(order.final_total, 20.53);
        assert!(out.contains("generous tip of $3.42"));
        assert!(out.ends_with("Your order has been submitted!\n"));
        assert_eq!(load_previous(&path).unwrap(), Some(order));
    }

    #[test]
    fn test_view_previous_and_current() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        fs::write(&path, "garbage").unwrap();

        let mut p = prompter("2\nView Previous Order\n");
        let result = run_orders(&mut p, &small_menu(), &path);
        assert!(matches!(result, Err(OrderError::Prompt(_))));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Your current order is empty."));
        assert!(out.contains("The order file is not in a valid format."));
    }
}
