pub mod builder;
pub mod error;
pub mod menu;
pub mod order;
pub mod sandwich;

pub use builder::run_orders;
pub use error::{OrderError, OrderResult};
pub use menu::{Ingredients, PriceList};
pub use order::{load_previous, Order, Pizza, TipRate, Totals};
pub use sandwich::{run_sandwiches, SandwichMenu, SandwichOrder};
