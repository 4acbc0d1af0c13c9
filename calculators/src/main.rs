use calc::error::RunError;
use calc::money::dollars;
use calc::{coins, fares, grade, mileage, stats, tax, wage};
use clap::{Parser, Subcommand};
use regex_validator::prompt::{self, Prompter};
use regex_validator::PromptError;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, Level};

/// Small everyday calculators; any value not given as a flag is asked for
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    calculator: Calculator,
}

#[derive(Subcommand, Debug)]
enum Calculator {
    /// Monthly bus fare spending
    BusFare {
        #[arg(long, default_value = "1.75")]
        regular_fare: f64,
        #[arg(long, default_value = "3.0")]
        rush_fare: f64,
        #[arg(long, default_value = "7")]
        regular_rides: u32,
        #[arg(long, default_value = "12")]
        rush_rides: u32,
    },
    /// State and county sales tax on a purchase order
    SalesTax {
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Miles per gallon and cost of a trip
    Mileage {
        #[arg(long)]
        miles: Option<f64>,
        #[arg(long)]
        gallons: Option<f64>,
        #[arg(long)]
        price: Option<f64>,
    },
    /// Gross pay with time-and-a-half overtime
    Wage {
        #[arg(long, default_value = "15.34")]
        rate: f64,
        #[arg(long, default_value = "40")]
        regular_hours: f64,
        #[arg(long, default_value = "10")]
        overtime_hours: f64,
    },
    /// Value of a jar of coins
    Coins,
    /// Letter grade for a quiz score
    Grade {
        #[arg(long)]
        score: Option<String>,
    },
    /// Count, total and average of the whole numbers in a file
    FileStats {
        #[arg(default_value = "ch_9_lab_data.txt")]
        input: PathBuf,
        #[arg(short, long, default_value = "results.txt")]
        output: PathBuf,
    },
}

fn given_or_asked<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    given: Option<f64>,
    question: &str,
) -> Result<f64, PromptError> {
    match given {
        Some(value) => Ok(value),
        None => p.amount(question),
    }
}

fn emit<R, W, T>(p: &mut Prompter<R, W>, json: bool, report: &T, table: String) -> Result<(), RunError>
where
    R: BufRead,
    W: Write,
    T: Serialize,
{
    if json {
        p.say(serde_json::to_string_pretty(report)?)?;
    } else {
        p.say(table)?;
    }
    Ok(())
}

fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, calculator: Calculator, json: bool) -> Result<(), RunError> {
    debug!(?calculator, "running");
    match calculator {
        Calculator::BusFare { regular_fare, rush_fare, regular_rides, rush_rides } => {
            let schedule = fares::FareSchedule { regular_fare, rush_fare, regular_rides, rush_rides };
            let report = fares::bus_fare(&schedule)?;
            let table = format!("This month I spent {} on bus fare.", dollars(report.monthly_total));
            emit(p, json, &report, table)
        }
        Calculator::SalesTax { amount } => {
            let amount = given_or_asked(p, amount, "Enter the total price of your purchase order: ")?;
            let report = tax::sales_tax(amount)?;
            emit(p, json, &report, format!("\n{}", tax::render(&report)))
        }
        Calculator::Mileage { miles, gallons, price } => {
            let miles = given_or_asked(p, miles, "How many miles did you drive? ")?;
            let gallons = match gallons {
                Some(gallons) => gallons,
                None => p.until("How many gallons of gas did you use? ", |answer| {
                    match answer.trim().parse::<f64>() {
                        Ok(g) if g > 0.0 => Ok(g),
                        _ => Err("Please enter a number of gallons greater than zero."),
                    }
                })?,
            };
            let price = given_or_asked(p, price, "What is the price of gas? ")?;
            let report = mileage::trip(miles, gallons, price)?;
            emit(p, json, &report, mileage::render(&report))
        }
        Calculator::Wage { rate, regular_hours, overtime_hours } => {
            let pay = wage::gross_pay(rate, regular_hours, overtime_hours)?;
            let table = format!("Your gross pay is {}.", dollars(pay.gross_pay));
            emit(p, json, &pay, table)
        }
        Calculator::Coins => {
            p.say("Enter the number of each type of coin in your jar.")?;
            let quarters = p.whole_number("Quarters: ")?;
            let dimes = p.whole_number("Dimes: ")?;
            let nickels = p.whole_number("Nickels: ")?;
            let pennies = p.whole_number("Pennies: ")?;
            let summary = coins::count_coins(quarters, dimes, nickels, pennies)?;
            emit(p, json, &summary, format!("\n{}", coins::render(&summary)))
        }
        Calculator::Grade { score } => {
            let result = match score {
                Some(raw) => grade::letter_grade(&raw)?,
                None => p.until("Enter quiz score: ", grade::letter_grade)?,
            };
            let table = format!("Letter grade = {:?}\n{}", result.letter, result.advice());
            emit(p, json, &result, table)
        }
        Calculator::FileStats { input, output } => {
            let summary = stats::summarize_file(&input, &output)?;
            let table = format!(
                "Successfully read {} numbers from the file.\nResults have been written to '{}'.",
                summary.count,
                output.display()
            );
            emit(p, json, &summary, table)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut p = prompt::stdio();
    match run(&mut p, args.calculator, args.json) {
        Ok(()) | Err(RunError::Prompt(PromptError::Closed)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(input: &str, calculator: Calculator, json: bool) -> (Result<(), RunError>, String) {
        let mut p = Prompter::new(input.as_bytes(), Vec::new());
        let result = run(&mut p, calculator, json);
        (result, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn test_bus_fare_defaults() {
        let calculator = Calculator::BusFare { regular_fare: 1.75, rush_fare: 3.0, regular_rides: 7, rush_rides: 12 };
        let (result, out) = drive("", calculator, false);
        result.unwrap();
        assert_eq!(out.trim(), "This month I spent $48.25 on bus fare.");
    }

    #[test]
    fn test_sales_tax_reprompts() {
        let (result, out) = drive("abc\n-5\n100\n", Calculator::SalesTax { amount: None }, false);
        result.unwrap();
        assert!(out.contains("Invalid input. Please enter a valid number."));
        assert!(out.contains("Amount cannot be negative."));
        assert!(out.contains("107.50"));
    }

    #[test]
    fn test_grade_reprompts_until_valid() {
        let (result, out) = drive("88.5\n150\n85\n", Calculator::Grade { score: None }, false);
        result.unwrap();
        assert!(out.contains("Error: Please enter a whole number, not a decimal or float."));
        assert!(out.contains("Input Error: Score cannot be higher than 100."));
        assert!(out.contains("Letter grade = B"));
    }

    #[test]
    fn test_grade_flag_error_is_returned() {
        let (result, _) = drive("", Calculator::Grade { score: Some("abc".into()) }, false);
        assert!(matches!(result, Err(RunError::Calc(calc::CalcError::NotInteger))));
    }

    #[test]
    fn test_coins_json() {
        let (result, out) = drive("4\n3\nx\n2\n1\n", Calculator::Coins, true);
        result.unwrap();
        assert!(out.contains("Error: Please enter a whole number greater than or equal to 0."));
        assert!(out.contains("\"total_cents\": 141"));
    }

    #[test]
    fn test_coins_too_many_to_count() {
        let (result, out) = drive("99999999999999999999
1000000000000000000
0
0
0
", Calculator::Coins, false);
        assert!(out.contains("Error: That number is too large."));
        assert!(matches!(result, Err(RunError::Calc(calc::CalcError::TooManyCoins))));
    }

    #[test]
    fn test_file_stats_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("numbers.txt");
        let output = dir.path().join("results.txt");
        std::fs::write(&input, "1\n2\n3\n").unwrap();

        let (result, out) = drive("", Calculator::FileStats { input, output: output.clone() }, false);
        result.unwrap();
        assert!(out.contains("Successfully read 3 numbers from the file."));
        assert!(output.exists());
    }

    #[test]
    fn test_mileage_rejects_zero_gallons_interactively() {
        let calculator = Calculator::Mileage { miles: Some(300.0), gallons: None, price: Some(3.0) };
        let (result, out) = drive("0\n12\n", calculator, false);
        result.unwrap();
        assert!(out.contains("greater than zero"));
        assert!(out.contains("25.00"));
    }
}
