use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::env;
use tracing_subscriber::EnvFilter;

use property_patterns::{Clock, FixedClock, ImmutableRecord, Money, SystemClock, ValidatedRecord};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "as-of" {
        let today = NaiveDate::parse_from_str(&args[2], "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", args[2]))?;
        run_demo(&FixedClock(today))
    } else {
        run_demo(&SystemClock)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_demo(clock: &impl Clock) -> Result<()> {
    tracing::info!(version = property_patterns::VERSION, today = %clock.today(), "starting demo");

    run_validated()?;
    run_immutable(clock)?;
    run_money()?;

    Ok(())
}

fn run_validated() -> Result<()> {
    println!("🛡️  Validated record");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut record = ValidatedRecord::new("  Ada Lovelace ", 36, Decimal::from(1000))?;
    record.on_salary_changed(|event| {
        println!("  salary: {} → {}", event.old_salary, event.new_salary);
    });

    println!("✓ {}", record.display_name());

    record.set_salary(Decimal::from(1000))?;
    record.set_salary(Decimal::from(1200))?;

    if let Err(err) = record.set_age(-1) {
        println!("✗ rejected: {}", err);
    }
    if let Err(err) = record.set_name("   ") {
        println!("✗ rejected: {}", err);
    }

    Ok(())
}

fn run_immutable(clock: &impl Clock) -> Result<()> {
    println!("\n🧊 Immutable record");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let birth_date = NaiveDate::from_ymd_opt(2000, 6, 15).context("invalid birth date")?;
    let mut tags = vec!["math".to_string(), "poetry".to_string()];

    let record = ImmutableRecord::builder("Ada", "Lovelace", birth_date)
        .notes("first programmer")
        .tags(&tags)
        .build();
    tags.push("added later".to_string());

    println!("✓ {} ({})", record.full_name(), record.id());
    println!("  age on {}: {}", clock.today(), record.age_with(clock));
    println!("  tags: {:?} (source now has {})", record.tags(), tags.len());

    Ok(())
}

fn run_money() -> Result<()> {
    println!("\n💵 Money");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let ten = Money::new(Decimal::new(1000, 2), "usd")?;
    let five = Money::new(Decimal::new(500, 2), "USD")?;
    println!("✓ {} + {} = {}", ten, five, ten.add(&five)?);

    let euros = Money::new(Decimal::from(5), "eur")?;
    if let Err(err) = ten.add(&euros) {
        println!("✗ rejected: {}", err);
    }

    Ok(())
}
