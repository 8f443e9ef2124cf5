use engine::Ledger;

use crate::error::Result;

mod error;
mod repl;
mod settings;

fn main() -> Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sosta={level},engine={level}",
            level = settings.level
        ))
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let entry_fee = repl::resolve_fee(
        settings.entry_fee.as_deref(),
        "flat entry fee",
        &mut input,
        &mut output,
    )?;
    let hourly_fee = repl::resolve_fee(
        settings.hourly_fee.as_deref(),
        "hourly fee",
        &mut input,
        &mut output,
    )?;

    let ledger = Ledger::builder()
        .entry_fee(entry_fee)
        .hourly_fee(hourly_fee)
        .build()?;
    tracing::info!("ledger ready: entry fee {entry_fee}, hourly fee {hourly_fee}");

    let mut repl = repl::Repl::new(ledger, input, output);
    repl.run()?;

    Ok(())
}
