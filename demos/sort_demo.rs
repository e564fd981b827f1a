//! Sort a sequence in the terminal, one event per line.
//!
//! Run: cargo run --bin sort-demo -- [algorithm] [values]
//!
//! `algorithm` is one of bubble, insertion, merge, quick or heap (default
//! bubble); `values` is a comma-separated list (default: random).

use algoviz::Session;
use algoviz_core::Config;
use algoviz_demos::SortPrinter;
use algoviz_sort::SortAlgorithm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let algorithm: SortAlgorithm = args.next().as_deref().unwrap_or("bubble").parse()?;

    let session = Session::new(Config::default().with_speed(95))?;
    if let Some(values) = args.next() {
        session.set_values_from_str(&values)?;
    }

    let values = session.values();
    println!(
        "{} ({}) on {} values",
        algorithm.title(),
        algorithm.time_complexity(),
        values.len()
    );
    let mut printer = SortPrinter::new(&values);
    println!("start            {}", printer.render(&[]));

    let report = session.run_sort(algorithm, &mut printer)?;
    println!(
        "sorted in {} steps ({} writes shown): {:?}",
        report.steps,
        printer.writes(),
        report.values
    );
    Ok(())
}
