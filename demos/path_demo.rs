//! Search a random maze in the terminal and print the explored grid.
//!
//! Run: cargo run --bin path-demo -- [algorithm] [rows] [cols]
//!
//! `algorithm` is one of bfs, dfs, dijkstra or aStar (default aStar). The
//! start is the top-left corner and the end the bottom-right one.

use algoviz::{Point, Session};
use algoviz_core::Config;
use algoviz_demos::GridPainter;
use algoviz_paths::PathAlgorithm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let algorithm: PathAlgorithm = args.next().as_deref().unwrap_or("aStar").parse()?;
    let rows: usize = args.next().map_or(Ok(12), |a| a.parse())?;
    let cols: usize = args.next().map_or(Ok(32), |a| a.parse())?;

    let config = Config::default()
        .with_grid(rows, cols)
        .with_search_delays_ms(2, 10);
    let session = Session::new(config)?;
    let last = Point::new(rows as i32 - 1, cols as i32 - 1);
    session.set_start(Point::ZERO)?;
    session.set_end(last)?;
    session.generate_maze(&mut rand::rng())?;

    let grid = session.grid();
    println!("{} ({})", algorithm.title(), algorithm.time_complexity());
    print!("{grid}");
    println!();

    let mut painter = GridPainter::new(&grid);
    let report = session.run_pathfind(algorithm, &mut painter)?;
    match &report.path {
        Some(path) => println!("path of {} hops, {} nodes visited", path.hops(), report.visited),
        None => {
            print!("{}", painter.render());
            println!("no path, {} nodes visited", report.visited);
        }
    }
    Ok(())
}
