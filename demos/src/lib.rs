//! Text renderers shared by the demo binaries.

use algoviz_core::{Point, StepSink};
use algoviz_paths::{Grid, PathStep};
use algoviz_sort::SortStep;

/// Prints one line per sorting event, with the values as they stand after
/// the event.
#[derive(Debug)]
pub struct SortPrinter {
    values: Vec<i64>,
    finalized: Vec<bool>,
    writes: usize,
}

impl SortPrinter {
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            finalized: vec![false; values.len()],
            writes: 0,
        }
    }

    /// Events seen so far that changed the values.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// The values with finalized slots bracketed.
    pub fn render(&self, highlight: &[usize]) -> String {
        let mut out = String::new();
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let cell = if highlight.contains(&i) {
                format!("<{v}>")
            } else if self.finalized[i] {
                format!("[{v}]")
            } else {
                v.to_string()
            };
            out.push_str(&cell);
        }
        out
    }

    /// Apply an event to the view and describe it.
    pub fn apply(&mut self, event: &SortStep<i64>) -> String {
        if event.is_mutation() {
            self.writes += 1;
        }
        match *event {
            SortStep::Compare(i, j) => {
                format!("compare {i:>2} {j:>2}  {}", self.render(&[i, j]))
            }
            SortStep::Swap(i, j) => {
                self.values.swap(i, j);
                format!("swap    {i:>2} {j:>2}  {}", self.render(&[i, j]))
            }
            SortStep::Set { index, value } => {
                self.values[index] = value;
                format!("set     {index:>2}     {}", self.render(&[index]))
            }
            SortStep::Finalize(i) => {
                self.finalized[i] = true;
                format!("final   {i:>2}     {}", self.render(&[]))
            }
        }
    }
}

impl StepSink<SortStep<i64>> for SortPrinter {
    fn on_step(&mut self, event: &SortStep<i64>) {
        println!("{}", self.apply(event));
    }
}

/// Paints visits and the path onto a copy of the grid and prints the picture
/// once the path is complete.
#[derive(Debug)]
pub struct GridPainter {
    cols: usize,
    cells: Vec<char>,
    end: Option<Point>,
}

impl GridPainter {
    pub fn new(grid: &Grid) -> Self {
        let cells = grid.to_string().chars().filter(|c| *c != '\n').collect();
        Self {
            cols: grid.cols(),
            cells,
            end: grid.end(),
        }
    }

    fn paint(&mut self, p: Point, ch: char) {
        let i = p.row as usize * self.cols + p.col as usize;
        if let Some(cell) = self.cells.get_mut(i) {
            if *cell == '.' {
                *cell = ch;
            }
        }
    }

    pub fn render(&self) -> String {
        let cols = self.cols.max(1);
        let mut out = String::with_capacity(self.cells.len() + self.cells.len() / cols);
        for row in self.cells.chunks(cols) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl StepSink<PathStep> for GridPainter {
    fn on_step(&mut self, event: &PathStep) {
        let p = event.point();
        match event {
            PathStep::Visit(_) => self.paint(p, 'o'),
            PathStep::Path(_) => {
                self.paint(p, '*');
                if Some(p) == self.end {
                    print!("{}", self.render());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_printer_tracks_values() {
        let mut p = SortPrinter::new(&[3, 1, 2]);
        assert_eq!(p.apply(&SortStep::Swap(0, 1)), "swap     0  1  <1> <3> 2");
        p.apply(&SortStep::Compare(1, 2));
        p.apply(&SortStep::Set { index: 2, value: 9 });
        assert_eq!(p.apply(&SortStep::Finalize(0)), "final    0     [1] 3 9");
        // The swap and the set; compares and finalizes change nothing.
        assert_eq!(p.writes(), 2);
    }

    #[test]
    fn grid_painter_keeps_markers() {
        let g = Grid::from_ascii("S.#\n..E").unwrap();
        let mut p = GridPainter::new(&g);
        p.on_step(&PathStep::Visit(Point::new(0, 0)));
        p.on_step(&PathStep::Visit(Point::new(0, 1)));
        p.on_step(&PathStep::Path(Point::new(1, 1)));
        assert_eq!(p.render(), "So#\n.*E\n");
    }
}
