use std::fmt::Display;
use itertools::Itertools;
use qmat::Rational;
use qmat_matrix::{Mat, MatTrait};
use super::locale::{Locale, Msg};

const YELLOW: &str = "\x1b[0;33m";
const GREEN:  &str = "\x1b[0;32m";
const RED:    &str = "\x1b[0;31m";
const RESET:  &str = "\x1b[0m";

/// Turns results into text. Owns every formatting decision 
/// (labels, alignment, colors); the numeric crates only provide `Display`.
pub struct Output { 
    locale: Locale,
    color: bool
}

impl Output { 
    pub fn new(locale: Locale, color: bool) -> Self { 
        Output { locale, color }
    }

    /// `Label: value`
    pub fn value<D>(&self, label: Msg, value: &D) -> String
    where D: Display { 
        format!("{}: {value}", self.locale.text(label))
    }

    /// `Label:` followed by the rows, each `| a | b |` with 
    /// cells right-aligned to the width of their column.
    pub fn matrix(&self, label: Msg, a: &Mat<Rational>) -> String { 
        use prettytable::*;

        let mut table = Table::new();
        table.set_format(
            format::FormatBuilder::new()
                .column_separator('|')
                .borders('|')
                .padding(1, 1)
                .build()
        );

        for i in 0..a.nrows() { 
            let cells = a.row(i).map(|x| 
                Cell::new_align(&x.to_string(), format::Alignment::RIGHT)
            ).collect_vec();
            table.add_row(Row::new(cells));
        }

        let rows = table.to_string().lines().map(|line| 
            self.paint(line, YELLOW)
        ).collect_vec();

        std::iter::once(format!("{}:", self.locale.text(label))).chain(rows).join("\n")
    }

    /// `Result:` followed by `x1 = ...`, `x2 = ...`.
    pub fn solution(&self, xs: &[Rational]) -> String { 
        let lines = xs.iter().enumerate().map(|(i, x)| 
            self.paint(&format!("x{} = {x}", i + 1), GREEN)
        );
        std::iter::once(format!("{}:", self.locale.text(Msg::Result))).chain(lines).join("\n")
    }

    /// `error: message`
    pub fn error(&self, e: &dyn std::error::Error) -> String { 
        format!("{}: {e}", self.paint("error", RED))
    }

    fn paint(&self, s: &str, color: &str) -> String { 
        if self.color { 
            format!("{color}{s}{RESET}")
        } else { 
            s.to_owned()
        }
    }
}
