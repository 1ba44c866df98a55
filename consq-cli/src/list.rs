use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use consq::Seq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Operation {
    /// Reverse the values
    Reverse,
    /// Merge with --other, both assumed sorted ascending
    SortMerge,
    /// Keep the first --count values
    Take,
    /// Remove the first --count values
    Drop,
    /// Split in two before position --count
    SplitAt,
    /// All prefixes, shortest first
    Inits,
    /// All suffixes, longest first
    Tails,
    /// Put --value between neighbouring values
    Intersperse,
    /// Pair with --other, up to the shorter length
    Zip,
    /// Pair with --other, keeping the leftovers of the longer one
    Align,
    /// Collapse runs of equal values
    Derun,
    /// Keep only the first occurrence of each value
    Dedup,
    /// Add up the values, starting at 0
    Sum,
    /// Multiply the values, starting at 1
    Product,
    /// Count the values
    Length,
    /// The value at --index
    Lookup,
    /// Remove the value at --index
    RemoveAt,
    /// Replace the value at --index by --value
    SetAt,
    /// Running totals from the left, starting at 0
    ScanLeft,
    /// Running totals from the right, starting at 0
    ScanRight,
}

/// A comma-separated list of integers, such as `1,-2,3`.
///
/// This is a single argument, so options can follow it on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Values(Vec<i64>);

fn parse_values(s: &str) -> Result<Values, std::num::ParseIntError> {
    if s.trim().is_empty() {
        return Ok(Values::default());
    }
    s.split(',')
        .map(|value| value.trim().parse())
        .collect::<Result<Vec<_>, _>>()
        .map(Values)
}

#[derive(Debug, Parser)]
pub(crate) struct List {
    /// operation to apply
    #[arg(value_enum)]
    pub(crate) operation: Operation,
    /// comma-separated integers, e.g. 1,2,3 (default empty)
    #[arg(value_parser = parse_values, allow_hyphen_values = true, default_value = "")]
    pub(crate) values: Values,
    /// second list of comma-separated integers, for sort-merge, zip and align
    #[arg(long, value_parser = parse_values, allow_hyphen_values = true, default_value = "")]
    pub(crate) other: Values,
    /// Number of values, for take, drop and split-at
    #[arg(long, default_value_t = 0)]
    pub(crate) count: usize,
    /// Position, for lookup, remove-at and set-at
    #[arg(long, default_value_t = 0)]
    pub(crate) index: usize,
    /// Value, for intersperse and set-at
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub(crate) value: i64,
}

impl List {
    pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
        let output = self.evaluate()?;
        println!("{}", output);
        Ok(())
    }

    /// Apply the operation and render the result with its `Debug` format.
    ///
    /// Arithmetic is checked: overflowing `i64` is reported as an error.
    pub(crate) fn evaluate(&self) -> Result<String, anyhow::Error> {
        let values = Seq::from(self.values.0.clone());
        let other = Seq::from(self.other.0.clone());
        tracing::debug!(
            operation = ?self.operation,
            values = ?values,
            other = ?other,
            "evaluating list operation"
        );
        let output = match self.operation {
            Operation::Reverse => render(values.reverse()),
            Operation::SortMerge => render(values.merge(&other, |a, b| a <= b)),
            Operation::Take => render(values.take(self.count)),
            Operation::Drop => render(values.drop(self.count)),
            Operation::SplitAt => render(values.split_at(self.count)),
            Operation::Inits => render(values.inits()),
            Operation::Tails => render(values.tails()),
            Operation::Intersperse => render(values.intersperse(self.value)),
            Operation::Zip => render(values.zip(&other)),
            Operation::Align => render(values.align(&other)),
            Operation::Derun => render(values.derun(|a, b| a == b)),
            Operation::Dedup => render(values.deduplicate(|a, b| a == b)),
            Operation::Sum => {
                let sum = values.fold_right(Some(0i64), |x, acc| acc?.checked_add(*x));
                render(sum.ok_or_else(|| overflow(self.operation))?)
            }
            Operation::Product => {
                let product = values.fold_right(Some(1i64), |x, acc| acc?.checked_mul(*x));
                render(product.ok_or_else(|| overflow(self.operation))?)
            }
            Operation::Length => render(values.len()),
            Operation::Lookup => render(values.lookup(self.index)?),
            Operation::RemoveAt => render(values.remove_at(self.index)?),
            Operation::SetAt => render(values.set_at(self.index, self.value)?),
            Operation::ScanLeft => {
                let totals =
                    values.scan_left(Some(0i64), |acc, x| acc.and_then(|acc| acc.checked_add(*x)));
                render(self.all_totals(totals)?)
            }
            Operation::ScanRight => {
                let totals =
                    values.scan_right(Some(0i64), |x, acc| acc.and_then(|acc| acc.checked_add(*x)));
                render(self.all_totals(totals)?)
            }
        };
        Ok(output)
    }

    // once a running total overflows every later one is None
    fn all_totals(&self, totals: Seq<Option<i64>>) -> Result<Seq<i64>, anyhow::Error> {
        if totals.any(Option::is_none) {
            Err(overflow(self.operation))
        } else {
            Ok(totals.cat_options())
        }
    }
}

fn overflow(operation: Operation) -> anyhow::Error {
    anyhow!("integer overflow in {:?}", operation)
}

fn render<T: std::fmt::Debug>(value: T) -> String {
    format!("{:?}", value)
}
