use derive_more::Display;

/// The indentation unit a listing uses to express nesting.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IndentUnit {
    #[display("tab")]
    Tab,
    #[display("{_0:?}")]
    Literal(String),
}

impl IndentUnit {
    /// Interprets the `--identchar` value: the keyword `tab` selects a tab
    /// character, anything else is taken verbatim.
    pub fn from_cli_value(value: &str) -> Self {
        if value == "tab" {
            IndentUnit::Tab
        } else {
            IndentUnit::Literal(value.to_string())
        }
    }

    fn as_str(&self) -> &str {
        match self {
            IndentUnit::Tab => "\t",
            IndentUnit::Literal(unit) => unit,
        }
    }

    /// Occurrences of the unit anywhere in `line`. Counting the whole line
    /// rather than a strict leading run keeps `tree`-style rows working,
    /// where indent characters sit behind box-drawing glyphs.
    pub fn count_in(&self, line: &str) -> usize {
        let unit = self.as_str();
        if unit.is_empty() {
            return 0;
        }
        line.matches(unit).count()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("tab", IndentUnit::Tab)]
    #[case(" ", IndentUnit::Literal(" ".to_string()))]
    #[case(".", IndentUnit::Literal(".".to_string()))]
    fn cli_value_resolves_to_expected_unit(#[case] value: &str, #[case] expected: IndentUnit) {
        assert_eq!(IndentUnit::from_cli_value(value), expected);
    }

    #[rstest]
    #[case(IndentUnit::Tab, "\t\tname", 2)]
    #[case(IndentUnit::Tab, "name", 0)]
    #[case(IndentUnit::Literal(" ".to_string()), "    name", 4)]
    #[case(IndentUnit::Literal(" ".to_string()), "│   ├── name", 4)]
    fn unit_occurrences_are_counted_across_the_line(
        #[case] unit: IndentUnit,
        #[case] line: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(unit.count_in(line), expected);
    }

    #[test]
    fn empty_literal_counts_nothing() {
        let unit = IndentUnit::Literal(String::new());
        assert_eq!(unit.count_in("  anything"), 0);
    }
}
