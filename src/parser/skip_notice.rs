use colored::Colorize;
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SkipReason {
    #[display("blank line")]
    Blank,
    #[display("comma in entry")]
    Comma,
    #[display("nothing left after stripping connectors")]
    BareConnectors,
}

/// Skip notices are user-facing output rather than log records: they go
/// to stdout unconditionally so a quiet run still reports which lines of
/// the listing were dropped.
pub fn skip_notice(line_number: usize, reason: SkipReason) {
    println!("{} line {line_number}: {reason}", "skipped".yellow());
}
