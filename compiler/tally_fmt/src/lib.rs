//! Tally Formatter
//!
//! Renders a [`Program`] back to source. Every statement is printed in its
//! canonical form (`<team> <score>-<score> <team>;`), one per line.
//! Re-parsing the output yields a program equal to the input.

use tally_ir::{Program, Statement};

/// Program printer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Printer {
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Printer::default()
    }

    /// Indent every statement after the first by `indent` spaces.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Render `program`. An empty program renders as `""`.
    pub fn print(&self, program: &Program) -> String {
        let separator = format!("\n{}", " ".repeat(self.indent));
        program
            .iter()
            .map(Statement::literal)
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

/// Render `program` with the default printer.
pub fn print_program(program: &Program) -> String {
    Printer::new().print(program)
}
