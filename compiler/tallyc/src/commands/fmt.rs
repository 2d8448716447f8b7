use tally_fmt::Printer;

use crate::CliError;

/// Canonical text of `source`, each statement after the first indented by
/// `indent` spaces.
pub fn format(source: &str, indent: usize) -> Result<String, CliError> {
    let program = tally_parse::parse(source)?;
    let mut out = Printer::new().with_indent(indent).print(&program);
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}
