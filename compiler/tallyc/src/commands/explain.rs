use tally_diagnostic::ErrorCode;

/// Description of an `E####` code, or `None` for an unknown code.
pub fn explain(name: &str) -> Option<String> {
    let code = ErrorCode::from_name(&name.to_ascii_uppercase())?;
    Some(format!("{code}: {}\n", code.description()))
}
