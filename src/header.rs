use std::path::Path;

use crate::error::WavetableError;

const VALUES_PER_LINE: usize = 8;
const INDENT: &str = "    ";

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`, the names a C compiler takes for an array.
pub fn validate_array_name(name: &str) -> Result<(), WavetableError> {
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if head_ok && tail_ok {
        Ok(())
    } else {
        Err(WavetableError::InvalidArrayName(name.to_string()))
    }
}

/// Formats one table entry as a single-precision C literal, e.g. `-0.500000f`.
pub fn format_value(v: f64) -> String {
    format!("{:.6}f", v)
}

/// Renders `values` as an include-guarded `const float` array declaration.
///
/// Lines are joined with `\n` and the text does not end with a newline. Every
/// row of values, the last one included, carries a trailing comma.
pub fn render_header(values: &[f64], array_name: &str, source: &Path) -> String {
    let guard = format!("{}_H", array_name.to_uppercase());
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    let mut lines = vec![
        format!("// Generated from {}", source_name),
        format!("#ifndef {}", guard),
        format!("#define {}", guard),
        String::new(),
        format!("const float {}[{}] = {{", array_name, values.len()),
    ];

    for row in values.chunks(VALUES_PER_LINE) {
        let row = row
            .iter()
            .map(|&v| format_value(v))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{}{},", INDENT, row));
    }

    lines.push("};".to_string());
    lines.push(String::new());
    lines.push("#endif".to_string());

    lines.join("\n")
}
