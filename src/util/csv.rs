//! Minimal CSV building for the admin exports.

/// Quote a field when it contains a delimiter, quote or newline.
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One CSV row, CRLF-terminated.
pub fn row(fields: &[&str]) -> String {
    let mut out = fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str("\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(row(&["a", "b", "c"]), "a,b,c\r\n");
    }

    #[test]
    fn commas_and_quotes_are_quoted() {
        assert_eq!(escape("Smith, Jane"), "\"Smith, Jane\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn newlines_are_quoted() {
        assert_eq!(escape("line1\nline2"), "\"line1\nline2\"");
    }
}
