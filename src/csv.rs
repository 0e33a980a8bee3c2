// src/csv.rs
use std::mem::take;

pub type Row = Vec<String>;
pub type Grid = Vec<Row>;

/* ---------------- Parsing ---------------- */

/// Split sheet export text into rows of trimmed fields.
///
/// Lines are split on `\n` (a trailing `\r` is trimmed away with the rest of
/// the field whitespace). Rows whose fields are all empty are dropped.
pub fn parse_rows(text: &str, sep: char) -> Grid {
    text.split('\n')
        .map(|line| split_line(line, sep))
        .filter(|row| row.iter().any(|f| !f.is_empty()))
        .collect()
}

/// Split one line into fields.
///
/// Every `"` toggles the in-quotes state and is dropped; `sep` only splits
/// outside quotes. A doubled `""` inside a quoted field is *not* an escape:
/// it closes and reopens the quote, so the pair simply vanishes. Sheets we
/// read never contain quotes in names, so this is kept as-is.
pub fn split_line(line: &str, sep: char) -> Row {
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => row.push(finish_field(&take(&mut field))),
            _ => field.push(ch),
        }
    }
    row.push(finish_field(&field));
    row
}

/// Trim, then strip one stray quote at either edge.
fn finish_field(raw: &str) -> String {
    let t = raw.trim();
    let t = t.strip_prefix('"').unwrap_or(t);
    let t = t.strip_suffix('"').unwrap_or(t);
    t.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_delimiters_give_n_plus_one_fields() {
        assert_eq!(split_line("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_line(",,", ','), vec!["", "", ""]);
        assert_eq!(split_line("", ','), vec![""]);
    }

    #[test]
    fn quoted_delimiter_stays_in_field() {
        assert_eq!(split_line(r#""Team 1","Owl, Barn",x"#, ','), vec!["Team 1", "Owl, Barn", "x"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  a ,\tb\r", ','), vec!["a", "b"]);
        assert_eq!(split_line(r#"" padded ""#, ','), vec!["padded"]);
    }

    #[test]
    fn doubled_quote_is_not_an_escape() {
        // `""` toggles twice and both quotes are dropped
        assert_eq!(split_line(r#""say ""hi""",b"#, ','), vec!["say hi", "b"]);
    }

    #[test]
    fn tsv_separator() {
        assert_eq!(split_line("a\tb,c", '\t'), vec!["a", "b,c"]);
    }

    #[test]
    fn blank_rows_are_dropped() {
        let text = "\"Team 1\",\"Owl\"\n\"\",\"\",\"\"\n\n  ,  \r\n\"Player 1\",\"A\"\r\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![vec!["Team 1", "Owl"], vec!["Player 1", "A"]]);
    }
}
