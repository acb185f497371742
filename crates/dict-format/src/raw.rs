use crate::MAX_RESULTS;
use dict_model::Translation;

/// Width of the destination column, padding included.
const COLUMN_WIDTH: usize = 40;
const RULE_WIDTH: usize = 70;

/// Two aligned columns: destination term, then source term.
///
/// ```text
/// Term: hallo
/// ======================================================================
/// hello                                   hallo
/// ```
pub fn render(translation: &Translation) -> String {
    let mut out = String::new();
    out.push_str("Term: ");
    out.push_str(translation.query());
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    if !translation.is_found() {
        out.push_str("Not Found");
        return out;
    }

    for (destination, source) in translation.pairs(MAX_RESULTS) {
        // Always at least one space, even for overlong terms
        let padding = COLUMN_WIDTH
            .saturating_sub(destination.chars().count())
            .max(1);
        out.push_str(destination);
        out.push_str(&" ".repeat(padding));
        out.push_str(source);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(destination: &[&str], source: &[&str]) -> Translation {
        Translation::new("hallo")
            .with_destination(destination.iter().map(|s| s.to_string()).collect())
            .with_source(source.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_header_and_rows() {
        let out = render(&translation(&["hello", "hi"], &["hallo", "servus"]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Term: hallo");
        assert_eq!(lines[1], "=".repeat(70));
        assert_eq!(lines[2], format!("hello{}hallo", " ".repeat(35)));
        assert_eq!(lines[3], format!("hi{}servus", " ".repeat(38)));
        assert_eq!(lines.len(), 4);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_not_found() {
        let out = render(&translation(&["hello"], &[]));
        assert_eq!(out, format!("Term: hallo\n{}\nNot Found", "=".repeat(70)));
    }

    #[test]
    fn test_overlong_term_keeps_one_space() {
        let long = "x".repeat(45);
        let out = render(&translation(&[&long], &["kurz"]));
        assert!(out.contains(&format!("{long} kurz\n")));
    }

    #[test]
    fn test_padding_counts_characters_not_bytes() {
        let out = render(&translation(&["Mädchen"], &["girl"]));
        assert!(out.contains(&format!("Mädchen{}girl", " ".repeat(33))));
    }

    #[test]
    fn test_caps_at_twenty_rows_in_order() {
        let destination: Vec<String> = (0..25).map(|i| format!("d{i}")).collect();
        let source: Vec<String> = (0..25).map(|i| format!("s{i}")).collect();
        let t = Translation::new("many")
            .with_destination(destination)
            .with_source(source);

        let out = render(&t);
        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert_eq!(rows.len(), 20);
        assert!(rows[0].starts_with("d0 "));
        assert!(rows[19].starts_with("d19 "));
        assert!(rows[19].ends_with("s19"));
    }

    #[test]
    fn test_rows_capped_by_shorter_list() {
        let out = render(&translation(&["a", "b", "c"], &["x"]));
        assert_eq!(out.lines().count(), 3);
    }
}
