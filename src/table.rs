//! Turns the model's pipe-delimited reply into an HTML table.
//!
//! This is literal string substitution, not a markdown parser. Replies that
//! use leading/trailing pipes, padded cells or no table at all come out as
//! ragged HTML and are rendered as-is.

const CELL_SEPARATOR: &str = " | ";
const HEADER_RULE: &str = "---";

pub fn to_html_table(content: &str) -> String {
    let body = content
        .replace(CELL_SEPARATOR, "</td><td>")
        .replace('\n', "</td></tr><tr><td>")
        .replace(HEADER_RULE, "");

    format!("<table><tr><td>{}</td></tr></table>", body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_row_becomes_empty_cells() {
        let html = to_html_table("Apple | 95\n--- | ---\nTotal | 95");
        assert_eq!(
            html,
            "<table><tr><td>Apple</td><td>95</td></tr><tr><td></td><td></td></tr><tr><td>Total</td><td>95</td></tr></table>"
        );
    }

    #[test]
    fn bare_rule_line_becomes_single_empty_cell() {
        let html = to_html_table("Apple | 95\n---\nTotal | 95");
        assert_eq!(
            html,
            "<table><tr><td>Apple</td><td>95</td></tr><tr><td></td></tr><tr><td>Total</td><td>95</td></tr></table>"
        );
    }

    #[test]
    fn long_rules_are_stripped_in_chunks() {
        // "-----" loses one "---" and keeps the remainder.
        let html = to_html_table("a | b\n----- | ---\nc | d");
        assert!(html.contains("<tr><td>--</td><td></td></tr>"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_wrapping() {
        let html = to_html_table("  Banana | 105  ");
        assert_eq!(html, "<table><tr><td>Banana</td><td>105</td></tr></table>");
    }

    #[test]
    fn prose_without_table_is_wrapped_in_one_cell() {
        let html = to_html_table("I could not find any food.");
        assert_eq!(
            html,
            "<table><tr><td>I could not find any food.</td></tr></table>"
        );
    }

    #[test]
    fn markup_in_reply_is_not_escaped() {
        let html = to_html_table("<b>Rice</b> | 200");
        assert!(html.contains("<b>Rice</b></td><td>200"));
    }

    #[test]
    fn same_input_same_output() {
        let reply = "Egg | 78\nToast | 75\nTotal | 153";
        assert_eq!(to_html_table(reply), to_html_table(reply));
    }
}
