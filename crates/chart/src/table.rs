//! HTML key/value table used for the summary statistics block.

/// Escapes `&`, `<` and `>` for safe embedding in HTML text nodes.
///
/// # Example
/// ```
/// use routeviz_chart::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for character in input.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders key/value pairs as a `<table class="keyValue">`.
///
/// Keys are escaped; values are inserted verbatim so callers can embed
/// pre-rendered markup such as coordinate strings built from HTML
/// entities.
pub fn key_value_table(entries: &[(String, String)]) -> String {
    let mut html = String::from("<table class=\"keyValue\">\n");
    for (key, value) in entries {
        html.push_str("  <tr><th>");
        html.push_str(&escape_html(key));
        html.push_str("</th><td>");
        html.push_str(value);
        html.push_str("</td></tr>\n");
    }
    html.push_str("</table>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("Distance Travelled"), "Distance Travelled");
    }

    #[test]
    fn test_escape_html_rewrites_markup_characters() {
        assert_eq!(
            escape_html("<script>1 & 2</script>"),
            "&lt;script&gt;1 &amp; 2&lt;/script&gt;"
        );
    }

    #[test]
    fn test_key_value_table_layout() {
        let entries = [
            ("Fastest Speed".to_string(), "19.00 kph".to_string()),
            ("Average Altitude".to_string(), "116.50 m".to_string()),
        ];

        assert_eq!(
            key_value_table(&entries),
            "<table class=\"keyValue\">\n  \
             <tr><th>Fastest Speed</th><td>19.00 kph</td></tr>\n  \
             <tr><th>Average Altitude</th><td>116.50 m</td></tr>\n\
             </table>\n"
        );
    }

    #[test]
    fn test_key_value_table_keeps_entity_values_verbatim() {
        let entries = [(
            "Central Point".to_string(),
            "(0&#0176;00&#8217;00.0&#8221;N, 0&#0176;00&#8217;00.0&#8221;E)".to_string(),
        )];
        let html = key_value_table(&entries);

        assert!(html.contains("<td>(0&#0176;00&#8217;00.0&#8221;N"));
    }

    #[test]
    fn test_key_value_table_escapes_keys() {
        let entries = [("a & b".to_string(), "1".to_string())];

        assert!(key_value_table(&entries).contains("<th>a &amp; b</th>"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            key_value_table(&[]),
            "<table class=\"keyValue\">\n</table>\n"
        );
    }
}
