//! Text-pattern extraction over raw page HTML.
//!
//! The external sources publish plain numbers inside unversioned markup, so
//! everything here is a best-effort heuristic: locate a fragment by class
//! name or by the region name, strip the tags, take the first decimal
//! number. Expect these to break when the sites change their markup.

use regex::Regex;

const FRAGMENT_LEN: usize = 400;
const ROW_LEN: usize = 600;

/// Drop everything between `<` and `>`, replacing each tag with a space so
/// numbers in adjacent cells do not run together.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// First decimal number (digits with an optional fraction) in the text.
pub fn first_decimal(text: &str) -> Option<String> {
    let re = Regex::new(r"\d+(?:\.\d+)?").unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}

/// First decimal number in the tag-stripped fragment following `marker`
/// (a class name or similar anchor), matched case-insensitively.
pub fn price_near_marker(html: &str, marker: &str) -> Option<String> {
    let lower = html.to_lowercase();
    let at = lower.find(&marker.to_lowercase())?;
    first_decimal(&strip_tags(window(&lower, at, FRAGMENT_LEN)))
}

/// Petrol/diesel pair from the table row matching `name`: the first two
/// decimal numbers after a case-insensitive occurrence of the name.
pub fn row_prices(html: &str, name: &str) -> Option<(String, String)> {
    let lower = html.to_lowercase();
    let needle = name.to_lowercase();
    let at = lower.find(&needle)?;
    let fragment = strip_tags(window(&lower, at + needle.len(), ROW_LEN));

    let re = Regex::new(r"\d+(?:\.\d+)?").unwrap();
    let mut numbers = re.find_iter(&fragment);
    let petrol = numbers.next()?.as_str().to_string();
    let diesel = numbers.next()?.as_str().to_string();
    Some((petrol, diesel))
}

/// All currency-prefixed amounts in document order.
pub fn rupee_amounts(text: &str) -> Vec<String> {
    let re = Regex::new(r"(?:₹|Rs\.?)\s*(\d+(?:\.\d+)?)").unwrap();
    re.captures_iter(text).map(|c| c[1].to_string()).collect()
}

// Bounded slice starting at a known char boundary; the end is pulled back
// to the nearest boundary so multi-byte characters never split.
fn window(text: &str, start: usize, len: usize) -> &str {
    let mut end = (start + len).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}
