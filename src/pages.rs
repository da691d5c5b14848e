//! Page-range expression parsing.
//!
//! A range expression is a comma-separated list of 1-based page numbers and
//! inclusive ranges, e.g. `"1-3, 5, 7-10"`. Parsing is bounded by the page
//! count of the target document and never fails: malformed or out-of-bounds
//! tokens are dropped, and an empty result signals an invalid selection to
//! the caller.

/// Parse a page-range expression against a document with `max_page` pages.
///
/// Rules:
/// - Tokens are comma-separated; surrounding whitespace is trimmed and empty
///   tokens (from consecutive commas) are ignored.
/// - `start-end` is an inclusive range. Both ends must be positive integers
///   with `start <= end` and both within `[1, max_page]`, otherwise the whole
///   token is dropped — no partial inclusion.
/// - A lone token must be a positive integer within `[1, max_page]`.
/// - The result is the union of all valid tokens, deduplicated and sorted
///   ascending.
///
/// An empty result is not an error; callers treat it as a failed validation.
///
/// # Example
///
/// ```
/// use pdfsnap::pages::parse_range;
///
/// assert_eq!(parse_range("1-3,5,7-10", 10), vec![1, 2, 3, 5, 7, 8, 9, 10]);
/// assert_eq!(parse_range("5-2", 10), Vec::<u32>::new());
/// ```
pub fn parse_range(expression: &str, max_page: u32) -> Vec<u32> {
    let mut pages: Vec<u32> = Vec::new();

    for token in expression.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if let Some((start, end)) = token.split_once('-') {
            let start = match parse_page(start, max_page) {
                Some(n) => n,
                None => continue,
            };
            let end = match parse_page(end, max_page) {
                Some(n) => n,
                None => continue,
            };
            if start > end {
                continue;
            }
            for p in start..=end {
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        } else if let Some(p) = parse_page(token, max_page) {
            if !pages.contains(&p) {
                pages.push(p);
            }
        }
    }

    pages.sort_unstable();
    pages
}

/// Parse one endpoint: a positive integer within `[1, max_page]`.
fn parse_page(token: &str, max_page: u32) -> Option<u32> {
    let n: u32 = token.trim().parse().ok()?;
    if n >= 1 && n <= max_page {
        Some(n)
    } else {
        None
    }
}
