//! Translation between service names and symbolic names.
//!
//! The reporting service names every dimension and metric as `ga:camelCase`
//! (for example `ga:visitorType`). Application code uses the snake_case form
//! (`visitor_type`). The two conversions are inverse to each other for
//! well-formed input.

/// Prefix carried by every service name.
pub const SERVICE_PREFIX: &str = "ga:";

/// Converts a service name (`ga:visitorType`) to its symbolic form (`visitor_type`).
///
/// A missing `ga:` prefix is tolerated; the rest of the transformation is
/// applied unchanged. Malformed input yields a best-effort symbol and never
/// an error.
///
/// # Example
///
/// ```
/// use analytics_lib::model::to_symbolic;
///
/// assert_eq!(to_symbolic("ga:pageviewsPerVisit"), "pageviews_per_visit");
/// ```
pub fn to_symbolic(service_name: &str) -> String {
    let name = service_name
        .strip_prefix(SERVICE_PREFIX)
        .unwrap_or(service_name);

    let mut symbol = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(|p| !p.is_ascii_uppercase()) {
            symbol.push('_');
        }
        symbol.push(c.to_ascii_lowercase());
        previous = Some(c);
    }

    symbol
}

/// Converts a symbolic name (`visitor_type`) to its service form (`ga:visitorType`).
///
/// # Example
///
/// ```
/// use analytics_lib::model::to_service;
///
/// assert_eq!(to_service("visitor_type"), "ga:visitorType");
/// assert_eq!(to_service("visits"), "ga:visits");
/// ```
pub fn to_service(symbol: &str) -> String {
    let camel: String = symbol.split('_').map(capitalize).collect();

    let mut chars = camel.chars();
    let mut name = String::with_capacity(SERVICE_PREFIX.len() + camel.len());
    name.push_str(SERVICE_PREFIX);
    if let Some(first) = chars.next() {
        name.extend(first.to_lowercase());
        name.push_str(chars.as_str());
    }
    name
}

/// Upper-cases the first character of a segment and lower-cases the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
