//! Output format of collection results.
//!
//! Listings render as `{[a, b, c]}`: items in order, joined by `", "`, wrapped
//! in `{[` and `]}`. An empty listing is `{[]}`. Pairs render as `[a, b]`.

use core::fmt::Display;

/// Render an ordered sequence as a listing.
pub fn format_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{[{joined}]}}")
}

/// Render a two-element record, e.g. `[name, address]`.
pub fn format_pair(first: impl Display, second: impl Display) -> String {
    format!("[{first}, {second}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing() {
        assert_eq!(format_list(Vec::<String>::new()), "{[]}");
    }

    #[test]
    fn listing_preserves_order() {
        assert_eq!(format_list(["Pizza", "Suco", "Pizza"]), "{[Pizza, Suco, Pizza]}");
    }

    #[test]
    fn listing_of_pairs() {
        let pairs = [("Casa", "Rua 1"), ("Cantina", "Rua 2")]
            .into_iter()
            .map(|(n, a)| format_pair(n, a));
        assert_eq!(format_list(pairs), "{[[Casa, Rua 1], [Cantina, Rua 2]]}");
    }
}
