/// Checks a string against the GraphQL
/// [`Name`](https://spec.graphql.org/October2021/#Name) grammar.
///
/// Reserved words (e.g. `on`, `query`) are valid names and are not
/// rejected here; avoiding them where the grammar disallows them is the
/// caller's responsibility.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}
