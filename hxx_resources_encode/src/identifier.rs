/// Name of the constant declared by an emitted literal
pub type Identifier = smartstring::SmartString<smartstring::LazyCompact>;

/// Derive the constant name for a resource from its file name.
///
/// Every `.` becomes `_`, everything else is kept as is.
/// The result is not checked for validity: `1.png` yields `1_png`, which no compiler will accept.
pub fn derive_identifier(file_name: &str) -> Identifier {
    file_name.chars().map(|c| if c == '.' { '_' } else { c }).collect()
}

/// Identifiers that more than one resource maps to, in ascending order.
pub fn colliding_identifiers<S: AsRef<str>, I: Iterator<Item = S>>(file_names: I) -> std::vec::Vec<Identifier> {
    let mut seen = std::collections::HashSet::new();
    let mut collisions = std::collections::BTreeSet::new();
    for name in file_names {
        let identifier = derive_identifier(name.as_ref());
        if !seen.insert(identifier.clone()) {
            collisions.insert(identifier);
        }
    }
    collisions.into_iter().collect()
}
