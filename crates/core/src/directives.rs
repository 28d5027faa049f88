//! Directive storage shared by every header builder.
//!
//! Multi-valued headers accumulate fragments in a [`DirectiveList`] and join
//! them with their family's [`Separator`]. Single-valued headers hold one
//! overwritable [`DirectiveSlot`] instead.

use std::fmt::Display;

/// Join separator between fragments of one header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `", "` (Cache-control, Referrer-Policy, Expect-CT)
    Comma,
    /// `"; "` (Content-Security-Policy, Feature-Policy, Strict-Transport-Security)
    Semicolon,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::Semicolon => "; ",
        }
    }
}

/// Ordered, append-only list of directive fragments.
///
/// Insertion order is output order. Fragments are neither validated nor
/// de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveList {
    fragments: Vec<String>,
}

impl DirectiveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment verbatim.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Append `keyword=value`.
    pub fn push_assignment(&mut self, keyword: &str, value: impl Display) {
        self.fragments.push(format!("{keyword}={value}"));
    }

    /// Append `keyword arg1 arg2 ...`.
    ///
    /// An empty argument list still produces `"keyword "`.
    pub fn push_list<I, S>(&mut self, keyword: &str, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
        self.fragments.push(format!("{keyword} {}", args.join(" ")));
    }

    pub fn join(&self, separator: Separator) -> String {
        self.fragments.join(separator.as_str())
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }
}

/// Single overwritable directive for headers that carry one token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSlot {
    value: String,
}

impl DirectiveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current directive.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Current directive; empty when never set.
    pub fn get(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_joins_to_empty_string() {
        let list = DirectiveList::new();
        assert_eq!(list.join(Separator::Comma), "");
        assert_eq!(list.join(Separator::Semicolon), "");
        assert!(list.is_empty());
    }

    #[test]
    fn test_join_preserves_order_and_duplicates() {
        let mut list = DirectiveList::new();
        list.push("no-store");
        list.push_assignment("max-age", 10);
        list.push("no-store");
        assert_eq!(list.len(), 3);
        assert_eq!(list.join(Separator::Comma), "no-store, max-age=10, no-store");
        assert_eq!(list.join(Separator::Semicolon), "no-store; max-age=10; no-store");
    }

    #[test]
    fn test_push_list_formats_arguments() {
        let mut list = DirectiveList::new();
        list.push_list("connect-src", ["'self'", "api.example.com"]);
        list.push_list("sandbox", Vec::<String>::new());
        let fragments: Vec<&str> = list.iter().collect();
        assert_eq!(fragments, vec!["connect-src 'self' api.example.com", "sandbox "]);
    }

    #[test]
    fn test_slot_overwrites() {
        let mut slot = DirectiveSlot::new();
        assert_eq!(slot.get(), "");
        slot.set("SAMEORIGIN");
        slot.set("DENY");
        assert_eq!(slot.get(), "DENY");
    }
}
