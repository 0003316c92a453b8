//! Current route of the panel: a path plus an ordered query string.
//!
//! List filters live here instead of in view state so that they survive
//! navigation and can be shared as a plain string.

use std::fmt;
use std::str::FromStr;

use url::{form_urlencoded, Url};

const ORIGIN: &str = "http://panel.local";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    pairs: Vec<(String, String)>,
}

impl Location {
    /// Parses `"/orders?page=2"`. Absolute URLs keep only their path and query.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(ORIGIN)?.join(input.trim())?;
        Ok(Self {
            path: parsed.path().to_string(),
            pairs: parsed.query_pairs().into_owned().collect(),
        })
    }

    pub fn root() -> Self {
        Self { path: "/".to_string(), pairs: Vec::new() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    /// Replaces the first `key` in place and drops any duplicates, or appends it.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Form-encoded query string without the leading `?`.
    pub fn query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for Location {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query();
        if query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_and_absolute() {
        let loc = Location::parse("/orders?page=2").unwrap();
        assert_eq!(loc.path(), "/orders");
        assert_eq!(loc.get("page").as_deref(), Some("2"));

        let abs = Location::parse("https://example.com/sign-in?email=a%40b.com").unwrap();
        assert_eq!(abs.to_string(), "/sign-in?email=a%40b.com");
        assert_eq!(abs.get("email").as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_set_replaces_in_place_and_appends_new_keys() {
        let mut loc = Location::parse("/orders?page=3&status=pending&page=4").unwrap();
        loc.set("page", "1");
        loc.set("orderId", "5");
        assert_eq!(loc.query(), "page=1&status=pending&orderId=5");
    }

    #[test]
    fn test_delete_last_key_drops_question_mark() {
        let mut loc = Location::parse("/orders?status=pending").unwrap();
        loc.delete("status");
        assert_eq!(loc.to_string(), "/orders");
    }

    #[test]
    fn test_root_and_empty_query() {
        assert_eq!(Location::root(), Location::parse("/").unwrap());
        assert_eq!(Location::parse("/orders?").unwrap().to_string(), "/orders");
    }

    #[test]
    fn test_values_are_form_encoded() {
        let mut loc = Location::parse("/orders").unwrap();
        loc.set("customerName", "Ana Maria");
        assert_eq!(loc.query(), "customerName=Ana+Maria");
        assert_eq!(loc.get("customerName").as_deref(), Some("Ana Maria"));
    }
}
