//! Matchers: predicates deciding whether a subject obeys a naming rule.
//!
//! Two sources exist. Named conventions live in a [`MatcherRegistry`] that
//! host applications can extend; the suffix matcher is compiled from
//! `extensionName` when extension mode is active.

use crate::error::ConfigError;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// A naming predicate over a subject string.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap());

static SCREAMING_SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+(_[A-Z0-9]+)*$").unwrap());

static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^A-Z]+$").unwrap());

/// Format used in directories mode when none is configured.
pub const DEFAULT_DIRECTORIES_FORMAT: &str = "kebab-case";

/// Name -> predicate mapping, open for extension.
#[derive(Clone)]
pub struct MatcherRegistry {
    entries: BTreeMap<String, Predicate>,
}

impl MatcherRegistry {
    /// An empty registry with no conventions.
    pub fn empty() -> Self {
        MatcherRegistry {
            entries: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in conventions and their aliases.
    pub fn with_builtins() -> Self {
        let mut reg = MatcherRegistry::empty();
        let builtins: [(&[&str], &'static LazyLock<Regex>); 6] = [
            (&["kebab-case", "kebabCase"], &KEBAB_CASE),
            (&["camelCase"], &CAMEL_CASE),
            (&["PascalCase", "pascalCase"], &PASCAL_CASE),
            (&["snake_case", "snakeCase"], &SNAKE_CASE),
            (&["SCREAMING_SNAKE_CASE", "constantCase"], &SCREAMING_SNAKE_CASE),
            (&["lowercase", "lowerCase"], &LOWERCASE),
        ];
        for (names, re) in builtins {
            let pred = convention(re);
            for name in names {
                reg.entries.insert(name.to_string(), pred.clone());
            }
        }
        reg
    }

    /// Add or replace a named predicate.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(predicate));
        self
    }

    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub(crate) fn known(&self) -> String {
        self.names().join(", ")
    }

    /// Look up `name`, failing with the list of known formats.
    pub fn lookup(&self, name: &str) -> Result<Matcher, ConfigError> {
        match self.get(name) {
            Some(predicate) => Ok(Matcher::Format {
                name: name.to_string(),
                predicate,
            }),
            None => Err(ConfigError::UnknownFormat {
                name: name.to_string(),
                known: self.known(),
            }),
        }
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        MatcherRegistry::with_builtins()
    }
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

/// The predicate bound to one lint run.
#[derive(Clone)]
pub enum Matcher {
    /// A registered naming convention.
    Format { name: String, predicate: Predicate },
    /// Subjects ending with the literal `extension_name`.
    Suffix { extension_name: String, regex: Regex },
}

impl Matcher {
    /// Compile the suffix matcher for `extension_name`.
    pub fn suffix(extension_name: &str) -> Result<Self, ConfigError> {
        let pattern = format!("({})$", regex::escape(extension_name));
        let regex = Regex::new(&pattern).map_err(|source| ConfigError::InvalidExtensionName {
            name: extension_name.to_string(),
            source,
        })?;
        Ok(Matcher::Suffix {
            extension_name: extension_name.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, subject: &str) -> bool {
        match self {
            Matcher::Format { predicate, .. } => predicate(subject),
            Matcher::Suffix { regex, .. } => regex.is_match(subject),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Matcher::Format { name, .. } => name.clone(),
            Matcher::Suffix { extension_name, .. } => format!("*{}", extension_name),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Format { name, .. } => f.debug_struct("Format").field("name", name).finish(),
            Matcher::Suffix { extension_name, .. } => f
                .debug_struct("Suffix")
                .field("extension_name", extension_name)
                .finish(),
        }
    }
}

/// Wrap a convention regex so it applies to every segment of a subject.
fn convention(re: &'static LazyLock<Regex>) -> Predicate {
    Arc::new(move |subject: &str| {
        let mut seen = false;
        for seg in subject.split('/').filter(|s| !s.is_empty()) {
            seen = true;
            if !re.is_match(stem(seg)) {
                return false;
            }
        }
        seen
    })
}

/// Segment with leading dots and every extension removed: `.eslintrc.js` -> `eslintrc`.
fn stem(segment: &str) -> &str {
    let s = segment.trim_start_matches('.');
    match s.find('.') {
        Some(i) => &s[..i],
        None => s,
    }
}
