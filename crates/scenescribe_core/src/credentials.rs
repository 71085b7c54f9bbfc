//! Backend credentials and credential-set parsing.

use std::fmt;

/// A single backend API key.
///
/// The wrapped secret is never printed: both `Debug` and `Display` show only
/// a masked suffix. Use [`Credential::expose`] at the point where the key is
/// actually sent to the backend.
///
/// # Examples
///
/// ```
/// use scenescribe_core::Credential;
///
/// let key = Credential::new("AIzaSy-example-key-1234");
/// assert_eq!(key.masked(), "...1234");
/// assert_eq!(format!("{}", key), "...1234");
/// assert_eq!(key.expose(), "AIzaSy-example-key-1234");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw API key.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for constructing the backend request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A masked suffix of the secret, safe for log output.
    ///
    /// Shows at most the last four characters. Keys shorter than four
    /// characters are masked entirely.
    pub fn masked(&self) -> String {
        let len = self.0.chars().count();
        if len < 4 {
            return "...".to_string();
        }
        let suffix: String = self.0.chars().skip(len - 4).collect();
        format!("...{suffix}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

/// An ordered set of backend API keys, tried in order by the rotation
/// executor.
///
/// Parsed from a single user-supplied string by splitting on whitespace and
/// discarding blanks. Order is preserved; duplicates are kept, since the
/// caller controls the list and repeated keys are harmless.
///
/// # Examples
///
/// ```
/// use scenescribe_core::CredentialSet;
///
/// let keys = CredentialSet::parse("key-one \n key-two\tkey-three");
/// assert_eq!(keys.len(), 3);
///
/// let blank = CredentialSet::parse("   \n\t ");
/// assert!(blank.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet(Vec<Credential>);

impl CredentialSet {
    /// Parse a whitespace-separated key list.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split_whitespace().map(Credential::new).collect())
    }

    /// Number of credentials in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no usable credential was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the credentials in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.0.iter()
    }
}

impl From<&str> for CredentialSet {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl FromIterator<Credential> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = Credential>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
