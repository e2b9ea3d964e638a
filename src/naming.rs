//! Image names derived from the project directory.
//!
//! A directory maps to `<prefix>/<kebab-case basename>/<path hash>`. The hash
//! keeps two projects with the same folder name in different places apart.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Number of hex characters of the path digest kept in the image name.
pub const HASH_LEN: usize = 10;

/// Fully qualified image reference for one project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName(String);

impl ImageName {
    /// Derive the image name for `dir`, which must already be absolute.
    pub fn derive(prefix: &str, dir: &Path) -> Result<Self> {
        let unnamed = || Error::UnnamedDirectory(dir.to_path_buf());
        let base = dir.file_name().ok_or_else(unnamed)?.to_string_lossy();
        let segment = kebab_case(&base);
        if segment.is_empty() {
            return Err(unnamed());
        }
        let hash = dir_hash(dir);
        tracing::debug!(dir = %dir.display(), %segment, %hash, "derived image name");
        Ok(Self(format!("{prefix}/{segment}/{hash}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert a `Snake_Case` or `CamelCase` directory name to kebab-case.
///
/// Names containing an underscore are split on underscores only. Anything else
/// is split before each ASCII uppercase letter, and adjacent single-letter
/// words are glued so acronyms survive (`BestAPI` -> `best-api`). Anything
/// outside `[a-z0-9]` becomes a single hyphen, and edge hyphens are dropped,
/// so the result is a valid image path component.
pub fn kebab_case(name: &str) -> String {
    let joined = if name.contains('_') {
        name.split('_')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    } else {
        join_camel_words(&camel_words(name))
    };
    let lowered: String = joined
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect();
    collapse_hyphens(&lowered).trim_matches('-').to_string()
}

/// Truncated hex SHA-256 of the absolute directory path, over its raw bytes.
pub fn dir_hash(dir: &Path) -> String {
    let digest = Sha256::digest(dir.as_os_str().as_encoded_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(HASH_LEN);
    hex
}

/// Split before every ASCII uppercase letter. A lowercase prefix is kept as
/// its own word.
fn camel_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, c) in name.char_indices() {
        if c.is_ascii_uppercase() && i > start {
            words.push(&name[start..i]);
            start = i;
        }
    }
    if start < name.len() {
        words.push(&name[start..]);
    }
    words
}

fn join_camel_words(words: &[&str]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 && (is_long(word) || is_long(words[i - 1])) {
            out.push('-');
        }
        out.push_str(word);
    }
    out
}

fn is_long(word: &str) -> bool {
    word.chars().nth(1).is_some()
}

fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_examples() {
        assert_eq!(kebab_case("FolderName"), "folder-name");
        assert_eq!(kebab_case("BestAPI"), "best-api");
        assert_eq!(kebab_case("MLProject"), "ml-project");
    }

    #[test]
    fn single_uppercase_letter() {
        assert_eq!(kebab_case("A"), "a");
    }

    #[test]
    fn all_lowercase_is_one_word() {
        assert_eq!(kebab_case("project"), "project");
    }

    #[test]
    fn lowercase_prefix_becomes_leading_word() {
        assert_eq!(kebab_case("myProject"), "my-project");
        assert_eq!(kebab_case("myAPI"), "my-api");
    }

    #[test]
    fn digits_stay_attached() {
        assert_eq!(kebab_case("Project2Go"), "project2-go");
    }

    #[test]
    fn snake_case_uses_underscores_only() {
        assert_eq!(kebab_case("My_Project"), "my-project");
        // Uppercase runs are not split when an underscore is present.
        assert_eq!(kebab_case("Best_APIClient"), "best-apiclient");
    }

    #[test]
    fn stray_underscores_are_dropped() {
        assert_eq!(kebab_case("_my_project"), "my-project");
        assert_eq!(kebab_case("my_project_"), "my-project");
        assert_eq!(kebab_case("my__project"), "my-project");
        assert_eq!(kebab_case("___"), "");
    }

    #[test]
    fn existing_hyphens_are_collapsed() {
        assert_eq!(kebab_case("my-Project"), "my-project");
        assert_eq!(kebab_case("a--b"), "a-b");
    }

    #[test]
    fn separators_never_reach_the_edges() {
        assert_eq!(kebab_case("-Foo"), "foo");
        assert_eq!(kebab_case("my_project-"), "my-project");
        assert_eq!(kebab_case("My Project"), "my-project");
        assert_eq!(kebab_case("foo.Bar"), "foo-bar");
        assert_eq!(kebab_case("v1.2"), "v1-2");
        assert_eq!(kebab_case("..."), "");
    }

    #[cfg(unix)]
    #[test]
    fn hash_distinguishes_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let a = Path::new(OsStr::from_bytes(b"/work/Proj\xff"));
        let b = Path::new(OsStr::from_bytes(b"/work/Proj\xfe"));
        assert_ne!(dir_hash(a), dir_hash(b));
    }

    #[test]
    fn hash_is_stable_and_truncated() {
        let a = dir_hash(Path::new("/home/me/FolderName"));
        let b = dir_hash(Path::new("/home/me/FolderName"));
        assert_eq!(a, b);
        assert_eq!(a.len(), HASH_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn derive_formats_prefix_segment_hash() {
        let dir = Path::new("/work/BestAPI");
        let name = ImageName::derive("acme", dir).unwrap();
        assert_eq!(name.as_str(), format!("acme/best-api/{}", dir_hash(dir)));
        assert_eq!(name.to_string(), name.as_str());
    }

    #[test]
    fn same_basename_different_location() {
        let a = ImageName::derive("acme", Path::new("/a/FolderName")).unwrap();
        let b = ImageName::derive("acme", Path::new("/b/FolderName")).unwrap();
        assert_ne!(a, b);
        let segment = |n: &ImageName| n.as_str().split('/').nth(1).unwrap().to_string();
        assert_eq!(segment(&a), segment(&b));
    }

    #[test]
    fn root_has_no_name() {
        let err = ImageName::derive("acme", Path::new("/")).unwrap_err();
        assert!(matches!(err, Error::UnnamedDirectory(_)));
    }

    #[test]
    fn underscore_only_basename_has_no_name() {
        let err = ImageName::derive("acme", Path::new("/tmp/___")).unwrap_err();
        assert!(matches!(err, Error::UnnamedDirectory(_)));
    }
}
