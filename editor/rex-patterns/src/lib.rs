//! rex-patterns - Catalog of regular expression tokens and reference patterns
//!
//! Provides the built-in table of regex constructs (`\d`, `(?:pattern)`, ...)
//! and named reference patterns (email, URL, IP address, ...) that the
//! completion plugin offers while a regular expression is being authored.
//!
//! The catalog is fixed at construction time: entries are enumerated in
//! insertion order and never mutated.

use serde::{Deserialize, Serialize};

/// Kind of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// A regex syntax construct such as `\d` or `(?=pattern)`
    Construct,
    /// A named pattern whose description carries a ready-made regex
    Reference,
}

/// One token+description pair in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// The regex construct, or the name of a reference pattern
    pub token: String,
    /// Explanatory text shown next to the suggestion
    pub description: String,
    pub kind: PatternKind,
}

impl PatternEntry {
    pub fn new(token: &str, description: &str, kind: PatternKind) -> Self {
        Self {
            token: token.to_string(),
            description: description.to_string(),
            kind,
        }
    }
}

/// Ordered, immutable pattern catalog
pub struct PatternCatalog {
    entries: Vec<PatternEntry>,
}

impl PatternCatalog {
    /// Build the built-in catalog. Cannot fail.
    pub fn builtin() -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
        };
        catalog.load_constructs();
        catalog.load_references();
        catalog
    }

    /// Build a catalog from explicit entries (used by tests and tools)
    pub fn from_entries(entries: Vec<PatternEntry>) -> Self {
        Self { entries }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct first characters over all tokens, sorted.
    ///
    /// These are the characters the editor is asked to trigger
    /// completion on.
    pub fn trigger_characters(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .entries
            .iter()
            .filter_map(|e| e.token.chars().next())
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }

    fn construct(&mut self, token: &str, description: &str) {
        self.entries
            .push(PatternEntry::new(token, description, PatternKind::Construct));
    }

    fn reference(&mut self, name: &str, pattern: &str) {
        self.entries
            .push(PatternEntry::new(name, pattern, PatternKind::Reference));
    }

    fn load_constructs(&mut self) {
        self.construct(
            "\\",
            "Marks the next character as a special character, a literal, a \
             back-reference, or an octal escape. For example, \"n\" matches the \
             character \"n\" while \"\\n\" matches a newline; \"\\\\\" matches \
             \"\\\" and \"\\(\" matches \"(\".",
        );
        self.construct(
            "^",
            "Matches the start of the input string. If the Multiline flag is \
             set, also matches the position after a \"\\n\" or \"\\r\".",
        );
        self.construct(
            "$",
            "Matches the end of the input string. If the Multiline flag is \
             set, also matches the position before a \"\\n\" or \"\\r\".",
        );
        self.construct(
            "*",
            "Matches the preceding subexpression zero or more times. \"zo*\" \
             matches \"z\" as well as \"zoo\". Equivalent to {0,}.",
        );
        self.construct(
            "+",
            "Matches the preceding subexpression one or more times. \"zo+\" \
             matches \"zo\" and \"zoo\" but not \"z\". Equivalent to {1,}.",
        );
        self.construct(
            "?",
            "Matches the preceding subexpression zero or one time. \
             \"do(es)?\" matches the \"do\" in \"do\" or \"does\". Equivalent \
             to {0,1}.",
        );
        self.construct(
            "{n}",
            "n is a non-negative integer; matches exactly n times. \"o{2}\" \
             does not match the \"o\" in \"Bob\" but matches both o's in \
             \"food\".",
        );
        self.construct(
            "{n,}",
            "n is a non-negative integer; matches at least n times. \"o{2,}\" \
             does not match the \"o\" in \"Bob\" but matches every o in \
             \"foooood\". \"o{1,}\" is equivalent to \"o+\", and \"o{0,}\" to \
             \"o*\".",
        );
        self.construct(
            "{n,m}",
            "n and m are non-negative integers with n <= m; matches at least \
             n and at most m times. \"o{1,3}\" matches the first three o's in \
             \"fooooood\", and \"o{0,1}\" is equivalent to \"o?\". No space is \
             allowed between the comma and the numbers.",
        );
        self.construct(
            "?",
            "When this character follows another quantifier (*, +, ?, {n}, \
             {n,}, {n,m}), the match is non-greedy: it consumes as little of \
             the searched string as possible, where the default greedy mode \
             consumes as much as possible. Against \"oooo\", \"o+?\" matches a \
             single \"o\" while \"o+\" matches all of them.",
        );
        self.construct(
            ".",
            "Matches any single character except \"\\n\". To match any \
             character including \"\\n\", use a pattern like \"(.|\\n)\".",
        );
        self.construct(
            "(pattern)",
            "Matches pattern and captures the match. The captured text is \
             available from the resulting match collection: the SubMatches \
             collection in VBScript, the $0-$9 properties in JScript. To match \
             literal parentheses, use \"\\(\" or \"\\)\".",
        );
        self.construct(
            "(?:pattern)",
            "Matches pattern without capturing the match; nothing is stored \
             for later use. Useful when combining the parts of a pattern with \
             the alternation character \"(|)\": \"industr(?:y|ies)\" is a more \
             compact expression than \"industry|industries\".",
        );
        self.construct(
            "(?=pattern)",
            "Positive lookahead: matches the search string at any position \
             where a string matching pattern begins. Non-capturing, and the \
             lookahead consumes no characters: after a match, the next search \
             starts immediately after the last match, not after the characters \
             the lookahead inspected. \"Windows(?=95|98|NT|2000)\" matches the \
             \"Windows\" in \"Windows2000\" but not in \"Windows3.1\".",
        );
        self.construct(
            "(?!pattern)",
            "Negative lookahead: matches the search string at any position \
             where a string matching pattern does not begin. Non-capturing, \
             and consumes no characters. \"Windows(?!95|98|NT|2000)\" matches \
             the \"Windows\" in \"Windows3.1\" but not in \"Windows2000\".",
        );
        self.construct(
            "(?<=pattern)",
            "Positive lookbehind: like positive lookahead, but in the \
             opposite direction. \"(?<=95|98|NT|2000)Windows\" matches the \
             \"Windows\" in \"2000Windows\" but not in \"3.1Windows\".",
        );
        self.construct(
            "(?<!pattern)",
            "Negative lookbehind: like negative lookahead, but in the \
             opposite direction. \"(?<!95|98|NT|2000)Windows\" matches the \
             \"Windows\" in \"3.1Windows\" but not in \"2000Windows\".",
        );
        self.construct(
            "x|y",
            "Matches x or y. \"z|food\" matches \"z\" or \"food\"; \
             \"(z|f)ood\" matches \"zood\" or \"food\".",
        );
        self.construct(
            "[xyz]",
            "Character set: matches any one of the enclosed characters. \
             \"[abc]\" matches the \"a\" in \"plain\".",
        );
        self.construct(
            "[^xyz]",
            "Negated character set: matches any character not enclosed. \
             \"[^abc]\" matches the \"p\" in \"plain\".",
        );
        self.construct(
            "[a-z]",
            "Character range: matches any character in the given range. \
             \"[a-z]\" matches any lowercase letter from \"a\" through \"z\".",
        );
        self.construct(
            "[^a-z]",
            "Negated character range: matches any character outside the \
             given range. \"[^a-z]\" matches any character not between \"a\" \
             and \"z\".",
        );
        self.construct(
            "\\b",
            "Matches a word boundary, the position between a word and a \
             space. \"er\\b\" matches the \"er\" in \"never\" but not in \
             \"verb\".",
        );
        self.construct(
            "\\B",
            "Matches a non-word-boundary. \"er\\B\" matches the \"er\" in \
             \"verb\" but not in \"never\".",
        );
        self.construct(
            "\\cx",
            "Matches the control character named by x. \"\\cM\" matches a \
             Control-M or carriage return. x must be one of A-Z or a-z; \
             otherwise c is treated as a literal \"c\".",
        );
        self.construct("\\d", "Matches a digit character. Equivalent to [0-9].");
        self.construct(
            "\\D",
            "Matches a non-digit character. Equivalent to [^0-9].",
        );
        self.construct(
            "\\f",
            "Matches a form feed. Equivalent to \\x0c and \\cL.",
        );
        self.construct("\\n", "Matches a newline. Equivalent to \\x0a and \\cJ.");
        self.construct(
            "\\r",
            "Matches a carriage return. Equivalent to \\x0d and \\cM.",
        );
        self.construct(
            "\\s",
            "Matches any whitespace character, including space, tab, and \
             form feed. Equivalent to [ \\f\\n\\r\\t\\v].",
        );
        self.construct(
            "\\S",
            "Matches any non-whitespace character. Equivalent to \
             [^ \\f\\n\\r\\t\\v].",
        );
        self.construct("\\t", "Matches a tab. Equivalent to \\x09 and \\cI.");
        self.construct(
            "\\v",
            "Matches a vertical tab. Equivalent to \\x0b and \\cK.",
        );
        self.construct(
            "\\w",
            "Matches any word character, including the underscore. \
             Equivalent to \"[A-Za-z0-9_]\".",
        );
        self.construct(
            "\\W",
            "Matches any non-word character. Equivalent to \
             \"[^A-Za-z0-9_]\".",
        );
        self.construct(
            "\\xn",
            "Matches n, where n is a hexadecimal escape value of exactly two \
             digits. \"\\x41\" matches \"A\", while \"\\x041\" is equivalent \
             to \"\\x04\" followed by \"1\". ASCII codes can be used in \
             regular expressions this way.",
        );
        self.construct(
            "\\num",
            "Matches num, where num is a positive integer: a reference back \
             to captured matches. \"(.)\\1\" matches two consecutive identical \
             characters.",
        );
        self.construct(
            "\\nm",
            "Identifies an octal escape value or a back-reference. If at \
             least nm capturing subexpressions precede \\nm, nm is a \
             back-reference. Otherwise, if at least n precede it, n is a \
             back-reference followed by the literal m. Failing both, \\nm \
             matches the octal escape value nm when n and m are both octal \
             digits (0-7).",
        );
        self.construct(
            "\\nml",
            "Matches the octal escape value nml when n is an octal digit \
             (0-3) and m and l are both octal digits (0-7).",
        );
        self.construct(
            "\\un",
            "Matches n, where n is a Unicode character expressed as four \
             hexadecimal digits. \"\\u00A9\" matches the copyright symbol \
             (\u{a9}).",
        );
    }

    fn load_references(&mut self) {
        self.reference("username", "/^[a-z0-9_-]{3,16}$/");
        self.reference("password", "/^[a-z0-9_-]{6,18}$/");
        self.reference("hex color", "/^#?([a-f0-9]{6}|[a-f0-9]{3})$/");
        self.reference(
            "email",
            "/^([a-z0-9_\\.-]+)@([\\da-z\\.-]+)\\.([a-z\\.]{2,6})$/\n\
             /^[a-z\\d]+(\\.[a-z\\d]+)*@([\\da-z](-[\\da-z])?)+(\\.{1,2}[a-z]+)+$/",
        );
        self.reference(
            "URL",
            "/^(https?:\\/\\/)?([\\da-z\\.-]+)\\.([a-z\\.]{2,6})([\\/\\w \\.-]*)*\\/?$/",
        );
        self.reference(
            "IP address",
            "/((2[0-4]\\d|25[0-5]|[01]?\\d\\d?)\\.){3}(2[0-4]\\d|25[0-5]|[01]?\\d\\d?)/\n\
             /^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\\.){3}\
             (?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$/",
        );
        self.reference(
            "HTML tag",
            "/^<([a-z]+)([^<]+)*(?:>(.*)<\\/\\1>|\\s+\\/>)$/",
        );
        self.reference("line comment", "(?<!http:|\\S)//.*$");
        self.reference("CJK characters", "/^[\\u2E80-\\u9FFF]+$/");
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_not_empty() {
        let catalog = PatternCatalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.entries().len());
    }

    #[test]
    fn test_no_empty_tokens() {
        let catalog = PatternCatalog::builtin();
        assert!(catalog.entries().iter().all(|e| !e.token.is_empty()));
    }

    #[test]
    fn test_no_duplicate_tokens() {
        // The upstream table carried two identical "\n" rows (newline escape
        // and octal-escape/back-reference); only the newline escape survives.
        // "?" appears twice on purpose: optional and lazy are distinct
        // constructs with distinct descriptions.
        let catalog = PatternCatalog::builtin();
        let mut seen = HashSet::new();
        for entry in catalog.entries() {
            assert!(
                seen.insert((entry.token.as_str(), entry.description.as_str())),
                "duplicate catalog row: {}",
                entry.token
            );
        }
        let newlines = catalog
            .entries()
            .iter()
            .filter(|e| e.token == "\\n")
            .count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn test_contains_digit_escape() {
        let catalog = PatternCatalog::builtin();
        let entry = catalog
            .entries()
            .iter()
            .find(|e| e.token == "\\d")
            .expect("\\d entry");
        assert_eq!(entry.kind, PatternKind::Construct);
        assert!(entry.description.contains("[0-9]"));
    }

    #[test]
    fn test_reference_patterns_present() {
        let catalog = PatternCatalog::builtin();
        let references: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.kind == PatternKind::Reference)
            .collect();
        assert_eq!(references.len(), 9);
        assert!(references.iter().any(|e| e.token == "email"));
        assert!(references.iter().any(|e| e.token == "IP address"));
    }

    #[test]
    fn test_references_follow_constructs() {
        // Insertion order is the display order: syntax tokens first,
        // reference patterns after.
        let catalog = PatternCatalog::builtin();
        let first_reference = catalog
            .entries()
            .iter()
            .position(|e| e.kind == PatternKind::Reference)
            .unwrap();
        assert!(catalog.entries()[first_reference..]
            .iter()
            .all(|e| e.kind == PatternKind::Reference));
    }

    #[test]
    fn test_trigger_characters() {
        let catalog = PatternCatalog::builtin();
        let chars = catalog.trigger_characters();

        assert!(chars.contains(&'\\'));
        assert!(chars.contains(&'('));
        assert!(chars.contains(&'['));
        assert!(chars.contains(&'{'));

        // Sorted and deduplicated
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(chars, sorted);

        // Every token's first character is covered
        for entry in catalog.entries() {
            let first = entry.token.chars().next().unwrap();
            assert!(chars.contains(&first), "missing trigger for {}", entry.token);
        }
    }

    #[test]
    fn test_from_entries() {
        let catalog = PatternCatalog::from_entries(vec![PatternEntry::new(
            "\\d",
            "digit",
            PatternKind::Construct,
        )]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.trigger_characters(), vec!['\\']);
    }
}
