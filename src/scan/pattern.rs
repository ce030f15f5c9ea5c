// Thu Feb 12 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

/// Broad catch-all for struct-like constructs. Candidates matched here are
/// re-tested against the four specific shapes to recover a canonical name.
pub static BROAD_STRUCT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(typedef\s+struct\s*(?:\w+\s*)?\{[^}]*\}\s*\w+;)|(struct\s+\w+\s*\{[^}]*\})|(#pragma\s+pack\s*\(\d+\)\s*struct\s+\w+\s*\{[^}]*\})|(struct\s+\w+\s*;)",
    )
    .expect("broad struct pattern")
});

/// Typedef struct: `typedef struct [Tag] { ... } Alias;`
pub static TYPEDEF_STRUCT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^typedef\s+struct\s*(?:(\w+)\s*)?\{[^}]*\}\s*(\w+);$")
        .expect("typedef struct pattern")
});

/// Tagged definition: `struct Name { ... }`
pub static TAGGED_STRUCT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^struct\s+(\w+)\s*\{[^}]*\}$").expect("tagged struct pattern"));

/// Packed variant: `#pragma pack(n) struct Name { ... }`
pub static PACKED_STRUCT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^#pragma\s+pack\s*\(\d+\)\s*struct\s+(\w+)\s*\{[^}]*\}$")
        .expect("packed struct pattern")
});

/// Forward declaration: `struct Name;`
pub static FORWARD_STRUCT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^struct\s+(\w+)\s*;$").expect("forward struct pattern"));

/// Value-level reference: `[struct] Name (*|space) ident [\[size\]] [;,]`
/// or `[struct] Name ident = {`.
pub static STRUCT_USAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:struct\s+)?(\w+)\s*(?:\*|\s+)\w+\s*(?:\[\d*\])?\s*[;,]|(?:struct\s+)?(\w+)\s+\w+\s*=\s*\{",
    )
    .expect("struct usage pattern")
});

/// Field line inside a struct body: `[struct] Type [*] name [ [repetition] ] ;`
pub static STRUCT_FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:(struct)\s+)?(\w+)\s*(\*?)\s*(\w+)\s*(?:\[(\d*)\])?\s*;")
        .expect("struct field pattern")
});

/// Line (`//`) and block (`/* */`) comments, non-greedy across fake-nested
/// block comments.
pub static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(//.*?$)|(/\*[^*]*\*+(?:[^/*][^*]*\*+)*/)").expect("comment pattern")
});

/// The four declaration shapes, in disambiguation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationShape {
    Typedef,
    Tagged,
    Packed,
    ForwardDecl,
}

impl DeclarationShape {
    pub const PRIORITY: [DeclarationShape; 4] = [
        DeclarationShape::Typedef,
        DeclarationShape::Tagged,
        DeclarationShape::Packed,
        DeclarationShape::ForwardDecl,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            DeclarationShape::Typedef => &TYPEDEF_STRUCT_PATTERN,
            DeclarationShape::Tagged => &TAGGED_STRUCT_PATTERN,
            DeclarationShape::Packed => &PACKED_STRUCT_PATTERN,
            DeclarationShape::ForwardDecl => &FORWARD_STRUCT_PATTERN,
        }
    }

    /// Full-match this shape against a candidate and pull out the canonical
    /// name. The typedef shape prefers the trailing alias over the tag.
    pub fn canonical_name(self, candidate: &str) -> Option<String> {
        let caps = self.pattern().captures(candidate)?;
        let name = match self {
            DeclarationShape::Typedef => caps.get(2).or_else(|| caps.get(1)),
            _ => caps.get(1),
        };
        name.map(|m| m.as_str().to_string())
    }
}

/// Test a candidate against the four shapes in priority order. Returns the
/// first shape that full-matches along with its canonical name.
pub fn disambiguate(candidate: &str) -> Option<(DeclarationShape, String)> {
    for shape in DeclarationShape::PRIORITY {
        if let Some(name) = shape.canonical_name(candidate) {
            return Some((shape, name));
        }
    }
    None
}
