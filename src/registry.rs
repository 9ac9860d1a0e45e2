use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Header reported for a file whose leading bytes are all zero, e.g. an
/// empty Word document. Distinct from the empty string, which marks a type
/// with no reliable signature at all.
pub const EMPTY_HEADER: &str = "00000000";

// Signatures and types are many-to-many: 504B0304 covers zip as well as the
// OOXML Office formats, and several types list alternate headers. Entries
// are kept deliberately short to maximize recall (a camera screenshot opens
// with FFD8FFFE, which must still match the canonical FFD8FF for jpeg).
// An empty-string entry means the type has no reliable signature and cannot
// be verified. Reference: https://www.filesignatures.net/index.php
const TYPE_HEADERS: &[(&str, &[&str])] = &[
    ("txt", &[""]),
    ("jpg", &["FFD8FF"]),
    ("jpeg", &["FFD8FF"]),
    ("png", &["89504E470D0A1A0A"]),
    ("bmp", &["424D"]),
    ("gif", &["47494638"]),
    ("tif", &["492049", "49492A00", "4D4D002A", "4D4D002B"]),
    ("pic", &[""]),
    (
        "doc",
        &[
            "D0CF11E0A1B11AE1",
            "0D444F43",
            "CF11E0A1B11AE100",
            "DBA52D00",
            "ECA5C100",
        ],
    ),
    ("docx", &["504B0304", "504B030414000600"]),
    ("wps", &["0E574B53", "FF00020004040554", "D0CF11E0A1B11AE1"]),
    (
        "xls",
        &[
            "D0CF11E0A1B11AE1",
            "0908100000060500",
            "FDFFFFFF10",
            "FDFFFFFF1F",
            "FDFFFFFF22",
            "FDFFFFFF23",
            "FDFFFFFF28",
            "FDFFFFFF29",
        ],
    ),
    ("xlsx", &["504B0304", "504B030414000600"]),
    ("et", &[""]),
    (
        "ppt",
        &[
            "D0CF11E0A1B11AE1",
            "006E1EF0",
            "0F00E803",
            "A0461DF0",
            "FDFFFFFF0E000000",
            "FDFFFFFF1C000000",
            "FDFFFFFF43000000",
        ],
    ),
    ("pptx", &["504B0304", "504B030414000600"]),
    ("pps", &["D0CF11E0A1B11AE1"]),
    ("pot", &[""]),
    ("pdf", &["25504446"]),
    ("dwg", &["41433130"]),
    (
        "mp4",
        &["000000146674797069736F6D", "0000001866747970", "0000001C66747970"],
    ),
    ("avi", &["52494646"]),
    ("wav", &["52494646"]),
    ("mp3", &["494433", "FFFB"]),
    ("rmvb", &["2E524D46"]),
    ("rm", &["2E524D46"]),
    ("flv", &["464C56"]),
    ("wmv", &["3026B2758E66CF11"]),
    ("mkv", &["1A45DFA393428288"]),
    (
        "mov",
        &["6D6F6F76", "66726565", "6D646174", "77696465", "706E6F74", "736B6970"],
    ),
    ("mpeg", &[""]),
    (
        "zip",
        &[
            "504B0304",
            "504B4C495445",
            "504B537058",
            "504B0506",
            "504B0708",
            "57696E5A6970",
            "504B030414000100",
        ],
    ),
    (
        "mr",
        &[
            "504B0304",
            "504B4C495445",
            "504B537058",
            "504B0506",
            "504B0708",
            "57696E5A6970",
            "504B030414000100",
        ],
    ),
    ("rar", &["526172211A0700"]),
    ("7z", &["377ABCAF271C"]),
    ("gz", &["1F8B08"]),
];

/// Global registry instance, built once on first use and read-only after.
pub static REGISTRY: Lazy<SignatureRegistry> = Lazy::new(SignatureRegistry::new);

/// The bidirectional type/header registry derived from the authored table.
///
/// Both maps are constructed together and never mutated afterwards, so any
/// number of threads may consult the shared [`REGISTRY`] without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRegistry {
    /// File type -> registered header prefixes (may contain the empty string).
    type_headers: HashMap<&'static str, HashSet<&'static str>>,
    /// Header prefix -> file types, the inverse index of `type_headers`.
    header_types: HashMap<&'static str, HashSet<&'static str>>,
}

impl SignatureRegistry {
    pub fn new() -> Self {
        Self::from_table(TYPE_HEADERS)
    }

    fn from_table(table: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let type_headers: HashMap<&'static str, HashSet<&'static str>> = table
            .iter()
            .map(|&(file_type, headers)| (file_type, headers.iter().copied().collect()))
            .collect();
        let header_types = invert(&type_headers);

        Self {
            type_headers,
            header_types,
        }
    }

    /// Whether `file_type` is registered with an empty header, meaning it
    /// carries no reliable signature and consistency checks must pass it
    /// through unverified (plain text, for example).
    pub fn skip_type(&self, file_type: &str) -> bool {
        self.header_types
            .get("")
            .map_or(false, |types| types.contains(file_type))
    }

    /// Exact, case-sensitive membership test against the authored table.
    pub fn is_known_type(&self, file_type: &str) -> bool {
        self.type_headers.contains_key(file_type)
    }

    pub fn headers_for_type(&self, file_type: &str) -> Option<&HashSet<&'static str>> {
        self.type_headers.get(file_type)
    }

    pub fn types_for_exact_header(&self, header: &str) -> Option<&HashSet<&'static str>> {
        self.header_types.get(header)
    }

    /// All (header, types) entries of the inverse index, in no particular
    /// order. Used by the fuzzy prefix scan.
    pub fn header_entries(
        &self,
    ) -> impl Iterator<Item = (&'static str, &HashSet<&'static str>)> + '_ {
        self.header_types
            .iter()
            .map(|(&header, types)| (header, types))
    }

    /// All registered file types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.type_headers.keys().copied()
    }

    pub fn type_count(&self) -> usize {
        self.type_headers.len()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the header -> types index from the type -> headers map. Pure, so
/// the invariant that one map is the exact inverse of the other is testable.
fn invert(
    type_headers: &HashMap<&'static str, HashSet<&'static str>>,
) -> HashMap<&'static str, HashSet<&'static str>> {
    let mut header_types: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();

    for (&file_type, headers) in type_headers {
        for &header in headers {
            header_types.entry(header).or_default().insert(file_type);
        }
    }

    header_types
}
