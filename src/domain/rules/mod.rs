// Domain rules - Filename standardization policy

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::domain::model::ParsedName;
use crate::error::RemuxResult;

/// Input containers eligible for standardization (compared lowercase)
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

/// Used when no resolution tag is present
pub const DEFAULT_RESOLUTION: &str = "1080p";

/// Used when no source tag is present
pub const DEFAULT_SOURCE: &str = "WEB";

/// Title used when nothing usable precedes the year
pub const UNKNOWN_TITLE: &str = "Unknown";

/// 19xx, 20xx or 210x with a non-digit or string edge on both sides
const YEAR_PATTERN: &str = r"(?:^|\D)(19\d{2}|20\d{2}|210\d)(?:\D|$)";

/// Metadata field a vocabulary token feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    /// Leftmost match in the name wins
    Resolution,
    /// First matching entry in table order wins
    Source,
}

/// One entry of the filename vocabulary
#[derive(Debug, Clone, Copy)]
pub struct TokenDescriptor {
    pub field: TokenField,
    pub pattern: &'static str,
    /// Spelling written to the output; `None` keeps the matched text with
    /// `.` and `-` removed.
    pub canonical: Option<&'static str>,
}

const fn resolution(pattern: &'static str) -> TokenDescriptor {
    TokenDescriptor {
        field: TokenField::Resolution,
        pattern,
        canonical: Some(pattern),
    }
}

const fn source(pattern: &'static str) -> TokenDescriptor {
    TokenDescriptor {
        field: TokenField::Source,
        pattern,
        canonical: None,
    }
}

/// Resolution and source vocabulary, in priority order
pub const VOCABULARY: &[TokenDescriptor] = &[
    resolution("480p"),
    resolution("720p"),
    resolution("1080p"),
    resolution("2160p"),
    resolution("4K"),
    resolution("8K"),
    source("BluRay"),
    source(r"WEB[-. ]?DL"),
    source(r"WEB[-. ]?Rip"),
    source("HDRip"),
    source("DVDRip"),
    source("HDCAM"),
    source("HDTS"),
    source("CAMRip"),
    source("SCREENER"),
    source("HMAX"),
    source("AMZN"),
    source("NF"),
    source("HULU"),
    source("BDRip"),
];

struct CompiledToken {
    descriptor: TokenDescriptor,
    regex: Regex,
}

impl CompiledToken {
    fn render(&self, matched: &str) -> String {
        match self.descriptor.canonical {
            Some(canonical) => canonical.to_string(),
            None => matched.chars().filter(|c| !matches!(c, '.' | '-')).collect(),
        }
    }
}

/// Derives `Title (Year) Source Resolution.mp4` names from release-style
/// filenames.
pub struct FilenameStandardizer {
    year: Regex,
    tokens: Vec<CompiledToken>,
}

impl FilenameStandardizer {
    /// Build a standardizer over the default vocabulary
    pub fn new() -> RemuxResult<Self> {
        Self::with_vocabulary(VOCABULARY)
    }

    /// Build a standardizer over a custom vocabulary table
    pub fn with_vocabulary(vocabulary: &[TokenDescriptor]) -> RemuxResult<Self> {
        let year = Regex::new(YEAR_PATTERN)?;
        let tokens = vocabulary
            .iter()
            .map(|descriptor| {
                let regex = RegexBuilder::new(descriptor.pattern)
                    .case_insensitive(true)
                    .build()?;
                Ok(CompiledToken {
                    descriptor: *descriptor,
                    regex,
                })
            })
            .collect::<RemuxResult<Vec<_>>>()?;

        Ok(Self { year, tokens })
    }

    /// Whether the file extension is one we rename
    pub fn is_eligible(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Standardize the final path component. Returns `None` when the
    /// extension is not accepted or no year can be found.
    pub fn standardize(&self, path: impl AsRef<Path>) -> Option<ParsedName> {
        let path = path.as_ref();
        if !Self::is_eligible(path) {
            return None;
        }
        let stem = path.file_stem()?.to_string_lossy();
        self.parse_stem(&stem)
    }

    /// Parse a filename without its extension
    pub fn parse_stem(&self, stem: &str) -> Option<ParsedName> {
        let year = self.year.captures(stem)?.get(1)?;

        let mut resolution: Option<(usize, String)> = None;
        let mut source: Option<String> = None;

        for token in &self.tokens {
            let Some(found) = token.regex.find(stem) else {
                continue;
            };
            match token.descriptor.field {
                TokenField::Resolution => {
                    if resolution
                        .as_ref()
                        .map_or(true, |(start, _)| found.start() < *start)
                    {
                        resolution = Some((found.start(), token.render(found.as_str())));
                    }
                }
                TokenField::Source => {
                    if source.is_none() {
                        source = Some(token.render(found.as_str()));
                    }
                }
            }
        }

        Some(ParsedName {
            title: extract_title(&stem[..year.start()]),
            year: year.as_str().to_string(),
            source: source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            resolution: resolution
                .map(|(_, text)| text)
                .unwrap_or_else(|| DEFAULT_RESOLUTION.to_string()),
        })
    }

    /// Standardized output file name, if the input can be standardized
    pub fn file_name(&self, path: impl AsRef<Path>) -> Option<String> {
        self.standardize(path).map(|name| name.file_name())
    }
}

/// Clean the text that precedes the year into a title
fn extract_title(prefix: &str) -> String {
    let prefix = prefix.strip_suffix('(').unwrap_or(prefix);
    let title = prefix
        .replace(['.', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        title
    }
}
