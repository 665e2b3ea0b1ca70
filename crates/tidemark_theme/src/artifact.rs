//! Theme artifact ingestion.
//!
//! A theme artifact is a CSS file asserting `--tm-` custom properties,
//! usually written by `tidemark emit`. The parser reduces such a file
//! to its token map: block comments are stripped, selectors and braces
//! are tolerated, and only declarations in the reserved namespace are
//! collected. Everything else in the file is someone else's business.
//!
//! This is the single ingestion point; the validator and parity
//! checker only ever see maps that came through here or the resolver.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::contract::{TokenMap, TOKEN_PREFIX};
use crate::grammar;

const MAX_SOURCE_BYTES: usize = 256 * 1024;
const MAX_DECLARATIONS: usize = 512;
const MAX_VALUE_BYTES: usize = 1024;

fn declared_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"data-theme\s*=\s*"([^"]*)""#).expect("declared id pattern is valid")
    })
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read theme css at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme css is too large ({bytes} bytes, max {max})")]
    TooLarge { bytes: usize, max: usize },

    #[error("theme css syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },
}

/// A parsed theme artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeArtifact {
    /// First `data-theme="…"` attribute found, if any. Emitted
    /// artifacts declare their theme id this way.
    pub declared_id: Option<String>,
    /// `--tm-` declarations in order of first appearance; on duplicate
    /// names the last declared value wins, as in CSS.
    pub tokens: TokenMap,
}

impl ThemeArtifact {
    /// Parse CSS source into an artifact.
    pub fn parse(src: &str) -> Result<Self, ArtifactError> {
        if src.len() > MAX_SOURCE_BYTES {
            return Err(ArtifactError::TooLarge {
                bytes: src.len(),
                max: MAX_SOURCE_BYTES,
            });
        }

        let mut artifact = Self::default();
        let mut in_comment = false;
        let mut comment_opened_at = 0;

        for (idx, raw_line) in src.lines().enumerate() {
            let line_no = idx + 1;
            let was_in_comment = in_comment;
            let line = strip_block_comments(raw_line, &mut in_comment);
            if in_comment && !was_in_comment {
                comment_opened_at = line_no;
            }

            if artifact.declared_id.is_none() {
                if let Some(caps) = declared_id_re().captures(&line) {
                    artifact.declared_id = Some(caps[1].to_string());
                }
            }

            for fragment in line.split(';') {
                let part = declaration_part(fragment);
                if part.is_empty() || !part.starts_with(TOKEN_PREFIX) {
                    continue;
                }

                let Some(colon) = part.find(':') else {
                    return Err(ArtifactError::Syntax {
                        line: line_no,
                        msg: format!("expected `:` in declaration `{part}`"),
                    });
                };
                let name = part[..colon].trim_end();
                let value = part[colon + 1..].trim();

                if !grammar::is_valid_palette_name(&name[TOKEN_PREFIX.len()..]) {
                    return Err(ArtifactError::Syntax {
                        line: line_no,
                        msg: format!("malformed token name `{name}`"),
                    });
                }
                if value.is_empty() {
                    return Err(ArtifactError::Syntax {
                        line: line_no,
                        msg: format!("empty value for `{name}`"),
                    });
                }
                if value.len() > MAX_VALUE_BYTES {
                    return Err(ArtifactError::Syntax {
                        line: line_no,
                        msg: format!("value for `{name}` is too long (max {MAX_VALUE_BYTES} bytes)"),
                    });
                }
                if artifact.tokens.len() >= MAX_DECLARATIONS
                    && !artifact.tokens.contains_key(name)
                {
                    return Err(ArtifactError::Syntax {
                        line: line_no,
                        msg: format!("too many declarations (max {MAX_DECLARATIONS})"),
                    });
                }

                artifact.tokens.insert(name.to_string(), value.to_string());
            }
        }

        if in_comment {
            return Err(ArtifactError::Syntax {
                line: comment_opened_at,
                msg: "unterminated comment".to_string(),
            });
        }

        Ok(artifact)
    }
}

/// Read and parse a theme artifact from disk.
pub fn read_theme_css(path: &Path) -> Result<ThemeArtifact, ArtifactError> {
    let src = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ThemeArtifact::parse(&src)
}

/// Remove block comment spans from one line, carrying comment state
/// across lines.
fn strip_block_comments(line: &str, in_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        if *in_comment {
            match rest.find("*/") {
                Some(pos) => {
                    *in_comment = false;
                    rest = &rest[pos + 2..];
                }
                None => return out,
            }
        } else {
            match rest.find("/*") {
                Some(pos) => {
                    out.push_str(&rest[..pos]);
                    *in_comment = true;
                    rest = &rest[pos + 2..];
                }
                None => {
                    out.push_str(rest);
                    return out;
                }
            }
        }
    }
}

/// Cut selector and brace residue off a `;`-split fragment, leaving
/// whatever could be a declaration.
fn declaration_part(fragment: &str) -> &str {
    let after_brace = match fragment.rfind('{') {
        Some(pos) => &fragment[pos + 1..],
        None => fragment,
    };
    after_brace.trim_matches(|c: char| c == '}' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_an_emitted_artifact() {
        let src = r#"/* Generated by `tidemark emit`. Palette: ocean (light). Do not edit by hand. */
:root[data-theme="ocean-light"] {
  --tm-contract: "4";
  --tm-background: 198 100% 99%;
  --tm-foreground: 200 50% 10%;
}
"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(artifact.declared_id.as_deref(), Some("ocean-light"));
        assert_eq!(artifact.tokens.len(), 3);
        assert_eq!(
            artifact.tokens.get("--tm-background").map(String::as_str),
            Some("198 100% 99%")
        );
        assert_eq!(
            artifact.tokens.get("--tm-contract").map(String::as_str),
            Some("\"4\"")
        );
    }

    #[test]
    fn ignores_declarations_outside_the_namespace() {
        let src = r#"
:root {
  color: red;
  --brand-logo: url(logo.svg);
  --tm-background: 0 0% 100%;
  font-family: sans-serif;
}
"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(artifact.tokens.len(), 1);
        assert!(artifact.tokens.contains_key("--tm-background"));
        assert_eq!(artifact.declared_id, None);
    }

    #[test]
    fn last_declaration_wins() {
        let src = r#"
:root {
  --tm-radius: 0.5rem;
  --tm-radius: 0.75rem;
}
"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(
            artifact.tokens.get("--tm-radius").map(String::as_str),
            Some("0.75rem")
        );
        assert_eq!(artifact.tokens.len(), 1);
    }

    #[test]
    fn comments_are_stripped_across_lines() {
        let src = r#"
:root {
  /* --tm-ghost: 1;
     still commented: --tm-phantom: 2; */
  --tm-radius: /* inline */ 0.5rem;
}
"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(artifact.tokens.len(), 1);
        assert_eq!(
            artifact.tokens.get("--tm-radius").map(String::as_str),
            Some("0.5rem")
        );
    }

    #[test]
    fn unterminated_comments_point_at_the_opening_line() {
        let src = ":root {\n  --tm-radius: 0.5rem;\n  /* never closed\n";
        let err = ThemeArtifact::parse(src).unwrap_err();
        match err {
            ArtifactError::Syntax { line, msg } => {
                assert_eq!(line, 3);
                assert!(msg.contains("unterminated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn one_line_rules_parse() {
        let src = r#":root[data-theme="ember-dark"] { --tm-background: 20 35% 7%; --tm-radius: 0.375rem; }"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(artifact.declared_id.as_deref(), Some("ember-dark"));
        assert_eq!(artifact.tokens.len(), 2);
    }

    #[test]
    fn first_declared_id_wins() {
        let src = r#"
:root[data-theme="ocean-light"] { --tm-background: 0 0% 100%; }
:root[data-theme="ocean-dark"] { --tm-background: 204 70% 6%; }
"#;
        let artifact = ThemeArtifact::parse(src).unwrap();
        assert_eq!(artifact.declared_id.as_deref(), Some("ocean-light"));
    }

    #[test]
    fn namespace_declarations_must_be_well_formed() {
        let missing_colon = ":root { --tm-background 0 0% 100%; }";
        assert!(matches!(
            ThemeArtifact::parse(missing_colon).unwrap_err(),
            ArtifactError::Syntax { line: 1, .. }
        ));

        let bad_name = ":root { --tm-Bad_Name: 1; }";
        assert!(matches!(
            ThemeArtifact::parse(bad_name).unwrap_err(),
            ArtifactError::Syntax { line: 1, .. }
        ));

        let empty_value = ":root {\n  --tm-background: ;\n}";
        assert!(matches!(
            ThemeArtifact::parse(empty_value).unwrap_err(),
            ArtifactError::Syntax { line: 2, .. }
        ));
    }

    #[test]
    fn oversized_values_are_rejected() {
        let src = format!(":root {{ --tm-background: {}; }}", "x".repeat(MAX_VALUE_BYTES + 1));
        assert!(matches!(
            ThemeArtifact::parse(&src).unwrap_err(),
            ArtifactError::Syntax { .. }
        ));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        std::fs::write(&path, ":root { --tm-background: 0 0% 100%; }\n").unwrap();

        let artifact = read_theme_css(&path).unwrap();
        assert_eq!(artifact.tokens.len(), 1);

        let err = read_theme_css(&dir.path().join("absent.css")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }
}
