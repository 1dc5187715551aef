//! Dependency constraint parser
//!
//! Handles:
//! - Bare versions: `1`, `1.2`, `1.2.3`, `1.2.3-rc.1`
//! - Comparison operators: `>=`, `<`, `<=`
//! - Pessimistic constraints: `~> 1.2`
//!
//! Spaces after the operator are optional, and leading spaces are
//! accepted without one. The text is kept verbatim either way.

use crate::domain::{DependencyConstraint, Operator, Prerelease};
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<operator>>=|<=|<|~>)? *(?P<major>\d+)(?:\.(?P<minor>\d+)(?:\.(?P<revision>\d+))?(?:-(?P<prerelease>(?:alpha|beta|rc)\.\d+))?)?$",
    )
    .unwrap()
});

/// Parse `[operator] major[.minor[.revision][-prerelease]]`
pub fn parse_constraint(input: &str) -> Result<DependencyConstraint, ParseError> {
    let invalid = || ParseError::invalid_constraint(input);
    let caps = CONSTRAINT_RE.captures(input).ok_or_else(invalid)?;

    let number = |name: &str| -> Result<Option<u64>, ParseError> {
        caps.name(name)
            .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
            .transpose()
    };

    let operator = caps
        .name("operator")
        .map(|m| Operator::from_symbol(m.as_str()).ok_or_else(invalid))
        .transpose()?;
    let prerelease = caps
        .name("prerelease")
        .map(|m| m.as_str().parse::<Prerelease>().map_err(|_| invalid()))
        .transpose()?;

    Ok(DependencyConstraint {
        raw: input.to_string(),
        operator,
        major: number("major")?.ok_or_else(invalid)?,
        minor: number("minor")?,
        revision: number("revision")?,
        prerelease,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PrereleaseTag;

    fn parse(input: &str) -> Option<DependencyConstraint> {
        parse_constraint(input).ok()
    }

    #[test]
    fn test_parse_major_only() {
        let c = parse("1").unwrap();
        assert_eq!(c.operator, None);
        assert_eq!(c.major, 1);
        assert_eq!(c.minor, None);
        assert_eq!(c.revision, None);
    }

    #[test]
    fn test_parse_bare_full_version() {
        let c = parse("0.3.0").unwrap();
        assert_eq!(c.operator, None);
        assert_eq!((c.major, c.minor, c.revision), (0, Some(3), Some(0)));
    }

    #[test]
    fn test_parse_pessimistic() {
        let c = parse("~> 0.3").unwrap();
        assert_eq!(c.operator, Some(Operator::Pessimistic));
        assert_eq!(c.minor, Some(3));
        assert_eq!(c.raw, "~> 0.3");
    }

    #[test]
    fn test_parse_leading_spaces_without_operator() {
        let c = parse("  1.0").unwrap();
        assert_eq!(c.operator, None);
        assert_eq!(c.major, 1);
        assert_eq!(c.minor, Some(0));
        assert_eq!(c.raw, "  1.0");
        assert!(parse("1.0 ").is_none());
    }

    #[test]
    fn test_parse_operator_without_space() {
        let c = parse(">=1.0").unwrap();
        assert_eq!(c.operator, Some(Operator::GreaterOrEqual));
    }

    #[test]
    fn test_parse_less_and_less_or_equal() {
        assert_eq!(parse("< 2").unwrap().operator, Some(Operator::Less));
        assert_eq!(parse("<= 2.1").unwrap().operator, Some(Operator::LessOrEqual));
    }

    #[test]
    fn test_parse_prerelease() {
        let c = parse(">= 1.2.0-beta.2").unwrap();
        assert_eq!(c.prerelease, Some(Prerelease::new(PrereleaseTag::Beta, 2)));
        assert_eq!(c.revision, Some(0));
    }

    #[test]
    fn test_parse_prerelease_after_minor() {
        let c = parse("1.2-rc.1").unwrap();
        assert_eq!(c.revision, None);
        assert!(c.prerelease.is_some());
    }

    #[test]
    fn test_parse_rejects_unsupported_operators() {
        assert!(parse("> 1.0").is_none());
        assert!(parse("= 1.0").is_none());
        assert!(parse("^1.0").is_none());
    }

    #[test]
    fn test_parse_rejects_prerelease_on_major() {
        assert!(parse("1-beta.1").is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_constraint("latest"),
            Err(ParseError::InvalidConstraint { .. })
        ));
        assert!(parse("").is_none());
        assert!(parse("~>").is_none());
    }
}
