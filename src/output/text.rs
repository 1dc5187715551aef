//! Text output formatter for human-readable display
//!
//! `--print` output is the bare version string so it can be captured by
//! shell scripts; everything else is a short colored summary.

use crate::domain::{FileChange, Report};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self, dry_run: bool) -> String {
        match (dry_run, self.color) {
            (false, _) => String::new(),
            (true, true) => format!("{} ", "(dry-run)".cyan()),
            (true, false) => "(dry-run) ".to_string(),
        }
    }

    fn format_file_line(&self, file: &FileChange, writer: &mut dyn Write) -> std::io::Result<()> {
        let status = if file.changed { "updated" } else { "unchanged" };
        let path = file.path.display().to_string();
        if self.color {
            let status = if file.changed {
                status.green().to_string()
            } else {
                status.dimmed().to_string()
            };
            writeln!(writer, "  {} ({})", path, status)
        } else {
            writeln!(writer, "  {} ({})", path, status)
        }
    }

    fn arrow(&self) -> String {
        if self.color {
            "→".dimmed().to_string()
        } else {
            "->".to_string()
        }
    }

    fn emphasize(&self, value: &str) -> String {
        if self.color {
            value.bright_white().bold().to_string()
        } else {
            value.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        match report {
            Report::Version { version, .. } => writeln!(writer, "{}", version),
            Report::Validated {
                library,
                version,
                files,
            } => {
                writeln!(
                    writer,
                    "{} version {} is consistent",
                    library,
                    self.emphasize(&version.to_string())
                )?;
                for path in files {
                    writeln!(writer, "  {}", path.display())?;
                }
                Ok(())
            }
            Report::VersionUpdated {
                library,
                previous,
                version,
                files,
                dry_run,
            } => {
                writeln!(
                    writer,
                    "{}Updated {} version {} {} {}",
                    self.dry_run_prefix(*dry_run),
                    library,
                    previous,
                    self.arrow(),
                    self.emphasize(&version.to_string())
                )?;
                for file in files {
                    self.format_file_line(file, writer)?;
                }
                Ok(())
            }
            Report::DependencyUpdated {
                dependency,
                previous,
                constraint,
                dry_run,
                ..
            } => writeln!(
                writer,
                "{}Updated podspec dependency {} from {} to {}",
                self.dry_run_prefix(*dry_run),
                dependency,
                previous,
                self.emphasize(constraint)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionSpec;
    use std::path::PathBuf;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        TextFormatter::with_color(false)
            .format(report, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_is_bare_version() {
        let report = Report::Version {
            library: "core".to_string(),
            version: "2.5-beta.3".parse().unwrap(),
        };
        assert_eq!(render(&report), "2.5.0-beta.3\n");
    }

    #[test]
    fn test_validated() {
        let report = Report::Validated {
            library: "core".to_string(),
            version: VersionSpec::new(1, 0, 0),
            files: vec![PathBuf::from("HeapSwiftCore.podspec")],
        };
        let out = render(&report);
        assert!(out.starts_with("core version 1.0.0 is consistent\n"));
        assert!(out.contains("  HeapSwiftCore.podspec\n"));
    }

    #[test]
    fn test_version_updated() {
        let report = Report::VersionUpdated {
            library: "core".to_string(),
            previous: VersionSpec::new(3, 0, 0),
            version: VersionSpec::new(3, 1, 0),
            files: vec![
                FileChange {
                    path: PathBuf::from("HeapSwiftCore.podspec"),
                    changed: true,
                    written: true,
                },
                FileChange {
                    path: PathBuf::from("Version.swift"),
                    changed: false,
                    written: false,
                },
            ],
            dry_run: false,
        };
        let out = render(&report);
        assert!(out.contains("Updated core version 3.0.0 -> 3.1.0"));
        assert!(out.contains("HeapSwiftCore.podspec (updated)"));
        assert!(out.contains("Version.swift (unchanged)"));
    }

    #[test]
    fn test_dependency_updated_dry_run() {
        let report = Report::DependencyUpdated {
            library: "core".to_string(),
            dependency: "SwiftProtobuf".to_string(),
            previous: "~> 1.6".to_string(),
            constraint: "~> 1.20".to_string(),
            file: FileChange {
                path: PathBuf::from("HeapSwiftCore.podspec"),
                changed: true,
                written: false,
            },
            dry_run: true,
        };
        assert_eq!(
            render(&report),
            "(dry-run) Updated podspec dependency SwiftProtobuf from ~> 1.6 to ~> 1.20\n"
        );
    }
}
