//! JSON output formatter for machine processing

use crate::domain::Report;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileChange, VersionSpec};
    use std::path::PathBuf;

    fn render(report: &Report) -> serde_json::Value {
        let mut out = Vec::new();
        JsonFormatter::new().format(report, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_version_report() {
        let json = render(&Report::Version {
            library: "interfaces".to_string(),
            version: VersionSpec::new(0, 2, 0),
        });
        assert_eq!(json["action"], "version");
        assert_eq!(json["library"], "interfaces");
        assert_eq!(json["version"], "0.2.0");
    }

    #[test]
    fn test_version_updated_report() {
        let json = render(&Report::VersionUpdated {
            library: "core".to_string(),
            previous: VersionSpec::new(0, 2, 1),
            version: "0.3-rc.1".parse().unwrap(),
            files: vec![FileChange {
                path: PathBuf::from("HeapSwiftCore.podspec"),
                changed: true,
                written: false,
            }],
            dry_run: true,
        });
        assert_eq!(json["action"], "version_updated");
        assert_eq!(json["previous"], "0.2.1");
        assert_eq!(json["version"], "0.3.0-rc.1");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["files"][0]["path"], "HeapSwiftCore.podspec");
        assert_eq!(json["files"][0]["written"], false);
    }
}
