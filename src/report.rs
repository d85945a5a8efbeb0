//! Rendering of check results

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;

use crate::reconcile::MismatchRecord;

/// Which kind of manifest was checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Pom,
    Sbom,
}

impl ReportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::Pom => "pom",
            ReportMode::Sbom => "sbom",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected text or json)",
                other
            )),
        }
    }
}

/// Outcome of one check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub mode: ReportMode,
    pub spring_boot_version: Option<String>,
    /// POM: declared packages Spring Boot manages. SBOM: components with a differing version.
    pub packages: Vec<MismatchRecord>,
    /// Declared version properties Spring Boot manages (POM only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

impl Report {
    pub fn new(mode: ReportMode, spring_boot_version: Option<String>) -> Self {
        Self {
            mode,
            spring_boot_version,
            packages: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_packages(mut self, packages: Vec<MismatchRecord>) -> Self {
        self.packages = packages;
        self
    }

    pub fn with_properties(mut self, properties: Vec<String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.properties.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        let Some(version) = &self.spring_boot_version else {
            out.push_str("No Spring Boot version found\n");
            return out;
        };

        let _ = writeln!(out, "Spring Boot {} ({})", version, self.mode);

        if !self.packages.is_empty() {
            let heading = match self.mode {
                ReportMode::Pom => "Declared packages managed by Spring Boot",
                ReportMode::Sbom => "Packages differing from Spring Boot",
            };
            let _ = writeln!(out, "\n{}:", heading);
            for record in &self.packages {
                let _ = writeln!(
                    out,
                    "  {}:{}  {} -> {}",
                    record.group,
                    record.name,
                    record.input_file_version.as_deref().unwrap_or("?"),
                    record.boot_version
                );
            }
        }

        if !self.properties.is_empty() {
            let _ = writeln!(out, "\nDeclared properties managed by Spring Boot:");
            for property in &self.properties {
                let _ = writeln!(out, "  {}", property);
            }
        }

        if self.is_empty() {
            out.push_str("No overlapping packages found\n");
        }

        out
    }
}
