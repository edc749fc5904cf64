use crate::matcher::{CheckOptions, Fragment, check_absent, check_contains, check_element_count};
use crate::normalize::WhitespaceMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Parsed `.checks.yaml` file: a list of checks evaluated against one
/// response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecksFile {
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub checks: Vec<Check>,
}

/// One declarative check. Each variant maps onto a library entry point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Contains {
        fragments: Vec<FragmentSpec>,
        #[serde(default)]
        ignore_ordering: bool,
        starts_after: Option<String>,
        ends_before: Option<String>,
        #[serde(default)]
        preserve_newlines: bool,
    },
    Absent {
        fragments: Vec<FragmentSpec>,
        starts_after: Option<String>,
        ends_before: Option<String>,
    },
    ElementCount {
        tag: String,
        count: i64,
    },
}

/// A fragment in the checks file: either a bare string or a mapping with
/// supplemental diagnostic text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FragmentSpec {
    Bare(String),
    Annotated { text: String, note: String },
}

impl From<&FragmentSpec> for Fragment {
    fn from(spec: &FragmentSpec) -> Self {
        match spec {
            FragmentSpec::Bare(text) => Fragment::Literal(text.clone()),
            FragmentSpec::Annotated { text, note } => Fragment::Annotated {
                text: text.clone(),
                note: note.clone(),
            },
        }
    }
}

/// Result of evaluating a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Parse a checks file.
pub fn parse(path: &Path) -> Result<ChecksFile, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| format!("failed to read checks file '{}': {error}", path.display()))?;
    serde_yaml::from_str(&raw)
        .map_err(|error| format!("failed to parse checks file '{}': {error}", path.display()))
}

/// Evaluate every check against `body`. Checks are independent; one
/// failing check never stops the others.
pub fn run_checks(body: &str, file: &ChecksFile, defaults: &CheckOptions) -> Vec<CheckResult> {
    file.checks
        .iter()
        .enumerate()
        .map(|(index, check)| run_one(body, check, index, defaults))
        .collect()
}

fn run_one(body: &str, check: &Check, index: usize, defaults: &CheckOptions) -> CheckResult {
    let (name, outcome) = match check {
        Check::Contains {
            fragments,
            ignore_ordering,
            starts_after,
            ends_before,
            preserve_newlines,
        } => {
            let options = CheckOptions {
                starts_after: starts_after.clone(),
                ends_before: ends_before.clone(),
                ignore_ordering: *ignore_ordering,
                whitespace: if *preserve_newlines {
                    WhitespaceMode::Newlines
                } else {
                    defaults.whitespace
                },
                ..defaults.clone()
            };
            let fragments: Vec<Fragment> = fragments.iter().map(Fragment::from).collect();
            (
                format!("contains#{index}"),
                check_contains(body, fragments, &options),
            )
        }
        Check::Absent {
            fragments,
            starts_after,
            ends_before,
        } => {
            let options = CheckOptions {
                starts_after: starts_after.clone(),
                ends_before: ends_before.clone(),
                ..defaults.clone()
            };
            let fragments: Vec<Fragment> = fragments.iter().map(Fragment::from).collect();
            (
                format!("absent#{index}"),
                check_absent(body, fragments, &options),
            )
        }
        Check::ElementCount { tag, count } => (
            format!("element_count#{index}"),
            check_element_count(body, tag, *count),
        ),
    };

    match outcome {
        Ok(()) => CheckResult {
            name,
            passed: true,
            detail: None,
            context: None,
        },
        Err(error) => CheckResult {
            name,
            passed: false,
            detail: Some(error.to_string()),
            context: serde_json::to_value(&error).ok(),
        },
    }
}
