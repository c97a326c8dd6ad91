//! Fixed rule data: expected identity strings, supported value sets, port
//! bounds, and compiled format patterns.

use regex::Regex;
use std::sync::LazyLock;

pub const API_VERSION_EXPECTED: &str = "v1";
pub const KIND_EXPECTED: &str = "Pod";

pub static SUPPORTED_OS_NAMES: &[&str] = &["linux", "windows"];
pub static SUPPORTED_PROTOCOLS: &[&str] = &["TCP", "UDP"];

pub const PORT_NUMBER_MIN: i64 = 1;
pub const PORT_NUMBER_MAX: i64 = 65535;

/// The rule table a validation pass runs against.
///
/// One process-wide instance ([`RuleSet::builtin`]) covers the normal case;
/// callers that need different identity strings or value sets build their
/// own and pass it through [`crate::validate::validate_with`].
#[derive(Clone, Debug)]
pub struct RuleSet {
    /// Exact `apiVersion` value accepted.
    pub api_version: String,
    /// Exact `kind` value accepted.
    pub kind: String,
    /// Operating systems accepted in `spec.os`.
    pub os_names: Vec<String>,
    /// Protocols accepted in `ports[].protocol`.
    pub protocols: Vec<String>,
    /// Inclusive port number bounds.
    pub port_min: i64,
    pub port_max: i64,
    /// Container names: lower-case words joined by underscores.
    pub name_format: Regex,
    /// Image references: pinned registry host, repository, and tag.
    pub image_format: Regex,
    /// Memory quantities: integer amount with a binary unit suffix.
    pub memory_format: Regex,
    /// HTTP probe paths: absolute only.
    pub path_format: Regex,
}

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    api_version: API_VERSION_EXPECTED.to_string(),
    kind: KIND_EXPECTED.to_string(),
    os_names: SUPPORTED_OS_NAMES.iter().map(|s| s.to_string()).collect(),
    protocols: SUPPORTED_PROTOCOLS.iter().map(|s| s.to_string()).collect(),
    port_min: PORT_NUMBER_MIN,
    port_max: PORT_NUMBER_MAX,
    name_format: Regex::new(r"^[a-z]+(_[a-z]+)*$").unwrap(),
    image_format: Regex::new(r"^registry\.bigbrother\.io/(.+):(.+)$").unwrap(),
    memory_format: Regex::new(r"^(\d+)(Mi|Gi|Ki)$").unwrap(),
    path_format: Regex::new(r"^/.*").unwrap(),
});

impl RuleSet {
    /// The built-in rule set, compiled once per process. Read-only, so it is
    /// safe to share across any number of concurrent validation passes.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn os_supported(&self, name: &str) -> bool {
        self.os_names.iter().any(|os| os == name)
    }

    pub fn protocol_supported(&self, protocol: &str) -> bool {
        self.protocols.iter().any(|p| p == protocol)
    }

    pub fn port_in_range(&self, port: i64) -> bool {
        (self.port_min..=self.port_max).contains(&port)
    }
}
