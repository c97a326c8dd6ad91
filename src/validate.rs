//! Schema validation of parsed manifest trees.
//!
//! Returns **all** violations, not just the first. One pre-order pass walks
//! the fixed schema shape; each object shape is a declarative field table
//! consumed by a single generic engine. The input tree is read-only.

use crate::error::{ErrorCollector, ValidationError};
use crate::node::{Node, NodeKind};
use crate::rules::RuleSet;

/// Validate one parsed document against the built-in rule set.
///
/// `file_path` is carried verbatim into every reported violation. The
/// result order is the fixed pre-order traversal of the schema (document →
/// metadata → spec → containers → ports/probes/resources), with fields in
/// declaration order inside each shape, so it is stable across runs.
pub fn validate(doc: &Node, file_path: &str) -> Vec<ValidationError> {
    validate_with(doc, file_path, RuleSet::builtin())
}

/// Validate one parsed document against an explicit rule set.
pub fn validate_with(doc: &Node, file_path: &str, rules: &RuleSet) -> Vec<ValidationError> {
    let mut walker = Walker {
        file_path,
        rules,
        collector: ErrorCollector::new(),
    };
    walker.object(doc, DOCUMENT_FIELDS);
    walker.collector.into_errors()
}

/// How one field of an object shape is checked.
type FieldCheck = fn(&mut Walker<'_>, &Node);

/// One named field of an object shape.
struct FieldRule {
    name: &'static str,
    required: bool,
    check: FieldCheck,
}

// ─── Object shapes ──────────────────────────────────────────────────────────
//
// Declaration order is the reporting order: missing required fields and
// value violations surface in the order the field tables list them.

const DOCUMENT_FIELDS: &[FieldRule] = &[
    FieldRule { name: "apiVersion", required: true, check: check_api_version },
    FieldRule { name: "kind", required: true, check: check_kind },
    FieldRule { name: "metadata", required: true, check: check_metadata },
    FieldRule { name: "spec", required: true, check: check_spec },
];

const METADATA_FIELDS: &[FieldRule] = &[
    FieldRule { name: "name", required: true, check: check_metadata_name },
    FieldRule { name: "labels", required: false, check: check_labels },
];

const SPEC_FIELDS: &[FieldRule] = &[
    FieldRule { name: "os", required: false, check: check_os },
    FieldRule { name: "containers", required: true, check: check_containers },
];

const CONTAINER_FIELDS: &[FieldRule] = &[
    FieldRule { name: "name", required: true, check: check_container_name },
    FieldRule { name: "image", required: true, check: check_image },
    FieldRule { name: "ports", required: false, check: check_ports },
    FieldRule { name: "readinessProbe", required: false, check: check_probe },
    FieldRule { name: "livenessProbe", required: false, check: check_probe },
    FieldRule { name: "resources", required: true, check: check_resources },
];

const PORT_FIELDS: &[FieldRule] = &[
    FieldRule { name: "containerPort", required: true, check: check_container_port },
    FieldRule { name: "protocol", required: false, check: check_protocol },
];

const PROBE_FIELDS: &[FieldRule] = &[
    FieldRule { name: "httpGet", required: true, check: check_http_get },
];

const HTTP_GET_FIELDS: &[FieldRule] = &[
    FieldRule { name: "path", required: true, check: check_http_path },
    FieldRule { name: "port", required: true, check: check_probe_port },
];

const RESOURCE_FIELDS: &[FieldRule] = &[
    FieldRule { name: "cpu", required: false, check: check_cpu },
    FieldRule { name: "memory", required: false, check: check_memory },
];

// ─── Walker ─────────────────────────────────────────────────────────────────

/// State of a single validation pass.
struct Walker<'a> {
    file_path: &'a str,
    rules: &'a RuleSet,
    collector: ErrorCollector,
}

impl Walker<'_> {
    fn report(&mut self, line: usize, message: String) {
        self.collector.add(ValidationError {
            file_path: self.file_path.to_string(),
            line,
            message,
        });
    }

    /// Generic object engine: walk the field table in declaration order,
    /// dispatching each present field to its check and reporting missing
    /// required fields at the parent node's line. Unknown keys never error.
    ///
    /// A non-mapping node has no pairs, so every required field of the
    /// shape is reported missing at that node's line.
    fn object(&mut self, node: &Node, fields: &[FieldRule]) {
        for rule in fields {
            match node.get(rule.name) {
                Some(value) => (rule.check)(self, value),
                None if rule.required => {
                    self.report(node.line, format!("{} is required", rule.name));
                }
                None => {}
            }
        }
    }

    /// Sequence of object-shaped elements. Presence of the sequence itself
    /// satisfies required-ness; an empty sequence is accepted.
    fn array(&mut self, node: &Node, field: &str, fields: &[FieldRule]) {
        if node.kind != NodeKind::Sequence {
            self.report(node.line, format!("{} must be an array", field));
            return;
        }
        for element in &node.children {
            self.object(element, fields);
        }
    }

    fn name(&mut self, node: &Node, check_format: bool) {
        if !node.is_scalar() {
            self.report(node.line, "name must be string".to_string());
            return;
        }
        if node.value.is_empty() {
            self.report(node.line, "name is required".to_string());
            return;
        }
        if check_format && !self.rules.name_format.is_match(&node.value) {
            self.report(node.line, format!("name has invalid format '{}'", node.value));
        }
    }

    fn port_number(&mut self, node: &Node, field: &str) {
        if !node.is_scalar() {
            self.report(node.line, format!("{} must be int", field));
            return;
        }
        let Ok(port) = node.value.parse::<i64>() else {
            self.report(node.line, format!("{} must be int", field));
            return;
        };
        if !self.rules.port_in_range(port) {
            self.report(node.line, format!("{} value out of range", field));
        }
    }
}

// ─── Field checks ───────────────────────────────────────────────────────────

fn check_api_version(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() || node.value != w.rules.api_version {
        w.report(
            node.line,
            format!("apiVersion has unsupported value '{}'", node.value),
        );
    }
}

fn check_kind(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() || node.value != w.rules.kind {
        w.report(node.line, format!("kind has unsupported value '{}'", node.value));
    }
}

fn check_metadata(w: &mut Walker<'_>, node: &Node) {
    w.object(node, METADATA_FIELDS);
}

fn check_spec(w: &mut Walker<'_>, node: &Node) {
    w.object(node, SPEC_FIELDS);
}

fn check_metadata_name(w: &mut Walker<'_>, node: &Node) {
    w.name(node, false);
}

fn check_container_name(w: &mut Walker<'_>, node: &Node) {
    w.name(node, true);
}

fn check_labels(w: &mut Walker<'_>, node: &Node) {
    if node.kind != NodeKind::Mapping {
        w.report(node.line, "labels must be a mapping".to_string());
        return;
    }
    for (_, value) in node.pairs() {
        if !value.is_scalar() {
            w.report(value.line, "label value must be string".to_string());
        }
    }
}

fn check_os(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "os must be string".to_string());
        return;
    }
    if !w.rules.os_supported(&node.value) {
        w.report(node.line, format!("os has unsupported value '{}'", node.value));
    }
}

fn check_containers(w: &mut Walker<'_>, node: &Node) {
    w.array(node, "containers", CONTAINER_FIELDS);
}

fn check_image(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "image must be string".to_string());
        return;
    }
    if !w.rules.image_format.is_match(&node.value) {
        w.report(node.line, format!("image has invalid format '{}'", node.value));
    }
}

fn check_ports(w: &mut Walker<'_>, node: &Node) {
    w.array(node, "ports", PORT_FIELDS);
}

fn check_container_port(w: &mut Walker<'_>, node: &Node) {
    w.port_number(node, "containerPort");
}

fn check_protocol(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "protocol must be string".to_string());
        return;
    }
    if !w.rules.protocol_supported(&node.value) {
        w.report(
            node.line,
            format!("protocol has unsupported value '{}'", node.value),
        );
    }
}

fn check_probe(w: &mut Walker<'_>, node: &Node) {
    w.object(node, PROBE_FIELDS);
}

fn check_http_get(w: &mut Walker<'_>, node: &Node) {
    w.object(node, HTTP_GET_FIELDS);
}

fn check_http_path(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "path must be string".to_string());
        return;
    }
    if !w.rules.path_format.is_match(&node.value) {
        w.report(node.line, format!("path has invalid format '{}'", node.value));
    }
}

fn check_probe_port(w: &mut Walker<'_>, node: &Node) {
    w.port_number(node, "port");
}

/// Resource classes (`limits`, `requests`, vendor extensions) are
/// open-ended; every class value is checked for cpu and memory.
fn check_resources(w: &mut Walker<'_>, node: &Node) {
    for (_, requirements) in node.pairs() {
        w.object(requirements, RESOURCE_FIELDS);
    }
}

fn check_cpu(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "cpu must be int".to_string());
        return;
    }
    match node.value.parse::<i64>() {
        Ok(cpu) if cpu >= 1 => {}
        _ => w.report(node.line, "cpu value out of range".to_string()),
    }
}

fn check_memory(w: &mut Walker<'_>, node: &Node) {
    if !node.is_scalar() {
        w.report(node.line, "memory must be string".to_string());
        return;
    }
    let amount = match w.rules.memory_format.captures(&node.value) {
        Some(caps) => caps[1].parse::<i64>(),
        None => {
            w.report(
                node.line,
                format!("memory has invalid format '{}'", node.value),
            );
            return;
        }
    };
    match amount {
        Ok(amount) if amount >= 1 => {}
        _ => w.report(node.line, "memory value out of range".to_string()),
    }
}
