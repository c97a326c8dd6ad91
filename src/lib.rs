//! Schema validator for Pod workload manifests.
//!
//! Validates YAML manifests against a fixed schema — required fields,
//! enumerated value sets, format patterns, numeric ranges, nested
//! object/array shapes — and reports **every** violation with the source
//! line it was found on, instead of stopping at the first:
//!
//! ```text
//! parse(yaml) → Vec<Node> → validate(&node, path) → Vec<ValidationError>
//! ```
//!
//! Parsing and validation are separate tiers: malformed YAML is a fatal
//! [`ParseError`], while schema violations are collected into an ordered
//! list whose order is the fixed pre-order traversal of the schema. An
//! empty list means the document is valid.
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = "\
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: web
//! spec:
//!   containers:
//!     - name: web_app
//!       image: registry.bigbrother.io/app:1.0
//!       resources:
//!         limits:
//!           cpu: 1
//!           memory: 256Mi
//! ";
//!
//! let errors = podcheck::check(yaml, "pod.yaml").expect("well-formed YAML");
//! assert!(errors.is_empty());
//! ```

pub mod error;
pub mod node;
pub mod parse;
pub mod rules;
pub mod validate;

pub use error::*;
pub use node::{Node, NodeKind};
pub use rules::RuleSet;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use validate::{validate, validate_with};

/// Convenience entry point composing parse → validate.
///
/// Every document in the stream is validated in order against the built-in
/// rule set, with `file_path` carried into each reported violation.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not well-formed YAML. Schema
/// violations are returned in the `Ok` list; an empty list means every
/// document is valid.
///
/// # Example
///
/// ```rust
/// let errors = podcheck::check("apiVersion: v2\n", "pod.yaml").unwrap();
/// assert_eq!(errors.len(), 4);
/// assert_eq!(
///     errors[0].to_string(),
///     "pod.yaml:1 apiVersion has unsupported value 'v2'"
/// );
/// ```
pub fn check(input: &str, file_path: &str) -> Result<Vec<ValidationError>, ParseError> {
    let mut errors = Vec::new();
    for document in parse::parse(input)? {
        errors.extend(validate::validate(&document, file_path));
    }
    Ok(errors)
}
