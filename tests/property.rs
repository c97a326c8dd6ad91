use podcheck::check;
use podcheck::parse::parse;
use podcheck::validate::validate;
use proptest::prelude::*;

/// Minimal pod with a parameterized container name. Quoted to stop YAML
/// one-letter booleans (`y`, `n`) from changing shape.
fn pod_with_name(name: &str) -> String {
    format!(
        "apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: \"{name}\"
      image: registry.bigbrother.io/app:1.0
      resources:
        limits:
          cpu: 1
"
    )
}

fn pod_with_port(port: &str) -> String {
    format!(
        "apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web_app
      image: registry.bigbrother.io/app:1.0
      ports:
        - containerPort: {port}
      resources:
        limits:
          cpu: 1
"
    )
}

fn pod_with_memory(memory: &str) -> String {
    format!(
        "apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web_app
      image: registry.bigbrother.io/app:1.0
      resources:
        limits:
          memory: \"{memory}\"
"
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn in_range_ports_are_accepted(port in 1i64..=65535) {
        let errors = check(&pod_with_port(&port.to_string()), "pod.yaml").expect("parse");
        prop_assert!(errors.is_empty(), "port {} rejected: {:?}", port, errors);
    }

    #[test]
    fn out_of_range_ports_are_rejected(port in 65536i64..=10_000_000) {
        let errors = check(&pod_with_port(&port.to_string()), "pod.yaml").expect("parse");
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].message.as_str(), "containerPort value out of range");
    }

    #[test]
    fn snake_case_names_are_accepted(name in "[a-z]{1,8}(_[a-z]{1,8}){0,3}") {
        let errors = check(&pod_with_name(&name), "pod.yaml").expect("parse");
        prop_assert!(errors.is_empty(), "name {} rejected: {:?}", name, errors);
    }

    #[test]
    fn capitalized_names_are_rejected(name in "[A-Z][a-z]{0,7}") {
        let errors = check(&pod_with_name(&name), "pod.yaml").expect("parse");
        prop_assert_eq!(errors.len(), 1, "name {}: {:?}", &name, &errors);
        prop_assert!(
            errors[0].message.starts_with("name has invalid format"),
            "unexpected message: {}",
            errors[0].message
        );
    }

    #[test]
    fn memory_with_binary_unit_is_accepted(
        amount in 1u32..=4096,
        unit in prop_oneof!["Ki", "Mi", "Gi"],
    ) {
        let memory = format!("{amount}{unit}");
        let errors = check(&pod_with_memory(&memory), "pod.yaml").expect("parse");
        prop_assert!(errors.is_empty(), "memory {} rejected: {:?}", memory, errors);
    }

    #[test]
    fn memory_without_unit_is_rejected(amount in 1u32..=4096) {
        let memory = amount.to_string();
        let errors = check(&pod_with_memory(&memory), "pod.yaml").expect("parse");
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(
            errors[0].message.starts_with("memory has invalid format"),
            "unexpected message: {}",
            errors[0].message
        );
    }

    #[test]
    fn validation_is_deterministic(name in "[a-zA-Z_]{1,10}") {
        let yaml = pod_with_name(&name);
        let documents = parse(&yaml).expect("parse");
        let first = validate(&documents[0], "pod.yaml");
        let second = validate(&documents[0], "pod.yaml");
        prop_assert_eq!(first, second);
    }
}
