//! Behavioural checks for the registry across many inputs.

use toolwire_core::{
    ConnectionDescriptor, ConnectionDraft, ExampleLoad, McpRegistry, TransportKind,
};

fn descriptors() -> Vec<ConnectionDescriptor> {
    vec![
        ConnectionDescriptor::stdio("python", vec!["server.py".into(), "--verbose".into()]),
        ConnectionDescriptor::stdio("npx", Vec::new()),
        ConnectionDescriptor::stdio("", Vec::new()),
        ConnectionDescriptor::sse("http://localhost:8000/events"),
        ConnectionDescriptor::sse("definitely not a url"),
    ]
}

fn names() -> Vec<&'static str> {
    vec!["a", "fs", "remote", "with space", "ünïcode", "  padded  "]
}

#[test]
fn add_then_lookup_returns_descriptor() {
    for name in names() {
        for descriptor in descriptors() {
            let mut registry = McpRegistry::new();
            registry.add("existing", ConnectionDescriptor::stdio("node", Vec::new()));

            assert!(registry.add(name, descriptor.clone()));
            assert_eq!(registry.get(name), Some(&descriptor), "name {name:?}");
        }
    }
}

#[test]
fn blank_names_never_change_registry() {
    let mut registry = McpRegistry::new();
    registry.add("fs", ConnectionDescriptor::stdio("python", Vec::new()));
    let before = registry.clone();

    for blank in ["", " ", "\t", "\n  \r"] {
        for descriptor in descriptors() {
            assert!(!registry.add(blank, descriptor));
            assert_eq!(registry, before);
        }
    }
}

#[test]
fn json_round_trip_preserves_registry() {
    let mut registry = McpRegistry::new();
    for (i, descriptor) in descriptors().into_iter().enumerate() {
        let raw = serde_json::to_string(&registry).unwrap();
        let back: McpRegistry = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, registry);

        registry.add(&format!("server-{i}"), descriptor);
    }
}

#[test]
fn drafts_pick_fields_by_transport() {
    let mut draft = ConnectionDraft {
        transport: TransportKind::Stdio,
        command: "uvx".to_string(),
        raw_args: "  mcp-server-git   --repository . ".to_string(),
        url: "http://ignored".to_string(),
    };
    assert_eq!(
        draft.to_descriptor(),
        ConnectionDescriptor::stdio(
            "uvx",
            vec![
                "mcp-server-git".to_string(),
                "--repository".to_string(),
                ".".to_string()
            ]
        )
    );

    draft.transport = TransportKind::Sse;
    assert_eq!(draft.to_descriptor(), ConnectionDescriptor::sse("http://ignored"));
}

#[test]
fn merge_keeps_unrelated_entries() {
    let x = ConnectionDescriptor::stdio("python", vec!["x.py".into()]);
    let y = ConnectionDescriptor::sse("http://localhost:9000/sse");

    let current: McpRegistry = [("a".to_string(), x.clone())].into_iter().collect();
    let example: McpRegistry = [("b".to_string(), y.clone())].into_iter().collect();

    let mut merged = current.clone();
    merged.load_example(&example, ExampleLoad::Merge);
    let expected: McpRegistry = [("a".to_string(), x), ("b".to_string(), y)]
        .into_iter()
        .collect();
    assert_eq!(merged, expected);

    let mut replaced = current;
    replaced.load_example(&example, ExampleLoad::Replace);
    assert_eq!(replaced, example);
}
