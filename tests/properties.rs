use forge_cfg::{ForgeError, Section, parse_str};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Node {
    Setting(i64),
    Section(Vec<Node>),
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = any::<i64>().prop_map(Node::Setting);
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Node::Section)
    })
}

fn render(nodes: &[Node], out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Setting(n) => out.push_str(&format!("n{i} = {n}\n")),
            Node::Section(children) => {
                out.push_str(&format!("n{i} {{\n"));
                render(children, out);
                out.push_str("}\n");
            }
        }
    }
}

fn node_depth(node: &Node) -> usize {
    match node {
        Node::Setting(_) => 0,
        Node::Section(children) => 1 + children.iter().map(node_depth).max().unwrap_or(0),
    }
}

fn section_depth(section: &Section) -> usize {
    section
        .sections()
        .map(|s| 1 + section_depth(s))
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn test_nesting_depth_matches_source(nodes in prop::collection::vec(node(), 0..5)) {
        let mut source = String::new();
        render(&nodes, &mut source);

        let settings = parse_str(&source).unwrap();
        let expected = nodes.iter().map(node_depth).max().unwrap_or(0);
        prop_assert_eq!(section_depth(&settings), expected);
        prop_assert_eq!(settings.len(), nodes.len());
    }

    #[test]
    fn test_parse_is_deterministic(nodes in prop::collection::vec(node(), 0..5)) {
        let mut source = String::new();
        render(&nodes, &mut source);

        let first = parse_str(&source).unwrap();
        let second = parse_str(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unmatched_close_is_rejected(nodes in prop::collection::vec(node(), 0..5)) {
        let mut source = String::new();
        render(&nodes, &mut source);
        source.push_str("}\n");

        let is_syntax_error = matches!(parse_str(&source), Err(ForgeError::Syntax { .. }));
        prop_assert!(is_syntax_error);
    }

    #[test]
    fn test_quoted_strings_survive(text in "[a-zA-Z0-9 _.,:-]*") {
        let settings = parse_str(&format!("value = \"{text}\"\n")).unwrap();
        prop_assert_eq!(settings.get_string("value").unwrap(), text.as_str());
    }
}
