use scaffold_tree::error::Error;
use scaffold_tree::{build_tree_from_templates, Leaf, Node, Options, Template, Tree, TreeBuilder, WritePolicy};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn package_options() -> Options {
    [("package", "eric-ext")].into_iter().collect()
}

fn sample_templates() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "template.Dockerfile", "FROM python:3.11\n");
    write(root, "TEST-ROOT-DIR.template.md", "# $name\n");
    write(root, "template.gitignore", "*.pyc\n");
    write(root, "src/{{ package }}/sub_package/__init__.template.py", "\"\"\"$package\"\"\"\n");
    temp_dir
}

fn keys(tree: &Tree) -> Vec<&str> {
    let mut keys: Vec<&str> = tree.keys().collect();
    keys.sort();
    keys
}

#[test_log::test]
fn test_build_sample_structure() {
    let templates = sample_templates();
    let tree = build_tree_from_templates(templates.path(), &package_options()).unwrap();

    assert_eq!(keys(&tree), ["Dockerfile", "TEST-ROOT-DIR.md", "gitignore", "src"]);

    let init = tree.leaf_at("src/eric-ext/sub_package/__init__.py").unwrap();
    assert_eq!(init.policy, WritePolicy::Create);
    assert_eq!(init.as_template().unwrap().as_str(), "\"\"\"$package\"\"\"\n");

    let mut leaves: Vec<String> = tree.leaves().into_iter().map(|(path, _)| path).collect();
    leaves.sort();
    assert_eq!(
        leaves,
        [
            "Dockerfile",
            "TEST-ROOT-DIR.md",
            "gitignore",
            "src/eric-ext/sub_package/__init__.py"
        ]
    );
}

#[test_log::test]
fn test_dockerfile_lands_at_root() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "template.Dockerfile", "FROM scratch\n");

    let tree = build_tree_from_templates(temp_dir.path(), &Options::new()).unwrap();

    assert_eq!(tree.len(), 1);
    let leaf = tree.get("Dockerfile").and_then(Node::as_leaf).unwrap();
    assert_eq!(leaf.contents(&Options::new()), "FROM scratch\n");
}

#[test_log::test]
fn test_missing_option_keeps_placeholder_name() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "{{ missing }}/template.txt", "");

    let tree = build_tree_from_templates(temp_dir.path(), &Options::new()).unwrap();

    assert!(tree.leaf_at("{{ missing }}/txt").is_some());
}

#[test_log::test]
fn test_placeholder_file_name_is_substituted() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "docs/{{ readme_template }}", "hello");
    let options: Options = [("readme_template", "README.md")].into_iter().collect();

    let tree = build_tree_from_templates(temp_dir.path(), &options).unwrap();

    assert!(tree.leaf_at("docs/README.md").is_some());
}

#[test_log::test]
fn test_non_template_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "README.md", "plain");
    write(root, "template_dir/notes.txt", "plain");
    write(root, "template_dir/setup.template.cfg", "[metadata]\n");

    let tree = build_tree_from_templates(root, &Options::new()).unwrap();

    assert_eq!(keys(&tree), ["dir"]);
    let dir = tree.get("dir").and_then(Node::as_dir).unwrap();
    assert_eq!(keys(dir), ["setup.cfg"]);
}

#[test_log::test]
fn test_line_endings_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "template.txt", "one\r\ntwo\rthree\n");

    let tree = build_tree_from_templates(temp_dir.path(), &Options::new()).unwrap();

    let template = tree.leaf_at("txt").and_then(Leaf::as_template).unwrap();
    assert_eq!(template.as_str(), "one\ntwo\nthree\n");
}

#[test_log::test]
fn test_builds_are_independent() {
    let first = sample_templates();
    let second = sample_templates();
    let options = package_options();

    let mut tree_a = build_tree_from_templates(first.path(), &options).unwrap();
    let tree_b = build_tree_from_templates(second.path(), &options).unwrap();
    assert_eq!(tree_a, tree_b);

    tree_a.remove("src");
    if let Some(Node::File(leaf)) = tree_a.get_mut("Dockerfile") {
        leaf.policy = WritePolicy::NoOverwrite;
    }

    assert!(tree_b.leaf_at("src/eric-ext/sub_package/__init__.py").is_some());
    assert_eq!(tree_b.leaf_at("Dockerfile").unwrap().policy, WritePolicy::Create);
}

#[test_log::test]
fn test_ignore_file_excludes_paths() {
    let templates = sample_templates();
    write(templates.path(), ".scaffoldignore", "# drafts\nsrc/**\n\n");

    let tree = build_tree_from_templates(templates.path(), &package_options()).unwrap();
    assert!(!tree.contains_key("src"));

    let tree = TreeBuilder::new(templates.path())
        .without_ignore_file()
        .build(&package_options())
        .unwrap();
    assert!(tree.contains_key("src"));
}

#[test_log::test]
fn test_write_policy_is_configurable() {
    let templates = sample_templates();
    let tree = TreeBuilder::new(templates.path())
        .write_policy(WritePolicy::NoOverwrite)
        .build(&package_options())
        .unwrap();

    assert!(tree.leaves().iter().all(|(_, leaf)| leaf.policy == WritePolicy::NoOverwrite));
}

#[test_log::test]
fn test_missing_template_root() {
    let temp_dir = TempDir::new().unwrap();
    let result = build_tree_from_templates(temp_dir.path().join("nope"), &Options::new());

    assert!(matches!(result, Err(Error::TemplateDoesNotExistsError { .. })));
}

#[test_log::test]
fn test_colliding_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "{{ a }}/template.txt", "");
    write(temp_dir.path(), "{{ b }}/template.txt", "");
    let options: Options = [("a", "same"), ("b", "same")].into_iter().collect();

    let result = build_tree_from_templates(temp_dir.path(), &options);

    assert!(matches!(result, Err(Error::NameCollisionError { ref name, .. }) if name == "same"));
}

#[test_log::test]
fn test_marker_only_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "docs/template", "");

    let result = build_tree_from_templates(temp_dir.path(), &Options::new());

    assert!(matches!(result, Err(Error::EmptyNameError { ref original }) if original == "template"));
}

#[test_log::test]
fn test_extend_merges_over_host_structure() {
    let templates = sample_templates();
    let mut base = Tree::new();
    base.insert(
        "Dockerfile",
        Node::File(Leaf::from_template(Template::new("old"), WritePolicy::NoOverwrite)),
    );
    base.insert(
        "setup.cfg",
        Node::File(Leaf::generated(|opts| format!("name = {}", opts.get("package").unwrap_or("")), WritePolicy::Create)),
    );
    base.dir_entry("src")
        .unwrap()
        .insert("conftest.py", Node::File(Leaf::from_template(Template::new(""), WritePolicy::Create)));

    let options = package_options();
    let tree = TreeBuilder::new(templates.path()).extend(base, &options).unwrap();

    assert_eq!(tree.leaf_at("Dockerfile").unwrap().contents(&options), "FROM python:3.11\n");
    assert_eq!(tree.leaf_at("setup.cfg").unwrap().contents(&options), "name = eric-ext");
    assert!(tree.leaf_at("src/conftest.py").is_some());
    assert!(tree.leaf_at("src/eric-ext/sub_package/__init__.py").is_some());
}

#[test_log::test]
fn test_structure_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/template.md", "# $title\n");

    let tree = build_tree_from_templates(temp_dir.path(), &Options::new()).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"a": {"md": {"content": "# $title\n", "policy": "create"}}})
    );
}
