use std::path::PathBuf;

use structproto_core::{FeedError, SourceField, SourcePackage, TypeDef, TypeFeed, TypeKind};
use structproto_gosrc::GoSourceFeed;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load(packages: &[&str]) -> Result<Vec<SourcePackage>, FeedError> {
    GoSourceFeed::new(
        fixtures_dir(),
        packages.iter().map(ToString::to_string).collect(),
    )
    .load()
}

fn find<'a>(package: &'a SourcePackage, name: &str) -> &'a TypeDef {
    package
        .types
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("type {name} should be present"))
}

fn field<'a>(def: &'a TypeDef, name: &str) -> &'a SourceField {
    def.struct_fields()
        .expect("struct-shaped type")
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("field {name} should be present"))
}

#[test]
fn loads_example_package_in_declaration_order() {
    let packages = load(&["example/in"]).expect("example package should load");
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].path, "example/in");

    let names: Vec<&str> = packages[0].types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "EventSubForm",
            "ArrayOfEventField",
            "EventField",
            "ArrayOfEventFieldItem",
            "EventFieldItem"
        ]
    );

    let sub_form = find(&packages[0], "EventSubForm");
    let fields = field(sub_form, "Fields");
    assert_eq!(fields.kind, TypeKind::Pointer);
    assert_eq!(fields.raw_type, "*in.ArrayOfEventField");

    let rank = field(sub_form, "Rank");
    assert_eq!(rank.kind, TypeKind::Primitive);
    assert_eq!(rank.raw_type, "int32");

    let array = find(&packages[0], "ArrayOfEventField");
    let items = field(array, "EventField");
    assert_eq!(items.kind, TypeKind::Slice);
    assert_eq!(items.raw_type, "[]*in.EventField");
}

#[test]
fn resolves_underlying_types_and_tags() {
    let packages = load(&["tagged"]).expect("tagged package should load");
    let account = find(&packages[0], "Account");
    assert!(account.exported);

    let id = field(account, "ID");
    assert_eq!(id.annotation.as_deref(), Some(r#"json:"id""#));

    let password = field(account, "password");
    assert!(!password.exported);

    let created = field(account, "Created");
    assert_eq!(created.kind, TypeKind::StructRef);
    assert_eq!(created.raw_type, "time.Time");

    let state = field(account, "State");
    assert_eq!(state.kind, TypeKind::Primitive);
    assert_eq!(state.raw_type, "string");

    let friends = field(account, "Friends");
    assert_eq!(friends.kind, TypeKind::Slice);
    assert_eq!(friends.raw_type, "[]int");

    let tags = field(account, "Tags");
    assert_eq!(tags.kind, TypeKind::Unknown);
    assert_eq!(tags.raw_type, "map[string]string");

    let base = field(account, "Base");
    assert_eq!(base.kind, TypeKind::StructRef);
    assert_eq!(base.raw_type, "tagged.Base");

    assert_eq!(field(account, "X").raw_type, "int");
    assert_eq!(field(account, "Y").raw_type, "int");
}

#[test]
fn defined_struct_types_share_their_fields() {
    let packages = load(&["tagged"]).expect("tagged package should load");
    let account = find(&packages[0], "Account");
    let snapshot = find(&packages[0], "Snapshot");
    assert_eq!(snapshot.struct_fields(), account.struct_fields());

    assert!(find(&packages[0], "Status").struct_fields().is_none());
    assert!(find(&packages[0], "Reader").struct_fields().is_none());
    assert_eq!(find(&packages[0], "Empty").struct_fields(), Some(&[][..]));
    assert!(!find(&packages[0], "internal").exported);
}

#[test]
fn test_files_are_ignored() {
    // user_test.go is not valid Go; loading succeeds only if it is skipped.
    assert!(load(&["tagged"]).is_ok());
}

#[test]
fn all_failing_packages_are_reported() {
    let err = load(&["example/in", "broken", "missing", "mixed", "empty"])
        .expect_err("broken packages should fail the load");
    let FeedError::PackageLoad { failures } = &err;

    let failed: Vec<&str> = failures.iter().map(|f| f.package.as_str()).collect();
    assert_eq!(failed, vec!["broken", "missing", "mixed", "empty"]);

    let broken = &failures[0];
    assert_eq!(broken.messages.len(), 2);
    assert!(broken.messages[0].starts_with("bad.go: parse error at line 4"));
    assert!(broken.messages[1].contains("generic type `List`"));

    assert!(failures[2].messages[0].contains("found packages mixed (a.go) and other (b.go)"));
    assert!(failures[3].messages[0].starts_with("no Go files in"));

    let text = err.to_string();
    assert!(text.starts_with("error fetching package broken: "));
    assert!(text.contains("; error fetching package missing: "));
}
