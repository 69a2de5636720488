use std::path::PathBuf;

use structproto::{
    GenerateError, GenerateOptions, OUTPUT_FILE_NAME, ProtoGenerator,
    core::{FeedError, PackageFailure, SourceField, SourcePackage, TypeDef, TypeFeed, TypeKind},
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn go_generator(packages: &[&str], filter: &str, annotations: bool) -> ProtoGenerator {
    ProtoGenerator::builder()
        .with_go_packages(
            fixtures_dir(),
            packages.iter().map(ToString::to_string).collect(),
        )
        .with_filter(filter)
        .with_annotations(annotations)
        .build()
        .expect("feed is configured")
}

struct FailingFeed;

impl TypeFeed for FailingFeed {
    fn load(&self) -> Result<Vec<SourcePackage>, FeedError> {
        Err(FeedError::PackageLoad {
            failures: vec![PackageFailure::new(
                "example/bad",
                vec!["model.go: parse error at line 3".to_string()],
            )],
        })
    }
}

const EXAMPLE_PROTO: &str = "\
syntax = \"proto3\";
package proto;

message ArrayOfEventField {
  repeated EventField eventField = 1;
}

message ArrayOfEventFieldItem {
  repeated EventFieldItem eventFieldItem = 1;
}

message EventField {
  string id = 1;
  string name = 2;
  string fieldType = 3;
  bool isMandatory = 4;
  int32 rank = 5;
  string tag = 6;
  ArrayOfEventFieldItem items = 7;
  int32 customFieldOrder = 8;
}

message EventFieldItem {
  string id = 1;
  string text = 2;
  int32 rank = 3;
}

message EventSubForm {
  string id = 1;
  string caption = 2;
  int32 rank = 3;
  ArrayOfEventField fields = 4;
}
";

#[test]
fn generates_example_package() {
    let text = go_generator(&["example/in"], "", false)
        .generate()
        .expect("generation should succeed");
    assert_eq!(text, EXAMPLE_PROTO);
}

#[test]
fn generation_is_deterministic() {
    let generator = go_generator(&["example/in", "users"], "", true);
    let first = generator.generate().expect("first run");
    let second = generator.generate().expect("second run");
    assert_eq!(first, second);
}

#[test]
fn first_package_wins_for_duplicate_names() {
    let document = go_generator(&["example/in", "users"], "", false)
        .document()
        .expect("document should build");
    let names: Vec<&str> = document.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "ArrayOfEventField",
            "ArrayOfEventFieldItem",
            "EventField",
            "EventFieldItem",
            "EventSubForm",
            "User"
        ]
    );
    let event_field = &document[2];
    assert_eq!(event_field.fields.len(), 8);
}

#[test]
fn annotations_render_with_import() {
    let text = go_generator(&["example/in", "users"], "USER", true)
        .generate()
        .expect("generation should succeed");
    let expected = "\
syntax = \"proto3\";
package proto;
import \"tagger/tagger.proto\";

message User {
  string id = 1 [(tagger.tags) = \"json:\\\"id\\\"\"];
  string email = 2 [(tagger.tags) = \"json:\\\"email\\\"\"];
  repeated string roles = 3;
}
";
    assert_eq!(text, expected);
}

#[test]
fn annotations_disabled_omit_tags_and_import() {
    let text = go_generator(&["users"], "user", false)
        .generate()
        .expect("generation should succeed");
    assert!(!text.contains("import"));
    assert!(!text.contains("tagger.tags"));
    assert!(text.contains("  string id = 1;\n"));
}

#[test]
fn options_struct_matches_individual_setters() {
    let text = ProtoGenerator::builder()
        .with_go_packages(fixtures_dir(), vec!["users".to_string()])
        .with_options(GenerateOptions {
            filter: "user".to_string(),
            annotations: true,
        })
        .build()
        .expect("feed is configured")
        .generate()
        .expect("generation should succeed");
    let expected = go_generator(&["users"], "user", true)
        .generate()
        .expect("generation should succeed");
    assert_eq!(text, expected);
}

#[test]
fn custom_feed_is_used() {
    let feed = vec![SourcePackage::new(
        "memory",
        vec![TypeDef::new_struct(
            "Ping",
            true,
            vec![SourceField::new("Seq", true, TypeKind::Primitive, "int")],
        )],
    )];
    let text = ProtoGenerator::builder()
        .with_feed(feed)
        .build()
        .expect("feed is configured")
        .generate()
        .expect("generation should succeed");
    assert!(text.ends_with("message Ping {\n  int64 seq = 1;\n}\n"));
}

#[test]
fn builder_without_feed_fails() {
    assert!(matches!(
        ProtoGenerator::builder().build(),
        Err(GenerateError::NoFeed)
    ));
}

#[test]
fn write_to_dir_writes_output_proto() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = go_generator(&["example/in"], "", false)
        .write_to_dir(dir.path())
        .expect("write should succeed");
    assert_eq!(path, dir.path().join(OUTPUT_FILE_NAME));
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, EXAMPLE_PROTO);
}

#[test]
fn write_to_dir_rejects_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    let err = go_generator(&["example/in"], "", false)
        .write_to_dir(&missing)
        .expect_err("missing directory should fail");
    assert!(matches!(err, GenerateError::OutputDirMissing { ref path } if *path == missing));
}

#[test]
fn feed_failure_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let generator = ProtoGenerator::builder()
        .with_feed(FailingFeed)
        .build()
        .expect("feed is configured");
    let err = generator
        .write_to_dir(dir.path())
        .expect_err("feed failure should abort");
    assert!(matches!(err, GenerateError::Feed(_)));
    assert_eq!(
        err.to_string(),
        "error fetching package example/bad: model.go: parse error at line 3"
    );
    assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
}
