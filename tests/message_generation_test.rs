//! Integration tests for end-to-end commit message generation.

use auto_commit_msg::summary::{ActionCounts, summarize};
use auto_commit_msg::{
    ActionCategory, ChangeRecord, ClassifyError, LineFormat, MessageError, ParseError, aggregate,
    format_message, generate_message, generate_message_with_format,
};

#[test]
fn test_single_action_messages() {
    let cases = vec![
        ("A  foo.txt", "create 1 file"),
        ("M  foo.txt", "update 1 file"),
        ("D  foo.txt", "delete 1 file"),
        ("R  foo.txt -> bar.txt", "rename 1 file"),
        ("R  foo.txt -> bar/foo.txt", "move 1 file"),
        ("R  foo.txt -> bar/bazz.txt", "move and rename 1 file"),
    ];

    for (line, expected) in cases {
        assert_eq!(
            generate_message(&[line]).unwrap(),
            expected,
            "Failed for: {}",
            line
        );
    }
}

#[test]
fn test_mixed_status_output() {
    let output = "A  src/new.rs\nM  src/lib.rs\nM  Cargo.toml\nD  src/old.rs\nR  a.rs -> b.rs";
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        generate_message(&lines).unwrap(),
        "create 1 file, update 2 files, delete 1 file and rename 1 file"
    );
}

#[test]
fn test_mixed_diff_index_output() {
    let lines = [
        "M\tREADME.md",
        "R100\tsrc/util.rs\tsrc/helpers/util.rs",
        "R100\tsrc/io.rs\tsrc/helpers/io.rs",
        "A\tsrc/helpers/mod.rs",
    ];

    assert_eq!(
        generate_message_with_format(&lines, LineFormat::DiffIndex).unwrap(),
        "update 1 file, move 2 files and create 1 file"
    );
}

#[test]
fn test_message_order_follows_first_seen_action() {
    let forward = ["A  a.txt", "M  b.txt", "A  c.txt"];
    let reverse = ["M  b.txt", "A  c.txt", "A  a.txt"];

    assert_eq!(
        generate_message(&forward).unwrap(),
        "create 2 files and update 1 file"
    );
    assert_eq!(
        generate_message(&reverse).unwrap(),
        "update 1 file and create 2 files"
    );
}

#[test]
fn test_aggregate_many_of_one_action() {
    for n in 1..=5 {
        let records: Vec<ChangeRecord> = (0..n)
            .map(|i| ChangeRecord::new('M', format!("file{}.txt", i), ""))
            .collect();
        let counts = aggregate(&records).unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(ActionCategory::Update).unwrap().file_count, n);
    }
}

#[test]
fn test_format_message_from_counts() {
    let counts: ActionCounts = [
        ActionCategory::Create,
        ActionCategory::Update,
        ActionCategory::Update,
    ]
    .into_iter()
    .collect();

    assert_eq!(format_message(&counts), "create 1 file and update 2 files");
}

#[test]
fn test_errors_propagate() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(generate_message(&empty), Err(MessageError::EmptyInput));

    assert_eq!(
        generate_message(&["A  ok.txt", "D  "]),
        Err(MessageError::Parse(ParseError::InvalidInput(
            "D  ".to_string()
        )))
    );

    assert_eq!(
        generate_message(&["T  script.sh"]),
        Err(MessageError::Classify(
            ClassifyError::UnrecognizedStatusCode('T')
        ))
    );
}

#[test]
fn test_summarize_serializes_like_counts() {
    let counts = summarize(&["A  a.txt", "R  a.txt -> b/c.txt"], LineFormat::Auto).unwrap();
    let json = serde_json::to_value(&counts).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "create": { "fileCount": 1 },
            "move and rename": { "fileCount": 1 }
        })
    );
}
