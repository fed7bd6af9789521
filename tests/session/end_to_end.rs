//! Full workflow against files on disk.

use super::common::{write_input, MIXED};
use acronymic::{
    read_input_file, run_session, AcronymIndex, Completer, Config, JsonSink, TextSink,
};
use std::fs::{self, File};
use std::io::BufWriter;

fn run_text(fragments: &[&str], config: &Config) -> String {
    let (dir, path) = write_input(MIXED, fragments);
    let input = read_input_file(&path, config).unwrap();
    let index = AcronymIndex::build(&input.vocabulary);
    let completer = Completer::new(&input.vocabulary, &index).with_max_hits(config.max_hits);

    let out_path = dir.path().join("Output.txt");
    let writer = BufWriter::new(File::create(&out_path).unwrap());
    run_session(input.fragments(), &completer, TextSink::new(writer, config)).unwrap();
    fs::read_to_string(&out_path).unwrap()
}

#[test]
fn test_text_output_matches_expected_layout() {
    let out = run_text(&["NYC", "cat", "zzz", "roc"], &Config::default());
    let expected = "\
[NYC]
new york city
nyc tours
[cat]
the cat sat
catalog
concatenate strings
[roc]
rate of change
return of capital
";
    assert_eq!(out, expected);
}

#[test]
fn test_custom_markers_and_cap() {
    let config = Config {
        max_hits: 1,
        start_marker: "<".to_string(),
        end_marker: ">".to_string(),
        ..Config::default()
    };
    let out = run_text(&["cat"], &config);
    assert_eq!(out, "<cat>\nthe cat sat\n");
}

#[test]
fn test_invalid_lines_never_reach_the_engine() {
    let (_dir, path) = write_input(&["good phrase", "bad phrase 2", "also-bad"], &["ph", "p2", "x"]);
    let input = read_input_file(&path, &Config::default()).unwrap();
    assert_eq!(input.vocabulary.iter().collect::<Vec<_>>(), vec!["good phrase"]);
    assert_eq!(input.fragments().collect::<Vec<_>>(), vec!["ph"]);
}

#[test]
fn test_json_output() {
    let (_dir, path) = write_input(MIXED, &["NYC", "qq"]);
    let input = read_input_file(&path, &Config::default()).unwrap();
    let index = AcronymIndex::build(&input.vocabulary);
    let completer = Completer::new(&input.vocabulary, &index);

    let mut buf = Vec::new();
    let stats = run_session(input.fragments(), &completer, JsonSink::new(&mut buf)).unwrap();
    assert_eq!(stats.fragments, 2);
    assert_eq!(stats.completed, 1);

    let line = String::from_utf8(buf).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["fragment"], "NYC");
    assert_eq!(value["hits"][0], "new york city");
    assert_eq!(value["hits"][1], "nyc tours");
}

#[test]
fn test_duplicate_fragments_complete_once() {
    let out = run_text(&["NYC", "NYC"], &Config::default());
    assert_eq!(out.matches("[NYC]").count(), 1);
}
