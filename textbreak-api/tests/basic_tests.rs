//! Basic tests for textbreak-api

use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use textbreak_api::*;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("Hello world.".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "Hello world.");
}

#[test]
fn test_input_bytes_processing() {
    let input = Input::from_bytes(b"Hello world.".to_vec());
    assert_eq!(input.read_text().unwrap(), "Hello world.");
}

#[test]
fn test_input_invalid_utf8() {
    let input = Input::from_bytes(vec![0x66, 0xFF, 0x6F]);
    assert!(matches!(input.read_text(), Err(ApiError::Utf8(_))));
}

#[test]
fn test_input_reader() {
    let input = Input::from_reader(Cursor::new("from a reader"));
    assert_eq!(input.read_text().unwrap(), "from a reader");
}

#[test]
fn test_input_missing_file() {
    let input = Input::from_file("/nonexistent/input.txt");
    assert!(matches!(input.read_text(), Err(ApiError::Io(_))));
}

#[test]
fn test_analyze_text_convenience() {
    let output = analyze_text("Hello world. This is a test.").unwrap();

    assert_eq!(output.len(), 28);
    assert_eq!(output.metadata.total_bytes, 28);
    assert_eq!(output.metadata.total_units, 28);
    assert_eq!(output.metadata.tailoring, None);
    assert_eq!(output.sentences().len(), 2);
    assert_eq!(
        output.metadata.options,
        vec!["grapheme_breaks", "word_breaks", "sentence_breaks", "line_breaks", "white_spaces"]
    );
}

#[test]
fn test_analyze_file_convenience() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "One. Two.").unwrap();
    let output = analyze_file(file.path()).unwrap();
    assert_eq!(output.sentences().len(), 2);
}

#[test]
fn test_utf16_metadata() {
    let output = analyze_text("a😀").unwrap();
    assert_eq!(output.metadata.total_bytes, 5);
    assert_eq!(output.metadata.total_units, 3);
    assert_eq!(output.metadata.total_chars, 2);
    assert!(!output.attributes[2].is_char_stop);
}

#[test]
fn test_empty_input() {
    let output = analyze_text("").unwrap();
    assert!(output.is_empty());
    assert!(output.words().is_empty());
}

#[test]
fn test_embedded_tailoring() {
    let text = "Dr. Jones called. She left.";
    let plain = analyze_text(text).unwrap();
    let english = analyze_text_with_tailoring(text, "en").unwrap();

    assert_eq!(plain.sentences().len(), 3);
    assert_eq!(english.sentences().len(), 2);
    assert_eq!(english.metadata.tailoring.as_deref(), Some("en"));
}

#[test]
fn test_unknown_tailoring() {
    let err = Segmenter::with_tailoring("xx").unwrap_err();
    assert!(matches!(err, ApiError::Core(_)));
    assert!(err.to_string().contains("xx"));
}

#[test]
fn test_default_algorithm_only() {
    let config = Config::builder()
        .tailoring("en")
        .default_algorithm_only(true)
        .build()
        .unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    assert_eq!(segmenter.active_tailoring(), None);

    let output = segmenter.analyze_text("Dr. Jones called.").unwrap();
    assert_eq!(output.sentences().len(), 2);
}

#[test]
fn test_tailoring_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[metadata]\ncode = \"house\"\nname = \"House style\"\n\n[abbreviations]\nmisc = [\"approx\"]"
    )
    .unwrap();

    let config = Config::builder().tailoring_file(file.path()).build().unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    assert_eq!(segmenter.active_tailoring(), Some("house"));

    let output = segmenter.analyze_text("It is approx. Ten.").unwrap();
    assert_eq!(output.sentences().len(), 1);
}

#[test]
fn test_options_limit_passes() {
    let config = Config::builder()
        .options(AttributeOptions::LINE_BREAKS)
        .build()
        .unwrap();
    let output = Segmenter::with_config(config)
        .unwrap()
        .analyze_text("Hello world. Bye.")
        .unwrap();
    assert!(output.attributes.iter().all(|a| !a.is_sentence_boundary));
    assert_eq!(output.line_break_opportunities().len(), 2);
}

#[test]
fn test_batch_keeps_order() {
    let texts: Vec<String> = (0..20).map(|i| format!("Item {i}. Done.")).collect();
    let segmenter = Segmenter::new();
    let inputs = texts.iter().map(|t| Input::from_text(t.as_str())).collect();
    let outputs = segmenter.analyze_batch(inputs).unwrap();

    assert_eq!(outputs.len(), texts.len());
    for (output, text) in outputs.iter().zip(&texts) {
        assert_eq!(&output.text, text);
        assert_eq!(output.sentences().len(), 2);
    }
}

#[test]
fn test_batch_matches_single() {
    let config = Config::builder().parallel_threshold(0).build().unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    let text = "Ünïcödé text, 日本語の文。 Emoji 😀!";

    let single = segmenter.analyze_text(text).unwrap();
    let batch = segmenter
        .analyze_batch(vec![Input::from_text(text), Input::from_text(text)])
        .unwrap();
    for output in batch {
        assert_eq!(output.attributes, single.attributes);
    }
}

#[test]
fn test_batch_fails_on_bad_input() {
    let inputs = vec![
        Input::from_text("fine"),
        Input::from_bytes(vec![0xFF]),
    ];
    assert!(Segmenter::new().analyze_batch(inputs).is_err());
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = analyze_text("Hi there.").unwrap();
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"is_char_stop\""));

    let restored: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.attributes, output.attributes);
    assert_eq!(restored.text, output.text);
}

#[test]
#[cfg(feature = "serde")]
fn test_output_to_json() {
    let output = analyze_text("Hi there.").unwrap();
    let json = output.to_json().unwrap();
    assert!(json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["text"], "Hi there.");
    assert_eq!(value["attributes"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["metadata"]["total_units"], 9);
}

#[test]
#[cfg(feature = "serde")]
fn test_segment_serialization() {
    let output = analyze_text("Hi there.").unwrap();
    let json = serde_json::to_value(output.words()).unwrap();
    assert_eq!(json[0]["kind"], "word");
    assert_eq!(json[0]["text"], "Hi");
    assert_eq!(json[0]["byte_end"], 2);
}
