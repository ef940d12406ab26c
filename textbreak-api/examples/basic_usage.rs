//! Basic usage of the textbreak API

use textbreak_api::{
    analyze_text, AttributeOptions, Config, Input, Segmenter, SegmentKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function
    println!("=== Sentences ===");
    let output = analyze_text("Hello world. This is a test. How are you?")?;
    for (i, sentence) in output.sentences().iter().enumerate() {
        println!("  {}: {:?} (units {}..{})", i + 1, sentence.text, sentence.start, sentence.end);
    }
    println!("Analysis took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: embedded tailoring
    println!("=== English tailoring ===");
    let segmenter = Segmenter::with_tailoring("en")?;
    let output = segmenter.analyze_text("Dr. Smith met Mr. Jones at 3 p.m. sharp. They talked.")?;
    println!("Found {} sentences", output.sentences().len());

    // Method 3: line breaking only
    println!("\n=== Line-break opportunities ===");
    let config = Config::builder()
        .options(AttributeOptions::LINE_BREAKS)
        .tailoring("ja")
        .build()?;
    let segmenter = Segmenter::with_config(config)?;
    let output = segmenter.analyze_text("これは日本語のテキストです。ラーメンを食べた。")?;
    for opportunity in output.line_break_opportunities() {
        println!("  before unit {}: {}", opportunity.index, opportunity.kind);
    }

    // Method 4: batch analysis
    println!("\n=== Batch ===");
    let inputs = vec![
        Input::from_text("First document. Two sentences."),
        Input::from_bytes("Second 😀 document".as_bytes().to_vec()),
    ];
    for output in Segmenter::new().analyze_batch(inputs)? {
        let words = output
            .segments(SegmentKind::Word)
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .count();
        println!("  {} units, {} words", output.len(), words);
    }

    Ok(())
}
