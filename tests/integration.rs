use message_lens::{
    analyze, analyze_perspective, analyze_sentiment, analyze_text, detect_biases,
    BiasPatternTable, Dimension, DiscussionSummary, EngineConfig, MessageAnalyzer,
};

const SAMPLES: &[&str] = &[
    "",
    "Hello world.",
    "I strongly disagree with this; it's a terrible mistake.",
    "The data clearly shows, based on evidence, that this is correct.",
    "Not bad at all, really great work! Very very good.",
    "I feel like my gut says we should imagine something creative, therefore we evaluate.",
    "no no no never nothing",
    "Ünïcödé wörds ñot göod?",
];

#[test]
fn sentiment_stays_in_range() {
    for text in SAMPLES {
        let s = analyze_sentiment(text);
        assert!((-1.0..=1.0).contains(&s), "{text:?} scored {s}");
    }
    assert_eq!(analyze_sentiment(""), 0.0);
}

#[test]
fn negation_flips_sign() {
    assert!(analyze_sentiment("good") > 0.0);
    assert!(analyze_sentiment("not good") < 0.0);
}

#[test]
fn intensifier_must_come_first() {
    let plain = analyze_sentiment("good");
    let boosted = analyze_sentiment("very good");
    assert!(boosted > 0.0 && plain > 0.0);
    assert!(boosted.abs() >= plain.abs());
    assert_eq!(analyze_sentiment("good very"), plain);
}

#[test]
fn perspective_is_a_distribution() {
    for text in SAMPLES {
        let v = analyze_perspective(text);
        assert_eq!(v.values.len(), 4);
        assert_eq!(v.dimensions.len(), 4);
        let total: f64 = v.values.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "{text:?} summed to {total}");
        assert!(v.values.iter().all(|x| *x >= 0.0));
    }
    assert_eq!(analyze_perspective("").values, vec![0.25, 0.25, 0.25, 0.25]);
}

#[test]
fn factual_message_leans_factual() {
    let v = analyze_perspective("The data clearly shows, based on evidence, that this is correct.");
    let factual = v.value(Dimension::Factual);
    for d in [Dimension::Emotional, Dimension::Logical, Dimension::Intuitive] {
        assert!(factual > v.value(d));
    }
}

#[test]
fn disagreement_scenario() {
    let text = "I strongly disagree with this; it's a terrible mistake.";
    assert!(analyze_sentiment(text) < 0.0);

    let table = BiasPatternTable::new([("Confirmation Bias", ["disagree"])]).unwrap();
    let found = detect_biases(text, &table);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Confirmation Bias");
    assert_eq!(found[0].confidence, 0.2);
    assert_eq!(found[0].evidence, "disagree");
}

#[test]
fn findings_respect_threshold_and_formula() {
    let table = BiasPatternTable::new([
        ("Groupthink", vec!["we all", "everyone"]),
        ("Anchoring Bias", vec!["first number"]),
        ("Status Quo Bias", vec!["as always"]),
    ])
    .unwrap();
    let text = "We all agree, everyone does, we all know the first number was right. \
                We all, we all, everyone.";
    for finding in detect_biases(text, &table) {
        assert!(finding.confidence > 0.1);
        let matches = finding.evidence.split(", ").count();
        let expected = ((0.2 * matches as f64).min(0.9) * 100.0).round() / 100.0;
        assert_eq!(finding.confidence, expected, "{}", finding.name);
    }
    let names: Vec<String> = detect_biases(text, &table)
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["Groupthink", "Anchoring Bias"]);
}

#[test]
fn analyzers_are_idempotent() {
    let table = BiasPatternTable::seeded();
    for text in SAMPLES {
        assert_eq!(
            analyze_sentiment(text).to_bits(),
            analyze_sentiment(text).to_bits()
        );
        assert_eq!(analyze_perspective(text), analyze_perspective(text));
        assert_eq!(analyze_text(text, &table), analyze_text(text, &table));
        assert_eq!(analyze(text), analyze(text));
    }
}

#[test]
fn record_json_shape() {
    let analyzer = MessageAnalyzer::default();
    let record = analyzer
        .analyze_message(
            "7c1d",
            "There is a lack of dissent here and I feel great about it.",
        )
        .unwrap();
    let json = serde_json::to_string_pretty(&record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("id").is_some());
    assert_eq!(parsed["message_id"], "7c1d");
    assert!(parsed["sentiment_score"].as_f64().unwrap() > 0.0);
    assert_eq!(
        parsed["perspective_vector"]["dimensions"],
        serde_json::json!(["factual", "emotional", "logical", "intuitive"])
    );
    assert_eq!(parsed["detected_biases"]["biases"][0]["name"], "Groupthink");
    assert!(parsed["analyzed_at"].is_string());
}

#[test]
fn configured_engine_end_to_end() {
    let config = EngineConfig::from_toml_str(
        r#"
max_text_len = 200

[sentiment]
positive = ["solid"]

[[bias]]
name = "Sunk Cost"
patterns = ["already (spent|invested)"]
"#,
    )
    .unwrap();
    let analyzer = config.build().unwrap();

    let record = analyzer
        .analyze_message("m1", "We already spent too much; the plan is solid.")
        .unwrap();
    assert_eq!(record.sentiment_score, 1.0);
    assert_eq!(record.biases().len(), 1);
    assert_eq!(record.biases()[0].evidence, "spent");

    let long = "word ".repeat(100);
    assert!(analyzer.analyze_message("m2", &long).is_err());
}

#[test]
fn discussion_roll_up() {
    let analyzer = MessageAnalyzer::default();
    let records: Vec<_> = [
        "Unanimous decisions again, great.",
        "Another case of unanimous decisions and lack of dissent, unanimous decisions.",
        "The data is verified.",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| analyzer.analyze_message(&i.to_string(), text).unwrap())
    .collect();

    let summary = DiscussionSummary::from_records("disc-1", 4, &records);
    assert_eq!(summary.message_count, 4);
    assert_eq!(summary.analyzed_messages, 3);
    let total: f64 = summary.mean_perspective.values.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    // only the second message has Groupthink above 0.3 (three matches)
    assert_eq!(summary.top_biases.len(), 1);
    assert_eq!(summary.top_biases[0].name, "Groupthink");
    assert_eq!(summary.top_biases[0].occurrences, 1);
}
