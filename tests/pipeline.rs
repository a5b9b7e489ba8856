// generate sentences offline from two vocabulary sources
// combine them with a hand-written partial file
// ensure that the corpus document is consistent and blanks the right tokens

use std::path::{Path, PathBuf};

use serde_json::json;

use lexicorpus::{
    config::Config,
    io::read_json,
    pipelines::{CombinePipeline, GeneratePipeline, Pipeline, PlanPipeline, SentenceSource},
    types::CorpusDocument,
};

fn write(path: &Path, value: serde_json::Value) -> PathBuf {
    std::fs::write(path, value.to_string()).unwrap();
    path.to_path_buf()
}

#[test_log::test]
fn generate_then_combine() {
    let dir = tempfile::tempdir().unwrap();
    let curated = write(
        &dir.path().join("curated.json"),
        json!([
            {"word": "die Besprechung", "translations": {"en": "meeting", "pl": "spotkanie"}},
            {"word": "der Bahnhof", "translations": {"en": "station"}}
        ]),
    );
    let extra = write(
        &dir.path().join("extra.json"),
        json!({
            "das Rathaus": {"translations": {"en": "town hall"}},
            "der Bahnhof": {"translations": {"en": "train station"}}
        }),
    );
    let mut config = Config::default();
    config.corpus.domains = vec!["urban_planning".to_string()];
    config.corpus.sentences_per_word = 2;

    let generated = dir.path().join("partial_generated.json");
    let report = GeneratePipeline::new(
        vec![curated, extra, dir.path().join("missing.json")],
        generated.clone(),
        config.clone(),
        SentenceSource::Templates { seed: 2024 },
    )
    .run()
    .unwrap();
    // "der Bahnhof" is in both sources and is only generated once
    assert_eq!(report.words, 3);
    assert_eq!(report.sentences, 6);

    write(
        &dir.path().join("partial_manual.json"),
        json!({
            "die Besprechung": [
                {"sentence": "Wir hatten heute eine wichtige Besprechung im Büro.", "translation": "We had an important meeting at the office today."}
            ],
            "der Park": [
                {"sentence": "Der Park ist grün."},
                {"translation": "dropped"}
            ]
        }),
    );

    let dst = dir.path().join("corpus.json");
    let pattern = dir.path().join("partial_*.json").to_string_lossy().into_owned();
    let corpus = CombinePipeline::new(vec![pattern], dst.clone(), vec!["german_b2".to_string()], config)
        .run()
        .unwrap();

    let written: CorpusDocument = read_json(&dst).unwrap();
    assert_eq!(written, corpus);
    assert!(written.totals_consistent());
    assert_eq!(written.metadata.total_words, 4);
    assert_eq!(written.metadata.total_sentences, 6);
    assert_eq!(written.metadata.skipped.len(), 1);
    assert_eq!(written.metadata.source_files.len(), 2);

    // manual partial comes last and replaces the generated sentences
    let besprechung = &written.sentences["die Besprechung"];
    assert_eq!(besprechung.len(), 1);
    assert_eq!(besprechung[0].id, "de_besprechung_001");
    assert_eq!(besprechung[0].target_index, Some(5));
    assert_eq!(besprechung[0].blank, "Wir hatten heute eine wichtige _____ im Büro.");
    assert_eq!(besprechung[0].translation_language.as_deref(), Some("en"));

    for record in &written.sentences["das Rathaus"] {
        assert!(record.full.contains("das Rathaus"));
        assert!(record.blank.contains("_____"));
        assert_eq!(record.domain, "urban_planning");
    }
}

#[test]
fn plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let words: Vec<serde_json::Value> = (0..65).map(|i| json!({"word": format!("w{}", i)})).collect();
    let src = write(&dir.path().join("a1.json"), json!(words));
    let dst = dir.path().join("plan.json");

    PlanPipeline::new(vec![("german_a1".to_string(), src)], dst.clone(), 30)
        .run()
        .unwrap();

    let plan: serde_json::Value = read_json(&dst).unwrap();
    assert_eq!(plan["german_a1"]["total_words"], 65);
    assert_eq!(plan["german_a1"]["num_batches"], 3);
    assert_eq!(plan["german_a1"]["batches"][2].as_array().unwrap().len(), 5);
}
