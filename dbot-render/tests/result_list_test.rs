//! Scenario tests for [`dbot_render::build_result_list`] and the public renderers.
//!
//! Covers: meaning caps on "hello", slang-only slot limits, not-found, detailed gating,
//! description length, escaping and determinism.

use dbot_core::{
    Definition, DictionaryEntry, LexicalSense, LookupResult, Meaning, PartOfSpeech, SlangEntry,
};
use dbot_render::{
    build_result_list, escape_html, render_basic, render_brief, render_detailed, RenderSettings,
    MAX_BODY_CHARS, MAX_RESULTS, PRIMARY_SLOTS,
};

fn meaning(pos: &str, definitions: usize) -> Meaning {
    Meaning {
        part_of_speech: pos.to_string(),
        definitions: (1..=definitions)
            .map(|i| Definition {
                text: format!("{pos} sense {i} of the word, explained at some length"),
                example: Some(format!("an example for {pos} {i}")),
            })
            .collect(),
        synonyms: vec![format!("{pos}-syn")],
        antonyms: Vec::new(),
    }
}

fn hello_entry() -> DictionaryEntry {
    DictionaryEntry {
        word: "hello".to_string(),
        phonetic: Some("/həˈləʊ/".to_string()),
        audio_url: Some("https://audio.test/hello.mp3".to_string()),
        etymology: Some("Alteration of hallo".to_string()),
        meanings: vec![
            meaning("noun", 3),
            meaning("verb", 3),
            meaning("exclamation", 3),
            meaning("interjection", 3),
        ],
    }
}

fn slang_entries(count: usize) -> Vec<SlangEntry> {
    (0..count)
        .map(|i| SlangEntry {
            word: format!("zzzznotaword {i}"),
            definition: format!("made-up [slang] number {i}"),
            example: None,
            thumbs_up: i as i64,
            thumbs_down: 0,
            author: "tester".to_string(),
            permalink: None,
        })
        .collect()
}

fn lexical_sense(pos: PartOfSpeech, definition: &str) -> LexicalSense {
    LexicalSense {
        part_of_speech: pos,
        definition: definition.to_string(),
        examples: Vec::new(),
        synonyms: Vec::new(),
        antonyms: Vec::new(),
        hypernyms: Vec::new(),
        hyponyms: Vec::new(),
        domains: Vec::new(),
    }
}

/// **Test: "hello" with 4 meanings shows exactly 3 meanings with at most 2 definitions each.**
#[test]
fn test_hello_basic_shows_three_meanings() {
    let result = LookupResult::Dictionary {
        entry: hello_entry(),
        slang: Vec::new(),
    };
    let basic = render_basic(&result, "hello").unwrap();

    assert!(basic.contains("<b>noun</b>"));
    assert!(basic.contains("<b>verb</b>"));
    assert!(basic.contains("<b>exclamation</b>"));
    assert!(!basic.contains("<b>interjection</b>"));
    assert_eq!(basic.matches("1. ").count(), 3);
    assert_eq!(basic.matches("2. ").count(), 3);
    assert!(!basic.contains("3. "));

    let results = build_result_list(&result, "hello", &RenderSettings::default());
    assert_eq!(results[0].id, "1");
    assert_eq!(results[0].title, "📚 Hello • /həˈləʊ/");
    assert_eq!(results[0].body, basic);
    assert!(results[0].link_preview);
}

/// **Test: Detailed is listed second only when it is more than 1.2x the basic length.**
#[test]
fn test_detailed_offered_when_longer() {
    let result = LookupResult::Dictionary {
        entry: hello_entry(),
        slang: Vec::new(),
    };
    let results = build_result_list(&result, "hello", &RenderSettings::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].id, "2");
    assert_eq!(results[1].title, "ℹ️ Detailed information for 'Hello'");
    assert_eq!(Some(results[1].body.clone()), render_detailed(&result, "hello"));

    let short = LookupResult::Dictionary {
        entry: DictionaryEntry {
            meanings: vec![meaning("noun", 1)],
            etymology: None,
            ..hello_entry()
        },
        slang: Vec::new(),
    };
    let results = build_result_list(&short, "hello", &RenderSettings::default());
    assert_eq!(results.len(), 1);
}

/// **Test: Slang-only lookup with 25 entries yields no primary result and min(18, cap) slang.**
#[test]
fn test_slang_only_respects_caps() {
    let result = LookupResult::SlangOnly {
        slang: slang_entries(25),
    };

    for cap in [5, 10, 18, 50] {
        let settings = RenderSettings {
            max_slang_results: cap,
            ..RenderSettings::default()
        };
        let results = build_result_list(&result, "zzzznotaword", &settings);
        assert_eq!(results.len(), cap.min(MAX_RESULTS - PRIMARY_SLOTS));
        assert!(results.len() <= MAX_RESULTS);
        assert!(results.iter().all(|r| r.id.starts_with("slang_")));
        assert_eq!(results[0].title, "🏙️ zzzznotaword 0 (Urban #1)");
        assert!(results.iter().all(|r| !r.link_preview));
    }
}

/// **Test: Primary results plus a large slang list never exceed the result cap.**
#[test]
fn test_total_never_exceeds_max() {
    let result = LookupResult::Dictionary {
        entry: hello_entry(),
        slang: slang_entries(40),
    };
    let settings = RenderSettings {
        max_slang_results: 100,
        ..RenderSettings::default()
    };
    let results = build_result_list(&result, "hello", &settings);
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results[2].id, "slang_0");
}

/// **Test: Not found yields exactly one result.**
#[test]
fn test_not_found_single_result() {
    let results = build_result_list(
        &LookupResult::NotFound,
        "zzzznotaword",
        &RenderSettings::default(),
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "❌ Word not found");
    assert_eq!(
        results[0].description,
        "No definition found for 'zzzznotaword'"
    );
}

/// **Test: Lexical primary result is tagged "(Lexical)" in title and body.**
#[test]
fn test_lexical_header() {
    let result = LookupResult::Lexical {
        senses: vec![
            lexical_sense(PartOfSpeech::Noun, "first"),
            lexical_sense(PartOfSpeech::Noun, "second"),
        ],
        slang: Vec::new(),
    };
    let results = build_result_list(&result, "dog", &RenderSettings::default());
    assert_eq!(results[0].title, "📚 Dog (Lexical)");
    assert!(results[0].body.starts_with("📚 <b>Dog</b> (Lexical)\n"));
    assert_eq!(results[0].description, "first");
}

/// **Test: Every description fits in 100 characters and contains no brackets.**
#[test]
fn test_descriptions_are_short_and_plain() {
    let mut entry = hello_entry();
    entry.meanings[0].definitions[0].text = format!("[{}]", "long ".repeat(60));
    let result = LookupResult::Dictionary {
        entry,
        slang: slang_entries(3),
    };
    assert!(render_brief(&result, "hello").chars().count() <= 100);
    for r in build_result_list(&result, "hello", &RenderSettings::default()) {
        assert!(r.description.chars().count() <= 100, "{}", r.description);
        assert!(!r.description.contains('[') && !r.description.contains(']'));
    }
}

/// **Test: Markup in source text is escaped and escaping is idempotent.**
#[test]
fn test_script_is_escaped() {
    let mut entry = hello_entry();
    entry.meanings[0].definitions[0].text = "<script>alert(1)</script> &lt;ok&gt;".to_string();
    let result = LookupResult::Dictionary {
        entry,
        slang: Vec::new(),
    };
    let basic = render_basic(&result, "hello").unwrap();
    assert!(basic.contains("&lt;script&gt;alert(1)&lt;/script&gt; &lt;ok&gt;"));
    assert!(!basic.contains("&amp;lt;"));
    assert_eq!(escape_html("&lt;script&gt;"), "&lt;script&gt;");
}

/// **Test: Rendering the same lookup twice is byte-identical.**
#[test]
fn test_rendering_is_deterministic() {
    let result = LookupResult::Dictionary {
        entry: hello_entry(),
        slang: slang_entries(5),
    };
    let settings = RenderSettings::default();
    assert_eq!(
        build_result_list(&result, "hello", &settings),
        build_result_list(&result, "hello", &settings)
    );
}

/// **Test: Huge entries and slang definitions are clipped to the message limit with balanced tags.**
#[test]
fn test_bodies_fit_message_limit() {
    let mut entry = hello_entry();
    entry.meanings = ["noun", "verb", "adjective", "adverb"]
        .iter()
        .map(|pos| Meaning {
            part_of_speech: pos.to_string(),
            definitions: (1..=20)
                .map(|i| Definition {
                    text: format!("{pos} definition {i} {}", "with plenty of words ".repeat(4)),
                    example: Some(format!("an example sentence for {pos} number {i}")),
                })
                .collect(),
            synonyms: vec![format!("{pos}-syn")],
            antonyms: Vec::new(),
        })
        .collect();

    let mut slang = slang_entries(2);
    slang[0].definition = "long [story] ".repeat(400);
    let result = LookupResult::Dictionary { entry, slang };

    let results = build_result_list(&result, "hello", &RenderSettings::default());
    assert_eq!(results[1].id, "2");
    assert!(results[1].body.ends_with("\n..."));
    assert!(results[2].body.ends_with('\u{200B}'));

    for r in &results {
        assert!(r.body.chars().count() <= MAX_BODY_CHARS, "{} is too long", r.id);
        for (open, close) in [("<b>", "</b>"), ("<i>", "</i>"), ("<a ", "</a>")] {
            assert_eq!(r.body.matches(open).count(), r.body.matches(close).count(), "{}", r.id);
        }
    }
}
