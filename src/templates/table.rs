//! Hand-written sentence templates.
//!
//! `{word}` is replaced by the vocabulary word, `{translation}` by its translation.
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Templates keyed by language, then by domain.
    pub static ref TEMPLATES: HashMap<&'static str, HashMap<&'static str, Vec<&'static str>>> = {
        let mut m: HashMap<&'static str, HashMap<&'static str, Vec<&'static str>>> = HashMap::new();

        m.entry("de").or_default().insert("general", vec![
            "Ich habe heute das Wort „{word}“ ({translation}) gelernt.",
            "Kannst du mir „{word}“ erklären? Es bedeutet {translation}.",
            "Im Alltag hört man „{word}“ ({translation}) sehr oft.",
        ]);
        m.entry("de").or_default().insert("urban_planning", vec![
            "Bei der Stadtplanung spielt {word} ({translation}) eine wichtige Rolle.",
            "Der Gemeinderat diskutiert über {word} ({translation}).",
            "Ohne {word} ({translation}) kann das neue Viertel nicht entstehen.",
        ]);
        m.entry("de").or_default().insert("gastronomy", vec![
            "In diesem Restaurant ist {word} ({translation}) besonders beliebt.",
            "Der Koch erklärt uns {word} ({translation}).",
            "Zum Abendessen gibt es heute {word} ({translation}).",
        ]);

        m.entry("en").or_default().insert("general", vec![
            "Today I learned the word \"{word}\" ({translation}).",
            "Can you explain \"{word}\"? It means {translation}.",
            "You hear \"{word}\" ({translation}) quite often.",
        ]);
        m.entry("en").or_default().insert("urban_planning", vec![
            "In urban planning, {word} ({translation}) plays an important role.",
            "The city council is discussing {word} ({translation}).",
        ]);
        m.entry("en").or_default().insert("gastronomy", vec![
            "In this restaurant, {word} ({translation}) is very popular.",
            "The chef explains {word} ({translation}) to us.",
        ]);

        m.entry("es").or_default().insert("general", vec![
            "Hoy aprendí la palabra «{word}» ({translation}).",
            "¿Puedes explicarme «{word}»? Significa {translation}.",
        ]);
        m.entry("fr").or_default().insert("general", vec![
            "Aujourd'hui, j'ai appris le mot « {word} » ({translation}).",
            "Peux-tu m'expliquer « {word} » ? Cela veut dire {translation}.",
        ]);
        m.entry("it").or_default().insert("general", vec![
            "Oggi ho imparato la parola «{word}» ({translation}).",
            "Puoi spiegarmi «{word}»? Significa {translation}.",
        ]);

        m.entry("pl").or_default().insert("general", vec![
            "Dzisiaj nauczyłem się słowa „{word}” ({translation}).",
            "Czy możesz mi wyjaśnić „{word}”? To znaczy {translation}.",
            "Słowo „{word}” ({translation}) często się słyszy.",
        ]);
        m.entry("pl").or_default().insert("urban_planning", vec![
            "W planowaniu miasta {word} ({translation}) odgrywa ważną rolę.",
            "Rada miasta dyskutuje o: {word} ({translation}).",
        ]);
        m.entry("pl").or_default().insert("gastronomy", vec![
            "W tej restauracji {word} ({translation}) jest bardzo popularne.",
            "Kucharz wyjaśnia nam: {word} ({translation}).",
        ]);

        m.entry("fa").or_default().insert("general", vec![
            "امروز کلمهٔ «{word}» ({translation}) را یاد گرفتم.",
            "می‌توانی «{word}» را توضیح بدهی؟ یعنی {translation}.",
            "کلمهٔ «{word}» ({translation}) را زیاد می‌شنویم.",
        ]);
        m.entry("fa").or_default().insert("urban_planning", vec![
            "در برنامه‌ریزی شهری، {word} ({translation}) نقش مهمی دارد.",
            "شورای شهر دربارهٔ {word} ({translation}) بحث می‌کند.",
        ]);
        m.entry("fa").or_default().insert("gastronomy", vec![
            "در این رستوران {word} ({translation}) خیلی محبوب است.",
            "آشپز {word} ({translation}) را برای ما توضیح می‌دهد.",
        ]);

        m
    };
}

/// Templates of (`lang`, `domain`), if any.
pub fn lookup(lang: &str, domain: &str) -> Option<&'static [&'static str]> {
    TEMPLATES
        .get(lang)
        .and_then(|domains| domains.get(domain))
        .map(Vec::as_slice)
}

/// Sentence used when no template exists for a (language, domain) pair.
pub fn generic_sentence(word: &str) -> String {
    format!("Example sentence with \"{}\".", word)
}
