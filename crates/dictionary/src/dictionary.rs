use serde::{Deserialize, Serialize};

/// One entry returned by the dictionary service for a looked-up word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_urls: Option<Vec<String>>,
}

impl WordEntry {
    pub fn first_source_url(&self) -> Option<&str> {
        self.source_urls
            .as_ref()
            .and_then(|urls| urls.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Phonetic {
    /// The service sends `""` for phonetics without a transcription.
    pub fn display_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    /// The service sends `""` for phonetics without a recording.
    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_deref().filter(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[
      {
        "word": "hello",
        "phonetics": [
          {"audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-au.mp3",
           "sourceUrl": "https://commons.wikimedia.org/w/index.php?curid=75797336",
           "license": {"name": "BY-SA 4.0", "url": "https://creativecommons.org/licenses/by-sa/4.0"}},
          {"text": "/həˈləʊ/", "audio": ""}
        ],
        "meanings": [
          {
            "partOfSpeech": "exclamation",
            "definitions": [
              {"definition": "used as a greeting or to begin a phone conversation.",
               "example": "hello there, Katie!", "synonyms": [], "antonyms": []}
            ],
            "synonyms": ["hi"],
            "antonyms": []
          }
        ],
        "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
      }
    ]"#;

    #[test]
    fn decodes_service_payload() {
        let entries: Vec<WordEntry> = serde_json::from_str(HELLO).unwrap();
        let hello = &entries[0];
        assert_eq!(hello.word, "hello");
        assert_eq!(hello.meanings[0].part_of_speech, "exclamation");
        assert_eq!(
            hello.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert_eq!(hello.meanings[0].synonyms, vec!["hi".to_string()]);
        assert_eq!(hello.license.as_ref().unwrap().name, "CC BY-SA 3.0");
        assert_eq!(
            hello.first_source_url(),
            Some("https://en.wiktionary.org/wiki/hello")
        );
    }

    #[test]
    fn empty_phonetic_fields_are_absent() {
        let entries: Vec<WordEntry> = serde_json::from_str(HELLO).unwrap();
        let phonetics = &entries[0].phonetics;
        assert_eq!(phonetics[0].display_text(), None);
        assert!(phonetics[0].audio_url().is_some());
        assert_eq!(phonetics[1].display_text(), Some("/həˈləʊ/"));
        assert_eq!(phonetics[1].audio_url(), None);
    }

    #[test]
    fn optional_sections_default() {
        let entry: WordEntry = serde_json::from_str(
            r#"{"word": "x", "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "a letter"}]}]}"#,
        )
        .unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.license.is_none());
        assert_eq!(entry.first_source_url(), None);
        assert!(entry.meanings[0].definitions[0].synonyms.is_empty());
    }
}
