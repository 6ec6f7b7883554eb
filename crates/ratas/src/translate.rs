// Symbol translation: an independent post-processing pass.

use hashbrown::HashSet;

use crate::RatasError;

/// Translation table mapping single input symbols to output fragments.
///
/// Translation is fully decoupled from traversal: it operates on an
/// arbitrary string (conventionally the run's original input) and never
/// consults a configuration or an acceptance verdict.
///
/// Lookup is first-match in declaration order. A character contributes
/// the fragment of the first entry whose key equals it, provided the
/// fragment is non-empty and a member of the declared output alphabet;
/// otherwise the character is skipped. Both the tie-break and the
/// skip-on-epsilon behavior are deliberate fixed choices. Keys longer
/// than one symbol are rejected at construction rather than given
/// unspecified meaning.
#[derive(Debug, Clone)]
pub struct Translator {
    entries: Vec<(char, String)>,
    output_alphabet: HashSet<String>,
}

impl Translator {
    /// Build a translator from `(key, fragment)` pairs in declaration
    /// order and the declared output alphabet.
    pub fn new<K, F, O>(entries: K, output_alphabet: O) -> Result<Self, RatasError>
    where
        K: IntoIterator<Item = (F, String)>,
        F: Into<String>,
        O: IntoIterator<Item = String>,
    {
        let mut checked = Vec::new();
        for (key, fragment) in entries {
            let key: String = key.into();
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => checked.push((c, fragment)),
                _ => return Err(RatasError::BadTranslationKey { key }),
            }
        }
        Ok(Self {
            entries: checked,
            output_alphabet: output_alphabet.into_iter().collect(),
        })
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate `text` character by character.
    ///
    /// Pure function of the table and the text: the empty string
    /// translates to the empty string, and so does any text with no
    /// applicable entries.
    pub fn translate(&self, text: &str) -> String {
        let mut output = String::new();
        for ch in text.chars() {
            if let Some(fragment) = self.lookup(ch) {
                output.push_str(fragment);
            }
        }
        output
    }

    /// Usable fragment for one character, if any.
    ///
    /// The first entry whose key equals the character *is* the lookup;
    /// if its fragment is epsilon or outside the output alphabet the
    /// character is skipped, with no fall-through to later entries.
    fn lookup(&self, ch: char) -> Option<&str> {
        let (_, fragment) = self.entries.iter().find(|(key, _)| *key == ch)?;
        if fragment.is_empty() || !self.output_alphabet.contains(fragment) {
            return None;
        }
        Some(fragment.as_str())
    }
}
