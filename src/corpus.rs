use ahash::AHashMap as HashMap;

use crate::core::WordId;
use crate::error::{LcsError, Result};

/// A reference word sequence interned into dense `WordId`s.
///
/// Words compare by exact string equality: no case folding or normalization.
#[derive(Debug, Clone)]
pub struct Corpus {
    vocab: HashMap<Box<str>, WordId>,
    lexicon: Vec<Box<str>>,
    ids: Vec<WordId>,
}

impl Corpus {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Corpus> {
        let mut vocab: HashMap<Box<str>, WordId> = HashMap::with_capacity((words.len() / 4).max(16));
        let mut lexicon: Vec<Box<str>> = Vec::new();
        let mut ids = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref();
            let id = match vocab.get(word) {
                Some(&id) => id,
                None => {
                    let next = Self::next_id(vocab.len())?;
                    vocab.insert(word.into(), next);
                    lexicon.push(word.into());
                    next
                }
            };
            ids.push(id);
        }

        Ok(Corpus { vocab, lexicon, ids })
    }

    // The top id is reserved for `WordId::UNKNOWN`.
    fn next_id(size: usize) -> Result<WordId> {
        match u32::try_from(size) {
            Ok(raw) if raw != WordId::UNKNOWN.0 => Ok(WordId(raw)),
            _ => Err(LcsError::VocabularyOverflow { size }),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.vocab.get(word).copied()
    }

    /// The word an id was interned from. `None` for `WordId::UNKNOWN`.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.lexicon.get(id.0 as usize).map(|w| &**w)
    }

    /// Map query words onto corpus ids. Words the corpus never contains become
    /// `WordId::UNKNOWN`.
    pub fn encode<S: AsRef<str>>(&self, query: &[S]) -> Vec<WordId> {
        query
            .iter()
            .map(|w| self.id_of(w.as_ref()).unwrap_or(WordId::UNKNOWN))
            .collect()
    }
}
