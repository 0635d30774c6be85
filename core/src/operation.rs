//! Static catalogue of the Wortschatz lookup operations.
//!
//! # Design
//! Every remote capability is described once by an `Operation` value: the
//! public name, the service endpoint it is posted to, its parameter
//! signature, an optional result filter and whether it can be called at all.
//! The client and facade are generic over this descriptor, so adding an
//! operation means adding a row here and nothing else.

use std::fmt;

use crate::args::{Argument, Param};
use crate::response::ResultFilter;

/// Corpus selector sent with every request.
pub const CORPUS: &str = "de";

/// Result-count limit used when the caller does not give one.
pub const DEFAULT_LIMIT: i64 = 10;

const WORD: Param = Param::text("Wort");
const LIMIT: Param = Param::integer("Limit", DEFAULT_LIMIT);

const WORD_ONLY: &[Param] = &[WORD];
const WORD_LIMIT: &[Param] = &[WORD, LIMIT];
// Wordforms is the only service keyed by `Word` instead of `Wort`.
const WORDFORM_LIMIT: &[Param] = &[Param::text("Word"), LIMIT];
const PATTERN_LIMIT: &[Param] = &[Param::text("Pattern"), LIMIT];
const COLLOCATION: &[Param] = &[WORD, Param::text_or_integer("Wortart"), LIMIT];
const COOCCURRENCE: &[Param] = &[WORD, Param::text_or_integer("Mindestsignifikanz"), LIMIT];
const INTERSECTION: &[Param] = &[
    Param::text("Wort 1"),
    Param::text_or_integer("Wort 2"),
    LIMIT,
];
const CROSSWORD: &[Param] = &[WORD, Param::text_or_integer("Wortlaenge"), LIMIT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Requires credentials for a restricted corpus slice that this client
    /// will never have.
    Disabled,
}

/// Descriptor of one remote lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    /// Endpoint key appended to the service base URL, e.g. `Baseform`.
    pub service: &'static str,
    pub params: &'static [Param],
    pub filter: Option<ResultFilter>,
    pub availability: Availability,
}

impl Operation {
    /// Find a catalogue entry by its public name.
    pub fn lookup(name: &str) -> Option<&'static Operation> {
        CATALOGUE.iter().find(|op| op.name == name)
    }

    /// Total number of parameters, including defaulted ones.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Number of leading parameters without a default.
    pub fn required_arity(&self) -> usize {
        self.params.iter().take_while(|p| p.default.is_none()).count()
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

const fn available(
    name: &'static str,
    service: &'static str,
    params: &'static [Param],
) -> Operation {
    Operation {
        name,
        service,
        params,
        filter: None,
        availability: Availability::Available,
    }
}

const fn disabled(
    name: &'static str,
    service: &'static str,
    params: &'static [Param],
) -> Operation {
    Operation {
        name,
        service,
        params,
        filter: None,
        availability: Availability::Disabled,
    }
}

pub static CATALOGUE: &[Operation] = &[
    // One parameter.
    available("frequencies", "Frequencies", WORD_ONLY),
    available("baseform", "Baseform", WORD_ONLY),
    available("domain", "Sachgebiet", WORD_ONLY),
    // Two parameters.
    available("wordforms", "Wordforms", WORDFORM_LIMIT),
    available("thesaurus", "Thesaurus", WORD_LIMIT),
    Operation {
        filter: Some(ResultFilter::OddPositions),
        ..available("synonyms", "Synonyms", WORD_LIMIT)
    },
    available("sentences", "Sentences", WORD_LIMIT),
    available("left_neighbours", "LeftNeighbours", WORD_LIMIT),
    available("right_neighbours", "RightNeighbours", WORD_LIMIT),
    available("similarity", "Similarity", WORD_LIMIT),
    available("experimental_synonyms", "ExperimentalSynonyms", WORD_LIMIT),
    available("ngrams", "NGrams", PATTERN_LIMIT),
    available("ngram_references", "NGramReferences", PATTERN_LIMIT),
    // Three parameters.
    available("right_collocation_finder", "RightCollocationFinder", COLLOCATION),
    available("left_collocation_finder", "LeftCollocationFinder", COLLOCATION),
    available("cooccurrences", "Cooccurrences", COOCCURRENCE),
    disabled("cooccurrences_all", "CooccurrencesAll", COOCCURRENCE),
    disabled("intersection", "Kookkurrenzschnitt", INTERSECTION),
    available("crossword", "Kreuzwortraetsel", CROSSWORD),
];

/// Word class accepted by the collocation finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Adjective,
    Verb,
    Noun,
    Stopword,
}

impl PartOfSpeech {
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "A",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Stopword => "S",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<PartOfSpeech> for Argument {
    fn from(pos: PartOfSpeech) -> Self {
        Argument::Text(pos.tag().to_string())
    }
}
