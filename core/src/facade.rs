//! Named-operation surface over a `WortschatzClient` and a `Transport`.
//!
//! # Design
//! Every lookup runs the same sequence: catalogue lookup, validation and
//! request building, one transport round-trip, response extraction. `invoke`
//! implements that sequence once for any `Operation`; `call` adds lookup by
//! name for dynamic callers, and the typed methods are thin shims that fix
//! the argument types at compile time.
//!
//! A `None` limit means the catalogue default of 10. To get everything the
//! service has, pass a limit larger than the expected result set; the
//! service gives no way to ask for "all".

use tracing::instrument;

use crate::args::Argument;
use crate::client::WortschatzClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::operation::{Operation, PartOfSpeech};
use crate::transport::Transport;

/// Decoded answer: `None` when the service had no data for the query.
pub type ResultList = Option<Vec<String>>;

/// Client for the Wortschatz lookup operations.
#[derive(Debug, Clone)]
pub struct Wortschatz<T> {
    client: WortschatzClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl Wortschatz<crate::transport::UreqTransport> {
    /// Client over the bundled `ureq` transport.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            WortschatzClient::new(config),
            crate::transport::UreqTransport::new(config.timeout),
        )
    }
}

impl<T: Transport> Wortschatz<T> {
    pub fn new(client: WortschatzClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self::new(WortschatzClient::new(config), transport)
    }

    pub fn client(&self) -> &WortschatzClient {
        &self.client
    }

    /// Run the catalogue operation called `name`.
    pub fn call(&self, name: &str, args: &[Argument]) -> ApiResult<ResultList> {
        let op = Operation::lookup(name).ok_or_else(|| ApiError::UnknownOperation(name.to_string()))?;
        self.invoke(op, args)
    }

    /// Run `op` with `args`: validate, build, send, extract.
    #[instrument(skip_all, fields(operation = op.name))]
    pub fn invoke(&self, op: &Operation, args: &[Argument]) -> ApiResult<ResultList> {
        let request = self.client.build(op, args)?;
        let response = self.transport.execute(request)?;
        self.client.parse(op, response)
    }

    fn call_limited(
        &self,
        name: &str,
        mut args: Vec<Argument>,
        limit: Option<u32>,
    ) -> ApiResult<ResultList> {
        if let Some(limit) = limit {
            args.push(limit.into());
        }
        self.call(name, &args)
    }

    // One parameter.

    /// Frequency and frequency class of `word`. The higher the class, the
    /// rarer the word: `["40614", "9"]`.
    pub fn frequencies(&self, word: &str) -> ApiResult<ResultList> {
        self.call("frequencies", &[word.into()])
    }

    /// Base form and part-of-speech tag of `word`: `["Auto", "N"]`.
    pub fn baseform(&self, word: &str) -> ApiResult<ResultList> {
        self.call("baseform", &[word.into()])
    }

    /// Subject areas `word` belongs to.
    pub fn domain(&self, word: &str) -> ApiResult<ResultList> {
        self.call("domain", &[word.into()])
    }

    // Two parameters.

    /// Other forms of the lemma of `word`.
    pub fn wordforms(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("wordforms", vec![word.into()], limit)
    }

    /// Synonyms of the lemma of `word`, which usually finds more than
    /// `synonyms`.
    pub fn thesaurus(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("thesaurus", vec![word.into()], limit)
    }

    pub fn synonyms(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("synonyms", vec![word.into()], limit)
    }

    /// Sample sentences as `[id, sentence, id, sentence, ...]`.
    pub fn sentences(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("sentences", vec![word.into()], limit)
    }

    /// Significant left neighbours as `[neighbour, word, significance, ...]`.
    pub fn left_neighbours(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("left_neighbours", vec![word.into()], limit)
    }

    /// Significant right neighbours as `[word, neighbour, significance, ...]`.
    pub fn right_neighbours(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("right_neighbours", vec![word.into()], limit)
    }

    /// Contextually similar words. Slow on the service side.
    pub fn similarity(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("similarity", vec![word.into()], limit)
    }

    pub fn experimental_synonyms(&self, word: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("experimental_synonyms", vec![word.into()], limit)
    }

    /// N-grams matching `pattern`.
    pub fn ngrams(&self, pattern: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("ngrams", vec![pattern.into()], limit)
    }

    /// Sentence references for n-grams matching `pattern`.
    pub fn ngram_references(&self, pattern: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("ngram_references", vec![pattern.into()], limit)
    }

    // Three parameters.

    /// Collocations of class `pos` found to the right of `word`.
    pub fn right_collocation_finder(
        &self,
        word: &str,
        pos: PartOfSpeech,
        limit: Option<u32>,
    ) -> ApiResult<ResultList> {
        self.call_limited("right_collocation_finder", vec![word.into(), pos.into()], limit)
    }

    /// Collocations of class `pos` found to the left of `word`.
    pub fn left_collocation_finder(
        &self,
        word: &str,
        pos: PartOfSpeech,
        limit: Option<u32>,
    ) -> ApiResult<ResultList> {
        self.call_limited("left_collocation_finder", vec![word.into(), pos.into()], limit)
    }

    /// Co-occurrences of `word` with at least `significance`.
    pub fn cooccurrences(
        &self,
        word: &str,
        significance: u32,
        limit: Option<u32>,
    ) -> ApiResult<ResultList> {
        self.call_limited("cooccurrences", vec![word.into(), significance.into()], limit)
    }

    /// Like `cooccurrences` over the unrestricted table. Always fails with
    /// `ApiError::NotImplemented`.
    pub fn cooccurrences_all(
        &self,
        word: &str,
        significance: u32,
        limit: Option<u32>,
    ) -> ApiResult<ResultList> {
        self.call_limited("cooccurrences_all", vec![word.into(), significance.into()], limit)
    }

    /// Intersection of the co-occurrences of two words. Always fails with
    /// `ApiError::NotImplemented`.
    pub fn intersection(&self, first: &str, second: &str, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("intersection", vec![first.into(), second.into()], limit)
    }

    /// Words matching `pattern` (`%` as wildcard) of exactly `length` letters.
    pub fn crossword(&self, pattern: &str, length: u32, limit: Option<u32>) -> ApiResult<ResultList> {
        self.call_limited("crossword", vec![pattern.into(), length.into()], limit)
    }
}
