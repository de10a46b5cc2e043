//! The sequential pipeline run.

use std::fs;

use tracing::{debug, info, warn};

use corpus_cache::CorpusCache;
use corpus_graph::{build_graph, Graph};
use corpus_text::{Normalizer, Vocabulary};
use corpus_topics::{pairwise_divergence, LdaModel};
use corpus_types::{CorpusFetcher, Entity};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// One-shot pipeline from entity ids to a similarity graph.
///
/// Holds the fetch collaborator and the run configuration; the cache,
/// vocabulary and model are constructed per run and never shared across
/// runs.
pub struct Pipeline<F: CorpusFetcher> {
    config: PipelineConfig,
    fetcher: F,
    normalizer: Normalizer,
}

impl<F: CorpusFetcher> Pipeline<F> {
    pub fn new(config: PipelineConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    /// Run the full pipeline over the given entity ids.
    ///
    /// Entities whose corpus cannot be fetched are dropped from the run;
    /// everything else flows through tokenization, model fitting, pairwise
    /// scoring and graph assembly. Fails only when the cache directory
    /// cannot be created at all.
    pub fn run(&self, entity_ids: &[String]) -> Result<Graph, PipelineError> {
        fs::create_dir_all(&self.config.cache.directory).map_err(|source| {
            PipelineError::CacheDir {
                path: self.config.cache.directory.clone(),
                source,
            }
        })?;
        let mut cache = CorpusCache::open(self.config.cache.clone());

        let entities: Vec<Entity> = entity_ids
            .iter()
            .filter_map(|id| self.load_corpus(&mut cache, id))
            .collect();
        info!(
            requested = entity_ids.len(),
            loaded = entities.len(),
            "Corpora loaded"
        );

        let mut vocabulary = Vocabulary::new();
        let documents: Vec<Vec<u32>> = entities
            .iter()
            .map(|entity| {
                let tokens = self
                    .normalizer
                    .tokenize(entity.cleaned_text().unwrap_or(""));
                vocabulary.encode(&tokens)
            })
            .collect();

        let model = LdaModel::fit(&documents, vocabulary.len(), &self.config.lda);
        log_top_words(&model, &vocabulary);

        let scores = pairwise_divergence(&model);
        let ids: Vec<String> = entities.iter().map(|e| e.id().to_string()).collect();
        Ok(build_graph(&ids, &scores, &self.config.graph))
    }

    /// Cache-or-fetch for one entity. Returns None when the entity has to
    /// be dropped.
    fn load_corpus(&self, cache: &mut CorpusCache, id: &str) -> Option<Entity> {
        let mut entity = Entity::new(id);

        if cache.is_cached(id) {
            if let Ok(text) = cache.get(id) {
                entity.set_cleaned_text(text);
                return Some(entity);
            }
            // Entry vanished between the check and the read; fetch instead
        }

        match self.fetcher.fetch_corpus(id) {
            Ok(raw) => {
                let cleaned = self.normalizer.clean(&raw);
                if let Err(err) = cache.put(id, &cleaned) {
                    warn!(
                        entity = id,
                        error = %err,
                        "Cache write failed, continuing with in-memory corpus"
                    );
                }
                entity.set_raw_text(raw);
                entity.set_cleaned_text(cleaned);
                Some(entity)
            }
            Err(err) => {
                warn!(entity = id, error = %err, "Skipping entity, fetch failed");
                None
            }
        }
    }
}

/// Report each topic's strongest words at debug level.
fn log_top_words(model: &LdaModel, vocabulary: &Vocabulary) {
    for topic in 0..model.num_topics() {
        let words: Vec<String> = model
            .top_words(topic, 5)
            .into_iter()
            .filter_map(|(word, count)| {
                vocabulary.token(word).map(|t| format!("{t} ({count})"))
            })
            .collect();
        if !words.is_empty() {
            debug!(topic, words = %words.join(" "), "Topic top words");
        }
    }
}
