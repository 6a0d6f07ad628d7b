/// Configuration for an engine session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for deterministic play.
    pub seed: u64,
    /// Hit/miss cut-off. A roll strictly above it is a miss.
    pub hit_threshold: f64,
    /// Replies to input nothing understood, picked uniformly.
    pub confusion_replies: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hit_threshold: 0.5,
            confusion_replies: vec!["What?".to_string(), "Huh?".to_string()],
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hit/miss cut-off.
    pub fn with_hit_threshold(mut self, threshold: f64) -> Self {
        self.hit_threshold = threshold;
        self
    }

    /// Replace the non-comprehension replies.
    pub fn with_confusion_replies<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.confusion_replies = replies.into_iter().map(Into::into).collect();
        self
    }
}
