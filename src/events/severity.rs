//! Ordered severity tokens and per-event severity lookup.

use super::{LogEvent, SeverityCounts};
use crate::error::{ConfigurationError, StrategyError};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityTable {
    tokens: Vec<String>,
    keyword: String,
    fatal: usize,
}

impl SeverityTable {
    pub fn new(
        tokens: Vec<String>,
        keyword: impl Into<String>,
        fatal: &str,
    ) -> Result<Self, ConfigurationError> {
        if tokens.is_empty() {
            return Err(ConfigurationError::NoSeverities);
        }
        for (i, t) in tokens.iter().enumerate() {
            if tokens[..i].contains(t) {
                return Err(ConfigurationError::DuplicateSeverity(t.clone()));
            }
        }
        let fatal = tokens
            .iter()
            .position(|t| t == fatal)
            .ok_or_else(|| ConfigurationError::UnknownFatalSeverity(fatal.to_string()))?;
        Ok(Self {
            tokens,
            keyword: keyword.into(),
            fatal,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn zeroed(&self) -> SeverityCounts {
        vec![0; self.tokens.len()]
    }

    /// Position of the event's severity in the configured order.
    pub fn index_of(&self, event: &LogEvent) -> Result<usize, StrategyError> {
        let value = event
            .field(&self.keyword)
            .ok_or_else(|| StrategyError::MissingField(self.keyword.clone()))?;
        let token = match value {
            Value::String(s) => s.as_str(),
            other => return Err(StrategyError::UnknownSeverity(other.to_string())),
        };
        self.tokens
            .iter()
            .position(|t| t == token)
            .ok_or_else(|| StrategyError::UnknownSeverity(token.to_string()))
    }

    pub fn is_fatal(&self, event: &LogEvent) -> Result<bool, StrategyError> {
        Ok(self.index_of(event)? == self.fatal)
    }

    /// Tally events per severity.
    pub fn count<'a>(
        &self,
        events: impl IntoIterator<Item = &'a LogEvent>,
    ) -> Result<SeverityCounts, StrategyError> {
        let mut counts = self.zeroed();
        for e in events {
            counts[self.index_of(e)?] += 1;
        }
        Ok(counts)
    }

    pub fn fatal_count(&self, counts: &[u64]) -> u64 {
        counts.get(self.fatal).copied().unwrap_or(0)
    }
}
