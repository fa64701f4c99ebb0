use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Identifier generation is an injected capability so that tests can supply
/// deterministic ids.
pub trait IdGeneratorPort: Send + Sync {
    fn generate(&self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGeneratorPort for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGeneratorPort for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}:{}", self.prefix, n)
    }
}
