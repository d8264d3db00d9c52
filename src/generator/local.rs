//! In-process generator backed by the template resolver

use super::traits::{GenerationError, PolicyGenerator, PolicyRequest};
use crate::policy::{GeneratedDocument, TemplateResolver};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated generation latency
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Resolves templates locally after an artificial delay
pub struct LocalGenerator {
    resolver: TemplateResolver,
    delay: Duration,
}

impl LocalGenerator {
    pub fn new(resolver: TemplateResolver, delay: Duration) -> Self {
        Self { resolver, delay }
    }
}

#[async_trait]
impl PolicyGenerator for LocalGenerator {
    async fn generate(&self, request: PolicyRequest) -> Result<GeneratedDocument, GenerationError> {
        tracing::debug!(
            policy_type = request.policy_type.key(),
            description_len = request.business_description.len(),
            "Generating policy"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(self
            .resolver
            .resolve(&request.business_name, request.policy_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{FixedClock, PolicyType, DEFAULT_DATE_FORMAT};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tokio_test::assert_ok;

    fn generator(delay: Duration) -> LocalGenerator {
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
        LocalGenerator::new(TemplateResolver::new(clock, DEFAULT_DATE_FORMAT), delay)
    }

    fn request() -> PolicyRequest {
        PolicyRequest {
            business_name: "Acme Corp".to_string(),
            policy_type: PolicyType::PrivacyPolicy,
            business_description: "We sell widgets online.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_without_delay() {
        let doc = assert_ok!(generator(Duration::ZERO).generate(request()).await);
        assert_eq!(doc.title(), "Privacy Policy");
        assert!(doc.content().contains("Privacy Policy for Acme Corp"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_for_delay() {
        let started = tokio::time::Instant::now();
        let doc = assert_ok!(generator(DEFAULT_GENERATION_DELAY).generate(request()).await);
        assert!(started.elapsed() >= DEFAULT_GENERATION_DELAY);
        assert_eq!(doc.title(), "Privacy Policy");
    }

    #[tokio::test]
    async fn test_generate_matches_resolver_output() {
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
        let resolver = TemplateResolver::new(clock, DEFAULT_DATE_FORMAT);
        let expected = resolver.resolve("Acme Corp", PolicyType::PrivacyPolicy);

        let doc = assert_ok!(generator(Duration::ZERO).generate(request()).await);
        assert_eq!(doc, expected);
    }
}
