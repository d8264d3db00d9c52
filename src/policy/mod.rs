//! Policy domain: document types, the generated document and template resolution

mod clock;
mod template;

pub use clock::{Clock, SystemClock};
pub use template::{TemplateResolver, DEFAULT_DATE_FORMAT};

#[cfg(test)]
pub use clock::FixedClock;

/// Separator between display paragraphs of a generated document
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Kind of legal document the form can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyType {
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    Disclaimer,
}

impl PolicyType {
    /// All policy types in selector order
    pub const ALL: [PolicyType; 4] = [
        Self::PrivacyPolicy,
        Self::TermsOfService,
        Self::CookiePolicy,
        Self::Disclaimer,
    ];

    /// Human-readable document title
    pub fn title(&self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "Privacy Policy",
            Self::TermsOfService => "Terms of Service",
            Self::CookiePolicy => "Cookie Policy",
            Self::Disclaimer => "Disclaimer",
        }
    }

    /// Stable kebab-case key, used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "privacy-policy",
            Self::TermsOfService => "terms-of-service",
            Self::CookiePolicy => "cookie-policy",
            Self::Disclaimer => "disclaimer",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::PrivacyPolicy => Self::TermsOfService,
            Self::TermsOfService => Self::CookiePolicy,
            Self::CookiePolicy => Self::Disclaimer,
            Self::Disclaimer => Self::PrivacyPolicy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::PrivacyPolicy => Self::Disclaimer,
            Self::TermsOfService => Self::PrivacyPolicy,
            Self::CookiePolicy => Self::TermsOfService,
            Self::Disclaimer => Self::CookiePolicy,
        }
    }
}

/// A finished document ready for display
///
/// Only the template resolver builds these; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    title: String,
    content: String,
}

impl GeneratedDocument {
    pub(crate) fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_match_label_table() {
        assert_eq!(PolicyType::PrivacyPolicy.title(), "Privacy Policy");
        assert_eq!(PolicyType::TermsOfService.title(), "Terms of Service");
        assert_eq!(PolicyType::CookiePolicy.title(), "Cookie Policy");
        assert_eq!(PolicyType::Disclaimer.title(), "Disclaimer");
    }

    #[test]
    fn test_keys_are_kebab_case() {
        assert_eq!(PolicyType::PrivacyPolicy.key(), "privacy-policy");
        assert_eq!(PolicyType::TermsOfService.key(), "terms-of-service");
    }

    #[test]
    fn test_next_visits_every_type_and_wraps() {
        let mut current = PolicyType::ALL[0];
        for expected in PolicyType::ALL.iter().skip(1) {
            current = current.next();
            assert_eq!(current, *expected);
        }
        assert_eq!(current.next(), PolicyType::PrivacyPolicy);
    }

    #[test]
    fn test_prev_inverts_next() {
        for policy_type in PolicyType::ALL {
            assert_eq!(policy_type.next().prev(), policy_type);
        }
    }

    #[test]
    fn test_document_accessors() {
        let doc = GeneratedDocument::new("Disclaimer", "body");
        assert_eq!(doc.title(), "Disclaimer");
        assert_eq!(doc.content(), "body");
    }
}
