//! Template resolution: (business name, policy type) -> document
//!
//! Each policy type maps to a builder function producing a list of
//! sections. Sections never contain a blank line; they are joined with
//! [`PARAGRAPH_DELIMITER`] so the result panel can split them back apart.

use super::{Clock, GeneratedDocument, PolicyType, PARAGRAPH_DELIMITER};
use chrono::NaiveDate;
use std::fmt::Write;
use std::sync::Arc;

/// Month/day/year without padding, e.g. `10/19/2026`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Builds documents from the hard-coded templates
#[derive(Clone)]
pub struct TemplateResolver {
    clock: Arc<dyn Clock>,
    date_format: String,
}

impl TemplateResolver {
    /// Create a resolver stamping dates with `date_format`.
    ///
    /// Falls back to [`DEFAULT_DATE_FORMAT`] when the format string cannot
    /// render a calendar date (bad specifiers, or time and zone fields).
    pub fn new(clock: Arc<dyn Clock>, date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        let date_format = if is_valid_date_format(&date_format) {
            date_format
        } else {
            tracing::warn!("Invalid date format {date_format:?}, using {DEFAULT_DATE_FORMAT:?}");
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self { clock, date_format }
    }

    /// Resolve the template for `policy_type` with `business_name` substituted
    pub fn resolve(&self, business_name: &str, policy_type: PolicyType) -> GeneratedDocument {
        let today = self.clock.today();
        let updated = format_date(today, &self.date_format)
            .or_else(|| format_date(today, DEFAULT_DATE_FORMAT))
            .unwrap_or_default();
        let sections = match policy_type {
            PolicyType::PrivacyPolicy => privacy_policy(business_name),
            PolicyType::TermsOfService => terms_of_service(business_name),
            PolicyType::CookiePolicy => cookie_policy(business_name),
            PolicyType::Disclaimer => disclaimer(business_name),
        };

        let mut content = sections.join(PARAGRAPH_DELIMITER);
        content.push_str(PARAGRAPH_DELIMITER);
        content.push_str(&format!("Last updated: {updated}"));

        GeneratedDocument::new(policy_type.title(), content)
    }
}

/// Render `date` with a strftime string, `None` if chrono rejects it
fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Check that a strftime string can render a date without time or zone
fn is_valid_date_format(format: &str) -> bool {
    format_date(NaiveDate::MIN, format).is_some()
}

fn privacy_policy(name: &str) -> Vec<String> {
    vec![
        format!("Privacy Policy for {name}"),
        format!(
            "This Privacy Policy describes how {name} (\"we\", \"us\", or \"our\") collects, \
             uses, and shares information about you when you use our website, products, and services."
        ),
        "1. Information We Collect\n\
         We collect information you provide directly to us, such as when you create an account, \
         make a purchase, or contact us for support. This may include your name, email address, \
         postal address, phone number, and payment information."
            .to_string(),
        "2. How We Use Your Information\n\
         We use the information we collect to provide, maintain, and improve our services, to \
         process transactions and send related information, and to respond to your comments and questions."
            .to_string(),
        "3. Sharing of Information\n\
         We do not sell your personal information. We may share information with vendors and \
         service providers who need access to it to carry out work on our behalf, or when required by law."
            .to_string(),
        format!(
            "4. Data Security\n\
             {name} takes reasonable measures to help protect information about you from loss, \
             theft, misuse, and unauthorized access, disclosure, alteration, and destruction."
        ),
        "5. Your Choices\n\
         You may update or correct your account information at any time. You may opt out of \
         promotional communications by following the instructions in those communications."
            .to_string(),
        format!(
            "6. Contact Us\n\
             If you have any questions about this Privacy Policy, please contact {name}."
        ),
    ]
}

fn terms_of_service(name: &str) -> Vec<String> {
    vec![
        format!("Terms of Service for {name}"),
        format!(
            "These Terms of Service govern your use of the website, products, and services \
             operated by {name}. By accessing or using our services, you agree to be bound by these terms."
        ),
        "1. Use of Services\n\
         You may use our services only in compliance with these terms and all applicable laws. \
         You are responsible for your conduct and any content you provide."
            .to_string(),
        "2. Accounts\n\
         When you create an account, you must provide accurate and complete information. You are \
         responsible for safeguarding your account credentials and for all activity under your account."
            .to_string(),
        format!(
            "3. Intellectual Property\n\
             The services and their original content, features, and functionality are and will \
             remain the exclusive property of {name} and its licensors."
        ),
        format!(
            "4. Limitation of Liability\n\
             To the maximum extent permitted by law, {name} shall not be liable for any indirect, \
             incidental, special, consequential, or punitive damages arising from your use of the services."
        ),
        "5. Changes to These Terms\n\
         We may revise these terms from time to time. Continued use of the services after changes \
         become effective constitutes acceptance of the revised terms."
            .to_string(),
        format!(
            "6. Contact Us\n\
             If you have any questions about these Terms of Service, please contact {name}."
        ),
    ]
}

fn cookie_policy(name: &str) -> Vec<String> {
    vec![
        format!("Cookie Policy for {name}"),
        format!(
            "This Cookie Policy explains how {name} uses cookies and similar technologies to \
             recognize you when you visit our website."
        ),
        "1. What Are Cookies\n\
         Cookies are small data files placed on your computer or mobile device when you visit a \
         website. They are widely used to make websites work efficiently and to provide reporting information."
            .to_string(),
        "2. How We Use Cookies\n\
         We use essential cookies to operate our website, preference cookies to remember your \
         settings, and analytics cookies to understand how visitors interact with our pages."
            .to_string(),
        "3. Managing Cookies\n\
         Most browsers let you refuse or delete cookies through their settings. Blocking some \
         cookies may affect how our website works for you."
            .to_string(),
        format!(
            "4. Contact Us\n\
             If you have any questions about our use of cookies, please contact {name}."
        ),
    ]
}

fn disclaimer(name: &str) -> Vec<String> {
    vec![
        format!("Disclaimer for {name}"),
        format!(
            "The information provided by {name} on our website and in our services is for general \
             informational purposes only."
        ),
        "1. No Warranties\n\
         All information is provided in good faith, however we make no representation or warranty \
         of any kind, express or implied, regarding its accuracy, adequacy, validity, reliability, or completeness."
            .to_string(),
        "2. External Links\n\
         Our website may contain links to third-party websites. We do not investigate, monitor, or \
         check such websites for accuracy and are not responsible for their content."
            .to_string(),
        format!(
            "3. Professional Advice\n\
             Nothing published by {name} constitutes legal, financial, or other professional advice. \
             Consult an appropriate professional before taking any action based on such information."
        ),
    ]
}
