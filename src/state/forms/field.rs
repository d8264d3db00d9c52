//! Form field value objects

use crate::policy::PolicyType;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// A select box; `None` until the user picks an option
    Choice(Option<PolicyType>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new select field with nothing chosen
    pub fn choice(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Choice(None),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Get the chosen option (returns None for text fields)
    pub fn as_choice(&self) -> Option<PolicyType> {
        match &self.value {
            FieldValue::Choice(choice) => *choice,
            FieldValue::Text(_) => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the chosen option
    #[cfg(test)]
    pub fn set_choice(&mut self, value: Option<PolicyType>) {
        self.value = FieldValue::Choice(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(_) => {
                // Select fields are driven by cycle_choice
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(choice) => *choice = None,
        }
    }

    /// Step through the options; an empty select starts at the first
    /// (forward) or last (backward) option
    pub fn cycle_choice(&mut self, forward: bool) {
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = Some(match (*choice, forward) {
                (Some(current), true) => current.next(),
                (Some(current), false) => current.prev(),
                (None, true) => PolicyType::ALL[0],
                (None, false) => PolicyType::ALL[PolicyType::ALL.len() - 1],
            });
        }
    }

    /// Get the display value for rendering (empty when unset)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(policy_type)) => policy_type.title().to_string(),
            FieldValue::Choice(None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("business_name", "Business Name", "", false);
        field.push_char('A');
        field.push_char('c');
        assert_eq!(field.as_text(), "Ac");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_text_field_has_no_choice() {
        let field = FormField::text("business_name", "Business Name", "", false);
        assert!(field.as_choice().is_none());
        assert!(!field.is_choice());
    }

    #[test]
    fn test_choice_starts_empty() {
        let field = FormField::choice("policy_type", "Policy Type", "Select policy type");
        assert!(field.is_choice());
        assert!(field.as_choice().is_none());
        assert_eq!(field.display_value(), "");
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_cycle_choice_forward_from_empty() {
        let mut field = FormField::choice("policy_type", "Policy Type", "");
        field.cycle_choice(true);
        assert_eq!(field.as_choice(), Some(PolicyType::PrivacyPolicy));
        field.cycle_choice(true);
        assert_eq!(field.as_choice(), Some(PolicyType::TermsOfService));
    }

    #[test]
    fn test_cycle_choice_backward_from_empty() {
        let mut field = FormField::choice("policy_type", "Policy Type", "");
        field.cycle_choice(false);
        assert_eq!(field.as_choice(), Some(PolicyType::Disclaimer));
    }

    #[test]
    fn test_choice_ignores_typing_and_backspace_clears() {
        let mut field = FormField::choice("policy_type", "Policy Type", "");
        field.set_choice(Some(PolicyType::CookiePolicy));
        field.push_char('x');
        assert_eq!(field.as_choice(), Some(PolicyType::CookiePolicy));
        assert_eq!(field.display_value(), "Cookie Policy");
        field.pop_char();
        assert!(field.as_choice().is_none());
    }

    #[test]
    fn test_cycle_on_text_field_is_noop() {
        let mut field = FormField::text("business_name", "Business Name", "", false);
        field.set_text("Acme".to_string());
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "Acme");
    }
}
