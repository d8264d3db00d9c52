//! Intake form state, validation and the submit state machine

use super::field::FormField;
use crate::generator::{GenerationError, PolicyGenerator, PolicyRequest};
use crate::policy::GeneratedDocument;
use thiserror::Error;

/// What the user sees when generation fails, whatever the cause
pub const GENERATION_FAILED_MESSAGE: &str = "failed to generate, try again later";

/// Index of the buttons row (after the three input fields)
pub const BUTTONS_ROW: usize = 3;

/// First failing validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("business name required")]
    BusinessNameRequired,
    #[error("policy type required")]
    PolicyTypeRequired,
    #[error("business description required")]
    BusinessDescriptionRequired,
}

/// Why a submission produced no document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A generation is already running; the submission was ignored
    #[error("generation already in progress")]
    InProgress,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The business details form
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub business_name: FormField,
    pub policy_type: FormField,
    pub business_description: FormField,
    pub active_field_index: usize,
    /// True strictly between a successful validation and the generation outcome
    pub is_submitting: bool,
    /// Set only by the last failed validation or generation
    pub error_message: Option<String>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            business_name: FormField::text(
                "business_name",
                "Business Name",
                "Your Business Name",
                false,
            ),
            policy_type: FormField::choice("policy_type", "Policy Type", "Select policy type"),
            business_description: FormField::text(
                "business_description",
                "Business Description",
                "Describe your business and its activities...",
                true,
            ),
            active_field_index: 0,
            is_submitting: false,
            error_message: None,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Insert a line break when the active field is multiline
    pub fn newline(&mut self) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            if field.is_multiline {
                field.push_char('\n');
            }
        }
    }

    /// Step the policy type selection when it is the active field
    pub fn cycle_policy(&mut self, forward: bool) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.cycle_choice(forward);
        }
    }

    /// Check the fields in order and build a request from the first valid state
    pub fn validate(&self) -> Result<PolicyRequest, ValidationError> {
        let business_name = self.business_name.as_text().trim();
        if business_name.is_empty() {
            return Err(ValidationError::BusinessNameRequired);
        }

        let policy_type = self
            .policy_type
            .as_choice()
            .ok_or(ValidationError::PolicyTypeRequired)?;

        let business_description = self.business_description.as_text().trim();
        if business_description.is_empty() {
            return Err(ValidationError::BusinessDescriptionRequired);
        }

        Ok(PolicyRequest {
            business_name: business_name.to_string(),
            policy_type,
            business_description: business_description.to_string(),
        })
    }

    /// Start a submission.
    ///
    /// Ignored while a generation is running. Otherwise validates; on
    /// success the form becomes busy and the request is returned for the
    /// caller to hand to a generator.
    pub fn begin_submit(&mut self) -> Result<PolicyRequest, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::InProgress);
        }

        match self.validate() {
            Ok(request) => {
                self.error_message = None;
                self.is_submitting = true;
                tracing::info!(policy_type = request.policy_type.key(), "Generation started");
                Ok(request)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Record the generation outcome and release the form
    pub fn finish_submit(
        &mut self,
        outcome: Result<GeneratedDocument, GenerationError>,
    ) -> Result<GeneratedDocument, GenerationError> {
        self.is_submitting = false;
        match &outcome {
            Ok(doc) => {
                tracing::info!("Generated {}", doc.title());
                self.error_message = None;
            }
            Err(e) => {
                tracing::error!("Policy generation failed: {e}");
                self.error_message = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
        outcome
    }

    /// Validate, generate and record the outcome in one call
    ///
    /// For callers that can await the generator in place. The terminal app
    /// splits this into [`Self::begin_submit`] and [`Self::finish_submit`]
    /// around a spawned task so it keeps drawing while the form is busy.
    pub async fn submit<G>(&mut self, generator: &G) -> Result<GeneratedDocument, SubmitError>
    where
        G: PolicyGenerator + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = generator.generate(request).await;
        Ok(self.finish_submit(outcome)?)
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for IntakeForm {
    fn field_count(&self) -> usize {
        4 // business name, policy type, description, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.business_name),
            1 => Some(&mut self.policy_type),
            2 => Some(&mut self.business_description),
            // Buttons row has no FormField
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.business_name),
            1 => Some(&self.policy_type),
            2 => Some(&self.business_description),
            _ => None,
        }
    }
}
