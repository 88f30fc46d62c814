//! Validation for AI chat requests.

use crate::{
    model::ai::ChatRequestDto,
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

/// A request needs either new input or some history to answer.
impl Validate for ChatRequestDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if self.input.trim().is_empty() && self.messages.is_empty() {
            errors.add("input", "input or messages is required");
        }
        for (index, message) in self.messages.iter().enumerate() {
            if message.content.trim().is_empty() {
                errors.add(
                    &format!("messages[{}].content", index),
                    "content is required",
                );
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ai::ChatMessageDto;

    #[test]
    fn rejects_empty_conversation() {
        let dto = ChatRequestDto {
            messages: Vec::new(),
            input: " ".to_string(),
        };

        assert!(matches!(dto.validate(), Err(AppError::Validation { .. })));
    }

    #[test]
    fn accepts_history_without_input() {
        let dto = ChatRequestDto {
            messages: vec![ChatMessageDto {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            input: String::new(),
        };

        assert!(dto.validate().is_ok());
    }
}
