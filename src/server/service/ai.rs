//! Chat proxy to the Gemini generative-language API.

use serde::{Deserialize, Serialize};

use crate::{
    model::ai::{ChatRequestDto, ChatResponseDto},
    server::error::AppError,
};

const GEMINI_MODEL: &str = "gemini-2.0-flash-001";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const PREAMBLE_PROMPT: &str =
    "You are a helpful assistant for a sports admin platform. Be concise and safe.";
const PREAMBLE_REPLY: &str =
    "I understand. I'm here to help with sports administration tasks. How can I assist you?";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub struct AiService<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
}

impl<'a> AiService<'a> {
    /// Creates a new AiService instance
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client for outbound requests
    /// - `api_key` - Gemini API key, `None` when not configured
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Forwards a conversation to Gemini and returns the generated reply
    ///
    /// # Returns
    /// - `Ok(ChatResponseDto)` - Text of the first candidate
    /// - `Err(AppError::NotConfigured)` - No API key is configured
    /// - `Err(AppError::ReqwestErr)` - The request failed or Gemini answered with an error
    pub async fn chat(&self, dto: ChatRequestDto) -> Result<ChatResponseDto, AppError> {
        let Some(api_key) = self.api_key else {
            return Err(AppError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        };

        let response = self
            .http_client
            .post(format!("{}/{}:generateContent", GEMINI_BASE_URL, GEMINI_MODEL))
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest {
                contents: build_contents(&dto),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        Ok(ChatResponseDto {
            text: response_text(response),
        })
    }
}

/// Preamble, then the history, then the new input if any.
fn build_contents(dto: &ChatRequestDto) -> Vec<Content> {
    let content = |role: &str, text: &str| Content {
        role: role.to_string(),
        parts: vec![Part {
            text: text.to_string(),
        }],
    };

    let mut contents = vec![content("user", PREAMBLE_PROMPT), content("model", PREAMBLE_REPLY)];
    for message in &dto.messages {
        let role = if message.role == "user" { "user" } else { "model" };
        contents.push(content(role, &message.content));
    }
    if !dto.input.trim().is_empty() {
        contents.push(content("user", &dto.input));
    }

    contents
}

fn response_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .find_map(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ai::ChatMessageDto;

    #[test]
    fn builds_conversation_after_preamble() {
        let dto = ChatRequestDto {
            messages: vec![
                ChatMessageDto {
                    role: "user".to_string(),
                    content: "Who won?".to_string(),
                },
                ChatMessageDto {
                    role: "assistant".to_string(),
                    content: "Team A".to_string(),
                },
            ],
            input: "By how much?".to_string(),
        };

        let contents = build_contents(&dto);
        let roles: Vec<&str> = contents.iter().map(|c| c.role.as_str()).collect();

        assert_eq!(roles, vec!["user", "model", "user", "model", "user"]);
        assert_eq!(contents[4].parts[0].text, "By how much?");
    }

    #[test]
    fn empty_input_is_not_sent() {
        let dto = ChatRequestDto {
            messages: Vec::new(),
            input: "  ".to_string(),
        };

        assert_eq!(build_contents(&dto).len(), 2);
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(response_text(response), "Hello there");
    }

    #[tokio::test]
    async fn missing_key_is_reported() {
        let client = reqwest::Client::new();
        let service = AiService::new(&client, None);
        let dto = ChatRequestDto {
            messages: Vec::new(),
            input: "hi".to_string(),
        };

        match service.chat(dto).await {
            Err(AppError::NotConfigured(message)) => {
                assert_eq!(message, "Gemini API key not configured")
            }
            other => panic!("expected missing key error, got {:?}", other.map(|r| r.text)),
        }
    }
}
