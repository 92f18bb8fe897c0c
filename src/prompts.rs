//! Prompt templates sent to the text model.

use crate::constants::{TARGET_LANGUAGE, TOPIC_CONTEXT, WORD_RANGE};

/// The literal directive telling the model to answer with bare JSON.
pub const JSON_ONLY_DIRECTIVE: &str = "IMPORTANT: Return ONLY valid JSON without any markdown formatting, explanations, or code blocks. Do not wrap the response in ```json or any other formatting.";

/// Everything that varies in the blog post prompt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromptSpec {
    /// Language the post must be written in.
    pub target_language: String,
    /// Subject area the topic is framed in.
    pub context: String,
    /// Inclusive word count range.
    pub word_range: (u32, u32),
}

impl Default for PromptSpec {
    fn default() -> Self {
        Self {
            target_language: TARGET_LANGUAGE.to_string(),
            context: TOPIC_CONTEXT.to_string(),
            word_range: WORD_RANGE,
        }
    }
}

impl PromptSpec {
    /// Renders the instruction for a single topic, which is embedded verbatim.
    pub fn render(&self, topic: &str) -> String {
        let (min_words, max_words) = self.word_range;
        let language = &self.target_language;
        format!(
            r#"Write a professional, informative blog post about "{topic}" in the context of {context}.

Requirements:
- Write in {language} language
- {min_words}-{max_words} words
- Include current trends and practical insights
- Structure with clear sections
- Professional tone suitable for IT professionals
- Include real-world examples and use cases
- Focus on practical benefits and implementation considerations

{directive}

Return exactly this JSON structure:
{{
  "title": "Engaging title in {language}",
  "content": "Full blog post content in {language} with proper paragraphs",
  "tags": ["relevant", "cloud", "technology", "tags", "in", "{lower_language}"]
}}"#,
            context = self.context,
            directive = JSON_ONLY_DIRECTIVE,
            lower_language = language.to_lowercase(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_embedded_verbatim() {
        let prompt = PromptSpec::default().render("Kubernetes Security");
        assert!(prompt.contains("\"Kubernetes Security\""));
    }

    #[test]
    fn prompt_demands_json_only() {
        let prompt = PromptSpec::default().render("Serverless Architecture");
        assert!(prompt.contains(JSON_ONLY_DIRECTIVE));
        assert!(prompt.contains("\"tags\": ["));
    }

    #[test]
    fn defaults_are_mongolian_cloud_posts() {
        let prompt = PromptSpec::default().render("Multi-Cloud Strategy");
        assert!(prompt.contains("in the context of cloud technology"));
        assert!(prompt.contains("- Write in Mongolian language"));
        assert!(prompt.contains("- 800-1200 words"));
        assert!(prompt.contains("\"in\", \"mongolian\"]"));
    }

    #[test]
    fn spec_fields_flow_into_prompt() {
        let spec = PromptSpec {
            target_language: "French".to_string(),
            context: "edge computing".to_string(),
            word_range: (300, 500),
        };
        let prompt = spec.render("CDN caching");
        assert!(prompt.contains("\"CDN caching\" in the context of edge computing"));
        assert!(prompt.contains("- Write in French language"));
        assert!(prompt.contains("- 300-500 words"));
        assert!(prompt.contains("\"title\": \"Engaging title in French\""));
    }

    #[test]
    fn braces_in_topic_are_not_interpreted() {
        let prompt = PromptSpec::default().render("{language} & {{x}}");
        assert!(prompt.contains("\"{language} & {{x}}\""));
    }
}
