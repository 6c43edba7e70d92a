use serde_json::Value;

/// System prompt that enforces JSON-only output from the provider.
pub const TRANSLATE_SYSTEM: &str = "You are a professional resume translator. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Preserve the structure and keys of the input resume exactly; \
    translate only the textual values.";

const TRANSLATE_PROMPT_TEMPLATE: &str = "\
    Translate every textual value in the following resume into {target_language}. \
    Keep the JSON structure, keys, and value types unchanged. \
    Do not add, remove, or reorder fields. \
    Reply with the translated resume as a single JSON object.\n\n\
    Resume:\n{resume}";

pub fn build_translation_prompt(resume: &Value, target_language: &str) -> String {
    TRANSLATE_PROMPT_TEMPLATE
        .replace("{target_language}", target_language)
        .replace("{resume}", &resume.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_language_and_serialized_resume() {
        let resume = json!({"name": "Ahmad", "title": "Engineer"});
        let prompt = build_translation_prompt(&resume, "Arabic");
        assert!(prompt.contains("into Arabic"));
        assert!(prompt.contains(&resume.to_string()));
        assert!(!prompt.contains("{target_language}"));
        assert!(!prompt.contains("{resume}"));
    }
}
