// Handler-draft prompt
//
// Instructions sent to the text-generation service when drafting a typed
// handler from captured webhook bodies.

/// Separator placed between payload bodies when several webhooks are combined.
pub const PAYLOAD_SEPARATOR: &str = "\n\n";

/// Join captured bodies into the payload block handed to a generator.
/// Records without a body are skipped.
pub fn join_payloads<I, S>(bodies: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    bodies
        .into_iter()
        .flatten()
        .map(|body| body.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(PAYLOAD_SEPARATOR)
}

/// Render the instruction prompt around the given example payloads.
pub fn build_handler_prompt(payloads: &str) -> String {
    format!(
        "You will receive one or more example JSON payloads that represent the body of \
webhook requests from a third-party service.
Based on these examples, generate a TypeScript webhook handler that:

- Uses Zod to define a type-safe schema for each possible event type found in the examples.
- Exports a single async function named handleWebhook that accepts an object representing \
the parsed webhook body.
- Validates the input against the appropriate Zod schema.
- Handles each event type with a dedicated conditional or switch-case branch.
- Includes TypeScript types inferred from Zod.
- Logs or comments what each event handling branch would do (no real business logic is needed).
- Throws a descriptive error if an unknown event type is received.

Return only the code. Do not wrap it in ```typescript or any other markdown symbols and do \
not include explanations or extra text.

Input: one or more JSON webhook body examples.
Output: TypeScript code implementing the Zod schemas and the handleWebhook function.

Examples:
{payloads}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_missing_bodies() {
        let joined = join_payloads(vec![Some("{\"a\":1}"), None, Some("{\"b\":2}")]);
        assert_eq!(joined, "{\"a\":1}\n\n{\"b\":2}");
    }

    #[test]
    fn test_join_empty() {
        let joined = join_payloads(Vec::<Option<String>>::new());
        assert_eq!(joined, "");
    }

    #[test]
    fn test_prompt_embeds_payloads() {
        let prompt = build_handler_prompt("{\"type\":\"invoice.paid\"}");
        assert!(prompt.contains("handleWebhook"));
        assert!(prompt.contains("Zod"));
        assert!(prompt.ends_with("{\"type\":\"invoice.paid\"}\n"));
    }
}
