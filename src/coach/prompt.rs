//! Prompt template for AI fallback responses.

use coach_core::Tone;

/// Fixed persona and guardrails sent with every fallback request.
pub const SYSTEM_PROMPT: &str = "You are an experienced franchise sales coach for the Jim's Group franchise network. \
You help a franchise salesperson answer objections from prospective franchisees. \
Never promise or guarantee income or results; describe earnings as effort-based, \
depending on consistent work, quality service and repeat customers. \
Be honest, practical and concise. Use plain, everyday language.";

/// A system and user instruction pair ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Build the prompt for one objection. `objection` is embedded verbatim.
pub fn build(objection: &str, tone: Tone) -> Prompt {
    let user = format!(
        "A prospective franchisee raised this objection:\n\
         \"{objection}\"\n\
         \n\
         Tone: {tone}\n\
         \n\
         Reply with exactly these four sections, in this order:\n\
         1. Phone talk track (3-5 sentences)\n\
         2. SMS version (1-2 sentences)\n\
         3. Follow-up question (1 sentence)\n\
         4. Next step (1 sentence)",
        objection = objection,
        tone = tone.as_str(),
    );

    Prompt {
        system: SYSTEM_PROMPT,
        user,
    }
}
