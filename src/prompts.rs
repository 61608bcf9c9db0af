//! Prompt builders
//!
//! Pure string assembly: fixed instruction templates with the transcript,
//! chat history, and user input interpolated. No I/O happens here.

use crate::session::ChatMessage;

/// How many trailing chat messages are carried into the chat prompt.
pub const CHAT_HISTORY_WINDOW: usize = 5;

/// Prompt for the executive summary of a transcript.
pub fn summary_prompt(transcript: &str) -> String {
    format!(
        "Create a professional summary from this audio transcript:\n\
         {transcript}\n\n\
         Include:\n\
         - Key discussion points\n\
         - Important figures/dates\n\
         - Action items\n\
         - Recommendations\n\
         - Overall sentiment analysis\n\n\
         Format with markdown headings and bullet points."
    )
}

/// Prompt for the bullet points of one content slide.
pub fn slide_prompt(heading: &str, transcript: &str) -> String {
    format!(
        "Create 3-5 bullet points for '{heading}' using:\n\
         {transcript}\n\n\
         Rules:\n\
         - Use concise business language\n\
         - Include key figures/dates\n\
         - Format as markdown list"
    )
}

/// Prompt for one chat turn. History is truncated to the last
/// [`CHAT_HISTORY_WINDOW`] messages, verbatim and in order.
pub fn chat_prompt(transcript: &str, history: &[ChatMessage], question: &str) -> String {
    let start = history.len().saturating_sub(CHAT_HISTORY_WINDOW);
    let rendered_history = history[start..]
        .iter()
        .map(|msg| format!("{}: {}", msg.role.as_str(), msg.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "ROLE: Voice Analysis Assistant\n\
         CONTEXT:\n{transcript}\n\
         HISTORY:\n{rendered_history}\n\n\
         Rules:\n\
         1. Answer strictly based on the audio content\n\
         2. If the question is unrelated to the audio, respond politely and vary your wording for each unrelated question\n\
         3. Maintain conversational flow\n\
         4. You are a chatbot named \"Chat with your voice\"; understand the intent of both the transcript and the question before answering\n\
         5. Keep responses concise but helpful\n\
         6. Use markdown formatting (**bold**, *italics*, lists) when helpful\n\
         7. Never mention you're an AI or language model\n\
         8. Maintain a friendly, professional tone without greeting in each response\n\
         9. Acknowledge previous interactions when relevant\n\
         10. For unrelated questions you may also answer like \"I specialize in analyzing the current recording. Ask me about: [list key topics]\"\n\n\
         USER QUESTION: {question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ChatMessage;

    #[test]
    fn summary_prompt_embeds_transcript() {
        let prompt = summary_prompt("[0.00s] Hello world");
        assert!(prompt.contains("[0.00s] Hello world"));
        assert!(prompt.contains("Action items"));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn slide_prompt_embeds_heading_and_transcript() {
        let prompt = slide_prompt("Key Findings", "[0.00s] Revenue rose 12%");
        assert!(prompt.contains("'Key Findings'"));
        assert!(prompt.contains("Revenue rose 12%"));
        assert!(prompt.contains("3-5 bullet points"));
    }

    #[test]
    fn chat_prompt_windows_history_to_last_five() {
        let history: Vec<ChatMessage> = (0..8)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("question {i}"))
                } else {
                    ChatMessage::assistant(format!("answer {i}"))
                }
            })
            .collect();

        let prompt = chat_prompt("transcript", &history, "latest");

        // Only messages 3..8 survive, verbatim and in order.
        assert!(!prompt.contains("question 0"));
        assert!(!prompt.contains("answer 1"));
        assert!(!prompt.contains("question 2"));
        let positions: Vec<usize> = (3..8)
            .map(|i| {
                let needle = if i % 2 == 0 {
                    format!("user: question {i}")
                } else {
                    format!("assistant: answer {i}")
                };
                prompt.find(&needle).unwrap_or_else(|| panic!("missing message {i}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "history out of order");
    }

    #[test]
    fn chat_prompt_with_short_history_keeps_all_of_it() {
        let history = vec![ChatMessage::user("only one")];
        let prompt = chat_prompt("transcript", &history, "q");
        assert!(prompt.contains("user: only one"));
    }

    #[test]
    fn chat_prompt_includes_question_and_vary_wording_rule() {
        let prompt = chat_prompt("transcript", &[], "What was decided?");
        assert!(prompt.contains("USER QUESTION: What was decided?"));
        assert!(prompt.contains("vary your wording"));
    }

    #[test]
    fn prompts_are_deterministic() {
        let history = vec![ChatMessage::user("hi")];
        assert_eq!(
            chat_prompt("t", &history, "q"),
            chat_prompt("t", &history, "q")
        );
        assert_eq!(summary_prompt("t"), summary_prompt("t"));
    }
}
