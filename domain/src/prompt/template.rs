//! Prompt templates for the debate flow

use crate::session::context::AgentContext;
use crate::session::entities::Message;

/// Sent instead of peer opinions when an agent debates alone
pub const SELF_VERIFICATION_PROMPT: &str = "Can you verify that your answer is correct. Please reiterate your answer, making sure to state your answer at the end of the response.";

const PEER_PREAMBLE: &str = "These are the recent/updated opinions from other agents: ";

const PEER_INSTRUCTION: &str = "\n\n Use these opinions carefully as additional advice, can you provide an updated answer? Make sure to state your answer at the end of the response.";

/// Templates for generating prompts at each round
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the user message that opens round `r > 0` for one agent.
    ///
    /// `peers` are the other agents' transcripts in index order with the
    /// receiving agent removed. Only each peer's latest message is quoted.
    /// `question` is accepted for symmetry with the caller but is not part of
    /// the rendered text.
    pub fn round_message(peers: &[&AgentContext], _question: &str) -> Message {
        if peers.is_empty() {
            return Message::user(SELF_VERIFICATION_PROMPT);
        }

        let mut prompt = String::from(PEER_PREAMBLE);
        for peer in peers {
            prompt.push_str(&Self::peer_opinion(peer.latest().content()));
        }
        prompt.push_str(PEER_INSTRUCTION);

        Message::user(prompt)
    }

    /// Wrap one peer response in the opinion delimiter
    pub fn peer_opinion(content: &str) -> String {
        format!("\n\n One agent response: ```{}```", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::Question;

    fn context_with_reply(reply: &str) -> AgentContext {
        let mut ctx = AgentContext::new(&Question::try_new("What is 3*3?").unwrap());
        ctx.push_response(Message::assistant(reply));
        ctx
    }

    #[test]
    fn test_no_peers_returns_self_verification() {
        let a = PromptTemplate::round_message(&[], "What is 3*3?");
        let b = PromptTemplate::round_message(&[], "something else entirely");
        assert_eq!(a.content(), SELF_VERIFICATION_PROMPT);
        assert_eq!(a, b);
        assert_eq!(a.role(), crate::session::entities::Role::User);
    }

    #[test]
    fn test_two_peers_wrapped_in_order() {
        let first = context_with_reply("I think it is 9");
        let second = context_with_reply("Definitely 10");
        let message = PromptTemplate::round_message(&[&first, &second], "What is 3*3?");

        let expected = format!(
            "{}{}{}{}",
            PEER_PREAMBLE,
            "\n\n One agent response: ```I think it is 9```",
            "\n\n One agent response: ```Definitely 10```",
            PEER_INSTRUCTION
        );
        assert_eq!(message.content(), expected);
    }

    #[test]
    fn test_quotes_only_latest_message() {
        let mut peer = context_with_reply("first draft: 8");
        peer.push_prompt(Message::user("reconsider"));
        peer.push_response(Message::assistant("final: 9"));

        let message = PromptTemplate::round_message(&[&peer], "q");
        assert!(message.content().contains("```final: 9```"));
        assert!(!message.content().contains("first draft"));
    }
}
