// Chat routing decisions and the bot's canned lines.
//
// Everything here is a pure function over strings so the routing rules can
// be tested without a gateway connection. The Discord layer only translates
// events into these calls and sends whatever comes back.

/// Sent when `!zoro` is invoked with no text.
pub const EMPTY_PROMPT_REPLY: &str = "欸……你要跟我說什麼嗎？（不講話我會害羞的……）";

/// Acknowledgement sent before the completion call on the command path.
pub const COMMAND_THINKING: &str = "（思考中……）";

/// Acknowledgement sent before the completion call on the mention path.
pub const MENTION_THINKING: &str = "（偷偷思考中……///）";

/// Apology for a failed completion on the mention path. Unlike the command
/// path this one never carries the raw error text.
pub const MENTION_FAILURE_REPLY: &str = "呜呜……出錯了啦……人家明明有認真想的……";

pub const HELP_TEXT: &str = "織蘿可以這樣用喔～///\n\n\
    🕸️ **指令說明**：\n\
    `!zoro <你想說的話>`\n\
    例如：`!zoro 我今天有點累…`\n\
    我就會回妳一句溫柔又害羞的話🥺\n\n\
    🕸️ **偷偷跟我說話也可以**：\n\
    只要在訊息中 @我，也會得到回覆哦💬\n\n\
    如果我沒有回你，請檢查機器人是否在線或指令是否正確。";

/// Discord rejects messages longer than this many characters.
pub const DISCORD_MESSAGE_CAP: usize = 2000;

/// Apology for a failed completion on the command path, carrying the
/// diagnostic text so the user can report it.
pub fn command_failure_reply(error: &str) -> String {
    format!("嗚嗚……出錯了啦……人家明明有認真想的……\n❌ 錯誤訊息: `{error}`")
}

/// Normalizes a command argument into a prompt. `None` means there is
/// nothing to ask the model about.
pub fn normalize_prompt(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Extracts the implicit prompt from a message that mentions the bot.
///
/// Both mention markups (`<@id>` and the legacy nickname form `<@!id>`) are
/// stripped. `None` means the message was nothing but the mention and the
/// bot should stay silent.
pub fn extract_mention_prompt(content: &str, bot_id: u64) -> Option<String> {
    let stripped = content
        .replace(&format!("<@{bot_id}>"), "")
        .replace(&format!("<@!{bot_id}>"), "");

    normalize_prompt(Some(stripped.as_str()))
}

/// Splits a generated reply into sendable chunks. Splitting is by character
/// count, matching the platform's limit.
pub fn split_for_discord(text: &str) -> Vec<String> {
    text.chars()
        .collect::<Vec<char>>()
        .chunks(DISCORD_MESSAGE_CAP)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_ID: u64 = 1234567890;

    #[test]
    fn normalize_prompt_rejects_missing_and_whitespace() {
        assert_eq!(normalize_prompt(None), None);
        assert_eq!(normalize_prompt(Some("")), None);
        assert_eq!(normalize_prompt(Some("  \t ")), None);
    }

    #[test]
    fn normalize_prompt_trims() {
        assert_eq!(
            normalize_prompt(Some("  我今天有點累…  ")),
            Some("我今天有點累…".to_string())
        );
    }

    #[test]
    fn mention_prompt_strips_both_mention_forms() {
        assert_eq!(
            extract_mention_prompt("<@1234567890> 你在嗎", BOT_ID),
            Some("你在嗎".to_string())
        );
        assert_eq!(
            extract_mention_prompt("<@!1234567890> 你在嗎", BOT_ID),
            Some("你在嗎".to_string())
        );
    }

    #[test]
    fn bare_mention_yields_no_prompt() {
        assert_eq!(extract_mention_prompt("<@1234567890>", BOT_ID), None);
        assert_eq!(extract_mention_prompt("<@1234567890>   ", BOT_ID), None);
    }

    #[test]
    fn other_mentions_are_left_in_place() {
        assert_eq!(
            extract_mention_prompt("<@1234567890> 跟 <@42> 打個招呼", BOT_ID),
            Some("跟 <@42> 打個招呼".to_string())
        );
    }

    #[test]
    fn command_failure_reply_carries_error_text() {
        let reply = command_failure_reply("connection reset by peer");
        assert!(reply.contains("connection reset by peer"));
        // The mention-path apology stays generic.
        assert!(!MENTION_FAILURE_REPLY.contains('`'));
    }

    #[test]
    fn short_reply_is_a_single_chunk() {
        assert_eq!(split_for_discord("好的喔"), vec!["好的喔".to_string()]);
    }

    #[test]
    fn long_reply_splits_at_the_message_cap() {
        let long: String = std::iter::repeat('蘿').take(4001).collect();
        let chunks = split_for_discord(&long);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 2000);
        assert_eq!(chunks[1].chars().count(), 2000);
        assert_eq!(chunks[2].chars().count(), 1);
    }

    #[test]
    fn empty_reply_produces_no_chunks() {
        assert!(split_for_discord("").is_empty());
    }
}
