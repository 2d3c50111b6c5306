// senryu/tests/reply_use_case.rs
//
// Reply use case against the built-in demo lexicon.

use senryu::{BotConfig, LexiconSource, Message, ReplyToMessage};

const VERSE: &str = "空青い雲が流れる夏の朝";
const REPLY: &str = "📜 川柳を検知しました\n空青い\n雲が流れる\n夏の朝";

fn bot(config: BotConfig) -> ReplyToMessage<LexiconSource> {
    ReplyToMessage::new(LexiconSource::demo(), config)
}

#[test]
fn replies_with_banner_and_three_lines() {
    let bot = bot(BotConfig::default());
    let reply = bot.execute(&Message::new(1, VERSE)).unwrap();
    assert_eq!(reply.as_deref(), Some(REPLY));
}

#[test]
fn content_is_trimmed_before_extraction() {
    let bot = bot(BotConfig::default());
    let reply = bot
        .execute(&Message::new(1, format!("  {VERSE}\n")))
        .unwrap();
    assert_eq!(reply.as_deref(), Some(REPLY));
}

#[test]
fn no_senryu_means_no_reply() {
    let bot = bot(BotConfig::default());
    assert_eq!(bot.execute(&Message::new(1, "夏の朝")).unwrap(), None);
    assert_eq!(bot.execute(&Message::new(1, "   ")).unwrap(), None);
}

#[test]
fn bot_authors_are_ignored() {
    let bot = bot(BotConfig::default());
    let msg = Message::new(1, VERSE).from_bot();
    assert_eq!(bot.execute(&msg).unwrap(), None);
}

#[test]
fn bot_authors_can_be_allowed() {
    let config = BotConfig {
        ignore_bots: false,
        ..BotConfig::default()
    };
    let bot = bot(config);
    let msg = Message::new(1, VERSE).from_bot();
    assert_eq!(bot.execute(&msg).unwrap().as_deref(), Some(REPLY));
}

#[test]
fn only_allow_listed_channels_are_checked() {
    let config = BotConfig::from_toml_str(
        "target_channels = [767778360133812234, 965883155544428656]",
    )
    .unwrap();
    let bot = bot(config);
    assert_eq!(
        bot.execute(&Message::new(965883155544428656, VERSE))
            .unwrap()
            .as_deref(),
        Some(REPLY)
    );
    assert_eq!(bot.execute(&Message::new(713763994690650193, VERSE)).unwrap(), None);
}

#[test]
fn custom_banner_is_used() {
    let config = BotConfig::from_toml_str("banner = \"一句できました\"").unwrap();
    let bot = bot(config);
    let reply = bot.execute(&Message::new(1, VERSE)).unwrap().unwrap();
    assert!(reply.starts_with("一句できました\n"));
    assert_eq!(reply.lines().count(), 4);
}
