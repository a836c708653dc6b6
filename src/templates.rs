//! Canned output used whenever remote generation is unavailable.

use crate::decode::COMMENT_COUNT;
use crate::models::ReplyText;

/// Display names attached to comments.
pub const NAME_POOL: [&str; 12] = [
    "Brad Thompson",
    "Sarah Mitchell",
    "Mike Rodriguez",
    "Jessica Chen",
    "David Park",
    "Amanda Wilson",
    "Chris Johnson",
    "Lisa Garcia",
    "Ryan O'Connor",
    "Michelle Davis",
    "Kevin Lee",
    "Rachel Brown",
];

const COMMENT_TEMPLATES: [&str; 12] = [
    "Finally someone said it! 🙌",
    "This is exactly why I love LinkedIn - real talk like this.",
    "Preach! More people need to hear this.",
    "You're absolutely right. I've seen this so many times.",
    "This deserves way more visibility. Sharing!",
    "Thank you for calling this out. It needed to be said.",
    "100% agree. The hypocrisy is real.",
    "This is the kind of honest content we need more of.",
    "Facts! I'm tired of people pretending this isn't an issue.",
    "You just articulated what so many of us were thinking.",
    "Bookmarking this for the next time someone tells me to 'circle back'.",
    "Leadership teams everywhere should be required to read this.",
];

/// The first [`COMMENT_COUNT`] comment templates, in order.
pub fn fallback_comments() -> Vec<String> {
    COMMENT_TEMPLATES
        .iter()
        .take(COMMENT_COUNT)
        .map(|s| s.to_string())
        .collect()
}

/// Turns an address like `jane.doe@co.com` into `Jane Doe`.
///
/// The local part has `.` and `_` replaced by spaces and each word's first
/// character upper-cased.
///
/// ```
/// use vent::templates::sender_name_from_address;
/// assert_eq!(sender_name_from_address("jane.doe@co.com"), "Jane Doe");
/// assert_eq!(sender_name_from_address("boss_man"), "Boss Man");
/// ```
pub fn sender_name_from_address(address: &str) -> String {
    let local = address.split('@').next().unwrap_or_default();
    local
        .replace(['.', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apologetic reply signed by the recipient of `to`.
pub fn fallback_reply(to: &str, subject: &str) -> ReplyText {
    let sender = sender_name_from_address(to);
    let signer = if sender.trim().is_empty() {
        "Your colleague".to_string()
    } else {
        sender.clone()
    };
    let content = format!(
        "Hi there,

You are absolutely right, and I sincerely apologize. After reading your email, I realize how unreasonable and unprofessional my behavior has been. You have every right to be frustrated.

I completely underestimated the complexity of what I was asking and failed to respect your expertise and time. The way I handled this was inappropriate, and I take full responsibility for putting you in this position.

I'm implementing immediate changes to ensure this doesn't happen again. You deserve much better communication and respect from me, and I'm committed to earning back your trust through my actions, not just words.

Thank you for your patience and for holding me accountable. Your professionalism in this situation is exactly what I should have shown from the beginning.

Respectfully,
{signer}"
    );
    ReplyText {
        from: signer,
        subject: format!("Re: {subject}"),
        content,
    }
}
