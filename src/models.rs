use serde::{Deserialize, Serialize};

/// Body of a comments request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommentsRequest {
    /// The post the comments respond to.
    #[serde(default)]
    pub post: Option<String>,
}

/// One synthesized comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// `comment-{requestMillis}-{index}`; unique within a batch.
    pub id: String,
    /// Display name drawn from the fixed name pool.
    pub author: String,
    pub content: String,
    /// Relative age such as `"12m"`.
    pub timestamp: String,
    /// Identity reference for `author`.
    pub profile_pic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Email the user wants a reply to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmailDraft {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Reply text before decoration, either remote or from the template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyText {
    pub from: String,
    pub subject: String,
    pub content: String,
}

/// The decorated email reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailReply {
    /// `response-{requestMillis}`.
    pub id: String,
    pub from: String,
    pub subject: String,
    pub content: String,
    /// Wall-clock time like `Oct 17, 3:04 PM`.
    pub timestamp: String,
    /// Identity reference for `from`.
    pub profile_pic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailReplyResponse {
    pub response: EmailReply,
}

/// JSON body returned with every 4xx/5xx.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
