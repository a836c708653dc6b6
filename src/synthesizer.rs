use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::avatar::{AvatarStyle, identity_for};
use crate::clock::{Clock, SystemClock, email_timestamp};
use crate::decode::{decode_comments, decode_reply};
use crate::llm::{CanComplete, CompletionRequest, GenerationError};
use crate::models::{Comment, CommentsRequest, EmailDraft, EmailReply, ReplyText};
use crate::random::{RandomSource, SeededRandom};
use crate::templates::{NAME_POOL, fallback_comments, fallback_reply};

/// Avatar size used for comment authors.
pub const COMMENT_AVATAR_SIZE: u32 = 32;
/// Avatar size used for the email reply sender.
pub const REPLY_AVATAR_SIZE: u32 = 40;

const COMMENTS_PROMPT: &str = include_str!("prompts/comments_prompt.txt");
const EMAIL_PROMPT: &str = include_str!("prompts/email_prompt.txt");

/// Request is missing something required. The only error the pipeline
/// reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Post content is required")]
    MissingPost,
    #[error("Email data is incomplete")]
    IncompleteEmail,
}

/// Input to [`Synthesizer::synthesize`].
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Comments(CommentsRequest),
    EmailReply(EmailDraft),
}

/// Output of [`Synthesizer::synthesize`].
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Comments(Vec<Comment>),
    EmailReply(EmailReply),
}

/// Turns user text into decorated comments or an email reply.
///
/// Remote generation is attempted first; any failure there is logged and
/// replaced by the fixed templates, so once a request validates a complete
/// result is always returned.
pub struct Synthesizer {
    llm: Arc<dyn CanComplete>,
    clock: Arc<dyn Clock>,
    random: Mutex<Box<dyn RandomSource>>,
    avatars: AvatarStyle,
}

fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.trim().is_empty())
}

impl Synthesizer {
    /// Creates a pipeline using `llm`, the system clock and an entropy-seeded
    /// random source.
    pub fn new(llm: Arc<dyn CanComplete>) -> Self {
        Self {
            llm,
            clock: Arc::new(SystemClock),
            random: Mutex::new(Box::new(SeededRandom::from_entropy())),
            avatars: AvatarStyle::default(),
        }
    }

    /// Sets the clock used for ids and timestamps.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Sets the source for name and minute picks.
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Mutex::new(Box::new(random));
        self
    }

    /// Sets how identity references are rendered.
    pub fn avatar_style(mut self, style: AvatarStyle) -> Self {
        self.avatars = style;
        self
    }

    /// Dispatches on the request kind.
    pub async fn synthesize(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ValidationError> {
        match request {
            GenerationRequest::Comments(req) => self
                .comments(req.post.as_deref())
                .await
                .map(GenerationResult::Comments),
            GenerationRequest::EmailReply(draft) => self
                .email_reply(&draft)
                .await
                .map(GenerationResult::EmailReply),
        }
    }

    /// Produces exactly ten comments responding to `post`.
    pub async fn comments(&self, post: Option<&str>) -> Result<Vec<Comment>, ValidationError> {
        let post = required(post).ok_or(ValidationError::MissingPost)?;
        let texts = match self.remote_comments(post).await {
            Ok(texts) => texts,
            Err(e) => {
                warn!(error = %e, "comment generation failed, using fallbacks");
                fallback_comments()
            }
        };
        Ok(self.decorate_comments(texts))
    }

    /// Produces the reply to `draft`.
    pub async fn email_reply(&self, draft: &EmailDraft) -> Result<EmailReply, ValidationError> {
        let (Some(to), Some(subject), Some(body)) = (
            required(draft.to.as_deref()),
            required(draft.subject.as_deref()),
            required(draft.body.as_deref()),
        ) else {
            return Err(ValidationError::IncompleteEmail);
        };
        let text = match self.remote_reply(to, subject, body).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "email generation failed, using fallback");
                fallback_reply(to, subject)
            }
        };
        Ok(self.decorate_reply(text))
    }

    async fn remote_comments(&self, post: &str) -> Result<Vec<String>, GenerationError> {
        let request = CompletionRequest {
            system: COMMENTS_PROMPT.to_string(),
            user: post.to_string(),
            temperature: 0.9,
            max_tokens: 1000,
        };
        let raw = self.llm.complete(&request).await?;
        let texts = decode_comments(&raw)?;
        info!(count = texts.len(), "generated comments remotely");
        Ok(texts)
    }

    async fn remote_reply(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<ReplyText, GenerationError> {
        let request = CompletionRequest {
            system: EMAIL_PROMPT.to_string(),
            user: format!("Original email:\nTo: {to}\nSubject: {subject}\nBody: {body}"),
            temperature: 0.8,
            max_tokens: 800,
        };
        let raw = self.llm.complete(&request).await?;
        let reply = decode_reply(&raw)?;
        info!(from = %reply.from, "generated email reply remotely");
        Ok(reply)
    }

    fn decorate_comments(&self, texts: Vec<String>) -> Vec<Comment> {
        let millis = self.clock.now().timestamp_millis();
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        texts
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let author = NAME_POOL[random.below(NAME_POOL.len())].to_string();
                let minutes = random.below(60) + 1;
                debug!(%author, minutes, index, "decorating comment");
                Comment {
                    id: format!("comment-{millis}-{index}"),
                    profile_pic: identity_for(self.avatars, &author, COMMENT_AVATAR_SIZE),
                    author,
                    content,
                    timestamp: format!("{minutes}m"),
                }
            })
            .collect()
    }

    fn decorate_reply(&self, text: ReplyText) -> EmailReply {
        let now = self.clock.now();
        EmailReply {
            id: format!("response-{}", now.timestamp_millis()),
            profile_pic: identity_for(self.avatars, &text.from, REPLY_AVATAR_SIZE),
            from: text.from,
            subject: text.subject,
            content: text.content,
            timestamp: email_timestamp(&now),
        }
    }
}
