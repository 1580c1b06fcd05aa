use async_trait::async_trait;

/// Question asked before a destructive action.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// Gate for destructive actions. Returning `false` aborts the action.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, prompt: &str) -> bool;
}

/// An answer decided up front, e.g. by a `--yes` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

#[async_trait]
impl Confirm for Answer {
    async fn confirm(&mut self, _prompt: &str) -> bool {
        *self == Self::Yes
    }
}

/// Interpret a typed reply: only `y` or `yes` (any case) agree.
#[must_use]
pub fn is_yes(reply: &str) -> bool {
    matches!(reply.trim().to_lowercase().as_str(), "y" | "yes")
}
