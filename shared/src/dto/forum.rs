use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author display name, embedded via `profiles(full_name)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorName {
    pub full_name: String,
}

/// Aggregate row produced by a `comments(count)` embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountRow {
    pub count: i64,
}

/// Row of the `posts` table, optionally with author and comment-count embeds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<AuthorName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<CountRow>,
}

impl Post {
    /// Author name for display; forum rows may outlive their profile.
    pub fn author_name(&self) -> &str {
        self.profiles
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or("Anonymous")
    }

    /// Comment count from the aggregate embed, zero when not selected.
    pub fn comment_count(&self) -> i64 {
        self.comments.first().map(|row| row.count).unwrap_or(0)
    }
}

/// Row of the `comments` table, optionally with the author embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<AuthorName>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.profiles
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or("Anonymous")
    }
}

/// Insert payload for `posts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Update payload for `posts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for `comments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComment {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
}

/// Update payload for `comments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentUpdate {
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reads_count_embed() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "user_id": "22222222-2222-2222-2222-222222222222",
            "title": "Wheat harvest timing",
            "content": "When do you start?",
            "created_at": "2025-07-01T10:00:00Z",
            "updated_at": "2025-07-01T10:00:00Z",
            "profiles": { "full_name": "Ahmed Khan" },
            "comments": [ { "count": 4 } ]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author_name(), "Ahmed Khan");
        assert_eq!(post.comment_count(), 4);
    }

    #[test]
    fn post_defaults_without_embeds() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "user_id": "22222222-2222-2222-2222-222222222222",
            "title": "t",
            "content": "c",
            "created_at": "2025-07-01T10:00:00Z",
            "updated_at": "2025-07-01T10:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author_name(), "Anonymous");
        assert_eq!(post.comment_count(), 0);
    }
}
