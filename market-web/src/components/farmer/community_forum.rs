//! Community forum: posts with threaded comments, author-owned edits.

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{Comment, CommentUpdate, NewComment, NewPost, Post, PostUpdate};
use uuid::Uuid;

use crate::services::remote::client;
use crate::state::auth::use_auth_context;
use crate::utils::dialog::{alert, confirm};
use crate::utils::events::input_value;
use crate::utils::format::{medium_date, timestamp};

#[derive(Clone, PartialEq)]
struct PostDetail {
    post: Post,
    comments: Vec<Comment>,
}

#[derive(Clone, Default)]
struct PostForm {
    title: String,
    content: String,
}

#[component]
pub fn CommunityForum() -> impl IntoView {
    let auth = use_auth_context();
    let posts = RwSignal::new(Vec::<Post>::new());
    let detail = RwSignal::new(None::<PostDetail>);
    let (loading, set_loading) = signal(true);
    let (show_post_modal, set_show_post_modal) = signal(false);
    let editing_post = RwSignal::new(None::<Post>);
    let post_form = RwSignal::new(PostForm::default());
    let (comment_text, set_comment_text) = signal(String::new());
    let editing_comment = RwSignal::new(None::<Comment>);

    let load_posts = move || {
        leptos::task::spawn_local(async move {
            match client()
                .from("posts")
                .select("*, profiles(full_name), comments(count)")
                .order("created_at", false)
                .fetch::<Post>()
                .await
            {
                Ok(rows) => posts.set(rows),
                Err(err) => log::error!("failed to load posts: {err}"),
            }
            set_loading.set(false);
        });
    };
    load_posts();

    let open_post = move |post_id: Uuid| {
        leptos::task::spawn_local(async move {
            let post = client()
                .from("posts")
                .select("*, profiles(full_name)")
                .eq("id", post_id)
                .maybe_single::<Post>()
                .await;
            let comments = client()
                .from("comments")
                .select("*, profiles(full_name)")
                .eq("post_id", post_id)
                .order("created_at", true)
                .fetch::<Comment>()
                .await;
            match (post, comments) {
                (Ok(Some(post)), Ok(comments)) => detail.set(Some(PostDetail { post, comments })),
                (Ok(None), _) => detail.set(None),
                (Err(err), _) | (_, Err(err)) => {
                    log::error!("failed to load post details: {err}");
                }
            }
        });
    };

    let close_post_modal = move || {
        set_show_post_modal.set(false);
        editing_post.set(None);
        post_form.set(PostForm::default());
    };

    let on_edit_post = move |post: Post| {
        post_form.set(PostForm {
            title: post.title.clone(),
            content: post.content.clone(),
        });
        editing_post.set(Some(post));
        set_show_post_modal.set(true);
    };

    let on_submit_post = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.user_id() else {
            return;
        };
        let form_data = post_form.get();
        let current = editing_post.get();
        leptos::task::spawn_local(async move {
            let result = match &current {
                Some(post) => {
                    client()
                        .from("posts")
                        .eq("id", post.id)
                        .update(&PostUpdate {
                            title: form_data.title.clone(),
                            content: form_data.content.clone(),
                            updated_at: Utc::now(),
                        })
                        .await
                }
                None => {
                    client()
                        .from("posts")
                        .insert(&NewPost {
                            user_id,
                            title: form_data.title.clone(),
                            content: form_data.content.clone(),
                        })
                        .await
                }
            };
            match result {
                Ok(()) => {
                    close_post_modal();
                    load_posts();
                }
                Err(err) => {
                    log::error!("failed to save post: {err}");
                    alert("Failed to save post");
                }
            }
        });
    };

    let on_delete_post = move |post_id: Uuid| {
        if !confirm("Are you sure you want to delete this post?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match client().from("posts").eq("id", post_id).delete().await {
                Ok(()) => {
                    if detail.with(|d| d.as_ref().map(|d| d.post.id) == Some(post_id)) {
                        detail.set(None);
                    }
                    load_posts();
                }
                Err(err) => {
                    log::error!("failed to delete post: {err}");
                    alert("Failed to delete post");
                }
            }
        });
    };

    let on_submit_comment = move |ev: SubmitEvent| {
        ev.prevent_default();
        let content = comment_text.get();
        if content.trim().is_empty() {
            return;
        }
        let Some(user_id) = auth.user_id() else {
            return;
        };
        let Some(post_id) = detail.with(|d| d.as_ref().map(|d| d.post.id)) else {
            return;
        };
        let current = editing_comment.get();
        leptos::task::spawn_local(async move {
            let result = match &current {
                Some(comment) => {
                    client()
                        .from("comments")
                        .eq("id", comment.id)
                        .update(&CommentUpdate {
                            content: content.clone(),
                            updated_at: Utc::now(),
                        })
                        .await
                }
                None => {
                    client()
                        .from("comments")
                        .insert(&NewComment {
                            post_id,
                            user_id,
                            content: content.clone(),
                        })
                        .await
                }
            };
            match result {
                Ok(()) => {
                    editing_comment.set(None);
                    set_comment_text.set(String::new());
                    open_post(post_id);
                    load_posts();
                }
                Err(err) => {
                    log::error!("failed to save comment: {err}");
                    alert("Failed to save comment");
                }
            }
        });
    };

    let on_delete_comment = move |comment_id: Uuid| {
        if !confirm("Are you sure you want to delete this comment?") {
            return;
        }
        let Some(post_id) = detail.with(|d| d.as_ref().map(|d| d.post.id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match client().from("comments").eq("id", comment_id).delete().await {
                Ok(()) => {
                    open_post(post_id);
                    load_posts();
                }
                Err(err) => {
                    log::error!("failed to delete comment: {err}");
                    alert("Failed to delete comment");
                }
            }
        });
    };

    let on_edit_comment = move |comment: Comment| {
        set_comment_text.set(comment.content.clone());
        editing_comment.set(Some(comment));
    };

    view! {
        <div>
            <div class="section-header">
                <div>
                    <h2>"Community Forum"</h2>
                    <p class="section-subtitle">"Share knowledge and connect with fellow farmers"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_post_modal.set(true)>
                    "New Post"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading-note">"Loading forum..."</p> }.into_any();
                }
                view! {
                    <div class="split-layout">
                        <div class="item-panel">
                            <h3>"Recent Discussions"</h3>
                            <div class="item-list">
                                {move || {
                                    let rows = posts.get();
                                    if rows.is_empty() {
                                        return view! {
                                            <p class="empty-row">"No posts yet. Start a discussion!"</p>
                                        }
                                        .into_any();
                                    }
                                    rows.into_iter()
                                        .map(|post| {
                                            let post_id = post.id;
                                            let is_open = move || {
                                                detail.with(|d| {
                                                    d.as_ref().map(|d| d.post.id) == Some(post_id)
                                                })
                                            };
                                            let author = post.author_name().to_string();
                                            let comment_count = post.comment_count();
                                            view! {
                                                <button
                                                    class=move || {
                                                        if is_open() {
                                                            "item-row item-row-selected"
                                                        } else {
                                                            "item-row"
                                                        }
                                                    }
                                                    on:click=move |_| open_post(post_id)
                                                >
                                                    <span class="item-row-name">
                                                        {post.title.clone()}
                                                        <small>{author}</small>
                                                    </span>
                                                    <span class="item-row-price">
                                                        <small>
                                                            {format!("{comment_count} comments")}
                                                        </small>
                                                    </span>
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                        </div>

                        <div class="chart-panel">
                            {move || {
                                let Some(current) = detail.get() else {
                                    return view! {
                                        <div class="placeholder">
                                            <h3>"Select a Discussion"</h3>
                                            <p>
                                                "Choose a post from the list to view the discussion and add comments"
                                            </p>
                                        </div>
                                    }
                                    .into_any();
                                };
                                let post = current.post.clone();
                                let own_post = auth.user_id() == Some(post.user_id);
                                let edit_post = post.clone();
                                let post_id = post.id;
                                view! {
                                    <div class="post-detail">
                                        <div class="post-header">
                                            <div>
                                                <h3>{post.title.clone()}</h3>
                                                <p class="section-subtitle">
                                                    {format!(
                                                        "Posted by {} on {}",
                                                        post.author_name(),
                                                        medium_date(post.created_at.date_naive()),
                                                    )}
                                                </p>
                                            </div>
                                            {own_post
                                                .then(|| {
                                                    view! {
                                                        <div class="button-row">
                                                            <button
                                                                class="btn-link"
                                                                on:click=move |_| on_edit_post(edit_post.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn-link btn-danger"
                                                                on:click=move |_| on_delete_post(post_id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                        <p class="post-content">{post.content.clone()}</p>

                                        <h4>{format!("Comments ({})", current.comments.len())}</h4>
                                        <div class="comment-list">
                                            {if current.comments.is_empty() {
                                                view! {
                                                    <p class="empty-row">
                                                        "No comments yet. Be the first to comment!"
                                                    </p>
                                                }
                                                .into_any()
                                            } else {
                                                current
                                                    .comments
                                                    .iter()
                                                    .map(|comment| {
                                                        let own_comment =
                                                            auth.user_id() == Some(comment.user_id);
                                                        let edit_comment = comment.clone();
                                                        let comment_id = comment.id;
                                                        view! {
                                                            <div class="comment-card">
                                                                <div class="comment-header">
                                                                    <div>
                                                                        <strong>{comment.author_name().to_string()}</strong>
                                                                        <small>{timestamp(&comment.created_at)}</small>
                                                                    </div>
                                                                    {own_comment
                                                                        .then(|| {
                                                                            view! {
                                                                                <div class="button-row">
                                                                                    <button
                                                                                        class="btn-link"
                                                                                        on:click=move |_| on_edit_comment(
                                                                                            edit_comment.clone(),
                                                                                        )
                                                                                    >
                                                                                        "Edit"
                                                                                    </button>
                                                                                    <button
                                                                                        class="btn-link btn-danger"
                                                                                        on:click=move |_| on_delete_comment(comment_id)
                                                                                    >
                                                                                        "Delete"
                                                                                    </button>
                                                                                </div>
                                                                            }
                                                                        })}
                                                                </div>
                                                                <p>{comment.content.clone()}</p>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()
                                                    .into_any()
                                            }}
                                        </div>

                                        <form class="comment-form" on:submit=on_submit_comment>
                                            <input
                                                type="text"
                                                class="form-input"
                                                placeholder=move || {
                                                    if editing_comment.with(|e| e.is_some()) {
                                                        "Update your comment..."
                                                    } else {
                                                        "Add a comment..."
                                                    }
                                                }
                                                prop:value=move || comment_text.get()
                                                on:input=move |ev| {
                                                    set_comment_text.set(input_value(&ev));
                                                }
                                            />
                                            {move || {
                                                editing_comment
                                                    .with(|e| e.is_some())
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    editing_comment.set(None);
                                                                    set_comment_text.set(String::new());
                                                                }
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        }
                                                    })
                                            }}
                                            <button
                                                type="submit"
                                                class="btn btn-primary"
                                                disabled=move || comment_text.with(|c| c.trim().is_empty())
                                            >
                                                {move || {
                                                    if editing_comment.with(|e| e.is_some()) {
                                                        "Update"
                                                    } else {
                                                        "Send"
                                                    }
                                                }}
                                            </button>
                                        </form>
                                    </div>
                                }
                                .into_any()
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }}

            {move || {
                show_post_modal.get().then(|| {
                    view! {
                        <div class="modal-overlay">
                            <div class="modal modal-wide">
                                <div class="modal-header">
                                    <h3>
                                        {move || {
                                            if editing_post.with(|e| e.is_some()) {
                                                "Edit Post"
                                            } else {
                                                "Create New Post"
                                            }
                                        }}
                                    </h3>
                                    <button class="btn-close" on:click=move |_| close_post_modal()>
                                        "×"
                                    </button>
                                </div>
                                <form on:submit=on_submit_post>
                                    <label class="form-label">"Title"</label>
                                    <input
                                        type="text"
                                        class="form-input"
                                        required
                                        placeholder="Enter post title"
                                        prop:value=move || post_form.with(|f| f.title.clone())
                                        on:input=move |ev| {
                                            let value = input_value(&ev);
                                            post_form.update(|f| f.title = value);
                                        }
                                    />

                                    <label class="form-label">"Content"</label>
                                    <textarea
                                        class="form-input"
                                        required
                                        rows="6"
                                        placeholder="Share your knowledge, ask questions, or discuss farming topics..."
                                        prop:value=move || post_form.with(|f| f.content.clone())
                                        on:input=move |ev| {
                                            let value = input_value(&ev);
                                            post_form.update(|f| f.content = value);
                                        }
                                    ></textarea>

                                    <div class="modal-actions">
                                        <button type="button" class="btn" on:click=move |_| close_post_modal()>
                                            "Cancel"
                                        </button>
                                        <button type="submit" class="btn btn-primary">
                                            {move || {
                                                if editing_post.with(|e| e.is_some()) {
                                                    "Update Post"
                                                } else {
                                                    "Create Post"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
