//! Papers and the review posts attached to them.
//!
//! All operations are `impl Instance` methods taking the acting username.
//! Papers may only be changed by their owner and posts only by their author.
//! Deleting a paper deletes its posts on a best-effort basis: there is no
//! transaction, so a failure part way through leaves the remaining posts in
//! place and is reported in [`DeletedPaper`].

pub mod errors;
pub mod forms;
mod posts;

use std::collections::HashMap;

pub use errors::PaperError;
pub use forms::{PaperForm, PostForm, parse_score};

use crate::{
    Instance, Oid, Result,
    models::{Paper, Post},
};

/// Which papers [`Instance::list_papers`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaperFilter {
    #[default]
    All,
    /// Papers the user owns or co-authors
    AuthoredBy(String),
}

impl PaperFilter {
    fn matches(&self, paper: &Paper) -> bool {
        match self {
            PaperFilter::All => true,
            PaperFilter::AuthoredBy(username) => paper.is_author(username),
        }
    }
}

/// One row of the paper listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperSummary {
    pub id: Oid,
    pub paper: Paper,
    pub post_count: usize,
    pub average_score: f64,
}

/// Everything the paper page shows, seen from one viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperDetail {
    pub id: Oid,
    pub paper: Paper,
    /// Posts on this paper, oldest first
    pub posts: Vec<(Oid, Post)>,
    pub average_score: f64,
    /// The viewer already posted on this paper
    pub has_reviewed: bool,
    /// The viewer owns or co-authors the paper
    pub is_author: bool,
    /// The viewer may edit and delete the paper
    pub is_owner: bool,
}

/// Outcome of a cascading paper delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedPaper {
    pub posts_removed: usize,
    pub posts_failed: usize,
}

impl DeletedPaper {
    /// Whether every attached post was removed.
    pub fn is_complete(&self) -> bool {
        self.posts_failed == 0
    }
}

/// Mean of the scored posts, rounded to two decimal places.
///
/// Returns `0.0` when no post carries a score.
///
/// ```
/// # use paperboard::papers::average_score;
/// assert_eq!(average_score([Some(3), None, Some(5)]), 4.0);
/// assert_eq!(average_score([None, None]), 0.0);
/// ```
pub fn average_score(scores: impl IntoIterator<Item = Option<u8>>) -> f64 {
    let (sum, count) = scores
        .into_iter()
        .flatten()
        .fold((0u64, 0u64), |(sum, count), s| (sum + u64::from(s), count + 1));
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 100.0).round() / 100.0
}

fn paper_not_found(id: &Oid) -> crate::Error {
    PaperError::PaperNotFound { id: id.to_string() }.into()
}

impl Instance {
    /// Load a paper, mapping every kind of miss to `PaperError::PaperNotFound`.
    pub async fn get_paper(&self, id: &Oid) -> Result<Paper> {
        match self.papers().load(id).await {
            Ok(Some(paper)) => Ok(paper),
            Ok(None) => Err(paper_not_found(id)),
            Err(e) if e.is_not_found() => Err(paper_not_found(id)),
            Err(e) => Err(e),
        }
    }

    /// List papers in creation order with their post counts and averages.
    pub async fn list_papers(&self, filter: &PaperFilter) -> Result<Vec<PaperSummary>> {
        let papers = self.papers().search(|p| filter.matches(p)).await?;

        let mut scores: HashMap<Oid, Vec<Option<u8>>> = HashMap::new();
        for (_, post) in self.posts().load_all().await? {
            scores.entry(post.paper_id).or_default().push(post.score);
        }

        Ok(papers
            .into_iter()
            .map(|(id, paper)| {
                let paper_scores = scores.remove(&id).unwrap_or_default();
                PaperSummary {
                    post_count: paper_scores.len(),
                    average_score: average_score(paper_scores),
                    id,
                    paper,
                }
            })
            .collect())
    }

    /// Load a paper with its posts, as seen by `viewer`.
    pub async fn paper_detail(&self, id: &Oid, viewer: &str) -> Result<PaperDetail> {
        let paper = self.get_paper(id).await?;
        let posts = self.posts_for(id).await?;

        Ok(PaperDetail {
            average_score: average_score(posts.iter().map(|(_, p)| p.score)),
            has_reviewed: posts.iter().any(|(_, p)| p.user_id == viewer),
            is_author: paper.is_author(viewer),
            is_owner: paper.owner == viewer,
            id: id.clone(),
            paper,
            posts,
        })
    }

    /// Validate and store a new paper owned by `owner`.
    pub async fn add_paper(&self, owner: &str, form: PaperForm) -> Result<Oid> {
        let paper = form.into_paper(owner)?;
        let id = self.papers().insert(paper).await?;
        tracing::info!(%id, owner, "Added paper");
        Ok(id)
    }

    /// Overwrite every field of a paper. Only the owner may edit.
    pub async fn edit_paper(&self, id: &Oid, editor: &str, form: PaperForm) -> Result<()> {
        let current = self.get_paper(id).await?;
        if current.owner != editor {
            return Err(PaperError::NotOwner {
                username: editor.to_string(),
                paper: id.to_string(),
            }
            .into());
        }

        let paper = form.into_paper(&current.owner)?;
        self.papers().set(id, paper).await?;
        tracing::info!(%id, editor, "Edited paper");
        Ok(())
    }

    /// Delete a paper and then each of its posts. Only the owner may delete.
    ///
    /// Post deletions that fail are logged and counted; they do not undo the
    /// paper delete.
    pub async fn delete_paper(&self, id: &Oid, actor: &str) -> Result<DeletedPaper> {
        let paper = self.get_paper(id).await?;
        if paper.owner != actor {
            return Err(PaperError::NotOwner {
                username: actor.to_string(),
                paper: id.to_string(),
            }
            .into());
        }

        if !self.papers().delete(id).await? {
            return Err(paper_not_found(id));
        }

        let mut outcome = DeletedPaper::default();
        let posts = self.posts();
        for (post_id, _) in posts.search(|p| &p.paper_id == id).await? {
            match posts.delete(&post_id).await {
                Ok(_) => outcome.posts_removed += 1,
                Err(e) => {
                    tracing::warn!(paper = %id, post = %post_id, error = %e, "Failed to delete post of deleted paper");
                    outcome.posts_failed += 1;
                }
            }
        }

        tracing::info!(
            %id,
            actor,
            posts_removed = outcome.posts_removed,
            posts_failed = outcome.posts_failed,
            "Deleted paper"
        );
        Ok(outcome)
    }
}
