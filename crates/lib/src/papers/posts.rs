use super::{PaperError, PostForm};
use crate::{Instance, Oid, Result, models::Post};

fn post_not_found(id: &Oid) -> crate::Error {
    PaperError::PostNotFound { id: id.to_string() }.into()
}

impl Instance {
    /// Load a post, mapping every kind of miss to `PaperError::PostNotFound`.
    pub async fn get_post(&self, id: &Oid) -> Result<Post> {
        match self.posts().load(id).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(post_not_found(id)),
            Err(e) if e.is_not_found() => Err(post_not_found(id)),
            Err(e) => Err(e),
        }
    }

    /// Posts on a paper, oldest first.
    pub async fn posts_for(&self, paper: &Oid) -> Result<Vec<(Oid, Post)>> {
        self.posts().search(|p| &p.paper_id == paper).await
    }

    /// Attach a new post by `author` to an existing paper.
    pub async fn add_post(&self, paper: &Oid, author: &str, form: PostForm) -> Result<Oid> {
        self.get_paper(paper).await?;

        let post = Post {
            content: form.content()?,
            user_id: author.to_string(),
            paper_id: paper.clone(),
            score: form.score()?,
            timestamp: self.clock().now_millis(),
        };
        let id = self.posts().insert(post).await?;
        tracing::info!(%id, %paper, author, "Added post");
        Ok(id)
    }

    /// Replace a post's content, and its score when the form carries a score
    /// field. Only the author may edit.
    ///
    /// Returns the parent paper's id.
    pub async fn edit_post(&self, id: &Oid, editor: &str, form: PostForm) -> Result<Oid> {
        let mut post = self.get_post(id).await?;
        if post.user_id != editor {
            return Err(PaperError::NotAuthor {
                username: editor.to_string(),
                post: id.to_string(),
            }
            .into());
        }

        post.content = form.content()?;
        if form.score.is_some() {
            post.score = form.score()?;
        }
        let paper = post.paper_id.clone();
        self.posts().set(id, post).await?;
        tracing::info!(%id, editor, "Edited post");
        Ok(paper)
    }

    /// Delete a post. Only the author may delete.
    ///
    /// Returns the parent paper's id.
    pub async fn delete_post(&self, id: &Oid, actor: &str) -> Result<Oid> {
        let post = self.get_post(id).await?;
        if post.user_id != actor {
            return Err(PaperError::NotAuthor {
                username: actor.to_string(),
                post: id.to_string(),
            }
            .into());
        }

        if !self.posts().delete(id).await? {
            return Err(post_not_found(id));
        }
        tracing::info!(%id, actor, "Deleted post");
        Ok(post.paper_id)
    }
}
