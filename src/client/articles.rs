//! Article retrieval (ARTICLE, HEAD, BODY) and navigation (STAT, NEXT, LAST)

use super::NntpClient;
use crate::article::{self, Article, Headers};
use crate::commands::{self, ArticleInfo};
use crate::connection::DotBlock;
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// Fetch an article by message-id or number (ARTICLE)
    ///
    /// Headers are decoded up front; the body stays on the wire and borrows the session
    /// until it has been read or drained.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_engine::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut client = NntpClient::connect(Arc::new(ServerConfig::tls("news.example.com"))).await?;
    /// let mut article = client.article("<45223423@example.com>").await?;
    /// println!("Subject: {:?}", article.headers.subject());
    /// while let Some(line) = article.body.next_line().await? {
    ///     println!("{}", line);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - e.g. 430
    ///   no such article, 423 no article with that number, 412 no group selected
    /// - [`NntpError::Parse`](crate::NntpError::Parse) - a malformed header line; the
    ///   block has been drained
    pub async fn article(&mut self, id: &str) -> Result<Article<'_>> {
        debug!("Fetching article {}", id);
        let (_, block) = self
            .transact_block(&commands::article(id), &[codes::ARTICLE_FOLLOWS])
            .await?;
        article::parse_article(block).await
    }

    /// Fetch only the headers of an article (HEAD)
    pub async fn head(&mut self, id: &str) -> Result<Headers> {
        debug!("Fetching headers of {}", id);
        let (_, block) = self
            .transact_block(&commands::head(id), &[codes::HEAD_FOLLOWS])
            .await?;
        article::parse_header_block(block).await
    }

    /// Fetch only the body of an article (BODY), as a lazy line reader
    pub async fn body(&mut self, id: &str) -> Result<DotBlock<'_>> {
        debug!("Fetching body of {}", id);
        let (_, block) = self
            .transact_block(&commands::body(id), &[codes::BODY_FOLLOWS])
            .await?;
        Ok(block)
    }

    /// Check that an article exists without transferring it (STAT)
    ///
    /// With an article number, the current article pointer moves to it.
    pub async fn stat(&mut self, id: &str) -> Result<ArticleInfo> {
        self.article_pointer(&commands::stat(id)).await
    }

    /// Advance the current article pointer (NEXT)
    pub async fn next(&mut self) -> Result<ArticleInfo> {
        self.article_pointer(commands::next()).await
    }

    /// Move the current article pointer back (LAST)
    pub async fn last(&mut self) -> Result<ArticleInfo> {
        self.article_pointer(commands::last()).await
    }

    async fn article_pointer(&mut self, command: &str) -> Result<ArticleInfo> {
        let (_, message) = self.transact(command, &[codes::ARTICLE_STAT]).await?;
        commands::parse_article_info(&message)
    }
}
