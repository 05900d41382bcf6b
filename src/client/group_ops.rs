use super::NntpClient;
use super::io::collect_records;
use crate::commands::{self, Group, GroupArticles};
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// Select a newsgroup (GROUP)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - e.g. 411
    ///   when the newsgroup does not exist; the selected group is unchanged
    /// - [`NntpError::MalformedGroupLine`](crate::NntpError::MalformedGroupLine) - The
    ///   211 line could not be tokenized
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<Group> {
        debug!("Selecting newsgroup: {}", newsgroup);

        let (_, message) = self
            .transact(&commands::group(newsgroup), &[codes::GROUP_SELECTED])
            .await?;
        let group = commands::parse_group_line(&message)?;
        self.current_group = Some(group.name.clone());

        debug!(
            "Group {} selected: {} articles ({}-{})",
            group.name, group.number, group.low, group.high
        );
        Ok(group)
    }

    /// Alias for [`select_group`](Self::select_group)
    pub async fn group(&mut self, newsgroup: &str) -> Result<Group> {
        self.select_group(newsgroup).await
    }

    /// Select a newsgroup and list its article numbers (RFC 3977 Section 6.1.2)
    ///
    /// `range` limits the listing, e.g. "100-200", "100-".
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_engine::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut client = NntpClient::connect(Arc::new(ServerConfig::tls("news.example.com"))).await?;
    /// let listing = client.listgroup("misc.test", Some("1000-2000")).await?;
    /// println!("{} of {} articles", listing.articles.len(), listing.group.number);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// As for [`select_group`](Self::select_group); a body line that is not an article
    /// number fails the listing with [`NntpError::Parse`](crate::NntpError::Parse).
    pub async fn listgroup(
        &mut self,
        newsgroup: &str,
        range: Option<&str>,
    ) -> Result<GroupArticles> {
        debug!("Listing articles in group: {}", newsgroup);

        let cmd = match range {
            Some(r) => commands::listgroup_range(newsgroup, r),
            None => commands::listgroup(newsgroup),
        };

        let (message, mut block) = self
            .transact_block(&cmd, &[codes::GROUP_SELECTED])
            .await?;
        let group = match commands::parse_group_line(&message) {
            Ok(group) => group,
            Err(e) => {
                block.drain().await?;
                return Err(e);
            }
        };
        let articles = collect_records(block, commands::parse_article_number).await?;

        self.current_group = Some(group.name.clone());
        debug!("Found {} articles in group {}", articles.len(), group.name);
        Ok(GroupArticles { group, articles })
    }
}
