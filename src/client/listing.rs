//! Group catalogue listings (LIST / LIST ACTIVE)

use super::NntpClient;
use super::io::collect_records;
use crate::commands::{self, GroupListing};
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// List every newsgroup the server carries (LIST)
    ///
    /// The whole catalogue is decoded; the first malformed line fails the listing with
    /// [`NntpError::MalformedGroupLine`](crate::NntpError::MalformedGroupLine) after the
    /// rest of the block has been drained.
    pub async fn list(&mut self) -> Result<Vec<GroupListing>> {
        self.list_with(commands::list()).await
    }

    /// List newsgroups matching a wildmat (LIST ACTIVE, RFC 3977 §7.6.3)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_engine::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut client = NntpClient::connect(Arc::new(ServerConfig::tls("news.example.com"))).await?;
    /// for group in client.list_active("comp.lang.*").await? {
    ///     println!("{} {}-{}", group.name, group.low, group.high);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_active(&mut self, wildmat: &str) -> Result<Vec<GroupListing>> {
        self.list_with(&commands::list_active(wildmat)).await
    }

    async fn list_with(&mut self, command: &str) -> Result<Vec<GroupListing>> {
        debug!("Listing newsgroups: {}", command);
        let (_, block) = self
            .transact_block(command, &[codes::LIST_INFORMATION_FOLLOWS])
            .await?;
        let groups = collect_records(block, commands::parse_list_line).await?;
        debug!("Received {} newsgroups", groups.len());
        Ok(groups)
    }
}
