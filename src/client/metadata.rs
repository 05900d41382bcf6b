//! Overview data and server metadata (OVER/XOVER, CAPABILITIES, HELP, DATE)

use super::NntpClient;
use super::io::collect_records;
use crate::capabilities::Capabilities;
use crate::commands::{self, ArticleOverview};
use crate::error::Result;
use crate::response::codes;
use chrono::{DateTime, Utc};
use tracing::debug;

impl NntpClient {
    /// Fetch overview records for a range of the current group (OVER, RFC 3977 §8.3)
    ///
    /// `range` is an article number, a range such as "100-200" or "100-", or a
    /// message-id. An empty `range` asks for the current article.
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - e.g. 412
    ///   no group selected, 423 empty range
    /// - [`NntpError::Parse`](crate::NntpError::Parse) - a record whose number, byte
    ///   count or line count does not parse; the block has been drained. An unparseable
    ///   date is not an error.
    pub async fn over(&mut self, range: &str) -> Result<Vec<ArticleOverview>> {
        self.overview(&commands::over(range)).await
    }

    /// Same as [`over`](Self::over) using the pre-RFC 3977 XOVER command
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_engine::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut client = NntpClient::connect(Arc::new(ServerConfig::tls("news.example.com"))).await?;
    /// client.select_group("misc.test").await?;
    /// for entry in client.xover("3000234-3000240").await? {
    ///     println!("{} {} ({} bytes)", entry.number, entry.subject, entry.bytes);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn xover(&mut self, range: &str) -> Result<Vec<ArticleOverview>> {
        self.overview(&commands::xover(range)).await
    }

    async fn overview(&mut self, command: &str) -> Result<Vec<ArticleOverview>> {
        let (_, block) = self
            .transact_block(command, &[codes::OVERVIEW_INFO_FOLLOWS])
            .await?;
        let entries = collect_records(block, commands::parse_overview_line).await?;
        debug!("Received {} overview records", entries.len());
        Ok(entries)
    }

    /// Ask the server what it supports (CAPABILITIES, RFC 3977 §5.2)
    pub async fn capabilities(&mut self) -> Result<Capabilities> {
        let (_, block) = self
            .transact_block(commands::capabilities(), &[codes::CAPABILITY_LIST])
            .await?;
        let lines = block.collect_lines().await?;
        Ok(Capabilities::parse(&lines))
    }

    /// Server help text (HELP), one entry per line
    pub async fn help(&mut self) -> Result<Vec<String>> {
        let (_, block) = self
            .transact_block(commands::help(), &[codes::HELP_TEXT_FOLLOWS])
            .await?;
        block.collect_lines().await
    }

    /// Server's current time in UTC (DATE, RFC 3977 §7.1)
    pub async fn date(&mut self) -> Result<DateTime<Utc>> {
        let (_, message) = self
            .transact(commands::date(), &[codes::SERVER_DATE])
            .await?;
        commands::parse_date_response(&message)
    }
}
