use crate::domain::error::ProviderError;
use crate::domain::values::movement::DailySession;
use async_trait::async_trait;

/// Source of daily open/close data for a single symbol.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Most recent trading session for `symbol`.
    ///
    /// `Ok(None)` means the upstream answered but has no session for the
    /// symbol (delisted, illiquid, holiday). Transport and decoding
    /// failures come back as `Err`.
    async fn latest_session(&self, symbol: &str) -> Result<Option<DailySession>, ProviderError>;
}
