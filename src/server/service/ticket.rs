use crate::server::{data::bot_config::BotConfigStore, error::AppError, model::ticket::Ticket};

/// Service assigning numbers to support tickets.
pub struct TicketService<'a> {
    config: &'a BotConfigStore,
}

impl<'a> TicketService<'a> {
    pub fn new(config: &'a BotConfigStore) -> Self {
        Self { config }
    }

    /// Claims the next ticket number.
    ///
    /// The number is claimed before the ticket channel exists. If creating the
    /// channel fails afterwards the number is skipped, never reused.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket carrying the claimed number
    /// - `Err(AppError::IoErr)` - Counter could not be persisted
    pub async fn open(&self) -> Result<Ticket, AppError> {
        let number = self.config.claim_ticket_number().await?;

        Ok(Ticket { number })
    }
}
