//! Support ticket domain model.

/// Prefix shared by every ticket channel name.
pub const TICKET_CHANNEL_PREFIX: &str = "ticket-";

/// A ticket that has been assigned a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub number: u64,
}

impl Ticket {
    /// Name of the private channel created for this ticket, e.g. `ticket-7`.
    pub fn channel_name(&self) -> String {
        format!("{}{}", TICKET_CHANNEL_PREFIX, self.number)
    }

    /// Embed title, e.g. `Ticket #7`.
    pub fn title(&self) -> String {
        format!("Ticket #{}", self.number)
    }

    /// Checks whether a channel name belongs to a ticket.
    pub fn is_ticket_channel(name: &str) -> bool {
        name.strip_prefix(TICKET_CHANNEL_PREFIX)
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
    }
}
