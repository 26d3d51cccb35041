//! Support tickets raised by ticket buyers and member schools
use std::fmt;

use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketPriority {
    Normal,
    High,
}

impl TicketPriority {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Admin,
}

impl Sender {
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketMessage {
    pub sender: Sender,
    pub time: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTicket {
    /// e.g. "T-1001"
    pub id: String,
    pub subject: String,
    pub user_email: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub sport: Option<String>,
    pub messages: Vec<TicketMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportDesk {
    tickets: Vec<SupportTicket>,
}

impl SupportDesk {
    pub fn new(tickets: Vec<SupportTicket>) -> Self {
        Self { tickets }
    }

    pub fn all(&self) -> &[SupportTicket] {
        &self.tickets
    }

    pub fn get(&self, id: &str) -> Option<&SupportTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets still waiting on a first look
    pub fn open_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count()
    }

    /// Append an admin message; the ticket moves to Pending until the user
    /// answers
    pub fn reply(&mut self, id: &str, text: &str, time: String) -> LeagueResult<&SupportTicket> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LeagueError::MissingField("Reply"));
        }
        let index = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Ticket, id))?;
        let ticket = &mut self.tickets[index];
        debug!("SUPPORT: Reply on {}", ticket.id);
        ticket.messages.push(TicketMessage {
            sender: Sender::Admin,
            time: time.clone(),
            text: text.to_string(),
        });
        ticket.updated_at = time;
        if ticket.status == TicketStatus::Open {
            ticket.status = TicketStatus::Pending;
        }
        Ok(&self.tickets[index])
    }
}
