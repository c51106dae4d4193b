//! Transient status banners.
//!
//! One error slot and one success slot, each independently visible. Every
//! banner gets a fresh [`BannerId`]; showing one returns a [`DismissTicket`]
//! for the host to fire after [`BANNER_TIMEOUT`]. A ticket only clears the
//! banner it was issued for, so a replaced banner's timer cannot clear its
//! successor.

use std::time::Duration;

/// How long a banner stays up
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub message: String,
}

/// Scheduled auto-dismissal of one banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "schedule the ticket or the banner never clears"]
pub struct DismissTicket {
    pub id: BannerId,
    pub kind: BannerKind,
    pub after: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Banners {
    error: Option<Banner>,
    success: Option<Banner>,
    next_id: u64,
}

impl Banners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever occupied the slot
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> DismissTicket {
        self.next_id += 1;
        let id = BannerId(self.next_id);
        let banner = Banner {
            id,
            kind,
            message: message.into(),
        };

        *self.slot_mut(kind) = Some(banner);

        DismissTicket {
            id,
            kind,
            after: BANNER_TIMEOUT,
        }
    }

    pub fn error(&mut self, message: impl Into<String>) -> DismissTicket {
        self.show(BannerKind::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> DismissTicket {
        self.show(BannerKind::Success, message)
    }

    /// Fire a ticket. Returns whether a banner was cleared.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        let slot = self.slot_mut(ticket.kind);
        if slot.as_ref().is_some_and(|banner| banner.id == ticket.id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self, kind: BannerKind) -> Option<&Banner> {
        match kind {
            BannerKind::Error => self.error.as_ref(),
            BannerKind::Success => self.success.as_ref(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|b| b.message.as_str())
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_ref().map(|b| b.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.success.is_none()
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    fn slot_mut(&mut self, kind: BannerKind) -> &mut Option<Banner> {
        match kind {
            BannerKind::Error => &mut self.error,
            BannerKind::Success => &mut self.success,
        }
    }
}
