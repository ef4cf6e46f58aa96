//! Contact form state. Submission is simulated: the form sits in `Sending`
//! for a fixed delay and then resets. It cannot fail once validated.

use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    sending: bool,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::MissingField("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(SiteError::MissingField("Email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SiteError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::MissingField("Message"));
        }
        Ok(())
    }

    /// Validates and enters the sending state. Returns `Ok(false)` if a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<bool> {
        if self.sending {
            return Ok(false);
        }
        self.validate()?;
        self.sending = true;
        Ok(true)
    }

    /// Called when the fake round-trip ends: all fields cleared.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
