//! Outbound email domain types

/// Ports on which the relay expects an already-encrypted (SMTPS) connection.
/// Every other port starts in plain text and upgrades with STARTTLS.
pub const IMPLICIT_TLS_PORTS: &[u16] = &[465, 8465, 443];

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// TLS from the first byte
    ImplicitTls,
    /// Plain connection upgraded with STARTTLS before authenticating
    StartTls,
}

impl TransportMode {
    /// Pick the transport mode for a relay port
    pub fn for_port(port: u16) -> Self {
        if IMPLICIT_TLS_PORTS.contains(&port) {
            Self::ImplicitTls
        } else {
            Self::StartTls
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImplicitTls => "implicit_tls",
            Self::StartTls => "starttls",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address with optional display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    /// RFC 5322 mailbox form accepted by the SMTP message builder
    pub fn to_mailbox_string(&self) -> String {
        match &self.name {
            Some(name) => format!("{} <{}>", name, self.email),
            None => self.email.clone(),
        }
    }
}

/// A fully rendered message, built once per submission and consumed by a
/// single delivery attempt.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundEmail {
    pub fn new(
        from: EmailAddress,
        to: EmailAddress,
        subject: impl Into<String>,
        text_body: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            reply_to: None,
            subject: subject.into(),
            text_body: text_body.into(),
            html_body: html_body.into(),
        }
    }

    pub fn with_reply_to(mut self, reply_to: EmailAddress) -> Self {
        self.reply_to = Some(reply_to);
        self
    }
}
