//! Website notification emails
//!
//! Turns a validated submission into an [`OutboundEmail`] and hands it to the
//! [`EmailService`].

use crate::config::{DownloadConfig, MailConfig};
use crate::domain::{
    AppDownloadRequest, ContactForm, EmailAddress, OutboundEmail, PartnershipInquiry,
};
use crate::email::{EmailProviderError, EmailTemplate, TemplateEngine};
use crate::service::EmailService;
use std::sync::Arc;

pub struct NotificationService {
    email_service: Arc<EmailService>,
    download: DownloadConfig,
}

impl NotificationService {
    pub fn new(email_service: Arc<EmailService>, download: DownloadConfig) -> Self {
        Self {
            email_service,
            download,
        }
    }

    fn mail(&self) -> &MailConfig {
        self.email_service.config()
    }

    fn sender(&self) -> EmailAddress {
        let mail = self.mail();
        match &mail.from_name {
            Some(name) => EmailAddress::with_name(&mail.from_email, name),
            None => EmailAddress::new(&mail.from_email),
        }
    }

    /// Admin notification for a partnership inquiry; replies go to the inquirer
    pub fn compose_partnership_inquiry(&self, inquiry: &PartnershipInquiry) -> OutboundEmail {
        let mut engine = TemplateEngine::new();
        engine
            .set("inquiry_type", inquiry.inquiry_type.label())
            .set("name", &inquiry.name)
            .set("email", &inquiry.email)
            .set("organization", inquiry.organization_or_default())
            .set("message", &inquiry.message);
        let rendered = engine.render_template(EmailTemplate::PartnershipInquiry);

        OutboundEmail::new(
            self.sender(),
            EmailAddress::new(&self.mail().admin_email),
            rendered.subject,
            rendered.text_body,
            rendered.html_body,
        )
        .with_reply_to(EmailAddress::new(&inquiry.email))
    }

    /// APK download email sent to the requester.
    ///
    /// Fails when no download file is configured.
    pub fn compose_app_download(
        &self,
        request: &AppDownloadRequest,
    ) -> Result<OutboundEmail, EmailProviderError> {
        let (share_link, direct_link) =
            match (self.download.share_link(), self.download.direct_link()) {
                (Some(share), Some(direct)) => (share, direct),
                _ => {
                    return Err(EmailProviderError::InvalidConfiguration(
                        "Download link not configured".to_string(),
                    ))
                }
            };

        let mut engine = TemplateEngine::new();
        engine
            .set("download_link", share_link)
            .set("direct_download_link", direct_link);
        let rendered = engine.render_template(EmailTemplate::AppDownload);

        Ok(OutboundEmail::new(
            self.sender(),
            EmailAddress::new(&request.email),
            rendered.subject,
            rendered.text_body,
            rendered.html_body,
        ))
    }

    /// Admin notification for a contact form; replies go to the sender
    pub fn compose_contact_form(&self, contact: &ContactForm) -> OutboundEmail {
        let mut engine = TemplateEngine::new();
        engine
            .set("subject", &contact.subject)
            .set("name", &contact.name)
            .set("email", &contact.email)
            .set("message", &contact.message);
        let rendered = engine.render_template(EmailTemplate::ContactForm);

        OutboundEmail::new(
            self.sender(),
            EmailAddress::new(&self.mail().admin_email),
            rendered.subject,
            rendered.text_body,
            rendered.html_body,
        )
        .with_reply_to(EmailAddress::new(&contact.email))
    }

    pub async fn send_partnership_inquiry(
        &self,
        inquiry: &PartnershipInquiry,
    ) -> Result<(), EmailProviderError> {
        let message = self.compose_partnership_inquiry(inquiry);
        self.email_service.send(&message).await
    }

    pub async fn send_app_download(
        &self,
        request: &AppDownloadRequest,
    ) -> Result<(), EmailProviderError> {
        let message = self.compose_app_download(request)?;
        self.email_service.send(&message).await
    }

    pub async fn send_contact_form(&self, contact: &ContactForm) -> Result<(), EmailProviderError> {
        let message = self.compose_contact_form(contact);
        self.email_service.send(&message).await
    }
}
