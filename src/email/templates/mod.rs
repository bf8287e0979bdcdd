//! Email template system
//!
//! Variables are written as `{{variable_name}}`. Values are inserted verbatim
//! in a single pass; substituted text is never scanned again, so user input
//! containing `{{...}}` stays literal.

use std::collections::HashMap;

/// Available email templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Notification to the admin about a partnership inquiry
    PartnershipInquiry,
    /// APK download links sent to the requester
    AppDownload,
    /// Notification to the admin about a contact form submission
    ContactForm,
}

impl EmailTemplate {
    /// Get the subject line for this template
    pub fn subject(&self) -> &'static str {
        match self {
            Self::PartnershipInquiry => "Inquiry Regarding CrickCoach AI",
            Self::AppDownload => "CrickCoach AI — Android APK Download",
            Self::ContactForm => "Contact Form: {{subject}}",
        }
    }

    /// Get the HTML body template
    pub fn html_body(&self) -> &'static str {
        match self {
            Self::PartnershipInquiry => PARTNERSHIP_INQUIRY_TEMPLATE,
            Self::AppDownload => APP_DOWNLOAD_TEMPLATE,
            Self::ContactForm => CONTACT_FORM_TEMPLATE,
        }
    }

    /// Get the plain text body template
    pub fn text_body(&self) -> &'static str {
        match self {
            Self::PartnershipInquiry => PARTNERSHIP_INQUIRY_TEMPLATE_TEXT,
            Self::AppDownload => APP_DOWNLOAD_TEMPLATE_TEXT,
            Self::ContactForm => CONTACT_FORM_TEMPLATE_TEXT,
        }
    }
}

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string, replacing `{{variable}}` with its value.
    ///
    /// Unknown placeholders are left untouched.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.variables.get(key.trim()) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push_str("{{");
                            result.push_str(key);
                            result.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    result.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Render a complete email template
    pub fn render_template(&self, template: EmailTemplate) -> RenderedEmail {
        RenderedEmail {
            subject: self.render(template.subject()),
            html_body: self.render(template.html_body()),
            text_body: self.render(template.text_body()),
        }
    }
}

/// Rendered email with all variables substituted
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

// ============================================================================
// Email Templates
// ============================================================================

const PARTNERSHIP_INQUIRY_TEMPLATE: &str = r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h2 style="color: #2c3e50;">New Partnership Inquiry Received</h2>

    <table style="width: 100%; border-collapse: collapse; margin: 20px 0;">
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold; width: 150px;">Inquiry Type:</td>
            <td style="padding: 8px;">{{inquiry_type}}</td>
        </tr>
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold;">Name:</td>
            <td style="padding: 8px;">{{name}}</td>
        </tr>
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold;">Email:</td>
            <td style="padding: 8px;"><a href="mailto:{{email}}" style="color: #3498db;">{{email}}</a></td>
        </tr>
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold;">Organization:</td>
            <td style="padding: 8px;">{{organization}}</td>
        </tr>
    </table>

    <h3 style="color: #2c3e50; margin-top: 30px;">Message:</h3>
    <div style="background-color: #f9f9f9; padding: 15px; border-left: 4px solid #3498db; margin: 20px 0;">
        <p style="white-space: pre-wrap; margin: 0;">{{message}}</p>
    </div>

    <p style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #7f8c8d;">
        You can reply directly to this email to respond to <strong>{{name}}</strong> at
        <a href="mailto:{{email}}" style="color: #3498db;">{{email}}</a>.
    </p>
</body>
</html>"#;

const PARTNERSHIP_INQUIRY_TEMPLATE_TEXT: &str = r#"New Partnership Inquiry Received

Inquiry Type: {{inquiry_type}}
Name: {{name}}
Email: {{email}}
Organization: {{organization}}

Message:
{{message}}

---
You can reply directly to this email to respond to {{name}} at {{email}}."#;

const APP_DOWNLOAD_TEMPLATE: &str = r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h2 style="color: #2c3e50;">Thanks for your interest in CrickCoach AI!</h2>

    <p>Download the latest Android APK from the link below:</p>

    <p style="margin: 20px 0;">
        <a href="{{download_link}}"
           style="display: inline-block; padding: 12px 24px; background-color: #3498db;
                  color: white; text-decoration: none; border-radius: 5px; font-weight: bold;">
            Download CrickCoach AI APK
        </a>
    </p>

    <p>Or use this direct download link:</p>
    <p><a href="{{direct_download_link}}" style="color: #3498db;">{{direct_download_link}}</a></p>

    <h3 style="color: #2c3e50; margin-top: 30px;">Installation Instructions:</h3>
    <ol style="line-height: 2;">
        <li>Click on the download link above</li>
        <li>Download the APK file to your Android device</li>
        <li>Enable "Install from Unknown Sources" in your device settings if prompted</li>
        <li>Open the downloaded APK file and follow the installation prompts</li>
    </ol>

    <p style="margin-top: 30px; color: #7f8c8d;">
        If you have any issues installing it, reply to this email.
    </p>

    <p style="margin-top: 20px;">
        Best regards,<br>
        <strong>CrickCoach AI Team</strong>
    </p>
</body>
</html>"#;

const APP_DOWNLOAD_TEMPLATE_TEXT: &str = r#"Thanks for your interest in CrickCoach AI!

Download the latest Android APK from the link below:

{{download_link}}

Direct Download Link:
{{direct_download_link}}

Installation Instructions:
1. Click on the download link above
2. Download the APK file to your Android device
3. Enable "Install from Unknown Sources" in your device settings if prompted
4. Open the downloaded APK file and follow the installation prompts

If you have any issues installing it, reply to this email.

Best regards,
CrickCoach AI Team"#;

const CONTACT_FORM_TEMPLATE: &str = r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h2 style="color: #2c3e50;">New Contact Form Submission</h2>

    <table style="width: 100%; border-collapse: collapse; margin: 20px 0;">
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold; width: 150px;">Subject:</td>
            <td style="padding: 8px;">{{subject}}</td>
        </tr>
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold;">Name:</td>
            <td style="padding: 8px;">{{name}}</td>
        </tr>
        <tr>
            <td style="padding: 8px; background-color: #f4f4f4; font-weight: bold;">Email:</td>
            <td style="padding: 8px;"><a href="mailto:{{email}}" style="color: #3498db;">{{email}}</a></td>
        </tr>
    </table>

    <h3 style="color: #2c3e50; margin-top: 30px;">Message:</h3>
    <div style="background-color: #f9f9f9; padding: 15px; border-left: 4px solid #3498db; margin: 20px 0;">
        <p style="white-space: pre-wrap; margin: 0;">{{message}}</p>
    </div>

    <p style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #7f8c8d;">
        You can reply directly to this email to respond to <strong>{{name}}</strong> at
        <a href="mailto:{{email}}" style="color: #3498db;">{{email}}</a>.
    </p>
</body>
</html>"#;

const CONTACT_FORM_TEMPLATE_TEXT: &str = r#"New Contact Form Submission

Subject: {{subject}}
Name: {{name}}
Email: {{email}}

Message:
{{message}}

---
You can reply directly to this email to respond to {{name}} at {{email}}."#;
