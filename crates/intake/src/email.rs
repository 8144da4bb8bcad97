use askama::Template;

use crate::{IntakeError, Submission};

pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Template)]
#[template(path = "inquiry.html")]
struct InquiryHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    agent_count: &'a str,
    use_case: &'a str,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "inquiry.txt")]
struct InquiryPlainTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    agent_count: &'a str,
    use_case: &'a str,
    message: &'a str,
}

/// Subject and bodies of the operator notification
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedInquiry {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl Submission {
    pub fn subject(&self) -> String {
        format!("New Agent Infrastructure Inquiry from {}", self.name)
    }

    pub fn render(&self) -> Result<RenderedInquiry, IntakeError> {
        let company = self.company.as_deref().unwrap_or(NOT_PROVIDED);
        let agent_count = self.agent_count.as_deref().unwrap_or(NOT_PROVIDED);
        let use_case = self.use_case.as_deref().unwrap_or(NOT_PROVIDED);

        let html = InquiryHtmlTemplate {
            name: &self.name,
            email: &self.email,
            company,
            agent_count,
            use_case,
            message_lines: self.message.split('\n').collect(),
        }
        .render()?;

        let text = InquiryPlainTemplate {
            name: &self.name,
            email: &self.email,
            company,
            agent_count,
            use_case,
            message: &self.message,
        }
        .render()?;

        Ok(RenderedInquiry {
            subject: self.subject(),
            html,
            text,
        })
    }
}
