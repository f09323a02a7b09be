// src/notify/smtp.rs

//! SMTP delivery of feedback emails.

use std::future::Future;
use std::pin::Pin;

use mail_builder::MessageBuilder;
use mail_send::SmtpClientBuilder;
use tracing::{debug, info};

use super::Notifier;
use super::message::FeedbackMessage;
use crate::errors::Result;

/// Sends feedback over plain SMTP to a local relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpNotifier {
    host: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Notifier for SmtpNotifier {
    fn send<'a>(
        &'a mut self,
        message: &'a FeedbackMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            info!(
                to = %message.to,
                from = %message.from,
                relay = %format!("{}:{}", self.host, self.port),
                "sending feedback email"
            );

            let email = MessageBuilder::new()
                .from(message.from.as_str())
                .to(message.to.as_str())
                .subject(message.subject.as_str())
                .text_body(message.body.as_str());

            let mut client = SmtpClientBuilder::new(self.host.clone(), self.port)
                .implicit_tls(false)
                .connect_plain()
                .await?;
            client.send(email).await?;
            debug!("feedback email accepted by relay");

            Ok(())
        })
    }
}
