// src/notify/mod.rs

//! Feedback email after a run.
//!
//! - [`message`] composes the email from a sealed report (pure).
//! - [`smtp`] provides [`SmtpNotifier`], the production transport.
//!
//! The supervisor talks to a [`Notifier`] so tests can record messages
//! instead of opening SMTP connections.

pub mod message;
pub mod smtp;

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

pub use message::{FeedbackMessage, SUBJECT_PREFIX, compose_feedback};
pub use smtp::SmtpNotifier;

/// Delivers a composed feedback message.
///
/// Errors are returned to the supervisor, which surfaces them to its caller.
pub trait Notifier: Send {
    fn send<'a>(
        &'a mut self,
        message: &'a FeedbackMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
