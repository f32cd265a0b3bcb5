//! Daily application number sequencing.
//!
//! Application numbers take the form `DDMMYY-NNNN`: the date of generation
//! followed by a 4-digit zero-padded daily sequence starting at 1. The next
//! number is derived by reading the highest suffix under today's prefix, so
//! two concurrent callers can compute the same value; the unique index on
//! `application_number` is the correctness backstop and a duplicate-key
//! failure is retried with a fresh read rather than surfaced as fatal.

use chrono::{Local, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::candidate::CandidateRepository,
    error::Error,
    service::retry::RetryContext,
};

/// A freshly derived application number and its 1-based position in today's
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedNumber {
    pub application_number: String,
    pub position: u32,
}

pub struct ApplicationNumberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationNumberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Daily prefix for a date, e.g. `260826-` for 26 August 2026.
    pub fn prefix_for(date: NaiveDate) -> String {
        format!("{}-", date.format("%d%m%y"))
    }

    /// Derives the next application number for the given date from existing
    /// records. The first number of a day has position 1.
    pub async fn next_for_date(&self, date: NaiveDate) -> Result<GeneratedNumber, Error> {
        let prefix = Self::prefix_for(date);

        let latest = CandidateRepository::new(self.db)
            .latest_application_number(&prefix)
            .await?;

        let position = match latest {
            Some(number) => {
                let suffix = number.strip_prefix(&prefix).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Application number {:?} does not carry prefix {:?}",
                        number, prefix
                    ))
                })?;

                let last: u32 = suffix.parse().map_err(|_| {
                    Error::ParseError(format!(
                        "Application number suffix {:?} is not numeric",
                        suffix
                    ))
                })?;

                last + 1
            }
            None => 1,
        };

        Ok(GeneratedNumber {
            application_number: format!("{}{:04}", prefix, position),
            position,
        })
    }

    /// Derives the next application number using the server's local date, so
    /// the sequence rolls over to 1 at local midnight.
    pub async fn next_for_today(&self) -> Result<GeneratedNumber, Error> {
        self.next_for_date(Local::now().date_naive()).await
    }

    /// Generates and stamps an application number onto a candidate.
    ///
    /// A duplicate-key failure on save means another request claimed the same
    /// number first; the generate-and-save sequence is retried under a fresh
    /// read of the highest number.
    pub async fn finalize(&self, index_number: &str) -> Result<GeneratedNumber, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let index_number = index_number.to_string();

        ctx.execute_with_retry(
            &format!("application number for index number {}", index_number),
            |_| {
                let db = db.clone();
                let index_number = index_number.clone();

                Box::pin(async move {
                    let generated = ApplicationNumberService::new(&db).next_for_today().await?;

                    let updated = CandidateRepository::new(&db)
                        .set_application_number(&index_number, &generated.application_number)
                        .await?;

                    match updated {
                        Some(_) => Ok(generated),
                        None => Err(Error::CandidateNotFound(index_number)),
                    }
                })
            },
        )
        .await
    }
}
