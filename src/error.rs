/*
 * Copyright 2026 Vantage Engineering
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Error types for the Vantage SDK.
//!
//! Three families of failure surface here: local validation errors raised
//! before any RPC is attempted, per-item errors from batch calls (carried
//! positionally in [`MultiError`]), and transport/channel errors passed
//! through from tonic unchanged.

use std::fmt;

use thiserror::Error;

use crate::proto;

#[derive(Error, Debug)]
pub enum Error {
    /// A requested record does not exist.
    #[error("no such record")]
    NoSuchRecord,

    /// A field filter was built with an unrecognized operator suffix.
    #[error("invalid field filter operator: {0:?}")]
    InvalidOperator(String),

    /// A value cannot be marshaled into the requested wire shape.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// A key was empty or its value was not a single scalar.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Batch inputs of differing lengths.
    #[error("number of keys, counts and scores do not match")]
    LengthMismatch,

    /// Configuration error at client construction (bad endpoint, metadata
    /// value not representable, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A response could not be decoded into caller-facing types.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Remote call failed; the status is propagated unchanged.
    #[error("rpc error: {0}")]
    Rpc(#[from] tonic::Status),

    /// Channel-level transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Aggregate of per-item errors from a batch call.
    #[error(transparent)]
    Multi(#[from] MultiError),
}

/// Positional per-item errors from a batch call.
///
/// A `MultiError` is advisory metadata over an otherwise-usable result
/// list: index `i` holds the error (if any) for the `i`-th input. The
/// display form summarizes as "first error (and N others)"; callers that
/// need per-item status must index into it.
#[derive(Debug, Default)]
pub struct MultiError {
    errors: Vec<Option<Error>>,
}

impl MultiError {
    /// Wraps a positional error list, returning `None` when every slot is
    /// error-free.
    pub fn new(errors: Vec<Option<Error>>) -> Option<MultiError> {
        if errors.iter().all(Option::is_none) {
            return None;
        }
        Some(MultiError { errors })
    }

    /// Decodes per-item wire statuses. OK slots become `None`, NotFound
    /// becomes [`Error::NoSuchRecord`], anything else is kept as the
    /// remote status.
    pub(crate) fn from_statuses(status: &[proto::rpc::Status]) -> Option<MultiError> {
        MultiError::new(status_errors(status))
    }

    /// Number of item slots (not the number of failures).
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for the item at `index`, if that item failed.
    pub fn get(&self, index: usize) -> Option<&Error> {
        self.errors.get(index).and_then(Option::as_ref)
    }

    /// Removes and returns the error at `index`, leaving `None` behind.
    pub fn take(&mut self, index: usize) -> Option<Error> {
        self.errors.get_mut(index).and_then(Option::take)
    }

    /// Number of items which failed.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Error>> {
        self.errors.iter().map(Option::as_ref)
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut n = 0;
        let mut first = None;
        for e in self.errors.iter().flatten() {
            if n == 0 {
                first = Some(e);
            }
            n += 1;
        }
        match (n, first) {
            (0, _) => write!(f, "(0 errors)"),
            (1, Some(e)) => write!(f, "{}", e),
            (2, Some(e)) => write!(f, "{} (and 1 other error)", e),
            (_, Some(e)) => write!(f, "{} (and {} other errors)", e, n - 1),
            _ => unreachable!(),
        }
    }
}

impl std::error::Error for MultiError {}

/// Converts per-item wire statuses into a positional error list.
pub(crate) fn status_errors(status: &[proto::rpc::Status]) -> Vec<Option<Error>> {
    status
        .iter()
        .map(|s| match tonic::Code::from(s.code) {
            tonic::Code::Ok => None,
            tonic::Code::NotFound => Some(Error::NoSuchRecord),
            code => Some(Error::Rpc(tonic::Status::new(code, s.message.clone()))),
        })
        .collect()
}

/// Unwraps a batch-of-one failure into the error for its only element.
pub(crate) fn single_error(mut me: MultiError) -> Error {
    match me.take(0) {
        Some(e) => e,
        None => Error::Multi(me),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: i32, message: &str) -> proto::rpc::Status {
        proto::rpc::Status {
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_all_ok_statuses_yield_no_error() {
        let statuses = vec![status(0, ""), status(0, "")];
        assert!(MultiError::from_statuses(&statuses).is_none());
    }

    #[test]
    fn test_not_found_is_positional() {
        let statuses = vec![status(0, ""), status(5, "missing"), status(0, "")];
        let me = MultiError::from_statuses(&statuses).expect("should have an error");
        assert_eq!(me.len(), 3);
        assert_eq!(me.error_count(), 1);
        assert!(me.get(0).is_none());
        assert!(matches!(me.get(1), Some(Error::NoSuchRecord)));
        assert!(me.get(2).is_none());
    }

    #[test]
    fn test_display_summary_form() {
        let one = MultiError::from_statuses(&[status(5, "")]).expect("error");
        assert_eq!(one.to_string(), "no such record");

        let two =
            MultiError::from_statuses(&[status(5, ""), status(5, "")]).expect("error");
        assert_eq!(two.to_string(), "no such record (and 1 other error)");

        let four = MultiError::from_statuses(&[
            status(5, ""),
            status(5, ""),
            status(0, ""),
            status(5, ""),
            status(5, ""),
        ])
        .expect("error");
        assert_eq!(four.to_string(), "no such record (and 3 other errors)");
    }

    #[test]
    fn test_other_codes_keep_remote_status() {
        let me = MultiError::from_statuses(&[status(7, "denied")]).expect("error");
        match me.get(0) {
            Some(Error::Rpc(s)) => {
                assert_eq!(s.code(), tonic::Code::PermissionDenied);
                assert_eq!(s.message(), "denied");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_single_error_unwraps_first_slot() {
        let me = MultiError::from_statuses(&[status(5, "")]).expect("error");
        assert!(matches!(single_error(me), Error::NoSuchRecord));
    }
}
