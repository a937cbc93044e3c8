//! Attach and detach Lambda@Edge functions on the default cache behavior of
//! a CloudFront distribution.
//!
//! [`AssociationEditor`] is the pure transform over a distribution config's
//! `LambdaFunctionAssociations` list; [`EdgeFunctionBinder`] drives the
//! get/update round trips against CloudFront, carrying the fetched ETag as
//! the `IfMatch` concurrency token on the write.

pub mod binder;
pub mod editor;
pub mod error;

pub use aws_sdk_cloudfront::types::EventType;
pub use binder::{EdgeFunctionBinder, UpdateParams, build_update_params};
pub use editor::{AssociationEditor, EdgeAction};
pub use error::EdgeBinderError;
