#![cfg_attr(not(feature = "std"), no_std)]
#![warn(rust_2018_idioms, unreachable_pub, missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
//! A URI-reference parser, builder, normalizer and resolver that strictly
//! adheres to IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! # Terminology
//!
//! A *URI reference* is either a URI or a relative reference: the
//! [`UriRef`] type covers both, while [`Uri`] is the variant whose scheme
//! is guaranteed present. The *path* component has its own value type,
//! [`Path`], modeling the segment sequence. Values are immutable; the
//! [`UriBuilder`] and [`PathBuilder`] types are their mutable
//! counterparts.
//!
//! # Examples
//!
//! Parse, resolve and normalize:
//!
//! ```
//! use taut_uri::{Uri, UriRef};
//!
//! let base = Uri::parse("http://a/b/c/d;p?q")?;
//! let target = base.resolve(&UriRef::parse("../../g")?);
//! assert_eq!(target.as_str(), "http://a/g");
//!
//! let uri = Uri::parse("HTTP://EXAMPLE.com:/%7efoo")?;
//! assert_eq!(uri.normalize().as_str(), "http://example.com/~foo");
//! # Ok::<_, taut_uri::error::SyntaxError>(())
//! ```
//!
//! Build a reference from components:
//!
//! ```
//! use taut_uri::UriBuilder;
//!
//! let mut b = UriBuilder::new();
//! b.scheme(Some("https"))
//!     .host(Some("example.com"))
//!     .path_with(|p| {
//!         p.push_utf8_segments(["søk"]).absolute(true);
//!     })
//!     .query(Some("lang=no"));
//! assert_eq!(b.build()?.as_str(), "https://example.com/s%C3%B8k?lang=no");
//! # Ok::<_, taut_uri::error::SyntaxError>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): `std::error::Error` impls for the error types.
//! - `serde`: `Serialize` and `Deserialize` impls for [`Uri`], [`UriRef`]
//!   and [`Path`].

extern crate alloc;

pub mod component;
pub mod encoding;
pub mod error;

mod builder;
mod ip;
mod normalize;
mod path;
mod raw;
mod resolve;
mod uri;
mod validate;

pub use builder::UriBuilder;
pub use path::{Path, PathBuilder};
pub use uri::{Uri, UriRef};
