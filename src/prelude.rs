//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use fail_chain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`newf!`], [`impl_fail!`]
//! - **Constructors**: [`new`], [`new_with_inner`], [`new_err_with_reason`], [`news`]
//! - **Queries**: [`get_inner`], [`get_location`], [`get_stack_trace`], [`get_full_details`]
//! - **Types**: [`Error`], [`Result`]
//! - **Traits**: [`Fail`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use fail_chain::prelude::*;
//!
//! fn load_config(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(news("empty config path"));
//!     }
//!     Ok(path.to_owned())
//! }
//!
//! let err = load_config("").unwrap_err();
//! assert_eq!(err.to_string(), "empty config path");
//! ```

// Macros
pub use crate::{impl_fail, newf};

// Constructors and queries
pub use crate::constructors::{new, new_err_with_reason, new_with_inner, news};
pub use crate::query::{get_full_details, get_inner, get_location, get_stack_trace};

// Core types
pub use crate::types::{Error, Result};

// Traits
pub use crate::traits::{Fail, ResultExt};
