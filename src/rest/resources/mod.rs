//! Admin REST resources.
//!
//! - [`Metafield`]: namespaced key/value data, global or scoped to an owner
//! - [`Redirect`]: storefront URL redirects
//!
//! Each resource comes with its filter type and a service alias
//! ([`MetafieldService`], [`RedirectService`]) over the generic
//! [`ResourceService`](crate::rest::ResourceService).

mod list_filter;
mod metafield;
mod redirect;

pub use list_filter::ListFilter;
pub use metafield::{Metafield, MetafieldFilter, MetafieldOwner, MetafieldService};
pub use redirect::{Redirect, RedirectFilter, RedirectService};
