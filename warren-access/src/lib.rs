// SPDX-License-Identifier: MIT OR Apache-2.0

mod access;
mod choices;
mod records;
mod resolver;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
#[cfg(test)]
mod tests;
pub mod traits;

pub use access::Access;
pub use choices::{PageChoice, page_choices};
pub use records::{
    GrantRef, Identity, Page, PageEntry, Settings, Space, SpaceAccess, UserAccess,
};
pub use resolver::{ResolveError, granted_pages, resolve};
