//! Profile section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `site`   | `[site]`     | Identity (author, title, image, ...) |
//! | `social` | `[[social]]` | External profile links               |
//! | `header` | `[header]`   | Logo and header navigation           |
//! | `page`   | `[page]`     | Blog-index page links                |
//! | `footer` | `[footer]`   | Footer navigation                    |
//!
//! `asset` and `link` hold the shapes shared across sections.

mod asset;
mod footer;
mod header;
mod link;
mod page;
mod site;
mod social;

pub use asset::ImageAsset;
pub use footer::FooterConfig;
pub use header::HeaderConfig;
pub use link::NavLink;
pub use page::PageConfig;
pub use site::SiteInfoConfig;
pub use social::{IconPlacement, SocialLink};

pub(crate) use social::default_social_links;
