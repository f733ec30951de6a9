//! Configuration section definitions.
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | Site metadata (title, url, repo coordinates)    |
//! | `[i18n]`    | Locale set and default locale                   |
//! | `[links]`   | Broken-link policies                            |
//! | `[search]`  | Search-provider credentials                     |
//! | `[docs]`    | Versioned docs and edit/translate URL bases     |
//! | `[navbar]`  | Navigation bar structure                        |
//! | `[footer]`  | Footer columns and copyright                    |
//! | `[profile]` | Named override sets                             |

mod docs;
mod footer;
mod i18n;
mod links;
mod navbar;
mod profile;
mod search;
mod site;

pub use docs::DocsConfig;
pub use footer::{FooterColumnConfig, FooterConfig, FooterItemConfig, FooterStyle};
pub use i18n::I18nConfig;
pub use links::{LinkPolicy, LinksConfig};
pub use navbar::{LogoConfig, NavPosition, NavbarConfig, NavbarItemConfig, NavbarItemKind};
pub use profile::{ProfileConfig, SearchOverride};
pub use search::SearchConfig;
pub use site::SiteConfig;
