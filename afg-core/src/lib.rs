//! # afg-core
//!
//! Repository abstractions and use cases of askforge.
//!
//! Everything in this crate is written against the repository traits
//! in [`repositories`] and is agnostic of the concrete database.

pub mod repositories;
pub mod reputation;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use afg_entities::{
        activity::*, answer::*, content::*, email::*, id::*, password::*, question::*,
        reputation::*, tag::*, time::*, url::Url, user::*, vote::*,
    };
}
