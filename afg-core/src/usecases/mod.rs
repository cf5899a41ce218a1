mod authorize;
mod change_user_role;
mod create_answer;
mod create_question;
mod delete_answer;
mod delete_question;
mod error;
mod get_question;
mod login;
mod query_questions;
mod query_tags;
mod register;
mod save_question;
mod search;
mod update_question;
mod user_profile;
mod vote;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, change_user_role::*, create_answer::*, create_question::*, delete_answer::*,
    delete_question::*, error::Error, get_question::*, login::*, query_questions::*,
    query_tags::*, register::*, save_question::*, search::*, update_question::*, user_profile::*,
    vote::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
