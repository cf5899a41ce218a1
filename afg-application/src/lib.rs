#[macro_use]
extern crate log;

mod create_answer;
mod create_question;
mod delete_answer;
mod delete_question;
mod register;
mod save_question;
mod update_question;
mod vote;

pub mod prelude {
    pub use super::{
        create_answer::*, create_question::*, delete_answer::*, delete_question::*, register::*,
        save_question::*, update_question::*, vote::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use afg_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use afg_db_sqlite::Connections;
}
