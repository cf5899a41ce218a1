use num_derive::{FromPrimitive, ToPrimitive};
use url::Url;

use crate::{email::EmailAddress, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub password        : Password,
    pub role            : Role,
    pub name            : String,
    pub username        : String,
    pub image           : Option<Url>,
    pub bio             : Option<String>,
    pub location        : Option<String>,
    pub website         : Option<Url>,
    pub reputation      : i64,
    pub created_at      : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    Guest = 0,
    User  = 1,
    Admin = 2,
}
