use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    validate::display_name(&u.name)?;
    validate::username(&u.username)?;
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    if repo.try_get_user_by_username(&u.username)?.is_some() {
        return Err(Error::UsernameTaken);
    }
    let new_user = User {
        email: u.email,
        // There is no e-mail gateway, so accounts are usable immediately.
        email_confirmed: true,
        password,
        role: Role::User,
        name: u.name,
        username: u.username,
        image: None,
        bio: None,
        location: None,
        website: None,
        reputation: 0,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(email: &str, username: &str) -> NewUser {
        NewUser {
            name: username.to_string(),
            username: username.to_string(),
            email: EmailAddress::new_unchecked(email.to_string()),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de", "foo")).is_ok());
        assert!(create_new_user(&db, new_user("baz@bar.de", "baz")).is_ok());
        assert_eq!(2, db.count_users().unwrap());
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        let mut u = new_user("foo@baz.io", "foo");
        u.password = "short".into();
        assert!(matches!(create_new_user(&db, u), Err(Error::Password)));
    }

    #[test]
    fn create_user_with_invalid_username() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_user(&db, new_user("foo@baz.io", "Foo Bar")),
            Err(Error::Username)
        ));
        assert!(matches!(
            create_new_user(&db, new_user("foo@baz.io", "ab")),
            Err(Error::Username)
        ));
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.bar", "baz")).is_ok());
        assert!(matches!(
            create_new_user(&db, new_user("baz@foo.bar", "other")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn create_user_with_existing_username() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.bar", "baz")).is_ok());
        assert!(matches!(
            create_new_user(&db, new_user("other@foo.bar", "baz")),
            Err(Error::UsernameTaken)
        ));
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.io", "foo")).is_ok());
        assert!(db.users.borrow()[0].password.as_ref() != "secret123");
        assert!(db.users.borrow()[0].password.verify("secret123"));
    }

    #[test]
    fn new_users_start_without_reputation() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("foo@bar.io", "foo")).unwrap();
        assert_eq!(0, user.reputation);
        assert_eq!(Role::User, user.role);
    }
}
