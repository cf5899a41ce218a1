use super::{authorize::authorize_user_by_email, prelude::*};

pub fn change_user_role<R>(
    repo: &R,
    admin_email: &EmailAddress,
    username: &str,
    new_role: Role,
) -> Result<()>
where
    R: UserRepo,
{
    let admin = authorize_user_by_email(repo, admin_email, Role::Admin)?;
    if admin.username == username {
        // Admins must not lock themselves out.
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user_by_username(username)?;
    if user.role == new_role {
        return Ok(());
    }
    log::info!("Changing role of user {username} to {new_role:?}");
    user.role = new_role;
    Ok(repo.update_user(&user)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn admins_may_change_roles() {
        let db = MockDb::default();
        let admin = register_user(&db, "admin@askforge.dev", "admin");
        promote_to_admin(&db, &admin);
        register_user(&db, "jane@askforge.dev", "jane");

        change_user_role(&db, &admin, "jane", Role::Admin).unwrap();
        assert_eq!(Role::Admin, db.get_user_by_username("jane").unwrap().role);
    }

    #[test]
    fn ordinary_users_may_not_change_roles() {
        let db = MockDb::default();
        let user = register_user(&db, "jane@askforge.dev", "jane");
        register_user(&db, "john@askforge.dev", "john");
        assert!(matches!(
            change_user_role(&db, &user, "john", Role::Admin),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admins_may_not_change_their_own_role() {
        let db = MockDb::default();
        let admin = register_user(&db, "admin@askforge.dev", "admin");
        promote_to_admin(&db, &admin);
        assert!(matches!(
            change_user_role(&db, &admin, "admin", Role::User),
            Err(Error::Forbidden)
        ));
    }
}
