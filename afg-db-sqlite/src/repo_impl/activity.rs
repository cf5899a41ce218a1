use num_traits::ToPrimitive as _;

use super::*;

impl<'a> ActivityRepo for DbReadOnly<'a> {
    fn log_activity(&self, _entry: &ActivityLogEntry) -> Result<()> {
        unreachable!();
    }

    fn activities_of_user(
        &self,
        user: &EmailAddress,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityLogEntry>> {
        activities_of_user(&mut self.conn.borrow_mut(), user, pagination)
    }
}

impl<'a> ActivityRepo for DbReadWrite<'a> {
    fn log_activity(&self, entry: &ActivityLogEntry) -> Result<()> {
        log_activity(&mut self.conn.borrow_mut(), entry)
    }

    fn activities_of_user(
        &self,
        user: &EmailAddress,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityLogEntry>> {
        activities_of_user(&mut self.conn.borrow_mut(), user, pagination)
    }
}

impl<'a> ActivityRepo for DbConnection<'a> {
    fn log_activity(&self, entry: &ActivityLogEntry) -> Result<()> {
        log_activity(&mut self.conn.borrow_mut(), entry)
    }

    fn activities_of_user(
        &self,
        user: &EmailAddress,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityLogEntry>> {
        activities_of_user(&mut self.conn.borrow_mut(), user, pagination)
    }
}

fn log_activity(conn: &mut SqliteConnection, entry: &ActivityLogEntry) -> Result<()> {
    let user_id = entry
        .activity
        .by
        .as_ref()
        .map(|email| resolve_user_id_by_email(conn, email))
        .transpose()?;
    let new_entry = models::NewActivityLogEntry {
        user_id,
        action: entry.action.to_i16().unwrap_or_default(),
        content_kind: entry.content.kind.to_i16().unwrap_or_default(),
        content_id: entry.content.id.as_str(),
        created_at: entry.activity.at.into_millis(),
    };
    diesel::insert_into(schema::activity_log::table)
        .values(&new_entry)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn activities_of_user(
    conn: &mut SqliteConnection,
    user: &EmailAddress,
    pagination: &Pagination,
) -> Result<Vec<ActivityLogEntry>> {
    use schema::activity_log::dsl;
    let user_id = resolve_user_id_by_email(conn, user)?;
    let mut stmt = dsl::activity_log
        .select((
            dsl::action,
            dsl::content_kind,
            dsl::content_id,
            dsl::created_at,
        ))
        .filter(dsl::user_id.eq(user_id))
        .order((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    let rows = stmt
        .load::<models::ActivityLogRow>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let entry = row.try_into_entity(Some(user.clone()));
            if entry.is_none() {
                log::warn!("Ignoring invalid activity record of user {user}");
            }
            entry
        })
        .collect())
}
