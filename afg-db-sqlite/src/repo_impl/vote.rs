use num_traits::ToPrimitive as _;

use super::*;

// The select clause that feeds `models::JoinedVote`.
macro_rules! joined_vote_columns {
    () => {
        (
            schema::votes::content_kind,
            schema::votes::content_id,
            schema::votes::direction,
            schema::votes::created_at,
            schema::users::email,
        )
    };
}

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn create_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn update_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _voter: &EmailAddress, _content: &ContentRef) -> Result<()> {
        unreachable!();
    }

    fn get_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), voter, content)
    }
    fn votes_of_content(&self, content: &ContentRef) -> Result<Vec<Vote>> {
        votes_of_content(&mut self.conn.borrow_mut(), content)
    }

    fn delete_votes_of_content(&self, _content: &ContentRef) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), voter, content)
    }

    fn get_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), voter, content)
    }
    fn votes_of_content(&self, content: &ContentRef) -> Result<Vec<Vote>> {
        votes_of_content(&mut self.conn.borrow_mut(), content)
    }

    fn delete_votes_of_content(&self, content: &ContentRef) -> Result<usize> {
        delete_votes_of_content(&mut self.conn.borrow_mut(), content)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), voter, content)
    }

    fn get_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), voter, content)
    }
    fn votes_of_content(&self, content: &ContentRef) -> Result<Vec<Vote>> {
        votes_of_content(&mut self.conn.borrow_mut(), content)
    }

    fn delete_votes_of_content(&self, content: &ContentRef) -> Result<usize> {
        delete_votes_of_content(&mut self.conn.borrow_mut(), content)
    }
}

fn create_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    let user_id = resolve_user_id_by_email(conn, &vote.voter)?;
    let new_vote = models::NewVote {
        user_id,
        content_kind: vote.content.kind.to_i16().unwrap_or_default(),
        content_id: vote.content.id.as_str(),
        direction: vote.direction.to_i16().unwrap_or_default(),
        created_at: vote.created_at.into_millis(),
    };
    diesel::insert_into(schema::votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    use schema::votes::dsl;
    let user_id = resolve_user_id_by_email(conn, &vote.voter)?;
    let count = diesel::update(
        dsl::votes
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::content_kind.eq(vote.content.kind.to_i16().unwrap_or_default()))
            .filter(dsl::content_id.eq(vote.content.id.as_str())),
    )
    .set((
        dsl::direction.eq(vote.direction.to_i16().unwrap_or_default()),
        dsl::created_at.eq(vote.created_at.into_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_vote(conn: &mut SqliteConnection, voter: &EmailAddress, content: &ContentRef) -> Result<()> {
    use schema::votes::dsl;
    let user_id = resolve_user_id_by_email(conn, voter)?;
    let count = diesel::delete(
        dsl::votes
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::content_kind.eq(content.kind.to_i16().unwrap_or_default()))
            .filter(dsl::content_id.eq(content.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_vote(
    conn: &mut SqliteConnection,
    voter: &EmailAddress,
    content: &ContentRef,
) -> Result<Option<Vote>> {
    use schema::{users, votes};
    let joined = votes::table
        .inner_join(users::table)
        .select(joined_vote_columns!())
        .filter(users::email.eq(voter.as_str()))
        .filter(votes::content_kind.eq(content.kind.to_i16().unwrap_or_default()))
        .filter(votes::content_id.eq(content.id.as_str()))
        .first::<models::JoinedVote>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    joined
        .map(|vote| {
            vote.try_into_entity()
                .ok_or_else(|| repo::Error::Other(anyhow!("Invalid vote record")))
        })
        .transpose()
}

fn votes_of_content(conn: &mut SqliteConnection, content: &ContentRef) -> Result<Vec<Vote>> {
    use schema::{users, votes};
    let joined = votes::table
        .inner_join(users::table)
        .select(joined_vote_columns!())
        .filter(votes::content_kind.eq(content.kind.to_i16().unwrap_or_default()))
        .filter(votes::content_id.eq(content.id.as_str()))
        .load::<models::JoinedVote>(conn)
        .map_err(from_diesel_err)?;
    Ok(joined
        .into_iter()
        .filter_map(|vote| {
            let vote = vote.try_into_entity();
            if vote.is_none() {
                log::warn!("Ignoring invalid vote record for {content:?}");
            }
            vote
        })
        .collect())
}

fn delete_votes_of_content(conn: &mut SqliteConnection, content: &ContentRef) -> Result<usize> {
    use schema::votes::dsl;
    diesel::delete(
        dsl::votes
            .filter(dsl::content_kind.eq(content.kind.to_i16().unwrap_or_default()))
            .filter(dsl::content_id.eq(content.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}
