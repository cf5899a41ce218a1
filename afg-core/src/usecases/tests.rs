// In-memory implementation of the repository traits that is shared
// by the use case tests.

use std::cell::RefCell;

pub use super::*;
pub use crate::{
    entities::*,
    repositories::{
        ActivityRepo, AnswerRepo, CollectionRepo, Error as RepoError, MostPopularTagsParams,
        Pagination, QuestionQuery, QuestionRepo, QuestionSort, TagRepo, TagSort, UserRepo,
        VoteRepo,
    },
    reputation,
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub questions: RefCell<Vec<Question>>,
    pub question_tags: RefCell<Vec<(Id, String)>>,
    pub tags: RefCell<Vec<Tag>>,
    pub answers: RefCell<Vec<Answer>>,
    pub votes: RefCell<Vec<Vote>>,
    pub bookmarks: RefCell<Vec<(EmailAddress, Id)>>,
    pub activities: RefCell<Vec<ActivityLogEntry>>,
}

pub fn register_user(db: &MockDb, email: &str, username: &str) -> EmailAddress {
    let email = EmailAddress::new_unchecked(email.to_string());
    create_new_user(
        db,
        NewUser {
            name: username.to_string(),
            username: username.to_string(),
            email: email.clone(),
            password: "secret123".to_string(),
        },
    )
    .unwrap();
    email
}

pub fn promote_to_admin(db: &MockDb, email: &EmailAddress) {
    let mut user = db.get_user_by_email(email).unwrap();
    user.role = Role::Admin;
    db.update_user(&user).unwrap();
}

pub fn new_question(title: &str, tags: &[&str]) -> NewQuestion {
    NewQuestion {
        title: title.to_string(),
        content: "Some elaborate description of the problem.".to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl MockDb {
    fn tags_of_question(&self, id: &Id) -> Vec<String> {
        self.question_tags
            .borrow()
            .iter()
            .filter(|(question_id, _)| question_id == id)
            .map(|(_, label)| label.clone())
            .collect()
    }

    fn with_tags(&self, question: &Question) -> Question {
        Question {
            tags: self.tags_of_question(&question.id),
            ..question.clone()
        }
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> Result<()> {
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.email == user.email)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()> {
        self.users.borrow_mut().retain(|u| u.email != *email);
        Ok(())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.try_get_user_by_username(username)?
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn query_users(&self, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>> {
        let mut users: Vec<_> = self
            .users
            .borrow()
            .iter()
            .filter(|u| {
                text.map(|t| {
                    contains_ignore_case(&u.username, t) || contains_ignore_case(&u.name, t)
                })
                .unwrap_or(true)
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| {
            b.reputation
                .cmp(&a.reputation)
                .then_with(|| a.username.cmp(&b.username))
        });
        Ok(paginate(users, pagination))
    }

    fn adjust_reputation(&self, username: &str, delta: i64) -> Result<()> {
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or(RepoError::NotFound)?;
        user.reputation += delta;
        Ok(())
    }

    fn user_stats(&self, username: &str) -> Result<UserStats> {
        let questions = self.questions.borrow();
        let answers = self.answers.borrow();
        let own_questions: Vec<_> = questions.iter().filter(|q| q.author == username).collect();
        let own_answers: Vec<_> = answers.iter().filter(|a| a.author == username).collect();
        Ok(UserStats {
            question_count: own_questions.len() as u64,
            answer_count: own_answers.len() as u64,
            question_up_votes: own_questions.iter().map(|q| q.up_votes).sum(),
            answer_up_votes: own_answers.iter().map(|a| a.up_votes).sum(),
            total_views: own_questions.iter().map(|q| q.view_count).sum(),
        })
    }
}

impl QuestionRepo for MockDb {
    fn create_question(&self, question: &Question) -> Result<()> {
        let mut joins = self.question_tags.borrow_mut();
        for label in &question.tags {
            joins.push((question.id.clone(), label.clone()));
        }
        self.questions.borrow_mut().push(question.clone());
        Ok(())
    }

    fn update_question(&self, question: &Question) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let existing = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(RepoError::NotFound)?;
        existing.title = question.title.clone();
        existing.content = question.content.clone();
        Ok(())
    }

    fn delete_question(&self, id: &Id) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let len = questions.len();
        questions.retain(|q| q.id != *id);
        if questions.len() == len {
            return Err(RepoError::NotFound);
        }
        self.question_tags
            .borrow_mut()
            .retain(|(question_id, _)| question_id != id);
        Ok(())
    }

    fn get_question(&self, id: &Id) -> Result<Question> {
        self.questions
            .borrow()
            .iter()
            .find(|q| q.id == *id)
            .map(|q| self.with_tags(q))
            .ok_or(RepoError::NotFound)
    }

    fn query_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
        let mut questions: Vec<_> = self
            .questions
            .borrow()
            .iter()
            .map(|q| self.with_tags(q))
            .filter(|q| {
                query
                    .text
                    .as_deref()
                    .map(|t| {
                        contains_ignore_case(&q.title, t) || contains_ignore_case(&q.content, t)
                    })
                    .unwrap_or(true)
            })
            .filter(|q| {
                query
                    .tag
                    .as_deref()
                    .map(|label| q.tags.iter().any(|t| t == label))
                    .unwrap_or(true)
            })
            .filter(|q| {
                query
                    .author
                    .as_deref()
                    .map(|author| q.author == author)
                    .unwrap_or(true)
            })
            .collect();
        match query.sort {
            QuestionSort::Newest => questions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            QuestionSort::MostViewed => questions.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
            QuestionSort::MostVoted => questions.sort_by(|a, b| b.score().cmp(&a.score())),
            QuestionSort::Unanswered => {
                questions.retain(|q| q.answer_count == 0);
                questions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
        }
        Ok(paginate(questions, &query.pagination))
    }

    fn count_questions(&self) -> Result<usize> {
        Ok(self.questions.borrow().len())
    }

    fn add_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        self.question_tags
            .borrow_mut()
            .push((id.clone(), label.to_string()));
        Ok(())
    }

    fn remove_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        self.question_tags
            .borrow_mut()
            .retain(|(question_id, l)| !(question_id == id && l == label));
        Ok(())
    }

    fn increment_view_count(&self, id: &Id) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let question = questions
            .iter_mut()
            .find(|q| q.id == *id)
            .ok_or(RepoError::NotFound)?;
        question.view_count += 1;
        Ok(())
    }

    fn adjust_answer_count(&self, id: &Id, delta: i64) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let question = questions
            .iter_mut()
            .find(|q| q.id == *id)
            .ok_or(RepoError::NotFound)?;
        question.answer_count = (question.answer_count as i64 + delta).max(0) as u64;
        Ok(())
    }

    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let question = questions
            .iter_mut()
            .find(|q| q.id == *id)
            .ok_or(RepoError::NotFound)?;
        let counter = match direction {
            VoteDirection::Up => &mut question.up_votes,
            VoteDirection::Down => &mut question.down_votes,
        };
        *counter = (*counter as i64 + delta).max(0) as u64;
        Ok(())
    }
}

impl AnswerRepo for MockDb {
    fn create_answer(&self, answer: &Answer) -> Result<()> {
        self.answers.borrow_mut().push(answer.clone());
        Ok(())
    }

    fn delete_answer(&self, id: &Id) -> Result<()> {
        let mut answers = self.answers.borrow_mut();
        let len = answers.len();
        answers.retain(|a| a.id != *id);
        if answers.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn get_answer(&self, id: &Id) -> Result<Answer> {
        self.answers
            .borrow()
            .iter()
            .find(|a| a.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn answers_of_question(
        &self,
        question_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Answer>> {
        let answers: Vec<_> = self
            .answers
            .borrow()
            .iter()
            .filter(|a| a.question_id == *question_id)
            .cloned()
            .collect();
        Ok(paginate(answers, pagination))
    }

    fn answers_of_user(&self, username: &str, pagination: &Pagination) -> Result<Vec<Answer>> {
        let mut answers: Vec<_> = self
            .answers
            .borrow()
            .iter()
            .filter(|a| a.author == username)
            .cloned()
            .collect();
        answers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(answers, pagination))
    }

    fn search_answers(&self, text: &str, limit: u64) -> Result<Vec<Answer>> {
        Ok(self
            .answers
            .borrow()
            .iter()
            .filter(|a| contains_ignore_case(&a.content, text))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        let mut answers = self.answers.borrow_mut();
        let answer = answers
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or(RepoError::NotFound)?;
        let counter = match direction {
            VoteDirection::Up => &mut answer.up_votes,
            VoteDirection::Down => &mut answer.down_votes,
        };
        *counter = (*counter as i64 + delta).max(0) as u64;
        Ok(())
    }
}

impl TagRepo for MockDb {
    fn add_tag_usage(&self, label: &str) -> Result<Tag> {
        let mut tags = self.tags.borrow_mut();
        if let Some(tag) = tags.iter_mut().find(|t| t.label == label) {
            tag.question_count += 1;
            return Ok(tag.clone());
        }
        let tag = Tag {
            label: label.to_string(),
            question_count: 1,
            created_at: Timestamp::now(),
        };
        tags.push(tag.clone());
        Ok(tag)
    }

    fn release_tag_usage(&self, label: &str) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        let tag = tags
            .iter_mut()
            .find(|t| t.label == label)
            .ok_or(RepoError::NotFound)?;
        tag.question_count = tag.question_count.saturating_sub(1);
        Ok(())
    }

    fn get_tag(&self, label: &str) -> Result<Tag> {
        self.tags
            .borrow()
            .iter()
            .find(|t| t.label == label)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }

    fn count_tags(&self) -> Result<usize> {
        Ok(self.tags.borrow().len())
    }

    fn query_tags(
        &self,
        text: Option<&str>,
        sort: TagSort,
        pagination: &Pagination,
    ) -> Result<Vec<Tag>> {
        let mut tags: Vec<_> = self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.question_count > 0)
            .filter(|t| {
                text.map(|needle| contains_ignore_case(&t.label, needle))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        match sort {
            TagSort::Popular => tags.sort_by(|a, b| {
                b.question_count
                    .cmp(&a.question_count)
                    .then_with(|| a.label.cmp(&b.label))
            }),
            TagSort::Name => tags.sort_by(|a, b| a.label.cmp(&b.label)),
            TagSort::Recent => tags.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        Ok(paginate(tags, pagination))
    }

    fn most_popular_tags(
        &self,
        params: &MostPopularTagsParams,
        pagination: &Pagination,
    ) -> Result<Vec<TagFrequency>> {
        let min_count = params.min_count.unwrap_or(1);
        let mut tags: Vec<_> = self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.question_count >= min_count)
            .filter(|t| {
                params
                    .max_count
                    .map(|max| t.question_count <= max)
                    .unwrap_or(true)
            })
            .map(|t| TagFrequency(t.label.clone(), t.question_count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(paginate(tags, pagination))
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.voter == vote.voter && v.content == vote.content)
        {
            return Err(RepoError::AlreadyExists);
        }
        votes.push(vote.clone());
        Ok(())
    }

    fn update_vote(&self, vote: &Vote) -> Result<()> {
        let mut votes = self.votes.borrow_mut();
        let existing = votes
            .iter_mut()
            .find(|v| v.voter == vote.voter && v.content == vote.content)
            .ok_or(RepoError::NotFound)?;
        *existing = vote.clone();
        Ok(())
    }

    fn delete_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<()> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| !(v.voter == *voter && v.content == *content));
        if votes.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn get_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| v.voter == *voter && v.content == *content)
            .cloned())
    }

    fn votes_of_content(&self, content: &ContentRef) -> Result<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.content == *content)
            .cloned()
            .collect())
    }

    fn delete_votes_of_content(&self, content: &ContentRef) -> Result<usize> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| v.content != *content);
        Ok(len - votes.len())
    }
}

impl CollectionRepo for MockDb {
    fn create_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        let mut bookmarks = self.bookmarks.borrow_mut();
        if bookmarks
            .iter()
            .any(|(u, q)| u == user && q == question_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        bookmarks.push((user.clone(), question_id.clone()));
        Ok(())
    }

    fn delete_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        let mut bookmarks = self.bookmarks.borrow_mut();
        let len = bookmarks.len();
        bookmarks.retain(|(u, q)| !(u == user && q == question_id));
        if bookmarks.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn is_question_saved(&self, user: &EmailAddress, question_id: &Id) -> Result<bool> {
        Ok(self
            .bookmarks
            .borrow()
            .iter()
            .any(|(u, q)| u == user && q == question_id))
    }

    fn saved_questions(
        &self,
        user: &EmailAddress,
        text: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Question>> {
        let questions: Vec<_> = self
            .bookmarks
            .borrow()
            .iter()
            .filter(|(u, _)| u == user)
            .filter_map(|(_, question_id)| self.get_question(question_id).ok())
            .filter(|q| {
                text.map(|t| contains_ignore_case(&q.title, t) || contains_ignore_case(&q.content, t))
                    .unwrap_or(true)
            })
            .collect();
        Ok(paginate(questions, pagination))
    }

    fn delete_bookmarks_of_question(&self, question_id: &Id) -> Result<usize> {
        let mut bookmarks = self.bookmarks.borrow_mut();
        let len = bookmarks.len();
        bookmarks.retain(|(_, q)| q != question_id);
        Ok(len - bookmarks.len())
    }
}

impl ActivityRepo for MockDb {
    fn log_activity(&self, entry: &ActivityLogEntry) -> Result<()> {
        self.activities.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn activities_of_user(
        &self,
        user: &EmailAddress,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityLogEntry>> {
        let mut activities: Vec<_> = self
            .activities
            .borrow()
            .iter()
            .filter(|entry| entry.activity.by.as_ref() == Some(user))
            .cloned()
            .collect();
        activities.reverse();
        Ok(paginate(activities, pagination))
    }
}
