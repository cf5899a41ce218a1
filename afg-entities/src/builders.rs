pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{answer_builder::*, question_builder::*, user_builder::*};

pub mod question_builder {

    use super::*;
    use crate::{id::*, question::*, time::*};

    #[derive(Debug)]
    pub struct QuestionBuild {
        question: Question,
    }

    impl QuestionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.question.id = id.into();
            self
        }
        pub fn author(mut self, username: &str) -> Self {
            self.question.author = username.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.question.title = title.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.question.content = content.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.question.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn votes(mut self, up: u64, down: u64) -> Self {
            self.question.up_votes = up;
            self.question.down_votes = down;
            self
        }
        pub fn finish(self) -> Question {
            self.question
        }
    }

    impl Builder for Question {
        type Build = QuestionBuild;
        fn build() -> QuestionBuild {
            QuestionBuild {
                question: Question {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    author: "".into(),
                    title: "".into(),
                    content: "".into(),
                    tags: vec![],
                    view_count: 0,
                    up_votes: 0,
                    down_votes: 0,
                    answer_count: 0,
                },
            }
        }
    }
}

pub mod answer_builder {

    use super::*;
    use crate::{answer::*, id::*, time::*};

    #[derive(Debug)]
    pub struct AnswerBuild {
        answer: Answer,
    }

    impl AnswerBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.answer.id = id.into();
            self
        }
        pub fn question_id(mut self, id: &str) -> Self {
            self.answer.question_id = id.into();
            self
        }
        pub fn author(mut self, username: &str) -> Self {
            self.answer.author = username.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.answer.content = content.into();
            self
        }
        pub fn finish(self) -> Answer {
            self.answer
        }
    }

    impl Builder for Answer {
        type Build = AnswerBuild;
        fn build() -> AnswerBuild {
            AnswerBuild {
                answer: Answer {
                    id: Id::new(),
                    question_id: Id::new(),
                    created_at: Timestamp::now(),
                    author: "".into(),
                    content: "".into(),
                    up_votes: 0,
                    down_votes: 0,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self.user.name = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    email: EmailAddress::new_unchecked("".into()),
                    email_confirmed: true,
                    password: Password::from_hash("".into()),
                    role: Role::User,
                    name: "".into(),
                    username: "".into(),
                    image: None,
                    bio: None,
                    location: None,
                    website: None,
                    reputation: 0,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
