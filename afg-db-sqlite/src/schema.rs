///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        role -> SmallInt,
        name -> Text,
        username -> Text,
        image_url -> Nullable<Text>,
        bio -> Nullable<Text>,
        location -> Nullable<Text>,
        website_url -> Nullable<Text>,
        reputation -> BigInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Questions
///////////////////////////////////////////////////////////////////////

table! {
    questions (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> BigInt,
        title -> Text,
        content -> Text,
        view_count -> BigInt,
        up_votes -> BigInt,
        down_votes -> BigInt,
        answer_count -> BigInt,
    }
}

joinable!(questions -> users (created_by));

table! {
    question_tag (question_rowid, tag_label) {
        question_rowid -> BigInt,
        tag_label -> Text,
    }
}

joinable!(question_tag -> questions (question_rowid));

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (label) {
        label -> Text,
        question_count -> BigInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Answers
///////////////////////////////////////////////////////////////////////

table! {
    answers (rowid) {
        rowid -> BigInt,
        id -> Text,
        question_rowid -> BigInt,
        created_at -> BigInt,
        created_by -> BigInt,
        content -> Text,
        up_votes -> BigInt,
        down_votes -> BigInt,
    }
}

joinable!(answers -> questions (question_rowid));
joinable!(answers -> users (created_by));

///////////////////////////////////////////////////////////////////////
// Votes
///////////////////////////////////////////////////////////////////////

table! {
    votes (user_id, content_kind, content_id) {
        user_id -> BigInt,
        content_kind -> SmallInt,
        content_id -> Text,
        direction -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(votes -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Bookmarks
///////////////////////////////////////////////////////////////////////

table! {
    bookmarks (user_id, question_rowid) {
        user_id -> BigInt,
        question_rowid -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(bookmarks -> questions (question_rowid));
joinable!(bookmarks -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Activity journal
///////////////////////////////////////////////////////////////////////

table! {
    activity_log (rowid) {
        rowid -> BigInt,
        user_id -> Nullable<BigInt>,
        action -> SmallInt,
        content_kind -> SmallInt,
        content_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(activity_log -> users (user_id));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    activity_log,
    answers,
    bookmarks,
    questions,
    question_tag,
    tags,
    users,
    votes,
);
