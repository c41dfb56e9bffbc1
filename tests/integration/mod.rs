mod helpers;

mod category_test;
mod identity_test;
mod lesson_test;
mod message_test;
mod submission_test;
