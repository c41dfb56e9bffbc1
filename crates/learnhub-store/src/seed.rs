//! Startup seed data.
//!
//! Populates the stores with the demo accounts, categories, and lessons
//! the application ships with. The primary admin credentials come from
//! configuration; everything else is fixed demo content.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use learnhub_core::config::seed::SeedConfig;
use learnhub_entity::category::Category;
use learnhub_entity::lesson::Lesson;
use learnhub_entity::user::{User, UserRole};

use crate::Stores;

/// IDs of the seeded records that later operations need to reference.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    /// The primary (undeletable) admin account.
    pub admin_id: Uuid,
    /// The demo teacher account.
    pub teacher_id: Uuid,
    /// The demo student account.
    pub student_id: Uuid,
}

/// Seed the stores with demo data and return the key record IDs.
pub fn seed(stores: &Stores, config: &SeedConfig) -> SeedSummary {
    let now = Utc::now();

    let admin = User {
        id: Uuid::new_v4(),
        username: config.admin_username.clone(),
        password: config.admin_password.clone(),
        role: UserRole::Admin,
        created_at: now,
        full_name: None,
        rating: None,
        subject_area: None,
        student_number: None,
        email: None,
        phone: None,
    };

    let teacher = User {
        id: Uuid::new_v4(),
        username: "teacher1".into(),
        password: "teacher123".into(),
        role: UserRole::Teacher,
        created_at: now,
        full_name: Some("John Smith".into()),
        rating: Some(4.8),
        subject_area: Some("Programming".into()),
        student_number: None,
        email: None,
        phone: None,
    };

    let student = User {
        id: Uuid::new_v4(),
        username: "student1".into(),
        password: "student123".into(),
        role: UserRole::Student,
        created_at: now,
        full_name: Some("Alex Johnson".into()),
        rating: None,
        subject_area: None,
        student_number: Some("ST12345".into()),
        email: Some("alex@example.com".into()),
        phone: Some("+1-234-567-8901".into()),
    };

    let summary = SeedSummary {
        admin_id: admin.id,
        teacher_id: teacher.id,
        student_id: student.id,
    };

    stores.users.insert(admin);
    stores.users.insert(teacher);
    stores.users.insert(student);

    let web = Category {
        id: Uuid::new_v4(),
        name: "Web Development".into(),
        description: "Web development courses".into(),
        parent_id: None,
        created_at: now,
    };
    let frontend = Category {
        id: Uuid::new_v4(),
        name: "Frontend".into(),
        description: "Client-side frameworks and tooling".into(),
        parent_id: Some(web.id),
        created_at: now,
    };
    let mobile = Category {
        id: Uuid::new_v4(),
        name: "Mobile Development".into(),
        description: "Mobile app development courses".into(),
        parent_id: None,
        created_at: now,
    };

    stores.lessons.insert(Lesson {
        id: Uuid::new_v4(),
        title: "Introduction to React".into(),
        description: "Learn the basics of React".into(),
        video_url: "https://example.com/video1".into(),
        homework_file_url: None,
        category_id: web.id,
        created_at: now,
        teacher_id: Some(summary.teacher_id),
        due_date: Some(now),
    });
    stores.lessons.insert(Lesson {
        id: Uuid::new_v4(),
        title: "Advanced React Concepts".into(),
        description: "Learn advanced React patterns".into(),
        video_url: "https://youtu.be/YVkUvmDQ3HY".into(),
        homework_file_url: None,
        category_id: frontend.id,
        created_at: now,
        teacher_id: Some(summary.teacher_id),
        due_date: Some(now),
    });

    stores.categories.insert(web);
    stores.categories.insert(frontend);
    stores.categories.insert(mobile);

    info!(
        users = stores.users.len(),
        categories = stores.categories.len(),
        lessons = stores.lessons.len(),
        "Seeded demo data"
    );

    summary
}
