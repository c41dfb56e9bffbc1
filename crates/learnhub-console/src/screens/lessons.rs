//! Lesson browsing for all authenticated roles.

use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use chrono::{DateTime, NaiveDate, Utc};

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::lesson::{Lesson, UpdateLesson};
use learnhub_service::lesson::{CreateLessonRequest, video};

use crate::prompt;
use crate::render::{self, OutputFormat};
use crate::screens::categories;
use crate::state::AppState;

/// Lesson display row for table output
#[derive(Debug, Serialize, Tabled)]
struct LessonRow {
    /// Title
    title: String,
    /// Category path
    category: String,
    /// Teacher
    teacher: String,
    /// Video ID
    video: String,
    /// Due date
    due: String,
    /// Created at
    created_at: String,
}

fn lesson_row(state: &AppState, lesson: &Lesson) -> LessonRow {
    LessonRow {
        title: lesson.title.clone(),
        category: state
            .categories
            .category_path(lesson.category_id)
            .unwrap_or_else(|e| format!("<{}>", e.kind)),
        teacher: state.identity.display_name(lesson.teacher_id),
        video: video::youtube_video_id(&lesson.video_url).unwrap_or_default(),
        due: lesson
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        created_at: lesson.created_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Browse lessons filtered by category subtree and search text.
pub fn browse(state: &AppState, format: OutputFormat) -> AppResult<()> {
    render::heading("Browse lessons");

    let selected = categories::pick(state, "Category", true)?;
    if let Some(id) = selected {
        categories::render_tree(&state.categories.tree(Some(id)));
    }
    let search = prompt::optional_text("Search")?.unwrap_or_default();

    let lessons = state.lessons.filtered(selected, &search);
    let rows: Vec<LessonRow> = lessons.iter().map(|l| lesson_row(state, l)).collect();
    render::list(&rows, format);

    if lessons.is_empty() || !prompt::confirm("Open a lesson?")? {
        return Ok(());
    }

    let labels: Vec<String> = lessons.iter().map(|l| l.title.clone()).collect();
    let index = prompt::select("Lesson", &labels)?;
    detail(state, &lessons[index])
}

/// Show a single lesson and offer homework submission to students.
fn detail(state: &AppState, lesson: &Lesson) -> AppResult<()> {
    let mut fields = vec![
        ("Description", lesson.description.clone()),
        (
            "Category",
            state
                .categories
                .category_path(lesson.category_id)
                .unwrap_or_else(|e| format!("<{}>", e.kind)),
        ),
        ("Teacher", state.identity.display_name(lesson.teacher_id)),
        ("Video URL", lesson.video_url.clone()),
    ];
    if let Some(id) = video::youtube_video_id(&lesson.video_url) {
        fields.push(("Video ID", id));
    }
    if let Some(url) = &lesson.homework_file_url {
        fields.push(("Homework file", url.clone()));
    }
    if let Some(due) = lesson.due_date {
        fields.push(("Due date", due.format("%Y-%m-%d").to_string()));
    }

    render::heading(&lesson.title);
    render::detail(&fields);

    let caller = state.caller()?;
    if !caller.can_manage_lessons() && prompt::confirm("Submit homework for this lesson?")? {
        submit_homework(state, lesson.id)?;
    }
    Ok(())
}

/// Lesson management menu for teachers and admins.
pub fn manage(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let actions = [
        "List my lessons",
        "Add lesson",
        "Edit lesson",
        "Delete lesson",
        "Back",
    ]
    .map(str::to_string);

    match prompt::select("Lessons", &actions)? {
        0 => list_owned(state, format),
        1 => add(state),
        2 => edit(state),
        3 => delete(state),
        _ => Ok(()),
    }
}

/// The lessons the caller is allowed to manage: everything for admins,
/// their own for teachers.
fn managed_lessons(state: &AppState) -> AppResult<Vec<Lesson>> {
    let caller = state.caller()?;
    Ok(if caller.is_admin() {
        state.lessons.all_lessons()
    } else {
        state.lessons.lessons_by_teacher(caller.user_id)
    })
}

fn pick_lesson(state: &AppState, label: &str) -> AppResult<Option<Lesson>> {
    let lessons = managed_lessons(state)?;
    if lessons.is_empty() {
        render::warning("No lessons to manage");
        return Ok(None);
    }
    let labels: Vec<String> = lessons.iter().map(|l| l.title.clone()).collect();
    let index = prompt::select(label, &labels)?;
    Ok(Some(lessons[index].clone()))
}

fn list_owned(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let lessons = managed_lessons(state)?;
    let rows: Vec<LessonRow> = lessons.iter().map(|l| lesson_row(state, l)).collect();
    render::list(&rows, format);
    Ok(())
}

fn add(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let title = prompt::text("Title")?;
    let description = prompt::optional_text("Description")?.unwrap_or_default();
    let video_url = prompt::text("Video URL")?;
    let homework_file_url = prompt::optional_text("Homework file URL")?;
    let Some(category_id) = categories::pick(state, "Category", false)? else {
        return Ok(());
    };
    let due_date = prompt_due_date()?;

    // Teachers always own their lessons; admins may assign another.
    let teacher_id = if caller.is_admin() && prompt::confirm("Assign to a teacher?")? {
        pick_teacher(state)?
    } else {
        None
    };

    let lesson = state.lessons.add_lesson(
        &caller,
        CreateLessonRequest {
            title,
            description,
            video_url,
            homework_file_url,
            category_id,
            teacher_id,
            due_date,
        },
    )?;
    render::success(&format!("Lesson '{}' created", lesson.title));
    Ok(())
}

fn edit(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let Some(lesson) = pick_lesson(state, "Lesson to edit")? else {
        return Ok(());
    };

    let title = prompt::optional_text("New title")?;
    let description = prompt::optional_text("New description")?;
    let video_url = prompt::optional_text("New video URL")?;
    let homework_file_url = prompt::optional_text("New homework file URL")?;
    let category_id = if prompt::confirm("Move to another category?")? {
        categories::pick(state, "New category", false)?
    } else {
        None
    };
    let due_date = prompt_due_date()?;

    let updated = state.lessons.update_lesson(
        &caller,
        lesson.id,
        UpdateLesson {
            title,
            description,
            video_url,
            homework_file_url,
            category_id,
            due_date,
        },
    )?;
    render::success(&format!("Lesson '{}' updated", updated.title));
    Ok(())
}

fn delete(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let Some(lesson) = pick_lesson(state, "Lesson to delete")? else {
        return Ok(());
    };
    if !prompt::confirm("Delete this lesson?")? {
        return Ok(());
    }
    state.lessons.delete_lesson(&caller, lesson.id)?;
    render::success("Lesson deleted");
    Ok(())
}

fn pick_teacher(state: &AppState) -> AppResult<Option<Uuid>> {
    let teachers = state.identity.teachers();
    if teachers.is_empty() {
        render::warning("No teachers registered");
        return Ok(None);
    }
    let labels: Vec<String> = teachers
        .iter()
        .map(|t| t.full_name.clone().unwrap_or_else(|| t.username.clone()))
        .collect();
    let index = prompt::select("Teacher", &labels)?;
    Ok(Some(teachers[index].id))
}

fn prompt_due_date() -> AppResult<Option<DateTime<Utc>>> {
    let Some(raw) = prompt::optional_text("Due date (YYYY-MM-DD)")? else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date: '{raw}'")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::validation(format!("Invalid date: '{raw}'")))?;
    Ok(Some(midnight.and_utc()))
}

fn submit_homework(state: &AppState, lesson_id: Uuid) -> AppResult<()> {
    let caller = state.caller()?;
    let content = prompt::text("Homework text")?;
    let submission = state
        .submissions
        .submit_homework(&caller, lesson_id, content.into_bytes())?;
    render::success(&format!("Homework submitted ({})", submission.file_url));
    Ok(())
}
